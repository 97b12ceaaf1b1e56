use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interactive UI pattern a generated section can be rendered with.
///
/// `tab`, `accordion` and `modal` have companion script classes that must be
/// registered in the client manifest; `carousel` is driven by an external
/// slider library, and `grid` and `list` are static markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UiPattern {
    Tab,
    Accordion,
    Grid,
    Carousel,
    List,
    Modal,
}

impl UiPattern {
    /// Lowercase name as used in prompts, schemas and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tab => "tab",
            Self::Accordion => "accordion",
            Self::Grid => "grid",
            Self::Carousel => "carousel",
            Self::List => "list",
            Self::Modal => "modal",
        }
    }
}
