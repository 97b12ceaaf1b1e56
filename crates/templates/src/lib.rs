//! # Sitegen Templates
//!
//! Markup and style skeleton rendering for scaffolded site content.
//!
//! Rendering is keyed by a content kind or an explicit [`UiPattern`]:
//!
//! ```text
//! SectionConfig / PageConfig / ComponentConfig
//!     │
//!     ├──> kind → pattern mapping (fixed table)
//!     │
//!     └──> template assembly → component / page / style text
//! ```
//!
//! Every renderer is a pure function returning the final file text; writing
//! the files is the caller's job. The only fallible entry point is schema
//! generation, which has to decode a caller-supplied source first.
//!
//! [`UiPattern`]: sitegen_editors::UiPattern

mod casing;
mod classes;
mod components;
mod error;
mod markdown;
mod pages;
mod schema;
mod sections;
mod styles;
mod ui_patterns;

pub use casing::{to_kebab_case, to_pascal_case, to_snake_case};
pub use classes::{button_class, scroll_animation_class, ScrollDirection, UTILITY_CLASSES};
pub use components::{render_component, render_component_styles, ComponentConfig, ScssDesign};
pub use error::{Result, TemplateError};
pub use markdown::{infer_markdown_structure, MarkdownBlock, MarkdownSection, MarkdownStructure};
pub use pages::{render_page, Breadcrumb, PageConfig, PageHead};
pub use schema::{infer_structure_from_text, parse_schema_source, render_type_definition};
pub use sections::{pattern_for_kind, render_section, SectionConfig};
pub use styles::{render_section_styles, SpacingOptions, StylePatternConfig};
pub use ui_patterns::{render_ui_pattern, UiOptions, UiPatternConfig};
