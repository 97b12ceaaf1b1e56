//! # Sitegen Editors
//!
//! Incremental text patchers for the generated files a scaffolding run has to
//! touch after the fact: the client script manifest, the site configuration
//! document, and the style variable sheet.
//!
//! ## Philosophy
//!
//! The target files are the source of truth. Every operation re-derives what
//! it needs from the raw text on each call, splices new content at textual
//! anchors, and leaves every untouched line byte-for-byte intact:
//!
//! ```text
//! Artifact text
//!     │
//!     ├──> Signature scan (what is already declared / activated / assigned?)
//!     │
//!     ├──> Anchor location (last import, lifecycle block, keyed assignment)
//!     │
//!     └──> String splice → new artifact text
//! ```
//!
//! Applying the same change set twice yields no further edits, and a missing
//! anchor degrades to a partial or no-op result instead of an error. None of
//! the patchers perform I/O; callers read and write the files.
//!
//! ## Example
//!
//! ```rust
//! use sitegen_editors::{patch_manifest, required_scripts, UiPattern};
//!
//! let manifest = "window.addEventListener(\"load\", () => {\n});\n";
//! let patched = patch_manifest(manifest, required_scripts(UiPattern::Tab));
//! assert!(patched.contains("import { Tab } from \"./class/Tab.ts\";"));
//! assert!(patched.contains("  new Tab();"));
//! ```

mod anchor;
mod manifest;
mod scan;
mod site_config;
mod style_vars;
mod types;

pub use manifest::{needs_update, patch_manifest, required_scripts};
pub use site_config::{patch_site_config, replace_menu, update_head};
pub use site_config::{HeadConfig, MenuItem, SiteConfig};
pub use style_vars::{patch_style_vars, update_colors, update_font_sizes, update_layout};
pub use style_vars::{FontSizePair, FontSizes, LayoutVars, StyleConfig, FONT_SIZE_NAMES};
pub use types::UiPattern;
