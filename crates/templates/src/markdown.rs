//! Markdown structure inference.
//!
//! Splits a markdown body into sections on H2 headings; H3 headings and
//! plain text become content blocks, list items are collected per section.
//! Text before the first H2 is dropped.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inferred document structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MarkdownStructure {
    pub sections: Vec<MarkdownSection>,
}

/// One H2-delimited section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MarkdownSection {
    pub ttl: String,
    #[serde(default)]
    pub content: Vec<MarkdownBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

/// A content block inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarkdownBlock {
    Subtitle { text: String },
    Text { text: String },
}

/// Infer the section structure of a markdown body.
#[must_use]
pub fn infer_markdown_structure(body: &str) -> MarkdownStructure {
    let mut structure = MarkdownStructure::default();
    let mut current: Option<MarkdownSection> = None;

    for line in body.lines() {
        if let Some(title) = line.strip_prefix("## ") {
            if let Some(section) = current.take() {
                structure.sections.push(section);
            }
            current = Some(MarkdownSection {
                ttl: title.trim().to_string(),
                content: Vec::new(),
                items: Vec::new(),
            });
        } else if let Some(subtitle) = line.strip_prefix("### ") {
            if let Some(section) = current.as_mut() {
                section.content.push(MarkdownBlock::Subtitle {
                    text: subtitle.trim().to_string(),
                });
            }
        } else if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            if let Some(section) = current.as_mut() {
                section.items.push(item.trim().to_string());
            }
        } else if !line.trim().is_empty() {
            if let Some(section) = current.as_mut() {
                section.content.push(MarkdownBlock::Text {
                    text: line.trim().to_string(),
                });
            }
        }
    }

    if let Some(section) = current.take() {
        structure.sections.push(section);
    }
    structure
}
