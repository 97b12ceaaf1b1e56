//! Site configuration editor.
//!
//! Patches the generated site-wide configuration document: scalar fields of
//! the `head` record are updated in place, and the `menu` collection is
//! re-serialized and spliced over the existing one wholesale.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scan;

/// Scalar `head` fields of the configuration document.
///
/// Only fields that are `Some` are touched. A key the document does not
/// already contain is skipped: this editor updates assignments, it never
/// inserts them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeadConfig {
    pub site_name: Option<String>,
    pub domain: Option<String>,
    pub favicon: Option<String>,
    pub og_img: Option<String>,
    pub logo: Option<String>,
    pub copyright: Option<String>,
    pub webfont: Option<String>,
    pub twitter_name: Option<String>,
    #[serde(rename = "facebookID")]
    pub facebook_id: Option<String>,
}

impl HeadConfig {
    /// Document keys paired with the values requested for them.
    fn entries(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("siteName", self.site_name.as_deref()),
            ("domain", self.domain.as_deref()),
            ("favicon", self.favicon.as_deref()),
            ("ogImg", self.og_img.as_deref()),
            ("logo", self.logo.as_deref()),
            ("copyright", self.copyright.as_deref()),
            ("webfont", self.webfont.as_deref()),
            ("twitterName", self.twitter_name.as_deref()),
            ("facebookID", self.facebook_id.as_deref()),
        ]
    }
}

/// One entry of the navigation menu tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MenuItem {
    pub link: String,
    pub txt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<Vec<MenuItem>>,
}

/// Declarative change set for the configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SiteConfig {
    pub head: Option<HeadConfig>,
    pub menu: Option<Vec<MenuItem>>,
}

/// `menu: [ ... ]` up to the first closing bracket. A heuristic, not a
/// balanced parse: an existing serialization that nests brackets is replaced
/// best-effort from its opening bracket to the first `]`.
static MENU_REGION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"menu:\s*\[[^\]]*\]").expect("static pattern"));

/// Update the value of every provided `head` field that already exists in
/// the document. Keys, field order and all surrounding text stay untouched.
#[must_use]
pub fn update_head(text: &str, head: &HeadConfig) -> String {
    let mut updated = text.to_string();
    for (key, value) in head.entries() {
        let Some(value) = value else { continue };
        let Some(assignment) = scan::keyed_assignment(key) else {
            continue;
        };
        if !assignment.is_match(&updated) {
            log::debug!("head key '{key}' not present; skipped");
            continue;
        }
        updated = assignment
            .replace_all(&updated, |captures: &regex::Captures<'_>| {
                format!("{}\"{value}\"", &captures[1])
            })
            .into_owned();
    }
    updated
}

/// Serialize `items` and splice the result over the existing `menu`
/// collection. Without a `menu: [` assignment in the document this is a
/// no-op.
#[must_use]
pub fn replace_menu(text: &str, items: &[MenuItem]) -> String {
    let replacement = format!("menu: {}", format_menu(items, 2));
    MENU_REGION
        .replace(text, NoExpand(&replacement))
        .into_owned()
}

/// Apply the head update first, then the menu replacement. The two edits
/// are independent regex-local patches and never interact.
#[must_use]
pub fn patch_site_config(text: &str, config: &SiteConfig) -> String {
    let mut updated = text.to_string();
    if let Some(head) = &config.head {
        updated = update_head(&updated, head);
    }
    if let Some(menu) = &config.menu {
        updated = replace_menu(&updated, menu);
    }
    updated
}

/// Bracketed-record serialization: 2-space base indent, four more per
/// nesting level, boolean flags emitted only when set, trailing comma on
/// every sibling except the last.
fn format_menu(items: &[MenuItem], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut lines = vec!["[".to_string()];
    for (position, item) in items.iter().enumerate() {
        lines.push(format!("{pad}  {{"));
        lines.push(format!("{pad}    link: \"{}\",", item.link));
        lines.push(format!("{pad}    txt: \"{}\",", item.txt));
        if let Some(anchor) = item.anchor {
            lines.push(format!("{pad}    anchor: {anchor},"));
        }
        if let Some(blank) = item.blank {
            lines.push(format!("{pad}    blank: {blank},"));
        }
        if let Some(child) = item.child.as_deref().filter(|c| !c.is_empty()) {
            lines.push(format!("{pad}    child: {},", format_menu(child, indent + 4)));
        }
        let comma = if position + 1 < items.len() { "," } else { "" };
        lines.push(format!("{pad}  }}{comma}"));
    }
    lines.push(format!("{pad}]"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COMMON: &str = concat!(
        "---\n",
        "const config = {\n",
        "  head: {\n",
        "    siteName: \"Old Site\",\n",
        "    domain: \"https://example.com\",\n",
        "    ogImg: \"/ogp.png\",\n",
        "  },\n",
        "  menu: [\n",
        "    {\n",
        "      link: \"/\",\n",
        "      txt: \"Home\",\n",
        "    },\n",
        "    {\n",
        "      link: \"/about/\",\n",
        "      txt: \"About\",\n",
        "    }\n",
        "  ],\n",
        "};\n",
        "---\n",
    );

    fn head(site_name: &str) -> HeadConfig {
        HeadConfig {
            site_name: Some(site_name.to_string()),
            ..HeadConfig::default()
        }
    }

    #[test]
    fn scalar_update_touches_only_the_targeted_value() {
        let updated = update_head(COMMON, &head("New Site"));
        assert_eq!(updated, COMMON.replace("Old Site", "New Site"));
    }

    #[test]
    fn absent_key_is_skipped_without_insertion() {
        let config = HeadConfig {
            webfont: Some("https://fonts.example.com".to_string()),
            ..HeadConfig::default()
        };
        assert_eq!(update_head(COMMON, &config), COMMON);
    }

    #[test]
    fn head_update_leaves_menu_bytes_alone() {
        let config = SiteConfig {
            head: Some(head("New Site")),
            menu: None,
        };
        let updated = patch_site_config(COMMON, &config);
        assert_eq!(updated, COMMON.replace("Old Site", "New Site"));
        assert!(updated.contains("txt: \"About\""));
    }

    #[test]
    fn menu_serialization_shape() {
        let items = vec![
            MenuItem {
                link: "/".to_string(),
                txt: "Home".to_string(),
                anchor: None,
                blank: None,
                child: None,
            },
            MenuItem {
                link: "/news/".to_string(),
                txt: "News".to_string(),
                anchor: None,
                blank: Some(true),
                child: None,
            },
        ];
        let expected = concat!(
            "[\n",
            "    {\n",
            "      link: \"/\",\n",
            "      txt: \"Home\",\n",
            "    },\n",
            "    {\n",
            "      link: \"/news/\",\n",
            "      txt: \"News\",\n",
            "      blank: true,\n",
            "    }\n",
            "  ]",
        );
        assert_eq!(format_menu(&items, 2), expected);
    }

    #[test]
    fn nested_child_gains_four_spaces_per_level() {
        let items = vec![MenuItem {
            link: "/services/".to_string(),
            txt: "Services".to_string(),
            anchor: None,
            blank: None,
            child: Some(vec![MenuItem {
                link: "/services/web/".to_string(),
                txt: "Web".to_string(),
                anchor: Some(true),
                blank: None,
                child: None,
            }]),
        }];
        let expected = concat!(
            "[\n",
            "    {\n",
            "      link: \"/services/\",\n",
            "      txt: \"Services\",\n",
            "      child: [\n",
            "        {\n",
            "          link: \"/services/web/\",\n",
            "          txt: \"Web\",\n",
            "          anchor: true,\n",
            "        }\n",
            "      ],\n",
            "    }\n",
            "  ]",
        );
        assert_eq!(format_menu(&items, 2), expected);
    }

    #[test]
    fn menu_replacement_keeps_head_and_tail() {
        let items = vec![MenuItem {
            link: "/".to_string(),
            txt: "Top".to_string(),
            anchor: None,
            blank: None,
            child: None,
        }];
        let updated = replace_menu(COMMON, &items);
        assert!(updated.contains("siteName: \"Old Site\""));
        assert!(updated.contains("txt: \"Top\""));
        assert!(!updated.contains("txt: \"About\""));
        assert!(updated.ends_with("};\n---\n"));
    }

    #[test]
    fn replace_without_menu_assignment_is_a_no_op() {
        let text = "const config = { head: {} };\n";
        let items = vec![MenuItem {
            link: "/".to_string(),
            txt: "Top".to_string(),
            anchor: None,
            blank: None,
            child: None,
        }];
        assert_eq!(replace_menu(text, &items), text);
    }

    #[test]
    fn apply_is_idempotent_for_flat_menus() {
        let config = SiteConfig {
            head: Some(head("New Site")),
            menu: Some(vec![
                MenuItem {
                    link: "/".to_string(),
                    txt: "Home".to_string(),
                    anchor: None,
                    blank: None,
                    child: None,
                },
                MenuItem {
                    link: "/about/".to_string(),
                    txt: "About".to_string(),
                    anchor: None,
                    blank: None,
                    child: None,
                },
            ]),
        };
        let once = patch_site_config(COMMON, &config);
        let twice = patch_site_config(&once, &config);
        assert_eq!(twice, once);
    }
}
