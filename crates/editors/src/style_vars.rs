//! Style variable editor.
//!
//! Patches the generated style variable sheet across three independent
//! categories: `$color-*` declarations, the three layout metrics, and the
//! ten responsive font-size pairs. Every category updates declarations that
//! already exist and never inserts new ones.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Desktop/mobile font size pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FontSizePair {
    pub pc: u32,
    pub sp: u32,
}

/// The ten fixed font-size names of the sheet, in declaration order.
pub const FONT_SIZE_NAMES: [&str; 10] =
    ["h1", "h2", "h3", "h4", "h5", "xl", "lg", "base", "sm", "xs"];

/// Requested values for the fixed font-size declarations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
pub struct FontSizes {
    pub h1: Option<FontSizePair>,
    pub h2: Option<FontSizePair>,
    pub h3: Option<FontSizePair>,
    pub h4: Option<FontSizePair>,
    pub h5: Option<FontSizePair>,
    pub xl: Option<FontSizePair>,
    pub lg: Option<FontSizePair>,
    pub base: Option<FontSizePair>,
    pub sm: Option<FontSizePair>,
    pub xs: Option<FontSizePair>,
}

impl FontSizes {
    /// Name/value pairs in [`FONT_SIZE_NAMES`] order.
    fn entries(&self) -> [(&'static str, Option<FontSizePair>); 10] {
        [
            ("h1", self.h1),
            ("h2", self.h2),
            ("h3", self.h3),
            ("h4", self.h4),
            ("h5", self.h5),
            ("xl", self.xl),
            ("lg", self.lg),
            ("base", self.base),
            ("sm", self.sm),
            ("xs", self.xs),
        ]
    }
}

/// The three fixed layout metrics, single integers each.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutVars {
    pub brake_point: Option<u32>,
    pub container_size: Option<u32>,
    pub container_padding: Option<u32>,
}

/// Declarative change set for the style sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Color names, with or without the `color-` prefix.
    pub colors: Option<BTreeMap<String, String>>,
    pub layout: Option<LayoutVars>,
    pub font_sizes: Option<FontSizes>,
}

static BRAKE_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$brakePoint:\s*\d+;").expect("static pattern"));
static CONTAINER_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$containerSize:\s*\d+;").expect("static pattern"));
static CONTAINER_PADDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$containerPadding:\s*\d+;").expect("static pattern"));

/// Precompiled `$name: <pc>, <sp>;` patterns, in [`FONT_SIZE_NAMES`] order.
static FONT_SIZE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    FONT_SIZE_NAMES
        .iter()
        .map(|name| {
            Regex::new(&format!(r"\${name}:\s*\d+,\s*\d+;")).expect("static pattern")
        })
        .collect()
});

/// Update every `$color-<name>` declaration present in the sheet to its
/// requested value. Names not declared are skipped.
#[must_use]
pub fn update_colors(text: &str, colors: &BTreeMap<String, String>) -> String {
    let mut updated = text.to_string();
    for (name, value) in colors {
        let name = name.strip_prefix("color-").unwrap_or(name);
        let pattern = format!(r"\$color-{}:\s*[^;]+;", regex::escape(name));
        let Ok(declaration) = Regex::new(&pattern) else {
            log::debug!("unusable color name '{name}'");
            continue;
        };
        if !declaration.is_match(&updated) {
            log::debug!("color '{name}' not declared; skipped");
            continue;
        }
        let replacement = format!("$color-{name}: {value};");
        updated = declaration
            .replace_all(&updated, NoExpand(&replacement))
            .into_owned();
    }
    updated
}

/// Update the layout metrics that are both requested and declared.
#[must_use]
pub fn update_layout(text: &str, layout: &LayoutVars) -> String {
    let mut updated = text.to_string();
    let metrics: [(&Lazy<Regex>, &str, Option<u32>); 3] = [
        (&BRAKE_POINT, "brakePoint", layout.brake_point),
        (&CONTAINER_SIZE, "containerSize", layout.container_size),
        (&CONTAINER_PADDING, "containerPadding", layout.container_padding),
    ];
    for (pattern, name, requested) in metrics {
        let Some(value) = requested else { continue };
        let replacement = format!("${name}: {value};");
        updated = pattern
            .replace(&updated, NoExpand(&replacement))
            .into_owned();
    }
    updated
}

/// Update both components of every requested font-size pair that is already
/// declared in the sheet.
#[must_use]
pub fn update_font_sizes(text: &str, sizes: &FontSizes) -> String {
    let mut updated = text.to_string();
    for ((name, requested), pattern) in sizes.entries().into_iter().zip(FONT_SIZE_PATTERNS.iter())
    {
        let Some(pair) = requested else { continue };
        let replacement = format!("${name}: {}, {};", pair.pc, pair.sp);
        updated = pattern
            .replace_all(&updated, NoExpand(&replacement))
            .into_owned();
    }
    updated
}

/// Run the three category updates in sequence: colors, layout, font sizes.
/// Each is independently idempotent and a no-op for absent keys.
#[must_use]
pub fn patch_style_vars(text: &str, config: &StyleConfig) -> String {
    let mut updated = text.to_string();
    if let Some(colors) = &config.colors {
        updated = update_colors(&updated, colors);
    }
    if let Some(layout) = &config.layout {
        updated = update_layout(&updated, layout);
    }
    if let Some(sizes) = &config.font_sizes {
        updated = update_font_sizes(&updated, sizes);
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VARIABLES: &str = concat!(
        "$color-body: #fff;\n",
        "$color-txt: #333;\n",
        "$color-prime: #111;\n",
        "\n",
        "$brakePoint: 768;\n",
        "$containerSize: 1080;\n",
        "$containerPadding: 40;\n",
        "\n",
        "$h1: 64, 40;\n",
        "$h2: 48, 32;\n",
        "$base: 16, 14;\n",
    );

    fn colors(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn declared_color_updates_and_absent_color_stays_absent() {
        let updated = update_colors(VARIABLES, &colors(&[("prime", "#222"), ("second", "#333")]));
        assert_eq!(updated, VARIABLES.replace("$color-prime: #111;", "$color-prime: #222;"));
        assert!(!updated.contains("$color-second"));
    }

    #[test]
    fn color_names_accept_the_prefixed_form() {
        let updated = update_colors(VARIABLES, &colors(&[("color-txt", "#000")]));
        assert!(updated.contains("$color-txt: #000;"));
        assert!(updated.contains("$color-body: #fff;"));
    }

    #[test]
    fn font_size_pair_rewrites_both_components_on_one_line() {
        let sizes = FontSizes {
            h1: Some(FontSizePair { pc: 72, sp: 44 }),
            ..FontSizes::default()
        };
        let updated = update_font_sizes(VARIABLES, &sizes);
        assert_eq!(updated, VARIABLES.replace("$h1: 64, 40;", "$h1: 72, 44;"));
    }

    #[test]
    fn undeclared_font_size_is_not_inserted() {
        let sizes = FontSizes {
            xs: Some(FontSizePair { pc: 12, sp: 10 }),
            ..FontSizes::default()
        };
        assert_eq!(update_font_sizes(VARIABLES, &sizes), VARIABLES);
    }

    #[test]
    fn layout_metrics_update_independently() {
        let layout = LayoutVars {
            brake_point: Some(750),
            container_size: None,
            container_padding: Some(32),
        };
        let updated = update_layout(VARIABLES, &layout);
        assert!(updated.contains("$brakePoint: 750;"));
        assert!(updated.contains("$containerSize: 1080;"));
        assert!(updated.contains("$containerPadding: 32;"));
    }

    #[test]
    fn apply_is_idempotent() {
        let config = StyleConfig {
            colors: Some(colors(&[("prime", "#4f46e5"), ("body", "#fafafa")])),
            layout: Some(LayoutVars {
                brake_point: Some(750),
                container_size: Some(1200),
                container_padding: Some(24),
            }),
            font_sizes: Some(FontSizes {
                h1: Some(FontSizePair { pc: 72, sp: 44 }),
                base: Some(FontSizePair { pc: 18, sp: 15 }),
                ..FontSizes::default()
            }),
        };
        let once = patch_style_vars(VARIABLES, &config);
        let twice = patch_style_vars(&once, &config);
        assert_eq!(twice, once);
    }

    #[test]
    fn value_with_dollar_sign_is_spliced_literally() {
        let updated = update_colors(VARIABLES, &colors(&[("txt", "$color-body")]));
        assert!(updated.contains("$color-txt: $color-body;"));
    }
}
