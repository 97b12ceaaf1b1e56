//! Per-section style skeletons.
//!
//! One style block per scaffolded section, keyed by UI pattern. Patterns
//! with a companion component stylesheet (tab, accordion, modal) only emit
//! the page-local customizations on top of it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sitegen_editors::UiPattern;

/// Spacing overrides for a section style block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacingOptions {
    pub section_padding: Option<String>,
    pub item_gap: Option<String>,
}

/// Input for [`render_section_styles`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StylePatternConfig {
    pub pattern: UiPattern,
    pub page_name: String,
    pub section_name: String,
    #[serde(default)]
    pub spacing: SpacingOptions,
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default = "default_has_image")]
    pub has_image: bool,
}

const fn default_columns() -> u32 {
    3
}

const fn default_has_image() -> bool {
    true
}

/// Render the style block for one scaffolded section.
#[must_use]
pub fn render_section_styles(config: &StylePatternConfig) -> String {
    let mut out = banner(config);
    out.push_str(&section_shell(config));
    out.push_str(&match config.pattern {
        UiPattern::Tab => tab_rules(),
        UiPattern::Accordion => accordion_rules(config),
        UiPattern::Grid => grid_rules(config),
        UiPattern::Carousel => carousel_rules(config),
        UiPattern::List => list_rules(config),
        UiPattern::Modal => modal_rules(config),
    });
    out.push_str("}\n");
    out
}

fn banner(config: &StylePatternConfig) -> String {
    format!(
        concat!(
            "// ================================================\n",
            "// {page} page - {section} section ({pattern} UI)\n",
            "// ================================================\n",
            "\n",
        ),
        page = config.page_name,
        section = config.section_name,
        pattern = config.pattern.as_str(),
    )
}

/// Section wrapper plus the shared title rules.
fn section_shell(config: &StylePatternConfig) -> String {
    let padding = config
        .spacing
        .section_padding
        .as_deref()
        .unwrap_or("6rem 0");
    let padding_wide = config
        .spacing
        .section_padding
        .as_deref()
        .unwrap_or("8rem 0");
    format!(
        concat!(
            ".{section}_section {{\n",
            "  padding: {padding};\n",
            "\n",
            "  @include mq() {{\n",
            "    padding: {padding_wide};\n",
            "  }}\n",
            "\n",
            "  .section_ttl {{\n",
            "    margin-bottom: 3.2rem;\n",
            "    @include fontsize(24, 20);\n",
            "    font-weight: bold;\n",
            "    color: $color-prime;\n",
            "    text-align: center;\n",
            "\n",
            "    @include mq() {{\n",
            "      margin-bottom: 4rem;\n",
            "    }}\n",
            "  }}\n",
            "\n",
        ),
        section = config.section_name,
        padding = padding,
        padding_wide = padding_wide,
    )
}

fn tab_rules() -> String {
    concat!(
        "  // Active state comes from the shared tab stylesheet.\n",
        "  .c_tab_list {\n",
        "    display: flex;\n",
        "    gap: 0.8rem;\n",
        "    justify-content: center;\n",
        "    margin-bottom: 3.2rem;\n",
        "\n",
        "    @include mq() {\n",
        "      gap: 1.6rem;\n",
        "      margin-bottom: 4rem;\n",
        "    }\n",
        "\n",
        "    li button {\n",
        "      padding: 1.2rem 2.4rem;\n",
        "      @include fontsize(16, 14);\n",
        "      font-weight: bold;\n",
        "      color: $color-txt;\n",
        "      background-color: $color-bg;\n",
        "      border: 0.2rem solid $color-prime;\n",
        "      border-radius: 0.4rem;\n",
        "      cursor: pointer;\n",
        "      transition: $easing;\n",
        "\n",
        "      @include mq() {\n",
        "        padding: 1.6rem 3.2rem;\n",
        "      }\n",
        "\n",
        "      @include hover() {\n",
        "        background-color: rgba($color-prime, 0.1);\n",
        "      }\n",
        "    }\n",
        "  }\n",
        "\n",
        "  .c_tab_content {\n",
        "    padding: 3.2rem 0;\n",
        "\n",
        "    @include mq() {\n",
        "      padding: 4rem 0;\n",
        "    }\n",
        "  }\n",
    )
    .to_string()
}

fn accordion_rules(config: &StylePatternConfig) -> String {
    let gap = config.spacing.item_gap.as_deref().unwrap_or("1.6rem");
    format!(
        concat!(
            "  .accordion_list {{\n",
            "    display: grid;\n",
            "    gap: {gap};\n",
            "  }}\n",
            "\n",
            "  .accordion_item {{\n",
            "    background: $color-bg;\n",
            "    border: 0.1rem solid rgba($color-prime, 0.2);\n",
            "    border-radius: 0.8rem;\n",
            "\n",
            "    &_ttl {{\n",
            "      padding: 2rem 5rem 2rem 2rem;\n",
            "      @include fontsize(18, 16);\n",
            "      font-weight: bold;\n",
            "      color: $color-txt;\n",
            "\n",
            "      @include mq() {{\n",
            "        padding: 2.4rem 6rem 2.4rem 2.4rem;\n",
            "      }}\n",
            "\n",
            "      @include hover() {{\n",
            "        background-color: rgba($color-prime, 0.05);\n",
            "      }}\n",
            "    }}\n",
            "\n",
            "    &_content_text {{\n",
            "      padding: 0 2rem 2rem;\n",
            "      @include fontsize(16, 14);\n",
            "      line-height: 1.8;\n",
            "      color: $color-txt;\n",
            "\n",
            "      @include mq() {{\n",
            "        padding: 0 2.4rem 2.4rem;\n",
            "      }}\n",
            "    }}\n",
            "  }}\n",
        ),
        gap = gap,
    )
}

fn grid_rules(config: &StylePatternConfig) -> String {
    let gap = config.spacing.item_gap.as_deref().unwrap_or("2.4rem");
    let image_rules = if config.has_image {
        concat!(
            "\n",
            "    &_img {\n",
            "      aspect-ratio: 16 / 9;\n",
            "      overflow: hidden;\n",
            "      background-color: rgba($color-prime, 0.05);\n",
            "\n",
            "      img {\n",
            "        width: 100%;\n",
            "        height: 100%;\n",
            "        object-fit: cover;\n",
            "      }\n",
            "    }\n",
        )
    } else {
        ""
    };
    format!(
        concat!(
            "  .grid_list {{\n",
            "    display: grid;\n",
            "    grid-template-columns: 1fr;\n",
            "    gap: {gap};\n",
            "\n",
            "    @include mq() {{\n",
            "      grid-template-columns: repeat({columns}, 1fr);\n",
            "    }}\n",
            "  }}\n",
            "\n",
            "  .grid_item {{\n",
            "    background: $color-bg;\n",
            "    border: 0.1rem solid rgba($color-prime, 0.2);\n",
            "    border-radius: 0.8rem;\n",
            "    overflow: hidden;\n",
            "    transition: $easing;\n",
            "\n",
            "    @include hover() {{\n",
            "      transform: translateY(-0.4rem);\n",
            "      box-shadow: 0 0.8rem 2.4rem rgba($color-prime, 0.15);\n",
            "    }}\n",
            "{image_rules}",
            "\n",
            "    &_body {{\n",
            "      padding: 2rem;\n",
            "\n",
            "      @include mq() {{\n",
            "        padding: 2.4rem;\n",
            "      }}\n",
            "    }}\n",
            "\n",
            "    &_ttl {{\n",
            "      margin-bottom: 0.8rem;\n",
            "      @include fontsize(18, 16);\n",
            "      font-weight: bold;\n",
            "      color: $color-txt;\n",
            "    }}\n",
            "\n",
            "    &_desc {{\n",
            "      @include fontsize(14, 13);\n",
            "      line-height: 1.6;\n",
            "      color: rgba($color-txt, 0.7);\n",
            "    }}\n",
            "  }}\n",
        ),
        gap = gap,
        columns = config.columns,
        image_rules = image_rules,
    )
}

fn carousel_rules(config: &StylePatternConfig) -> String {
    let gap = config.spacing.item_gap.as_deref().unwrap_or("2.4rem");
    format!(
        concat!(
            "  .carousel_swiper {{\n",
            "    padding-bottom: 4.8rem;\n",
            "  }}\n",
            "\n",
            "  .carousel_item {{\n",
            "    background: $color-bg;\n",
            "    border-radius: 0.8rem;\n",
            "    overflow: hidden;\n",
            "\n",
            "    &_img {{\n",
            "      aspect-ratio: 16 / 9;\n",
            "      overflow: hidden;\n",
            "\n",
            "      img {{\n",
            "        width: 100%;\n",
            "        height: 100%;\n",
            "        object-fit: cover;\n",
            "      }}\n",
            "    }}\n",
            "\n",
            "    &_body {{\n",
            "      padding: {gap};\n",
            "    }}\n",
            "\n",
            "    &_ttl {{\n",
            "      @include fontsize(18, 16);\n",
            "      font-weight: bold;\n",
            "      color: $color-txt;\n",
            "    }}\n",
            "\n",
            "    &_desc {{\n",
            "      @include fontsize(14, 13);\n",
            "      line-height: 1.6;\n",
            "      color: rgba($color-txt, 0.7);\n",
            "    }}\n",
            "  }}\n",
            "\n",
            "  .swiper-pagination {{\n",
            "    bottom: 0;\n",
            "  }}\n",
        ),
        gap = gap,
    )
}

fn list_rules(config: &StylePatternConfig) -> String {
    let gap = config.spacing.item_gap.as_deref().unwrap_or("1.6rem");
    format!(
        concat!(
            "  .list {{\n",
            "    display: grid;\n",
            "    gap: {gap};\n",
            "  }}\n",
            "\n",
            "  .list_item {{\n",
            "    padding: 2rem;\n",
            "    border-bottom: 0.1rem solid rgba($color-prime, 0.2);\n",
            "\n",
            "    &_ttl {{\n",
            "      @include fontsize(18, 16);\n",
            "      font-weight: bold;\n",
            "      color: $color-txt;\n",
            "    }}\n",
            "\n",
            "    &_desc {{\n",
            "      @include fontsize(14, 13);\n",
            "      line-height: 1.6;\n",
            "      color: rgba($color-txt, 0.7);\n",
            "    }}\n",
            "  }}\n",
        ),
        gap = gap,
    )
}

fn modal_rules(config: &StylePatternConfig) -> String {
    let gap = config.spacing.item_gap.as_deref().unwrap_or("2.4rem");
    format!(
        concat!(
            "  // Dialog behavior comes from the shared modal stylesheet.\n",
            "  .modal_list {{\n",
            "    display: grid;\n",
            "    grid-template-columns: 1fr;\n",
            "    gap: {gap};\n",
            "\n",
            "    @include mq() {{\n",
            "      grid-template-columns: repeat({columns}, 1fr);\n",
            "    }}\n",
            "  }}\n",
            "\n",
            "  .modal_card {{\n",
            "    display: block;\n",
            "    width: 100%;\n",
            "    text-align: left;\n",
            "    background: $color-bg;\n",
            "    border-radius: 0.8rem;\n",
            "    overflow: hidden;\n",
            "    cursor: pointer;\n",
            "    transition: $easing;\n",
            "\n",
            "    @include hover() {{\n",
            "      transform: translateY(-0.4rem);\n",
            "    }}\n",
            "  }}\n",
            "\n",
            "  .modal_thumbnail {{\n",
            "    position: relative;\n",
            "    display: block;\n",
            "    aspect-ratio: 16 / 9;\n",
            "    overflow: hidden;\n",
            "\n",
            "    img {{\n",
            "      width: 100%;\n",
            "      height: 100%;\n",
            "      object-fit: cover;\n",
            "    }}\n",
            "  }}\n",
            "\n",
            "  .modal_play_icon {{\n",
            "    position: absolute;\n",
            "    top: 50%;\n",
            "    left: 50%;\n",
            "    transform: translate(-50%, -50%);\n",
            "  }}\n",
            "\n",
            "  .modal_body {{\n",
            "    display: block;\n",
            "    padding: 2rem;\n",
            "  }}\n",
        ),
        gap = gap,
        columns = config.columns,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pattern: UiPattern) -> StylePatternConfig {
        StylePatternConfig {
            pattern,
            page_name: "sample".to_string(),
            section_name: "articles".to_string(),
            spacing: SpacingOptions::default(),
            columns: 3,
            has_image: true,
        }
    }

    #[test]
    fn every_pattern_opens_with_the_section_shell() {
        for pattern in [
            UiPattern::Tab,
            UiPattern::Accordion,
            UiPattern::Grid,
            UiPattern::Carousel,
            UiPattern::List,
            UiPattern::Modal,
        ] {
            let styles = render_section_styles(&config(pattern));
            assert!(styles.contains(".articles_section {"), "{pattern:?}");
            assert!(styles.contains(".section_ttl {"), "{pattern:?}");
            assert!(styles.ends_with("}\n"), "{pattern:?}");
        }
    }

    #[test]
    fn spacing_overrides_replace_the_defaults() {
        let mut config = config(UiPattern::Grid);
        config.spacing.section_padding = Some("4rem 0".to_string());
        config.spacing.item_gap = Some("1.2rem".to_string());
        let styles = render_section_styles(&config);
        assert!(styles.contains("padding: 4rem 0;"));
        assert!(styles.contains("gap: 1.2rem;"));
        assert!(!styles.contains("6rem 0"));
    }

    #[test]
    fn grid_columns_and_image_rules_follow_the_options() {
        let mut config = config(UiPattern::Grid);
        config.columns = 2;
        config.has_image = false;
        let styles = render_section_styles(&config);
        assert!(styles.contains("repeat(2, 1fr)"));
        assert!(!styles.contains("&_img"));
    }
}
