//! Section renderers.
//!
//! A section is a page fragment under the parts directory. An explicit UI
//! pattern takes precedence; otherwise the section kind maps through a fixed
//! table, with bespoke skeletons for the kinds that predate the pattern
//! renderers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitegen_editors::UiPattern;

use crate::ui_patterns::{render_ui_pattern, UiOptions, UiPatternConfig};

/// Input for [`render_section`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    /// Section kind (`hero`, `articles`, `qa`, ... or a custom name).
    pub kind: String,
    /// Explicit pattern override; wins over the kind mapping.
    #[serde(default)]
    pub ui_pattern: Option<UiPattern>,
    /// Page the section belongs to.
    pub page_name: String,
    /// Section content data; presentation options are read from it.
    #[serde(default)]
    pub content: Value,
    /// Child component names available to the template.
    #[serde(default)]
    pub components: Vec<String>,
}

/// Fixed mapping from section kind to UI pattern, for the kinds that render
/// through the pattern generators.
#[must_use]
pub fn pattern_for_kind(kind: &str) -> Option<UiPattern> {
    match kind {
        "articles" => Some(UiPattern::Grid),
        "categories" => Some(UiPattern::Tab),
        "qa" => Some(UiPattern::Accordion),
        "modal" | "gallery" | "videos" => Some(UiPattern::Modal),
        _ => None,
    }
}

/// Presentation options read out of the section content data.
fn extract_ui_options(content: &Value) -> UiOptions {
    let defaults = UiOptions::default();
    UiOptions {
        columns: content
            .get("columns")
            .and_then(Value::as_u64)
            .map_or(defaults.columns, |v| v as u32),
        gap: content
            .get("gap")
            .and_then(Value::as_str)
            .map_or(defaults.gap, str::to_string),
        autoplay: content
            .get("autoplay")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.autoplay),
        open_first: content
            .get("openFirst")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.open_first),
        has_image: content
            .get("hasImage")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.has_image),
    }
}

/// Render a section skeleton.
#[must_use]
pub fn render_section(config: &SectionConfig) -> String {
    let pattern = config
        .ui_pattern
        .or_else(|| pattern_for_kind(&config.kind));

    if let Some(pattern) = pattern {
        return render_ui_pattern(&UiPatternConfig {
            pattern,
            components: config.components.clone(),
            options: extract_ui_options(&config.content),
        });
    }

    match config.kind.as_str() {
        "hero" => render_hero(),
        "features" => render_features(),
        "tech" => render_tech(),
        "concept" => render_concept(),
        kind => {
            log::debug!("no bespoke skeleton for '{kind}'; using the generic section");
            render_custom(kind)
        }
    }
}

fn render_hero() -> String {
    concat!(
        "---\n",
        "interface Props {\n",
        "  hero: {\n",
        "    ttl: string;\n",
        "    subtitle?: string;\n",
        "    desc?: string;\n",
        "  };\n",
        "}\n",
        "\n",
        "const { hero } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"hero_section\">\n",
        "  <div class=\"hero_content\">\n",
        "    <h1 class=\"hero_ttl\" set:html={hero.ttl} />\n",
        "    {hero.subtitle && <p class=\"hero_subtitle\" set:html={hero.subtitle} />}\n",
        "    {hero.desc && <p class=\"hero_desc\" set:html={hero.desc} />}\n",
        "  </div>\n",
        "</section>\n",
    )
    .to_string()
}

fn render_features() -> String {
    concat!(
        "---\n",
        "interface Props {\n",
        "  features: {\n",
        "    ttl: string;\n",
        "    items: string[];\n",
        "  };\n",
        "}\n",
        "\n",
        "const { features } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"features_section\">\n",
        "  <h2 class=\"section_ttl\" set:html={features.ttl} />\n",
        "  <ul class=\"feature_list\">\n",
        "    {features.items.map((item) => (\n",
        "      <li class=\"feature_item\" set:html={item} />\n",
        "    ))}\n",
        "  </ul>\n",
        "</section>\n",
    )
    .to_string()
}

fn render_tech() -> String {
    concat!(
        "---\n",
        "interface Props {\n",
        "  tech: {\n",
        "    ttl: string;\n",
        "    desc?: string;\n",
        "    items: {\n",
        "      name: string;\n",
        "      desc: string;\n",
        "    }[];\n",
        "  };\n",
        "}\n",
        "\n",
        "const { tech } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"tech_section\">\n",
        "  <h2 class=\"section_ttl\" set:html={tech.ttl} />\n",
        "  {tech.desc && <p class=\"section_desc\" set:html={tech.desc} />}\n",
        "  <ul class=\"tech_list\">\n",
        "    {\n",
        "      tech.items.map((item) => (\n",
        "        <li class=\"tech_item\">\n",
        "          <h3 class=\"tech_name\">{item.name}</h3>\n",
        "          <p class=\"tech_desc\" set:html={item.desc} />\n",
        "        </li>\n",
        "      ))\n",
        "    }\n",
        "  </ul>\n",
        "</section>\n",
    )
    .to_string()
}

fn render_concept() -> String {
    concat!(
        "---\n",
        "interface Props {\n",
        "  concept: {\n",
        "    ttl: string;\n",
        "    desc: string;\n",
        "  };\n",
        "}\n",
        "\n",
        "const { concept } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"concept_section\">\n",
        "  <h2 class=\"section_ttl\" set:html={concept.ttl} />\n",
        "  <p class=\"section_desc\" set:html={concept.desc} />\n",
        "</section>\n",
    )
    .to_string()
}

fn render_custom(kind: &str) -> String {
    format!(
        concat!(
            "---\n",
            "interface Props {{\n",
            "  {kind}: {{\n",
            "    ttl: string;\n",
            "    items?: any[];\n",
            "  }};\n",
            "}}\n",
            "\n",
            "const {{ {kind} }} = Astro.props;\n",
            "---\n",
            "\n",
            "<section class=\"{kind}_section\">\n",
            "  <h2 class=\"section_ttl\" set:html={{{kind}.ttl}} />\n",
            "</section>\n",
        ),
        kind = kind
    )
}
