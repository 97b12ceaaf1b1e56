//! Standalone component rendering.
//!
//! Components are card-style building blocks derived from their prop names:
//! image-ish props get an image slot, title/description props get text
//! slots, everything else renders as a generic value block. A matching style
//! block is generated against the shared variables and mixins.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::casing::to_snake_case;

/// Input for [`render_component`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    /// Component name in PascalCase (e.g. `ArticleCard`).
    pub name: String,
    /// Prop definitions: value is either a type name or a record with
    /// `type`, `optional` and `description` fields.
    pub props: Map<String, Value>,
    /// Emit ARIA attributes for interactive components.
    #[serde(default = "default_accessibility")]
    pub accessibility: bool,
}

const fn default_accessibility() -> bool {
    true
}

/// Design hints for [`render_component_styles`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScssDesign {
    /// `primary` / `background` color overrides (variable references or raw
    /// values).
    #[serde(default)]
    pub colors: Map<String, Value>,
    /// `size` / `lineHeight` typography overrides.
    #[serde(default)]
    pub typography: Map<String, Value>,
    /// Layout mode: `grid`, `flex` or `block`.
    #[serde(default)]
    pub layout: Option<String>,
}

/// Render the component markup: typed props block plus a card body derived
/// from the prop names.
#[must_use]
pub fn render_component(config: &ComponentConfig) -> String {
    let props_interface = render_props_interface(&config.props);
    let destructuring = config.props.keys().cloned().collect::<Vec<_>>().join(", ");
    let body = render_body(config);

    format!(
        concat!(
            "---\n",
            "/**\n",
            " * {name} component\n",
            " */\n",
            "{props_interface}\n",
            "\n",
            "const {{ {destructuring} }} = Astro.props;\n",
            "---\n",
            "\n",
            "{body}\n",
        ),
        name = config.name,
        props_interface = props_interface,
        destructuring = destructuring,
        body = body,
    )
}

fn render_props_interface(props: &Map<String, Value>) -> String {
    let mut lines = vec!["interface Props {".to_string()];
    for (key, value) in props {
        let (type_name, optional, description) = match value {
            Value::Object(record) => (
                record.get("type").and_then(Value::as_str).unwrap_or("string"),
                record.get("optional").and_then(Value::as_bool).unwrap_or(false),
                record.get("description").and_then(Value::as_str),
            ),
            Value::String(type_name) => (type_name.as_str(), false, None),
            _ => ("string", false, None),
        };
        if let Some(description) = description {
            lines.push(format!("  /** {description} */"));
        }
        let marker = if optional { "?" } else { "" };
        lines.push(format!("  {key}{marker}: {};", map_type(type_name)));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

fn map_type(type_name: &str) -> &'static str {
    match type_name {
        "number" => "number",
        "boolean" => "boolean",
        "array" => "string[]",
        "object" => "Record<string, any>",
        // text, string, date and url all land on string.
        _ => "string",
    }
}

fn render_body(config: &ComponentConfig) -> String {
    let class = format!("c_{}", to_snake_case(&config.name));
    let keys: Vec<&str> = config.props.keys().map(String::as_str).collect();

    let image_prop = keys.iter().find(|key| key.contains("img") || **key == "src");
    let title_prop = keys.iter().find(|key| key.contains("ttl") || **key == "title");
    let desc_prop = keys
        .iter()
        .find(|key| key.contains("desc") || **key == "description");

    let interactive = keys
        .iter()
        .any(|key| matches!(*key, "onClick" | "onSubmit" | "href"));
    let aria = if config.accessibility && interactive {
        " role=\"button\" tabindex=\"0\""
    } else {
        ""
    };

    let mut body = format!("<div class=\"{class}\"{aria}>");

    if let Some(img) = image_prop {
        let alt_prop = keys
            .iter()
            .find(|key| key.contains("alt"))
            .copied()
            .unwrap_or("alt");
        let alt = if config.accessibility {
            format!(" alt={{{alt_prop}}}")
        } else {
            String::new()
        };
        body.push_str(&format!(
            "\n  <div class=\"{class}_img\">\n    <img src={{{img}}}{alt} loading=\"lazy\" />\n  </div>"
        ));
    }

    body.push_str(&format!("\n  <div class=\"{class}_body\">"));
    if let Some(title) = title_prop {
        body.push_str(&format!("\n    <h3 class=\"{class}_ttl\">{{{title}}}</h3>"));
    }
    if let Some(desc) = desc_prop {
        body.push_str(&format!("\n    <p class=\"{class}_desc\">{{{desc}}}</p>"));
    }
    for key in &keys {
        let handled = key.contains("img")
            || key.contains("alt")
            || key.contains("ttl")
            || key.contains("desc")
            || key.contains("title")
            || key.contains("description");
        if !handled {
            body.push_str(&format!(
                "\n    <div class=\"{class}_{}\">{{{key}}}</div>",
                to_snake_case(key)
            ));
        }
    }
    body.push_str("\n  </div>\n</div>");
    body
}

/// Render the component's style block against the shared variables and
/// mixins.
#[must_use]
pub fn render_component_styles(name: &str, design: &ScssDesign) -> String {
    let class = format!(".c_{}", to_snake_case(name));
    let layout = design.layout.as_deref().unwrap_or("flex");
    let primary = design
        .colors
        .get("primary")
        .and_then(Value::as_str)
        .unwrap_or("$color-prime");
    let background = design
        .colors
        .get("background")
        .and_then(Value::as_str)
        .unwrap_or("$color-body");
    let size = design
        .typography
        .get("size")
        .and_then(Value::as_str)
        .unwrap_or("$text-lg");
    let line_height = design
        .typography
        .get("lineHeight")
        .and_then(Value::as_str)
        .unwrap_or("1.6");

    let display = match layout {
        "grid" => "grid",
        "block" => "block",
        _ => "flex",
    };
    let layout_rules = match layout {
        "grid" => "  grid-template-columns: 1fr;\n  gap: 1.6rem;\n",
        "block" => "",
        _ => "  flex-direction: column;\n",
    };
    let responsive_rules = if layout == "grid" {
        "    grid-template-columns: repeat(2, 1fr);\n"
    } else {
        ""
    };

    format!(
        concat!(
            "{class} {{\n",
            "  display: {display};\n",
            "{layout_rules}",
            "  padding: 2rem;\n",
            "  background: {background};\n",
            "  border-radius: 0.4rem;\n",
            "  transition: transform $easing;\n",
            "\n",
            "  @include mq() {{\n",
            "    padding: 2.4rem;\n",
            "{responsive_rules}",
            "  }}\n",
            "\n",
            "  @include hover {{\n",
            "    transform: translateY(-0.4rem);\n",
            "  }}\n",
            "\n",
            "  &_img {{\n",
            "    aspect-ratio: 16 / 9;\n",
            "    overflow: hidden;\n",
            "    border-radius: 0.4rem;\n",
            "\n",
            "    img {{\n",
            "      width: 100%;\n",
            "      height: 100%;\n",
            "      object-fit: cover;\n",
            "      transition: transform $easing;\n",
            "    }}\n",
            "\n",
            "    @include hover {{\n",
            "      img {{\n",
            "        transform: scale(1.05);\n",
            "      }}\n",
            "    }}\n",
            "  }}\n",
            "\n",
            "  &_body {{\n",
            "    display: flex;\n",
            "    flex-direction: column;\n",
            "    gap: 1.2rem;\n",
            "  }}\n",
            "\n",
            "  &_ttl {{\n",
            "    font-size: {size};\n",
            "    font-weight: 700;\n",
            "    line-height: {line_height};\n",
            "    color: {primary};\n",
            "  }}\n",
            "\n",
            "  &_desc {{\n",
            "    font-size: $text-sm;\n",
            "    line-height: 1.7;\n",
            "    color: $color-txt;\n",
            "  }}\n",
            "}}\n",
        ),
        class = class,
        display = display,
        layout_rules = layout_rules,
        background = background,
        responsive_rules = responsive_rules,
        size = size,
        line_height = line_height,
        primary = primary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card() -> ComponentConfig {
        let props = json!({
            "ttl": "string",
            "desc": { "type": "string", "optional": true },
            "img": { "type": "url", "optional": true, "description": "Thumbnail path" },
        });
        let Value::Object(props) = props else {
            unreachable!()
        };
        ComponentConfig {
            name: "ArticleCard".to_string(),
            props,
            accessibility: true,
        }
    }

    #[test]
    fn interface_carries_types_optionality_and_docs() {
        let markup = render_component(&card());
        assert!(markup.contains("interface Props {"));
        assert!(markup.contains("  ttl: string;"));
        assert!(markup.contains("  desc?: string;"));
        assert!(markup.contains("  /** Thumbnail path */"));
        assert!(markup.contains("  img?: string;"));
    }

    #[test]
    fn body_slots_follow_prop_names() {
        let markup = render_component(&card());
        assert!(markup.contains("<div class=\"c_article_card\">"));
        assert!(markup.contains("<img src={img} alt={alt} loading=\"lazy\" />"));
        assert!(markup.contains("<h3 class=\"c_article_card_ttl\">{ttl}</h3>"));
        assert!(markup.contains("<p class=\"c_article_card_desc\">{desc}</p>"));
    }

    #[test]
    fn interactive_props_add_aria_attributes() {
        let props = json!({ "label": "string", "href": "url" });
        let Value::Object(props) = props else {
            unreachable!()
        };
        let markup = render_component(&ComponentConfig {
            name: "LinkButton".to_string(),
            props,
            accessibility: true,
        });
        assert!(markup.contains("role=\"button\" tabindex=\"0\""));
    }

    #[test]
    fn styles_default_to_flex_and_shared_variables() {
        let styles = render_component_styles("ArticleCard", &ScssDesign::default());
        assert!(styles.starts_with(".c_article_card {"));
        assert!(styles.contains("display: flex;"));
        assert!(styles.contains("color: $color-prime;"));
        assert!(styles.contains("background: $color-body;"));
    }

    #[test]
    fn grid_layout_switches_the_display_rules() {
        let design = ScssDesign {
            layout: Some("grid".to_string()),
            ..ScssDesign::default()
        };
        let styles = render_component_styles("TechList", &design);
        assert!(styles.contains("display: grid;"));
        assert!(styles.contains("grid-template-columns: repeat(2, 1fr);"));
    }
}
