//! Page assembly.
//!
//! A page file imports its layout and section parts, inlines the page data
//! object, and places one component per requested section.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::casing::to_pascal_case;

/// Page metadata inlined into the page object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PageHead {
    pub slug: String,
    pub ttl: String,
    pub description: String,
    pub url: String,
}

/// One breadcrumb entry for lower pages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Breadcrumb {
    pub text: String,
    pub link: String,
}

/// Input for [`render_page`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub page_name: String,
    pub head: PageHead,
    /// Present on lower pages; adds the title/breadcrumb chrome.
    #[serde(default)]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,
    /// Per-section content data, keyed by section name.
    #[serde(default)]
    pub contents: Value,
    /// Section names, in placement order.
    pub sections: Vec<String>,
}

/// Sections whose component also receives the image path prefix.
const IMAGE_PATH_SECTIONS: [&str; 2] = ["articles", "videos"];

/// Render a complete page file.
#[must_use]
pub fn render_page(config: &PageConfig) -> String {
    let imports = render_imports(config);
    let page_object = render_page_object(config);
    let section_components = render_section_components(config);
    let chrome = if config.breadcrumbs.is_some() {
        "  <LowerTitle title={page.head.ttl} />\n  <Breadcrumbs bread={page.breadcrumbs} />\n"
    } else {
        ""
    };

    format!(
        concat!(
            "---\n",
            "{imports}\n",
            "\n",
            "import \"@/scss/pages/_{page_name}.scss\";\n",
            "\n",
            "{page_object}\n",
            "\n",
            "const imgPath = \"/_assets/img/\" + page.head.slug + \"/\";\n",
            "---\n",
            "\n",
            "<Layout page={{page.head}}>\n",
            "{chrome}",
            "  <div class=\"contentInner\">\n",
            "    <div class=\"p_{page_name}\">\n",
            "{section_components}\n",
            "    </div>\n",
            "  </div>\n",
            "</Layout>\n",
        ),
        imports = imports,
        page_name = config.page_name,
        page_object = page_object,
        chrome = chrome,
        section_components = section_components,
    )
}

fn render_imports(config: &PageConfig) -> String {
    let mut imports = vec!["import Layout from \"@/layouts/Layout.astro\";".to_string()];
    if config.breadcrumbs.is_some() {
        imports.push("import LowerTitle from \"@/components/LowerTitle.astro\";".to_string());
        imports.push("import Breadcrumbs from \"@/components/Breadcrumbs.astro\";".to_string());
    }
    for section in &config.sections {
        let component = format!("{}Section", to_pascal_case(section));
        imports.push(format!(
            "import {component} from \"@/pages/_parts/_{}/_{section}.astro\";",
            config.page_name
        ));
    }
    imports.join("\n")
}

fn render_page_object(config: &PageConfig) -> String {
    let mut page = json!({
        "head": config.head,
        "contents": config.contents,
    });
    if let Some(breadcrumbs) = &config.breadcrumbs {
        page["breadcrumbs"] = json!(breadcrumbs);
    }
    format!(
        "const page = {};",
        serde_json::to_string_pretty(&page).unwrap_or_default()
    )
}

fn render_section_components(config: &PageConfig) -> String {
    config
        .sections
        .iter()
        .map(|section| {
            let component = format!("{}Section", to_pascal_case(section));
            let img_path = if IMAGE_PATH_SECTIONS.contains(&section.as_str()) {
                " imgPath={imgPath}"
            } else {
                ""
            };
            format!(
                concat!(
                    "      <section id=\"{section}\">\n",
                    "        <{component} {section}={{page.contents.{section}}}{img_path} />\n",
                    "      </section>"
                ),
                section = section,
                component = component,
                img_path = img_path,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
