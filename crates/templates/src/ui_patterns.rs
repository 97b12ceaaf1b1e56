//! UI pattern renderers.
//!
//! Each pattern produces a complete component file: a typed props block
//! followed by the markup skeleton. `tab`, `accordion` and `modal` pair with
//! the script classes the manifest patcher registers; `carousel` targets an
//! external slider library; `grid` and `list` are static markup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sitegen_editors::UiPattern;

/// Presentation options shared by the pattern renderers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UiOptions {
    /// Grid column count.
    pub columns: u32,
    /// Gap between grid items.
    pub gap: String,
    /// Autoplay flag for carousels.
    pub autoplay: bool,
    /// Open the first accordion item initially.
    pub open_first: bool,
    /// Render an image slot on grid items.
    pub has_image: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            columns: 3,
            gap: "2.4rem".to_string(),
            autoplay: false,
            open_first: true,
            has_image: true,
        }
    }
}

/// Input for [`render_ui_pattern`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiPatternConfig {
    pub pattern: UiPattern,
    /// Child component names available to the template (e.g. `Picture`).
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub options: UiOptions,
}

impl UiPatternConfig {
    fn has_picture(&self) -> bool {
        self.components.iter().any(|name| name == "Picture")
    }
}

/// Render the markup skeleton for a UI pattern.
#[must_use]
pub fn render_ui_pattern(config: &UiPatternConfig) -> String {
    match config.pattern {
        UiPattern::Tab => render_tab(),
        UiPattern::Accordion => render_accordion(config),
        UiPattern::Grid => render_grid(config),
        UiPattern::Carousel => render_carousel(config),
        UiPattern::List => render_list(),
        UiPattern::Modal => render_modal(config),
    }
}

fn picture_import(config: &UiPatternConfig) -> &'static str {
    if config.has_picture() {
        "import Picture from \"@/components/Picture.astro\";\n\n"
    } else {
        ""
    }
}

fn render_tab() -> String {
    concat!(
        "---\n",
        "interface Props {\n",
        "  data: {\n",
        "    ttl: string;\n",
        "    items: {\n",
        "      name: string;\n",
        "      content: any;\n",
        "    }[];\n",
        "  };\n",
        "}\n",
        "\n",
        "const { data } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"c_tab\">\n",
        "  <h2 class=\"section_ttl\">{data.ttl}</h2>\n",
        "  <ul class=\"c_tab_list\">\n",
        "    {\n",
        "      data.items.map((item, i) => (\n",
        "        <li>\n",
        "          <button\n",
        "            type=\"button\"\n",
        "            class={i === 0 ? \"-open\" : \"\"}\n",
        "            aria-pressed={i === 0 ? \"true\" : \"false\"}\n",
        "            tabindex={i === 0 ? \"-1\" : \"0\"}\n",
        "          >\n",
        "            {item.name}\n",
        "          </button>\n",
        "        </li>\n",
        "      ))\n",
        "    }\n",
        "  </ul>\n",
        "  {\n",
        "    data.items.map((item, i) => (\n",
        "      <div class=\"c_tab_content\" hidden={i !== 0} tabindex=\"-1\">\n",
        "        {item.content}\n",
        "      </div>\n",
        "    ))\n",
        "  }\n",
        "</section>\n",
    )
    .to_string()
}

fn render_accordion(config: &UiPatternConfig) -> String {
    let open_first = config.options.open_first;
    let mut out = String::from(concat!(
        "---\n",
        "interface Props {\n",
        "  data: {\n",
        "    ttl: string;\n",
        "    items: {\n",
        "      ttl: string;\n",
        "      content: string;\n",
        "    }[];\n",
        "  };\n",
        "}\n",
        "\n",
        "const { data } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"accordion_section\">\n",
        "  <h2 class=\"section_ttl\">{data.ttl}</h2>\n",
        "  <div class=\"accordion_list\">\n",
        "    {\n",
        "      data.items.map((item, i) => (\n",
    ));
    out.push_str(&format!(
        "        <details\n          class={{\"c_pull accordion_item\" + ({open_first} && i === 0 ? \" -open\" : \"\")}}\n          open={{{open_first} && i === 0}}\n        >\n"
    ));
    out.push_str(concat!(
        "          <summary class=\"c_pull_ttl accordion_item_ttl\">\n",
        "            <span class=\"accordion_item_ttl_text\">{item.ttl}</span>\n",
        "          </summary>\n",
        "          <div class=\"c_pull_content accordion_item_content\">\n",
        "            <div class=\"accordion_item_content_text\" set:html={item.content} />\n",
        "          </div>\n",
        "        </details>\n",
        "      ))\n",
        "    }\n",
        "  </div>\n",
        "</section>\n",
    ));
    out
}

fn render_grid(config: &UiPatternConfig) -> String {
    let UiOptions {
        columns,
        gap,
        has_image,
        ..
    } = &config.options;
    let has_picture = config.has_picture();

    let mut out = String::from("---\n");
    out.push_str(picture_import(config));
    out.push_str(concat!(
        "interface Props {\n",
        "  data: {\n",
        "    ttl: string;\n",
        "    items: {\n",
        "      ttl: string;\n",
        "      desc?: string;\n",
    ));
    if *has_image {
        out.push_str("      img?: string;\n");
    }
    out.push_str(concat!(
        "      link?: string;\n",
        "    }[];\n",
        "  };\n",
        "  imgPath?: string;\n",
        "}\n",
        "\n",
        "const { data, imgPath = \"\" } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"grid_section\">\n",
        "  <h2 class=\"section_ttl\">{data.ttl}</h2>\n",
    ));
    out.push_str(&format!(
        "  <ul class=\"grid_list\" style=\"display: grid; grid-template-columns: repeat({columns}, 1fr); gap: {gap};\">\n"
    ));
    out.push_str(concat!(
        "    {\n",
        "      data.items.map((item) => (\n",
        "        <li class=\"grid_item\">\n",
    ));
    if *has_image {
        out.push_str(concat!(
            "          {item.img && (\n",
            "            <div class=\"grid_item_img\">\n",
        ));
        out.push_str(if has_picture {
            "              <Picture src={imgPath + item.img} alt={item.ttl} sizes={[400, 300]} />\n"
        } else {
            "              <img src={imgPath + item.img} alt={item.ttl} loading=\"lazy\" />\n"
        });
        out.push_str(concat!("            </div>\n", "          )}\n"));
    }
    out.push_str(concat!(
        "          <div class=\"grid_item_body\">\n",
        "            <h3 class=\"grid_item_ttl\">{item.ttl}</h3>\n",
        "            {item.desc && <p class=\"grid_item_desc\">{item.desc}</p>}\n",
        "          </div>\n",
        "        </li>\n",
        "      ))\n",
        "    }\n",
        "  </ul>\n",
        "</section>\n",
    ));
    out
}

fn render_carousel(config: &UiPatternConfig) -> String {
    let has_picture = config.has_picture();
    let mut out = String::from("---\n");
    out.push_str(picture_import(config));
    out.push_str(concat!(
        "interface Props {\n",
        "  data: {\n",
        "    ttl: string;\n",
        "    items: {\n",
        "      ttl: string;\n",
        "      desc?: string;\n",
        "      img?: string;\n",
        "    }[];\n",
        "  };\n",
        "  imgPath?: string;\n",
        "}\n",
        "\n",
        "const { data, imgPath = \"\" } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"carousel_section\">\n",
        "  <h2 class=\"section_ttl\">{data.ttl}</h2>\n",
    ));
    out.push_str(&format!(
        "  <div class=\"swiper carousel_swiper\" data-autoplay=\"{}\">\n",
        config.options.autoplay
    ));
    out.push_str(concat!(
        "    <div class=\"swiper-wrapper\">\n",
        "      {\n",
        "        data.items.map((item) => (\n",
        "          <div class=\"swiper-slide carousel_item\">\n",
        "            {item.img && (\n",
        "              <div class=\"carousel_item_img\">\n",
    ));
    out.push_str(if has_picture {
        "                <Picture src={imgPath + item.img} alt={item.ttl} sizes={[800, 600]} />\n"
    } else {
        "                <img src={imgPath + item.img} alt={item.ttl} loading=\"lazy\" />\n"
    });
    out.push_str(concat!(
        "              </div>\n",
        "            )}\n",
        "            <div class=\"carousel_item_body\">\n",
        "              <h3 class=\"carousel_item_ttl\">{item.ttl}</h3>\n",
        "              {item.desc && <p class=\"carousel_item_desc\">{item.desc}</p>}\n",
        "            </div>\n",
        "          </div>\n",
        "        ))\n",
        "      }\n",
        "    </div>\n",
        "    <div class=\"swiper-pagination\"></div>\n",
        "    <div class=\"swiper-button-prev\"></div>\n",
        "    <div class=\"swiper-button-next\"></div>\n",
        "  </div>\n",
        "</section>\n",
    ));
    out
}

fn render_list() -> String {
    concat!(
        "---\n",
        "interface Props {\n",
        "  data: {\n",
        "    ttl: string;\n",
        "    items: {\n",
        "      ttl: string;\n",
        "      desc?: string;\n",
        "    }[];\n",
        "  };\n",
        "}\n",
        "\n",
        "const { data } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"list_section\">\n",
        "  <h2 class=\"section_ttl\">{data.ttl}</h2>\n",
        "  <ul class=\"list\">\n",
        "    {\n",
        "      data.items.map((item) => (\n",
        "        <li class=\"list_item\">\n",
        "          <h3 class=\"list_item_ttl\">{item.ttl}</h3>\n",
        "          {item.desc && <p class=\"list_item_desc\">{item.desc}</p>}\n",
        "        </li>\n",
        "      ))\n",
        "    }\n",
        "  </ul>\n",
        "</section>\n",
    )
    .to_string()
}

fn render_modal(config: &UiPatternConfig) -> String {
    let has_picture = config.has_picture();
    let mut out = String::from("---\n");
    out.push_str(picture_import(config));
    out.push_str(concat!(
        "interface Props {\n",
        "  data: {\n",
        "    ttl: string;\n",
        "    items: {\n",
        "      ttl: string;\n",
        "      desc?: string;\n",
        "      thumbnail?: string;\n",
        "      src: string;\n",
        "      alt?: string;\n",
        "      type?: \"video\" | \"image\" | \"dialog\";\n",
        "    }[];\n",
        "  };\n",
        "  imgPath?: string;\n",
        "}\n",
        "\n",
        "const { data, imgPath = \"\" } = Astro.props;\n",
        "---\n",
        "\n",
        "<section class=\"modal_section\">\n",
        "  <h2 class=\"section_ttl\">{data.ttl}</h2>\n",
        "  <ul class=\"modal_list\">\n",
        "    {\n",
        "      data.items.map((item) => (\n",
        "        <li class=\"modal_item\">\n",
        "          <button\n",
        "            type=\"button\"\n",
        "            class=\"c_modal_btn modal_card\"\n",
        "            data-src={item.src}\n",
        "            data-alt={item.alt}\n",
        "          >\n",
        "            {item.thumbnail && (\n",
        "              <span class=\"modal_thumbnail\">\n",
    ));
    out.push_str(if has_picture {
        "                <Picture src={imgPath + item.thumbnail} alt={item.alt || item.ttl} sizes={[800, 450]} />\n"
    } else {
        "                <img src={imgPath + item.thumbnail} alt={item.alt || item.ttl} loading=\"lazy\" />\n"
    });
    out.push_str(concat!(
        "                {item.type === \"video\" && (\n",
        "                  <span class=\"modal_play_icon\">\n",
        "                    <svg width=\"60\" height=\"60\" viewBox=\"0 0 60 60\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        "                      <circle cx=\"30\" cy=\"30\" r=\"30\" fill=\"white\" opacity=\"0.9\" />\n",
        "                      <path d=\"M24 18L42 30L24 42V18Z\" fill=\"#667eea\" />\n",
        "                    </svg>\n",
        "                  </span>\n",
        "                )}\n",
        "              </span>\n",
        "            )}\n",
        "            <span class=\"modal_body\">\n",
        "              <h3 class=\"modal_ttl\">{item.ttl}</h3>\n",
        "              {item.desc && <p class=\"modal_desc\">{item.desc}</p>}\n",
        "            </span>\n",
        "          </button>\n",
        "        </li>\n",
        "      ))\n",
        "    }\n",
        "  </ul>\n",
        "</section>\n",
    ));
    out
}
