//! MCP tools for Sitegen
//!
//! Generators render new file text; `apply_site_settings` is the one tool
//! that touches existing files, reading each target immediately before the
//! patch and writing it back only when the text changed.

use anyhow::{Context as AnyhowContext, Result};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use sitegen_editors::{
    needs_update, patch_manifest, patch_site_config, patch_style_vars, required_scripts,
    SiteConfig, StyleConfig, UiPattern,
};
use sitegen_intent::{parse_section_intent, SectionIntent};
use sitegen_templates::{
    parse_schema_source, pattern_for_kind, render_component, render_component_styles, render_page,
    render_section, render_section_styles, render_type_definition, to_kebab_case, Breadcrumb,
    ComponentConfig, PageConfig, PageHead, ScssDesign, SectionConfig, SpacingOptions,
    StylePatternConfig,
};

/// Conventional project-relative locations of the patchable files.
const MANIFEST_TARGET: &str = "src/js/app.js";
const SITE_CONFIG_TARGET: &str = "src/components/Common.astro";
const STYLE_VARS_TARGET: &str = "src/scss/_variables.scss";

/// Sitegen MCP Service
#[derive(Clone)]
pub struct SitegenService {
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl SitegenService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for SitegenService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Sitegen scaffolds data-driven site projects. Use 'generate_component', 'generate_section' and 'generate_page' to render new files, 'generate_schema' to derive type definitions from content sources, and 'apply_site_settings' to patch the generated project files (script manifest, site configuration, style variables) in place.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

impl SitegenService {
    /// Canonicalize a project root and check it is a directory.
    fn resolve_project(path: &str) -> Result<PathBuf> {
        let canonical = PathBuf::from(path)
            .canonicalize()
            .context("Invalid project path")?;
        if !canonical.is_dir() {
            anyhow::bail!("Project path '{path}' is not a directory");
        }
        Ok(canonical)
    }
}

// ============================================================================
// Tool Input/Output Schemas
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateComponentRequest {
    /// Component name in PascalCase
    #[schemars(description = "Component name in PascalCase (e.g. ArticleCard, HeroSection)")]
    pub component_name: String,

    /// Prop definitions: type name, or a record with type/optional/description
    #[schemars(description = "Prop definitions keyed by prop name")]
    pub props: Map<String, Value>,

    /// Design hints (colors, typography, layout)
    #[schemars(description = "Design hints: colors, typography, layout mode")]
    pub design: Option<ScssDesign>,

    /// Emit ARIA attributes for interactive components (default: true)
    #[schemars(description = "Include accessibility attributes (default: true)")]
    pub accessibility: Option<bool>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct GenerateComponentResult {
    /// Rendered component file text
    pub component: String,
    /// Rendered style file text
    pub styles: String,
    /// Conventional component location
    pub component_path: String,
    /// Conventional style location
    pub styles_path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateSectionRequest {
    /// Section kind (hero/articles/categories/qa/features/tech/concept/videos/...)
    #[schemars(description = "Section kind (hero, articles, categories, qa, features, tech, concept, videos, or a custom name)")]
    pub section_type: String,

    /// Page the section belongs to
    #[schemars(description = "Owning page name (e.g. top, about)")]
    pub page_name: String,

    /// Natural-language prompt; classified when no explicit pattern is given
    #[schemars(description = "Natural-language description of the section; used to pick a UI pattern when 'ui_pattern' is omitted")]
    pub prompt: Option<String>,

    /// Explicit UI pattern override
    #[schemars(description = "UI pattern: tab, accordion, grid, carousel, list, modal")]
    pub ui_pattern: Option<UiPattern>,

    /// Section content data; presentation options are read from it
    #[schemars(description = "Section content data")]
    pub content: Option<Value>,

    /// Child component names available to the template
    #[schemars(description = "Child component names (e.g. Picture)")]
    pub components: Option<Vec<String>>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct GenerateSectionResult {
    /// Rendered section file text
    pub section: String,
    /// Conventional section location
    pub path: String,
    /// Style skeleton for the section, when a pattern applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,
    /// Script classes the pattern needs registered in the manifest
    pub required_scripts: Vec<String>,
    /// Classifier output, when a prompt was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<SectionIntent>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GeneratePageRequest {
    /// Page name
    #[schemars(description = "Page name (e.g. top, about, contact)")]
    pub page_name: String,

    /// Page metadata
    #[schemars(description = "Page metadata: slug, ttl, description, url")]
    pub head: PageHead,

    /// Breadcrumbs; presence marks the page as a lower page
    #[schemars(description = "Breadcrumb trail; include it for lower pages")]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,

    /// Per-section content data
    #[schemars(description = "Per-section content data, keyed by section name")]
    pub contents: Option<Value>,

    /// Section names in placement order
    #[schemars(description = "Section names in placement order")]
    pub sections: Vec<String>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct GeneratePageResult {
    /// Rendered page file text
    pub page: String,
    /// Conventional page location
    pub path: String,
    /// Section files the page expects
    pub section_paths: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateSchemaRequest {
    /// Source format: json, markdown or text
    #[schemars(description = "Source format: 'json', 'markdown' or 'text'")]
    pub source_type: String,

    /// Source data
    #[schemars(description = "Source data as a string")]
    pub source_data: String,

    /// Name of the generated type
    #[schemars(description = "Name of the generated type (e.g. PageData)")]
    pub schema_name: String,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct GenerateSchemaResult {
    /// Rendered type definition
    pub type_definition: String,
    pub schema_name: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ApplySiteSettingsRequest {
    /// Project root (defaults to current directory)
    #[schemars(description = "Project root directory (defaults to current directory)")]
    pub path: Option<String>,

    /// Site configuration changes (head fields, menu tree)
    #[schemars(description = "Site configuration changes: head fields and/or menu tree")]
    pub site: Option<SiteConfig>,

    /// Style variable changes (colors, layout metrics, font sizes)
    #[schemars(description = "Style variable changes: colors, layout metrics, font sizes")]
    pub styles: Option<StyleConfig>,

    /// UI pattern whose scripts must be registered in the manifest
    #[schemars(description = "UI pattern whose script classes must be registered in the manifest")]
    pub ui_pattern: Option<UiPattern>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ApplySiteSettingsResult {
    /// Per-file outcome lines: updated / already satisfied / target not found
    pub report: Vec<String>,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl SitegenService {
    /// Render a component and its style block
    #[tool(description = "Generate a component file and its style block from prop definitions and design hints. Returns the rendered text and the conventional file locations.")]
    pub async fn generate_component(
        &self,
        Parameters(request): Parameters<GenerateComponentRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.component_name.trim().is_empty() {
            return Ok(CallToolResult::error(vec![Content::text(
                "Error: component_name cannot be empty",
            )]));
        }

        let config = ComponentConfig {
            name: request.component_name.clone(),
            props: request.props,
            accessibility: request.accessibility.unwrap_or(true),
        };
        let component = render_component(&config);
        let styles =
            render_component_styles(&request.component_name, &request.design.unwrap_or_default());

        let result = GenerateComponentResult {
            component,
            styles,
            component_path: format!("src/components/{}.astro", request.component_name),
            styles_path: format!(
                "src/scss/components/_c_{}.scss",
                to_kebab_case(&request.component_name)
            ),
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }

    /// Render a section skeleton
    #[tool(description = "Generate a section skeleton for a page. The UI pattern comes from 'ui_pattern', from classifying 'prompt', or from the section kind. Also reports which script classes the pattern needs in the manifest.")]
    pub async fn generate_section(
        &self,
        Parameters(request): Parameters<GenerateSectionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let intent = request.prompt.as_deref().map(parse_section_intent);
        let ui_pattern = request
            .ui_pattern
            .or_else(|| intent.as_ref().map(|i| i.ui_pattern));

        let config = SectionConfig {
            kind: request.section_type.clone(),
            ui_pattern,
            page_name: request.page_name.clone(),
            content: request.content.unwrap_or(Value::Null),
            components: request.components.unwrap_or_default(),
        };
        let section = render_section(&config);

        let effective_pattern = ui_pattern.or_else(|| pattern_for_kind(&request.section_type));
        let styles = effective_pattern.map(|pattern| {
            render_section_styles(&StylePatternConfig {
                pattern,
                page_name: request.page_name.clone(),
                section_name: request.section_type.clone(),
                spacing: SpacingOptions::default(),
                columns: 3,
                has_image: true,
            })
        });
        let required = effective_pattern
            .map(|pattern| {
                required_scripts(pattern)
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let result = GenerateSectionResult {
            section,
            path: format!(
                "src/pages/_parts/_{}/_{}.astro",
                request.page_name, request.section_type
            ),
            styles,
            required_scripts: required,
            intent,
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }

    /// Render a complete page
    #[tool(description = "Generate a complete page file from page metadata, section list and content data. Returns the rendered text plus the section files the page expects.")]
    pub async fn generate_page(
        &self,
        Parameters(request): Parameters<GeneratePageRequest>,
    ) -> Result<CallToolResult, McpError> {
        if request.sections.is_empty() {
            return Ok(CallToolResult::error(vec![Content::text(
                "Error: sections cannot be empty",
            )]));
        }

        let config = PageConfig {
            page_name: request.page_name.clone(),
            head: request.head,
            breadcrumbs: request.breadcrumbs,
            contents: request.contents.unwrap_or(Value::Null),
            sections: request.sections.clone(),
        };
        let page = render_page(&config);

        let result = GeneratePageResult {
            page,
            path: format!("src/pages/{}/index.astro", request.page_name),
            section_paths: request
                .sections
                .iter()
                .map(|section| {
                    format!("src/pages/_parts/_{}/_{section}.astro", request.page_name)
                })
                .collect(),
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }

    /// Derive a type definition from a content source
    #[tool(description = "Generate a type definition from a JSON, markdown or plain-text content source.")]
    pub async fn generate_schema(
        &self,
        Parameters(request): Parameters<GenerateSchemaRequest>,
    ) -> Result<CallToolResult, McpError> {
        let parsed = match parse_schema_source(&request.source_type, &request.source_data) {
            Ok(value) => value,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {e}"
                ))]));
            }
        };

        let type_definition = match render_type_definition(&request.schema_name, &parsed) {
            Ok(text) => text,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {e}"
                ))]));
            }
        };

        let result = GenerateSchemaResult {
            type_definition,
            schema_name: request.schema_name,
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }

    /// Patch the generated project files in place
    #[tool(description = "Patch the generated project files in place: register UI pattern scripts in the manifest, update the site configuration (head fields, menu) and the style variables. Each file is read, patched and written independently; the result reports one outcome line per target.")]
    pub async fn apply_site_settings(
        &self,
        Parameters(request): Parameters<ApplySiteSettingsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let root = match Self::resolve_project(request.path.as_deref().unwrap_or(".")) {
            Ok(root) => root,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {e}"
                ))]));
            }
        };

        let report = match apply_site_settings_at(&root, &request) {
            Ok(report) => report,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {e:#}"
                ))]));
            }
        };

        let result = ApplySiteSettingsResult { report };
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }
}

// ============================================================================
// Patch application
// ============================================================================

/// Apply every requested patch under `root`, one target at a time.
///
/// Missing targets become a report line, not an error; there is no rollback
/// across targets. I/O failures other than a missing file propagate.
fn apply_site_settings_at(root: &Path, request: &ApplySiteSettingsRequest) -> Result<Vec<String>> {
    let mut report = Vec::new();

    if let Some(pattern) = request.ui_pattern {
        let scripts = required_scripts(pattern);
        if scripts.is_empty() {
            report.push(format!(
                "{MANIFEST_TARGET}: already satisfied ({} pattern needs no scripts)",
                pattern.as_str()
            ));
        } else {
            patch_target(root, MANIFEST_TARGET, &mut report, |text| {
                if needs_update(text, pattern) {
                    patch_manifest(text, scripts)
                } else {
                    text.to_string()
                }
            })?;
        }
    }

    if let Some(site) = &request.site {
        patch_target(root, SITE_CONFIG_TARGET, &mut report, |text| {
            patch_site_config(text, site)
        })?;
    }

    if let Some(styles) = &request.styles {
        patch_target(root, STYLE_VARS_TARGET, &mut report, |text| {
            patch_style_vars(text, styles)
        })?;
    }

    if report.is_empty() {
        report.push("no changes requested".to_string());
    }
    Ok(report)
}

/// Read one target, run the patcher over its text, and write the result
/// back only when it differs.
fn patch_target(
    root: &Path,
    target: &str,
    report: &mut Vec<String>,
    patch: impl FnOnce(&str) -> String,
) -> Result<()> {
    let path = root.join(target);
    if !path.exists() {
        log::warn!("{target} not found under {}", root.display());
        report.push(format!("{target}: target not found"));
        return Ok(());
    }

    let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {target}"))?;
    let patched = patch(&text);
    if patched == text {
        report.push(format!("{target}: already satisfied"));
        return Ok(());
    }

    std::fs::write(&path, &patched).with_context(|| format!("Failed to write {target}"))?;
    report.push(format!("{target}: updated"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitegen_editors::HeadConfig;
    use tempfile::TempDir;

    const APP_JS: &str = concat!(
        "import { Accordion } from \"./class/Accordion.ts\";\n",
        "\n",
        "window.addEventListener(\"load\", () => {\n",
        "  new Accordion();\n",
        "});\n",
    );

    const COMMON_ASTRO: &str = concat!(
        "---\n",
        "const config = {\n",
        "  head: {\n",
        "    siteName: \"Old Site\",\n",
        "    domain: \"https://example.com\",\n",
        "  },\n",
        "  menu: [\n",
        "    {\n",
        "      link: \"/\",\n",
        "      txt: \"Home\",\n",
        "    }\n",
        "  ],\n",
        "};\n",
        "---\n",
    );

    const VARIABLES_SCSS: &str = concat!(
        "$color-prime: #111;\n",
        "$brakePoint: 768;\n",
        "$h1: 64, 40;\n",
    );

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("src/js")).unwrap();
        std::fs::create_dir_all(root.join("src/components")).unwrap();
        std::fs::create_dir_all(root.join("src/scss")).unwrap();
        std::fs::write(root.join(MANIFEST_TARGET), APP_JS).unwrap();
        std::fs::write(root.join(SITE_CONFIG_TARGET), COMMON_ASTRO).unwrap();
        std::fs::write(root.join(STYLE_VARS_TARGET), VARIABLES_SCSS).unwrap();
        dir
    }

    fn request() -> ApplySiteSettingsRequest {
        ApplySiteSettingsRequest {
            path: None,
            site: Some(SiteConfig {
                head: Some(HeadConfig {
                    site_name: Some("New Site".to_string()),
                    ..HeadConfig::default()
                }),
                menu: None,
            }),
            styles: Some(StyleConfig {
                colors: Some(
                    [("prime".to_string(), "#4f46e5".to_string())]
                        .into_iter()
                        .collect(),
                ),
                layout: None,
                font_sizes: None,
            }),
            ui_pattern: Some(UiPattern::Tab),
        }
    }

    #[test]
    fn all_targets_report_updated_then_already_satisfied() {
        let dir = project();
        let root = dir.path();

        let report = apply_site_settings_at(root, &request()).unwrap();
        assert_eq!(
            report,
            vec![
                format!("{MANIFEST_TARGET}: updated"),
                format!("{SITE_CONFIG_TARGET}: updated"),
                format!("{STYLE_VARS_TARGET}: updated"),
            ]
        );

        let manifest = std::fs::read_to_string(root.join(MANIFEST_TARGET)).unwrap();
        assert!(manifest.contains("import { Tab } from \"./class/Tab.ts\";"));
        assert!(manifest.contains("  new Tab();"));
        assert!(manifest.contains("  new Accordion();"));

        let config = std::fs::read_to_string(root.join(SITE_CONFIG_TARGET)).unwrap();
        assert!(config.contains("siteName: \"New Site\""));
        assert!(config.contains("txt: \"Home\""));

        let variables = std::fs::read_to_string(root.join(STYLE_VARS_TARGET)).unwrap();
        assert!(variables.contains("$color-prime: #4f46e5;"));

        // A second run finds everything in place.
        let report = apply_site_settings_at(root, &request()).unwrap();
        assert_eq!(
            report,
            vec![
                format!("{MANIFEST_TARGET}: already satisfied"),
                format!("{SITE_CONFIG_TARGET}: already satisfied"),
                format!("{STYLE_VARS_TARGET}: already satisfied"),
            ]
        );
    }

    #[test]
    fn missing_target_is_reported_not_raised() {
        let dir = project();
        let root = dir.path();
        std::fs::remove_file(root.join(MANIFEST_TARGET)).unwrap();

        let report = apply_site_settings_at(root, &request()).unwrap();
        assert_eq!(report[0], format!("{MANIFEST_TARGET}: target not found"));
        assert_eq!(report[1], format!("{SITE_CONFIG_TARGET}: updated"));
    }

    #[test]
    fn scriptless_pattern_needs_no_manifest_pass() {
        let dir = project();
        let root = dir.path();
        let request = ApplySiteSettingsRequest {
            ui_pattern: Some(UiPattern::Grid),
            ..ApplySiteSettingsRequest::default()
        };

        let report = apply_site_settings_at(root, &request).unwrap();
        assert_eq!(report.len(), 1);
        assert!(report[0].contains("already satisfied"));
        // The manifest is untouched.
        let manifest = std::fs::read_to_string(root.join(MANIFEST_TARGET)).unwrap();
        assert_eq!(manifest, APP_JS);
    }

    #[test]
    fn empty_request_reports_no_changes() {
        let dir = project();
        let report =
            apply_site_settings_at(dir.path(), &ApplySiteSettingsRequest::default()).unwrap();
        assert_eq!(report, vec!["no changes requested".to_string()]);
    }
}
