//! Sitegen MCP Server
//!
//! Exposes data-driven site scaffolding to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `generate_component` - component markup plus a matching style block
//! - `generate_section` - section skeleton by kind, pattern or prompt
//! - `generate_page` - complete page assembly with imports and page data
//! - `generate_schema` - type definitions from JSON, markdown or text sources
//! - `apply_site_settings` - patch the generated project files in place
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "sitegen": {
//!       "command": "sitegen-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::SitegenService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Sitegen MCP server");

    let service = SitegenService::new();
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Sitegen MCP server stopped");
    Ok(())
}
