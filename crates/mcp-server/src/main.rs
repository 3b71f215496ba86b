//! Creative Meditation MCP Server
//!
//! A contemplative catalyst for AI models: emergent sentences from random and
//! context words, canned insights, and reflective pondering.
//!
//! ## Tools
//!
//! - `creative_meditate` - Compose and interpret an emergent sentence
//! - `creative_insight` - Extract insights from the latest meditation
//! - `creative_ponder` - Reflect on insights, optionally with a haiku
//!
//! ## Prompts
//!
//! `creative_workflow`, `meditation_setup`, `insight_interpretation`, `contemplation_guide`
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "creative-meditation": {
//!       "command": "creative-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod config;
#[cfg(test)]
mod test_support;
mod tools;

use config::ServerConfig;
use tools::CreativeService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ServerConfig::from_env();
    log::info!("Starting Creative Meditation MCP server");
    log::debug!(
        "consult_base_url={} memory_dir={}",
        config.consult_base_url,
        config.memory_dir.display()
    );

    let service = CreativeService::new();
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Creative Meditation MCP server stopped");
    Ok(())
}
