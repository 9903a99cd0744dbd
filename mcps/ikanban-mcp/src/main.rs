//! iKanban MCP Server
//!
//! Serves the iKanban task API as MCP tools over stdio.
//!
//! # Configuration
//! Set `VIBE_API_TOKEN` (and optionally `VIBE_BACKEND_URL`) or configure in
//! `~/.binks/ikanban.toml`

use ikanban_core::Config;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ikanban_core::init_tracing(&["ikanban_mcp", "ikanban_core"], LevelFilter::INFO)?;

    let config = Config::load(None)?;
    ikanban_mcp::serve_stdio(&config).await
}
