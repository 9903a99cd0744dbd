//! Serve command handler - run the MCP tools on stdio

use anyhow::Result;
use ikanban_core::Config;

/// Handle the `serve` command (and the `--mcp` flag)
pub async fn run_serve(config: &Config) -> Result<()> {
    ikanban_mcp::serve_stdio(config).await
}
