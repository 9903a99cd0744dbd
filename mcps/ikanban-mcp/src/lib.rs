//! iKanban MCP Library
//!
//! MCP-compatible tools for the iKanban task API. Every task argument takes a
//! UUID or an issue key (`IKA-27`, `ika27`).
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use ikanban_mcp::IkanbanMcpServer;
//!
//! let server = IkanbanMcpServer::new(&config)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Configuration
//! Set `VIBE_API_TOKEN` (and optionally `VIBE_BACKEND_URL`) or configure in
//! `~/.binks/ikanban.toml`

pub mod handlers;
pub mod params;
pub mod server;

use ikanban_core::Config;
use rmcp::{transport::stdio, ServiceExt};

// Re-export main server type
pub use server::IkanbanMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;

/// Serve the tools over stdio until the client disconnects
pub async fn serve_stdio(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Starting iKanban MCP Server");
    tracing::info!("Backend URL: {}", config.api.base_url);

    let server = IkanbanMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
