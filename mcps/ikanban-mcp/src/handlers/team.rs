//! Team and project handler implementations

use rmcp::model::CallToolResult;
use serde_json::json;

use super::{json_success, to_mcp_error, McpResult, ToolContext};

/// List all teams
pub async fn list_teams(ctx: &ToolContext) -> McpResult<CallToolResult> {
    let teams = ctx.client.list_teams().await.map_err(to_mcp_error)?;
    json_success(&json!({ "teams": teams, "count": teams.len() }))
}

/// List all projects
pub async fn list_projects(ctx: &ToolContext) -> McpResult<CallToolResult> {
    let projects = ctx.client.list_projects().await.map_err(to_mcp_error)?;
    json_success(&json!({ "projects": projects, "count": projects.len() }))
}
