//! MCP Server implementation
//!
//! This module defines the MCP server that exposes the iKanban task API as
//! tools. Handler implementations are in the handlers/ module.

use std::sync::Arc;

use ikanban_core::{Config, IkanbanResult};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::handlers::{self, ToolContext};
use crate::params::*;

/// The iKanban MCP Server
#[derive(Clone)]
pub struct IkanbanMcpServer {
    ctx: Arc<ToolContext>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Team & Project Tools
// ============================================================================

#[tool_router(router = team_tool_router)]
impl IkanbanMcpServer {
    #[tool(description = "List all teams in iKanban.")]
    async fn ikanban_list_teams(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_teams(&self.ctx).await
    }

    #[tool(description = "List all projects in iKanban.")]
    async fn ikanban_list_projects(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_projects(&self.ctx).await
    }
}

// ============================================================================
// Task Tools
// ============================================================================

#[tool_router(router = task_tool_router)]
impl IkanbanMcpServer {
    #[tool(description = "List issues for a team with optional status filter. Each issue carries its key, e.g. IKA-27.")]
    async fn ikanban_list_issues(
        &self,
        Parameters(params): Parameters<ListIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_issues(&self.ctx, params).await
    }

    #[tool(description = "List tasks in a project.")]
    async fn ikanban_list_tasks(
        &self,
        Parameters(params): Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_tasks(&self.ctx, params).await
    }

    #[tool(description = "Get task details by UUID or issue key (e.g., IKA-27).")]
    async fn ikanban_get_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task(&self.ctx, params).await
    }

    #[tool(description = "Create a new team issue. Returns the issue key like IKA-123.")]
    async fn ikanban_create_issue(
        &self,
        Parameters(params): Parameters<CreateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_issue(&self.ctx, params).await
    }

    #[tool(description = "Update task status, title, description, priority, assignee, or due date.")]
    async fn ikanban_update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task(&self.ctx, params).await
    }

    #[tool(description = "Delete a task permanently.")]
    async fn ikanban_delete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_task(&self.ctx, params).await
    }

    #[tool(description = "Move a task to another project.")]
    async fn ikanban_move_task(
        &self,
        Parameters(params): Parameters<MoveTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::move_task(&self.ctx, params).await
    }
}

// ============================================================================
// Comment Tools
// ============================================================================

#[tool_router(router = comment_tool_router)]
impl IkanbanMcpServer {
    #[tool(description = "List comments on a task.")]
    async fn ikanban_list_comments(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_comments(&self.ctx, params).await
    }

    #[tool(description = "Add a comment to a task.")]
    async fn ikanban_add_comment(
        &self,
        Parameters(params): Parameters<AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_comment(&self.ctx, params).await
    }
}

// ============================================================================
// Document Tools
// ============================================================================

#[tool_router(router = document_tool_router)]
impl IkanbanMcpServer {
    #[tool(description = "Search for documents in a team by title or get all documents.")]
    async fn ikanban_search_documents(
        &self,
        Parameters(params): Parameters<SearchDocumentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_documents(&self.ctx, params).await
    }

    #[tool(description = "Get all documents linked to a task.")]
    async fn ikanban_get_task_documents(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::task_documents(&self.ctx, params).await
    }

    #[tool(description = "Link one or more documents to a task.")]
    async fn ikanban_link_documents(
        &self,
        Parameters(params): Parameters<LinkDocumentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::link_documents(&self.ctx, params).await
    }

    #[tool(description = "Unlink a document from a task.")]
    async fn ikanban_unlink_document(
        &self,
        Parameters(params): Parameters<UnlinkDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::unlink_document(&self.ctx, params).await
    }
}

// ============================================================================
// Router Composition & Server Initialization
// ============================================================================

impl IkanbanMcpServer {
    pub fn new(config: &Config) -> IkanbanResult<Self> {
        let router = Self::team_tool_router()
            + Self::task_tool_router()
            + Self::comment_tool_router()
            + Self::document_tool_router();

        Ok(Self {
            ctx: Arc::new(ToolContext::new(config)?),
            tool_router: router,
        })
    }

    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for IkanbanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "iKanban MCP Server - manage iKanban teams, issues, tasks, comments \
                 and documents. Tasks can be named by UUID or by issue key \
                 (IKA-27, ika27). Teams accept IKA, SCH, a team name or UUID."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ikanban".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_registered() {
        let server = IkanbanMcpServer::new(&Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 15);

        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "ikanban_add_comment",
                "ikanban_create_issue",
                "ikanban_delete_task",
                "ikanban_get_task",
                "ikanban_get_task_documents",
                "ikanban_link_documents",
                "ikanban_list_comments",
                "ikanban_list_issues",
                "ikanban_list_projects",
                "ikanban_list_tasks",
                "ikanban_list_teams",
                "ikanban_move_task",
                "ikanban_search_documents",
                "ikanban_unlink_document",
                "ikanban_update_task",
            ]
        );
    }

    #[test]
    fn test_create_issue_schema_requires_title() {
        let server = IkanbanMcpServer::new(&Config::default()).unwrap();
        let tools = server.list_tools();
        let create = tools
            .iter()
            .find(|t| t.name == "ikanban_create_issue")
            .unwrap();

        let required = create.input_schema.get("required").unwrap();
        assert_eq!(required, &serde_json::json!(["title"]));
    }

    #[test]
    fn test_server_info_enables_tools() {
        use rmcp::ServerHandler;

        let server = IkanbanMcpServer::new(&Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("IKA-27"));
        assert_eq!(info.server_info.name, "ikanban");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }
}
