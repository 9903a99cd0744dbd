//! Comment handler implementations

use ikanban_core::NewComment;
use rmcp::model::CallToolResult;
use serde_json::json;

use crate::params::{AddCommentParams, TaskIdParams};

use super::{json_success, to_mcp_error, McpResult, ToolContext};

/// List comments on a task
pub async fn list_comments(ctx: &ToolContext, params: TaskIdParams) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    let comments = ctx.client.list_comments(&task_id).await.map_err(to_mcp_error)?;
    json_success(&json!({ "task_id": task_id, "count": comments.len(), "comments": comments }))
}

/// Add a comment; the API requires an author, so one is always sent
pub async fn add_comment(ctx: &ToolContext, params: AddCommentParams) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    let body = NewComment {
        content: params.content,
        author_name: Some(
            params
                .author_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| ctx.comment_author.clone()),
        ),
    };

    let comment = ctx
        .client
        .add_comment(&task_id, &body)
        .await
        .map_err(to_mcp_error)?;
    json_success(&json!({ "comment_id": comment.id, "task_id": task_id }))
}
