//! Document handler implementations

use rmcp::model::CallToolResult;
use serde_json::json;

use crate::params::{LinkDocumentsParams, SearchDocumentsParams, TaskIdParams, UnlinkDocumentParams};

use super::{json_success, to_mcp_error, McpResult, ToolContext};

/// Search a team's documents by title, or list all of them
pub async fn search_documents(
    ctx: &ToolContext,
    params: SearchDocumentsParams,
) -> McpResult<CallToolResult> {
    let team_id = ctx.team_id(params.team.as_deref());
    let documents = ctx
        .client
        .search_documents(&team_id, params.query.as_deref())
        .await
        .map_err(to_mcp_error)?;
    json_success(&json!({ "count": documents.len(), "documents": documents }))
}

/// Documents linked to a task
pub async fn task_documents(ctx: &ToolContext, params: TaskIdParams) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    let links = ctx.client.task_documents(&task_id).await.map_err(to_mcp_error)?;
    json_success(&json!({ "task_id": task_id, "count": links.len(), "documents": links }))
}

/// Link documents (by UUID or title) to a task
pub async fn link_documents(
    ctx: &ToolContext,
    params: LinkDocumentsParams,
) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    let team_id = ctx.team_id(params.team.as_deref());
    let document_ids = ctx
        .client
        .resolve_document_ids(Some(&team_id), &params.document_ids)
        .await
        .map_err(to_mcp_error)?;

    let links = ctx
        .client
        .link_documents(&task_id, &document_ids)
        .await
        .map_err(to_mcp_error)?;
    json_success(&json!({ "task_id": task_id, "linked": links.len(), "documents": links }))
}

/// Remove one document link from a task
pub async fn unlink_document(
    ctx: &ToolContext,
    params: UnlinkDocumentParams,
) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    ctx.client
        .unlink_document(&task_id, &params.document_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&json!({
        "unlinked": true,
        "task_id": task_id,
        "document_id": params.document_id,
    }))
}
