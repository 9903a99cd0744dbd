//! Task and issue handler implementations

use ikanban_core::{resolve_move_project, resolve_project_id, TaskFields};
use rmcp::model::CallToolResult;
use serde_json::json;
use tracing::info;

use crate::params::{
    CreateIssueParams, ListIssuesParams, ListTasksParams, MoveTaskParams, TaskIdParams,
    UpdateTaskParams,
};

use super::{json_success, to_mcp_error, McpResult, ToolContext};

/// List a team's issues, optionally filtered by status
pub async fn list_issues(ctx: &ToolContext, params: ListIssuesParams) -> McpResult<CallToolResult> {
    let team_id = ctx.team_id(params.team.as_deref());
    let issues = ctx.client.team_issues(&team_id).await.map_err(to_mcp_error)?;

    let issues: Vec<_> = issues
        .iter()
        .filter(|issue| params.status.map_or(true, |status| issue.status == status))
        .map(|issue| ctx.task_summary(issue))
        .collect();

    json_success(&json!({
        "team": ctx.aliases.team_identifier(&team_id),
        "count": issues.len(),
        "issues": issues,
    }))
}

/// List the tasks of a project
pub async fn list_tasks(ctx: &ToolContext, params: ListTasksParams) -> McpResult<CallToolResult> {
    let team_id = ctx.team_id(params.team.as_deref());
    let project_id = resolve_project_id(
        &ctx.client,
        &ctx.aliases,
        params.project.as_deref(),
        Some(&team_id),
    )
    .await
    .map_err(to_mcp_error)?;

    let tasks = ctx
        .client
        .list_tasks(&project_id, params.status)
        .await
        .map_err(to_mcp_error)?;
    json_success(&json!({ "project_id": project_id, "count": tasks.len(), "tasks": tasks }))
}

/// Full task record, with its issue key when one is defined
pub async fn get_task(ctx: &ToolContext, params: TaskIdParams) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    let task = ctx.client.get_task(&task_id).await.map_err(to_mcp_error)?;
    let issue_key = ctx.aliases.issue_key_for(&task).map(|key| key.to_string());
    json_success(&json!({ "task": task, "issue_key": issue_key }))
}

/// Create a team issue
pub async fn create_issue(ctx: &ToolContext, params: CreateIssueParams) -> McpResult<CallToolResult> {
    let team_id = ctx.team_id(params.team.as_deref());
    let fields = TaskFields {
        description: params.description,
        priority: params.priority,
        assignee_id: params.assignee_id,
        due_date: params.due_date,
    };

    let project_id = resolve_project_id(
        &ctx.client,
        &ctx.aliases,
        params.project.as_deref(),
        Some(&team_id),
    )
    .await
    .map_err(to_mcp_error)?;

    let body = fields
        .into_create(team_id, project_id, params.title, params.status)
        .map_err(to_mcp_error)?;
    let task = ctx.client.create_task(&body).await.map_err(to_mcp_error)?;

    info!(task_id = %task.id, "created issue");
    json_success(&ctx.task_summary(&task))
}

/// Update a task. The body is validated before the task key is resolved.
pub async fn update_task(ctx: &ToolContext, params: UpdateTaskParams) -> McpResult<CallToolResult> {
    let fields = TaskFields {
        description: params.description,
        priority: params.priority,
        assignee_id: params.assignee_id,
        due_date: params.due_date,
    };
    let body = fields
        .into_update(params.status, params.title)
        .map_err(to_mcp_error)?;

    let task_id = ctx.task_id(&params.task_id).await?;
    let task = ctx
        .client
        .update_task(&task_id, &body)
        .await
        .map_err(to_mcp_error)?;
    json_success(&ctx.task_summary(&task))
}

/// Delete a task permanently
pub async fn delete_task(ctx: &ToolContext, params: TaskIdParams) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    ctx.client.delete_task(&task_id).await.map_err(to_mcp_error)?;

    info!(%task_id, "deleted task");
    json_success(&json!({ "deleted": true, "task_id": task_id }))
}

/// Move a task to another project. Project names are looked up in `team`,
/// or in the task's own team when none is given.
pub async fn move_task(ctx: &ToolContext, params: MoveTaskParams) -> McpResult<CallToolResult> {
    let task_id = ctx.task_id(&params.task_id).await?;
    let team_id = params
        .team
        .as_deref()
        .filter(|team| !team.trim().is_empty())
        .map(|team| ctx.aliases.resolve_team(team));
    let project_id = resolve_move_project(
        &ctx.client,
        &ctx.aliases,
        &task_id,
        &params.project_id,
        team_id.as_deref(),
    )
    .await
    .map_err(to_mcp_error)?;

    ctx.client
        .move_task(&task_id, &project_id)
        .await
        .map_err(to_mcp_error)?;
    json_success(&json!({ "moved": true, "task_id": task_id, "project_id": project_id }))
}
