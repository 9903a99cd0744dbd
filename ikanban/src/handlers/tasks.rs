//! Issue and task commands

use std::io;

use anyhow::Result;
use ikanban_core::{
    resolve_move_project, resolve_project_id, PriorityInput, TaskFields, TaskStatus,
};
use serde_json::json;
use tracing::info;

use super::{confirm, CommandContext};
use crate::output::{print_json, IssuesTable, TaskDetail};

/// Options shared by `create` and `update`
#[derive(Debug, Default)]
pub struct TaskOptions {
    pub description: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
}

impl From<TaskOptions> for TaskFields {
    fn from(options: TaskOptions) -> Self {
        TaskFields {
            description: options.description,
            priority: options.priority.map(PriorityInput::Text),
            assignee_id: options.assignee,
            due_date: options.due_date,
        }
    }
}

/// Handle the `issues` command
pub async fn issues(
    ctx: &CommandContext,
    team: &str,
    status: Option<TaskStatus>,
    assignee: Option<&str>,
) -> Result<()> {
    let team_id = ctx.team_id(team);
    let issues: Vec<_> = ctx
        .client
        .team_issues(&team_id)
        .await?
        .into_iter()
        .filter(|issue| status.map_or(true, |s| issue.status == s))
        .filter(|issue| assignee.map_or(true, |a| issue.assignee_id.as_deref() == Some(a)))
        .collect();

    if ctx.json {
        return print_json(&issues);
    }

    let label = ctx.team_label(&team_id);
    print!(
        "{}",
        IssuesTable {
            team: &label,
            issues: &issues
        }
    );
    Ok(())
}

/// Handle the `create` command
pub async fn create(
    ctx: &CommandContext,
    team: &str,
    title: String,
    project: Option<&str>,
    status: TaskStatus,
    options: TaskOptions,
) -> Result<()> {
    let team_id = ctx.team_id(team);
    let fields = TaskFields::from(options);
    let project_id = resolve_project_id(&ctx.client, &ctx.aliases, project, Some(&team_id)).await?;

    let body = fields.into_create(team_id.clone(), project_id, title, Some(status))?;
    let task = ctx.client.create_task(&body).await?;
    info!(task_id = %task.id, "created task");

    if ctx.json {
        return print_json(&task);
    }

    let number = task
        .issue_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    println!("Created {}-{}: {}", ctx.team_label(&team_id), number, task.title);
    println!("  ID: {}", task.id);
    println!("  Status: {}", task.status);
    Ok(())
}

/// Handle the `update` command
pub async fn update(
    ctx: &CommandContext,
    reference: &str,
    status: Option<TaskStatus>,
    title: Option<String>,
    options: TaskOptions,
) -> Result<()> {
    let body = TaskFields::from(options).into_update(status, title)?;
    let task_id = ctx.task_id(reference).await?;
    let task = ctx.client.update_task(&task_id, &body).await?;

    if ctx.json {
        return print_json(&task);
    }
    println!("Updated: {}", task.title);
    println!("  Status: {}", task.status);
    Ok(())
}

/// Handle the `task` command
pub async fn show_task(ctx: &CommandContext, reference: &str) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;
    let task = ctx.client.get_task(&task_id).await?;

    if ctx.json {
        return print_json(&task);
    }
    print!(
        "{}",
        TaskDetail {
            aliases: &ctx.aliases,
            task: &task
        }
    );
    Ok(())
}

/// Handle the `delete` command; asks for confirmation unless forced
pub async fn delete(ctx: &CommandContext, reference: &str, force: bool) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;

    if !force {
        let prompt = format!("Delete task {}?", reference);
        if !confirm(&prompt, &mut io::stdin().lock(), &mut io::stdout())? {
            println!("Cancelled");
            return Ok(());
        }
    }

    ctx.client.delete_task(&task_id).await?;
    info!(%task_id, "deleted task");

    if ctx.json {
        return print_json(&json!({ "deleted": true, "task_id": task_id }));
    }
    println!("Deleted task: {}", reference);
    Ok(())
}

/// Handle the `move` command
pub async fn move_task(
    ctx: &CommandContext,
    reference: &str,
    project: &str,
    team: Option<&str>,
) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;
    let team_id = team.map(|team| ctx.team_id(team));
    let project_id = resolve_move_project(
        &ctx.client,
        &ctx.aliases,
        &task_id,
        project,
        team_id.as_deref(),
    )
    .await?;

    let task = ctx.client.move_task(&task_id, &project_id).await?;

    if ctx.json {
        return print_json(&task);
    }
    println!("Moved task to project: {}", project_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_become_text_priority() {
        let fields = TaskFields::from(TaskOptions {
            priority: Some("urgent".into()),
            assignee: Some("user-1".into()),
            ..Default::default()
        });
        assert_eq!(fields.priority, Some(PriorityInput::Text("urgent".into())));
        assert_eq!(fields.assignee_id.as_deref(), Some("user-1"));

        let update = fields.into_update(None, None).unwrap();
        assert_eq!(update.priority, Some(1));
    }
}
