//! Task and issue parameter types

use ikanban_core::{PriorityInput, TaskStatus};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing a team's issues
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListIssuesParams {
    #[schemars(description = "Team: IKA, SCH, team name or UUID. Defaults to the configured team")]
    pub team: Option<String>,

    #[schemars(description = "Filter by status")]
    pub status: Option<TaskStatus>,
}

/// Parameters for listing the tasks of a project
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    #[schemars(description = "Project name or UUID. Defaults to the team's default project")]
    pub project: Option<String>,

    #[schemars(description = "Team whose project aliases apply. Defaults to the configured team")]
    pub team: Option<String>,

    #[schemars(description = "Filter by status")]
    pub status: Option<TaskStatus>,
}

/// Parameters for creating a team issue
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    #[schemars(description = "Issue title")]
    pub title: String,

    #[schemars(description = "Team: IKA, SCH, team name or UUID. Defaults to the configured team")]
    pub team: Option<String>,

    #[schemars(description = "Project name or UUID. Defaults to the team's default project")]
    pub project: Option<String>,

    #[schemars(description = "Issue description (markdown)")]
    pub description: Option<String>,

    #[schemars(description = "Initial status, defaults to todo")]
    pub status: Option<TaskStatus>,

    #[schemars(description = "0=None, 1=Urgent, 2=High, 3=Medium, 4=Low, or the name")]
    pub priority: Option<PriorityInput>,

    #[schemars(description = "Assignee user UUID")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Due date as YYYY-MM-DD")]
    pub due_date: Option<String>,
}

/// Parameters for updating a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task UUID or issue key (e.g., IKA-38)")]
    pub task_id: String,

    #[schemars(description = "New status")]
    pub status: Option<TaskStatus>,

    #[schemars(description = "New title")]
    pub title: Option<String>,

    #[schemars(description = "New description")]
    pub description: Option<String>,

    #[schemars(description = "0=None, 1=Urgent, 2=High, 3=Medium, 4=Low, or the name")]
    pub priority: Option<PriorityInput>,

    #[schemars(description = "Assignee user UUID")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Due date as YYYY-MM-DD")]
    pub due_date: Option<String>,
}

/// Parameters for moving a task to another project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MoveTaskParams {
    #[schemars(description = "Task UUID or issue key (e.g., IKA-38)")]
    pub task_id: String,

    #[schemars(description = "Target project name or UUID")]
    pub project_id: String,

    #[schemars(description = "Team whose project aliases apply. Defaults to the task's own team")]
    pub team: Option<String>,
}
