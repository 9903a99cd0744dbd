//! Handler implementations for iKanban MCP tools
//!
//! Organized by domain: team, task, comment, document

mod comment;
mod document;
mod task;
mod team;

pub use comment::*;
pub use document::*;
pub use task::*;
pub use team::*;

use ikanban_core::{
    resolve_task_id, AliasTables, ApiClient, Config, IkanbanError, IkanbanResult, Task,
};
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Everything a tool call needs: the API client and the alias tables
pub struct ToolContext {
    pub client: ApiClient,
    pub aliases: AliasTables,
    pub default_team: String,
    pub comment_author: String,
}

impl ToolContext {
    pub fn new(config: &Config) -> IkanbanResult<Self> {
        Ok(Self {
            client: ApiClient::new(&config.api)?,
            aliases: AliasTables::from_config(config),
            default_team: config.default_team.clone(),
            comment_author: config.comment_author.clone(),
        })
    }

    /// Team UUID for an optional team argument, falling back to the default team
    pub fn team_id(&self, team: Option<&str>) -> String {
        let team = team
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.default_team);
        self.aliases.resolve_team(team)
    }

    /// Task UUID for a UUID or issue key
    pub async fn task_id(&self, reference: &str) -> McpResult<String> {
        resolve_task_id(&self.client, &self.aliases, reference)
            .await
            .map_err(to_mcp_error)
    }

    /// Compact view of a task with its issue key when one is defined
    pub fn task_summary(&self, task: &Task) -> Value {
        json!({
            "id": task.id,
            "issue_key": self.aliases.issue_key_for(task).map(|key| key.to_string()),
            "title": task.title,
            "status": task.status,
            "priority": task.priority,
        })
    }
}

/// Map a library error onto the MCP error codes
pub fn to_mcp_error(e: IkanbanError) -> McpError {
    if e.is_not_found() {
        McpError::resource_not_found(e.to_string(), None)
    } else if e.is_user_error() {
        McpError::invalid_params(e.to_string(), None)
    } else {
        McpError::internal_error(e.to_string(), None)
    }
}

/// Create a successful JSON response from any serializable data
pub fn json_success<T: Serialize>(data: &T) -> McpResult<CallToolResult> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Context pointed at a closed local port; anything that reaches the
    /// network fails with a connection error.
    pub fn offline_context() -> ToolContext {
        let mut config = Config::default();
        config.api.base_url = "http://127.0.0.1:9".to_string();
        config.api.timeout_seconds = 2;
        ToolContext::new(&config).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::offline_context;
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_error_mapping() {
        let err = to_mcp_error(IkanbanError::UnknownTeam {
            code: "XYZ".into(),
            known: "IKA, SCH".into(),
        });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "unknown team: XYZ (known: IKA, SCH)");

        let err = to_mcp_error(IkanbanError::IssueNotFound { key: "IKA-9".into() });
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);

        let err = to_mcp_error(IkanbanError::Api("boom".into()));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_team_id_defaults() {
        let ctx = offline_context();
        let ika = "a263e43f-43d3-4af7-a947-5f70e6670921";
        assert_eq!(ctx.team_id(None), ika);
        assert_eq!(ctx.team_id(Some("")), ika);
        assert_eq!(ctx.team_id(Some("sch")), "a2f22deb-901e-436b-9755-644cb26753b7");
    }

    #[test]
    fn test_task_summary_includes_issue_key() {
        let ctx = offline_context();
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "team_id": "a2f22deb-901e-436b-9755-644cb26753b7",
            "issue_number": 5,
            "title": "Wire up auth",
            "status": "inreview",
            "priority": 1
        }))
        .unwrap();

        let summary = ctx.task_summary(&task);
        assert_eq!(summary["issue_key"], "SCH-5");
        assert_eq!(summary["status"], "inreview");

        let mut orphan = task.clone();
        orphan.team_id = None;
        assert_eq!(ctx.task_summary(&orphan)["issue_key"], Value::Null);
    }

    #[test]
    fn test_json_success() {
        let result = json_success(&json!({"count": 2})).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }
}
