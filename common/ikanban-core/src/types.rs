//! Typed views of the collaborator API's JSON payloads
//!
//! Fields the API may omit are `Option`. Task records keep any fields not
//! modelled here in `extra` so `--json` output shows the full record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{IkanbanError, IkanbanResult};
use crate::vocab::TaskStatus;

/// Top-level response envelope: `{"success": bool, "data": ..., "error": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Turn a `success: false` envelope into an error, keeping `data` optional
    pub fn into_result(self) -> IkanbanResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            let reason = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "request failed".to_string());
            Err(IkanbanError::Api(reason))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// A task. Team issues are tasks with `team_id` and `issue_number` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub issue_number: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub folder_name: Option<String>,
}

/// A row of the task <-> document link table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub document_id: String,
    #[serde(default)]
    pub document_title: Option<String>,
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub linked_at: Option<String>,
}

/// Result of a multipart document upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    #[serde(default)]
    pub uploaded: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub uploaded_titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success_with_data() {
        let body = json!({"success": true, "data": [{"id": "t1", "name": "iKanban", "identifier": "IKA"}]});
        let response: ApiResponse<Vec<Team>> = serde_json::from_value(body).unwrap();
        let teams = response.into_result().unwrap().unwrap();
        assert_eq!(teams[0].identifier.as_deref(), Some("IKA"));
    }

    #[test]
    fn test_envelope_failure_prefers_error_field() {
        let body = json!({"success": false, "error": "forbidden", "message": "nope"});
        let response: ApiResponse<Value> = serde_json::from_value(body).unwrap();
        match response.into_result() {
            Err(IkanbanError::Api(reason)) => assert_eq!(reason, "forbidden"),
            other => panic!("unexpected: {other:?}"),
        }

        let body = json!({"success": false});
        let response: ApiResponse<Value> = serde_json::from_value(body).unwrap();
        assert!(matches!(response.into_result(), Err(IkanbanError::Api(r)) if r == "request failed"));
    }

    #[test]
    fn test_envelope_without_data() {
        let response: ApiResponse<Value> = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(response.into_result().unwrap(), None);
    }

    #[test]
    fn test_task_keeps_unmodelled_fields() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "project_id": "p1",
            "title": "Fix login",
            "status": "inprogress",
            "priority": 2,
            "created_at": "2026-01-02T03:04:05Z"
        }))
        .unwrap();

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.team_id, None);
        assert_eq!(task.issue_number, None);
        assert_eq!(task.extra.get("created_at"), Some(&json!("2026-01-02T03:04:05Z")));

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["created_at"], json!("2026-01-02T03:04:05Z"));
    }
}
