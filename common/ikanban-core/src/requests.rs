//! Request bodies and the validation applied before they are sent
//!
//! User input arrives loosely typed (priority as name or number, due date as
//! a string). Building a body validates it so a bad value never reaches the
//! API.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{IkanbanError, IkanbanResult};
use crate::vocab::{resolve_priority, Priority, PriorityInput, TaskStatus};

/// `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTask {
    pub project_id: String,
    pub title: String,
    pub team_id: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// `PUT /api/tasks/{id}`; only fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl UpdateTask {
    pub fn is_empty(&self) -> bool {
        self == &UpdateTask::default()
    }
}

/// `POST /api/tasks/{id}/comments`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

/// `POST /api/tasks/{id}/move`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveTask {
    pub project_id: String,
}

/// `POST /api/tasks/{id}/links`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkDocuments {
    pub document_ids: Vec<String>,
}

/// Unvalidated fields shared by create and update
#[derive(Debug, Clone, Default)]
pub struct TaskFields {
    pub description: Option<String>,
    pub priority: Option<PriorityInput>,
    pub assignee_id: Option<String>,
    pub due_date: Option<String>,
}

/// Resolve and range-check a priority.
///
/// Unparseable input is dropped (`Ok(None)`); a number outside 0-4 is an
/// error.
pub fn validate_priority(input: Option<PriorityInput>) -> IkanbanResult<Option<u8>> {
    match input.and_then(resolve_priority) {
        Some(code) => Ok(Some(Priority::try_from(code)?.code())),
        None => Ok(None),
    }
}

/// Accept `YYYY-MM-DD` only
pub fn validate_due_date(input: Option<String>) -> IkanbanResult<Option<String>> {
    match input.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map(|parsed| Some(parsed.format("%Y-%m-%d").to_string()))
            .map_err(|_| IkanbanError::InvalidDueDate(date)),
        None => Ok(None),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TaskFields {
    /// Build a create body for an already resolved team and project
    pub fn into_create(
        self,
        team_id: String,
        project_id: String,
        title: String,
        status: Option<TaskStatus>,
    ) -> IkanbanResult<CreateTask> {
        Ok(CreateTask {
            project_id,
            title,
            team_id,
            status: status.unwrap_or_default(),
            description: non_empty(self.description),
            priority: validate_priority(self.priority)?,
            assignee_id: non_empty(self.assignee_id),
            due_date: validate_due_date(self.due_date)?,
        })
    }

    /// Build an update body; fails if nothing would change
    pub fn into_update(
        self,
        status: Option<TaskStatus>,
        title: Option<String>,
    ) -> IkanbanResult<UpdateTask> {
        let update = UpdateTask {
            status,
            title: non_empty(title),
            description: non_empty(self.description),
            priority: validate_priority(self.priority)?,
            assignee_id: non_empty(self.assignee_id),
            due_date: validate_due_date(self.due_date)?,
        };

        if update.is_empty() {
            return Err(IkanbanError::NothingToUpdate);
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_omits_absent_fields() {
        let body = TaskFields::default()
            .into_create("team".into(), "project".into(), "Fix bug".into(), None)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "project_id": "project",
                "title": "Fix bug",
                "team_id": "team",
                "status": "todo"
            })
        );
    }

    #[test]
    fn test_create_body_resolves_priority_name() {
        let fields = TaskFields {
            priority: Some("High".into()),
            due_date: Some("2026-11-01".into()),
            ..Default::default()
        };
        let body = fields
            .into_create("t".into(), "p".into(), "x".into(), Some(TaskStatus::InReview))
            .unwrap();
        assert_eq!(body.priority, Some(2));
        assert_eq!(body.due_date.as_deref(), Some("2026-11-01"));
        assert_eq!(body.status, TaskStatus::InReview);
    }

    #[test]
    fn test_unparseable_priority_is_dropped() {
        assert_eq!(validate_priority(Some("bogus".into())).unwrap(), None);
        assert_eq!(validate_priority(None).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_priority_is_rejected() {
        assert!(matches!(
            validate_priority(Some(PriorityInput::Code(7))),
            Err(IkanbanError::InvalidPriority(7))
        ));
        assert!(validate_priority(Some("12".into())).is_err());
    }

    #[test]
    fn test_due_date_validation() {
        assert_eq!(validate_due_date(None).unwrap(), None);
        assert_eq!(validate_due_date(Some("".into())).unwrap(), None);
        assert!(matches!(
            validate_due_date(Some("next friday".into())),
            Err(IkanbanError::InvalidDueDate(_))
        ));
        assert!(validate_due_date(Some("2026-02-30".into())).is_err());
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let err = TaskFields::default().into_update(None, None).unwrap_err();
        assert!(matches!(err, IkanbanError::NothingToUpdate));

        // A dropped priority alone still counts as nothing to update
        let fields = TaskFields {
            priority: Some("bogus".into()),
            ..Default::default()
        };
        assert!(fields.into_update(None, None).is_err());
    }

    #[test]
    fn test_update_body_only_carries_changes() {
        let update = TaskFields::default()
            .into_update(Some(TaskStatus::Done), None)
            .unwrap();
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"status": "done"}));
    }
}
