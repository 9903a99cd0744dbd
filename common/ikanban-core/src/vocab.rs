//! Closed vocabularies: task status and priority
//!
//! Both sets are fixed. Anything outside them is rejected before a request
//! body is built.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{IkanbanError, IkanbanResult};

/// Task workflow status, as used on the wire and in `--status` choices
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    #[value(name = "todo")]
    Todo,
    #[value(name = "inprogress")]
    InProgress,
    #[value(name = "inreview")]
    InReview,
    #[value(name = "done")]
    Done,
    #[value(name = "cancelled")]
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Done,
        TaskStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::InReview => "inreview",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    /// Case-sensitive, exactly the five wire values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

/// Priority codes. 0 is "no priority", 1 is the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    None = 0,
    Urgent = 1,
    High = 2,
    Medium = 3,
    Low = 4,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::None,
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::None => "none",
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Case-insensitive name lookup
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Priority::ALL.into_iter().find(|p| p.name() == lower)
    }
}

impl TryFrom<i64> for Priority {
    type Error = IkanbanError;

    fn try_from(value: i64) -> IkanbanResult<Self> {
        Priority::ALL
            .into_iter()
            .find(|p| i64::from(p.code()) == value)
            .ok_or(IkanbanError::InvalidPriority(value))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Priority as a caller may supply it: a number or a name/numeric string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PriorityInput {
    Code(i64),
    Text(String),
}

impl From<i64> for PriorityInput {
    fn from(value: i64) -> Self {
        PriorityInput::Code(value)
    }
}

impl From<i32> for PriorityInput {
    fn from(value: i32) -> Self {
        PriorityInput::Code(i64::from(value))
    }
}

impl From<&str> for PriorityInput {
    fn from(value: &str) -> Self {
        PriorityInput::Text(value.to_string())
    }
}

impl From<String> for PriorityInput {
    fn from(value: String) -> Self {
        PriorityInput::Text(value)
    }
}

/// Map a priority name or numeric string to its integer code.
///
/// Integers pass through untouched. Strings are matched against the names
/// first, then parsed as an integer. Returns `None` when neither works, so
/// the caller can omit the field instead of failing.
pub fn resolve_priority(value: impl Into<PriorityInput>) -> Option<i64> {
    match value.into() {
        PriorityInput::Code(code) => Some(code),
        PriorityInput::Text(text) => match Priority::from_name(&text) {
            Some(priority) => Some(i64::from(priority.code())),
            None => text.trim().parse::<i64>().ok(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_names_are_bijective() {
        let expected = [("none", 0), ("urgent", 1), ("high", 2), ("medium", 3), ("low", 4)];
        for (name, code) in expected {
            assert_eq!(resolve_priority(name), Some(code));
            assert_eq!(resolve_priority(name.to_uppercase()), Some(code));
            let priority = Priority::try_from(code).unwrap();
            assert_eq!(priority.name(), name);
        }
    }

    #[test]
    fn test_priority_numeric_and_passthrough() {
        assert_eq!(resolve_priority("3"), Some(3));
        assert_eq!(resolve_priority(" 2 "), Some(2));
        assert_eq!(resolve_priority(2), Some(2));
        assert_eq!(resolve_priority(9), Some(9));
    }

    #[test]
    fn test_priority_unparseable_is_none() {
        assert_eq!(resolve_priority("bogus"), None);
        assert_eq!(resolve_priority(""), None);
    }

    #[test]
    fn test_priority_range_is_enforced() {
        assert!(Priority::try_from(4).is_ok());
        assert!(matches!(
            Priority::try_from(5),
            Err(IkanbanError::InvalidPriority(5))
        ));
        assert!(Priority::try_from(-1).is_err());
    }

    #[test]
    fn test_priority_input_deserializes_both_shapes() {
        let code: PriorityInput = serde_json::from_str("1").unwrap();
        assert_eq!(code, PriorityInput::Code(1));
        let text: PriorityInput = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(text, PriorityInput::Text("high".to_string()));
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"inprogress\"");
        let parsed: TaskStatus = serde_json::from_str("\"inreview\"").unwrap();
        assert_eq!(parsed, TaskStatus::InReview);
        assert!(serde_json::from_str::<TaskStatus>("\"blocked\"").is_err());
    }

    #[test]
    fn test_status_from_str_is_case_sensitive() {
        assert_eq!("done".parse::<TaskStatus>(), Ok(TaskStatus::Done));
        assert!("Done".parse::<TaskStatus>().is_err());
        let names: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["todo", "inprogress", "inreview", "done", "cancelled"]);
    }
}
