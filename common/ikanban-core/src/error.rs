//! Error types for identifier resolution and API calls

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving identifiers or talking to the task API
#[derive(Error, Debug)]
pub enum IkanbanError {
    /// Issue key used a team code that is not in the alias table
    #[error("unknown team: {code} (known: {known})")]
    UnknownTeam {
        /// Upper-cased team code as typed by the user
        code: String,
        /// Comma-separated identifiers from the alias table
        known: String,
    },

    /// The team's issue list had no issue with the requested number
    #[error("issue {key} not found")]
    IssueNotFound {
        /// Composite key, e.g. `IKA-27`
        key: String,
    },

    /// A dynamic project alias did not match any project on the server
    #[error("project not found: {name}")]
    ProjectNotFound { name: String },

    /// No project given and the team has no default project
    #[error("no default project for team {team}, specify a project")]
    NoDefaultProject { team: String },

    /// A required reference was empty
    #[error("{0} is required")]
    MissingReference(&'static str),

    #[error("priority {0} is out of range (expected 0-4)")]
    InvalidPriority(i64),

    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDueDate(String),

    /// Update request carried no fields
    #[error("no updates specified")]
    NothingToUpdate,

    /// The server answered with a non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The envelope reported `success: false`
    #[error("API error: {0}")]
    Api(String),

    /// A successful envelope carried no `data`
    #[error("response from {0} carried no data")]
    MissingData(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// None of the document references matched a document
    #[error("no valid documents to link")]
    NoDocuments,

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IkanbanError {
    /// True for errors caused by what the user typed rather than by the server
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTeam { .. }
                | Self::MissingReference(_)
                | Self::InvalidPriority(_)
                | Self::InvalidDueDate(_)
                | Self::NothingToUpdate
                | Self::NoDefaultProject { .. }
                | Self::FileNotFound(_)
                | Self::NoDocuments
        )
    }

    /// True when a lookup completed but found nothing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IssueNotFound { .. } | Self::ProjectNotFound { .. }
        ) || matches!(self, Self::Http { status: 404, .. })
    }
}

/// Result type alias for iKanban operations
pub type IkanbanResult<T> = Result<T, IkanbanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = IkanbanError::IssueNotFound {
            key: "IKA-999".to_string(),
        };
        assert_eq!(err.to_string(), "issue IKA-999 not found");

        let err = IkanbanError::UnknownTeam {
            code: "XYZ".to_string(),
            known: "IKA, SCH".to_string(),
        };
        assert_eq!(err.to_string(), "unknown team: XYZ (known: IKA, SCH)");
    }

    #[test]
    fn test_classification() {
        assert!(IkanbanError::UnknownTeam {
            code: "X".into(),
            known: String::new(),
        }.is_user_error());
        assert!(!IkanbanError::Api("boom".into()).is_user_error());
        assert!(IkanbanError::Http {
            status: 404,
            message: "gone".into()
        }
        .is_not_found());
        assert!(!IkanbanError::Http {
            status: 500,
            message: "oops".into()
        }
        .is_not_found());
    }
}
