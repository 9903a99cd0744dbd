//! Comment parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for adding a comment to a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "Task UUID or issue key (e.g., IKA-38)")]
    pub task_id: String,

    #[schemars(description = "Comment text (markdown supported)")]
    pub content: String,

    #[schemars(description = "Author shown on the comment. Defaults to the configured author")]
    pub author_name: Option<String>,
}
