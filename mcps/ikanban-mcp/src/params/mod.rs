//! Parameter types for iKanban MCP tools

mod comment;
mod document;
mod task;

pub use comment::*;
pub use document::*;
pub use task::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}

/// Parameters for tools that act on a single task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "Task UUID or issue key (e.g., IKA-38, ika38)")]
    pub task_id: String,
}
