//! Document parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for searching a team's documents
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchDocumentsParams {
    #[schemars(description = "Team: IKA, SCH, team name or UUID. Defaults to the configured team")]
    pub team: Option<String>,

    #[schemars(description = "Search query (optional, omit to list all)")]
    pub query: Option<String>,
}

/// Parameters for linking documents to a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LinkDocumentsParams {
    #[schemars(description = "Task UUID or issue key (e.g., IKA-38)")]
    pub task_id: String,

    #[schemars(description = "Document UUIDs or titles to link. Titles are searched within the team")]
    pub document_ids: Vec<String>,

    #[schemars(description = "Team to search when a document is given by title. Defaults to the configured team")]
    pub team: Option<String>,
}

/// Parameters for unlinking a document from a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UnlinkDocumentParams {
    #[schemars(description = "Task UUID or issue key (e.g., IKA-38)")]
    pub task_id: String,

    #[schemars(description = "Document UUID to unlink")]
    pub document_id: String,
}
