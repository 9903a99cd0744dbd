//! iKanban Core - identifier resolution and REST client for the iKanban task API
//!
//! Shared by the `ikanban` CLI and the `ikanban-mcp` server:
//!
//! - **Aliases**: team codes (`IKA`, `schild`) and project names to UUIDs
//! - **Issue keys**: `IKA-27` / `ika27` to task UUIDs with one API call
//! - **Vocabularies**: task statuses and priorities
//! - **Client**: typed `reqwest` wrapper around the `/api` endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use ikanban_core::{resolve_task_id, AliasTables, ApiClient, Config};
//!
//! let config = Config::load(None)?;
//! let aliases = AliasTables::from_config(&config);
//! let client = ApiClient::new(&config.api)?;
//!
//! let task_id = resolve_task_id(&client, &aliases, "IKA-27").await?;
//! let task = client.get_task(&task_id).await?;
//! ```

pub mod aliases;
pub mod client;
pub mod config;
pub mod error;
pub mod issue_key;
pub mod logging;
pub mod requests;
pub mod types;
pub mod vocab;

pub use aliases::{is_uuid_shaped, AliasTables, ProjectLookup};
pub use client::{resolve_move_project, resolve_project_id, ApiClient};
pub use config::{ApiConfig, Config, ProjectAlias, TeamConfig};
pub use error::{IkanbanError, IkanbanResult};
pub use issue_key::{resolve_task_id, IssueKey, Lookup};
pub use logging::{init_tracing, verbosity_level};
pub use requests::{CreateTask, NewComment, TaskFields, UpdateTask};
pub use types::{Comment, Document, DocumentLink, Project, Task, Team, UploadSummary};
pub use vocab::{resolve_priority, Priority, PriorityInput, TaskStatus};
