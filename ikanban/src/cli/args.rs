//! CLI argument definitions
//!
//! Contains the main CLI struct and Commands enum for clap parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use ikanban_core::TaskStatus;

#[derive(Parser, Debug)]
#[command(name = "ikanban")]
#[command(version)]
#[command(about = "iKanban CLI - manage teams, issues and documents from the terminal")]
#[command(after_help = "Tasks can be given as a UUID or an issue key: IKA-27, ika-27, IKA27, ika27")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run as an MCP server on stdio (same as `ikanban serve`)
    #[arg(long)]
    pub mcp: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $IKANBAN_CONFIG_PATH or ~/.binks/ikanban.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL
    #[arg(long, env = "VIBE_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// API token
    #[arg(long, env = "VIBE_API_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    // =========================================================================
    // Teams & projects
    // =========================================================================
    /// List all teams
    Teams,
    /// List all projects
    Projects,

    // =========================================================================
    // Issues & tasks
    // =========================================================================
    /// List team issues
    Issues {
        /// Team: IKA, SCH, team name or UUID
        team: String,
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
        /// Only issues assigned to this user UUID
        #[arg(short, long)]
        assignee: Option<String>,
    },
    /// Create an issue
    Create {
        /// Team: IKA, SCH, team name or UUID
        team: String,
        title: String,
        /// Project name or UUID (default: the team's default project)
        #[arg(long)]
        project: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, value_enum, default_value_t = TaskStatus::Todo)]
        status: TaskStatus,
        /// urgent, high, medium, low, none, or 0-4
        #[arg(short, long)]
        priority: Option<String>,
        /// Assignee user UUID
        #[arg(short, long)]
        assignee: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Update a task
    Update {
        /// Task UUID or issue key (e.g., IKA-27)
        task_id: String,
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// urgent, high, medium, low, none, or 0-4
        #[arg(short, long)]
        priority: Option<String>,
        /// Assignee user UUID
        #[arg(short, long)]
        assignee: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Get task details
    Task {
        /// Task UUID or issue key (e.g., IKA-27)
        task_id: String,
    },
    /// Delete a task
    Delete {
        /// Task UUID or issue key (e.g., IKA-27)
        task_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Move a task to another project
    Move {
        /// Task UUID or issue key (e.g., IKA-27)
        task_id: String,
        /// Project name or UUID
        project_id: String,
        /// Team whose project aliases apply (default: the task's team)
        #[arg(long)]
        team: Option<String>,
    },

    // =========================================================================
    // Comments
    // =========================================================================
    /// List task comments
    Comments {
        /// Task UUID or issue key (e.g., IKA-27)
        task_id: String,
    },
    /// Add a comment
    Comment {
        /// Task UUID or issue key (e.g., IKA-27)
        task_id: String,
        content: String,
        /// Author name (default: from config)
        #[arg(long = "author")]
        author_name: Option<String>,
    },

    // =========================================================================
    // Documents
    // =========================================================================
    /// Upload files to a team, optionally linking them to a task
    Upload {
        /// Team: IKA, SCH, team name or UUID
        team: String,
        /// File(s) to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Task to link uploaded docs to (e.g., IKA-38)
        #[arg(short, long)]
        task: Option<String>,
        /// Folder UUID to upload into
        #[arg(short, long)]
        folder_id: Option<String>,
    },
    /// Link documents to a task
    Link {
        /// Task UUID or issue key (e.g., IKA-38)
        task_id: String,
        /// Document UUID(s) or title(s)
        #[arg(required = true)]
        document_ids: Vec<String>,
        /// Team to search (required when linking by title)
        #[arg(long)]
        team: Option<String>,
    },
    /// Unlink a document from a task
    Unlink {
        /// Task UUID or issue key (e.g., IKA-38)
        task_id: String,
        /// Document UUID
        document_id: String,
    },
    /// List documents linked to a task
    Docs {
        /// Task UUID or issue key (e.g., IKA-38)
        task_id: String,
    },
    /// Search documents in a team
    SearchDocs {
        /// Team: IKA, SCH, team name or UUID
        team: String,
        /// Search query (lists all documents if omitted)
        query: Option<String>,
    },

    // =========================================================================
    // MCP
    // =========================================================================
    /// Run as an MCP server on stdio
    Serve,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "ikanban", "create", "IKA", "Fix login", "-p", "high", "-s", "inprogress", "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Some(Commands::Create {
                team,
                title,
                priority,
                status,
                project,
                ..
            }) => {
                assert_eq!(team, "IKA");
                assert_eq!(title, "Fix login");
                assert_eq!(priority.as_deref(), Some("high"));
                assert_eq!(status, TaskStatus::InProgress);
                assert_eq!(project, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_status_choices_are_closed() {
        assert!(Cli::try_parse_from(["ikanban", "issues", "IKA", "-s", "blocked"]).is_err());
        assert!(Cli::try_parse_from(["ikanban", "issues", "IKA", "-s", "cancelled"]).is_ok());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["ikanban", "-vv", "teams"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_upload_needs_files() {
        assert!(Cli::try_parse_from(["ikanban", "upload", "IKA"]).is_err());
        let cli = Cli::try_parse_from(["ikanban", "upload", "IKA", "a.md", "b.md", "-t", "IKA-38"])
            .unwrap();
        match cli.command {
            Some(Commands::Upload { files, task, .. }) => {
                assert_eq!(files.len(), 2);
                assert_eq!(task.as_deref(), Some("IKA-38"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
