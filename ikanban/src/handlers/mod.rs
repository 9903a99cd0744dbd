//! Command handlers module
//!
//! One handler per subcommand, grouped by domain. CommandContext carries the
//! resolved configuration, the API client and the alias tables.

use std::io::{BufRead, Write};

use anyhow::Result;
use ikanban_core::{resolve_task_id, AliasTables, ApiClient, Config};

pub mod comments;
pub mod documents;
pub mod serve;
pub mod tasks;
pub mod teams;

pub use comments::{add_comment, list_comments};
pub use documents::{link, search_docs, task_docs, unlink, upload};
pub use serve::run_serve;
pub use tasks::{create, delete, issues, move_task, show_task, update};
pub use teams::{projects, teams};

/// Shared context for command handlers
pub struct CommandContext {
    pub config: Config,
    pub client: ApiClient,
    pub aliases: AliasTables,
    /// Print JSON instead of tables
    pub json: bool,
}

impl CommandContext {
    pub fn new(config: Config, json: bool) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        let aliases = AliasTables::from_config(&config);

        Ok(Self {
            config,
            client,
            aliases,
            json,
        })
    }

    /// Team UUID for a positional team argument
    pub fn team_id(&self, team: &str) -> String {
        self.aliases.resolve_team(team)
    }

    /// Short identifier for display, `?` when the team is not in the alias table
    pub fn team_label(&self, team_id: &str) -> String {
        self.aliases
            .team_identifier(team_id)
            .unwrap_or("?")
            .to_string()
    }

    /// Task UUID for a UUID or issue key
    pub async fn task_id(&self, reference: &str) -> Result<String> {
        Ok(resolve_task_id(&self.client, &self.aliases, reference).await?)
    }
}

/// Ask a yes/no question; only `y`/`Y` counts as yes
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm_accepts_only_y() {
        for (answer, expected) in [("y\n", true), ("Y\n", true), ("yes\n", false), ("\n", false), ("", false)] {
            let mut input = Cursor::new(answer.as_bytes());
            let mut output = Vec::new();
            let confirmed = confirm("Delete task IKA-1?", &mut input, &mut output).unwrap();
            assert_eq!(confirmed, expected, "answer {:?}", answer);
            assert_eq!(String::from_utf8(output).unwrap(), "Delete task IKA-1? [y/N] ");
        }
    }

    #[test]
    fn test_team_label() {
        let ctx = CommandContext::new(Config::default(), false).unwrap();
        assert_eq!(ctx.team_label(&ctx.team_id("sch")), "SCH");
        assert_eq!(ctx.team_label("not-a-team"), "?");
    }
}
