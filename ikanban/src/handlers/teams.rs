//! Team and project commands

use anyhow::Result;

use super::CommandContext;
use crate::output::{print_json, ProjectsTable, TeamsTable};

/// Handle the `teams` command
pub async fn teams(ctx: &CommandContext) -> Result<()> {
    let teams = ctx.client.list_teams().await?;
    if ctx.json {
        return print_json(&teams);
    }
    print!("{}", TeamsTable(&teams));
    Ok(())
}

/// Handle the `projects` command
pub async fn projects(ctx: &CommandContext) -> Result<()> {
    let projects = ctx.client.list_projects().await?;
    if ctx.json {
        return print_json(&projects);
    }
    print!("{}", ProjectsTable(&projects));
    Ok(())
}
