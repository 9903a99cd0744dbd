//! Comment commands

use anyhow::Result;
use ikanban_core::NewComment;

use super::CommandContext;
use crate::output::{print_json, CommentsList};

/// Handle the `comments` command
pub async fn list_comments(ctx: &CommandContext, reference: &str) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;
    let comments = ctx.client.list_comments(&task_id).await?;

    if ctx.json {
        return print_json(&comments);
    }
    print!("{}", CommentsList(&comments));
    Ok(())
}

/// Handle the `comment` command
pub async fn add_comment(
    ctx: &CommandContext,
    reference: &str,
    content: String,
    author_name: Option<String>,
) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;
    let body = NewComment {
        content,
        author_name: Some(author_name.unwrap_or_else(|| ctx.config.comment_author.clone())),
    };
    let comment = ctx.client.add_comment(&task_id, &body).await?;

    if ctx.json {
        return print_json(&comment);
    }
    println!("Added comment to task {}", reference);
    Ok(())
}
