//! Document commands: upload, link, unlink, list and search

use std::path::PathBuf;

use anyhow::Result;
use ikanban_core::UploadSummary;
use serde_json::json;
use tracing::warn;

use super::CommandContext;
use crate::output::{print_json, DocumentsTable, LinksTable};

fn print_upload_summary(summary: &UploadSummary) {
    println!("\nUpload Results:");
    println!("  Uploaded: {}", summary.uploaded);
    if summary.skipped > 0 {
        println!("  Skipped (duplicates): {}", summary.skipped);
    }
    if !summary.errors.is_empty() {
        println!("  Errors: {}", summary.errors.join(", "));
    }
    if !summary.uploaded_titles.is_empty() {
        println!("  Titles: {}", summary.uploaded_titles.join(", "));
    }
}

/// Handle the `upload` command, linking the new documents when a task is given
pub async fn upload(
    ctx: &CommandContext,
    team: &str,
    files: &[PathBuf],
    task: Option<&str>,
    folder_id: Option<&str>,
) -> Result<()> {
    let team_id = ctx.team_id(team);
    // Resolve the task first so a bad key never leaves unlinked uploads behind
    let task_id = match task {
        Some(reference) => Some(ctx.task_id(reference).await?),
        None => None,
    };
    let summary = ctx.client.upload_documents(&team_id, files, folder_id).await?;

    if ctx.json {
        print_json(&summary)?;
    } else {
        print_upload_summary(&summary);
    }

    let (Some(reference), Some(task_id)) = (task, task_id) else {
        return Ok(());
    };
    if summary.uploaded == 0 {
        return Ok(());
    }

    let document_ids = ctx
        .client
        .find_uploaded_documents(&team_id, &summary.uploaded_titles)
        .await?;
    if document_ids.is_empty() {
        warn!("could not find document IDs to link to task {}", reference);
        return Ok(());
    }

    let links = ctx.client.link_documents(&task_id, &document_ids).await?;
    if !ctx.json {
        println!("\n  Linked {} document(s) to task {}", links.len(), reference);
    }
    Ok(())
}

/// Handle the `link` command
pub async fn link(
    ctx: &CommandContext,
    reference: &str,
    documents: &[String],
    team: Option<&str>,
) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;
    let team_id = team.map(|t| ctx.team_id(t));
    let document_ids = ctx
        .client
        .resolve_document_ids(team_id.as_deref(), documents)
        .await?;

    let links = ctx.client.link_documents(&task_id, &document_ids).await?;

    if ctx.json {
        return print_json(&links);
    }
    println!("Linked {} document(s) to task {}", links.len(), reference);
    for link in &links {
        let title = link.document_title.as_deref().unwrap_or("Untitled");
        match &link.folder_name {
            Some(folder) => println!("  - {} ({})", title, folder),
            None => println!("  - {}", title),
        }
    }
    Ok(())
}

/// Handle the `unlink` command
pub async fn unlink(ctx: &CommandContext, reference: &str, document_id: &str) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;
    ctx.client.unlink_document(&task_id, document_id).await?;

    if ctx.json {
        return print_json(&json!({
            "unlinked": true,
            "task_id": task_id,
            "document_id": document_id,
        }));
    }
    println!("Unlinked document {} from task {}", document_id, reference);
    Ok(())
}

/// Handle the `docs` command
pub async fn task_docs(ctx: &CommandContext, reference: &str) -> Result<()> {
    let task_id = ctx.task_id(reference).await?;
    let links = ctx.client.task_documents(&task_id).await?;

    if ctx.json {
        return print_json(&links);
    }
    if links.is_empty() {
        println!("No documents linked to task {}", reference);
        return Ok(());
    }
    print!("{}", LinksTable(&links));
    Ok(())
}

/// Handle the `search-docs` command
pub async fn search_docs(ctx: &CommandContext, team: &str, query: Option<&str>) -> Result<()> {
    let team_id = ctx.team_id(team);
    let documents = ctx.client.search_documents(&team_id, query).await?;

    if ctx.json {
        return print_json(&documents);
    }
    print!("{}", DocumentsTable(&documents));
    Ok(())
}
