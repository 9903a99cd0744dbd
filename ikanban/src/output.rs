//! Human-readable and JSON output
//!
//! Each table is a `Display` wrapper; handlers print it with `print!`.

use std::fmt;

use ikanban_core::{AliasTables, Comment, Document, DocumentLink, Project, Task, Team};
use serde::Serialize;

/// Pretty-print any serializable value to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Cut `s` to at most `max` characters
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

fn rule(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(width))
}

pub struct TeamsTable<'a>(pub &'a [Team]);

impl fmt::Display for TeamsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nTeams ({}):", self.0.len())?;
        writeln!(f, "{:<38} {:<12} Identifier", "ID", "Name")?;
        rule(f, 60)?;
        for team in self.0 {
            writeln!(
                f,
                "{:<38} {:<12} {}",
                team.id,
                team.name,
                team.identifier.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}

pub struct ProjectsTable<'a>(pub &'a [Project]);

impl fmt::Display for ProjectsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nProjects ({}):", self.0.len())?;
        writeln!(f, "{:<38} Name", "ID")?;
        rule(f, 60)?;
        for project in self.0 {
            writeln!(f, "{:<38} {}", project.id, project.name)?;
        }
        Ok(())
    }
}

/// Issue list headed by the team identifier
pub struct IssuesTable<'a> {
    pub team: &'a str,
    pub issues: &'a [Task],
}

impl fmt::Display for IssuesTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{} Issues ({}):", self.team, self.issues.len())?;
        writeln!(f, "{:<8} {:<12} {:<4} Title", "#", "Status", "Pri")?;
        rule(f, 80)?;
        for issue in self.issues {
            let number = issue
                .issue_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string());
            let priority = issue
                .priority
                .filter(|p| *p != 0)
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<8} {:<12} {:<4} {}",
                format!("{}-{}", self.team, number),
                issue.status.as_str(),
                priority,
                truncate(&issue.title, 50)
            )?;
        }
        Ok(())
    }
}

/// Detail view of one task, headed by its issue key when it has one
pub struct TaskDetail<'a> {
    pub aliases: &'a AliasTables,
    pub task: &'a Task,
}

impl fmt::Display for TaskDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.task;
        let title = if task.title.is_empty() { "Untitled" } else { &task.title };
        match self.aliases.issue_key_for(task) {
            Some(key) => writeln!(f, "\n{}: {}", key, title)?,
            None => writeln!(f, "\n{}", title)?,
        }

        writeln!(f, "  ID:       {}", task.id)?;
        writeln!(f, "  Status:   {}", task.status)?;
        if let Some(priority) = task.priority.filter(|p| *p != 0) {
            writeln!(f, "  Priority: {}", priority)?;
        }
        if let Some(assignee) = &task.assignee_id {
            writeln!(f, "  Assignee: {}", assignee)?;
        }
        if let Some(due) = &task.due_date {
            writeln!(f, "  Due Date: {}", due)?;
        }
        if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
            let short = truncate(description, 100);
            let ellipsis = if short.len() < description.len() { "..." } else { "" };
            writeln!(f, "  Description: {}{}", short, ellipsis)?;
        }
        Ok(())
    }
}

pub struct CommentsList<'a>(pub &'a [Comment]);

impl fmt::Display for CommentsList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No comments on this task");
        }

        writeln!(f, "\nComments ({}):", self.0.len())?;
        rule(f, 60)?;
        for comment in self.0 {
            let created = comment.created_at.as_deref().map(|c| truncate(c, 10));
            writeln!(
                f,
                "[{}] {}:",
                created.unwrap_or(""),
                comment.author_name.as_deref().unwrap_or("Unknown")
            )?;
            writeln!(f, "  {}\n", comment.content)?;
        }
        Ok(())
    }
}

pub struct DocumentsTable<'a>(pub &'a [Document]);

impl fmt::Display for DocumentsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No documents found");
        }

        writeln!(f, "\nDocuments ({}):", self.0.len())?;
        writeln!(f, "{:<38} {:<40} {:<8} Folder", "ID", "Title", "Type")?;
        rule(f, 100)?;
        for doc in self.0 {
            writeln!(
                f,
                "{:<38} {:<40} {:<8} {}",
                doc.id,
                truncate(doc.title.as_deref().unwrap_or("Untitled"), 38),
                truncate(doc.file_type.as_deref().unwrap_or("-"), 6),
                doc.folder_name.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}

pub struct LinksTable<'a>(pub &'a [DocumentLink]);

impl fmt::Display for LinksTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nLinked Documents ({}):", self.0.len())?;
        writeln!(f, "{:<38} {:<40} Folder", "ID", "Title")?;
        rule(f, 100)?;
        for link in self.0 {
            writeln!(
                f,
                "{:<38} {:<40} {}",
                link.document_id,
                truncate(link.document_title.as_deref().unwrap_or("Untitled"), 38),
                link.folder_name.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}
