use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;

use ikanban::handlers::{self, tasks::TaskOptions, CommandContext};
use ikanban::{Cli, Commands};
use ikanban_core::{init_tracing, verbosity_level, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // MCP clients expect startup logs on stderr
    let serving = cli.mcp || matches!(cli.command, Some(Commands::Serve));
    let level = if serving {
        verbosity_level(cli.verbose).max(LevelFilter::INFO)
    } else {
        verbosity_level(cli.verbose)
    };
    init_tracing(&["ikanban", "ikanban_core", "ikanban_mcp"], level)?;

    // Resolve with priority: CLI/env > config file > defaults
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.backend_url {
        config.api.base_url = url;
    }
    if let Some(token) = cli.token {
        config.api.token = Some(token);
    }

    if cli.mcp {
        return handlers::run_serve(&config).await;
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let ctx = CommandContext::new(config, cli.json)?;

    match command {
        Commands::Teams => handlers::teams(&ctx).await,
        Commands::Projects => handlers::projects(&ctx).await,
        Commands::Issues {
            team,
            status,
            assignee,
        } => handlers::issues(&ctx, &team, status, assignee.as_deref()).await,
        Commands::Create {
            team,
            title,
            project,
            description,
            status,
            priority,
            assignee,
            due_date,
        } => {
            let options = TaskOptions {
                description,
                priority,
                assignee,
                due_date,
            };
            handlers::create(&ctx, &team, title, project.as_deref(), status, options).await
        }
        Commands::Update {
            task_id,
            status,
            title,
            description,
            priority,
            assignee,
            due_date,
        } => {
            let options = TaskOptions {
                description,
                priority,
                assignee,
                due_date,
            };
            handlers::update(&ctx, &task_id, status, title, options).await
        }
        Commands::Task { task_id } => handlers::show_task(&ctx, &task_id).await,
        Commands::Delete { task_id, force } => handlers::delete(&ctx, &task_id, force).await,
        Commands::Move {
            task_id,
            project_id,
            team,
        } => handlers::move_task(&ctx, &task_id, &project_id, team.as_deref()).await,
        Commands::Comments { task_id } => handlers::list_comments(&ctx, &task_id).await,
        Commands::Comment {
            task_id,
            content,
            author_name,
        } => handlers::add_comment(&ctx, &task_id, content, author_name).await,
        Commands::Upload {
            team,
            files,
            task,
            folder_id,
        } => {
            handlers::upload(&ctx, &team, &files, task.as_deref(), folder_id.as_deref()).await
        }
        Commands::Link {
            task_id,
            document_ids,
            team,
        } => handlers::link(&ctx, &task_id, &document_ids, team.as_deref()).await,
        Commands::Unlink {
            task_id,
            document_id,
        } => handlers::unlink(&ctx, &task_id, &document_id).await,
        Commands::Docs { task_id } => handlers::task_docs(&ctx, &task_id).await,
        Commands::SearchDocs { team, query } => {
            handlers::search_docs(&ctx, &team, query.as_deref()).await
        }
        Commands::Serve => handlers::run_serve(&ctx.config).await,
    }
}
