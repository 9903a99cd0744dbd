//! iKanban CLI library
//!
//! Argument definitions, command handlers and table output for the
//! `ikanban` binary. The resolution logic and REST client live in
//! `ikanban-core`; `ikanban serve` hands off to `ikanban-mcp`.

pub mod cli;
pub mod handlers;
pub mod output;

pub use cli::{Cli, Commands};
pub use handlers::CommandContext;
