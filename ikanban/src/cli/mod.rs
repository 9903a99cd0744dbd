//! CLI module
//!
//! Argument definitions for clap parsing.

pub mod args;

pub use args::{Cli, Commands};
