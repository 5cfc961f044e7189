//! Command-line interface for setupcheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The [`Command`] trait and [`CommandResult`]
//! - [`check`] - The verification command

pub mod args;
pub mod check;
pub mod command;

pub use args::Cli;
pub use check::{resolve_project_root, CheckCommand};
pub use command::{Command, CommandResult};
