//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! running `setupcheck` runs every check.

use clap::Parser;
use std::path::PathBuf;

/// Verify a local Python environment is ready for the data-science course.
#[derive(Debug, Parser)]
#[command(name = "setupcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .setupcheck.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter to check (path, or a name looked up on PATH)
    #[arg(long, env = "SETUPCHECK_PYTHON")]
    pub python: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
