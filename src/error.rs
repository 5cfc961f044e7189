//! Error types for setupcheck operations.
//!
//! This module defines [`SetupError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks never return `SetupError` to the runner; they fold it into a
//!   failed or warning line of their `CheckResult`
//! - Only configuration loading can stop a run before the checks start
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setupcheck operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The program to spawn does not exist on the search path.
    #[error("Program not found: {program}")]
    ProgramNotFound { program: String },

    /// A spawned command did not finish before its deadline.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// No usable Python interpreter was found.
    #[error("No Python interpreter found (searched: {searched})")]
    InterpreterNotFound { searched: String },

    /// A probe snippet printed something we could not interpret.
    #[error("Unexpected probe output: {message}")]
    ProbeOutput { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setupcheck operations.
pub type Result<T> = std::result::Result<T, SetupError>;
