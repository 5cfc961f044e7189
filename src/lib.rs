//! setupcheck - Verify a local Python environment for a data-science course.
//!
//! setupcheck runs a fixed sequence of checks against a course project and
//! the Python interpreter that will run it: interpreter version, virtual
//! environment, the `uv` package manager, project layout, package imports
//! and a few functionality smoke tests. It prints a human-readable report
//! and exits 0 only when the setup is complete.
//!
//! The interpreter is never embedded: every probe is a short Python snippet
//! run in its own subprocess.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks, each returning a [`checks::CheckResult`]
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter discovery, probing, and version handling
//! - [`runner`] - Check orchestration and the final verdict
//! - [`shell`] - Process execution with deadlines
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use setupcheck::checks::{check_python_version, survey_packages};
//! use setupcheck::config::SetupConfig;
//! use setupcheck::python::{MockPython, Version};
//!
//! assert!(check_python_version(Version::new(3, 12, 1), Version::new(3, 10, 0)).passed);
//!
//! let config = SetupConfig::default();
//! let python = MockPython::healthy().without_package("scipy");
//! let survey = survey_packages(
//!     Some(&python),
//!     &config.required_packages,
//!     &config.optional_packages,
//! );
//! assert!(survey.missing_required.is_empty());
//! assert_eq!(survey.missing_optional, ["scipy"]);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod python;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
