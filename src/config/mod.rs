//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use setupcheck::config::{load_config, CONFIG_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE), "title: Stats 101").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.title, "Stats 101");
//! assert_eq!(config.package_manager, "uv");
//! ```
//!
//! # Configuration File Location
//!
//! `--config <FILE>` if given, otherwise `.setupcheck.yml` in the project
//! root. The file is optional; every field has a default.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_root, load_config, load_config_file, CONFIG_FILE};
pub use schema::{PackageSpec, PlotSettings, SetupConfig, Timeouts};
pub use validator::validate;
