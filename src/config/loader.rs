//! Configuration file discovery and loading.

use crate::config::schema::SetupConfig;
use crate::config::validator::validate;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE: &str = ".setupcheck.yml";

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.setupcheck.yml` (explicit marker)
/// 2. `pyproject.toml` (the course manifest)
///
/// Running from `scripts/` or `lessons/lesson-01/` therefore still checks
/// the course root.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE).is_file() || current.join("pyproject.toml").is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load the configuration for a project.
///
/// An explicit `path` must exist. Without one, `<project_root>/.setupcheck.yml`
/// is used if present and the built-in defaults otherwise.
pub fn load_config(path: Option<&Path>, project_root: &Path) -> Result<SetupConfig> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let candidate = project_root.join(CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    };

    let config = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            SetupConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Parse a single configuration file.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| SetupError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // An empty file is a valid "all defaults" config.
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| SetupError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
