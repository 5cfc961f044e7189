//! The verification command.
//!
//! Resolves the project root, loads the configuration, finds the interpreter
//! and hands everything to the [`VerificationRunner`].

use std::path::{Path, PathBuf};

use crate::config::{find_project_root, load_config};
use crate::error::Result;
use crate::python::{discover, Interpreter};
use crate::runner::VerificationRunner;
use crate::ui::UserInterface;

use super::args::Cli;
use super::command::{Command, CommandResult};

/// Pick the project root.
///
/// An explicit root is used as given. Otherwise the nearest ancestor of
/// `cwd` holding `.setupcheck.yml` or `pyproject.toml` wins, falling back to
/// `cwd` itself.
pub fn resolve_project_root(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    match explicit {
        Some(root) => root.to_path_buf(),
        None => find_project_root(cwd).unwrap_or_else(|| cwd.to_path_buf()),
    }
}

/// The check command implementation.
#[derive(Debug, Clone)]
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    python: Option<PathBuf>,
}

impl CheckCommand {
    /// Create a check command for a project root.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            python: None,
        }
    }

    /// Build from parsed arguments, resolving the root from the current directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = resolve_project_root(cli.project.as_deref(), &cwd);
        tracing::debug!("Project root: {}", root.display());

        Ok(Self::new(&root)
            .with_config(cli.config.clone())
            .with_python(cli.python.clone()))
    }

    /// Use this config file instead of `<root>/.setupcheck.yml`.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Check this interpreter instead of discovering one.
    pub fn with_python(mut self, python: Option<PathBuf>) -> Self {
        self.python = python;
        self
    }

    /// Config `python:` entries with a directory part are relative to the root.
    fn configured_python(&self, configured: &Path) -> PathBuf {
        if configured.is_relative() && configured.components().count() > 1 {
            self.project_root.join(configured)
        } else {
            configured.to_path_buf()
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.config_path.as_deref(), &self.project_root)?;

        let explicit = self
            .python
            .clone()
            .or_else(|| config.python.as_deref().map(|p| self.configured_python(p)));

        let runner = VerificationRunner::new(&config, &self.project_root);
        let report = match discover(explicit.as_deref(), &self.project_root) {
            Ok(path) => {
                tracing::debug!("Checking interpreter {}", path.display());
                let interpreter = Interpreter::new(path, config.timeouts.probe());
                // The runner borrows `interpreter` and must drop first.
                let report = runner.with_python(&interpreter).run(ui);
                report
            }
            Err(e) => {
                tracing::debug!("Interpreter discovery failed: {}", e);
                runner.without_python(e.to_string()).run(ui)
            }
        };

        Ok(CommandResult::from_verdict(&report.verdict()))
    }
}
