//! Scripted interpreter for testing.
//!
//! `MockPython` implements [`PythonRunner`] by looking up canned responses
//! keyed on the script text (and, optionally, its first argument).
//!
//! # Example
//!
//! ```
//! use setupcheck::python::{MockPython, PythonRunner};
//!
//! let python = MockPython::healthy().without_package("seaborn");
//! let result = python
//!     .run_script(setupcheck::python::scripts::IMPORT_PACKAGE, &["seaborn".to_string()])
//!     .unwrap();
//! assert!(!result.success);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Result, SetupError};
use crate::shell::CommandResult;

use super::interpreter::PythonRunner;
use super::scripts;

#[derive(Debug, Clone)]
enum Response {
    Success(String),
    Failure(String),
    TimedOut,
}

/// Mock interpreter implementation for testing.
#[derive(Debug, Default)]
pub struct MockPython {
    responses: HashMap<(String, Option<String>), Response>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl MockPython {
    /// Interpreter facts for a CPython 3.12.1 inside a project `.venv`.
    pub const INFO_JSON: &'static str = r#"{"version": [3, 12, 1], "version_string": "3.12.1", "implementation": "CPython", "prefix": "/course/.venv", "base_prefix": "/usr", "real_prefix": false, "executable": "/course/.venv/bin/python", "system": "Linux", "release": "6.8.0", "platform": "Linux-6.8.0-x86_64-with-glibc2.39", "machine": "x86_64"}"#;

    /// Create a mock with no configured responses.
    ///
    /// Unconfigured scripts fail like a missing module would.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock where every default package imports and every smoke test passes.
    pub fn healthy() -> Self {
        let mut mock = Self::new()
            .on_script(scripts::INTERPRETER_INFO, Self::INFO_JSON)
            .on_script(scripts::NUMPY_MEAN, "3.0\n")
            .on_script(scripts::PANDAS_FILTER, "2\n")
            .on_script(scripts::MATPLOTLIB_SMOKE, "ok\n")
            .on_script(scripts::TEST_PLOT, "figures/setup_test_plot.png\n");
        for (name, version) in [
            ("numpy", "2.1.3"),
            ("pandas", "2.2.3"),
            ("matplotlib", "3.9.2"),
            ("jupyter", "1.1.1"),
            ("seaborn", "0.13.2"),
            ("scipy", "1.14.1"),
            ("requests", "2.32.3"),
        ] {
            mock = mock.with_package(name, Some(version));
        }
        mock
    }

    /// Make `script` succeed with the given stdout.
    pub fn on_script(mut self, script: &str, stdout: &str) -> Self {
        self.responses.insert(
            (script.to_string(), None),
            Response::Success(stdout.to_string()),
        );
        self
    }

    /// Make `script` fail with the given stderr.
    pub fn fail_script(mut self, script: &str, stderr: &str) -> Self {
        self.responses.insert(
            (script.to_string(), None),
            Response::Failure(stderr.to_string()),
        );
        self
    }

    /// Make `script` exceed its deadline.
    pub fn time_out_script(mut self, script: &str) -> Self {
        self.responses
            .insert((script.to_string(), None), Response::TimedOut);
        self
    }

    /// Make `name` importable, reporting `version`.
    pub fn with_package(mut self, name: &str, version: Option<&str>) -> Self {
        let json = match version {
            Some(v) => format!("{{\"version\": \"{}\"}}\n", v),
            None => "{\"version\": null}\n".to_string(),
        };
        self.responses.insert(
            (scripts::IMPORT_PACKAGE.to_string(), Some(name.to_string())),
            Response::Success(json),
        );
        self
    }

    /// Make importing `name` raise `ModuleNotFoundError`.
    pub fn without_package(mut self, name: &str) -> Self {
        self.responses.insert(
            (scripts::IMPORT_PACKAGE.to_string(), Some(name.to_string())),
            Response::Failure(format!(
                "Traceback (most recent call last):\nModuleNotFoundError: No module named '{}'\n",
                name
            )),
        );
        self
    }

    /// Every `(script, args)` pair run so far.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }

    /// Whether `script` was run at least once.
    pub fn ran(&self, script: &str) -> bool {
        self.calls.borrow().iter().any(|(s, _)| s == script)
    }
}

impl PythonRunner for MockPython {
    fn run_script(&self, script: &str, args: &[String]) -> Result<CommandResult> {
        self.calls
            .borrow_mut()
            .push((script.to_string(), args.to_vec()));

        let keyed = (script.to_string(), args.first().cloned());
        let response = self
            .responses
            .get(&keyed)
            .or_else(|| self.responses.get(&(script.to_string(), None)));

        match response {
            Some(Response::Success(stdout)) => Ok(CommandResult::success(
                stdout.clone(),
                String::new(),
                Duration::ZERO,
            )),
            Some(Response::Failure(stderr)) => Ok(CommandResult::failure(
                Some(1),
                String::new(),
                stderr.clone(),
                Duration::ZERO,
            )),
            Some(Response::TimedOut) => Err(SetupError::CommandTimedOut {
                command: "python -c ...".to_string(),
                seconds: 120,
            }),
            None => Ok(CommandResult::failure(
                Some(1),
                String::new(),
                "ModuleNotFoundError: no response configured\n".to_string(),
                Duration::ZERO,
            )),
        }
    }

    fn location(&self) -> String {
        "/course/.venv/bin/python".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls() {
        let python = MockPython::healthy();
        python
            .run_script(scripts::IMPORT_PACKAGE, &["numpy".to_string()])
            .unwrap();

        assert!(python.ran(scripts::IMPORT_PACKAGE));
        assert_eq!(python.calls()[0].1, vec!["numpy".to_string()]);
    }

    #[test]
    fn package_responses_are_keyed_by_name() {
        let python = MockPython::healthy().without_package("pandas");

        let numpy = python
            .run_script(scripts::IMPORT_PACKAGE, &["numpy".to_string()])
            .unwrap();
        let pandas = python
            .run_script(scripts::IMPORT_PACKAGE, &["pandas".to_string()])
            .unwrap();

        assert!(numpy.success);
        assert!(!pandas.success);
        assert!(pandas.error_summary().contains("pandas"));
    }

    #[test]
    fn unconfigured_script_fails() {
        let python = MockPython::new();
        let result = python.run_script("print(1)", &[]).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn timed_out_script_errors() {
        let python = MockPython::new().time_out_script(scripts::NUMPY_MEAN);
        assert!(python.run_script(scripts::NUMPY_MEAN, &[]).is_err());
    }
}
