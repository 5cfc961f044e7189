//! The individual verification checks.
//!
//! Every check is a plain function returning a [`CheckResult`]: whether it
//! passed plus the lines to show. Rendering is separate, so checks can be
//! asserted on directly and the report can be asserted on through a
//! [`MockUI`](crate::ui::MockUI).
//!
//! # Modules
//!
//! - [`environment`] - Python version, virtual environment, package manager
//! - [`structure`] - Project folders and manifest
//! - [`packages`] - Per-package import probes
//! - [`functionality`] - NumPy, pandas and Matplotlib smoke tests
//! - [`paths`] - Path handling and the test plot
//! - [`system_info`] - Platform facts shown at the end

pub mod environment;
pub mod functionality;
pub mod packages;
pub mod paths;
pub mod structure;
pub mod system_info;

pub use environment::{
    check_package_manager, check_python, check_python_version, check_virtual_env, probe_tool,
    report_package_manager, InterpreterState, ToolStatus,
};
pub use functionality::test_package_functionality;
pub use packages::{probe_package, survey_packages, Capability, PackageStatus, PackageSurvey};
pub use paths::{create_test_plot, test_file_paths};
pub use structure::check_project_structure;
pub use system_info::SystemInfo;

use crate::ui::{StatusKind, UserInterface};

/// One reported line with optional indented details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    /// Icon and color of the line.
    pub kind: StatusKind,
    /// Main text.
    pub message: String,
    /// Indented follow-up lines (hints, error text).
    pub details: Vec<String>,
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Whether the check passed.
    pub passed: bool,
    /// Lines to show, in order.
    pub lines: Vec<CheckLine>,
}

impl CheckResult {
    /// Create an empty result.
    pub fn new(passed: bool) -> Self {
        Self {
            passed,
            lines: Vec::new(),
        }
    }

    /// Builder-style [`push`](Self::push).
    pub fn line(mut self, kind: StatusKind, message: impl Into<String>) -> Self {
        self.push(kind, message);
        self
    }

    /// Builder-style [`push_detail`](Self::push_detail).
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.push_detail(detail);
        self
    }

    /// Append a line.
    pub fn push(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.lines.push(CheckLine {
            kind,
            message: message.into(),
            details: Vec::new(),
        });
    }

    /// Attach a detail to the most recent line.
    ///
    /// A detail with no preceding line becomes an info line of its own.
    pub fn push_detail(&mut self, detail: impl Into<String>) {
        match self.lines.last_mut() {
            Some(line) => line.details.push(detail.into()),
            None => self.push(StatusKind::Info, detail),
        }
    }

    /// Messages of every line of `kind`.
    pub fn messages_of(&self, kind: StatusKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.message.as_str())
            .collect()
    }

    /// Whether any line or detail contains `text`.
    pub fn mentions(&self, text: &str) -> bool {
        self.lines
            .iter()
            .any(|l| l.message.contains(text) || l.details.iter().any(|d| d.contains(text)))
    }

    /// Show every line and its details.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        for line in &self.lines {
            ui.status(line.kind, &line.message);
            for detail in &line.details {
                ui.detail(detail);
            }
        }
    }
}

/// Last non-empty line of a probe's stdout, trimmed.
pub(crate) fn last_line(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
}
