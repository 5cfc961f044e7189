//! Interpreter and tooling checks.

use std::time::Duration;

use crate::error::SetupError;
use crate::python::{InterpreterInfo, Version};
use crate::shell::{execute, CommandOptions};
use crate::ui::StatusKind;

use super::CheckResult;

/// Where to get a newer Python.
pub const PYTHON_DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

/// Where to get uv.
pub const UV_INSTALL_URL: &str = "https://docs.astral.sh/uv/getting-started/installation/";

/// What is known about the interpreter under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterState {
    /// No interpreter could be located.
    Missing { reason: String },
    /// An interpreter was located but could not describe itself.
    Unresponsive { location: String, reason: String },
    /// The interpreter answered the self-description probe.
    Ready(InterpreterInfo),
}

impl InterpreterState {
    /// Interpreter facts, if the probe succeeded.
    pub fn info(&self) -> Option<&InterpreterInfo> {
        match self {
            Self::Ready(info) => Some(info),
            _ => None,
        }
    }
}

/// Compare the detected version against the minimum.
pub fn check_python_version(detected: Version, minimum: Version) -> CheckResult {
    if detected >= minimum {
        return CheckResult::new(true)
            .line(StatusKind::Success, format!("Python {} detected", detected));
    }

    CheckResult::new(false)
        .line(
            StatusKind::Failed,
            format!(
                "Python {} is too old (need {} or higher)",
                detected,
                minimum.short()
            ),
        )
        .detail(format!("Please install Python {} or higher", minimum.short()))
        .detail(format!("Download from: {}", PYTHON_DOWNLOAD_URL))
}

/// Version check covering the cases where no version could be read.
pub fn check_python(state: &InterpreterState, minimum: Version) -> CheckResult {
    match state {
        InterpreterState::Ready(info) => check_python_version(info.version(), minimum)
            .detail(format!("Interpreter: {}", info.executable)),
        InterpreterState::Missing { reason } => CheckResult::new(false)
            .line(StatusKind::Failed, "No Python interpreter found")
            .detail(reason.clone())
            .detail(format!(
                "Install Python {} or higher from: {}",
                minimum.short(),
                PYTHON_DOWNLOAD_URL
            )),
        InterpreterState::Unresponsive { location, reason } => CheckResult::new(false)
            .line(
                StatusKind::Failed,
                format!("Could not query the Python interpreter at {}", location),
            )
            .detail(reason.clone()),
    }
}

const VENV_HINT: &str =
    "It's recommended to use the project environment: uv sync, then uv run setupcheck";

/// Report whether the interpreter runs inside a virtual environment.
///
/// Never gating: `passed` only reflects what was detected.
pub fn check_virtual_env(state: &InterpreterState) -> CheckResult {
    match state {
        InterpreterState::Ready(info) if info.is_virtual_env() => CheckResult::new(true)
            .line(StatusKind::Success, "Running in a virtual environment")
            .detail(format!("Location: {}", info.prefix)),
        InterpreterState::Ready(_) => CheckResult::new(false)
            .line(StatusKind::Warning, "Not running in a virtual environment")
            .detail(VENV_HINT),
        InterpreterState::Unresponsive { location, .. } => CheckResult::new(false).line(
            StatusKind::Warning,
            format!(
                "Could not determine the virtual environment: {} did not respond",
                location
            ),
        ),
        InterpreterState::Missing { .. } => CheckResult::new(false).line(
            StatusKind::Warning,
            "Could not determine the virtual environment without an interpreter",
        ),
    }
}

/// Outcome of asking a tool for its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// The tool answered; `version` is its trimmed output.
    Installed { version: String },
    /// No such executable.
    NotFound,
    /// The tool ran but failed.
    Errored { code: Option<i32>, message: String },
    /// The tool did not answer in time.
    TimedOut,
}

/// Run `<program> --version` and classify the outcome.
pub fn probe_tool(program: &str, timeout: Duration) -> ToolStatus {
    let options = CommandOptions {
        timeout: Some(timeout),
        ..Default::default()
    };

    match execute(program, &["--version"], &options) {
        Ok(result) if result.success => {
            let out = result.stdout.trim();
            let version = if out.is_empty() {
                result.stderr.trim()
            } else {
                out
            };
            ToolStatus::Installed {
                version: version.to_string(),
            }
        }
        Ok(result) => ToolStatus::Errored {
            code: result.exit_code,
            message: result.error_summary(),
        },
        Err(SetupError::ProgramNotFound { .. }) => ToolStatus::NotFound,
        Err(SetupError::CommandTimedOut { .. }) => ToolStatus::TimedOut,
        Err(e) => {
            tracing::warn!("Could not run {} --version: {}", program, e);
            ToolStatus::Errored {
                code: None,
                message: e.to_string(),
            }
        }
    }
}

/// Turn a package-manager probe into report lines. Never gating.
pub fn report_package_manager(program: &str, status: &ToolStatus) -> CheckResult {
    match status {
        ToolStatus::Installed { version } => CheckResult::new(true).line(
            StatusKind::Success,
            format!("{} is installed: {}", program, version),
        ),
        ToolStatus::NotFound => {
            let result = CheckResult::new(false).line(
                StatusKind::Failed,
                format!("{} is not installed or not in PATH", program),
            );
            if program == "uv" {
                result.detail(format!("Install from: {}", UV_INSTALL_URL))
            } else {
                result
            }
        }
        ToolStatus::Errored { code, message } => {
            let result = CheckResult::new(false).line(
                StatusKind::Warning,
                format!("{} is installed but returned an error", program),
            );
            match code {
                Some(code) => result.detail(format!("exit code {}: {}", code, message)),
                None => result.detail(message.clone()),
            }
        }
        ToolStatus::TimedOut => CheckResult::new(false).line(
            StatusKind::Warning,
            format!("{} did not answer --version in time", program),
        ),
    }
}

/// Probe the package manager with `probe` and report on it.
///
/// `probe` is normally [`probe_tool`]; the raw status is returned alongside
/// the lines so the run report can keep it.
pub fn check_package_manager<F>(
    program: &str,
    timeout: Duration,
    probe: F,
) -> (ToolStatus, CheckResult)
where
    F: Fn(&str, Duration) -> ToolStatus,
{
    let status = probe(program, timeout);
    tracing::debug!("{} --version: {:?}", program, status);
    let result = report_package_manager(program, &status);
    (status, result)
}
