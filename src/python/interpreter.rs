//! Interpreter discovery and invocation.
//!
//! The checks never talk to a Python process directly; they go through the
//! [`PythonRunner`] trait so the runner can be swapped for a scripted fake.

use std::env::VarError;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SetupError};
use crate::shell::{execute, parse_system_path, resolve_tool_path, CommandOptions, CommandResult};

use super::scripts;
use super::version::Version;

/// Names tried on `PATH` when nothing more specific is configured.
const PATH_CANDIDATES: &[&str] = &["python3", "python"];

/// Something that can run Python snippets.
///
/// This trait allows mocking the interpreter in tests.
pub trait PythonRunner {
    /// Run `script` via `-c` with positional arguments.
    ///
    /// A script that raises is an `Ok` result with `success == false`.
    fn run_script(&self, script: &str, args: &[String]) -> Result<CommandResult>;

    /// Human-readable location of the interpreter.
    fn location(&self) -> String;
}

/// A real interpreter on disk.
#[derive(Debug, Clone)]
pub struct Interpreter {
    path: PathBuf,
    options: CommandOptions,
}

impl Interpreter {
    /// Create an interpreter handle; every script gets at most `timeout`.
    pub fn new(path: PathBuf, timeout: Duration) -> Self {
        let mut options = CommandOptions {
            timeout: Some(timeout),
            ..Default::default()
        };
        // Never try to open a window, and keep tracebacks decodable.
        options
            .env
            .insert("MPLBACKEND".to_string(), "Agg".to_string());
        options
            .env
            .insert("PYTHONIOENCODING".to_string(), "utf-8".to_string());
        options
            .env
            .insert("PYTHONDONTWRITEBYTECODE".to_string(), "1".to_string());

        Self { path, options }
    }
}

impl PythonRunner for Interpreter {
    fn run_script(&self, script: &str, args: &[String]) -> Result<CommandResult> {
        let mut argv = Vec::with_capacity(args.len() + 2);
        argv.push("-c".to_string());
        argv.push(script.to_string());
        argv.extend(args.iter().cloned());
        execute(&self.path, &argv, &self.options)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Facts the interpreter reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterpreterInfo {
    /// `sys.version_info[:3]`.
    pub version: (u64, u64, u64),
    /// `sys.version` up to the first space.
    pub version_string: String,
    /// `platform.python_implementation()`.
    pub implementation: String,
    /// `sys.prefix`.
    pub prefix: String,
    /// `sys.base_prefix` (equal to `prefix` on interpreters without it).
    pub base_prefix: String,
    /// Whether the legacy `sys.real_prefix` marker exists.
    pub real_prefix: bool,
    /// `sys.executable`.
    pub executable: String,
    /// `platform.system()`.
    pub system: String,
    /// `platform.release()`.
    pub release: String,
    /// `platform.platform()`.
    pub platform: String,
    /// `platform.machine()`.
    pub machine: String,
}

impl InterpreterInfo {
    /// The running version as a comparable triple.
    pub fn version(&self) -> Version {
        self.version.into()
    }

    /// Whether the interpreter runs inside an isolated environment.
    ///
    /// Old `virtualenv` sets `sys.real_prefix`; `venv` and `uv` make
    /// `sys.prefix` differ from `sys.base_prefix`.
    pub fn is_virtual_env(&self) -> bool {
        self.real_prefix || self.prefix != self.base_prefix
    }
}

/// Ask the interpreter to describe itself.
pub fn probe_info(python: &dyn PythonRunner) -> Result<InterpreterInfo> {
    let result = python.run_script(scripts::INTERPRETER_INFO, &[])?;
    if !result.success {
        return Err(SetupError::ProbeOutput {
            message: result.error_summary(),
        });
    }
    parse_json_line(&result.stdout)
}

/// Parse the last non-empty stdout line as JSON.
///
/// `sitecustomize` hooks and noisy packages sometimes print on import, so
/// only the final line is trusted.
pub fn parse_json_line<T: serde::de::DeserializeOwned>(stdout: &str) -> Result<T> {
    let line = stdout
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| SetupError::ProbeOutput {
            message: "no output".to_string(),
        })?;
    serde_json::from_str(line.trim()).map_err(|e| SetupError::ProbeOutput {
        message: format!("{}: {}", e, line.trim()),
    })
}

/// Find the interpreter to probe using the real environment.
pub fn discover(explicit: Option<&Path>, project_root: &Path) -> Result<PathBuf> {
    discover_with_env(explicit, project_root, &parse_system_path(), |key: &str| {
        std::env::var(key)
    })
}

/// Find the interpreter to probe.
///
/// Order: an explicit path or name, `$VIRTUAL_ENV`, the project's `.venv`,
/// then `python3` and `python` on `PATH`. An explicit choice that does not
/// exist is an error rather than a silent fallback.
pub fn discover_with_env<F>(
    explicit: Option<&Path>,
    project_root: &Path,
    path_entries: &[PathBuf],
    env_fn: F,
) -> Result<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    if let Some(explicit) = explicit {
        let found = if explicit.components().count() > 1 || explicit.is_absolute() {
            explicit.is_file().then(|| explicit.to_path_buf())
        } else {
            resolve_tool_path(&explicit.to_string_lossy(), path_entries)
                .or_else(|| explicit.is_file().then(|| explicit.to_path_buf()))
        };
        tracing::debug!("Explicit interpreter {:?} resolved to {:?}", explicit, found);
        return found.ok_or_else(|| SetupError::InterpreterNotFound {
            searched: explicit.display().to_string(),
        });
    }

    if let Ok(venv) = env_fn("VIRTUAL_ENV") {
        let candidate = venv_python(Path::new(&venv));
        if candidate.is_file() {
            tracing::debug!("Using interpreter from VIRTUAL_ENV: {}", candidate.display());
            return Ok(candidate);
        }
    }

    let project_venv = venv_python(&project_root.join(".venv"));
    if project_venv.is_file() {
        tracing::debug!("Using project interpreter: {}", project_venv.display());
        return Ok(project_venv);
    }

    for name in PATH_CANDIDATES {
        if let Some(found) = resolve_tool_path(name, path_entries) {
            tracing::debug!("Using interpreter from PATH: {}", found.display());
            return Ok(found);
        }
    }

    Err(SetupError::InterpreterNotFound {
        searched: format!("$VIRTUAL_ENV, .venv, {} on PATH", PATH_CANDIDATES.join(", ")),
    })
}

/// Location of the interpreter inside a virtual environment.
pub fn venv_python(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        venv.join("bin").join("python")
    }
}
