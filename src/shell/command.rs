//! Process execution with a deadline.
//!
//! Programs are spawned directly (no intermediate shell) so that a missing
//! executable surfaces as [`SetupError::ProgramNotFound`] instead of a shell's
//! "command not found" exit status.

use crate::error::{Result, SetupError};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// One-line description of why the program failed.
    ///
    /// Python tracebacks end with the exception line, so the last non-empty
    /// stderr line is the most useful thing to show.
    pub fn error_summary(&self) -> String {
        if let Some(line) = self.stderr.lines().rev().find(|l| !l.trim().is_empty()) {
            return line.trim().to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Kill the program if it runs longer than this (None = wait forever).
    pub timeout: Option<Duration>,
}

/// Execute a program with arguments, capturing stdout and stderr.
///
/// A non-zero exit is an `Ok` result with `success == false`; only spawn
/// failures and timeouts are errors.
pub fn execute<P, A>(program: P, args: &[A], options: &CommandOptions) -> Result<CommandResult>
where
    P: AsRef<OsStr>,
    A: AsRef<OsStr>,
{
    let start = Instant::now();
    let shown = describe(program.as_ref(), args);

    let mut cmd = Command::new(program.as_ref());
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    tracing::debug!("Spawning: {}", shown);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SetupError::ProgramNotFound {
                program: program.as_ref().to_string_lossy().into_owned(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    // Drain both pipes on their own threads so a chatty child never blocks
    // on a full pipe while we poll for its exit.
    let stdout_handle = spawn_reader(child.stdout.take());
    let stderr_handle = spawn_reader(child.stderr.take());

    let waited = wait_with_deadline(&mut child, options.timeout);
    let status = match waited {
        Ok(Some(status)) => status,
        Ok(None) => {
            reap(&mut child, stdout_handle, stderr_handle);
            let seconds = options.timeout.map(|t| t.as_secs()).unwrap_or_default();
            tracing::warn!("Timed out after {}s: {}", seconds, shown);
            return Err(SetupError::CommandTimedOut {
                command: shown,
                seconds,
            });
        }
        Err(e) => {
            reap(&mut child, stdout_handle, stderr_handle);
            tracing::warn!("Lost track of {}: {}", shown, e);
            return Err(e.into());
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    let duration = start.elapsed();

    tracing::debug!(
        "Finished in {:?} with {:?}: {}",
        duration,
        status.code(),
        shown
    );

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

fn spawn_reader<R>(pipe: Option<R>) -> thread::JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Kill the child and collect whatever the reader threads gathered.
fn reap(child: &mut Child, stdout: thread::JoinHandle<String>, stderr: thread::JoinHandle<String>) {
    let _ = child.kill();
    let _ = child.wait();
    let _ = stdout.join();
    let _ = stderr.join();
}

fn wait_with_deadline(
    child: &mut Child,
    timeout: Option<Duration>,
) -> io::Result<Option<ExitStatus>> {
    // A timeout too large to represent as an instant never expires.
    let Some(deadline) = timeout.and_then(|t| Instant::now().checked_add(t)) else {
        return child.wait().map(Some);
    };

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Render a program invocation for logs and error messages.
///
/// Long inline scripts are cut to their first line.
fn describe<A: AsRef<OsStr>>(program: &OsStr, args: &[A]) -> String {
    let mut parts = vec![program.to_string_lossy().into_owned()];
    for arg in args {
        let arg = arg.as_ref().to_string_lossy();
        match arg.lines().next() {
            Some(first) if arg.contains('\n') => parts.push(format!("{}...", first)),
            _ => parts.push(arg.into_owned()),
        }
    }
    parts.join(" ")
}
