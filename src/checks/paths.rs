//! Path handling and test-plot generation.

use std::fs;
use std::path::Path;

use crate::config::PlotSettings;
use crate::python::{scripts, PythonRunner};
use crate::ui::StatusKind;

use super::CheckResult;

/// Check that project-relative paths resolve.
pub fn test_file_paths(project_root: &Path) -> CheckResult {
    let mut result =
        CheckResult::new(false).line(StatusKind::Running, "Testing file path management...");

    match std::path::absolute(project_root) {
        Ok(root) => {
            let data_dir = root.join("data");
            if data_dir.is_absolute() && data_dir.starts_with(&root) {
                result.passed = true;
                result.push(StatusKind::Success, "File path management works");
                result.push_detail(format!("Project root: {}", root.display()));
            } else {
                result.push(
                    StatusKind::Failed,
                    format!("File path test failed: {} is not absolute", data_dir.display()),
                );
            }
        }
        Err(e) => {
            result.push(StatusKind::Failed, format!("File path test failed: {}", e));
        }
    }

    result
}

/// Render the test plot under `project_root`.
///
/// Always passes: a plot that cannot be drawn is only a warning.
pub fn create_test_plot(
    python: &dyn PythonRunner,
    project_root: &Path,
    plot: &PlotSettings,
) -> CheckResult {
    let output = project_root.join(&plot.output);
    let result = CheckResult::new(true);

    if let Some(parent) = output.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            return result.line(
                StatusKind::Warning,
                format!("Could not create test plot: {}", e),
            );
        }
    }

    let args = [output.to_string_lossy().into_owned(), plot.dpi.to_string()];
    match python.run_script(scripts::TEST_PLOT, &args) {
        Ok(run) if run.success => {
            tracing::debug!("Test plot written to {}", output.display());
            result
                .line(
                    StatusKind::Success,
                    format!("Test plot saved to: {}", output.display()),
                )
                .detail("Open this file to verify that graphics work correctly")
        }
        Ok(run) => result.line(
            StatusKind::Warning,
            format!("Could not create test plot: {}", run.error_summary()),
        ),
        Err(e) => result.line(
            StatusKind::Warning,
            format!("Could not create test plot: {}", e),
        ),
    }
}
