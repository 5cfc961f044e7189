//! Smoke tests for the core data-science stack.
//!
//! Each sub-test runs in its own interpreter process and is judged on its
//! stdout, so one broken library cannot hide the state of the others.

use crate::python::{scripts, PythonRunner};
use crate::ui::StatusKind;

use super::packages::PackageSurvey;
use super::{last_line, CheckResult};

struct SubTest {
    label: &'static str,
    package: &'static str,
    script: &'static str,
    verify: fn(&str) -> Result<(), String>,
}

const SUB_TESTS: &[SubTest] = &[
    SubTest {
        label: "NumPy",
        package: "numpy",
        script: scripts::NUMPY_MEAN,
        verify: verify_mean,
    },
    SubTest {
        label: "Pandas",
        package: "pandas",
        script: scripts::PANDAS_FILTER,
        verify: verify_row_count,
    },
    SubTest {
        label: "Matplotlib",
        package: "matplotlib",
        script: scripts::MATPLOTLIB_SMOKE,
        verify: verify_exit_only,
    },
];

/// Run the NumPy, pandas and Matplotlib sub-tests.
///
/// A sub-test whose package is not usable (not declared, or an optional
/// package that is missing) is skipped rather than failed. The result
/// passes iff at least one sub-test ran and none failed.
pub fn test_package_functionality(
    python: &dyn PythonRunner,
    survey: &PackageSurvey,
) -> CheckResult {
    let mut result = CheckResult::new(true);
    let mut ran = 0;

    for test in SUB_TESTS {
        if !survey.is_available(test.package) {
            result.push(
                StatusKind::Skipped,
                format!("{} test skipped: {} is not available", test.label, test.package),
            );
            continue;
        }

        ran += 1;
        result.push(StatusKind::Running, format!("Testing {}...", test.label));
        match run_sub_test(python, test) {
            Ok(()) => result.push(
                StatusKind::Success,
                format!("{} works correctly", test.label),
            ),
            Err(reason) => {
                tracing::debug!("{} sub-test failed: {}", test.label, reason);
                result.passed = false;
                result.push(
                    StatusKind::Failed,
                    format!("{} test failed: {}", test.label, reason),
                );
            }
        }
    }

    if ran == 0 {
        result.passed = false;
        let packages: Vec<&str> = SUB_TESTS.iter().map(|t| t.package).collect();
        result.push(StatusKind::Failed, "No functionality tests could run");
        result.push_detail(format!(
            "Declare at least one of {} in the package lists",
            packages.join(", ")
        ));
    }

    result
}

fn run_sub_test(python: &dyn PythonRunner, test: &SubTest) -> Result<(), String> {
    let output = python
        .run_script(test.script, &[])
        .map_err(|e| e.to_string())?;
    if !output.success {
        return Err(output.error_summary());
    }
    (test.verify)(&output.stdout)
}

fn verify_mean(stdout: &str) -> Result<(), String> {
    let line = last_line(stdout).ok_or("no output")?;
    let mean: f64 = line
        .parse()
        .map_err(|_| format!("unexpected output {:?}", line))?;
    // Small integers: the mean is exact.
    if mean == 3.0 {
        Ok(())
    } else {
        Err(format!("expected mean 3.0, got {}", line))
    }
}

fn verify_row_count(stdout: &str) -> Result<(), String> {
    let line = last_line(stdout).ok_or("no output")?;
    let rows: usize = line
        .parse()
        .map_err(|_| format!("unexpected output {:?}", line))?;
    if rows == 2 {
        Ok(())
    } else {
        Err(format!("expected 2 rows, got {}", rows))
    }
}

fn verify_exit_only(_stdout: &str) -> Result<(), String> {
    Ok(())
}
