//! Final verdict and summary rendering.

use crate::ui::{StatusKind, UserInterface, RULE_WIDTH};

const FUNCTIONALITY: &str = "Package functionality";
const PATHS: &str = "File paths";

/// Aggregate of the gating checks and the package survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Interpreter meets the minimum version.
    pub python_ok: bool,
    /// Every expected folder and the manifest exist.
    pub structure_ok: bool,
    /// Functionality sub-tests passed (false when skipped).
    pub functionality_ok: bool,
    /// Path handling works (false when skipped).
    pub paths_ok: bool,
    /// Functionality and path checks were not attempted.
    pub skipped_functional: bool,
    /// Unusable required packages, in declaration order.
    pub missing_required: Vec<String>,
    /// Unusable optional packages, in declaration order.
    pub missing_optional: Vec<String>,
}

impl Verdict {
    /// All four gating checks passed.
    pub fn checks_passed(&self) -> bool {
        self.python_ok && self.structure_ok && self.functionality_ok && self.paths_ok
    }

    /// Gating checks passed and no required package is missing.
    ///
    /// Optional packages and warnings never matter here.
    pub fn passed(&self) -> bool {
        self.checks_passed() && self.missing_required.is_empty()
    }

    /// Process exit code: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Names of the gating checks that failed, in report order.
    pub fn failed_checks(&self) -> Vec<&'static str> {
        [
            (self.python_ok, "Python version"),
            (self.structure_ok, "Project structure"),
            (self.functionality_ok, FUNCTIONALITY),
            (self.paths_ok, PATHS),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, name)| name)
        .collect()
    }
}

/// Show the summary block, troubleshooting footer and closing rule.
pub fn render_summary(ui: &mut dyn UserInterface, verdict: &Verdict) {
    ui.show_header("Summary");
    ui.message("");

    if verdict.passed() {
        ui.banner(StatusKind::Success, "All required packages are installed!");
        ui.message("");
        ui.message("You're ready to start the course!");
        ui.message("Next steps:");
        ui.message("  1. Review the README.md for course information");
        ui.message("  2. Check the course schedule");
        ui.message("  3. Start with lessons/lesson-01/");
        ui.message("");

        if !verdict.missing_optional.is_empty() {
            ui.message("Optional: Install additional packages for enhanced functionality:");
            ui.message(&format!(
                "  uv pip install {}",
                verdict.missing_optional.join(" ")
            ));
            ui.message("");
        }
    } else {
        ui.banner(StatusKind::Failed, "Setup incomplete");
        ui.message("");

        if !verdict.missing_required.is_empty() {
            ui.message("Please install missing required packages:");
            ui.message(&format!(
                "  uv pip install {}",
                verdict.missing_required.join(" ")
            ));
            ui.message("");
            ui.message("Or run:");
            ui.message("  uv sync");
            ui.message("");
            ui.message("After installing packages, run setupcheck again to verify.");
            ui.message("");
        }

        let failed = verdict.failed_checks();
        if !failed.is_empty() {
            ui.message("Checks that did not pass:");
            for name in failed {
                let functional = name == FUNCTIONALITY || name == PATHS;
                if functional && verdict.skipped_functional {
                    ui.message(&format!("  - {} (skipped)", name));
                } else {
                    ui.message(&format!("  - {}", name));
                }
            }
            ui.message("");
        }
    }

    ui.message("If you encounter any issues:");
    ui.message("  1. See SETUP.md for detailed troubleshooting");
    ui.message("  2. Check the course discussion forum");
    ui.message("  3. Contact the instructor");
    ui.message("");
    ui.message(&"=".repeat(RULE_WIDTH));
    ui.message("");
    ui.message("Detailed package information:");
    ui.message("Run 'uv pip list' to see all installed packages");
}
