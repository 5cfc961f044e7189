//! Check orchestration.
//!
//! [`VerificationRunner`] runs the checks in report order, renders each one
//! as soon as it finishes, and folds the gating outcomes into a [`Verdict`].

pub mod verdict;

pub use verdict::{render_summary, Verdict};

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checks::{
    check_package_manager, check_project_structure, check_python, check_virtual_env,
    create_test_plot, probe_tool, survey_packages, test_file_paths, test_package_functionality,
    CheckResult, InterpreterState, PackageSurvey, SystemInfo, ToolStatus,
};
use crate::config::SetupConfig;
use crate::python::{probe_info, PythonRunner};
use crate::ui::{StatusKind, UserInterface};

type ToolProbe<'a> = Box<dyn Fn(&str, Duration) -> ToolStatus + 'a>;

/// Everything one run found.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub interpreter: InterpreterState,
    pub python: CheckResult,
    pub virtual_env: CheckResult,
    pub package_manager: ToolStatus,
    pub structure: CheckResult,
    pub packages: PackageSurvey,
    /// `None` when skipped because a required package is missing.
    pub functionality: Option<CheckResult>,
    /// `None` when skipped because a required package is missing.
    pub paths: Option<CheckResult>,
    /// `None` when skipped, or when numpy or matplotlib is unusable.
    pub plot: Option<CheckResult>,
    pub system: SystemInfo,
}

impl RunReport {
    /// Fold the gating outcomes together.
    pub fn verdict(&self) -> Verdict {
        Verdict {
            python_ok: self.python.passed,
            structure_ok: self.structure.passed,
            functionality_ok: self.functionality.as_ref().is_some_and(|r| r.passed),
            paths_ok: self.paths.as_ref().is_some_and(|r| r.passed),
            skipped_functional: self.functionality.is_none(),
            missing_required: self.packages.missing_required.clone(),
            missing_optional: self.packages.missing_optional.clone(),
        }
    }
}

/// Runs every check against one project and interpreter.
pub struct VerificationRunner<'a> {
    config: &'a SetupConfig,
    project_root: PathBuf,
    python: Option<&'a dyn PythonRunner>,
    missing_reason: String,
    tool_probe: ToolProbe<'a>,
}

impl<'a> VerificationRunner<'a> {
    /// Create a runner with no interpreter attached yet.
    pub fn new(config: &'a SetupConfig, project_root: &Path) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            python: None,
            missing_reason: "no interpreter was configured".to_string(),
            tool_probe: Box::new(probe_tool),
        }
    }

    /// Probe this interpreter.
    pub fn with_python(mut self, python: &'a dyn PythonRunner) -> Self {
        self.python = Some(python);
        self
    }

    /// Run without an interpreter, explaining why none is available.
    pub fn without_python(mut self, reason: impl Into<String>) -> Self {
        self.python = None;
        self.missing_reason = reason.into();
        self
    }

    /// Replace how the package manager is asked for its version.
    pub fn with_tool_probe(
        mut self,
        probe: impl Fn(&str, Duration) -> ToolStatus + 'a,
    ) -> Self {
        self.tool_probe = Box::new(probe);
        self
    }

    /// Run every check, rendering as it goes, then render the summary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> RunReport {
        let config = self.config;
        ui.show_header(&config.title);

        let interpreter = self.probe_interpreter();

        ui.show_section("Checking Python version...");
        let python = check_python(&interpreter, config.min_python);
        python.render(ui);

        ui.show_section("Checking virtual environment...");
        let virtual_env = check_virtual_env(&interpreter);
        virtual_env.render(ui);

        ui.show_section(&format!(
            "Checking {} package manager...",
            config.package_manager
        ));
        let (package_manager, package_manager_lines) = check_package_manager(
            &config.package_manager,
            config.timeouts.tool(),
            &*self.tool_probe,
        );
        package_manager_lines.render(ui);

        ui.show_section("Checking project structure...");
        let structure =
            check_project_structure(&self.project_root, &config.folders, &config.manifest);
        structure.render(ui);

        ui.show_section("Checking required packages...");
        let packages = survey_packages(
            self.python,
            &config.required_packages,
            &config.optional_packages,
        );
        packages.required_result().render(ui);

        if !config.optional_packages.is_empty() {
            ui.show_section("Checking optional packages...");
            packages.optional_result().render(ui);
        }

        let (functionality, paths, plot) = match self.python {
            Some(python) if packages.missing_required.is_empty() => {
                self.run_functional_checks(python, &packages, ui)
            }
            _ => {
                ui.show_section("Testing key functionality...");
                ui.status(
                    StatusKind::Skipped,
                    "Skipping functionality tests until the required packages are installed",
                );
                (None, None, None)
            }
        };

        ui.show_section("System Information:");
        let system = SystemInfo::collect(interpreter.info());
        system.render(ui);

        let report = RunReport {
            interpreter,
            python,
            virtual_env,
            package_manager,
            structure,
            packages,
            functionality,
            paths,
            plot,
            system,
        };

        let verdict = report.verdict();
        tracing::debug!("Verdict: {:?}", verdict);
        render_summary(ui, &verdict);

        report
    }

    fn probe_interpreter(&self) -> InterpreterState {
        let Some(python) = self.python else {
            return InterpreterState::Missing {
                reason: self.missing_reason.clone(),
            };
        };

        match probe_info(python) {
            Ok(info) => {
                tracing::debug!("Interpreter info: {:?}", info);
                InterpreterState::Ready(info)
            }
            Err(e) => {
                tracing::warn!("Interpreter at {} did not answer: {}", python.location(), e);
                InterpreterState::Unresponsive {
                    location: python.location(),
                    reason: e.to_string(),
                }
            }
        }
    }

    fn run_functional_checks(
        &self,
        python: &dyn PythonRunner,
        packages: &PackageSurvey,
        ui: &mut dyn UserInterface,
    ) -> (Option<CheckResult>, Option<CheckResult>, Option<CheckResult>) {
        ui.show_section("Testing key functionality...");
        let functionality = test_package_functionality(python, packages);
        functionality.render(ui);

        let paths = test_file_paths(&self.project_root);
        paths.render(ui);

        ui.show_section("Creating a test plot...");
        let plot = if packages.is_available("numpy") && packages.is_available("matplotlib") {
            let plot = create_test_plot(python, &self.project_root, &self.config.plot);
            plot.render(ui);
            Some(plot)
        } else {
            ui.status(
                StatusKind::Skipped,
                "Skipping the test plot: numpy and matplotlib are both needed",
            );
            None
        };

        (Some(functionality), Some(paths), plot)
    }
}
