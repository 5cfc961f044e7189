//! Configuration schema definitions for setupcheck.
//!
//! This module contains the struct definitions that map to the optional
//! `.setupcheck.yml` file. Every field has a default, so an empty file (or
//! no file) describes the standard course setup.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::python::Version;

/// Root configuration structure for `.setupcheck.yml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Banner shown at the top of the report.
    pub title: String,

    /// Oldest acceptable interpreter.
    pub min_python: Version,

    /// Interpreter to probe instead of discovering one.
    pub python: Option<PathBuf>,

    /// Package manager executable queried with `--version`.
    pub package_manager: String,

    /// Folders that must exist under the project root.
    pub folders: Vec<String>,

    /// Project manifest that must exist under the project root.
    pub manifest: String,

    /// Packages whose absence fails the run, in report order.
    pub required_packages: Vec<PackageSpec>,

    /// Packages whose absence is only reported, in report order.
    pub optional_packages: Vec<PackageSpec>,

    /// Test-plot settings.
    pub plot: PlotSettings,

    /// Per-process deadlines.
    pub timeouts: Timeouts,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            title: "Course Setup Verification".to_string(),
            min_python: Version::new(3, 10, 0),
            python: None,
            package_manager: "uv".to_string(),
            folders: ["data", "scripts", "lessons", "figures"]
                .into_iter()
                .map(String::from)
                .collect(),
            manifest: "pyproject.toml".to_string(),
            required_packages: vec![
                PackageSpec::new("numpy", "NumPy - Numerical computing"),
                PackageSpec::new("pandas", "Pandas - Data manipulation"),
                PackageSpec::new("matplotlib", "Matplotlib - Plotting"),
                PackageSpec::new("jupyter", "Jupyter - Interactive notebooks"),
            ],
            optional_packages: vec![
                PackageSpec::new("seaborn", "Seaborn - Statistical visualization"),
                PackageSpec::new("scipy", "SciPy - Scientific computing"),
                PackageSpec::new("requests", "Requests - HTTP library"),
            ],
            plot: PlotSettings::default(),
            timeouts: Timeouts::default(),
        }
    }
}

/// A Python package to probe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSpec {
    /// Import name (also used for `uv pip install`).
    pub name: String,

    /// Human description shown when the package is missing.
    #[serde(default)]
    pub description: String,

    /// Oldest acceptable version, if any.
    #[serde(default)]
    pub min_version: Option<Version>,
}

impl PackageSpec {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            min_version: None,
        }
    }

    /// Builder-style minimum version.
    pub fn with_min_version(mut self, version: Version) -> Self {
        self.min_version = Some(version);
        self
    }
}

/// Where and how the test plot is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotSettings {
    /// Output image, relative to the project root.
    pub output: PathBuf,

    /// Resolution in dots per inch.
    pub dpi: u32,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("figures").join("setup_test_plot.png"),
            dpi: 150,
        }
    }
}

/// Deadlines for spawned processes, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    /// `<package_manager> --version`.
    pub tool_secs: u64,

    /// Each Python snippet.
    pub probe_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            tool_secs: 10,
            probe_secs: 120,
        }
    }
}

impl Timeouts {
    pub fn tool(&self) -> Duration {
        Duration::from_secs(self.tool_secs)
    }

    pub fn probe(&self) -> Duration {
        Duration::from_secs(self.probe_secs)
    }
}
