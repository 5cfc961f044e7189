//! Package availability survey.
//!
//! Each declared package is imported in its own interpreter process, so a
//! package that segfaults or hangs on import only affects its own entry.

use serde::Deserialize;

use crate::config::PackageSpec;
use crate::python::{interpreter::parse_json_line, scripts, PythonRunner, Version};
use crate::ui::StatusKind;

use super::CheckResult;

/// Whether a package can be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// Imports fine; `version` when the package reports one.
    Available { version: Option<String> },
    /// Import failed (or could not be attempted).
    Unavailable { reason: String },
    /// Imports fine but is older than the declared minimum.
    VersionMismatch { found: String, required: Version },
}

impl Capability {
    /// Only `Available` counts as usable.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Survey entry for one declared package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatus {
    /// The declaration this entry answers.
    pub spec: PackageSpec,
    /// Whether the package was declared as required.
    pub required: bool,
    /// What the probe found.
    pub capability: Capability,
}

/// Results of probing every declared package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSurvey {
    /// Required packages first, then optional ones, each in declaration order.
    pub packages: Vec<PackageStatus>,
    /// Names of unusable required packages, in declaration order.
    pub missing_required: Vec<String>,
    /// Names of unusable optional packages, in declaration order.
    pub missing_optional: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ImportReport {
    version: Option<String>,
}

/// Import one package and classify the outcome.
pub fn probe_package(python: &dyn PythonRunner, spec: &PackageSpec) -> Capability {
    let result = match python.run_script(scripts::IMPORT_PACKAGE, &[spec.name.clone()]) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Probe for {} did not complete: {}", spec.name, e);
            return Capability::Unavailable {
                reason: e.to_string(),
            };
        }
    };

    if !result.success {
        let reason = result.error_summary();
        tracing::debug!("import {} failed: {}", spec.name, reason);
        return Capability::Unavailable { reason };
    }

    // The import itself succeeded; an unreadable report only loses the version.
    let version = match parse_json_line::<ImportReport>(&result.stdout) {
        Ok(report) => report.version,
        Err(e) => {
            tracing::warn!("Unexpected output probing {}: {}", spec.name, e);
            None
        }
    };
    tracing::debug!("import {} ok, version {:?}", spec.name, version);

    match (&spec.min_version, &version) {
        (Some(required), Some(found)) => match found.parse::<Version>() {
            Ok(parsed) if parsed < *required => Capability::VersionMismatch {
                found: found.clone(),
                required: *required,
            },
            Ok(_) => Capability::Available { version },
            Err(e) => {
                tracing::warn!("Cannot compare {} version {:?}: {}", spec.name, found, e);
                Capability::Available { version }
            }
        },
        (Some(_), None) => {
            tracing::warn!("{} reports no version; minimum not enforced", spec.name);
            Capability::Available { version }
        }
        (None, _) => Capability::Available { version },
    }
}

/// Probe every declared package.
///
/// Without an interpreter nothing can be imported, so every package is
/// unavailable.
pub fn survey_packages(
    python: Option<&dyn PythonRunner>,
    required: &[PackageSpec],
    optional: &[PackageSpec],
) -> PackageSurvey {
    let mut survey = PackageSurvey::default();

    let declared = required
        .iter()
        .map(|spec| (spec, true))
        .chain(optional.iter().map(|spec| (spec, false)));

    for (spec, is_required) in declared {
        let capability = match python {
            Some(python) => probe_package(python, spec),
            None => Capability::Unavailable {
                reason: "no Python interpreter".to_string(),
            },
        };

        if !capability.is_available() {
            let missing = if is_required {
                &mut survey.missing_required
            } else {
                &mut survey.missing_optional
            };
            missing.push(spec.name.clone());
        }

        survey.packages.push(PackageStatus {
            spec: spec.clone(),
            required: is_required,
            capability,
        });
    }

    survey
}

impl PackageSurvey {
    /// Capability of a declared package.
    pub fn capability(&self, name: &str) -> Option<&Capability> {
        self.packages
            .iter()
            .find(|p| p.spec.name == name)
            .map(|p| &p.capability)
    }

    /// Whether a declared package is usable.
    pub fn is_available(&self, name: &str) -> bool {
        self.capability(name).is_some_and(Capability::is_available)
    }

    /// Report lines for the required packages; passes iff none is missing.
    pub fn required_result(&self) -> CheckResult {
        let mut result = CheckResult::new(self.missing_required.is_empty());
        for status in self.packages.iter().filter(|p| p.required) {
            push_status(&mut result, status);
        }
        result
    }

    /// Report lines for the optional packages. Never gating.
    pub fn optional_result(&self) -> CheckResult {
        let mut result = CheckResult::new(self.missing_optional.is_empty());
        for status in self.packages.iter().filter(|p| !p.required) {
            push_status(&mut result, status);
        }
        result
    }
}

fn push_status(result: &mut CheckResult, status: &PackageStatus) {
    let name = &status.spec.name;
    let (kind, label) = if status.required {
        (StatusKind::Failed, "REQUIRED")
    } else {
        (StatusKind::Info, "optional")
    };

    match &status.capability {
        Capability::Available { version: Some(v) } => {
            result.push(StatusKind::Success, format!("{} ({})", name, v));
        }
        Capability::Available { version: None } => {
            result.push(StatusKind::Success, name.clone());
        }
        Capability::Unavailable { reason } => {
            result.push(kind, format!("{} ({})", name, label));
            push_description(result, status);
            result.push_detail(reason.clone());
        }
        Capability::VersionMismatch { found, required } => {
            result.push(kind, format!("{} ({})", name, label));
            push_description(result, status);
            result.push_detail(format!(
                "found version {}, need {} or newer",
                found, required
            ));
        }
    }
}

fn push_description(result: &mut CheckResult, status: &PackageStatus) {
    if !status.spec.description.is_empty() {
        result.push_detail(status.spec.description.clone());
    }
}
