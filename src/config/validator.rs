//! Semantic validation of a loaded configuration.

use std::collections::HashSet;

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};

/// Longest accepted timeout, one hour.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Check the configuration for values serde cannot rule out on its own.
pub fn validate(config: &SetupConfig) -> Result<()> {
    let mut problems = Vec::new();

    if config.package_manager.trim().is_empty() {
        problems.push("package_manager must not be empty".to_string());
    }

    if config.manifest.trim().is_empty() {
        problems.push("manifest must not be empty".to_string());
    }

    if config.folders.iter().any(|f| f.trim().is_empty()) {
        problems.push("folders must not contain empty names".to_string());
    }

    if config.plot.dpi == 0 {
        problems.push("plot.dpi must be positive".to_string());
    }

    for (name, secs) in [
        ("tool_secs", config.timeouts.tool_secs),
        ("probe_secs", config.timeouts.probe_secs),
    ] {
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            problems.push(format!(
                "timeouts.{} must be between 1 and {}",
                name, MAX_TIMEOUT_SECS
            ));
        }
    }

    let mut seen = HashSet::new();
    for spec in config
        .required_packages
        .iter()
        .chain(config.optional_packages.iter())
    {
        if spec.name.trim().is_empty() {
            problems.push("package names must not be empty".to_string());
        } else if !seen.insert(spec.name.as_str()) {
            problems.push(format!("package '{}' is listed more than once", spec.name));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SetupError::ConfigValidationError {
            message: problems.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PackageSpec;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&SetupConfig::default()).is_ok());
    }

    #[test]
    fn zero_dpi_is_invalid() {
        let mut config = SetupConfig::default();
        config.plot.dpi = 0;

        let err = validate(&config).unwrap_err();

        assert!(err.to_string().contains("plot.dpi"));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut config = SetupConfig::default();
        config.timeouts.probe_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn huge_timeout_is_invalid() {
        let mut config = SetupConfig::default();
        config.timeouts.probe_secs = u64::MAX;

        let err = validate(&config).unwrap_err();

        assert!(err.to_string().contains("timeouts.probe_secs"));
    }

    #[test]
    fn hour_long_timeout_is_valid() {
        let mut config = SetupConfig::default();
        config.timeouts.tool_secs = MAX_TIMEOUT_SECS;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn duplicate_across_lists_is_invalid() {
        let mut config = SetupConfig::default();
        config
            .optional_packages
            .push(PackageSpec::new("numpy", "again"));

        let err = validate(&config).unwrap_err();

        assert!(err.to_string().contains("'numpy'"));
    }

    #[test]
    fn empty_package_name_is_invalid() {
        let mut config = SetupConfig::default();
        config.required_packages.push(PackageSpec::new(" ", ""));
        assert!(validate(&config).is_err());
    }

    #[test]
    fn reports_every_problem() {
        let mut config = SetupConfig::default();
        config.plot.dpi = 0;
        config.package_manager = String::new();

        let msg = validate(&config).unwrap_err().to_string();

        assert!(msg.contains("plot.dpi"));
        assert!(msg.contains("package_manager"));
    }
}
