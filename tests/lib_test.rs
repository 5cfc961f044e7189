//! Library integration tests.

use setupcheck::checks::{check_project_structure, survey_packages, Capability};
use setupcheck::config::{PackageSpec, SetupConfig};
use setupcheck::python::{MockPython, Version};
use setupcheck::runner::VerificationRunner;
use setupcheck::ui::{MockUI, StatusKind};
use setupcheck::SetupError;

#[test]
fn error_types_are_public() {
    let err = SetupError::InterpreterNotFound {
        searched: "python3".into(),
    };
    assert!(err.to_string().contains("python3"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> setupcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use setupcheck::cli::Cli;

    let cli = Cli::parse_from(["setupcheck", "--no-color", "--python", "python3.12"]);
    assert!(cli.no_color);
    assert_eq!(cli.python.as_deref(), Some(std::path::Path::new("python3.12")));
}

#[test]
fn survey_reports_only_failed_imports_in_order() {
    let spec = |name: &str| PackageSpec::new(name, "");
    let python = MockPython::new()
        .with_package("alpha", Some("1.0"))
        .without_package("beta")
        .with_package("gamma", Some("2.0"))
        .with_package("delta", Some("3.0"))
        .with_package("epsilon", None)
        .without_package("zeta")
        .with_package("eta", Some("0.1"));

    let survey = survey_packages(
        Some(&python),
        &[spec("alpha"), spec("beta"), spec("gamma"), spec("delta")],
        &[spec("epsilon"), spec("zeta"), spec("eta")],
    );

    assert_eq!(survey.missing_required, ["beta"]);
    assert_eq!(survey.missing_optional, ["zeta"]);
    assert_eq!(
        survey.capability("epsilon"),
        Some(&Capability::Available { version: None })
    );
}

#[test]
fn minimum_versions_come_from_config() {
    let config: SetupConfig = serde_yaml::from_str(
        r#"
required_packages:
  - name: numpy
    min_version: "1.26"
optional_packages: []
"#,
    )
    .unwrap();
    let python = MockPython::new().with_package("numpy", Some("1.24.4"));

    let survey = survey_packages(
        Some(&python),
        &config.required_packages,
        &config.optional_packages,
    );

    assert_eq!(
        survey.capability("numpy"),
        Some(&Capability::VersionMismatch {
            found: "1.24.4".to_string(),
            required: Version::new(1, 26, 0),
        })
    );
}

#[test]
fn structure_check_names_the_missing_folder() {
    let temp = tempfile::TempDir::new().unwrap();
    for folder in ["data", "lessons", "figures"] {
        std::fs::create_dir(temp.path().join(folder)).unwrap();
    }
    std::fs::write(temp.path().join("pyproject.toml"), "").unwrap();
    let config = SetupConfig::default();

    let result = check_project_structure(temp.path(), &config.folders, &config.manifest);

    assert!(!result.passed);
    assert_eq!(
        result.messages_of(StatusKind::Failed),
        ["Missing folder: scripts"]
    );
}

#[test]
fn runner_is_usable_from_outside() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = SetupConfig::default();
    let python = MockPython::healthy();
    let mut ui = MockUI::new();

    let report = VerificationRunner::new(&config, temp.path())
        .with_python(&python)
        .with_tool_probe(|_, _| setupcheck::checks::ToolStatus::NotFound)
        .run(&mut ui);

    let verdict = report.verdict();
    assert!(!verdict.structure_ok);
    assert!(verdict.functionality_ok);
    assert_eq!(verdict.exit_code(), 1);
    assert!(ui.has_status(StatusKind::Failed, "uv is not installed"));
}
