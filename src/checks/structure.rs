//! Project layout check.

use std::path::Path;

use crate::ui::StatusKind;

use super::CheckResult;

/// Check that every expected folder and the manifest exist under `root`.
///
/// Each item is reported on its own line; a missing manifest is shown as a
/// warning but still fails the check.
pub fn check_project_structure(root: &Path, folders: &[String], manifest: &str) -> CheckResult {
    let mut result = CheckResult::new(true);

    for folder in folders {
        if root.join(folder).is_dir() {
            result.push(StatusKind::Success, format!("Found folder: {}", folder));
        } else {
            tracing::debug!("{} has no {} folder", root.display(), folder);
            result.passed = false;
            result.push(StatusKind::Failed, format!("Missing folder: {}", folder));
            result.push_detail("Make sure you're running this from the project root");
        }
    }

    if root.join(manifest).is_file() {
        result.push(StatusKind::Success, format!("Found {}", manifest));
    } else {
        result.passed = false;
        result.push(StatusKind::Warning, format!("{} not found", manifest));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use std::fs;
    use tempfile::TempDir;

    fn layout(folders: &[&str], manifest: bool) -> TempDir {
        let temp = TempDir::new().unwrap();
        for folder in folders {
            fs::create_dir(temp.path().join(folder)).unwrap();
        }
        if manifest {
            fs::write(temp.path().join("pyproject.toml"), "[project]\n").unwrap();
        }
        temp
    }

    fn check(temp: &TempDir) -> CheckResult {
        let config = SetupConfig::default();
        check_project_structure(temp.path(), &config.folders, &config.manifest)
    }

    #[test]
    fn complete_layout_passes() {
        let temp = layout(&["data", "scripts", "lessons", "figures"], true);
        let result = check(&temp);

        assert!(result.passed);
        assert_eq!(result.messages_of(StatusKind::Success).len(), 5);
        assert!(result.mentions("Found pyproject.toml"));
    }

    #[test]
    fn names_exactly_the_missing_folder() {
        let temp = layout(&["data", "scripts", "figures"], true);
        let result = check(&temp);

        assert!(!result.passed);
        assert_eq!(
            result.messages_of(StatusKind::Failed),
            ["Missing folder: lessons"]
        );
    }

    #[test]
    fn missing_manifest_warns_and_fails() {
        let temp = layout(&["data", "scripts", "lessons", "figures"], false);
        let result = check(&temp);

        assert!(!result.passed);
        assert_eq!(
            result.messages_of(StatusKind::Warning),
            ["pyproject.toml not found"]
        );
        assert!(result.messages_of(StatusKind::Failed).is_empty());
    }

    #[test]
    fn file_in_place_of_folder_is_missing() {
        let temp = layout(&["scripts", "lessons", "figures"], true);
        fs::write(temp.path().join("data"), "").unwrap();

        let result = check(&temp);

        assert_eq!(result.messages_of(StatusKind::Failed), ["Missing folder: data"]);
    }

    #[test]
    fn checks_are_independent() {
        let temp = layout(&[], false);
        let result = check(&temp);

        assert_eq!(result.messages_of(StatusKind::Failed).len(), 4);
        assert_eq!(result.messages_of(StatusKind::Warning).len(), 1);
    }
}
