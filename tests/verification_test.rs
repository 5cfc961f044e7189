//! End-to-end runs against a stand-in interpreter.
//!
//! The stand-in is a shell script that recognises each probe snippet and
//! answers the way a healthy interpreter would.
#![cfg(unix)]
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_PYTHON: &str = r#"#!/bin/sh
case "$2" in
  *python_implementation*)
    echo '{"version": [3, 12, 1], "version_string": "3.12.1", "implementation": "CPython", "prefix": "/course/.venv", "base_prefix": "/usr", "real_prefix": false, "executable": "/course/.venv/bin/python", "system": "Linux", "release": "6.8.0", "platform": "Linux-6.8.0-x86_64", "machine": "x86_64"}'
    ;;
  *import_module*)
    case " @MISSING@ " in
      *" $3 "*)
        echo "Traceback (most recent call last):" >&2
        echo "ModuleNotFoundError: No module named '$3'" >&2
        exit 1
        ;;
    esac
    echo '{"version": "1.0.0"}'
    ;;
  *np.mean*)
    echo 3.0
    ;;
  *pd.DataFrame*)
    echo 2
    ;;
  *"Setup Test Plot"*)
    : > "$3"
    echo "$3"
    ;;
  *plt.subplots*)
    echo ok
    ;;
  *)
    echo "unexpected snippet" >&2
    exit 1
    ;;
esac
"#;

const FAKE_UV: &str = "#!/bin/sh\necho \"uv 0.5.4\"\n";

fn write_executable(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

struct Course {
    root: TempDir,
    tools: TempDir,
}

impl Course {
    /// A complete course layout with `uv` available.
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        for folder in ["data", "scripts", "lessons", "figures"] {
            fs::create_dir(root.path().join(folder)).unwrap();
        }
        fs::write(
            root.path().join("pyproject.toml"),
            "[project]\nname = \"course\"\n",
        )
        .unwrap();

        let tools = TempDir::new().unwrap();
        write_executable(&tools.path().join("uv"), FAKE_UV);

        Self { root, tools }
    }

    /// Install a stand-in interpreter missing the given packages.
    fn python(&self, missing: &[&str]) -> PathBuf {
        let path = self.tools.path().join("python");
        write_executable(&path, &FAKE_PYTHON.replace("@MISSING@", &missing.join(" ")));
        path
    }

    fn plot(&self) -> PathBuf {
        self.root.path().join("figures/setup_test_plot.png")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("setupcheck"));
        cmd.current_dir(self.root.path())
            .env("PATH", self.tools.path())
            .env("NO_COLOR", "1")
            .env_remove("SETUPCHECK_PYTHON")
            .env_remove("VIRTUAL_ENV")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn complete_setup_passes() {
    let course = Course::new();
    let python = course.python(&[]);

    course
        .command()
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Python 3.12.1 detected"))
        .stdout(predicate::str::contains("✓ Running in a virtual environment"))
        .stdout(predicate::str::contains("✓ uv is installed: uv 0.5.4"))
        .stdout(predicate::str::contains("✓ Found folder: lessons"))
        .stdout(predicate::str::contains("✓ NumPy works correctly"))
        .stdout(predicate::str::contains("✓ File path management works"))
        .stdout(predicate::str::contains("Test plot saved to:"))
        .stdout(predicate::str::contains("Architecture: x86_64"))
        .stdout(predicate::str::contains("✓ All required packages are installed!"))
        .stdout(predicate::str::contains("Run 'uv pip list'"));

    assert!(course.plot().is_file());
}

#[test]
fn missing_required_package_skips_functional_checks() {
    let course = Course::new();
    let python = course.python(&["pandas"]);

    course
        .command()
        .arg("--python")
        .arg(&python)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ pandas (REQUIRED)"))
        .stdout(predicate::str::contains("No module named 'pandas'"))
        .stdout(predicate::str::contains("uv pip install pandas"))
        .stdout(predicate::str::contains("uv sync"))
        .stdout(predicate::str::contains("Testing NumPy").not());

    assert!(!course.plot().exists());
}

#[test]
fn missing_optional_packages_still_pass() {
    let course = Course::new();
    let python = course.python(&["seaborn", "requests"]);

    course
        .command()
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("ℹ seaborn (optional)"))
        .stdout(predicate::str::contains("uv pip install seaborn requests"));
}

#[test]
fn missing_folder_fails() {
    let course = Course::new();
    fs::remove_dir(course.root.path().join("scripts")).unwrap();
    let python = course.python(&[]);

    course
        .command()
        .arg("--python")
        .arg(&python)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✗ Missing folder: scripts"))
        .stdout(predicate::str::contains("Missing folder: data").not());
}

#[test]
fn missing_uv_does_not_fail() {
    let course = Course::new();
    let python = course.python(&[]);
    fs::remove_file(course.tools.path().join("uv")).unwrap();

    course
        .command()
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("uv is not installed or not in PATH"));
}

#[test]
fn project_venv_is_discovered_from_a_subfolder() {
    let course = Course::new();
    let venv_python = course.root.path().join(".venv/bin/python");
    write_executable(&venv_python, &FAKE_PYTHON.replace("@MISSING@", ""));
    let lesson = course.root.path().join("lessons/lesson-01");
    fs::create_dir_all(&lesson).unwrap();

    course
        .command()
        .current_dir(&lesson)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found folder: data"));

    assert!(course.plot().is_file());
}

#[test]
fn repeated_runs_agree() {
    let course = Course::new();
    let python = course.python(&["scipy"]);

    for _ in 0..2 {
        course
            .command()
            .arg("--python")
            .arg(&python)
            .assert()
            .success();
    }
}

#[test]
fn config_file_changes_the_checks() {
    let course = Course::new();
    let python = course.python(&[]);
    fs::write(
        course.root.path().join(".setupcheck.yml"),
        "title: Stats 101 Setup\nfolders: [data, notebooks]\nplot:\n  output: figures/check.png\n",
    )
    .unwrap();

    course
        .command()
        .arg("--python")
        .arg(&python)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Stats 101 Setup"))
        .stdout(predicate::str::contains("✗ Missing folder: notebooks"))
        .stdout(predicate::str::contains("Found folder: lessons").not());

    assert!(course.root.path().join("figures/check.png").is_file());
}
