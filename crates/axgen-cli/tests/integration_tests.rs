//! Integration tests for axgen-cli.
//!
//! These drive the real binary against temporary directories and assert the
//! on-disk contract: the fixed tree appears, reruns are no-ops, and nothing
//! existing is ever overwritten.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn axgen() -> Command {
    let mut cmd = Command::cargo_bin("axgen").unwrap();
    // Keep output stable regardless of the test environment's terminal.
    cmd.arg("--no-color");
    cmd
}

/// Recursively collect (relative path, file content) pairs, sorted.
fn snapshot(root: &Path) -> Vec<(String, String)> {
    fn walk(base: &Path, dir: &Path, acc: &mut Vec<(String, String)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(base, &path, acc);
            } else {
                let rel = path.strip_prefix(base).unwrap().display().to_string();
                acc.push((rel, fs::read_to_string(&path).unwrap()));
            }
        }
    }
    let mut acc = Vec::new();
    walk(root, root, &mut acc);
    acc.sort();
    acc
}

#[test]
fn help_describes_the_flags() {
    axgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("axon_backend"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("--output-format"));
}

#[test]
fn version_flag() {
    axgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn scaffold_from_empty_directory() {
    let temp = TempDir::new().unwrap();

    axgen()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory: axon_backend/"))
        .stdout(predicate::str::contains("created successfully"));

    let root = temp.path().join("axon_backend");
    assert!(root.is_dir());

    for dir in [
        "api/routers",
        "core",
        "data/repositories",
        "services",
        "workers",
        "tests/api",
        "tests/services",
        "tests/data",
    ] {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
        assert!(
            root.join(dir).join("__init__.py").is_file(),
            "missing marker in {dir}"
        );
    }
    assert!(root.join("__init__.py").is_file());

    assert_eq!(
        fs::read_to_string(root.join("api/main.py")).unwrap(),
        "# FastAPI app instance and router setup\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("requirements.txt")).unwrap(),
        "# fastapi, uvicorn, celery\n"
    );
}

#[test]
fn second_run_is_an_identical_noop() {
    let temp = TempDir::new().unwrap();

    axgen().current_dir(temp.path()).assert().success();
    let before = snapshot(&temp.path().join("axon_backend"));

    axgen()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));

    let after = snapshot(&temp.path().join("axon_backend"));
    assert_eq!(before, after, "second run must not change any file");
}

#[test]
fn existing_file_content_is_preserved() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("axon_backend");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join(".env"), "DATABASE_URL=postgres://localhost\n").unwrap();

    axgen()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("differs from placeholder"));

    assert_eq!(
        fs::read_to_string(root.join(".env")).unwrap(),
        "DATABASE_URL=postgres://localhost\n"
    );
}

#[test]
fn deleted_directory_is_recreated_others_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("axon_backend");

    axgen().current_dir(temp.path()).assert().success();

    fs::write(root.join("api/main.py"), "app = FastAPI()\n").unwrap();
    fs::remove_dir_all(root.join("tests/data")).unwrap();

    axgen().current_dir(temp.path()).assert().success();

    assert!(root.join("tests/data").is_dir());
    assert!(root.join("tests/data/__init__.py").is_file());
    assert_eq!(
        fs::read_to_string(root.join("api/main.py")).unwrap(),
        "app = FastAPI()\n"
    );
}

#[test]
fn quiet_run_prints_nothing() {
    let temp = TempDir::new().unwrap();

    axgen()
        .current_dir(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("axon_backend").is_dir());
}

#[test]
fn json_report_is_valid_json() {
    let temp = TempDir::new().unwrap();

    let output = axgen()
        .current_dir(temp.path())
        .args(["--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["created_files"].as_array().unwrap().len(), 20);
    assert_eq!(report["skipped"], 0);
}

#[test]
fn filesystem_obstruction_fails_with_internal_exit_code() {
    let temp = TempDir::new().unwrap();
    // A *file* named like the root blocks every directory creation below it.
    fs::write(temp.path().join("axon_backend"), "not a directory").unwrap();

    axgen()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"));

    // The obstruction itself is left untouched.
    assert_eq!(
        fs::read_to_string(temp.path().join("axon_backend")).unwrap(),
        "not a directory"
    );
}
