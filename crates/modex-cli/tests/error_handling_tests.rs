//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn modex() -> Command {
    Command::cargo_bin("modex").unwrap()
}

#[test]
fn invalid_project_name_gets_suggestions() {
    modex()
        .args(["new", ".hidden", "--skip-install", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("alphanumeric"));
}

#[test]
fn path_separators_in_the_name_are_rejected() {
    modex()
        .args(["new", "foo/bar", "--skip-install", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn existing_project_suggests_another_name() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("taken")).unwrap();

    modex()
        .current_dir(temp.path())
        .args(["new", "taken", "--skip-install", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("different project name"));
}

#[test]
fn unusable_module_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    modex()
        .current_dir(temp.path())
        .args(["generate", "!!!"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no usable characters"))
        .stderr(predicate::str::contains("letters or digits"));

    // A bad name must not leave a half-made module directory behind.
    assert!(!temp.path().join("src/app/modules").exists());
}

#[test]
fn unknown_config_key_exits_not_found() {
    modex()
        .args(["config", "get", "defaults.shell"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unknown configuration key"))
        .stderr(predicate::str::contains("config list"));
}

#[test]
fn errors_hint_at_verbose_mode() {
    modex()
        .args(["new", ".hidden", "--skip-install", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    modex()
        .args(["--config", "/nonexistent/modex.toml", "config", "list"])
        .assert()
        .failure()
        .code(4);
}
