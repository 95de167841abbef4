// tests/cli_basic.rs

mod common;

use assert_cmd::Command;
use common::{project, rust_project};
use predicates::prelude::*;

fn txtforge() -> Command {
    Command::cargo_bin("txtforge").expect("binary should build")
}

#[test]
fn test_detect_only_prints_json() {
    let temp = rust_project();

    txtforge()
        .arg(temp.path())
        .arg("--detect-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rust\""))
        .stdout(predicate::str::contains("\"git_status\""));
}

#[test]
fn test_processing_reports_output_files() {
    let temp = rust_project();

    txtforge()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged 2 files"))
        .stdout(predicate::str::contains("Source-Tree.txt"));

    assert!(temp
        .path()
        .join("TXT-Forge")
        .join("Merged")
        .join("Source-Tree.txt")
        .exists());
}

#[test]
fn test_empty_directory_exits_nonzero() {
    let temp = project();

    txtforge()
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No matching files found."));
}

#[test]
fn test_explicit_templates_override_detection() {
    let temp = rust_project();

    txtforge()
        .arg(temp.path())
        .args(["--templates", "sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found."));
}

#[test]
fn test_full_context_flag() {
    let temp = rust_project();

    txtforge()
        .arg(temp.path())
        .arg("--full-context")
        .assert()
        .success()
        .stdout(predicate::str::contains("Source-1 (Full Context).txt"));
}
