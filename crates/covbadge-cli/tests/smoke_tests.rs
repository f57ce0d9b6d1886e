//! Smoke tests for the covbadge CLI
//!
//! These run the real binary against temporary kcov output directories.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LINK: &str = "?link=https://simple-lua.maxortner.com/coverage.html";

/// Get a command for the covbadge binary
fn covbadge() -> Command {
    Command::cargo_bin("covbadge").expect("covbadge binary should exist")
}

/// Base directory holding `kcov-merged/coverage.json` with `json`
fn kcov_dir(json: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let merged = temp.path().join("kcov-merged");
    fs::create_dir_all(&merged).unwrap();
    fs::write(merged.join("coverage.json"), json).unwrap();
    temp
}

fn read_page(base: &Path) -> String {
    fs::read_to_string(base.join("coverage-badge.html")).unwrap()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    covbadge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    covbadge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BASE_DIR"))
        .stdout(predicate::str::contains("coverage"));
}

#[test]
fn test_no_args_fails() {
    covbadge().assert().failure().code(2);
}

#[test]
fn test_two_positionals_fail() {
    covbadge().args(["a", "b"]).assert().failure().code(2);
}

// ============================================================================
// End-to-end Scenarios
// ============================================================================

#[test]
fn test_green_badge() {
    let temp = kcov_dir(r#"{"percent_covered": 92.5}"#);

    covbadge()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("92.5\n");

    let html = read_page(temp.path());
    assert!(html.contains(&format!("code_coverage-92%25-green{LINK}")));
    assert!(html.contains(r#"<meta http-equiv="refresh" content="0; url=https://img.shields.io/badge/"#));
    assert!(html.contains("<body>Redirecting...</body>"));
}

#[test]
fn test_zero_coverage_is_red() {
    let temp = kcov_dir(r#"{"percent_covered": 0.0}"#);

    covbadge()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("0.0\n");

    assert!(read_page(temp.path()).contains("code_coverage-0%25-red"));
}

#[test]
fn test_full_coverage_is_green() {
    let temp = kcov_dir(r#"{"percent_covered": 100.0}"#);

    covbadge().arg(temp.path()).assert().success();

    assert!(read_page(temp.path()).contains("code_coverage-100%25-green"));
}

#[test]
fn test_exact_threshold_uses_lower_tier() {
    let temp = kcov_dir(r#"{"percent_covered": 50.0}"#);

    covbadge().arg(temp.path()).assert().success();

    assert!(read_page(temp.path()).contains("code_coverage-50%25-red"));
}

#[test]
fn test_truncated_display_value() {
    let temp = kcov_dir(r#"{"percent_covered": 74.99}"#);

    covbadge()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("74.99\n");

    assert!(read_page(temp.path()).contains("code_coverage-74%25-orange"));
}

#[test]
fn test_kcov_string_percentage() {
    let temp = kcov_dir(r#"{"files": [], "percent_covered": "81.25", "covered_lines": 130, "total_lines": 160}"#);

    covbadge()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("81.25\n");

    assert!(read_page(temp.path()).contains("code_coverage-81%25-yellow"));
}

#[test]
fn test_output_is_idempotent() {
    let temp = kcov_dir(r#"{"percent_covered": 63.1}"#);

    covbadge().arg(temp.path()).assert().success();
    let first = fs::read(temp.path().join("coverage-badge.html")).unwrap();
    covbadge().arg(temp.path()).assert().success();
    let second = fs::read(temp.path().join("coverage-badge.html")).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Failure Scenarios
// ============================================================================

#[test]
fn test_missing_report_fails_without_output() {
    let temp = TempDir::new().unwrap();

    covbadge()
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("coverage.json"));

    assert!(!temp.path().join("coverage-badge.html").exists());
}

#[test]
fn test_missing_report_keeps_previous_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("coverage-badge.html"), "previous").unwrap();

    covbadge().arg(temp.path()).assert().failure();

    assert_eq!(read_page(temp.path()), "previous");
}

#[test]
fn test_malformed_report_fails() {
    let temp = kcov_dir("{ this is not json");

    covbadge()
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coverage report"));

    assert!(!temp.path().join("coverage-badge.html").exists());
}

#[test]
fn test_missing_field_fails() {
    let temp = kcov_dir(r#"{"covered_lines": 10, "total_lines": 20}"#);

    covbadge()
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("percent_covered"));
}

#[test]
fn test_negative_percentage_fails() {
    let temp = kcov_dir(r#"{"percent_covered": -4.0}"#);

    covbadge()
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert!(!temp.path().join("coverage-badge.html").exists());
}

#[test]
fn test_base_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("file.txt");
    fs::write(&file, "").unwrap();

    covbadge()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_quiet_keeps_stdout() {
    let temp = kcov_dir(r#"{"percent_covered": 88.0}"#);

    covbadge()
        .args(["-q", "--color", "never"])
        .arg(temp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("88.0\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = kcov_dir(r#"{"percent_covered": 88.0}"#);

    covbadge()
        .args(["-vv", "--color", "never"])
        .arg(temp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("88.0\n")
        .stderr(predicate::str::contains("wrote badge page"))
        .stderr(predicate::str::contains("code_coverage-88%25-yellow"));
}
