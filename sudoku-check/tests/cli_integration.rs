// sudoku-check/tests/cli_integration.rs

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_default_run_prints_single_verdict_line() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();

    // The built-in grid is valid: exactly one line on stdout, exit code 0
    cmd.assert()
        .success()
        .stdout(predicate::eq("Sudoku is valid\n"));
}

#[test]
fn test_help_shows_flags() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--pretty"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("Output Format"));
}

#[test]
fn test_json_report_has_all_18_lines() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();
    cmd.arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let lines = report["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 18);
    assert!(lines.iter().all(|line| line["distinct"] == true));
    assert_eq!(
        lines.iter().filter(|line| line["kind"] == "row").count(),
        9
    );
    assert_eq!(
        lines.iter().filter(|line| line["kind"] == "column").count(),
        9
    );
}

#[test]
fn test_pretty_breaks_down_rows_and_columns() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();
    cmd.arg("--pretty");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("row 1"))
        .stdout(predicate::str::contains("column 9"))
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::contains("Sudoku is valid"));
}

#[test]
fn test_conflicting_formats_rejected() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();
    cmd.args(["--json", "--pretty"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_zero_timeout_rejected() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();
    cmd.args(["--timeout", "0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least 1 second"));
}

#[test]
fn test_generous_timeout_still_valid() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();
    cmd.args(["--timeout", "30"]);

    cmd.assert()
        .success()
        .stdout(predicate::eq("Sudoku is valid\n"));
}

#[test]
fn test_verbose_logs_go_to_stderr_not_stdout() {
    let mut cmd = Command::cargo_bin("sudoku-check").unwrap();
    cmd.arg("--verbose");

    // Debug logging must never pollute the verdict on stdout
    cmd.assert()
        .success()
        .stdout(predicate::eq("Sudoku is valid\n"));
}
