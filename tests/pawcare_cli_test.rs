// ABOUTME: Integration tests for the pawcare-cli binary
// ABOUTME: Runs series and score commands against JSON files and stdin and checks the output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

//! Integration tests for the pawcare-cli binary.
//!
//! These tests verify command structure, JSON output, and error exits.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Path to the pawcare-cli binary built for this test run
fn cli_binary() -> &'static str {
    env!("CARGO_BIN_EXE_pawcare-cli")
}

/// Run the CLI and capture exit code, stdout, and stderr
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(cli_binary()).args(args).output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Run the CLI with a document piped to stdin
fn run_cli_with_stdin(args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(cli_binary())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn json_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn weight_history() -> Value {
    json!({
        "success": true,
        "weightHistory": [
            { "date": "2025-05-03", "weight": 20.4 },
            { "date": "2025-05-01", "weight": 20.0 },
            { "date": "2025-05-02", "weight": 20.2 },
            { "date": "2025-05-04", "weight": 20.6 }
        ]
    })
}

fn assert_series_analysis(stdout: &str) {
    let analysis: Value = serde_json::from_str(stdout).unwrap();

    assert_eq!(analysis["statistics"]["count"], 4);
    assert_eq!(analysis["trend"]["direction"], "increasing");
    assert_eq!(analysis["smoothed"].as_array().unwrap().len(), 4);
    assert_eq!(analysis["smoothed"][0]["date"], "2025-05-01");
    assert_eq!(analysis["confidence_band"].as_array().unwrap().len(), 4);
    assert!(analysis["outliers"].as_array().unwrap().is_empty());
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("series"), "Help should mention 'series' command");
    assert!(stdout.contains("score"), "Help should mention 'score' command");
}

#[test]
fn test_cli_series_from_file() {
    let file = json_file(&weight_history());
    let path = file.path().to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&["series", path]);

    assert_eq!(exit_code, 0, "series should succeed: {stderr}");
    assert_series_analysis(&stdout);
}

#[test]
fn test_cli_series_from_stdin() {
    let (exit_code, stdout, stderr) =
        run_cli_with_stdin(&["series", "-"], &weight_history().to_string());

    assert_eq!(exit_code, 0, "series on stdin should succeed: {stderr}");
    assert_series_analysis(&stdout);
}

#[test]
fn test_cli_series_window_override() {
    let input = json!([
        { "date": "2025-05-01", "value": 1.0 },
        { "date": "2025-05-02", "value": 5.0 },
        { "date": "2025-05-03", "value": 9.0 }
    ]);

    let (exit_code, stdout, _stderr) =
        run_cli_with_stdin(&["series", "-", "--window", "1"], &input.to_string());

    assert_eq!(exit_code, 0);
    let analysis: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(analysis["smoothed"][1]["smoothed_value"], 5.0);
}

#[test]
fn test_cli_series_unsuccessful_response_fails() {
    let (exit_code, stdout, _stderr) = run_cli_with_stdin(&["series", "-"], r#"{"success": false}"#);

    assert_ne!(exit_code, 0, "unsuccessful response should exit non-zero");
    assert!(stdout.trim().is_empty());
}

#[test]
fn test_cli_missing_file_fails() {
    let (exit_code, _stdout, stderr) = run_cli(&["series", "/nonexistent/pawcare/history.json"]);

    assert_ne!(exit_code, 0);
    assert!(!stderr.is_empty());
}

#[test]
fn test_cli_score_with_fixed_date() {
    let input = json!({
        "pet": { "name": "Biscuit", "current_weight": 26.0, "ideal_weight": 20.0 },
        "healthData": {
            "activity": { "progress": 60.0 },
            "medications": [{ "name": "Carprofen", "adherence": 100 }],
            "alerts": [{ "severity": "medium" }],
            "records": [{ "type": "vet_visit", "date": "2025-03-01" }]
        }
    });
    let file = json_file(&input);
    let path = file.path().to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&["score", path, "--as-of", "2025-06-01"]);

    assert_eq!(exit_code, 0, "score should succeed: {stderr}");
    let report: Value = serde_json::from_str(&stdout).unwrap();
    // 100 - 20 weight - 10 activity - 5 alert
    assert_eq!(report["score"], 65);
    assert_eq!(report["breakdown"]["checkup_penalty"], 0.0);
    assert_eq!(report["insights"][0]["title"], "Weight Above Ideal");
}

#[test]
fn test_cli_score_rejects_malformed_date() {
    let file = json_file(&json!({ "pet": {} }));
    let path = file.path().to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&["score", path, "--as-of", "June 1st"]);

    assert_ne!(exit_code, 0, "malformed date should be rejected");
    assert!(stdout.trim().is_empty());
    assert!(stderr.contains("--as-of"));
}
