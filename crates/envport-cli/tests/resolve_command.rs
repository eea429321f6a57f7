use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn base_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("envport"));
    cmd.env_clear();
    cmd
}

#[test]
fn resolve_prints_json_report() {
    let dir = tempdir().expect("tempdir");
    let snapshot = dir.path().join("snapshot.env");
    fs::write(&snapshot, "A=1\nB=\"two\"\ngarbage\nA=3\n").expect("write snapshot");

    let output = base_cmd()
        .args(["resolve", "--format", "json", "--snapshot"])
        .arg(&snapshot)
        .args(["--export-environment-variables", "X=A,MISSING,*"])
        .output()
        .expect("run envport");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["export_remainder"], true);
    assert_eq!(report["lines"], 4);
    assert_eq!(report["skipped_lines"], 1);
    let entries = report["entries"].as_array().expect("entries");
    let summary: Vec<(&str, &str, &str)> = entries
        .iter()
        .map(|entry| {
            (
                entry["destination"].as_str().unwrap_or_default(),
                entry["source"].as_str().unwrap_or_default(),
                entry["status"].as_str().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("B", "B", "exported"),
            ("MISSING", "MISSING", "missing"),
            ("X", "A", "exported"),
        ]
    );
    assert_eq!(entries[0]["value"], "***");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("two"));
}

#[test]
fn resolve_reads_stdin_and_shows_values() {
    base_cmd()
        .args(["resolve", "--snapshot", "-", "--keys", "TOKEN", "--show-values"])
        .write_stdin("TOKEN=abc=def\nOTHER=1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DESTINATION"))
        .stdout(predicate::str::contains("abc=def"))
        .stdout(predicate::str::contains("OTHER").not());
}

#[test]
fn resolve_honours_false_literal() {
    base_cmd()
        .args(["resolve", "--snapshot", "-", "--format", "json"])
        .env("INPUT_EXPORT-ENVIRONMENT-VARIABLES", "FALSE")
        .write_stdin("A=1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"entries\": []"));
}

#[test]
fn resolve_rejects_invalid_toggle() {
    base_cmd()
        .args(["resolve", "--snapshot", "-", "--export-env", "maybe"])
        .write_stdin("A=1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("maybe"));
}

#[test]
fn resolve_reports_unreadable_snapshot() {
    let dir = tempdir().expect("tempdir");
    base_cmd()
        .args(["resolve", "--snapshot"])
        .arg(dir.path().join("nope.env"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
