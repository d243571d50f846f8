//! Basic CLI E2E tests.
//!
//! Each test runs the compiled binary against its own temporary data
//! directory via URGENDA_DATA_DIR, so tests never touch real user state.

use std::path::Path;
use std::process::Command;

fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_urgenda"))
        .args(args)
        .env("URGENDA_DATA_DIR", data_dir)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Pull the created item's id out of "Task created: <id>" / "Exam created: <id>".
fn created_id(stdout: &str) -> String {
    stdout
        .lines()
        .next()
        .and_then(|line| line.rsplit(' ').next())
        .expect("no id in create output")
        .to_string()
}

#[test]
fn task_add_and_list() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, stderr, code) = run_cli(dir.path(), &["task", "add", "essay", "--days", "2"]);
    assert_eq!(code, 0, "task add failed: {stderr}");
    assert!(stdout.contains("Task created:"));

    let (stdout, _, code) = run_cli(dir.path(), &["task", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("essay"));

    let (stdout, _, code) = run_cli(dir.path(), &["task", "list", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["name"], "essay");
    assert_eq!(parsed[0]["days_left"], 2);
}

#[test]
fn completion_moves_name_to_done_log() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["task", "add", "lab report", "--days", "1"]);
    assert_eq!(code, 0);
    let id = created_id(&stdout);

    let (stdout, stderr, code) = run_cli(dir.path(), &["task", "complete", &id]);
    assert_eq!(code, 0, "complete failed: {stderr}");
    assert!(stdout.contains("Completed: lab report"));

    let (stdout, _, code) = run_cli(dir.path(), &["task", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No active tasks."));

    let (stdout, _, code) = run_cli(dir.path(), &["done", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("lab report"));
}

#[test]
fn exam_add_uses_explicit_date() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, stderr, code) = run_cli(
        dir.path(),
        &["exam", "add", "algebra final", "--weight", "2", "--date", "2099-01-15"],
    );
    assert_eq!(code, 0, "exam add failed: {stderr}");
    assert!(stdout.contains("Exam created:"));

    let (stdout, _, code) = run_cli(dir.path(), &["exam", "list", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["name"], "algebra final");
    assert_eq!(parsed[0]["date"], "2099-01-15");
}

#[test]
fn invalid_weight_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let (_, stderr, code) = run_cli(
        dir.path(),
        &["task", "add", "broken", "--weight=-3", "--days", "1"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("weight"));

    let (stdout, _, code) = run_cli(dir.path(), &["task", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No active tasks."));
}

#[test]
fn invalid_date_is_rejected_at_the_boundary() {
    let dir = tempfile::tempdir().unwrap();

    let (_, stderr, code) = run_cli(
        dir.path(),
        &["exam", "add", "broken", "--date", "not-a-date"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid date"));
}

#[test]
fn subtasks_round_trip_through_get() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["task", "add", "essay", "--days", "3"]);
    assert_eq!(code, 0);
    let id = created_id(&stdout);

    let (_, stderr, code) = run_cli(dir.path(), &["task", "subtask", "add", &id, "outline"]);
    assert_eq!(code, 0, "subtask add failed: {stderr}");
    let (_, _, code) = run_cli(dir.path(), &["task", "subtask", "toggle", &id, "0"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["task", "get", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[x] outline"));
}

#[test]
fn config_show_and_set() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("recompute_secs = 10"));

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "--recompute-secs", "30"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("recompute_secs = 30"));
}
