//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studyroom-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn timer_settings_prints_json() {
    let (stdout, _, code) = run_cli(&["timer", "settings"]);
    assert_eq!(code, 0, "timer settings failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("settings output is JSON");
    assert!(parsed["focus_minutes"].is_number());
}

#[test]
fn stats_show_json_parses() {
    let (stdout, _, code) = run_cli(&["stats", "show", "--json"]);
    assert_eq!(code, 0, "stats show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stats output is JSON");
    assert_eq!(parsed["summary"]["sessions"], 23);
    assert_eq!(parsed["weekly"].as_array().unwrap().len(), 7);
}

#[test]
fn stats_show_plain_text() {
    let (stdout, _, code) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    assert!(stdout.contains("Total study time"));
    assert!(stdout.contains("By subject"));
}

#[test]
fn leaderboard_list_json_is_ranked() {
    let (stdout, _, code) = run_cli(&["leaderboard", "list", "--json"]);
    assert_eq!(code, 0, "leaderboard list failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("leaderboard output is JSON");
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["name"], "Alex Johnson");
}

#[test]
fn leaderboard_search_filters() {
    let (stdout, _, code) = run_cli(&["leaderboard", "list", "--search", "liu", "--json"]);
    assert_eq!(code, 0, "leaderboard search failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["handle"], "@liuw");
}

#[test]
fn leaderboard_subject_scope_filters() {
    let (stdout, _, code) = run_cli(&[
        "leaderboard",
        "list",
        "--scope",
        "subjects",
        "--subject",
        "Mathematics",
        "--json",
    ]);
    assert_eq!(code, 0, "leaderboard subject filter failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

#[test]
fn leaderboard_unknown_scope_fails() {
    let (_, stderr, code) = run_cli(&["leaderboard", "list", "--scope", "galaxy"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown scope"));
}

#[test]
fn config_path_prints_location() {
    let (stdout, _, code) = run_cli(&["config", "path"]);
    assert_eq!(code, 0, "config path failed");
    assert!(stdout.trim().ends_with("config.toml"));
}
