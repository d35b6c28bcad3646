//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated HOME and verify outputs.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_countdown"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("COUNTDOWN_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "command {args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_status_one_day_out() {
    let home = TempDir::new().unwrap();
    let json = run_json(&home, &["status", "--at", "2025-11-13T08:00:00-03:00"]);

    assert_eq!(json["type"], "StateSnapshot");
    assert_eq!(json["days"], 1);
    assert_eq!(json["hours"], 0);
    assert_eq!(json["minutes"], 0);
    assert_eq!(json["seconds"], 0);
    assert_eq!(json["done"], false);
    assert_eq!(json["state"], "counting");
    assert_eq!(json["timezone"], "America/Sao_Paulo");
    assert_eq!(
        json["target_display"],
        "sexta-feira, 14 de novembro de 2025 às 08:00"
    );
}

#[test]
fn test_status_at_target_is_complete() {
    let home = TempDir::new().unwrap();
    let json = run_json(&home, &["status", "--at", "2025-11-14T11:00:00Z"]);

    assert_eq!(json["done"], true);
    assert_eq!(json["state"], "complete");
    assert_eq!(json["remaining_ms"], 0);
    assert_eq!(json["percent"], 100);
}

#[test]
fn test_status_progress_quarter() {
    let home = TempDir::new().unwrap();
    let json = run_json(
        &home,
        &[
            "status",
            "--target",
            "2025-11-14T08:00:10-03:00",
            "--start",
            "2025-11-14T08:00:00-03:00",
            "--at",
            "2025-11-14T08:00:02.500-03:00",
        ],
    );
    assert_eq!(json["progress"], 0.25);
    assert_eq!(json["percent"], 25);
    assert_eq!(json["seconds"], 7);
}

#[test]
fn test_status_raw_progress_is_not_clamped() {
    let home = TempDir::new().unwrap();
    let json = run_json(
        &home,
        &[
            "status",
            "--target",
            "2025-11-14T08:00:10-03:00",
            "--start",
            "2025-11-14T08:00:00-03:00",
            "--at",
            "2025-11-14T07:59:55-03:00",
        ],
    );
    assert_eq!(json["progress"], -0.5);
    assert_eq!(json["percent"], 0);
}

#[test]
fn test_status_english_locale() {
    let home = TempDir::new().unwrap();
    let json = run_json(
        &home,
        &["status", "--locale", "en-US", "--at", "2025-11-01T00:00:00Z"],
    );
    assert_eq!(json["target_display"], "Friday, November 14, 2025 at 8:00 AM");
}

#[test]
fn test_status_rejects_floating_time() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["status", "--target", "2025-11-14T08:00:00"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no UTC offset"), "stderr: {stderr}");
}

#[test]
fn test_status_rejects_unknown_timezone() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["status", "--timezone", "Nowhere/Land"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown timezone"), "stderr: {stderr}");
}

#[test]
fn test_watch_past_target_completes_and_exits() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, code) = run_cli(
        &home,
        &["watch", "--target", "2020-01-01T00:00:00-03:00", "--no-celebrate"],
    );
    assert_eq!(code, 0, "watch failed: {stderr}");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {stdout}");
    assert!(lines[0].starts_with("00d 00:00:00 100%"));
    assert!(lines[0].contains("Chegou o grande dia!"));
}

#[test]
fn test_watch_celebrates_once() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["watch", "--target", "2020-01-01T00:00:00Z"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.matches("Chegou o grande dia!").count(), 1);
    assert!(stdout.lines().count() > 1);
}

#[test]
fn test_config_get_default() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["config", "get", "display.locale"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "pt-BR");
}

#[test]
fn test_config_set_then_get() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["config", "set", "display.locale", "en-US"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, _) = run_cli(&home, &["config", "get", "display.locale"]);
    assert_eq!(stdout.trim(), "en-US");

    // Status now uses the configured locale.
    let json = run_json(&home, &["status", "--at", "2025-11-01T00:00:00Z"]);
    assert_eq!(json["target_display"], "Friday, November 14, 2025 at 8:00 AM");

    let (_, _, code) = run_cli(&home, &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&home, &["config", "get", "display.locale"]);
    assert_eq!(stdout.trim(), "pt-BR");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["config", "get", "display.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));

    let (_, _, code) = run_cli(&home, &["config", "set", "display.nope", "1"]);
    assert_eq!(code, 1);
}

fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join(".config").join("countdown");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn test_status_fails_on_malformed_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[display]\nlocale = \"en-US\"\nbar_width = \"wide\"\n");

    let (stdout, stderr, code) = run_cli(&home, &["status", "--at", "2025-11-01T00:00:00Z"]);
    assert_eq!(code, 1, "stdout: {stdout}");
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");

    let (_, stderr, code) = run_cli(
        &home,
        &["watch", "--target", "2020-01-01T00:00:00Z", "--no-celebrate"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
}

#[test]
fn test_status_rejects_oversized_bar_width_in_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[display]\nbar_width = 4000000000\n");

    let (_, stderr, code) = run_cli(&home, &["status", "--at", "2025-11-01T00:00:00Z"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("display.bar_width"), "stderr: {stderr}");
}

#[test]
fn test_status_reports_missing_offset_for_short_time() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["status", "--target", "2025-11-14 08:00"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no UTC offset"), "stderr: {stderr}");
}

#[test]
fn test_config_list_is_json() {
    let home = TempDir::new().unwrap();
    let json = run_json(&home, &["config", "list"]);
    assert_eq!(json["tick"]["cadence_ms"], 1000);
    assert_eq!(json["celebration"]["enabled"], true);
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("countdown"));
}
