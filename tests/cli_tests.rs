#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("cli").expect("cli binary")
}

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write config");
    file
}

const SHORT_BLOCK: &str = r#"{
    "name": "Short block",
    "start_date": "2026-01-01",
    "split": ["A", "Rest", "B"],
    "cycles": 1
}"#;

#[test]
fn cli_renders_default_program() {
    cli()
        .assert()
        .success()
        .stdout(str_contains("Training Program: Unnamed Training Program"))
        .stdout(str_contains("Schedule 1: Unnamed Schedule"))
        .stdout(str_contains("12 cycle training schedule:"))
        .stdout(str_contains("Full body posture correction"));
}

#[test]
fn cli_renders_schedule_from_config_file() {
    let file = config_file(SHORT_BLOCK);
    cli()
        .arg(file.path())
        .assert()
        .success()
        .stdout(str_contains("Schedule 1: Short block"))
        .stdout(str_contains("2026-01-01\nRest\n\n2026-01-02\nA\n\n2026-01-03\nB\n"));
}

#[test]
fn cli_prints_json_calendar() {
    let file = config_file(SHORT_BLOCK);
    let assert = cli().arg("--json").arg(file.path()).assert().success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid json output");
    assert_eq!(
        value,
        serde_json::json!([
            { "date": "2026-01-01", "protocol": "Rest" },
            { "date": "2026-01-02", "protocol": "A" },
            { "date": "2026-01-03", "protocol": "B" },
        ])
    );
}

#[test]
fn cli_reports_empty_training_days() {
    let file = config_file(r#"{ "split": ["A"], "training_days": [] }"#);
    cli()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(str_contains("no training days are configured"));
}

#[test]
fn cli_rejects_unknown_option() {
    cli()
        .arg("--verbose")
        .assert()
        .failure()
        .stderr(str_contains("unknown option '--verbose'"));
}
