use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const REPORT: &str = "\
CAPITAL ONE BANK USA NA
Account Number   XXXX 1234     Reported Balance   $949
Account Status   Open     Available Credit   $2,051
2022 1,234 - 2,000
";

fn tradeline(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tradeline").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_input_fails_after_setup() {
    let dir = tempfile::tempdir().unwrap();

    tradeline(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .pdf file found"));

    assert!(dir.path().join("input").is_dir());
    assert!(dir.path().join("output").is_dir());
}

#[test]
fn test_text_input_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tradeline.json"),
        r#"{"paths": {"input_extension": "txt"}}"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("input")).unwrap();
    fs::write(dir.path().join("input").join("report.txt"), REPORT).unwrap();

    tradeline(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 7 fields"));

    let output = dir.path().join("output");
    let text = fs::read_to_string(output.join("tradeline_data.txt")).unwrap();
    assert!(text.contains("Account Name: CAPITAL ONE BANK USA NA\n"));
    assert!(text.contains("Reported Balance: 949\n"));
    assert!(text.contains("2022 DEC (36): 1234\n"));
    assert!(text.contains("2022 NOV (35): \n"));

    assert!(output.join("tradeline_data.xlsx").is_file());
    assert!(output.join("tradeline.log").is_file());

    let transcript = fs::read_to_string(output.join("debug_transcript.txt")).unwrap();
    assert!(transcript.contains("\"Account Number  XXXX 1234  Reported Balance  $949\""));
}

#[test]
fn test_flags_select_detailed_layout() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("report.txt"), "Date Opened   Jan 05, 2017\n").unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{"paths": {"input_extension": "txt"}}"#).unwrap();

    tradeline(dir.path())
        .args(["--config", "custom.json", "--input-dir", "docs", "--output-dir", "out"])
        .args(["--layout", "detailed"])
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("out").join("tradeline_data.txt")).unwrap();
    assert!(text.contains("Date Opened: 2017-01-05\n"));
    assert!(text.contains("Remarks: N/A\n"));

    let log = fs::read_to_string(dir.path().join("out").join("tradeline.log")).unwrap();
    assert!(log.contains("Using configuration from custom.json"));
}

#[test]
fn test_defaults_are_logged_without_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("report.pdf"), b"not a pdf").unwrap();

    tradeline(dir.path())
        .arg("-v")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration file found, using defaults"));

    let log = fs::read_to_string(dir.path().join("output").join("tradeline.log")).unwrap();
    assert!(log.contains("No configuration file found, using defaults"));
}

#[test]
fn test_pre_1900_date_still_writes_both_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("report.txt"), "Date Opened   Jan 05, 1899\n").unwrap();
    fs::write(
        dir.path().join("tradeline.json"),
        r#"{"paths": {"input_extension": "txt"}}"#,
    )
    .unwrap();

    tradeline(dir.path())
        .args(["--layout", "detailed"])
        .assert()
        .success();

    let output = dir.path().join("output");
    let text = fs::read_to_string(output.join("tradeline_data.txt")).unwrap();
    assert!(text.contains("Date Opened: 1899-01-05\n"));
    assert!(output.join("tradeline_data.xlsx").is_file());
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();

    tradeline(dir.path())
        .args(["config", "init", "--output", "tradeline.json"])
        .assert()
        .success();
    assert!(dir.path().join("tradeline.json").is_file());

    tradeline(dir.path())
        .args(["config", "init", "--output", "tradeline.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tradeline(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input_extension\": \"pdf\""));
}
