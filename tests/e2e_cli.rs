//! CLI end-to-end tests
//!
//! Tests for the submarine command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the submarine binary
#[allow(deprecated)]
fn submarine_cmd() -> Command {
    let mut cmd = Command::cargo_bin("submarine").unwrap();
    // Keep tests independent of any config.toml in the working directory
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = submarine_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = submarine_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submarine"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = submarine_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "submarine {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_cli_parse_series() {
    let mut cmd = submarine_cmd();
    cmd.args(["parse", "The.Show.S01E02.1080p.AMZN.WEB-DL.DDP5.1.H.264-GROUP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: The Show"))
        .stdout(predicate::str::contains("Seasons: [1]"))
        .stdout(predicate::str::contains("Episodes: [2]"))
        .stdout(predicate::str::contains("Release group: GROUP"))
        .stdout(predicate::str::contains("Protocol: BITTORRENT"));
}

#[test]
fn test_cli_parse_json() {
    let mut cmd = submarine_cmd();
    let output = cmd
        .args([
            "parse",
            "The.Matrix.1999.1080p.BluRay.x264-GROUP",
            "--protocol",
            "usenet",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "The Matrix");
    assert_eq!(json["year"], 1999);
    assert_eq!(json["protocol"], "USENET");
}

#[test]
fn test_cli_parse_unparsable_title_fails() {
    let mut cmd = submarine_cmd();
    cmd.args(["parse", "justoneword"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_parse_unknown_protocol_fails() {
    let mut cmd = submarine_cmd();
    cmd.args(["parse", "The.Show.S01E02.720p.HDTV-GRP", "--protocol", "fax"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown protocol"));
}

#[test]
fn test_cli_parse_uses_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("submarine.toml");
    fs::write(&config_path, "[parser]\ndefault_language = \"SPANISH\"\n").unwrap();

    let mut cmd = submarine_cmd();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["parse", "The.Show.S01E02.1080p.WEB-DL.x264-GROUP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Languages: Spanish"));
}

#[test]
fn test_cli_validate_valid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[server]
host = "127.0.0.1"
port = 9000

[parser.release_group_sources]
MyGroup = "WEB_DL"
"#,
    )
    .unwrap();

    let mut cmd = submarine_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("127.0.0.1:9000"))
        .stdout(predicate::str::contains("Release group sources: 1"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[server]\nport = 0\n").unwrap();

    let mut cmd = submarine_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("port cannot be 0"));
}

#[test]
fn test_cli_validate_without_config_uses_defaults() {
    let mut cmd = submarine_cmd();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"));
}
