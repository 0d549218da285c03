//! CLI end-to-end tests
//!
//! Tests for the mediaaccess command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the mediaaccess binary
#[allow(deprecated)]
fn mediaaccess_cmd() -> Command {
    Command::cargo_bin("mediaaccess").unwrap()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = mediaaccess_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = mediaaccess_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediaaccess"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = mediaaccess_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "mediaaccess {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_cli_start_help() {
    let mut cmd = mediaaccess_cmd();
    cmd.args(["start", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start the HTTP server"))
        .stdout(predicate::str::contains("4322"));
}

#[test]
fn test_cli_validate_without_config_uses_defaults() {
    let temp = tempdir().unwrap();
    let mut cmd = mediaaccess_cmd();
    cmd.current_dir(temp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("0.0.0.0:4322"));
}

#[test]
fn test_cli_validate_valid_config() {
    let temp = tempdir().unwrap();
    let catalog = temp.path().join("catalog.json");
    fs::write(&catalog, r#"{"movies": [{"id": "m1", "title": "Alien"}]}"#).unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(
        &config_file,
        format!(
            r#"
[server]
host = "127.0.0.1"
port = 9000

[[providers]]
id = 1
kind = "movie"
name = "Movies"
backend = "catalog"
path = "{}"
"#,
            catalog.display()
        ),
    )
    .unwrap();

    let mut cmd = mediaaccess_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("127.0.0.1:9000"))
        .stdout(predicate::str::contains("movie: 1"));
}

#[test]
fn test_cli_validate_rejects_incompatible_backend() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(
        &config_file,
        r#"
[[providers]]
id = 1
kind = "picture"
name = "Photos"
backend = "catalog"
path = "/tmp/catalog.json"
"#,
    )
    .unwrap();

    let mut cmd = mediaaccess_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot serve"));
}

#[test]
fn test_cli_providers_lists_configured_backends() {
    let temp = tempdir().unwrap();
    let files = temp.path().join("files");
    fs::create_dir_all(&files).unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(
        &config_file,
        format!(
            r#"
[[providers]]
id = 3
kind = "filesystem"
name = "Scratch"
backend = "filesystem"
roots = ["{}"]
"#,
            files.display()
        ),
    )
    .unwrap();

    let mut cmd = mediaaccess_cmd();
    cmd.args(["--config", config_file.to_str().unwrap(), "providers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filesystem:"))
        .stdout(predicate::str::contains("[3] Scratch (filesystem)"));
}

#[test]
fn test_cli_providers_with_empty_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "").unwrap();

    let mut cmd = mediaaccess_cmd();
    cmd.args(["--config", config_file.to_str().unwrap(), "providers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers configured"));
}
