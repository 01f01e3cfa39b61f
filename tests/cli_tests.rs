//! Integration tests for the CLI interface
//!
//! Tests the main entry point and command parsing logic

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dotconf() -> Command {
    Command::cargo_bin("dotconf").unwrap()
}

#[test]
fn test_cli_help_flag() {
    dotconf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_get_help() {
    dotconf()
        .args(["get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read a value"));
}

#[test]
fn test_invalid_command() {
    dotconf()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_set_then_get_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.json");

    dotconf()
        .args(["-f", file.to_str().unwrap(), "set", "app.name", "BigUtility"])
        .assert()
        .success();

    dotconf()
        .args(["-f", file.to_str().unwrap(), "get", "app.name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BigUtility"));
}

#[test]
fn test_set_parses_json_values() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.json");

    dotconf()
        .args(["-f", file.to_str().unwrap(), "set", "server.port", "8080"])
        .assert()
        .success();

    // a number round-trips as a number, not the string "8080"
    dotconf()
        .args(["-f", file.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 8080"));
}

#[test]
fn test_get_missing_key_with_default() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.json");

    dotconf()
        .args([
            "-f",
            file.to_str().unwrap(),
            "get",
            "app.missing",
            "--default",
            "N/A",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn test_get_missing_key_without_default_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.json");

    dotconf()
        .args(["-f", file.to_str().unwrap(), "get", "app.missing"])
        .assert()
        .failure();
}

#[test]
fn test_show_empty_store_prints_empty_object() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.json");

    dotconf()
        .args(["-f", file.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

#[test]
fn test_set_traversal_collision_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.json");

    dotconf()
        .args(["-f", file.to_str().unwrap(), "set", "a.b", "1"])
        .assert()
        .success();

    dotconf()
        .args(["-f", file.to_str().unwrap(), "set", "a.b.c", "2"])
        .assert()
        .failure();
}
