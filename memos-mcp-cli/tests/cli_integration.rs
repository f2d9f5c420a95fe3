//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve_command() {
    let mut cmd = Command::cargo_bin("memos-mcp").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("memos-mcp").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("memos-mcp"));
}

#[test]
fn test_no_command_prints_help() {
    let mut cmd = Command::cargo_bin("memos-mcp").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("MCP server"));
}

#[test]
fn test_serve_without_configuration_fails_fast() {
    let mut cmd = Command::cargo_bin("memos-mcp").unwrap();
    cmd.arg("serve")
        .env_remove("MEMOS_URL")
        .env_remove("MEMOS_API_KEY")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MEMOS_URL"));
}

#[test]
fn test_serve_requires_api_key() {
    let mut cmd = Command::cargo_bin("memos-mcp").unwrap();
    cmd.arg("serve")
        .env("MEMOS_URL", "https://memos.example.com")
        .env_remove("MEMOS_API_KEY")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MEMOS_API_KEY"));
}
