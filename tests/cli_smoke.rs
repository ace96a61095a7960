#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without crashing. No network calls are
//! made: every failing path is exercised before the request is sent.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn xl8() -> Command {
    let mut cmd = Command::cargo_bin("xl8").unwrap();
    cmd.env_remove("GROQ_API_KEY");
    cmd
}

#[test]
fn test_help_displays_usage() {
    xl8()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI-powered translation CLI tool"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_version_displays_version() {
    xl8()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    xl8()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("de"))
        .stdout(predicate::str::contains("German"))
        .stdout(predicate::str::contains("ja"))
        .stdout(predicate::str::contains("Japanese"));
}

#[test]
fn test_invalid_language_code() {
    xl8()
        .args(["--to", "invalid_lang_xyz"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language"));
}

#[test]
fn test_missing_api_key_fails_without_output() {
    let config_home = TempDir::new().unwrap();

    xl8()
        .args(["--to", "de", "hello"])
        .env("XDG_CONFIG_HOME", config_home.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("GROQ_API_KEY"));
}

#[test]
fn test_empty_input_fails() {
    let config_home = TempDir::new().unwrap();

    xl8()
        .args(["--to", "de"])
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("GROQ_API_KEY", "test-key")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
}
