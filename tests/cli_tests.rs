//! CLI Integration Tests for the shakti binary
//!
//! Tests the command-line interface: help output, configuration loading and
//! the commands that fail locally before reaching the backend.

#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run shakti with arguments inside `dir`, with the token file
/// kept inside the same directory.
fn run_shakti(args: &[&str], dir: &TempDir) -> std::process::Output {
    let mut cmd = Command::new("cargo");
    cmd.arg("run")
        .arg("--quiet")
        .arg("--manifest-path")
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
        .arg("--")
        .args(args)
        .current_dir(dir.path())
        .env("SHAKTI_TOKEN_FILE", dir.path().join("token"))
        .env_remove("SHAKTI_API_BASE")
        .env_remove("SHAKTI_PASSWORD");

    cmd.output().expect("Failed to execute command")
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    let output = run_shakti(&["--help"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SHAKTI"));
    assert!(stdout.contains("login"));
    assert!(stdout.contains("chats"));
    assert!(stdout.contains("send"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let output = run_shakti(&["--version"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shakti"));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_reads_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("shakti.toml"),
        "[api]\nbase_url = \"https://shakti.example.org\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    let output = run_shakti(&["config", "--no-color"], &dir);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://shakti.example.org"));
    assert!(stdout.contains("5s"));
    assert!(stdout.contains("no"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("shakti.toml"), "[api]\nbase_url = \"ftp://nope\"\n").unwrap();

    let output = run_shakti(&["config"], &dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("base_url"));
}

// =============================================================================
// Local Failures
// =============================================================================

#[test]
fn test_new_without_input() {
    let dir = TempDir::new().unwrap();
    let output = run_shakti(&["new", "--no-color"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input required"));
}

#[test]
fn test_chats_requires_login() {
    let dir = TempDir::new().unwrap();
    let output = run_shakti(&["chats", "--no-color"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Authentication Error"));
}

#[test]
fn test_unsupported_attachment_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.zip"), b"PK").unwrap();

    let output = run_shakti(&["new", "--no-color", "notes.zip"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid file type"));
    assert!(stderr.contains("Input required"));
}

#[test]
fn test_logout_without_session() {
    let dir = TempDir::new().unwrap();
    let output = run_shakti(&["logout", "--no-color"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Signed out"));
}
