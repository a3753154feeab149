//! Integration tests for the `arloctl` binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without touching the Arlo service.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `arloctl` binary with env isolation.
///
/// Clears all `ARLO_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn arloctl_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("arloctl");
    cmd.env("HOME", "/tmp/arloctl-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/arloctl-test-nonexistent")
        .env_remove("ARLO_PROFILE")
        .env_remove("ARLO_EMAIL")
        .env_remove("ARLO_PASSWORD")
        .env_remove("ARLO_BASE_URL")
        .env_remove("ARLO_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = arloctl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    arloctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Arlo")
            .and(predicate::str::contains("cameras"))
            .and(predicate::str::contains("access")),
    );
}

#[test]
fn test_version_flag() {
    arloctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("arloctl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    arloctl_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    arloctl_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = arloctl_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_cameras_on_without_credentials() {
    let output = arloctl_cmd().args(["cameras", "on"]).output().unwrap();
    assert_eq!(
        output.status.code(),
        Some(3),
        "Expected auth exit code for missing credentials"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("credentials") || text.contains("ARLO_PASSWORD"),
        "Expected missing-credentials diagnostic:\n{text}"
    );
}

#[test]
fn test_access_grant_without_credentials() {
    arloctl_cmd()
        .args(["access", "grant-all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials").or(predicate::str::contains("profile")));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_cameras_subcommands_exist() {
    arloctl_cmd()
        .args(["cameras", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on").and(predicate::str::contains("off")));
}

#[test]
fn test_access_subcommands_exist() {
    arloctl_cmd()
        .args(["access", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("grant-all").and(predicate::str::contains("revoke-all")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    arloctl_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path").and(predicate::str::contains("show")));
}

// ── Config inspection ───────────────────────────────────────────────

#[test]
fn test_config_path_prints_a_path() {
    arloctl_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_without_config_renders_defaults() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    arloctl_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_profile"));
}
