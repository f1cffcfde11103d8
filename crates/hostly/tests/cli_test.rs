//! Integration tests for the `hostly` CLI binary.
//!
//! These tests validate argument parsing, help output, and error
//! handling without requiring a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `hostly` binary with env isolation.
///
/// Clears all `HOSTLY_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn hostly_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("hostly");
    cmd.env("HOME", "/tmp/hostly-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/hostly-cli-test-nonexistent")
        .env_remove("HOSTLY_PROFILE")
        .env_remove("HOSTLY_BACKEND")
        .env_remove("HOSTLY_API_KEY")
        .env_remove("HOSTLY_OUTPUT")
        .env_remove("HOSTLY_INSECURE")
        .env_remove("HOSTLY_TIMEOUT");
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
    let output = hostly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("Usage"),
        "Expected 'Usage' in output:\n{text}"
    );
}

#[test]
fn test_help_flag() {
    hostly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("properties")
            .and(predicate::str::contains("rooms"))
            .and(predicate::str::contains("gallery"))
            .and(predicate::str::contains("policies")),
    );
}

#[test]
fn test_version_flag() {
    hostly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostly"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = hostly_cmd().arg("foobar").output().unwrap();
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
fn test_properties_list_no_backend() {
    hostly_cmd()
        .args(["properties", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("backend"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists; it just renders the default config.
    hostly_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_config_path_prints_location() {
    hostly_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_use_unknown_profile() {
    hostly_cmd()
        .args(["config", "use", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_invalid_output_format() {
    let output = hostly_cmd()
        .args(["--output", "invalid", "properties", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_invalid_backend_url() {
    hostly_cmd()
        .args([
            "--backend",
            "not a url",
            "--api-key",
            "k",
            "properties",
            "list",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn test_backend_without_api_key() {
    hostly_cmd()
        .args(["--backend", "https://backend.example", "properties", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("credentials").or(predicate::str::contains("API key")),
        );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly; the failure should be about
    // missing backend config, not about argument parsing.
    hostly_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "properties",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("backend"))
                .or(predicate::str::contains("profile")),
        );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_properties_subcommands_exist() {
    hostly_cmd()
        .args(["properties", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("tabs"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("disable")),
        );
}

#[test]
fn test_rooms_subcommands_exist() {
    hostly_cmd()
        .args(["rooms", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_amenities_subcommands_exist() {
    hostly_cmd()
        .args(["amenities", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("catalog")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("set")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    hostly_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("show")
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-key"))
                .and(predicate::str::contains("path")),
        );
}

#[test]
fn test_properties_alias() {
    hostly_cmd()
        .args(["props", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}
