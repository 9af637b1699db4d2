//! Integration tests for error handling and exit codes.
//!
//! Exit codes:
//! - 0: every path was processed
//! - 1: the flags or their values were rejected
//! - 2: reading paths or writing results failed
//!
//! Configuration errors are reported before any path is processed, so
//! stdout stays empty.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn assert_config_error(args: &[&str], message: &str) {
    let env = TestEnv::new();
    env.command()
        .args(args)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("Error: {message}")))
        .stderr(predicate::str::contains("Usage: cleanpath"));
}

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command().arg("a/b").assert().code(0).stderr(predicate::str::is_empty());
}

#[test]
fn test_conflicting_tilde_flags() {
    assert_config_error(&["-t", "-T", "x"], "cannot use -t and -T together");
}

#[test]
fn test_conflicting_env_flags() {
    assert_config_error(&["-e", "-E", "x"], "cannot use -e and -E together");
}

#[test]
fn test_conflicting_absolute_flags() {
    assert_config_error(&["-a", "-A", "x"], "cannot use -a and -A together");
}

#[test]
fn test_first_conflict_is_reported() {
    assert_config_error(&["-T", "-t", "-A", "-a", "x"], "cannot use -t and -T together");
}

#[test]
fn test_old_without_new() {
    assert_config_error(&["-o", "a", "x"], "option -o requires -n");
}

#[test]
fn test_new_without_old() {
    assert_config_error(&["-n", "b", "x"], "option -n requires -o");
}

#[test]
fn test_empty_replacement_counts_as_missing() {
    assert_config_error(&["-o", "a", "-n", "", "x"], "option -o requires -n");
}

#[test]
fn test_invalid_parent_limit() {
    assert_config_error(&["-p", "two", "x"], "invalid parent limit: \"two\"");
    assert_config_error(&["-p", "-1", "x"], "invalid parent limit: \"-1\"");
}

#[test]
fn test_parent_limit_checked_without_unabsolute() {
    assert_config_error(&["-p", "x", "y"], "invalid parent limit");
}

#[test]
fn test_invalid_pattern() {
    assert_config_error(&["-o", "(", "-n", "x", "y"], "invalid pattern \"(\"");
}

#[test]
fn test_config_error_wins_over_missing_paths() {
    assert_config_error(&["-a", "-A"], "cannot use -a and -A together");
}

#[test]
fn test_config_error_before_reading_stdin() {
    let env = TestEnv::new();
    env.command()
        .args(["-i", "-e", "-E"])
        .write_stdin("a\nb\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_error_exit_code() {
    use assert_cmd::prelude::*;
    use std::fs::OpenOptions;
    use std::process::Command;

    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("Failed to open /dev/full");

    let output = Command::cargo_bin("cleanpath")
        .expect("Failed to find cleanpath binary")
        .arg("a")
        .stdout(full)
        .output()
        .expect("Failed to run cleanpath");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: I/O error:"), "{stderr}");
    assert!(!stderr.contains("Usage:"), "{stderr}");
}
