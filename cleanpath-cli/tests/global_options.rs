//! Integration tests for the verbose and quiet flags.
//!
//! With `--verbose`, each path's trace is written to stderr; stdout carries
//! only the results either way.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_verbose_writes_trace_to_stderr() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["-v", "-a", "-b", "/base", "./x/"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "/base/x\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines[0], "cleanpath input      ./x/");
    assert_eq!(lines[1], "cleanpath clean      ./x/ -> x");
    assert_eq!(lines[2], "cleanpath absolute   x -> /base/x");
    assert_eq!(lines[3], "cleanpath output     /base/x");
}

#[test]
fn test_verbose_skips_unchanged_stages() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "/a/b"])
        .assert()
        .success()
        .stdout("/a/b\n")
        .stderr(predicate::str::contains("cleanpath input      /a/b"))
        .stderr(predicate::str::contains("cleanpath output     /a/b"))
        .stderr(predicate::str::contains("clean ").not());
}

#[test]
fn test_verbose_traces_every_path() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["-v", "-i", "one"])
        .write_stdin("two\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("cleanpath input").count(), 2);
    assert_eq!(stderr.matches("cleanpath output").count(), 2);
}

#[test]
fn test_no_trace_without_verbose() {
    let env = TestEnv::new();
    env.command()
        .args(["-a", "-b", "/base", "x"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_mode_does_not_enable_trace() {
    let env = TestEnv::new();
    env.command()
        .env("CLEANPATH_LOG_MODE", "verbose")
        .args(["./x"])
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("cleanpath input").not());
}

#[test]
fn test_quiet_keeps_results_and_errors() {
    let env = TestEnv::new();
    env.command()
        .args(["-q", "./x"])
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::is_empty());

    env.command()
        .args(["-q", "-a", "-A", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot use -a and -A together"));
}

#[test]
fn test_verbose_wins_over_quiet() {
    let env = TestEnv::new();
    env.command()
        .args(["-q", "-v", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cleanpath input"));
}

#[test]
fn test_ineffective_option_warns() {
    let env = TestEnv::new();
    env.command()
        .args(["-p", "2", "-x", "HOME", "./a"])
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicate::str::contains(
            "WARN: option -x has no effect without -e or -E",
        ))
        .stderr(predicate::str::contains(
            "WARN: option -p has no effect without -A",
        ));
}

#[test]
fn test_quiet_silences_warnings() {
    let env = TestEnv::new();
    env.command()
        .args(["-q", "-p", "2", "-x", "HOME", "./a"])
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_mode_quiet_silences_warnings() {
    let env = TestEnv::new();
    env.command()
        .env("CLEANPATH_LOG_MODE", "quiet")
        .args(["-b", "/srv", "./a"])
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicate::str::is_empty());
}
