//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working directory
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The root is canonicalized so it matches what the binary sees as its
    /// working directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self { temp_dir, root }
    }

    /// Get a command builder running inside the test environment.
    ///
    /// The log mode override is cleared so the outer environment cannot
    /// change what the binary writes to stderr.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cleanpath").expect("Failed to find cleanpath binary");
        cmd.current_dir(&self.root).env_remove("CLEANPATH_LOG_MODE");
        cmd
    }

    /// Get the root path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Get the root path as a string.
    pub fn root_str(&self) -> String {
        self.root.to_str().expect("Temp path is not UTF-8").to_string()
    }

    /// Create a subdirectory in the test environment and return its path.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run the binary with `args`, assert success and return stdout lines.
    ///
    /// # Panics
    /// Panics if the command fails or writes invalid UTF-8.
    pub fn run(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run cleanpath");

        assert!(
            output.status.success(),
            "cleanpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Run the binary with `args`, feeding `input` on stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Vec<String> {
        let output = self
            .command()
            .args(args)
            .write_stdin(input)
            .output()
            .expect("Failed to run cleanpath");

        assert!(
            output.status.success(),
            "cleanpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
