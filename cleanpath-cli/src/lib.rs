//! Library exports for cleanpath-cli.
//!
//! This module exports the CLI structure and the processing loop so the
//! binary and the integration tests share them.

pub mod cli;
pub mod error;
pub mod runner;

pub use cli::Cli;
