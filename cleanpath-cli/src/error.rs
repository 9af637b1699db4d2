//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and I/O failures and maps each of them
//! to the process exit code.

use std::fmt;

use cleanpath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error from the library.
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error reading input or writing results.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Configuration or argument error
    /// - 2: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(_) | CliError::InvalidArguments(_) => 1,
            CliError::Io(_) => 2,
        }
    }

    /// Returns true if the usage line should follow the error message.
    pub fn shows_usage(&self) -> bool {
        match self {
            CliError::Library(_) | CliError::InvalidArguments(_) => true,
            CliError::Io(_) => false,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
