//! Logging infrastructure for the cleanpath library.
//!
//! This module provides a simple stderr-based logging system with
//! configurable log levels. Transform traces are written through the same
//! logger so they obey the same verbosity rules.

use std::env;
use std::fmt;
use std::io::{self, Write};

use crate::pipeline::TraceEntry;

/// Environment variable that selects the log level when no flag does.
pub const LOG_MODE_VAR: &str = "CLEANPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use cleanpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (warnings).
    Normal,
    /// Verbose output (warnings, info and traces).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleanpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level.
///
/// # Examples
///
/// ```
/// use cleanpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("This is a warning");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true if traces and info messages are written.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.level >= LogLevel::Verbose
    }

    /// Logs a warning message.
    ///
    /// Warnings are displayed unless the level is Quiet.
    pub fn warn(&self, message: &str) {
        self.warn_to(message, &mut io::stderr().lock());
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    pub fn info(&self, message: &str) {
        self.info_to(message, &mut io::stderr().lock());
    }

    /// Writes one transform trace line.
    ///
    /// Trace lines carry their own prefix and are only written at Verbose
    /// level.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleanpath::pipeline::TraceEntry;
    /// use cleanpath::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// logger.trace(&TraceEntry::Input("~/docs".to_string()));
    /// ```
    pub fn trace(&self, entry: &TraceEntry) {
        self.trace_to(entry, &mut io::stderr().lock());
    }

    fn warn_to<W: Write>(&self, message: &str, out: &mut W) {
        self.write_at(LogLevel::Normal, format_args!("WARN: {message}"), out);
    }

    fn info_to<W: Write>(&self, message: &str, out: &mut W) {
        self.write_at(LogLevel::Verbose, format_args!("INFO: {message}"), out);
    }

    fn trace_to<W: Write>(&self, entry: &TraceEntry, out: &mut W) {
        self.write_at(LogLevel::Verbose, format_args!("{entry}"), out);
    }

    // A failed diagnostic write must not abort path processing.
    fn write_at<W: Write>(&self, min: LogLevel, line: fmt::Arguments<'_>, out: &mut W) {
        if self.level >= min {
            let _ = writeln!(out, "{line}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `CLEANPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use cleanpath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_VAR) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
