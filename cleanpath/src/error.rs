//! Error types for the cleanpath library.
//!
//! Only configuration resolution can fail. Every per-path transform is total
//! and falls back to returning its input unchanged, so nothing in the
//! pipeline produces an [`Error`].

use thiserror::Error;

/// Result type alias for operations that may fail with a cleanpath error.
///
/// # Examples
///
/// ```
/// use cleanpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cleanpath library.
///
/// All variants are fatal configuration errors: they are raised while
/// building a [`Config`](crate::Config) and abort the run before any path
/// is processed.
#[derive(Debug, Error)]
pub enum Error {
    /// Two mutually exclusive options were both enabled.
    #[error("cannot use {first} and {second} together")]
    ConflictingOptions {
        /// The first option of the conflicting pair.
        first: &'static str,
        /// The second option of the conflicting pair.
        second: &'static str,
    },

    /// An option was given without the option it depends on.
    #[error("option {option} requires {requires}")]
    MissingCompanion {
        /// The option that was given.
        option: &'static str,
        /// The option that must accompany it.
        requires: &'static str,
    },

    /// The parent traversal limit could not be parsed.
    #[error("invalid parent limit: {value:?}")]
    InvalidParentLimit {
        /// The raw value that was rejected.
        value: String,
    },

    /// The base directory could not be turned into an absolute path.
    #[error("cannot resolve base {base:?}: {source}")]
    UnresolvableBase {
        /// The base directory as given.
        base: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The substitution pattern is not a valid regular expression.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}
