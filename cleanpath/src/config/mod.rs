//! Configuration for the transform pipeline.
//!
//! Configuration is built in two steps:
//!
//! 1. [`Options`] holds the raw option values as the user gave them.
//! 2. [`Config::resolve`] validates them with [`OptionsValidator`] and
//!    resolves everything that needs the operating system (home directory,
//!    environment snapshot, base directory) through a [`SystemContext`].
//!
//! The resulting [`Config`] is immutable and shared by every path processed
//! in one run. All configuration errors surface here, before any path is
//! transformed.
//!
//! # Examples
//!
//! ```
//! use cleanpath::config::{Config, Options, SnapshotContext, UserInfo};
//!
//! let context = SnapshotContext::new(UserInfo::new("me", "/home/me"), "/work");
//! let options = Options {
//!     unabsolute: true,
//!     base: "project".to_string(),
//!     parent: "-".to_string(),
//!     ..Options::default()
//! };
//!
//! let config = Config::resolve(&options, &context).unwrap();
//! assert_eq!(config.base(), Some("/work/project"));
//! ```

pub mod environment;
pub mod validator;

use std::collections::HashSet;

use regex::Regex;

use crate::error::{Error, Result};
use crate::path::clean::is_absolute;
use crate::path::relative::{resolve_base, ParentLimit};

pub use environment::{OsContext, SnapshotContext, SystemContext, UserInfo};
pub use validator::OptionsValidator;

/// Name list entry meaning "every environment variable".
pub const ALL_ENV_NAMES: &str = "-";

/// Default base directory for absolute/relative conversion.
pub const DEFAULT_BASE: &str = ".";

/// Default parent traversal limit.
pub const DEFAULT_PARENT: &str = "0";

/// Raw option values, before validation and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Expand a leading `~` or `~user`.
    pub tilde_expand: bool,
    /// Replace a leading home directory with `~`.
    pub tilde_unexpand: bool,
    /// Expand `$NAME` and `${NAME}` references.
    pub env_expand: bool,
    /// Replace variable values with `$NAME`.
    pub env_unexpand: bool,
    /// Make relative paths absolute.
    pub absolute: bool,
    /// Make absolute paths relative.
    pub unabsolute: bool,
    /// Regular expression to replace; empty when unused.
    pub old_pattern: String,
    /// Replacement template for `old_pattern`; empty when unused.
    pub new_pattern: String,
    /// Target user for tilde handling; empty means the current user.
    pub user: String,
    /// Base directory for absolute/relative conversion.
    pub base: String,
    /// Parent traversal limit, a non-negative integer or `-`.
    pub parent: String,
    /// Variable names for env transforms, in precedence order.
    pub env_names: Vec<String>,
    /// Record a trace of every transform step.
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tilde_expand: false,
            tilde_unexpand: false,
            env_expand: false,
            env_unexpand: false,
            absolute: false,
            unabsolute: false,
            old_pattern: String::new(),
            new_pattern: String::new(),
            user: String::new(),
            base: DEFAULT_BASE.to_string(),
            parent: DEFAULT_PARENT.to_string(),
            env_names: Vec::new(),
            verbose: false,
        }
    }
}

/// Resolved, immutable pipeline configuration.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    tilde_expand: bool,
    tilde_unexpand: bool,
    env_expand: bool,
    env_unexpand: bool,
    absolute: bool,
    unabsolute: bool,
    verbose: bool,
    home: Option<String>,
    user_name: String,
    tilde_prefix_user: Option<String>,
    env_entries: Vec<(String, String)>,
    env_allowed: HashSet<String>,
    pattern: Option<Regex>,
    replacement: String,
    base: Option<String>,
    parent_limit: ParentLimit,
}

impl Config {
    /// Validate `options` and resolve them against `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Mutually exclusive options are both set, or only one of the pattern
    ///   and the replacement is given
    /// - The parent limit is neither a non-negative integer nor `-`
    /// - The base directory is relative and the working directory is unknown
    /// - The pattern is not a valid regular expression
    pub fn resolve(options: &Options, context: &dyn SystemContext) -> Result<Self> {
        OptionsValidator::validate(options)?;

        let (home, user_name) = if options.tilde_expand || options.tilde_unexpand {
            resolve_user(&options.user, context)
        } else {
            (String::new(), String::new())
        };
        let home = Some(home).filter(|home| !home.is_empty());
        let tilde_prefix_user = Some(options.user.clone())
            .filter(|user| !user.is_empty() && *user != user_name);

        let env_entries = if options.env_expand || options.env_unexpand {
            capture_env(&options.env_names, options.env_expand, context)
        } else {
            Vec::new()
        };
        let env_allowed = env_entries.iter().map(|(name, _)| name.clone()).collect();

        let parent_limit = if options.parent.is_empty() {
            ParentLimit::default()
        } else {
            options.parent.parse()?
        };

        let base = if options.absolute || options.unabsolute {
            Some(resolve_base_dir(&options.base, context)?)
        } else {
            None
        };

        let pattern = if options.old_pattern.is_empty() {
            None
        } else {
            Some(
                Regex::new(&options.old_pattern).map_err(|source| Error::InvalidPattern {
                    pattern: options.old_pattern.clone(),
                    source,
                })?,
            )
        };

        log::debug!(
            "resolved config: home={home:?} user={user_name:?} env_entries={} base={base:?} parent={parent_limit}",
            env_entries.len()
        );

        Ok(Self {
            tilde_expand: options.tilde_expand,
            tilde_unexpand: options.tilde_unexpand,
            env_expand: options.env_expand,
            env_unexpand: options.env_unexpand,
            absolute: options.absolute,
            unabsolute: options.unabsolute,
            verbose: options.verbose,
            home,
            user_name,
            tilde_prefix_user,
            env_entries,
            env_allowed,
            pattern,
            replacement: options.new_pattern.clone(),
            base,
            parent_limit,
        })
    }

    /// Whether a leading `~` is expanded.
    #[must_use]
    pub const fn tilde_expand(&self) -> bool {
        self.tilde_expand
    }

    /// Whether a leading home directory is replaced with `~`.
    #[must_use]
    pub const fn tilde_unexpand(&self) -> bool {
        self.tilde_unexpand
    }

    /// Whether `$NAME` references are expanded.
    #[must_use]
    pub const fn env_expand(&self) -> bool {
        self.env_expand
    }

    /// Whether captured values are replaced with `$NAME`.
    #[must_use]
    pub const fn env_unexpand(&self) -> bool {
        self.env_unexpand
    }

    /// Whether relative paths are made absolute.
    #[must_use]
    pub const fn absolute(&self) -> bool {
        self.absolute
    }

    /// Whether absolute paths are made relative.
    #[must_use]
    pub const fn unabsolute(&self) -> bool {
        self.unabsolute
    }

    /// Whether a transform trace was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// The resolved home directory, if known.
    #[must_use]
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// The resolved user name; empty if the target user was not found.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// The user written after `~` by tilde unexpansion, if any.
    #[must_use]
    pub fn tilde_prefix_user(&self) -> Option<&str> {
        self.tilde_prefix_user.as_deref()
    }

    /// Captured `(name, value)` pairs, in precedence order.
    #[must_use]
    pub fn env_entries(&self) -> &[(String, String)] {
        &self.env_entries
    }

    /// Names eligible for env expansion.
    #[must_use]
    pub fn env_allowed(&self) -> &HashSet<String> {
        &self.env_allowed
    }

    /// The substitution pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// The replacement template for [`Config::pattern`].
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The resolved absolute base directory, if absolute or relative
    /// conversion is enabled.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// The parent traversal limit.
    #[must_use]
    pub const fn parent_limit(&self) -> ParentLimit {
        self.parent_limit
    }
}

/// Resolve the target user's home directory and name.
///
/// An unknown user falls back to the current user's home with an empty name.
fn resolve_user(user: &str, context: &dyn SystemContext) -> (String, String) {
    let current = context.current_user();
    if user.is_empty() {
        return (current.home, current.name);
    }

    match context.lookup_user(user) {
        Some(found) => (found.home, found.name),
        None => {
            log::debug!("user {user:?} not found, using the current home directory");
            (current.home, String::new())
        }
    }
}

/// Capture the environment variables used by env transforms.
fn capture_env(
    names: &[String],
    expanding: bool,
    context: &dyn SystemContext,
) -> Vec<(String, String)> {
    if names.iter().any(|name| name == ALL_ENV_NAMES) || (expanding && names.is_empty()) {
        return context.vars();
    }

    names
        .iter()
        .map(|name| (name.clone(), context.var(name).unwrap_or_default()))
        .collect()
}

/// Resolve the base directory to an absolute, cleaned path.
fn resolve_base_dir(base: &str, context: &dyn SystemContext) -> Result<String> {
    if is_absolute(base) {
        return Ok(resolve_base(base, "/"));
    }

    let cwd = context
        .current_dir()
        .map_err(|source| Error::UnresolvableBase {
            base: base.to_string(),
            source,
        })?;
    Ok(resolve_base(base, &cwd))
}
