//! Option combination validation.

use crate::config::{Options, DEFAULT_BASE, DEFAULT_PARENT};
use crate::error::{Error, Result};

/// Validates option combinations before anything is resolved.
///
/// # Examples
///
/// ```
/// use cleanpath::config::{Options, OptionsValidator};
///
/// let options = Options {
///     absolute: true,
///     unabsolute: true,
///     ..Options::default()
/// };
/// assert!(OptionsValidator::validate(&options).is_err());
/// ```
pub struct OptionsValidator;

impl OptionsValidator {
    /// Validate an option set.
    ///
    /// Checks are made in a fixed order and the first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingOptions`] when both directions of the
    /// tilde, env or absolute transform are enabled, and
    /// [`Error::MissingCompanion`] when only one of the pattern and the
    /// replacement is given.
    pub fn validate(options: &Options) -> Result<()> {
        Self::exclusive(options.tilde_expand, options.tilde_unexpand, "-t", "-T")?;
        Self::exclusive(options.env_expand, options.env_unexpand, "-e", "-E")?;
        Self::exclusive(options.absolute, options.unabsolute, "-a", "-A")?;

        let has_old = !options.old_pattern.is_empty();
        let has_new = !options.new_pattern.is_empty();
        if has_old && !has_new {
            return Err(Error::MissingCompanion {
                option: "-o",
                requires: "-n",
            });
        }
        if has_new && !has_old {
            return Err(Error::MissingCompanion {
                option: "-n",
                requires: "-o",
            });
        }

        Ok(())
    }

    /// List options that were given but cannot affect any path.
    ///
    /// Each entry pairs the option with the transform flags it needs. These
    /// are not errors; the driver reports them as warnings.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleanpath::config::{Options, OptionsValidator};
    ///
    /// let options = Options {
    ///     parent: "2".into(),
    ///     ..Options::default()
    /// };
    /// assert_eq!(OptionsValidator::ineffective(&options), vec![("-p", "-A")]);
    /// ```
    #[must_use]
    pub fn ineffective(options: &Options) -> Vec<(&'static str, &'static str)> {
        let tilde = options.tilde_expand || options.tilde_unexpand;
        let env = options.env_expand || options.env_unexpand;
        let base = options.absolute || options.unabsolute;

        [
            (!options.user.is_empty() && !tilde, ("-u", "-t or -T")),
            (!options.env_names.is_empty() && !env, ("-x", "-e or -E")),
            (options.base != DEFAULT_BASE && !base, ("-b", "-a or -A")),
            (
                !options.parent.is_empty()
                    && options.parent != DEFAULT_PARENT
                    && !options.unabsolute,
                ("-p", "-A"),
            ),
        ]
        .into_iter()
        .filter_map(|(unused, pair)| unused.then_some(pair))
        .collect()
    }

    fn exclusive(a: bool, b: bool, first: &'static str, second: &'static str) -> Result<()> {
        if a && b {
            return Err(Error::ConflictingOptions { first, second });
        }
        Ok(())
    }
}
