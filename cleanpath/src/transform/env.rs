//! Environment variable expansion and unexpansion.
//!
//! Expansion recognizes `$NAME` (letters, digits and underscore) and
//! `${NAME}` (anything up to the closing brace). Unexpansion works the other
//! way round, replacing captured values with `$NAME` references.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ENV_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$([A-Za-z0-9_]+)|\$\{([^}]+)\}").expect("env reference pattern is valid")
});

/// Expand `$NAME` and `${NAME}` references to allowed variables.
///
/// A reference is replaced only if its name is in `allowed` and `lookup`
/// returns a value for it. An empty value still counts as set. Every other
/// reference is left as written.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use cleanpath::transform::env::expand_env;
///
/// let allowed: HashSet<String> = ["FOO".to_string()].into_iter().collect();
/// let lookup = |name: &str| (name == "FOO").then(|| "bar".to_string());
///
/// assert_eq!(expand_env("$FOO/baz", &allowed, lookup), "bar/baz");
/// assert_eq!(expand_env("${FOO}x/$BAR", &allowed, lookup), "barx/$BAR");
/// ```
pub fn expand_env<F>(path: &str, allowed: &HashSet<String>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ENV_REFERENCE
        .replace_all(path, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let Some(name) = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()) else {
                return whole.to_string();
            };
            if !allowed.contains(name) {
                return whole.to_string();
            }
            lookup(name).unwrap_or_else(|| whole.to_string())
        })
        .into_owned()
}

/// Replace captured variable values with `$NAME` references.
///
/// Entries are applied in order, each replacing every occurrence of its
/// value in the output of the previous one. Entries with an empty value are
/// skipped.
///
/// # Examples
///
/// ```
/// use cleanpath::transform::env::unexpand_env;
///
/// let entries = vec![
///     ("A".to_string(), "foo".to_string()),
///     ("B".to_string(), "foobar".to_string()),
/// ];
/// assert_eq!(unexpand_env("/path/foobar", &entries), "/path/$Abar");
/// ```
#[must_use]
pub fn unexpand_env(path: &str, entries: &[(String, String)]) -> String {
    entries
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .fold(path.to_string(), |current, (name, value)| {
            current.replace(value.as_str(), &format!("${name}"))
        })
}
