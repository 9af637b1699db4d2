//! Absolute/relative conversion against a base directory.
//!
//! Conversion to relative form is bounded by a [`ParentLimit`]: when reaching
//! the target would need more `..` steps than the limit allows, the target is
//! returned unchanged so callers can tell it was not relativizable.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::path::clean::{clean, is_absolute, segments};

const UNLIMITED_MARKER: &str = "-";

/// Maximum number of `..` steps allowed when relativizing a path.
///
/// # Examples
///
/// ```
/// use cleanpath::path::ParentLimit;
///
/// assert_eq!("2".parse::<ParentLimit>().unwrap(), ParentLimit::Limited(2));
/// assert_eq!("-".parse::<ParentLimit>().unwrap(), ParentLimit::Unlimited);
/// assert!("-1".parse::<ParentLimit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentLimit {
    /// At most this many upward traversals.
    Limited(usize),
    /// Any number of upward traversals.
    Unlimited,
}

impl ParentLimit {
    /// Returns true if `parents` upward traversals fit within this limit.
    #[must_use]
    pub const fn allows(self, parents: usize) -> bool {
        match self {
            Self::Limited(limit) => parents <= limit,
            Self::Unlimited => true,
        }
    }
}

impl Default for ParentLimit {
    fn default() -> Self {
        Self::Limited(0)
    }
}

impl fmt::Display for ParentLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(limit) => write!(f, "{limit}"),
            Self::Unlimited => write!(f, "{UNLIMITED_MARKER}"),
        }
    }
}

impl FromStr for ParentLimit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNLIMITED_MARKER {
            return Ok(Self::Unlimited);
        }

        // usize parsing accepts a leading '+', which is fine; negatives fail.
        s.parse::<usize>()
            .map(Self::Limited)
            .map_err(|_| Error::InvalidParentLimit {
                value: s.to_string(),
            })
    }
}

/// Resolve a base directory to an absolute, cleaned path.
///
/// An empty base means the current directory. Relative bases are joined onto
/// `cwd`.
///
/// # Examples
///
/// ```
/// use cleanpath::path::relative::resolve_base;
///
/// assert_eq!(resolve_base("/tmp/./x/", "/home"), "/tmp/x");
/// assert_eq!(resolve_base("sub", "/home/me"), "/home/me/sub");
/// assert_eq!(resolve_base("", "/home/me"), "/home/me");
/// ```
#[must_use]
pub fn resolve_base(base: &str, cwd: &str) -> String {
    let base = if base.is_empty() { "." } else { base };
    if is_absolute(base) {
        clean(base)
    } else {
        clean(&format!("{cwd}/{base}"))
    }
}

/// Make a path absolute by joining it onto `base`.
///
/// Absolute paths, and any path when no base is known, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use cleanpath::path::relative::make_absolute;
///
/// assert_eq!(make_absolute("xxx", "/tmp/some-dir"), "/tmp/some-dir/xxx");
/// assert_eq!(make_absolute("/tmp/foo", "/tmp/some-dir"), "/tmp/foo");
/// assert_eq!(make_absolute("../x", "/tmp/some-dir"), "/tmp/x");
/// ```
#[must_use]
pub fn make_absolute(path: &str, base: &str) -> String {
    if path.is_empty() {
        return clean(path);
    }
    if is_absolute(path) || base.is_empty() {
        return path.to_string();
    }
    clean(&format!("{base}/{path}"))
}

/// Express an absolute `target` relative to an absolute `base`.
///
/// Both paths are expected to be cleaned already. If the target is empty or
/// relative, or the base is empty, the target is returned unchanged. The
/// target is also returned unchanged when more `..` steps would be needed
/// than `limit` allows.
///
/// Segments are compared by exact, case-sensitive string equality.
///
/// # Examples
///
/// ```
/// use cleanpath::path::{relativize, ParentLimit};
///
/// let base = "/tmp/some-dir";
/// assert_eq!(relativize("/tmp/some-dir/a/b", base, ParentLimit::Limited(0)), "a/b");
/// assert_eq!(relativize("/tmp/foo", base, ParentLimit::Limited(0)), "/tmp/foo");
/// assert_eq!(relativize("/tmp/foo", base, ParentLimit::Limited(1)), "../foo");
/// assert_eq!(relativize(base, base, ParentLimit::Limited(0)), ".");
/// ```
#[must_use]
pub fn relativize(target: &str, base: &str, limit: ParentLimit) -> String {
    if target.is_empty() || !is_absolute(target) || base.is_empty() {
        return target.to_string();
    }
    if target == base {
        return ".".to_string();
    }

    let target_segments: Vec<&str> = segments(target).collect();
    let base_segments: Vec<&str> = segments(base).collect();
    let shared = common_prefix_len(&target_segments, &base_segments);
    let parents = base_segments.len() - shared;

    if !limit.allows(parents) {
        log::debug!("{target} needs {parents} parent step(s), limit is {limit}");
        return target.to_string();
    }

    let remainder = &target_segments[shared..];
    if parents == 0 && remainder.is_empty() {
        return ".".to_string();
    }

    let mut relative: Vec<&str> = Vec::with_capacity(parents + remainder.len());
    relative.extend(std::iter::repeat("..").take(parents));
    relative.extend_from_slice(remainder);
    relative.join("/")
}

/// Count the shared leading segments of two segment lists.
fn common_prefix_len(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
