//! Lexical path cleaning.
//!
//! This module normalizes path strings without touching the filesystem:
//! - Collapsing repeated and trailing separators
//! - Removing `.` segments
//! - Resolving `..` against the preceding segment where possible
//!
//! Only `/` is treated as a separator.

/// The path separator.
pub const SEPARATOR: char = '/';

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Returns true if the path starts with a separator.
///
/// # Examples
///
/// ```
/// use cleanpath::path::clean::is_absolute;
///
/// assert!(is_absolute("/tmp"));
/// assert!(!is_absolute("tmp"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Iterates over the non-empty segments of a path.
///
/// # Examples
///
/// ```
/// use cleanpath::path::clean::segments;
///
/// let parts: Vec<&str> = segments("/a//b/").collect();
/// assert_eq!(parts, vec!["a", "b"]);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Clean a path string lexically.
///
/// The result never contains empty or `.` segments. For absolute paths it
/// never contains `..` either, since `..` at the root is dropped. For
/// relative paths, a `..` with nothing left to cancel is kept.
///
/// An empty input becomes `.`, and a path that cleans down to nothing
/// becomes `/` or `.` depending on whether it was absolute.
///
/// # Examples
///
/// ```
/// use cleanpath::path::clean::clean;
///
/// assert_eq!(clean("/tmp/./aa//bb/"), "/tmp/aa/bb");
/// assert_eq!(clean("./aa/bb"), "aa/bb");
/// assert_eq!(clean("/../a"), "/a");
/// assert_eq!(clean("../.."), "../..");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }

    let absolute = is_absolute(path);
    let capacity = path.matches(SEPARATOR).count() + 1;
    let mut stack: Vec<&str> = Vec::with_capacity(capacity);

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match stack.last() {
                Some(&top) if top != PARENT_DIR => {
                    stack.pop();
                }
                // Nothing above the root.
                _ if absolute => {}
                _ => stack.push(PARENT_DIR),
            },
            other => stack.push(other),
        }
    }

    let joined = stack.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => CURRENT_DIR.to_string(),
        (false, false) => joined,
    }
}
