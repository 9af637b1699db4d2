//! Lexical path handling.
//!
//! This module works on path strings only. It never consults the filesystem,
//! so symlinks, existence and permissions play no part.
//!
//! # Key Concepts
//!
//! ## Cleaning
//!
//! [`clean`] removes `.` segments, collapses repeated separators and resolves
//! `..` against the segment before it. At the root of an absolute path `..`
//! is dropped; in a relative path an unresolvable `..` is kept.
//!
//! ## Relativization
//!
//! [`relativize`] rewrites an absolute path relative to an absolute base.
//! The number of `..` steps it may emit is bounded by a [`ParentLimit`];
//! when the bound is exceeded the path comes back unchanged.
//!
//! # Examples
//!
//! ```
//! use cleanpath::path::{clean, relativize, ParentLimit};
//!
//! assert_eq!(clean("/tmp/./aa//bb/"), "/tmp/aa/bb");
//!
//! let rel = relativize("/tmp/foo", "/tmp/some-dir", ParentLimit::Unlimited);
//! assert_eq!(rel, "../foo");
//! ```

pub mod clean;
pub mod relative;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items
pub use clean::{clean, is_absolute};
pub use relative::{make_absolute, relativize, ParentLimit};
