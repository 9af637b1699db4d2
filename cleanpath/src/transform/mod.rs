//! Text transforms applied to path strings before cleaning.
//!
//! Each transform is a plain string rewrite. Lookups that need the operating
//! system (a named user's home directory, a live environment variable) are
//! passed in by the caller, so none of these functions can fail: when a
//! lookup comes back empty the input is returned unchanged.

pub mod env;
pub mod tilde;

pub use env::{expand_env, unexpand_env};
pub use tilde::{expand_tilde, unexpand_tilde};
