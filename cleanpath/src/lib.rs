#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cleanpath
//!
//! A library for cleaning and transforming path strings.
//!
//! Everything here is string manipulation. The filesystem is never touched;
//! the only operating system queries are home directory and user lookups,
//! environment variables and the working directory, all of which go through
//! a [`SystemContext`].
//!
//! ## Core Types
//!
//! - [`path::clean`] and [`path::relativize`]: lexical path algorithms
//! - [`Options`] and [`Config`]: raw options and their resolved form
//! - [`Pipeline`]: applies the enabled transforms in a fixed order
//! - [`Error`] and [`Result`]: configuration errors
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cleanpath::{Config, Options, Pipeline, SnapshotContext, UserInfo};
//!
//! let context = SnapshotContext::new(UserInfo::new("me", "/home/me"), "/tmp/some-dir");
//! let options = Options {
//!     absolute: true,
//!     ..Options::default()
//! };
//! let config = Config::resolve(&options, &context).unwrap();
//!
//! let pipeline = Pipeline::new(&config, &context);
//! assert_eq!(pipeline.apply("./xxx/"), "/tmp/some-dir/xxx");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod pipeline;
pub mod transform;

// Re-export key types at crate root for convenience
pub use config::{Config, Options, OsContext, SnapshotContext, SystemContext, UserInfo};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::ParentLimit;
pub use pipeline::{transform, Pipeline, Stage, Trace, TraceEntry};
