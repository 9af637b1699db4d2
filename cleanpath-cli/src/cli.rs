//! CLI structure and flag definitions.
//!
//! This module defines the command-line interface using clap's derive
//! macros. Flag combinations are not checked here; that happens when the
//! options are resolved into a [`cleanpath::Config`].

use std::ffi::OsString;

use clap::Parser;
use cleanpath::config::{Options, DEFAULT_BASE, DEFAULT_PARENT};

/// Command-line tool for cleaning and transforming path strings.
#[derive(Parser, Debug)]
#[command(name = "cleanpath")]
#[command(version, about = "Clean and transform path strings", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Read paths from stdin, one per line
    #[arg(short = 'i', long)]
    pub stdin: bool,

    /// Expand a leading tilde
    #[arg(short = 't', long = "tilda", visible_alias = "tilde")]
    pub tilde_expand: bool,

    /// Unexpand a leading home directory to a tilde
    #[arg(short = 'T', long = "untilda", visible_alias = "untilde")]
    pub tilde_unexpand: bool,

    /// Expand environment variables
    #[arg(short = 'e', long = "env")]
    pub env_expand: bool,

    /// Unexpand environment variable values
    #[arg(short = 'E', long = "unenv")]
    pub env_unexpand: bool,

    /// Make paths absolute
    #[arg(short = 'a', long)]
    pub absolute: bool,

    /// Make paths relative to the base directory
    #[arg(short = 'A', long)]
    pub unabsolute: bool,

    /// Regex pattern to replace
    #[arg(short = 'o', long = "old", value_name = "PATTERN", allow_hyphen_values = true)]
    pub old_pattern: Option<String>,

    /// Replacement for the --old pattern
    #[arg(short = 'n', long = "new", value_name = "REPLACEMENT", allow_hyphen_values = true)]
    pub new_pattern: Option<String>,

    /// User name for tilde expansion
    #[arg(short = 'u', long, value_name = "USER", allow_hyphen_values = true)]
    pub user: Option<String>,

    /// Base directory for absolute/relative paths
    #[arg(short = 'b', long, value_name = "DIR", default_value = DEFAULT_BASE)]
    pub base: String,

    /// Maximum parent traversals for relative paths ('-' for unlimited)
    #[arg(
        short = 'p',
        long,
        value_name = "N",
        default_value = DEFAULT_PARENT,
        allow_hyphen_values = true
    )]
    pub parent: String,

    /// Environment variable name to expand (repeatable, '-' means all)
    #[arg(short = 'x', long = "eXpand", visible_alias = "expand", value_name = "NAME")]
    pub env_names: Vec<String>,

    /// Write a trace of every transform step to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Paths to transform
    #[arg(value_name = "PATH")]
    pub paths: Vec<OsString>,
}

impl Cli {
    /// Positional paths as text. Bytes that are not valid UTF-8 become
    /// U+FFFD so every argument still produces one result.
    #[must_use]
    pub fn path_strings(&self) -> Vec<String> {
        self.paths
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect()
    }

    /// Convert parsed flags into library options.
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            tilde_expand: self.tilde_expand,
            tilde_unexpand: self.tilde_unexpand,
            env_expand: self.env_expand,
            env_unexpand: self.env_unexpand,
            absolute: self.absolute,
            unabsolute: self.unabsolute,
            old_pattern: self.old_pattern.clone().unwrap_or_default(),
            new_pattern: self.new_pattern.clone().unwrap_or_default(),
            user: self.user.clone().unwrap_or_default(),
            base: self.base.clone(),
            parent: self.parent.clone(),
            env_names: self.env_names.clone(),
            verbose: self.verbose,
        }
    }
}
