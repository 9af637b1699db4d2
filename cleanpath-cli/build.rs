//! Build script for cleanpath-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn flag(id: &'static str, short: char, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(long)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn option(
    id: &'static str,
    short: char,
    long: &'static str,
    value_name: &'static str,
    help: &'static str,
) -> Arg {
    Arg::new(id)
        .short(short)
        .long(long)
        .value_name(value_name)
        .help(help)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("cleanpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clean and transform path strings")
        .long_about(
            "Lexically clean path strings and optionally expand or unexpand tildes and \
             environment variables, make paths absolute or relative, and apply a regex \
             substitution",
        )
        .arg(flag("stdin", 'i', "stdin", "Read paths from stdin, one per line"))
        .arg(flag("tilde_expand", 't', "tilda", "Expand a leading tilde").visible_alias("tilde"))
        .arg(
            flag(
                "tilde_unexpand",
                'T',
                "untilda",
                "Unexpand a leading home directory to a tilde",
            )
            .visible_alias("untilde"),
        )
        .arg(flag("env_expand", 'e', "env", "Expand environment variables"))
        .arg(flag("env_unexpand", 'E', "unenv", "Unexpand environment variable values"))
        .arg(flag("absolute", 'a', "absolute", "Make paths absolute"))
        .arg(flag(
            "unabsolute",
            'A',
            "unabsolute",
            "Make paths relative to the base directory",
        ))
        .arg(option("old_pattern", 'o', "old", "PATTERN", "Regex pattern to replace"))
        .arg(option(
            "new_pattern",
            'n',
            "new",
            "REPLACEMENT",
            "Replacement for the --old pattern",
        ))
        .arg(option("user", 'u', "user", "USER", "User name for tilde expansion"))
        .arg(
            option(
                "base",
                'b',
                "base",
                "DIR",
                "Base directory for absolute/relative paths",
            )
            .default_value("."),
        )
        .arg(
            option(
                "parent",
                'p',
                "parent",
                "N",
                "Maximum parent traversals for relative paths ('-' for unlimited)",
            )
            .default_value("0"),
        )
        .arg(
            option(
                "env_names",
                'x',
                "eXpand",
                "NAME",
                "Environment variable name to expand (repeatable, '-' means all)",
            )
            .visible_alias("expand")
            .action(ArgAction::Append),
        )
        .arg(flag(
            "verbose",
            'v',
            "verbose",
            "Write a trace of every transform step to stderr",
        ))
        .arg(flag("quiet", 'q', "quiet", "Suppress non-essential output"))
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .help("Paths to transform")
                .num_args(0..),
        )
}

fn main() {
    // Generate the man page at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("cleanpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
