//! The fixed-order transform pipeline.
//!
//! Every path goes through the same stages, in this order, each only when
//! enabled in the [`Config`]:
//!
//! 1. tilde expand
//! 2. tilde unexpand
//! 3. env expand
//! 4. env unexpand
//! 5. clean (always)
//! 6. absolute
//! 7. unabsolute
//! 8. regex substitution
//!
//! Each stage's output feeds the next. No stage can fail.

use std::fmt;

use crate::config::{Config, OsContext, SystemContext};
use crate::path::clean::{clean, is_absolute};
use crate::path::relative::{make_absolute, relativize};
use crate::transform::{expand_env, expand_tilde, unexpand_env, unexpand_tilde};

/// Width of the step name column in rendered trace lines.
const STEP_WIDTH: usize = 10;

/// Prefix of every rendered trace line.
const TRACE_PREFIX: &str = "cleanpath";

/// A pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Tilde expansion.
    Tilde,
    /// Tilde unexpansion.
    Untilde,
    /// Environment variable expansion.
    Env,
    /// Environment variable unexpansion.
    Unenv,
    /// Lexical cleaning.
    Clean,
    /// Conversion to an absolute path.
    Absolute,
    /// Conversion to a relative path.
    Unabsolute,
    /// Regular expression substitution.
    Regex,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Self; 8] = [
        Self::Tilde,
        Self::Untilde,
        Self::Env,
        Self::Unenv,
        Self::Clean,
        Self::Absolute,
        Self::Unabsolute,
        Self::Regex,
    ];

    /// Short name used in trace output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tilde => "tilde",
            Self::Untilde => "untilde",
            Self::Env => "env",
            Self::Unenv => "unenv",
            Self::Clean => "clean",
            Self::Absolute => "absolute",
            Self::Unabsolute => "unabsolute",
            Self::Regex => "regex",
        }
    }

    /// Whether this stage runs under `config`.
    #[must_use]
    pub fn is_enabled(self, config: &Config) -> bool {
        match self {
            Self::Tilde => config.tilde_expand(),
            Self::Untilde => config.tilde_unexpand(),
            Self::Env => config.env_expand(),
            Self::Unenv => config.env_unexpand(),
            Self::Clean => true,
            Self::Absolute => config.absolute(),
            Self::Unabsolute => config.unabsolute(),
            Self::Regex => config.pattern().is_some(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of a transform trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEntry {
    /// The path as it entered the pipeline.
    Input(String),
    /// A stage that changed the path.
    Step {
        /// The stage.
        stage: Stage,
        /// The path before the stage.
        before: String,
        /// The path after the stage.
        after: String,
    },
    /// The path as it left the pipeline.
    Output(String),
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(path) => write!(f, "{TRACE_PREFIX} {:<STEP_WIDTH$} {path}", "input"),
            Self::Step {
                stage,
                before,
                after,
            } => write!(
                f,
                "{TRACE_PREFIX} {:<STEP_WIDTH$} {before} -> {after}",
                stage.name()
            ),
            Self::Output(path) => write!(f, "{TRACE_PREFIX} {:<STEP_WIDTH$} {path}", "output"),
        }
    }
}

/// An ordered record of what the pipeline did to one path.
///
/// Always starts with [`TraceEntry::Input`] and ends with
/// [`TraceEntry::Output`]; in between is one [`TraceEntry::Step`] per stage
/// that changed the path.
pub type Trace = Vec<TraceEntry>;

/// Applies the configured transforms to path strings.
///
/// # Examples
///
/// ```
/// use cleanpath::config::{Config, Options, SnapshotContext, UserInfo};
/// use cleanpath::pipeline::Pipeline;
///
/// let context = SnapshotContext::new(UserInfo::new("me", "/home/me"), "/work");
/// let options = Options {
///     tilde_expand: true,
///     ..Options::default()
/// };
/// let config = Config::resolve(&options, &context).unwrap();
///
/// let pipeline = Pipeline::new(&config, &context);
/// assert_eq!(pipeline.apply("~/./docs//"), "/home/me/docs");
/// ```
pub struct Pipeline<'a> {
    config: &'a Config,
    context: &'a dyn SystemContext,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline over a resolved configuration.
    ///
    /// `context` serves the lookups made while transforming: `~user` home
    /// directories and live environment values for env expansion.
    #[must_use]
    pub fn new(config: &'a Config, context: &'a dyn SystemContext) -> Self {
        Self { config, context }
    }

    /// Transform one path.
    #[must_use]
    pub fn apply(&self, path: &str) -> String {
        Stage::ALL
            .into_iter()
            .filter(|stage| stage.is_enabled(self.config))
            .fold(path.to_string(), |current, stage| self.run(stage, &current))
    }

    /// Transform one path and record every change.
    #[must_use]
    pub fn apply_traced(&self, path: &str) -> (String, Trace) {
        let mut trace = vec![TraceEntry::Input(path.to_string())];
        let mut current = path.to_string();

        for stage in Stage::ALL {
            if !stage.is_enabled(self.config) {
                continue;
            }
            let next = self.run(stage, &current);
            if next != current {
                trace.push(TraceEntry::Step {
                    stage,
                    before: current,
                    after: next.clone(),
                });
            }
            current = next;
        }

        trace.push(TraceEntry::Output(current.clone()));
        (current, trace)
    }

    fn run(&self, stage: Stage, path: &str) -> String {
        let config = self.config;
        match stage {
            Stage::Tilde => expand_tilde(path, config.home(), |user| {
                self.context.lookup_user(user).map(|found| found.home)
            }),
            Stage::Untilde => unexpand_tilde(path, config.home(), config.tilde_prefix_user()),
            Stage::Env => expand_env(path, config.env_allowed(), |name| self.context.var(name)),
            Stage::Unenv => unexpand_env(path, config.env_entries()),
            Stage::Clean => clean(path),
            Stage::Absolute => match config.base() {
                Some(base) => make_absolute(path, base),
                None => path.to_string(),
            },
            Stage::Unabsolute => match config.base() {
                Some(base) if is_absolute(path) => {
                    relativize(path, base, config.parent_limit())
                }
                _ => path.to_string(),
            },
            Stage::Regex => match config.pattern() {
                Some(pattern) => pattern
                    .replace_all(path, config.replacement())
                    .into_owned(),
                None => path.to_string(),
            },
        }
    }
}

/// Transform one path against the running process.
///
/// # Examples
///
/// ```
/// use cleanpath::config::{Config, Options, OsContext};
/// use cleanpath::pipeline::transform;
///
/// let config = Config::resolve(&Options::default(), &OsContext).unwrap();
/// assert_eq!(transform("/tmp/./aa//bb/", &config), "/tmp/aa/bb");
/// ```
#[must_use]
pub fn transform(path: &str, config: &Config) -> String {
    Pipeline::new(config, &OsContext).apply(path)
}
