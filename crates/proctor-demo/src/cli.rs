//! Command line arguments for the demonstration binary.

use std::fmt;
use std::str::FromStr;

use clap::Parser;
use proctor::config::ColorChoice;
use proctor::{ConfigError, Verbosity};

use crate::error::DemoError;

/// Severity threshold for log lines written to stderr.
///
/// Defaults to `Warn` so log lines do not interleave with the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including tracing internals.
    Trace,
    /// Per-test execution details.
    Debug,
    /// Run summaries.
    Info,
    /// Clamped outcomes and report write failures.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    const ALL: [Self; 5] = [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Lowercase name, also used as the `EnvFilter` directive.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = DemoError;

    /// Accepts any case, and `warning` as an alias for `warn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "warning" {
            return Ok(Self::Warn);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.name() == wanted)
            .ok_or_else(|| DemoError::UnknownLogLevel(s.to_owned()))
    }
}

/// Runs the proctor demonstration suite and exits with its failure count.
#[derive(Parser, Debug)]
#[command(name = "proctor-demo", version, about)]
pub struct Args {
    /// Report verbosity (quiet, normal, verbose). Falls back to
    /// `PROCTOR_VERBOSITY`, then `normal`.
    #[arg(long, short)]
    pub verbosity: Option<Verbosity>,

    /// Colour output (auto, always, never). Falls back to `PROCTOR_COLOR` and
    /// `NO_COLOR`.
    #[arg(long)]
    pub color: Option<ColorChoice>,

    /// Log level written to stderr (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Args {
    /// Resolves the verbosity: CLI flag, then environment, then default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownVerbosity`] when `PROCTOR_VERBOSITY`
    /// holds an unrecognised name and no flag overrides it.
    pub fn resolve_verbosity(&self) -> Result<Verbosity, ConfigError> {
        self.verbosity.map_or_else(
            || proctor::config::verbosity_from_env().map(Option::unwrap_or_default),
            Ok,
        )
    }
}
