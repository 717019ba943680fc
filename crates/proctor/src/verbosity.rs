//! Reporting modes for a test run.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Controls how much per-test detail the console report prints.
///
/// The value is chosen once per run and only read by the reporter.
///
/// # Examples
///
/// ```
/// use proctor::Verbosity;
///
/// let verbosity: Verbosity = "VERBOSE".parse().unwrap();
/// assert_eq!(verbosity, Verbosity::Verbose);
/// assert_eq!(verbosity.name(), "Verbose");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Verbosity {
    /// Print nothing.
    Quiet,
    /// Print a header, one line per test and the pass/fail/skip summary.
    #[default]
    Normal,
    /// Like [`Verbosity::Normal`], plus per-test and total timings.
    Verbose,
}

impl Verbosity {
    /// Returns the display name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quiet => "Quiet",
            Self::Normal => "Normal",
            Self::Verbose => "Verbose",
        }
    }

    /// Returns `true` when headers, entries and the summary are printed.
    #[must_use]
    pub const fn shows_entries(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Returns `true` when timings are printed.
    #[must_use]
    pub const fn shows_timing(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(ConfigError::UnknownVerbosity(s.to_owned())),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
