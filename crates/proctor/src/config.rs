//! Runtime configuration for proctor.
//!
//! Colour output and the default verbosity can be driven from the
//! environment:
//!
//! - `PROCTOR_COLOR`: `auto`, `always` or `never`.
//! - `NO_COLOR`: any non-empty value disables colour when `PROCTOR_COLOR` is
//!   unset.
//! - `PROCTOR_VERBOSITY`: `quiet`, `normal` or `verbose`.
//!
//! An in-process override takes precedence over the environment so tests can
//! pin the colour choice.

use std::env;
use std::io::IsTerminal;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::ConfigError;
use crate::verbosity::Verbosity;

const OVERRIDE_UNSET: u8 = 0;
const OVERRIDE_AUTO: u8 = 1;
const OVERRIDE_ALWAYS: u8 = 2;
const OVERRIDE_NEVER: u8 = 3;

static COLOR_CHOICE_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_UNSET);

/// Whether the console report uses ANSI colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit colour codes.
    Always,
    /// Never emit colour codes.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the current stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }

    const fn encode(self) -> u8 {
        match self {
            Self::Auto => OVERRIDE_AUTO,
            Self::Always => OVERRIDE_ALWAYS,
            Self::Never => OVERRIDE_NEVER,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ConfigError::UnknownColorChoice(s.to_owned())),
        }
    }
}

fn override_state() -> Option<ColorChoice> {
    match COLOR_CHOICE_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_AUTO => Some(ColorChoice::Auto),
        OVERRIDE_ALWAYS => Some(ColorChoice::Always),
        OVERRIDE_NEVER => Some(ColorChoice::Never),
        _ => None,
    }
}

fn env_color_choice() -> Option<ColorChoice> {
    resolve_env_color_choice(
        env::var("PROCTOR_COLOR").ok().as_deref(),
        env::var("NO_COLOR").ok().as_deref(),
    )
}

fn resolve_env_color_choice(
    proctor_color: Option<&str>,
    no_color: Option<&str>,
) -> Option<ColorChoice> {
    if let Some(value) = proctor_color {
        match value.parse() {
            Ok(choice) => return Some(choice),
            Err(err) => log::warn!("ignoring PROCTOR_COLOR: {err}"),
        }
    }
    no_color
        .filter(|value| !value.is_empty())
        .map(|_| ColorChoice::Never)
}

/// Determine the colour choice for console reports.
///
/// Precedence: in-process override, `PROCTOR_COLOR`, `NO_COLOR`, then
/// [`ColorChoice::Auto`].
#[must_use]
pub fn color_choice() -> ColorChoice {
    override_state()
        .or_else(env_color_choice)
        .unwrap_or_default()
}

/// Override the colour choice for the current process.
pub fn set_color_choice(choice: ColorChoice) {
    COLOR_CHOICE_OVERRIDE.store(choice.encode(), Ordering::Relaxed);
}

/// Remove any in-process colour override.
pub fn clear_color_choice_override() {
    COLOR_CHOICE_OVERRIDE.store(OVERRIDE_UNSET, Ordering::Relaxed);
}

/// Read the verbosity requested through `PROCTOR_VERBOSITY`.
///
/// Returns `Ok(None)` when the variable is unset.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownVerbosity`] when the variable holds an
/// unrecognised name.
pub fn verbosity_from_env() -> Result<Option<Verbosity>, ConfigError> {
    parse_verbosity(env::var("PROCTOR_VERBOSITY").ok().as_deref())
}

fn parse_verbosity(value: Option<&str>) -> Result<Option<Verbosity>, ConfigError> {
    value.map(str::parse).transpose()
}
