//! Error types surfaced by the harness.
//!
//! Test failures are not errors: a failing callback is a normal, recorded
//! outcome. The types here cover the few places where the harness itself can
//! be handed bad input or fail to emit its report.

use std::io;

use thiserror::Error;

/// Raised when a raw integer does not encode a known [`Outcome`](crate::Outcome).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutcomeError {
    /// The value lies outside the `Fail = 0`, `Pass = 1`, `Skip = 2` encoding.
    #[error("raw outcome value {value} is out of range, expected 0 (fail), 1 (pass) or 2 (skip)")]
    OutOfRange {
        /// The rejected raw value.
        value: u32,
    },
}

/// Raised when configuration text cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The verbosity name is not one of `quiet`, `normal` or `verbose`.
    #[error("unknown verbosity '{0}', expected one of: quiet, normal, verbose")]
    UnknownVerbosity(String),
    /// The colour choice is not one of `auto`, `always` or `never`.
    #[error("unknown color choice '{0}', expected one of: auto, always, never")]
    UnknownColorChoice(String),
}

/// Raised when the console report cannot be written to its sink.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The underlying writer rejected report output.
    #[error("failed to write test report: {0}")]
    Write(#[from] io::Error),
}
