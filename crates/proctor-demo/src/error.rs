//! Errors raised while interpreting the demo's command line.

use thiserror::Error;

/// Invalid input to the demonstration binary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DemoError {
    /// The `--log-level` value names no known level.
    #[error("unknown log level '{0}', expected one of: trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}
