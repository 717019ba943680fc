//! Structured logging for the demonstration binary.
//!
//! Logs go to stderr so they never interleave with the report on stdout. The
//! harness logs through the `log` facade; installing the subscriber with
//! `try_init` also bridges those records into tracing.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::LogLevel;

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.name())
}

/// Initialise the logging subsystem at `level`.
///
/// If a global subscriber is already set the call is ignored; the first
/// subscriber wins.
pub fn init_logging(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .finish()
        .try_init();
}
