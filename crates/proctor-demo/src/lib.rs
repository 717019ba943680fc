//! Support library for the `proctor-demo` binary.
//!
//! The binary registers a small suite with the proctor harness, prints the
//! report and exits with the number of failed tests.

pub mod cli;
pub mod error;
pub mod logging;
pub mod suite;
