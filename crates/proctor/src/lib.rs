//! In-process unit-test harness.
//!
//! Register named callbacks with a [`Manager`], run them with
//! [`Manager::test`], and use the returned failure count as the verdict for
//! the whole suite. Callbacks may be free functions or methods bound to a
//! borrowed receiver; both return anything implementing [`IntoOutcome`].
//!
//! ```
//! use proctor::{Manager, Outcome, Verbosity};
//! use proctor::reporting::Style;
//!
//! struct Parser {
//!     input: &'static str,
//! }
//!
//! impl Parser {
//!     fn accepts_input(&self) -> bool {
//!         !self.input.is_empty()
//!     }
//!
//!     fn handles_unicode(&self) -> Outcome {
//!         Outcome::Skip
//!     }
//! }
//!
//! fn rejects_garbage() -> bool {
//!     false
//! }
//!
//! let parser = Parser { input: "1 + 2" };
//! let mut manager = Manager::with_style(Style::plain());
//! manager.initialize("parser");
//! manager.add_method("accepts_input", &parser, Parser::accepts_input);
//! manager.add_method("handles_unicode", &parser, Parser::handles_unicode);
//! manager.add("rejects_garbage", rejects_garbage);
//!
//! let mut report = Vec::new();
//! let failed = manager.test_with_writer(Verbosity::Normal, &mut report).unwrap();
//! assert_eq!(failed, 1);
//! assert!(String::from_utf8(report).unwrap().contains("Skipped: 1"));
//! ```
//!
//! Tests run one after another on the calling thread in lexicographic name
//! order. A panicking callback is not converted into a failure; the panic
//! propagates out of [`Manager::test`].

pub mod callback;
pub mod config;
pub mod error;
mod manager;
mod outcome;
pub mod reporting;
mod verbosity;

pub use callback::{Callback, FunctionCallback, IntoOutcome, MethodCallback};
pub use error::{ConfigError, OutcomeError, ReportError};
pub use manager::Manager;
pub use outcome::Outcome;
pub use verbosity::Verbosity;
