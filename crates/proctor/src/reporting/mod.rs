//! Test result records and console reporting.
//!
//! The manager stores one [`TestRecord`] per test name and streams each record
//! to a [`ConsoleReporter`] as soon as it is known. The reporter is pure
//! formatting over already-computed results.

mod console;
mod record;
mod style;

pub use console::{ConsoleReporter, format_duration};
pub use record::{Summary, TestRecord};
pub use style::Style;
