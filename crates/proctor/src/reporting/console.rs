//! Console renderer for test results.
//!
//! A report is a header framed by a fixed-width rule, one tree-styled entry
//! per test in name order, and a summary. Quiet runs write nothing.
//!
//! ```text
//! ════════════════════════════════════════════════
//!   Testing: demo
//! ════════════════════════════════════════════════
//! ├─ ✔ alpha -> Pass
//! │  └─ Time: 3.125μs
//! └─ ■ gamma -> Skip
//!    └─ Time: NONE
//!
//!     Passed: 1/1
//!     Failed: 0/1
//!     Skipped: 1
//!
//!     Total Elapsed Time: 3.125μs
//! ```

use std::io::{self, Write};

use super::record::{Summary, TestRecord};
use super::style::Style;
use crate::verbosity::Verbosity;

const RULE: &str = "═";
const RULE_WIDTH: usize = 48;
const NO_TIME: &str = "NONE";
const MICROS_PER_MILLI: f64 = 1000.0;

/// Render a duration given in microseconds.
///
/// Values below one millisecond are shown in microseconds, larger values in
/// milliseconds, both with three decimals.
///
/// # Examples
///
/// ```
/// use proctor::reporting::format_duration;
///
/// assert_eq!(format_duration(12.5), "12.500μs");
/// assert_eq!(format_duration(2500.0), "2.500ms");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "millisecond rendering divides fractional microseconds"
)]
pub fn format_duration(micros: f64) -> String {
    if micros < MICROS_PER_MILLI {
        format!("{micros:.3}μs")
    } else {
        format!("{:.3}ms", micros / MICROS_PER_MILLI)
    }
}

/// Streams a report into any [`Write`] sink.
///
/// The reporter only reads the records it is handed.
pub struct ConsoleReporter<'w, W: Write + ?Sized> {
    writer: &'w mut W,
    verbosity: Verbosity,
    style: Style,
}

impl<'w, W: Write + ?Sized> ConsoleReporter<'w, W> {
    /// Creates a reporter writing into `writer`.
    #[must_use]
    pub fn new(writer: &'w mut W, verbosity: Verbosity, style: Style) -> Self {
        Self {
            writer,
            verbosity,
            style,
        }
    }

    /// Writes the framed program name.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn header(&mut self, program_name: &str) -> io::Result<()> {
        if !self.verbosity.shows_entries() {
            return Ok(());
        }
        let rule = RULE.repeat(RULE_WIDTH);
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "  Testing: {}", self.style.bold(program_name))?;
        writeln!(self.writer, "{rule}")
    }

    /// Writes one test entry. `is_last` selects the closing tree connector.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn entry(&mut self, record: &TestRecord, is_last: bool) -> io::Result<()> {
        if !self.verbosity.shows_entries() {
            return Ok(());
        }
        let (branch, trunk) = if is_last {
            ("└─", "   ")
        } else {
            ("├─", "│  ")
        };
        let outcome = record.outcome();
        writeln!(
            self.writer,
            "{branch} {} {} -> {}",
            self.style.outcome_symbol(outcome),
            record.name(),
            outcome.name(),
        )?;
        if self.verbosity.shows_timing() {
            let time = if outcome.is_skip() {
                NO_TIME.to_owned()
            } else {
                format_duration(record.elapsed_micros())
            };
            writeln!(self.writer, "{trunk}└─ Time: {time}")?;
        }
        Ok(())
    }

    /// Writes the pass/fail/skip tallies and, when verbose, the total time.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        if !self.verbosity.shows_entries() {
            return Ok(());
        }
        let total = summary.total();
        writeln!(self.writer)?;
        writeln!(self.writer, "    Passed: {}/{total}", summary.passed())?;
        writeln!(self.writer, "    Failed: {}/{total}", summary.failed())?;
        writeln!(self.writer, "    Skipped: {}", summary.skipped())?;
        if self.verbosity.shows_timing() {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "    Total Elapsed Time: {}",
                format_duration(summary.elapsed_micros())
            )?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use rstest::rstest;
    use std::time::Duration;

    fn render(verbosity: Verbosity, records: &[TestRecord]) -> String {
        let mut buffer = Vec::new();
        let mut reporter = ConsoleReporter::new(&mut buffer, verbosity, Style::plain());
        let rendered = reporter.header("unit").and_then(|()| {
            let mut entries = records.iter().peekable();
            while let Some(record) = entries.next() {
                reporter.entry(record, entries.peek().is_none())?;
            }
            reporter.summary(&Summary::from_records(records))
        });
        assert!(rendered.is_ok(), "writing into a Vec cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[rstest]
    #[case(0.0, "0.000μs")]
    #[case(999.9994, "999.999μs")]
    #[case(1000.0, "1.000ms")]
    #[case(123_456.0, "123.456ms")]
    fn durations_switch_units_at_one_millisecond(#[case] micros: f64, #[case] expected: &str) {
        assert_eq!(format_duration(micros), expected);
    }

    #[test]
    fn quiet_writes_nothing() {
        let records = [TestRecord::new("a", Outcome::Fail, Duration::ZERO)];
        assert!(render(Verbosity::Quiet, &records).is_empty());
    }

    #[test]
    fn last_entry_closes_the_tree() {
        let records = [
            TestRecord::new("first", Outcome::Pass, Duration::ZERO),
            TestRecord::new("second", Outcome::Fail, Duration::ZERO),
        ];
        let output = render(Verbosity::Normal, &records);
        assert!(output.contains("├─ ✔ first -> Pass\n"));
        assert!(output.contains("└─ ✗ second -> Fail\n"));
        assert!(!output.contains("Time:"));
    }

    #[test]
    fn verbose_entries_show_time_or_placeholder() {
        let records = [
            TestRecord::new("timed", Outcome::Pass, Duration::from_micros(2500)),
            TestRecord::new("untimed", Outcome::Skip, Duration::from_micros(2500)),
        ];
        let output = render(Verbosity::Verbose, &records);
        assert!(output.contains("│  └─ Time: 2.500ms\n"));
        assert!(output.contains("   └─ Time: NONE\n"));
        assert!(output.contains("Total Elapsed Time: 2.500ms"));
    }

    #[test]
    fn header_frames_program_name() {
        let output = render(Verbosity::Normal, &[]);
        let rule = RULE.repeat(RULE_WIDTH);
        assert!(output.starts_with(&format!("{rule}\n  Testing: unit\n{rule}\n")));
    }
}
