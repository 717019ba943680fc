//! Data structures representing test results captured by the manager.

use std::time::Duration;

use crate::outcome::Outcome;

/// Outcome and timing recorded for a single test invocation.
///
/// Skipped tests are never timed: their elapsed time is always zero.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use proctor::Outcome;
/// use proctor::reporting::TestRecord;
///
/// let record = TestRecord::new("parses_header", Outcome::Skip, Duration::from_millis(5));
/// assert_eq!(record.elapsed(), Duration::ZERO);
/// assert_eq!(record.elapsed_micros(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRecord {
    name: String,
    outcome: Outcome,
    elapsed: Duration,
}

impl TestRecord {
    /// Creates a record, discarding the measured time when the test skipped.
    #[must_use]
    pub fn new(name: impl Into<String>, outcome: Outcome, measured: Duration) -> Self {
        let elapsed = if outcome.is_skip() {
            Duration::ZERO
        } else {
            measured
        };
        Self {
            name: name.into(),
            outcome,
            elapsed,
        }
    }

    /// Access the test name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the recorded outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Access the recorded wall-clock time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Recorded wall-clock time in fractional microseconds.
    #[must_use]
    pub fn elapsed_micros(&self) -> f64 {
        micros(self.elapsed)
    }
}

/// Aggregate counts for one report.
///
/// Skipped tests are excluded from [`Summary::total`], the denominator shown
/// next to the pass and fail counts.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use proctor::Outcome;
/// use proctor::reporting::{Summary, TestRecord};
///
/// let records = [
///     TestRecord::new("alpha", Outcome::Pass, Duration::from_micros(4)),
///     TestRecord::new("beta", Outcome::Fail, Duration::from_micros(6)),
///     TestRecord::new("gamma", Outcome::Skip, Duration::from_micros(9)),
/// ];
/// let summary = Summary::from_records(&records);
/// assert_eq!(summary.total(), 2);
/// assert_eq!(summary.skipped(), 1);
/// assert_eq!(summary.elapsed(), Duration::from_micros(10));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    passed: usize,
    failed: usize,
    skipped: usize,
    elapsed: Duration,
}

impl Summary {
    /// Tallies a sequence of records.
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TestRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut summary, record| {
                match record.outcome() {
                    Outcome::Pass => summary.passed += 1,
                    Outcome::Fail => summary.failed += 1,
                    Outcome::Skip => summary.skipped += 1,
                }
                summary.elapsed += record.elapsed();
                summary
            })
    }

    /// Number of passing tests.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failing tests.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Number of skipped tests.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Tests that produced a verdict: passed plus failed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Sum of every recorded duration; skips contribute zero.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total elapsed time in fractional microseconds.
    #[must_use]
    pub fn elapsed_micros(&self) -> f64 {
        micros(self.elapsed)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "timings are reported as fractional microseconds"
)]
fn micros(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_discards_measured_time() {
        let record = TestRecord::new("slow_skip", Outcome::Skip, Duration::from_secs(1));
        assert_eq!(record.elapsed(), Duration::ZERO);
    }

    #[test]
    fn verdicts_keep_measured_time() {
        let record = TestRecord::new("timed", Outcome::Fail, Duration::from_micros(1500));
        assert_eq!(record.elapsed(), Duration::from_micros(1500));
        assert_eq!(record.outcome(), Outcome::Fail);
        assert_eq!(record.name(), "timed");
    }

    #[test]
    fn empty_summary_has_zero_denominator() {
        let summary = Summary::from_records(&Vec::<TestRecord>::new());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.elapsed(), Duration::ZERO);
    }
}
