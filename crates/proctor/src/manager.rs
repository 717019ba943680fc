//! Test registry and runner.
//!
//! Callbacks are keyed by name in an ordered map, so both execution and the
//! report follow lexicographic name order rather than registration order.
//! Execution is serial on the caller's thread. There is no timeout or
//! cancellation: a callback that never returns blocks the run.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Instant;

use crate::callback::{Callback, FunctionCallback, IntoOutcome, MethodCallback};
use crate::error::ReportError;
use crate::reporting::{ConsoleReporter, Style, Summary, TestRecord};
use crate::verbosity::Verbosity;

const DEFAULT_PROGRAM_NAME: &str = "tests";

/// Owns registered test callbacks and the results of running them.
///
/// `'r` is the lifetime of receivers borrowed by method callbacks; the borrow
/// checker keeps every receiver alive for as long as the manager exists.
///
/// # Examples
///
/// ```
/// use proctor::{Manager, Outcome, Verbosity};
///
/// fn succeeds() -> bool {
///     true
/// }
///
/// fn pending() -> Outcome {
///     Outcome::Skip
/// }
///
/// let mut manager = Manager::new();
/// manager.initialize("demo");
/// manager.add("succeeds", succeeds);
/// manager.add("pending", pending);
/// assert_eq!(manager.size(), 2);
/// assert_eq!(manager.test(Verbosity::Quiet), 0);
/// ```
pub struct Manager<'r> {
    program_name: String,
    style: Style,
    callbacks: BTreeMap<String, Box<dyn Callback + 'r>>,
    results: BTreeMap<String, TestRecord>,
}

impl<'r> Manager<'r> {
    /// Creates an empty manager whose colour output follows the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(Style::detect())
    }

    /// Creates an empty manager rendering with an explicit style.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self {
            program_name: DEFAULT_PROGRAM_NAME.to_owned(),
            style,
            callbacks: BTreeMap::new(),
            results: BTreeMap::new(),
        }
    }

    /// Sets the label shown in the report header.
    pub fn initialize(&mut self, program_name: impl Into<String>) {
        self.program_name = program_name.into();
    }

    /// Label shown in the report header.
    #[must_use]
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Registers a free function under `name`.
    ///
    /// A later registration under the same name replaces this callback. The
    /// `'r` bound on `R` only lets the boxed callback live as long as the
    /// manager; it does not restrict which return types are accepted.
    pub fn add<R: IntoOutcome + 'r>(&mut self, name: impl Into<String>, function: fn() -> R) {
        self.register(name.into(), Box::new(FunctionCallback::new(function)));
    }

    /// Registers `method` bound to `receiver` under `name`.
    ///
    /// The receiver is borrowed, never owned. A later registration under the
    /// same name replaces this callback.
    pub fn add_method<T, R: IntoOutcome + 'r>(
        &mut self,
        name: impl Into<String>,
        receiver: &'r T,
        method: fn(&T) -> R,
    ) {
        self.register(name.into(), Box::new(MethodCallback::new(receiver, method)));
    }

    fn register(&mut self, name: String, callback: Box<dyn Callback + 'r>) {
        if self.callbacks.insert(name.clone(), callback).is_some() {
            log::debug!("test '{name}' re-registered; the latest callback wins");
        }
    }

    /// Number of registered test names.
    #[must_use]
    pub fn size(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Runs every registered test, reports to stdout and returns the number
    /// of failures.
    ///
    /// Stdout is locked once per write and never held while a callback runs,
    /// so callbacks may wait on threads that print. A report that cannot be
    /// written is logged and does not change the returned count. Panics
    /// raised by a callback propagate to the caller and abort the rest of the
    /// run.
    pub fn test(&mut self, verbosity: Verbosity) -> usize {
        let (failed, report) = self.run(verbosity, &mut io::stdout());
        if let Err(err) = report {
            log::warn!("failed to write test report: {err}");
        }
        failed
    }

    /// Runs every registered test, reporting into `writer`.
    ///
    /// Every test runs even if the writer fails part-way through.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Write`] when the report could not be written.
    pub fn test_with_writer<W: Write + ?Sized>(
        &mut self,
        verbosity: Verbosity,
        writer: &mut W,
    ) -> Result<usize, ReportError> {
        let (failed, report) = self.run(verbosity, writer);
        report?;
        Ok(failed)
    }

    fn run<W: Write + ?Sized>(
        &mut self,
        verbosity: Verbosity,
        writer: &mut W,
    ) -> (usize, io::Result<()>) {
        log::debug!(
            "running {} test(s) for '{}' with {verbosity} output",
            self.callbacks.len(),
            self.program_name
        );
        let mut reporter = ConsoleReporter::new(writer, verbosity, self.style);
        let mut report = reporter.header(&self.program_name);

        let mut callbacks = self.callbacks.iter().peekable();
        while let Some((name, callback)) = callbacks.next() {
            let record = invoke_timed(name, callback.as_ref());
            let is_last = callbacks.peek().is_none();
            report = report.and_then(|()| reporter.entry(&record, is_last));
            self.results.insert(name.clone(), record);
        }

        let summary = self.summary();
        report = report.and_then(|()| reporter.summary(&summary));
        log::info!(
            "'{}': {} passed, {} failed, {} skipped",
            self.program_name,
            summary.passed(),
            summary.failed(),
            summary.skipped()
        );
        (summary.failed(), report)
    }

    /// Iterates stored records in name order.
    pub fn records(&self) -> impl Iterator<Item = &TestRecord> {
        self.results.values()
    }

    /// Looks up the stored record for `name`.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&TestRecord> {
        self.results.get(name)
    }

    /// Tallies the stored records.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_records(self.results.values())
    }
}

impl Default for Manager<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn invoke_timed(name: &str, callback: &dyn Callback) -> TestRecord {
    let started = Instant::now();
    let outcome = callback.invoke();
    let measured = started.elapsed();
    log::debug!("test '{name}' finished: {outcome} in {measured:?}");
    TestRecord::new(name, outcome, measured)
}
