//! The demonstration suite: a mix of function and method callbacks.
//!
//! Two tests fail on purpose so the exit status shows how a calling program
//! consumes the failure count.

use proctor::{Manager, Outcome};

/// Receiver whose methods are registered as tests.
#[derive(Debug, Default)]
pub struct Sample;

#[expect(
    clippy::unused_self,
    reason = "tests are registered as methods bound to a receiver"
)]
impl Sample {
    fn reports_pass(&self) -> Outcome {
        Outcome::Pass
    }

    fn reports_skip(&self) -> Outcome {
        Outcome::Skip
    }

    fn reports_false(&self) -> bool {
        false
    }
}

fn success() -> bool {
    true
}

fn failure() -> bool {
    false
}

/// Registers every demonstration test on `manager`.
pub fn register<'r>(manager: &mut Manager<'r>, sample: &'r Sample) {
    manager.add_method("object_test1", sample, Sample::reports_pass);
    manager.add_method("object_test2", sample, Sample::reports_skip);
    manager.add_method("object_test3", sample, Sample::reports_false);
    manager.add("success", success);
    manager.add("failure", failure);
}

/// Maps a failure count onto a process exit code, saturating at 255.
#[must_use]
pub fn exit_code(failed: usize) -> u8 {
    u8::try_from(failed).unwrap_or(u8::MAX)
}
