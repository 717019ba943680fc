//! Uniform invocation of registered test callbacks.
//!
//! A test is either a free function or a method bound to a receiver the
//! caller keeps alive. Both shapes implement [`Callback`], so the manager
//! stores them behind one trait object and never asks which kind it holds.

use crate::outcome::Outcome;

/// Values a test callback may return.
///
/// A boolean maps to pass or fail and can never produce a skip. Raw integers
/// follow the `Fail = 0`, `Pass = 1`, `Skip = 2` encoding, with unknown values
/// clamped to [`Outcome::Skip`].
///
/// # Examples
///
/// ```
/// use proctor::{IntoOutcome, Outcome};
///
/// assert_eq!(true.into_outcome(), Outcome::Pass);
/// assert_eq!(Outcome::Skip.into_outcome(), Outcome::Skip);
/// assert_eq!(9_u32.into_outcome(), Outcome::Skip);
/// ```
pub trait IntoOutcome {
    /// Converts the callback's return value into an outcome.
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Self {
        self
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Outcome {
        Outcome::from(self)
    }
}

impl IntoOutcome for u32 {
    fn into_outcome(self) -> Outcome {
        Outcome::from_raw(self)
    }
}

impl IntoOutcome for u8 {
    fn into_outcome(self) -> Outcome {
        Outcome::from_raw(u32::from(self))
    }
}

/// Runs one unit of test logic and reports its verdict.
///
/// # Examples
///
/// ```
/// use proctor::{Callback, FunctionCallback, Outcome};
///
/// fn passes() -> bool {
///     true
/// }
///
/// let callback = FunctionCallback::new(passes);
/// assert_eq!(callback.invoke(), Outcome::Pass);
/// ```
pub trait Callback {
    /// Invokes the test once.
    fn invoke(&self) -> Outcome;
}

/// Callback bound to a zero-argument free function.
pub struct FunctionCallback<R> {
    function: fn() -> R,
}

impl<R> FunctionCallback<R> {
    /// Wraps a free function.
    #[must_use]
    pub const fn new(function: fn() -> R) -> Self {
        Self { function }
    }
}

impl<R: IntoOutcome> Callback for FunctionCallback<R> {
    fn invoke(&self) -> Outcome {
        (self.function)().into_outcome()
    }
}

/// Callback bound to a method and a borrowed receiver.
///
/// The receiver is never owned by the callback. The `'r` borrow guarantees it
/// outlives every run of the manager that holds this callback; receivers that
/// need to change state between calls use interior mutability.
///
/// # Examples
///
/// ```
/// use proctor::{Callback, MethodCallback, Outcome};
///
/// struct Fixture {
///     ready: bool,
/// }
///
/// impl Fixture {
///     fn is_ready(&self) -> bool {
///         self.ready
///     }
/// }
///
/// let fixture = Fixture { ready: false };
/// let callback = MethodCallback::new(&fixture, Fixture::is_ready);
/// assert_eq!(callback.invoke(), Outcome::Fail);
/// ```
pub struct MethodCallback<'r, T, R> {
    receiver: &'r T,
    method: fn(&T) -> R,
}

impl<'r, T, R> MethodCallback<'r, T, R> {
    /// Binds `method` to `receiver`.
    #[must_use]
    pub const fn new(receiver: &'r T, method: fn(&T) -> R) -> Self {
        Self { receiver, method }
    }
}

impl<T, R: IntoOutcome> Callback for MethodCallback<'_, T, R> {
    fn invoke(&self) -> Outcome {
        (self.method)(self.receiver).into_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        calls: Cell<u8>,
    }

    impl Counter {
        fn bump(&self) -> Outcome {
            self.calls.set(self.calls.get() + 1);
            Outcome::Skip
        }
    }

    fn raw_pass() -> u8 {
        1
    }

    #[test]
    fn function_callback_coerces_return_values() {
        assert_eq!(FunctionCallback::new(|| false).invoke(), Outcome::Fail);
        assert_eq!(FunctionCallback::new(raw_pass).invoke(), Outcome::Pass);
    }

    #[test]
    fn method_callback_calls_through_the_borrowed_receiver() {
        let counter = Counter {
            calls: Cell::new(0),
        };
        let callback = MethodCallback::new(&counter, Counter::bump);
        assert_eq!(callback.invoke(), Outcome::Skip);
        assert_eq!(callback.invoke(), Outcome::Skip);
        assert_eq!(counter.calls.get(), 2);
    }

    #[test]
    fn both_shapes_share_one_trait_object_type() {
        let counter = Counter {
            calls: Cell::new(0),
        };
        let callbacks: Vec<Box<dyn Callback + '_>> = vec![
            Box::new(FunctionCallback::new(|| true)),
            Box::new(MethodCallback::new(&counter, Counter::bump)),
        ];
        let outcomes: Vec<_> = callbacks.iter().map(|callback| callback.invoke()).collect();
        assert_eq!(outcomes, [Outcome::Pass, Outcome::Skip]);
    }
}
