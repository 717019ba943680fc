//! Tri-state verdict produced by a test callback.

use std::fmt;

use crate::error::OutcomeError;

/// Verdict of a single test invocation.
///
/// A test that produces no explicit verdict is treated as skipped, so the
/// default value is [`Outcome::Skip`].
///
/// # Examples
///
/// ```
/// use proctor::Outcome;
///
/// assert_eq!(Outcome::default(), Outcome::Skip);
/// assert_eq!(Outcome::from(true), Outcome::Pass);
/// assert_eq!(Outcome::from(false), Outcome::Fail);
/// assert!(!bool::from(Outcome::Skip));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The test ran and reported failure.
    Fail,
    /// The test ran and reported success.
    Pass,
    /// The test produced no verdict.
    #[default]
    Skip,
}

impl Outcome {
    /// Returns the display name of the outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use proctor::Outcome;
    ///
    /// assert_eq!(Outcome::Pass.name(), "Pass");
    /// assert_eq!(Outcome::Fail.name(), "Fail");
    /// assert_eq!(Outcome::Skip.name(), "Skip");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Pass => "Pass",
            Self::Skip => "Skip",
        }
    }

    /// Returns the single glyph used for terminal display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Fail => "✗",
            Self::Pass => "✔",
            Self::Skip => "■",
        }
    }

    /// Returns the raw integer encoding (`Fail = 0`, `Pass = 1`, `Skip = 2`).
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Fail => 0,
            Self::Pass => 1,
            Self::Skip => 2,
        }
    }

    /// Converts a raw integer, clamping unknown values to [`Outcome::Skip`].
    ///
    /// Callbacks that hand back a raw encoding go through this path. An
    /// out-of-range value is never counted as a pass or a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use proctor::Outcome;
    ///
    /// assert_eq!(Outcome::from_raw(1), Outcome::Pass);
    /// assert_eq!(Outcome::from_raw(42), Outcome::Skip);
    /// ```
    #[must_use]
    pub fn from_raw(value: u32) -> Self {
        Self::try_from(value).unwrap_or_else(|err| {
            log::warn!("{err}; treating the test as skipped");
            Self::Skip
        })
    }

    /// Returns `true` only for [`Outcome::Pass`].
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns `true` only for [`Outcome::Fail`].
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Returns `true` only for [`Outcome::Skip`].
    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }
}

/// Answers "is this exactly a pass", so a skip converts to `false`.
impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_pass()
    }
}

impl TryFrom<u32> for Outcome {
    type Error = OutcomeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fail),
            1 => Ok(Self::Pass),
            2 => Ok(Self::Skip),
            _ => Err(OutcomeError::OutOfRange { value }),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
