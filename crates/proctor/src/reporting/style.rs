//! ANSI styling for the console report.

use crate::config;
use crate::outcome::Outcome;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Colour capability used when rendering a report.
///
/// The capability is resolved once, either from the environment with
/// [`Style::detect`] or injected explicitly, and never changes what gets
/// recorded or counted.
///
/// # Examples
///
/// ```
/// use proctor::Outcome;
/// use proctor::reporting::Style;
///
/// assert_eq!(Style::plain().outcome_symbol(Outcome::Pass), "✔");
/// assert_eq!(
///     Style::colored().outcome_symbol(Outcome::Fail),
///     "\x1b[31m✗\x1b[0m"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    enabled: bool,
}

impl Style {
    /// Style that emits no escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Style that always emits escape codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    /// Resolves the style from [`config::color_choice`].
    #[must_use]
    pub fn detect() -> Self {
        Self {
            enabled: config::color_choice().enabled(),
        }
    }

    /// Whether escape codes are emitted.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Renders the outcome's glyph in its status colour.
    #[must_use]
    pub fn outcome_symbol(self, outcome: Outcome) -> String {
        let colour = match outcome {
            Outcome::Pass => GREEN,
            Outcome::Fail => RED,
            Outcome::Skip => YELLOW,
        };
        self.paint(colour, outcome.symbol())
    }

    /// Renders text in bold.
    #[must_use]
    pub fn bold(self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_leaves_text_untouched() {
        let style = Style::plain();
        assert!(!style.is_enabled());
        assert_eq!(style.outcome_symbol(Outcome::Skip), "■");
        assert_eq!(style.bold("header"), "header");
    }

    #[test]
    fn colored_style_wraps_each_outcome() {
        let style = Style::colored();
        assert_eq!(style.outcome_symbol(Outcome::Pass), "\x1b[32m✔\x1b[0m");
        assert_eq!(style.outcome_symbol(Outcome::Skip), "\x1b[33m■\x1b[0m");
        assert_eq!(style.bold("header"), "\x1b[1mheader\x1b[0m");
    }
}
