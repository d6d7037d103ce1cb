//! Guess history records and the compact `GUESS:PPPPP,...` game-state form

use super::{Pattern, Word};
use crate::error::{Result, SolverError};
use std::fmt;

/// One turn's guess together with the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: Pattern,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Record the feedback `guess` would receive against a known secret
    #[must_use]
    pub fn scored(guess: Word, secret: &Word) -> Self {
        Self::new(guess, Pattern::calculate(&guess, secret))
    }

    /// Parse a single `GUESS:PPPPP` entry
    ///
    /// # Errors
    /// Returns `InvalidPatternFormat` when the separator or pattern is
    /// malformed, and `InvalidWord` when the guess is not a valid word.
    pub fn parse(entry: &str) -> Result<Self> {
        let (guess, code) = entry
            .split_once(':')
            .ok_or_else(|| SolverError::InvalidPatternFormat {
                input: entry.to_string(),
                reason: "expected GUESS:PATTERN".to_string(),
            })?;

        Ok(Self::new(Word::new(guess.trim())?, Pattern::parse(code)?))
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}

/// Parse a comma-separated game state such as `"ROATE:XYGXY,CRANE:GGGXX"`
///
/// Blank entries (e.g. a trailing comma) are ignored.
///
/// # Errors
/// Fails on the first malformed entry; nothing is returned for the valid
/// entries before it.
///
/// # Examples
/// ```
/// use wordle_infobot::core::parse_history;
///
/// let history = parse_history("ROATE:XYGXY, crane:gggxx").unwrap();
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[1].to_string(), "CRANE:GGGXX");
/// ```
pub fn parse_history(state: &str) -> Result<Vec<GuessRecord>> {
    state
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(GuessRecord::parse)
        .collect()
}

/// Render a history back into its compact comma-separated form
#[must_use]
pub fn format_history(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
