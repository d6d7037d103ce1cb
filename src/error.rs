//! Error types shared across the solver

use crate::core::{Word, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the decision engine and its collaborators
///
/// None of these are transient: each one means an input was bad, so callers
/// report them instead of retrying.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Manually supplied feedback could not be parsed
    #[error("invalid pattern '{input}': {reason}")]
    InvalidPatternFormat { input: String, reason: String },

    /// Filtering left no answer consistent with the recorded feedback
    #[error("no answer is consistent with the feedback [{history}]")]
    NoConsistentCandidates { history: String },

    /// A word list is empty or the answers are not a subset of the guesses
    #[error("unusable word list: {0}")]
    EmptyWordList(String),

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// A word that must be guessable is missing from the guess list
    #[error("'{0}' is not in the guess list")]
    NotInGuessSet(Word),

    /// The game already reached a terminal state
    #[error("the game is already over")]
    GameOver,

    /// A step was requested out of order (e.g. feedback with no pending guess)
    #[error("out of turn: {0}")]
    OutOfTurn(&'static str),

    #[error("failed to read word list {}: {source}", path.display())]
    WordListIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SolverError>;
