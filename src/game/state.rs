//! Game state and outcome types

use crate::core::{GuessRecord, Word};

/// Standard Wordle turn limit
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost
    pub max_turns: usize,
    /// Every guess must reuse the revealed hints
    pub hard_mode: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            hard_mode: false,
        }
    }
}

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the engine to propose the next guess
    AwaitingGuess,
    /// A guess is out and its feedback has not arrived yet
    AwaitingFeedback(Word),
    /// The last feedback was all correct
    Solved { word: Word, turns: usize },
    /// The turn limit was reached without solving
    Exhausted { turns: usize },
}

impl TurnState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved { .. } | Self::Exhausted { .. })
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Solved {
        word: Word,
        turns: usize,
        history: Vec<GuessRecord>,
    },
    Exhausted {
        history: Vec<GuessRecord>,
    },
}

impl SolveResult {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Number of guesses played
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history().len()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        match self {
            Self::Solved { history, .. } | Self::Exhausted { history } => history,
        }
    }
}
