//! Turn-by-turn game driver
//!
//! A [`GameSimulator`] owns the state of one game: its history, the live
//! candidates and the current [`TurnState`]. The engine it borrows is shared
//! and stateless, so independent games can run side by side.

use super::state::{GameConfig, SolveResult, TurnState};
use crate::core::{GuessRecord, Pattern, Word, format_history};
use crate::error::{Result, SolverError};
use crate::solver::filter::{filter, filter_history};
use crate::solver::{EntropyEngine, HardModeRules, ScoredGuess, Strategy, StrategyType};
use log::debug;

/// Supplies the feedback for each guess
///
/// Autoplay encodes against a known secret; interactive play asks a person.
pub trait FeedbackSource {
    /// Feedback for `guess` on the given 1-based turn
    ///
    /// # Errors
    /// Implementations may fail, e.g. when input cannot be read or parsed.
    fn feedback(&mut self, guess: &Word, turn: usize) -> Result<Pattern>;
}

/// Feedback computed against a secret the caller already knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownSecret(pub Word);

impl FeedbackSource for KnownSecret {
    fn feedback(&mut self, guess: &Word, _turn: usize) -> Result<Pattern> {
        Ok(Pattern::calculate(guess, &self.0))
    }
}

/// State machine for a single game
pub struct GameSimulator<'e, 'd, S: Strategy = StrategyType> {
    engine: &'e EntropyEngine<'d, S>,
    config: GameConfig,
    history: Vec<GuessRecord>,
    live: Vec<Word>,
    rules: HardModeRules,
    state: TurnState,
}

impl<'e, 'd, S: Strategy> GameSimulator<'e, 'd, S> {
    /// Start a fresh game with every answer live
    #[must_use]
    pub fn new(engine: &'e EntropyEngine<'d, S>, config: GameConfig) -> Self {
        Self {
            engine,
            config,
            history: Vec::with_capacity(config.max_turns),
            live: engine.dictionary().answers().to_vec(),
            rules: HardModeRules::default(),
            state: TurnState::AwaitingGuess,
        }
    }

    /// Continue a game from an already played history
    ///
    /// # Errors
    /// Returns `NoConsistentCandidates` if the history contradicts every
    /// answer, and `GameOver` if it keeps going after the game ended.
    pub fn resume(
        engine: &'e EntropyEngine<'d, S>,
        config: GameConfig,
        history: &[GuessRecord],
    ) -> Result<Self> {
        let mut game = Self::new(engine, config);
        for record in history {
            game.apply_record(*record)?;
        }
        Ok(game)
    }

    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Answers still consistent with all feedback so far
    #[must_use]
    pub fn live(&self) -> &[Word] {
        &self.live
    }

    /// Number of guesses recorded so far
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Ask the engine for the next guess and wait for its feedback
    ///
    /// # Errors
    /// Returns `GameOver` once the game has ended and `OutOfTurn` while a
    /// guess is still awaiting feedback.
    pub fn propose_guess(&mut self) -> Result<ScoredGuess> {
        match self.state {
            TurnState::AwaitingGuess => {}
            TurnState::AwaitingFeedback(_) => {
                return Err(SolverError::OutOfTurn("a guess is already awaiting feedback"));
            }
            TurnState::Solved { .. } | TurnState::Exhausted { .. } => {
                return Err(SolverError::GameOver);
            }
        }

        let guess = if self.history.is_empty() {
            self.engine.opening_guess()?
        } else if self.config.hard_mode && !self.rules.is_empty() {
            let pool = self.rules.restrict(self.engine.dictionary().guesses());
            self.engine.select_from(&pool, &self.live)?
        } else {
            self.engine.select_guess(&self.live)?
        };

        self.state = TurnState::AwaitingFeedback(guess.word);
        Ok(guess)
    }

    /// Record the feedback for the pending guess
    ///
    /// On error the game is left exactly as it was, so the caller can retry
    /// with corrected feedback.
    ///
    /// # Errors
    /// Returns `NoConsistentCandidates` if no live answer matches the
    /// feedback, and `OutOfTurn` or `GameOver` when no guess is pending.
    pub fn submit_feedback(&mut self, pattern: Pattern) -> Result<TurnState> {
        let guess = match self.state {
            TurnState::AwaitingFeedback(guess) => guess,
            TurnState::AwaitingGuess => {
                return Err(SolverError::OutOfTurn("no guess is awaiting feedback"));
            }
            TurnState::Solved { .. } | TurnState::Exhausted { .. } => {
                return Err(SolverError::GameOver);
            }
        };

        let record = GuessRecord::new(guess, pattern);
        let live = filter(&self.live, &guess, pattern);
        if live.is_empty() {
            let mut attempted = self.history.clone();
            attempted.push(record);
            return Err(SolverError::NoConsistentCandidates {
                history: format_history(&attempted),
            });
        }

        debug!(
            "turn {}: {record} leaves {} of {} candidates",
            self.history.len() + 1,
            live.len(),
            self.live.len()
        );

        self.history.push(record);
        self.rules.add(&record);
        self.live = live;

        let turns = self.history.len();
        self.state = if pattern.is_perfect() {
            TurnState::Solved { word: guess, turns }
        } else if turns >= self.config.max_turns {
            TurnState::Exhausted { turns }
        } else {
            TurnState::AwaitingGuess
        };
        Ok(self.state)
    }

    /// Record a turn the player made themselves
    ///
    /// The guess need not be the engine's suggestion. A pending suggestion is
    /// replaced.
    ///
    /// # Errors
    /// As for [`GameSimulator::submit_feedback`]; the game is unchanged on error.
    pub fn apply_record(&mut self, record: GuessRecord) -> Result<TurnState> {
        let previous = self.state;
        match previous {
            TurnState::AwaitingGuess | TurnState::AwaitingFeedback(_) => {}
            TurnState::Solved { .. } | TurnState::Exhausted { .. } => {
                return Err(SolverError::GameOver);
            }
        }

        self.state = TurnState::AwaitingFeedback(record.guess);
        self.submit_feedback(record.pattern).inspect_err(|_| {
            self.state = previous;
        })
    }

    /// Drop the last recorded turn and recompute the live set
    pub fn undo(&mut self) -> Option<GuessRecord> {
        let record = self.history.pop()?;
        self.live = filter_history(self.engine.dictionary().answers(), &self.history);
        self.rules = HardModeRules::from_history(&self.history);
        self.state = TurnState::AwaitingGuess;
        Some(record)
    }

    /// Play until the game ends, pulling feedback from `source`
    ///
    /// # Errors
    /// Propagates errors from the source and from
    /// [`GameSimulator::submit_feedback`].
    pub fn play<F: FeedbackSource>(&mut self, source: &mut F) -> Result<SolveResult> {
        loop {
            match self.state {
                TurnState::Solved { word, turns } => {
                    return Ok(SolveResult::Solved {
                        word,
                        turns,
                        history: self.history.clone(),
                    });
                }
                TurnState::Exhausted { .. } => {
                    return Ok(SolveResult::Exhausted {
                        history: self.history.clone(),
                    });
                }
                TurnState::AwaitingGuess => {
                    self.propose_guess()?;
                }
                TurnState::AwaitingFeedback(guess) => {
                    let pattern = source.feedback(&guess, self.turn() + 1)?;
                    self.submit_feedback(pattern)?;
                }
            }
        }
    }
}
