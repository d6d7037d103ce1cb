//! Word solving command
//!
//! Autoplays a known secret and keeps the per-turn details for display.

use crate::core::{Pattern, Word};
use crate::game::{GameConfig, GameSimulator, TurnState};
use crate::solver::{EntropyEngine, ScoredGuess, Strategy};
use anyhow::{Result, bail};
use rand::seq::IndexedRandom;

/// Result of solving a word
pub struct SolveReport {
    pub secret: Word,
    pub steps: Vec<SolveStep>,
    pub solved: bool,
}

/// A single guess step in the solution
pub struct SolveStep {
    pub guess: ScoredGuess,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Pick a secret uniformly from the answers
#[must_use]
pub fn random_secret(answers: &[Word]) -> Option<Word> {
    answers.choose(&mut rand::rng()).copied()
}

/// Solve `secret` with the given engine, recording every turn
///
/// # Errors
///
/// Returns an error if the secret is not one of the engine's answers or the
/// engine fails to produce a guess.
pub fn solve_word<S: Strategy>(
    engine: &EntropyEngine<'_, S>,
    secret: Word,
    config: GameConfig,
) -> Result<SolveReport> {
    if !engine.dictionary().is_answer(&secret) {
        bail!("'{secret}' is not in the answer list");
    }

    let mut game = GameSimulator::new(engine, config);
    let mut steps = Vec::with_capacity(config.max_turns);

    let solved = loop {
        match game.state() {
            TurnState::Solved { .. } => break true,
            TurnState::Exhausted { .. } => break false,
            TurnState::AwaitingGuess | TurnState::AwaitingFeedback(_) => {}
        }

        let candidates_before = game.live().len();
        let guess = game.propose_guess()?;
        let pattern = Pattern::calculate(&guess.word, &secret);
        game.submit_feedback(pattern)?;

        steps.push(SolveStep {
            guess,
            pattern,
            candidates_before,
            candidates_after: game.live().len(),
        });
    };

    Ok(SolveReport {
        secret,
        steps,
        solved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::EntropyStrategy;

    fn setup_dictionary() -> Dictionary {
        let answers = words_from_slice(&[
            "crane", "crate", "trace", "slate", "grate", "irate", "react", "stare",
        ]);
        Dictionary::with_extra_guesses(answers, &words_from_slice(&["roate", "salet"])).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);
        let secret = Word::new("crane").unwrap();

        let report = solve_word(&engine, secret, GameConfig::default()).unwrap();

        assert!(report.solved);
        assert_eq!(report.steps.last().unwrap().guess.word, secret);
        assert!(report.steps.last().unwrap().pattern.is_perfect());
    }

    #[test]
    fn solve_records_history() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);

        let report = solve_word(&engine, Word::new("stare").unwrap(), GameConfig::default())
            .unwrap();

        assert!(!report.steps.is_empty());
        assert_eq!(report.steps[0].candidates_before, dict.answers().len());
        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        for pair in report.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_unknown_secret_returns_error() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);

        // Guessable but never an answer
        let result = solve_word(&engine, Word::new("roate").unwrap(), GameConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn solve_with_turn_limit() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);
        let config = GameConfig {
            max_turns: 1,
            hard_mode: false,
        };

        for secret in dict.answers() {
            let report = solve_word(&engine, *secret, config).unwrap();
            assert_eq!(report.steps.len(), 1);
            assert_eq!(report.solved, report.steps[0].pattern.is_perfect());
        }
    }

    #[test]
    fn random_secret_is_an_answer() {
        let dict = setup_dictionary();
        let secret = random_secret(dict.answers()).unwrap();
        assert!(dict.is_answer(&secret));
        assert!(random_secret(&[]).is_none());
    }
}
