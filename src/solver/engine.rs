//! The decision engine
//!
//! Chooses the next guess from the live candidates. Each call scores the whole
//! guess pool against the live set, which costs
//! O(|pool| · |live| · `WORD_LEN`) pattern work per turn. With the standard
//! lists that is roughly 13k × 2.3k on the opening turn, so the opener is
//! computed once and cached.

use super::selector::{ScoredGuess, TieBreak, rank_guesses, select_best_guess};
use super::strategy::{Strategy, StrategyType};
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::{Result, SolverError};
use log::{debug, info};
use std::sync::OnceLock;
use std::time::Instant;

/// Entropy-driven guess selection over a fixed dictionary
///
/// The engine holds no per-game state and is `Sync`, so one instance can
/// serve any number of concurrent games.
pub struct EntropyEngine<'a, S: Strategy = StrategyType> {
    strategy: S,
    dictionary: &'a Dictionary,
    tie_break: TieBreak,
    opener: OnceLock<ScoredGuess>,
}

impl<'a, S: Strategy> EntropyEngine<'a, S> {
    /// Create a new engine with the given strategy and dictionary
    pub const fn new(strategy: S, dictionary: &'a Dictionary) -> Self {
        Self {
            strategy,
            dictionary,
            tie_break: TieBreak::CandidateFirst,
            opener: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Fix the opening guess instead of computing it
    ///
    /// # Errors
    /// Returns `NotInGuessSet` if `word` is not guessable.
    pub fn with_opener(self, word: Word) -> Result<Self> {
        if !self.dictionary.is_guessable(&word) {
            return Err(SolverError::NotInGuessSet(word));
        }
        let answers = self.dictionary.answers();
        let is_candidate = self.dictionary.is_answer(&word);
        let opener = ScoredGuess {
            word,
            score: self.strategy.score(&word, answers, is_candidate),
            is_candidate,
        };
        // Fresh lock, so this cannot already be set
        let _ = self.opener.set(opener);
        Ok(self)
    }

    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Best guess against the full answer set, computed once
    ///
    /// # Errors
    /// Propagates errors from [`EntropyEngine::select_guess`].
    pub fn opening_guess(&self) -> Result<ScoredGuess> {
        if let Some(opener) = self.opener.get() {
            return Ok(*opener);
        }

        let start = Instant::now();
        let opener = self.select_from(self.dictionary.guesses(), self.dictionary.answers())?;
        info!(
            "opening guess {} ({:.3}) computed in {:.2}s",
            opener.word,
            opener.score,
            start.elapsed().as_secs_f64()
        );

        // A racing thread may have stored an equal result first
        Ok(*self.opener.get_or_init(|| opener))
    }

    /// Select the best next guess for the live candidates from the full pool
    ///
    /// With a single live candidate that word is returned without scoring.
    ///
    /// # Errors
    /// Returns `NoConsistentCandidates` when `live` is empty.
    pub fn select_guess(&self, live: &[Word]) -> Result<ScoredGuess> {
        self.select_from(self.dictionary.guesses(), live)
    }

    /// Like [`EntropyEngine::select_guess`] but over a restricted pool
    ///
    /// A non-empty pool is scored as given, so it may exclude the live
    /// candidates. An empty pool falls back to the live candidates.
    ///
    /// # Errors
    /// Returns `NoConsistentCandidates` when `live` is empty.
    pub fn select_from(&self, pool: &[Word], live: &[Word]) -> Result<ScoredGuess> {
        match live {
            [] => Err(SolverError::NoConsistentCandidates {
                history: String::new(),
            }),
            [only] => Ok(ScoredGuess {
                word: *only,
                score: 0.0,
                is_candidate: true,
            }),
            _ => {
                let best = if pool.is_empty() {
                    select_best_guess(&self.strategy, live, live, self.tie_break)
                } else {
                    select_best_guess(&self.strategy, pool, live, self.tie_break)
                };
                // `live` is non-empty, so at least one of the pools above is too
                let best = best.ok_or_else(|| SolverError::NoConsistentCandidates {
                    history: String::new(),
                })?;
                debug!(
                    "{} picked {} ({:.3}) over {} guesses for {} candidates",
                    self.strategy.name(),
                    best.word,
                    best.score,
                    pool.len(),
                    live.len()
                );
                Ok(best)
            }
        }
    }

    /// The `top` best guesses for the live candidates, best first
    #[must_use]
    pub fn top_guesses(&self, live: &[Word], top: usize) -> Vec<ScoredGuess> {
        let mut ranked = rank_guesses(&self.strategy, self.dictionary.guesses(), live, self.tie_break);
        ranked.truncate(top);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::strategy::EntropyStrategy;

    fn setup_dictionary() -> Dictionary {
        let answers = words_from_slice(&["irate", "crate", "grate", "slate", "trace", "crane"]);
        let extra = words_from_slice(&["roate", "salet", "zzzzz"]);
        Dictionary::with_extra_guesses(answers, &extra).unwrap()
    }

    #[test]
    fn single_candidate_returned_directly() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);
        let only = Word::new("grate").unwrap();

        let guess = engine.select_guess(&[only]).unwrap();

        assert_eq!(guess.word, only);
        assert!(guess.is_candidate);
        assert!(guess.score.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_live_set_is_an_error() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);

        assert!(matches!(
            engine.select_guess(&[]),
            Err(SolverError::NoConsistentCandidates { .. })
        ));
    }

    #[test]
    fn opening_guess_is_cached() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);

        let first = engine.opening_guess().unwrap();
        let second = engine.opening_guess().unwrap();

        assert_eq!(first, second);
        assert_eq!(first, engine.select_guess(dict.answers()).unwrap());
    }

    #[test]
    fn fixed_opener_must_be_guessable() {
        let dict = setup_dictionary();

        let engine = EntropyEngine::new(EntropyStrategy, &dict)
            .with_opener(Word::new("salet").unwrap())
            .unwrap();
        assert_eq!(engine.opening_guess().unwrap().word.text(), "SALET");

        let err = EntropyEngine::new(EntropyStrategy, &dict)
            .with_opener(Word::new("beast").unwrap())
            .err()
            .unwrap();
        assert!(matches!(err, SolverError::NotInGuessSet(_)));
    }

    #[test]
    fn empty_pool_falls_back_to_live_set() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);
        let live = words_from_slice(&["crate", "slate"]);

        let guess = engine.select_from(&[], &live).unwrap();
        assert!(live.contains(&guess.word));
    }

    #[test]
    fn restricted_pool_is_used_as_given() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);
        let only = Word::new("zzzzz").unwrap();

        let guess = engine
            .select_from(&[only], &words_from_slice(&["crane", "slate"]))
            .unwrap();

        assert_eq!(guess.word, only);
        assert!(!guess.is_candidate);
    }

    #[test]
    fn top_guesses_ranked_best_first() {
        let dict = setup_dictionary();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);

        let top = engine.top_guesses(dict.answers(), 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0], engine.select_guess(dict.answers()).unwrap());
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
