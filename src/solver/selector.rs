//! Best-guess selection
//!
//! Scores every word of a guess pool with a [`Strategy`] and picks the best
//! under a deterministic [`TieBreak`] policy. Scoring is a pure map over the
//! pool and selection is an associative reduction, so the pool is processed
//! in parallel without locks.

use super::strategy::Strategy;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A guess together with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    /// Strategy score; for entropy this is the expected information in bits
    pub score: f64,
    /// Whether the guess is still a possible answer
    pub is_candidate: bool,
}

/// How to order guesses whose scores are exactly equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Prefer a possible answer, then the lexicographically smallest word
    #[default]
    CandidateFirst,
    /// Lexicographically smallest word only
    Lexicographic,
}

impl TieBreak {
    /// Names accepted by the `FromStr` impl
    pub const NAMES: [&'static str; 2] = ["candidate-first", "lexicographic"];

    /// Total order over scored guesses: `Greater` means `a` is the better pick
    #[must_use]
    pub fn compare(self, a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
        a.score
            .total_cmp(&b.score)
            .then_with(|| match self {
                Self::CandidateFirst => a.is_candidate.cmp(&b.is_candidate),
                Self::Lexicographic => Ordering::Equal,
            })
            .then_with(|| b.word.cmp(&a.word))
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate-first" => Ok(Self::CandidateFirst),
            "lexicographic" => Ok(Self::Lexicographic),
            _ => Err(format!(
                "unknown tie-break '{s}', expected one of {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CandidateFirst => Self::NAMES[0],
            Self::Lexicographic => Self::NAMES[1],
        })
    }
}

/// Score every guess in the pool against the live candidates (parallel map)
pub fn score_all<S: Strategy + ?Sized>(
    strategy: &S,
    guess_pool: &[Word],
    candidates: &[Word],
) -> Vec<ScoredGuess> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .map(|guess| score_guess(strategy, guess, candidates, &candidate_set))
        .collect()
}

fn score_guess<S: Strategy + ?Sized>(
    strategy: &S,
    guess: &Word,
    candidates: &[Word],
    candidate_set: &FxHashSet<&Word>,
) -> ScoredGuess {
    let is_candidate = candidate_set.contains(guess);
    ScoredGuess {
        word: *guess,
        score: strategy.score(guess, candidates, is_candidate),
        is_candidate,
    }
}

/// Select the best guess from the pool
///
/// Returns `None` if the guess pool is empty. The result does not depend on
/// pool order or thread scheduling as long as the pool has no duplicates.
///
/// # Examples
/// ```
/// use wordle_infobot::core::Word;
/// use wordle_infobot::solver::{EntropyStrategy, TieBreak, select_best_guess};
///
/// let guesses = vec![Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let best = select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::default())
///     .unwrap();
/// assert_eq!(best.word.text(), "AEROS");
/// ```
pub fn select_best_guess<S: Strategy + ?Sized>(
    strategy: &S,
    guess_pool: &[Word],
    candidates: &[Word],
    tie_break: TieBreak,
) -> Option<ScoredGuess> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .map(|guess| score_guess(strategy, guess, candidates, &candidate_set))
        .reduce_with(|a, b| match tie_break.compare(&a, &b) {
            Ordering::Less => b,
            _ => a,
        })
}

/// All guesses ranked best first under the tie-break order
pub fn rank_guesses<S: Strategy + ?Sized>(
    strategy: &S,
    guess_pool: &[Word],
    candidates: &[Word],
    tie_break: TieBreak,
) -> Vec<ScoredGuess> {
    let mut scored = score_all(strategy, guess_pool, candidates);
    scored.par_sort_unstable_by(|a, b| tie_break.compare(b, a));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::strategy::EntropyStrategy;
    use crate::solver::entropy::calculate_entropy;

    #[test]
    fn selects_highest_entropy() {
        let guesses = words_from_slice(&["aaaaa", "aeros"]);
        let candidates = words_from_slice(&["slate", "irate", "crate", "grate"]);

        let best =
            select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::default())
                .unwrap();

        assert_eq!(best.word.text(), "AEROS");
        assert!(best.score > 0.5);
    }

    #[test]
    fn never_below_maximum_entropy() {
        let guesses = words_from_slice(&[
            "crane", "slate", "roate", "zzzzz", "trace", "irate", "stare", "beast", "toast",
        ]);
        let candidates = words_from_slice(&[
            "crate", "grate", "irate", "slate", "trace", "react", "stare", "toast", "roast",
        ]);

        let best =
            select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::default())
                .unwrap();
        let max = guesses
            .iter()
            .map(|g| calculate_entropy(g, &candidates))
            .fold(f64::NEG_INFINITY, f64::max);

        assert_eq!(best.score.to_bits(), max.to_bits());
    }

    #[test]
    fn ties_prefer_candidates_then_lexicographic() {
        // AAAAA, ABBBB and CBBBB all split {ABBBB, CBBBB} in two
        let guesses = words_from_slice(&["cbbbb", "aaaaa", "abbbb"]);
        let candidates = words_from_slice(&["abbbb", "cbbbb"]);

        let candidate_first =
            select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::CandidateFirst)
                .unwrap();
        assert_eq!(candidate_first.word.text(), "ABBBB");
        assert!(candidate_first.is_candidate);

        let lexicographic =
            select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::Lexicographic)
                .unwrap();
        assert_eq!(lexicographic.word.text(), "AAAAA");
        assert!(!lexicographic.is_candidate);
    }

    #[test]
    fn selection_ignores_pool_order() {
        let mut guesses = words_from_slice(&["bbbbb", "ccccc", "ddddd", "abcde"]);
        let candidates = words_from_slice(&["bbbbb", "ccccc"]);

        let forward =
            select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::default());
        guesses.reverse();
        let backward =
            select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::default());

        assert_eq!(forward, backward);
        assert_eq!(forward.unwrap().word.text(), "BBBBB");
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words_from_slice(&["slate"]);
        assert!(
            select_best_guess(&EntropyStrategy, &[], &candidates, TieBreak::default()).is_none()
        );
    }

    #[test]
    fn rank_matches_select() {
        let guesses = words_from_slice(&["crane", "slate", "zzzzz", "irate"]);
        let candidates = words_from_slice(&["crate", "grate", "irate", "slate"]);

        let ranked = rank_guesses(&EntropyStrategy, &guesses, &candidates, TieBreak::default());
        let best =
            select_best_guess(&EntropyStrategy, &guesses, &candidates, TieBreak::default());

        assert_eq!(ranked.len(), guesses.len());
        assert_eq!(Some(ranked[0]), best);
        assert_eq!(ranked.last().unwrap().word.text(), "ZZZZZ");
    }

    #[test]
    fn tie_break_names_parse() {
        for name in TieBreak::NAMES {
            let parsed: TieBreak = name.parse().unwrap();
            assert_eq!(parsed.to_string(), name);
        }
        assert!("random".parse::<TieBreak>().is_err());
    }
}
