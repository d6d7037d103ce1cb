//! Candidate filtering
//!
//! Narrows a candidate set to the words that would have produced the observed
//! feedback. Used both to commit a real turn and inside scoring, where the
//! same partition is computed without committing anything.

use crate::core::{GuessRecord, Pattern, Word};

/// Keep the candidates `w` for which `guess` against `w` yields `pattern`
///
/// Order of the input is preserved.
///
/// # Examples
/// ```
/// use wordle_infobot::core::{Pattern, Word};
/// use wordle_infobot::solver::filter::filter;
///
/// let candidates: Vec<Word> = ["crane", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("trace").unwrap();
/// let pattern = Pattern::calculate(&guess, &candidates[1]);
///
/// let live = filter(&candidates, &guess, pattern);
/// assert_eq!(live, vec![candidates[1]]);
/// ```
#[must_use]
pub fn filter(candidates: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| Pattern::calculate(guess, candidate) == pattern)
        .copied()
        .collect()
}

/// Check whether `candidate` agrees with every record in `history`
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[GuessRecord]) -> bool {
    history
        .iter()
        .all(|record| Pattern::calculate(&record.guess, candidate) == record.pattern)
}

/// Re-filter `answers` from scratch against a whole history
///
/// Equivalent to folding [`filter`] over the history one record at a time.
#[must_use]
pub fn filter_history(answers: &[Word], history: &[GuessRecord]) -> Vec<Word> {
    answers
        .iter()
        .filter(|candidate| is_consistent(candidate, history))
        .copied()
        .collect()
}
