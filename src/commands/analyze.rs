//! Word analysis command
//!
//! Reports how well a single word splits the answer set.

use crate::core::{Pattern, Word};
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::solver::entropy::{GuessMetrics, calculate_metrics, partition};
use anyhow::Result;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub is_answer: bool,
    /// Largest feedback groups, biggest first
    pub largest_groups: Vec<(Pattern, usize)>,
}

impl AnalysisResult {
    /// Factor by which the candidate set is expected to shrink
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze a guess against every possible answer
///
/// # Errors
///
/// Returns an error if the word is not in the guess list.
pub fn analyze_word(word: Word, dictionary: &Dictionary, groups: usize) -> Result<AnalysisResult> {
    if !dictionary.is_guessable(&word) {
        return Err(SolverError::NotInGuessSet(word).into());
    }

    let answers = dictionary.answers();
    let mut largest_groups: Vec<(Pattern, usize)> = partition(&word, answers)
        .into_iter()
        .map(|(pattern, words)| (pattern, words.len()))
        .collect();
    largest_groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    largest_groups.truncate(groups);

    Ok(AnalysisResult {
        word,
        metrics: calculate_metrics(&word, answers),
        total_candidates: answers.len(),
        is_answer: dictionary.is_answer(&word),
        largest_groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn setup_dictionary() -> Dictionary {
        let answers = words_from_slice(&["crane", "crate", "trace", "slate", "grate", "irate"]);
        Dictionary::with_extra_guesses(answers, &words_from_slice(&["zzzzz"])).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let dict = setup_dictionary();

        let result = analyze_word(Word::new("crane").unwrap(), &dict, 3).unwrap();

        assert!(result.is_answer);
        assert!(result.metrics.entropy > 0.0);
        assert!(result.expected_reduction() >= 1.0);
        assert_eq!(result.total_candidates, 6);
        assert!(result.largest_groups.len() <= 3);
        assert!(result.largest_groups.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn analyze_useless_word() {
        let dict = setup_dictionary();

        let result = analyze_word(Word::new("zzzzz").unwrap(), &dict, 5).unwrap();

        assert!(!result.is_answer);
        assert!(result.metrics.entropy.abs() < f64::EPSILON);
        assert_eq!(result.metrics.partitions, 1);
        assert_eq!(result.largest_groups, vec![(Pattern::new(0), 6)]);
    }

    #[test]
    fn analyze_unknown_word() {
        let dict = setup_dictionary();
        assert!(analyze_word(Word::new("beast").unwrap(), &dict, 3).is_err());
    }
}
