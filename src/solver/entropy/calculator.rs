//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{PATTERN_COUNT, Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct patterns the guess can produce
    pub partitions: usize,
}

/// Count how many candidates fall into each pattern
///
/// Indexed by [`Pattern::index`].
#[must_use]
pub fn pattern_counts(guess: &Word, candidates: &[Word]) -> [u32; PATTERN_COUNT] {
    let mut counts = [0u32; PATTERN_COUNT];
    for candidate in candidates {
        counts[Pattern::calculate(guess, candidate).index()] += 1;
    }
    counts
}

/// Non-empty partition sizes in ascending order
///
/// Summing in a fixed order makes two guesses with the same partition shape
/// score exactly equal, so ties are real ties.
fn sorted_sizes(guess: &Word, candidates: &[Word]) -> Vec<u32> {
    let mut sizes: Vec<u32> = pattern_counts(guess, candidates)
        .into_iter()
        .filter(|&count| count > 0)
        .collect();
    sizes.sort_unstable();
    sizes
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_infobot::core::Word;
/// use wordle_infobot::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&sorted_sizes(guess, candidates))
}

/// Calculate Shannon entropy from partition sizes
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one partition)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n partitions
///
/// # Examples
/// ```
/// use wordle_infobot::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(sizes: &[u32]) -> f64 {
    let total = f64::from(sizes.iter().sum::<u32>());

    if total == 0.0 {
        return 0.0;
    }

    sizes
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected size of the live set after `guess`: Σ |group|² / |candidates|
///
/// Computed from an exact integer sum, so equal partition shapes give equal
/// values.
#[must_use]
pub fn expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let sum_of_squares: u64 = pattern_counts(guess, candidates)
        .iter()
        .map(|&count| u64::from(count) * u64::from(count))
        .sum();
    sum_of_squares as f64 / candidates.len() as f64
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, max partition size and the
/// number of distinct patterns.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    let sizes = sorted_sizes(guess, candidates);

    GuessMetrics {
        entropy: shannon_entropy(&sizes),
        expected_remaining: expected_remaining(guess, candidates),
        max_partition: sizes.last().map_or(0, |&max| max as usize),
        partitions: sizes.len(),
    }
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn partition(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, Vec<Word>> {
    let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();

    for candidate in candidates {
        groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(*candidate);
    }

    groups
}
