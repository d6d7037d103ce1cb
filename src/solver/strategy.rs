//! Guess scoring strategies
//!
//! Defines the Strategy trait and concrete implementations. A strategy only
//! scores a single guess; choosing among scores is the engine's job.

use super::entropy::{calculate_entropy, expected_remaining};
use crate::core::Word;

/// A pure scoring function for candidate guesses
///
/// Higher scores are better. Implementations must be deterministic and
/// thread-safe since the engine scores the guess pool in parallel.
pub trait Strategy: Sync {
    /// Score `guess` against the live candidates
    ///
    /// `is_candidate` tells whether the guess could itself be the answer.
    fn score(&self, guess: &Word, candidates: &[Word], is_candidate: bool) -> f64;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrategyType {
    /// Shannon entropy maximization (default)
    Entropy(EntropyStrategy),
    /// Expected remaining-set size minimization
    ExpectedSize(ExpectedSizeStrategy),
}

impl Strategy for StrategyType {
    fn score(&self, guess: &Word, candidates: &[Word], is_candidate: bool) -> f64 {
        match self {
            Self::Entropy(s) => s.score(guess, candidates, is_candidate),
            Self::ExpectedSize(s) => s.score(guess, candidates, is_candidate),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Entropy(s) => s.name(),
            Self::ExpectedSize(s) => s.name(),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy)
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["entropy", "expected-size"];

    /// Create strategy from name string
    ///
    /// Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "entropy" => Some(Self::Entropy(EntropyStrategy)),
            "expected-size" | "expected" => Some(Self::ExpectedSize(ExpectedSizeStrategy::default())),
            _ => None,
        }
    }
}

/// Pure entropy maximization
///
/// Scores a guess by the expected information, in bits, its feedback reveals
/// about a secret drawn uniformly from the live candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn score(&self, guess: &Word, candidates: &[Word], _is_candidate: bool) -> f64 {
        calculate_entropy(guess, candidates)
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}

/// Minimizes the expected number of candidates left after the guess
///
/// Guesses that cannot be the answer pay `non_candidate_penalty` on top, so a
/// possible answer wins unless an outside guess shrinks the set clearly more.
/// The score is negated so that higher is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedSizeStrategy {
    pub non_candidate_penalty: f64,
}

impl ExpectedSizeStrategy {
    #[must_use]
    pub const fn new(non_candidate_penalty: f64) -> Self {
        Self {
            non_candidate_penalty,
        }
    }
}

impl Default for ExpectedSizeStrategy {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Strategy for ExpectedSizeStrategy {
    fn score(&self, guess: &Word, candidates: &[Word], is_candidate: bool) -> f64 {
        let penalty = if is_candidate {
            0.0
        } else {
            self.non_candidate_penalty
        };
        -(expected_remaining(guess, candidates) + penalty)
    }

    fn name(&self) -> &'static str {
        "expected-size"
    }
}
