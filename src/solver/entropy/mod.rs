//! Entropy calculation
//!
//! Implements Shannon entropy over the partition a guess induces on the live
//! candidates. This is the scoring function behind the default strategy.

mod calculator;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, expected_remaining, partition,
    pattern_counts, shannon_entropy,
};
