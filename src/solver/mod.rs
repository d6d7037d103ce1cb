//! Wordle solving algorithms
//!
//! Candidate filtering, guess scoring and the engine that ties them together.

mod engine;
pub mod entropy;
pub mod filter;
mod hard_mode;
mod selector;
pub mod strategy;

pub use engine::EntropyEngine;
pub use hard_mode::HardModeRules;
pub use selector::{ScoredGuess, TieBreak, rank_guesses, score_all, select_best_guess};
pub use strategy::{EntropyStrategy, ExpectedSizeStrategy, Strategy, StrategyType};
