//! Wordle bot
//!
//! Picks each guess by maximizing the expected information its feedback
//! reveals about the secret, then narrows the candidates and repeats.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_infobot::core::Word;
//! use wordle_infobot::dictionary::Dictionary;
//! use wordle_infobot::game::{GameConfig, GameSimulator, KnownSecret};
//! use wordle_infobot::solver::{EntropyEngine, EntropyStrategy};
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let engine = EntropyEngine::new(EntropyStrategy, &dictionary);
//!
//! let mut game = GameSimulator::new(&engine, GameConfig::default());
//! let result = game.play(&mut KnownSecret(Word::new("crane").unwrap())).unwrap();
//! println!("solved in {} turns", result.turns());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word lists
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Single-game state machine
pub mod game;

// Batch play and statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
