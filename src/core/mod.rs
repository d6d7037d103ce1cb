//! Core domain types for Wordle
//!
//! Words, feedback patterns and guess records. Everything here is a pure value
//! type with no knowledge of dictionaries or solving strategy.

mod pattern;
mod record;
mod word;

pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use record::{GuessRecord, format_history, parse_history};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError};
