//! Word lists for Wordle solving
//!
//! A [`Dictionary`] pairs the guessable words with the possible answers. It is
//! validated once at construction and read-only afterwards, so it can be
//! shared by reference across games and threads.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, EXTRA_GUESSES, EXTRA_GUESSES_COUNT};

use crate::core::Word;
use crate::error::{Result, SolverError};
use log::info;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Validated guess and answer lists
#[derive(Debug, Clone)]
pub struct Dictionary {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    guess_set: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from a complete guess list and an answer list
    ///
    /// Both lists are sorted and deduplicated.
    ///
    /// # Errors
    /// Returns `EmptyWordList` if either list is empty or some answer is not a
    /// guessable word.
    pub fn new(mut guesses: Vec<Word>, mut answers: Vec<Word>) -> Result<Self> {
        guesses.sort_unstable();
        guesses.dedup();
        answers.sort_unstable();
        answers.dedup();

        if guesses.is_empty() {
            return Err(SolverError::EmptyWordList("the guess list is empty".into()));
        }
        if answers.is_empty() {
            return Err(SolverError::EmptyWordList("the answer list is empty".into()));
        }

        let guess_set: FxHashSet<Word> = guesses.iter().copied().collect();
        let missing: Vec<&Word> = answers.iter().filter(|a| !guess_set.contains(a)).collect();
        if let Some(first) = missing.first() {
            return Err(SolverError::EmptyWordList(format!(
                "{} answer(s) are not guessable, e.g. {first}",
                missing.len()
            )));
        }

        info!(
            "dictionary ready: {} guesses, {} answers",
            guesses.len(),
            answers.len()
        );

        Ok(Self {
            guesses,
            answers,
            guess_set,
        })
    }

    /// Build a dictionary whose guess list is the answers plus extra guess-only words
    ///
    /// # Errors
    /// Returns `EmptyWordList` if `answers` is empty.
    pub fn with_extra_guesses(answers: Vec<Word>, extra_guesses: &[Word]) -> Result<Self> {
        let guesses = answers.iter().chain(extra_guesses).copied().collect();
        Self::new(guesses, answers)
    }

    /// The sample dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded lists are malformed.
    pub fn embedded() -> Result<Self> {
        Self::with_extra_guesses(
            loader::words_from_slice(ANSWERS),
            &loader::words_from_slice(EXTRA_GUESSES),
        )
    }

    /// Load a dictionary from word list files
    ///
    /// `guesses` is a complete guess list; `extra_guesses` lists additional
    /// guess-only words that are merged with the answers. At most one of the
    /// two is normally given; with neither, the answers double as guesses.
    ///
    /// # Errors
    /// Returns `WordListIo` if a file cannot be read and `EmptyWordList` if
    /// the resulting lists fail validation.
    pub fn from_files(
        answers: &Path,
        guesses: Option<&Path>,
        extra_guesses: Option<&Path>,
    ) -> Result<Self> {
        let answer_words = loader::load_from_file(answers)?;
        let mut guess_words = match guesses {
            Some(path) => loader::load_from_file(path)?,
            None => answer_words.clone(),
        };
        if let Some(path) = extra_guesses {
            guess_words.extend(loader::load_from_file(path)?);
        }
        Self::new(guess_words, answer_words)
    }

    /// All guessable words, sorted
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// All possible answers, sorted
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn is_guessable(&self, word: &Word) -> bool {
        self.guess_set.contains(word)
    }

    /// Check if `word` is one of the possible answers
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answers.binary_search(word).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::loader::words_from_slice;
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(EXTRA_GUESSES.len(), EXTRA_GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(EXTRA_GUESSES) {
            assert!(Word::new(word).is_ok(), "'{word}' is not a valid word");
        }
    }

    #[test]
    fn embedded_dictionary_is_consistent() {
        let dict = Dictionary::embedded().unwrap();
        assert_eq!(dict.answers().len(), ANSWERS_COUNT);
        assert!(dict.guesses().len() > dict.answers().len());
        assert!(dict.answers().iter().all(|a| dict.is_guessable(a)));
    }

    #[test]
    fn new_sorts_and_dedups() {
        let words = words_from_slice(&["trace", "crane", "trace"]);
        let dict = Dictionary::new(words.clone(), words).unwrap();
        let texts: Vec<&str> = dict.answers().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "TRACE"]);
        assert!(dict.is_answer(&Word::new("crane").unwrap()));
    }

    #[test]
    fn empty_lists_rejected() {
        let words = words_from_slice(&["crane"]);
        assert!(matches!(
            Dictionary::new(Vec::new(), words.clone()),
            Err(SolverError::EmptyWordList(_))
        ));
        assert!(matches!(
            Dictionary::new(words, Vec::new()),
            Err(SolverError::EmptyWordList(_))
        ));
    }

    #[test]
    fn answers_must_be_guessable() {
        let guesses = words_from_slice(&["crane", "slate"]);
        let answers = words_from_slice(&["crane", "trace"]);
        let err = Dictionary::new(guesses, answers).unwrap_err();
        assert!(matches!(err, SolverError::EmptyWordList(_)));
        assert!(err.to_string().contains("TRACE"));
    }

    #[test]
    fn extra_guesses_are_merged() {
        let answers = words_from_slice(&["crane", "trace"]);
        let extra = words_from_slice(&["roate"]);
        let dict = Dictionary::with_extra_guesses(answers, &extra).unwrap();
        assert_eq!(dict.guesses().len(), 3);
        assert!(dict.is_guessable(&Word::new("roate").unwrap()));
        assert!(!dict.is_answer(&Word::new("roate").unwrap()));
    }
}
