//! Wordle word representation
//!
//! A Word is a fixed-length run of uppercase ASCII letters stored inline, so it
//! is `Copy` and cheap to hash, compare and pass across threads.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LEN: usize = 5;

/// Size of the letter alphabet (A-Z)
pub const ALPHABET_LEN: usize = 26;

/// A Wordle word
///
/// Ordering is lexicographic over the letters, which the engine relies on for
/// deterministic tie-breaking.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("'{word}' must be exactly {WORD_LEN} letters, got {len}")]
    InvalidLength { word: String, len: usize },

    #[error("'{word}' contains '{ch}', only the letters A-Z are allowed")]
    InvalidCharacter { word: String, ch: char },
}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the length is not `WORD_LEN` or a character is
    /// not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_infobot::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if let Some(ch) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter {
                word: text.to_string(),
                ch,
            });
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength {
                word: text.to_string(),
                len: text.len(),
            })?;

        Ok(Self(letters.map(|b| b.to_ascii_uppercase())))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the letters as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Count of each letter, indexed by `letter - b'A'`
    ///
    /// Used by pattern calculation to handle duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &letter in &self.0 {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

/// Index of an uppercase letter in the alphabet
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("toolong"),
            Err(WordError::InvalidLength { len: 7, .. })
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength { len: 4, .. })
        ));
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { len: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacter { ch: '3', .. })
        ));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'N'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'S')], 1);
        assert_eq!(counts[letter_index(b'P')], 1);
        assert_eq!(counts[letter_index(b'E')], 2);
        assert_eq!(counts[letter_index(b'D')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), WORD_LEN);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["trace", "crane", "slate", "crate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "CRATE", "SLATE", "TRACE"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
        assert_eq!(format!("{word:?}"), "Word(SLATE)");
    }
}
