//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LEN, Word, letter_index};
use crate::error::{Result, SolverError};
use std::fmt;

/// Number of distinct patterns (3^`WORD_LEN`)
pub const PATTERN_COUNT: usize = 3usize.pow(WORD_LEN as u32);

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Compact symbol used in manual feedback (`G`, `Y`, `X`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Parse one feedback symbol; emoji squares are accepted as aliases
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the per-letter feedback as a single byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All positions correct
    pub const PERFECT: Self = Self((PATTERN_COUNT - 1) as u8);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= `PATTERN_COUNT`
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!((value as usize) < PATTERN_COUNT, "Pattern value out of range");
        Self(value)
    }

    /// Raw value as an index into a `PATTERN_COUNT`-sized table
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is played against `secret`
    ///
    /// Implements Wordle's duplicate-letter rule: a letter is marked present at
    /// most as many times as it still occurs in the secret after exact matches
    /// have consumed their share.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter pool
    /// 2. Second pass: mark present letters left to right while the pool lasts
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_infobot::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &secret).to_string(), "XXGXG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut pool = secret.letter_counts();
        let guess = guess.letters();
        let secret = secret.letters();
        let mut digits = [0u8; WORD_LEN];

        for i in 0..WORD_LEN {
            if guess[i] == secret[i] {
                digits[i] = 2;
                pool[letter_index(secret[i])] -= 1;
            }
        }

        for i in 0..WORD_LEN {
            if digits[i] == 0 {
                let slot = &mut pool[letter_index(guess[i])];
                if *slot > 0 {
                    digits[i] = 1;
                    *slot -= 1;
                }
            }
        }

        Self::from_digits(&digits)
    }

    fn from_digits(digits: &[u8; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in digits {
            value += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Build a pattern from explicit per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LEN]) -> Self {
        Self::from_digits(&feedback.map(|f| f as u8))
    }

    /// Per-position feedback, position 0 first
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Parse manual feedback such as `"GYXXG"`
    ///
    /// Accepts `G`/`Y`/`X` in either case, and 🟩/🟨/⬜/⬛ as aliases.
    ///
    /// # Errors
    /// Returns `InvalidPatternFormat` if the length is not `WORD_LEN` or any
    /// symbol is unrecognized.
    ///
    /// # Examples
    /// ```
    /// use wordle_infobot::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GYXGY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYX").is_err());
    /// ```
    pub fn parse(code: &str) -> Result<Self> {
        let invalid = |reason: String| SolverError::InvalidPatternFormat {
            input: code.to_string(),
            reason,
        };

        let symbols: Vec<char> = code.trim().chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(invalid(format!(
                "expected {WORD_LEN} symbols, got {}",
                symbols.len()
            )));
        }

        let mut feedback = [Feedback::Absent; WORD_LEN];
        for (i, (&symbol, slot)) in symbols.iter().zip(&mut feedback).enumerate() {
            *slot = Feedback::from_symbol(symbol).ok_or_else(|| {
                invalid(format!(
                    "unrecognized symbol '{symbol}' at position {}, use G, Y or X",
                    i + 1
                ))
            })?;
        }

        Ok(Self::from_feedback(feedback))
    }

    /// Convert pattern to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|f| f.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Formats as the compact `G`/`Y`/`X` code
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.feedback() {
            write!(f, "{}", feedback.symbol())?;
        }
        Ok(())
    }
}
