//! Hard-mode guess constraints
//!
//! In hard mode every guess must reuse the hints revealed so far: correct
//! letters stay in place, and present letters must appear somewhere other than
//! where they were marked present.

use crate::core::{Feedback, GuessRecord, WORD_LEN, Word};

/// Constraints accumulated from a guess history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeRules {
    fixed: [Option<u8>; WORD_LEN],
    /// (letter, position where it was marked present)
    misplaced: Vec<(u8, usize)>,
}

impl HardModeRules {
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut rules = Self::default();
        for record in history {
            rules.add(record);
        }
        rules
    }

    /// Fold one more record into the rules
    pub fn add(&mut self, record: &GuessRecord) {
        for (i, feedback) in record.pattern.feedback().into_iter().enumerate() {
            let letter = record.guess.letter_at(i);
            match feedback {
                Feedback::Correct => self.fixed[i] = Some(letter),
                Feedback::Present => {
                    if !self.misplaced.contains(&(letter, i)) {
                        self.misplaced.push((letter, i));
                    }
                }
                Feedback::Absent => {}
            }
        }
    }

    /// True when no hint has been revealed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.iter().all(Option::is_none) && self.misplaced.is_empty()
    }

    /// Check whether `guess` is a legal hard-mode guess
    #[must_use]
    pub fn allows(&self, guess: &Word) -> bool {
        let fixed_ok = self
            .fixed
            .iter()
            .enumerate()
            .all(|(i, letter)| letter.is_none_or(|l| guess.letter_at(i) == l));

        fixed_ok
            && self
                .misplaced
                .iter()
                .all(|&(letter, i)| guess.has_letter(letter) && guess.letter_at(i) != letter)
    }

    /// Restrict a guess pool to the words these rules allow
    #[must_use]
    pub fn restrict(&self, pool: &[Word]) -> Vec<Word> {
        pool.iter().filter(|w| self.allows(w)).copied().collect()
    }
}
