//! Formatting utilities for terminal output

use crate::core::{Feedback, GuessRecord};
use colored::Colorize;

/// Format a guess with each letter colored by its feedback, followed by the
/// emoji pattern
#[must_use]
pub fn colored_guess(record: &GuessRecord) -> String {
    let letters: String = record
        .guess
        .text()
        .chars()
        .zip(record.pattern.feedback())
        .map(|(letter, feedback)| {
            let cell = format!(" {letter} ");
            match feedback {
                Feedback::Correct => cell.black().on_green().bold().to_string(),
                Feedback::Present => cell.black().on_yellow().bold().to_string(),
                Feedback::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect();

    format!("{letters}  {}", record.pattern.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible split
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    // log2 of the 243 possible patterns
    let max_entropy = 243_f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Word};

    #[test]
    fn colored_guess_keeps_letters_and_emoji() {
        let record = GuessRecord::new(Word::new("crane").unwrap(), Pattern::parse("GYXXG").unwrap());
        let formatted = colored_guess(&record);

        for letter in ["C", "R", "A", "N", "E"] {
            assert!(formatted.contains(letter));
        }
        assert!(formatted.ends_with("🟩🟨⬜⬜🟩"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(500.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_width() {
        assert_eq!(entropy_bar(3.0, 20).chars().count(), 20);
    }
}
