//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use crate::error::{Result, SolverError};
use log::warn;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are skipped. Lines that are not valid words
/// are skipped with a warning rather than failing the whole list.
///
/// # Errors
///
/// Returns `WordListIo` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_infobot::dictionary::loader::load_from_file;
///
/// let words = load_from_file("dictionary/wordle-La.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SolverError::WordListIo {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_lines(&content, &path.display().to_string()))
}

fn parse_lines(content: &str, origin: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| warn!("{origin}:{}: skipping entry: {e}", line_no + 1))
                .ok()
        })
        .collect()
}

/// Convert an embedded string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_infobot::dictionary::loader::words_from_slice;
/// use wordle_infobot::dictionary::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
