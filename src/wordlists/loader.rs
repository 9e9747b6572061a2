//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Loaders do the filtering the core expects already done: trimmed,
//! lowercase, longer than two letters, no duplicates.

use crate::core::MIN_WORD_LEN;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize one dictionary line, `None` if it is not an acceptable word
fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    let acceptable =
        word.len() >= MIN_WORD_LEN && word.chars().all(|c| c.is_ascii_lowercase());
    acceptable.then_some(word)
}

/// Filter raw dictionary lines, keeping the first appearance of each word
fn filter_dictionary<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    lines
        .filter_map(normalize_word)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Load a dictionary from a file, one word per line
///
/// Skips blank lines, words of two letters or fewer, and anything that is
/// not plain ASCII letters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_hunt::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(filter_dictionary(content.lines()))
}

/// Load a frequency order from a file, most common word first
///
/// Lines are trimmed and lowercased; blank lines are skipped. Positions are
/// kept as-is, so only relative order matters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_frequency_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect())
}

/// Convert embedded string slice to a filtered dictionary
///
/// # Examples
/// ```
/// use word_hunt::wordlists::loader::words_from_slice;
/// use word_hunt::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    filter_dictionary(slice.iter().copied())
}

/// Convert embedded string slice to an owned frequency order
#[must_use]
pub fn frequency_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|s| (*s).to_string()).collect()
}
