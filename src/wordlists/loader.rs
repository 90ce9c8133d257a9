//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or the embedded list.
//! Loading discards anything that is not a valid five-letter word, and
//! drops duplicates while keeping first-seen order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// Lines are trimmed and lower-cased; malformed lines (wrong length,
/// characters outside the alphabet) and duplicates are silently discarded.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordly_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_ru.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(dedup_words(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    })))
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordly_helper::wordlists::loader::words_from_slice;
/// use wordly_helper::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup_words(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

fn dedup_words(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .filter(|word| seen.insert(word.text().to_owned()))
        .collect()
}
