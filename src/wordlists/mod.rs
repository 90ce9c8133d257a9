//! Dictionary word lists
//!
//! Provides the embedded Russian five-letter list compiled into the binary,
//! plus loading from external files.

mod embedded;
pub mod loader;

use crate::core::Word;

pub use embedded::{WORDS, WORDS_COUNT};

/// Advisory dictionary-membership test
///
/// Used to warn about words the dictionary doesn't know; never a hard
/// filter, since the list is not complete.
#[must_use]
pub fn contains(dictionary: &[Word], text: &str) -> bool {
    Word::new(text).is_ok_and(|word| dictionary.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::loader::words_from_slice;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // Every embedded word must survive Word validation
        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn embedded_words_are_unique() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn embedded_contains_common_words() {
        let words = words_from_slice(WORDS);
        for text in ["аорта", "сорта", "корта", "порты", "ворот", "колос"] {
            assert!(contains(&words, text), "{text} missing from dictionary");
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        let words = words_from_slice(WORDS);
        assert!(contains(&words, "СОРТА"));
    }

    #[test]
    fn contains_rejects_malformed_text() {
        let words = words_from_slice(WORDS);
        assert!(!contains(&words, "сор"));
        assert!(!contains(&words, "sorta"));
    }
}
