//! Word representation for the Cyrillic five-letter game
//!
//! A Word stores a 5-letter word along with letter position indices used by
//! the constraint filter and the frequency ranker.

use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter Cyrillic word with letter position tracking
///
/// Stores the lower-case text and a map of letter positions for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; 5],
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Word contains a non-Cyrillic character: {ch:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Check whether a character belongs to the game alphabet (lower-case Cyrillic)
#[inline]
#[must_use]
pub fn is_alphabet_char(ch: char) -> bool {
    ('а'..='я').contains(&ch) || ch == 'ё'
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The character count is not exactly 5
    /// - Any character is outside the Cyrillic alphabet
    ///
    /// # Examples
    /// ```
    /// use wordly_helper::core::Word;
    ///
    /// let word = Word::new("КолОс").unwrap();
    /// assert_eq!(word.text(), "колос");
    ///
    /// assert!(Word::new("колосья").is_err());
    /// assert!(Word::new("слон1").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        let chars_vec: Vec<char> = text.chars().collect();
        if chars_vec.len() != 5 {
            return Err(WordError::InvalidLength(chars_vec.len()));
        }

        if let Some(&bad) = chars_vec.iter().find(|&&c| !is_alphabet_char(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        // Safe to unwrap as we validated the count == 5
        let chars: [char; 5] = chars_vec.try_into().expect("length already validated");

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; 5] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Iterate over the distinct letters of the word
    ///
    /// Each letter appears once regardless of how many times it repeats.
    #[inline]
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.char_positions.keys().copied()
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the filter and by feedback evaluation to budget duplicates.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
