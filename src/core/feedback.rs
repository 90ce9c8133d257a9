//! Feedback symbols and patterns for a played guess
//!
//! The game reports one symbol per letter of the guess. The chat convention
//! this helper follows encodes them as digits:
//! - 0 = Absent (⬜, letter not in the word)
//! - 1 = Correct (🟩, right letter, right position)
//! - 2 = Present (🟨, right letter, wrong position)
//!
//! Every textual encoding is parsed into the one internal representation,
//! `FeedbackPattern`, an array of five `Feedback` symbols.

use super::Word;
use std::fmt;

/// Per-letter verdict reported by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur in the word (beyond already-accounted occurrences)
    Absent,
    /// Letter is in the exact position
    Correct,
    /// Letter occurs in the word but in a different position
    Present,
}

impl Feedback {
    /// Digit used by the chat encoding (`0`/`1`/`2`)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Correct => '1',
            Self::Present => '2',
        }
    }

    /// Visual marker used by the chat encoding (⬜/🟩/🟨)
    #[inline]
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Correct => '🟩',
            Self::Present => '🟨',
        }
    }

    /// Decode a single symbol from either accepted alphabet
    #[inline]
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '0' | '⬜' => Some(Self::Absent),
            '1' | '🟩' => Some(Self::Correct),
            '2' | '🟨' => Some(Self::Present),
            _ => None,
        }
    }
}

/// Error type for malformed pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must have exactly 5 symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Pattern contains an unrecognized symbol: {ch:?}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Feedback pattern for one played guess
///
/// Five symbols, positionally aligned with the guess letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([Feedback; 5]);

impl FeedbackPattern {
    /// All correct (the word was guessed)
    pub const SOLVED: Self = Self([Feedback::Correct; 5]);

    /// Create a pattern from its five symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Feedback; 5]) -> Self {
        Self(symbols)
    }

    /// Get the five symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; 5] {
        &self.0
    }

    /// Symbol at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check whether every symbol is `Correct`
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&fb| fb == Feedback::Correct)
    }

    /// Parse a pattern from a string like `"01210"` or `"⬜🟩🟨⬜🟩"`
    ///
    /// Each character may come from either alphabet; digits and markers can
    /// be mixed, matching what the original game chat accepted.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidLength` for anything other than exactly
    /// 5 symbols and `PatternError::InvalidSymbol` for an unrecognized
    /// character. Malformed input is never coerced.
    ///
    /// # Examples
    /// ```
    /// use wordly_helper::core::FeedbackPattern;
    ///
    /// let p1: FeedbackPattern = "01210".parse().unwrap();
    /// let p2: FeedbackPattern = "⬜🟩🟨🟩⬜".parse().unwrap();
    /// assert_eq!(p1.digits(), "01210");
    /// assert_eq!(p2.digits(), "01210");
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != 5 {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut symbols = [Feedback::Absent; 5];
        for (i, &ch) in chars.iter().enumerate() {
            symbols[i] = Feedback::from_symbol(ch).ok_or(PatternError::InvalidSymbol(ch))?;
        }

        Ok(Self(symbols))
    }

    /// Compute the pattern an honest game would report for `guess` against `answer`
    ///
    /// Correct positions are consumed from the answer's letter budget first,
    /// then remaining occurrences are handed out as `Present` left to right;
    /// everything else is `Absent`. This matches the game's handling of
    /// repeated letters in a guess.
    ///
    /// # Examples
    /// ```
    /// use wordly_helper::core::{FeedbackPattern, Word};
    ///
    /// let guess = Word::new("молол").unwrap();
    /// let answer = Word::new("колос").unwrap();
    /// let pattern = FeedbackPattern::evaluate(&guess, &answer);
    /// assert_eq!(pattern.digits(), "01110");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut symbols = [Feedback::Absent; 5];
        let mut available = answer.char_counts();

        // First pass: exact position matches consume the budget
        for i in 0..5 {
            if guess.char_at(i) == answer.char_at(i) {
                symbols[i] = Feedback::Correct;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-elsewhere from the remaining budget
        for i in 0..5 {
            if symbols[i] == Feedback::Absent {
                if let Some(count) = available.get_mut(&guess.char_at(i))
                    && *count > 0
                {
                    symbols[i] = Feedback::Present;
                    *count -= 1;
                }
            }
        }

        Self(symbols)
    }

    /// Render as the digit encoding, e.g. `"01210"`
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.iter().map(|fb| fb.digit()).collect()
    }

    /// Render as the marker encoding, e.g. `"⬜🟩🟨🟩⬜"`
    #[must_use]
    pub fn markers(&self) -> String {
        self.0.iter().map(|fb| fb.marker()).collect()
    }
}

impl std::str::FromStr for FeedbackPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits())
    }
}
