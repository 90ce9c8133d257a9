//! Core domain types for the five-letter game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackPattern, PatternError};
pub use word::{Word, WordError, is_alphabet_char};
