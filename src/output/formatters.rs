//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackPattern, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its feedback
///
/// Correct letters come out green, present letters yellow, absent letters
/// dimmed, mirroring the tiles the game shows.
#[must_use]
pub fn colorize_guess(word: &Word, pattern: &FeedbackPattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.symbols())
        .map(|(&ch, &fb)| {
            let letter = ch.to_uppercase().to_string();
            match fb {
                Feedback::Correct => letter.green().bold().to_string(),
                Feedback::Present => letter.yellow().bold().to_string(),
                Feedback::Absent => letter.dimmed().to_string(),
            }
        })
        .collect()
}

/// Format a numbered suggestion list
#[must_use]
pub fn format_suggestions(suggestions: &[Word]) -> String {
    suggestions
        .iter()
        .enumerate()
        .map(|(i, word)| format!("  {}. {}\n", i + 1, word.text().to_uppercase()))
        .collect()
}
