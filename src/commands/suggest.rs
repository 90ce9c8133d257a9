//! One-shot suggestion command
//!
//! Replays a recorded history of (word, pattern) turns against the full
//! dictionary and reports the remaining candidates and ranked suggestions.

use crate::core::{FeedbackPattern, Word};
use crate::solver::{Round, TurnOutcome};

/// Result of replaying a history
pub struct SuggestResult {
    pub turns: usize,
    pub remaining: usize,
    pub suggestions: Vec<Word>,
    pub contradiction: bool,
}

/// Parse a `WORD:PATTERN` turn argument, e.g. `сорта:01111`
///
/// # Errors
///
/// Returns a message naming the malformed part: missing separator, invalid
/// word, or invalid pattern.
pub fn parse_turn(arg: &str) -> Result<(Word, FeedbackPattern), String> {
    let (word_part, pattern_part) = arg
        .split_once(':')
        .ok_or_else(|| format!("Expected WORD:PATTERN, got {arg:?}"))?;

    let word = Word::new(word_part).map_err(|e| format!("Invalid word in {arg:?}: {e}"))?;
    let pattern =
        FeedbackPattern::parse(pattern_part).map_err(|e| format!("Invalid pattern in {arg:?}: {e}"))?;

    Ok((word, pattern))
}

/// Replay `turns` from the full dictionary and rank what is left
///
/// An all-correct turn or a contradiction stops the replay early; the
/// result reflects the state at that point.
///
/// # Errors
///
/// Returns an error if a turn is played after the round has ended.
pub fn run_suggest(
    dictionary: &[Word],
    turns: &[(Word, FeedbackPattern)],
    top_n: usize,
) -> Result<SuggestResult, String> {
    let mut round = Round::new(dictionary);

    for (word, pattern) in turns {
        round
            .choose(word.clone())
            .map_err(|e| format!("Turn {}: {e}", round.history().len() + 1))?;
        let outcome = round
            .report(*pattern)
            .map_err(|e| format!("Turn {}: {e}", round.history().len() + 1))?;

        match outcome {
            TurnOutcome::Solved | TurnOutcome::Contradiction => break,
            TurnOutcome::Narrowed { .. } => {}
        }
    }

    let contradiction = round.remaining() == 0;
    Ok(SuggestResult {
        turns: round.history().len(),
        remaining: round.remaining(),
        suggestions: round.suggestions(top_n),
        contradiction,
    })
}
