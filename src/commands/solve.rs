//! Simulate the helper against a known target word
//!
//! Plays the ranking heuristic's top suggestion each turn, computes the
//! feedback an honest game would return, and records the path taken.

use crate::core::{FeedbackPattern, Word};
use crate::solver::{Round, TurnOutcome};

/// Configuration for a simulation
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of simulating a target word
pub struct SolveResult {
    pub success: bool,
    pub target: String,
    pub steps: Vec<GuessStep>,
}

/// A single step of the simulation
pub struct GuessStep {
    pub word: Word,
    pub pattern: FeedbackPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Simulate solving `config.target` over the given dictionary
///
/// # Errors
///
/// Returns an error if the target is not a well-formed word, or if the
/// candidate set empties mid-simulation (the target is missing from the
/// dictionary).
pub fn solve_word(config: &SolveConfig, dictionary: &[Word]) -> Result<SolveResult, String> {
    let target = Word::new(config.target.as_str()).map_err(|e| format!("Invalid target: {e}"))?;

    let mut round = Round::new(dictionary);
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = round.remaining();
        let guess = round
            .suggestions(1)
            .into_iter()
            .next()
            .ok_or_else(|| "No candidates remain; is the target in the dictionary?".to_string())?;

        let pattern = FeedbackPattern::evaluate(&guess, &target);

        round
            .choose(guess.clone())
            .map_err(|e| format!("Round error: {e}"))?;
        let outcome = round
            .report(pattern)
            .map_err(|e| format!("Round error: {e}"))?;

        let candidates_after = match outcome {
            TurnOutcome::Solved => {
                steps.push(GuessStep {
                    word: guess,
                    pattern,
                    candidates_before,
                    candidates_after: 1,
                });
                return Ok(SolveResult {
                    success: true,
                    target: target.text().to_owned(),
                    steps,
                });
            }
            TurnOutcome::Narrowed { remaining } => remaining,
            TurnOutcome::Contradiction => 0,
        };

        steps.push(GuessStep {
            word: guess,
            pattern,
            candidates_before,
            candidates_after,
        });

        if candidates_after == 0 {
            return Err("No candidates remain; is the target in the dictionary?".to_string());
        }
    }

    Ok(SolveResult {
        success: false,
        target: target.text().to_owned(),
        steps,
    })
}
