//! Round state: one play-through from the full dictionary to a verdict
//!
//! A `Round` owns the candidate set and guess history for exactly one game.
//! There is no hidden global state; callers that serve many players keep one
//! `Round` per player and thread it themselves. The dictionary is borrowed
//! read-only and may be shared between any number of concurrent rounds.

use super::filter::filter_candidates;
use super::ranker::rank_candidates;
use crate::core::{FeedbackPattern, Word};
use std::fmt;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No outstanding guess; suggestions can be shown
    AwaitingGuess,
    /// A guess has been chosen; waiting for its feedback pattern
    AwaitingFeedback,
    /// The word was guessed (terminal)
    Solved,
    /// The candidate set is empty; some earlier entry must be wrong
    Contradiction,
}

/// Result of reporting a feedback pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Candidates were filtered; this many remain
    Narrowed { remaining: usize },
    /// The pattern was all-correct: the word is found
    Solved,
    /// No candidate survived; an earlier input is probably mistaken
    Contradiction,
}

/// Acknowledgement of a chosen guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// The chosen word is not in the dictionary. Advisory only: the
    /// dictionary may be incomplete, and filtering depends only on the
    /// guess's letters.
    pub unknown_word: bool,
}

/// Error type for using the round out of phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// `choose` called while a guess is already awaiting feedback
    GuessOutstanding,
    /// `report` called with no guess chosen
    NoPendingGuess,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuessOutstanding => {
                write!(f, "A guess is already awaiting feedback")
            }
            Self::NoPendingGuess => {
                write!(f, "No guess has been chosen for this turn")
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// One play-through of the game
///
/// Candidates start as the whole dictionary and shrink with every reported
/// feedback. All mutation happens through `&mut self`; a turn either applies
/// fully or not at all.
pub struct Round<'a> {
    dictionary: &'a [Word],
    candidates: Vec<Word>,
    history: Vec<(Word, FeedbackPattern)>,
    pending: Option<Word>,
    phase: Phase,
}

impl<'a> Round<'a> {
    /// Start a round with the full dictionary as candidates
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            candidates: dictionary.to_vec(),
            history: Vec::new(),
            pending: None,
            phase: Phase::AwaitingGuess,
        }
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Words still consistent with every feedback received
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// The (guess, pattern) pairs played so far, in order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    /// Ranked suggestions for the next guess
    #[must_use]
    pub fn suggestions(&self, top_n: usize) -> Vec<Word> {
        rank_candidates(&self.candidates, top_n)
    }

    /// Record the word the player actually played
    ///
    /// Any well-formed word is accepted; dictionary membership is reported
    /// back as an advisory flag, never enforced.
    ///
    /// # Errors
    /// Returns `RoundError::GuessOutstanding` unless the round is in
    /// `AwaitingGuess` (a previous guess has unreported feedback, or the
    /// round already ended).
    pub fn choose(&mut self, word: Word) -> Result<Choice, RoundError> {
        if self.phase != Phase::AwaitingGuess {
            return Err(RoundError::GuessOutstanding);
        }

        let unknown_word = !self.dictionary.contains(&word);
        self.pending = Some(word);
        self.phase = Phase::AwaitingFeedback;

        Ok(Choice { unknown_word })
    }

    /// Report the feedback the game returned for the pending guess
    ///
    /// An all-correct pattern ends the round as `Solved` without touching
    /// the candidate set. Otherwise the candidates are filtered by the
    /// (guess, pattern) pair and the pair is appended to the history; when
    /// nothing survives the round moves to `Contradiction`.
    ///
    /// # Errors
    /// Returns `RoundError::NoPendingGuess` unless a guess is awaiting
    /// feedback.
    pub fn report(&mut self, pattern: FeedbackPattern) -> Result<TurnOutcome, RoundError> {
        if self.phase != Phase::AwaitingFeedback {
            return Err(RoundError::NoPendingGuess);
        }
        let guess = self.pending.take().ok_or(RoundError::NoPendingGuess)?;

        if pattern.is_solved() {
            self.history.push((guess, pattern));
            self.phase = Phase::Solved;
            return Ok(TurnOutcome::Solved);
        }

        self.candidates = filter_candidates(&self.candidates, &guess, &pattern);
        self.history.push((guess, pattern));

        if self.candidates.is_empty() {
            self.phase = Phase::Contradiction;
            Ok(TurnOutcome::Contradiction)
        } else {
            self.phase = Phase::AwaitingGuess;
            Ok(TurnOutcome::Narrowed {
                remaining: self.candidates.len(),
            })
        }
    }

    /// Drop the last completed turn and replay the rest of the history
    ///
    /// Also discards a pending guess that has no feedback yet. Returns
    /// whether anything was undone. The replay starts from the full
    /// dictionary, so undoing out of a contradiction works.
    pub fn undo(&mut self) -> bool {
        if self.pending.take().is_some() {
            self.phase = Phase::AwaitingGuess;
            return true;
        }

        if self.history.pop().is_none() {
            return false;
        }

        self.candidates = self.dictionary.to_vec();
        for (guess, pattern) in &self.history {
            self.candidates = filter_candidates(&self.candidates, guess, pattern);
        }
        self.phase = if self.candidates.is_empty() {
            Phase::Contradiction
        } else {
            Phase::AwaitingGuess
        };
        true
    }

    /// Restart from scratch: full dictionary, empty history
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.to_vec();
        self.history.clear();
        self.pending = None;
        self.phase = Phase::AwaitingGuess;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["аорта", "сорта", "корта", "порты", "ворот"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect()
    }

    fn pattern(digits: &str) -> FeedbackPattern {
        FeedbackPattern::parse(digits).unwrap()
    }

    #[test]
    fn new_round_starts_with_full_dictionary() {
        let dict = dictionary();
        let round = Round::new(&dict);

        assert_eq!(round.phase(), Phase::AwaitingGuess);
        assert_eq!(round.remaining(), dict.len());
        assert!(round.history().is_empty());
    }

    #[test]
    fn choose_then_report_narrows() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        let choice = round.choose(Word::new("сорта").unwrap()).unwrap();
        assert!(!choice.unknown_word);
        assert_eq!(round.phase(), Phase::AwaitingFeedback);

        let outcome = round.report(pattern("01111")).unwrap();
        assert_eq!(outcome, TurnOutcome::Narrowed { remaining: 2 });
        assert_eq!(round.phase(), Phase::AwaitingGuess);
        assert_eq!(round.remaining(), 2);
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn choose_flags_unknown_word() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        let choice = round.choose(Word::new("молол").unwrap()).unwrap();
        assert!(choice.unknown_word);

        // Filtering still proceeds normally on the letters: О correct at
        // positions 1 and 3, no М or Л, leaves only ВОРОТ
        let outcome = round.report(pattern("01010")).unwrap();
        assert_eq!(outcome, TurnOutcome::Narrowed { remaining: 1 });
        assert_eq!(round.candidates()[0].text(), "ворот");
    }

    #[test]
    fn choose_twice_without_feedback_fails() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        round.choose(Word::new("сорта").unwrap()).unwrap();
        assert_eq!(
            round.choose(Word::new("корта").unwrap()),
            Err(RoundError::GuessOutstanding)
        );
    }

    #[test]
    fn report_without_choose_fails() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        assert_eq!(
            round.report(pattern("00000")),
            Err(RoundError::NoPendingGuess)
        );
        // Failed report must not touch state
        assert_eq!(round.remaining(), dict.len());
        assert!(round.history().is_empty());
    }

    #[test]
    fn all_correct_solves_regardless_of_candidates() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        // Even a word outside the dictionary solves on 11111
        round.choose(Word::new("молол").unwrap()).unwrap();
        let outcome = round.report(pattern("11111")).unwrap();

        assert_eq!(outcome, TurnOutcome::Solved);
        assert_eq!(round.phase(), Phase::Solved);
        // Candidates are left as they were
        assert_eq!(round.remaining(), dict.len());
    }

    #[test]
    fn solved_round_rejects_further_turns() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        round.choose(Word::new("сорта").unwrap()).unwrap();
        round.report(pattern("11111")).unwrap();

        assert!(round.choose(Word::new("корта").unwrap()).is_err());
        assert!(round.report(pattern("00000")).is_err());
    }

    #[test]
    fn contradiction_on_empty_candidates() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        // Demand a Щ somewhere: no candidate has one
        round.choose(Word::new("щепка").unwrap()).unwrap();
        let outcome = round.report(pattern("20000")).unwrap();

        assert_eq!(outcome, TurnOutcome::Contradiction);
        assert_eq!(round.phase(), Phase::Contradiction);
        assert_eq!(round.remaining(), 0);
    }

    #[test]
    fn undo_recovers_from_contradiction() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        round.choose(Word::new("сорта").unwrap()).unwrap();
        round.report(pattern("01111")).unwrap();

        round.choose(Word::new("щепка").unwrap()).unwrap();
        round.report(pattern("20000")).unwrap();
        assert_eq!(round.phase(), Phase::Contradiction);

        assert!(round.undo());
        assert_eq!(round.phase(), Phase::AwaitingGuess);
        assert_eq!(round.remaining(), 2);
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn undo_discards_pending_guess_first() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        round.choose(Word::new("сорта").unwrap()).unwrap();
        assert!(round.undo());
        assert_eq!(round.phase(), Phase::AwaitingGuess);
        assert!(round.history().is_empty());
        assert_eq!(round.remaining(), dict.len());
    }

    #[test]
    fn undo_on_fresh_round_is_noop() {
        let dict = dictionary();
        let mut round = Round::new(&dict);
        assert!(!round.undo());
    }

    #[test]
    fn reset_restores_everything() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        round.choose(Word::new("сорта").unwrap()).unwrap();
        round.report(pattern("01111")).unwrap();
        round.reset();

        assert_eq!(round.phase(), Phase::AwaitingGuess);
        assert_eq!(round.remaining(), dict.len());
        assert!(round.history().is_empty());
    }

    #[test]
    fn suggestions_come_from_current_candidates() {
        let dict = dictionary();
        let mut round = Round::new(&dict);

        round.choose(Word::new("сорта").unwrap()).unwrap();
        round.report(pattern("01111")).unwrap();

        let suggestions = round.suggestions(5);
        assert_eq!(suggestions.len(), 2);
        for word in &suggestions {
            assert!(round.candidates().contains(word));
        }
    }
}
