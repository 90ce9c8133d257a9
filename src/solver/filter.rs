//! Constraint filter: which candidates survive an observed feedback
//!
//! The consistency check runs three passes over the five positions, in order,
//! against a per-letter remaining-count budget built from the candidate. The
//! ordering is what makes repeated letters in a guess come out right: a guess
//! with a doubled letter where one occurrence is Correct and the other Absent
//! must consume the candidate's single occurrence before the Absent pass
//! checks that nothing is left.

use crate::core::{Feedback, FeedbackPattern, Word};
use rayon::prelude::*;

/// Check whether `candidate` is consistent with one observed (guess, pattern) pair
///
/// Pass order:
/// 1. `Correct` positions must match exactly; each consumes one occurrence
///    of the letter from the candidate's budget.
/// 2. `Present` positions must not match exactly and must find a remaining
///    occurrence in the budget, which they consume.
/// 3. `Absent` positions must find the budget for their letter exhausted.
///
/// # Examples
/// ```
/// use wordly_helper::core::{FeedbackPattern, Word};
/// use wordly_helper::solver::filter::is_consistent;
///
/// let guess = Word::new("сорта").unwrap();
/// let pattern = FeedbackPattern::parse("01111").unwrap();
///
/// assert!(is_consistent(&Word::new("корта").unwrap(), &guess, &pattern));
/// assert!(!is_consistent(&Word::new("сорта").unwrap(), &guess, &pattern));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, pattern: &FeedbackPattern) -> bool {
    let mut budget = candidate.char_counts();

    // Pass 1: exact matches consume the budget
    for i in 0..5 {
        if pattern.symbol_at(i) == Feedback::Correct {
            if candidate.char_at(i) != guess.char_at(i) {
                return false;
            }
            if let Some(count) = budget.get_mut(&guess.char_at(i)) {
                *count -= 1;
            }
        }
    }

    // Pass 2: present letters must exist elsewhere, and not in this spot
    for i in 0..5 {
        if pattern.symbol_at(i) == Feedback::Present {
            if candidate.char_at(i) == guess.char_at(i) {
                return false;
            }
            match budget.get_mut(&guess.char_at(i)) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
    }

    // Pass 3: absent letters must have no unaccounted occurrence left
    for i in 0..5 {
        if pattern.symbol_at(i) == Feedback::Absent
            && budget.get(&guess.char_at(i)).copied().unwrap_or(0) > 0
        {
            return false;
        }
    }

    true
}

/// Filter a candidate set down to the words consistent with one observation
///
/// Preserves relative order and never mutates its inputs. An empty result is
/// a legitimate outcome (a data-entry mistake somewhere in the history, or a
/// word missing from the dictionary), not an error.
#[must_use]
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    pattern: &FeedbackPattern,
) -> Vec<Word> {
    candidates
        .par_iter()
        .filter(|candidate| is_consistent(candidate, guess, pattern))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn all_correct_keeps_only_the_guess() {
        let candidates = words(&["сорта", "корта", "аорта"]);
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::SOLVED;

        let remaining = filter_candidates(&candidates, &guess, &pattern);
        assert_eq!(remaining, words(&["сорта"]));
    }

    #[test]
    fn correct_position_mismatch_rejects() {
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("10000").unwrap();

        // С must be at position 0, and no О/Р/Т/А anywhere
        assert!(is_consistent(&Word::new("смесь").unwrap(), &guess, &pattern));
        assert!(!is_consistent(
            &Word::new("весна").unwrap(),
            &guess,
            &pattern
        ));
    }

    #[test]
    fn present_rejects_same_position() {
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("20000").unwrap();

        // С somewhere, but not at position 0
        assert!(is_consistent(&Word::new("мысль").unwrap(), &guess, &pattern));
        assert!(!is_consistent(
            &Word::new("свеча").unwrap(),
            &guess,
            &pattern
        ));
    }

    #[test]
    fn present_requires_an_occurrence() {
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("20000").unwrap();

        // No С at all
        assert!(!is_consistent(
            &Word::new("метла").unwrap(),
            &guess,
            &pattern
        ));
    }

    #[test]
    fn absent_rejects_any_unaccounted_occurrence() {
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("00000").unwrap();

        assert!(!is_consistent(
            &Word::new("весна").unwrap(),
            &guess,
            &pattern
        ));
        assert!(is_consistent(&Word::new("зелье").unwrap(), &guess, &pattern));
    }

    #[test]
    fn end_to_end_scenario() {
        // Guess СОРТА, feedback: С absent, О Р Т А all correct.
        // АОРТА and КОРТА satisfy every constraint; СОРТА still has its С,
        // ПОРТЫ misses the final А, ВОРОТ has О where Т must be.
        let candidates = words(&["аорта", "сорта", "корта", "порты", "ворот"]);
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("01111").unwrap();

        let remaining = filter_candidates(&candidates, &guess, &pattern);
        assert_eq!(remaining, words(&["аорта", "корта"]));
    }

    #[test]
    fn repeated_letter_guess_keeps_true_target() {
        // The honestly-computed pattern for МОЛОЛ vs КОЛОС must never
        // reject КОЛОС itself.
        let guess = Word::new("молол").unwrap();
        let target = Word::new("колос").unwrap();
        let pattern = FeedbackPattern::evaluate(&guess, &target);

        assert_eq!(pattern.digits(), "01110");
        assert!(is_consistent(&target, &guess, &pattern));
    }

    #[test]
    fn doubled_letter_correct_and_absent() {
        // МОЛОЛ with Л correct at position 2 and Л absent at position 4:
        // КОЛОС, with its single Л in the matching spot, survives; ВОРОТ
        // has no Л and fails the Correct pass; КОЛОЛ carries a second Л
        // that the Absent pass cannot account for.
        let guess = Word::new("молол").unwrap();
        let pattern = FeedbackPattern::parse("01110").unwrap();

        assert!(is_consistent(&Word::new("колос").unwrap(), &guess, &pattern));
        assert!(!is_consistent(
            &Word::new("ворот").unwrap(),
            &guess,
            &pattern
        ));
        assert!(!is_consistent(
            &Word::new("колол").unwrap(),
            &guess,
            &pattern
        ));
    }

    #[test]
    fn filtering_is_idempotent() {
        let candidates = words(&["аорта", "сорта", "корта", "порты", "ворот"]);
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("01111").unwrap();

        let once = filter_candidates(&candidates, &guess, &pattern);
        let twice = filter_candidates(&once, &guess, &pattern);
        assert_eq!(once, twice);
    }

    #[test]
    fn filtering_never_grows_the_set() {
        let candidates = words(&["аорта", "сорта", "корта", "порты", "ворот"]);
        let guess = Word::new("ворот").unwrap();

        for digits in ["00000", "11111", "22222", "01010", "20102"] {
            let pattern = FeedbackPattern::parse(digits).unwrap();
            let remaining = filter_candidates(&candidates, &guess, &pattern);
            assert!(remaining.len() <= candidates.len(), "pattern {digits}");
        }
    }

    #[test]
    fn true_target_always_survives_honest_feedback() {
        let candidates = words(&["аорта", "сорта", "корта", "порты", "ворот", "колос"]);
        let guesses = words(&["молол", "сорта", "ссора", "колба"]);

        for target in &candidates {
            for guess in &guesses {
                let pattern = FeedbackPattern::evaluate(guess, target);
                let remaining = filter_candidates(&candidates, guess, &pattern);
                assert!(
                    remaining.contains(target),
                    "{target} wrongly rejected after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn contradictory_pattern_yields_empty_set() {
        // First С correct, second С present: demands two С's in different
        // spots, which none of these words has.
        let candidates = words(&["весна", "метла", "свеча", "щепка"]);
        let guess = Word::new("ссора").unwrap();
        let pattern = FeedbackPattern::parse("12000").unwrap();

        let remaining = filter_candidates(&candidates, &guess, &pattern);
        assert!(remaining.is_empty());
    }

    #[test]
    fn filter_preserves_relative_order() {
        let candidates = words(&["порты", "корта", "аорта", "ворот"]);
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("01111").unwrap();

        let remaining = filter_candidates(&candidates, &guess, &pattern);
        assert_eq!(remaining, words(&["корта", "аорта"]));
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let candidates = words(&["аорта", "сорта"]);
        let snapshot = candidates.clone();
        let guess = Word::new("сорта").unwrap();
        let pattern = FeedbackPattern::parse("01111").unwrap();

        let _ = filter_candidates(&candidates, &guess, &pattern);
        assert_eq!(candidates, snapshot);
    }
}
