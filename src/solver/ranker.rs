//! Candidate ranking by distinct-letter frequency
//!
//! A greedy one-step heuristic: letters that appear in many remaining
//! candidates discriminate the most, so words covering the most popular
//! distinct letters score highest. Much cheaper than evaluating every
//! possible feedback partition, and close enough in practice for a helper
//! that suggests a short list rather than a single forced line.

use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Default length of the suggestion list
pub const DEFAULT_SUGGESTIONS: usize = 5;

/// Count, for each letter, how many candidates contain it at least once
///
/// A candidate contributes at most 1 per letter no matter how often the
/// letter repeats in it, so the table rewards breadth across the pool.
#[must_use]
pub fn letter_frequencies(candidates: &[Word]) -> FxHashMap<char, usize> {
    let mut freq = FxHashMap::default();
    for word in candidates {
        for letter in word.distinct_letters() {
            *freq.entry(letter).or_insert(0) += 1;
        }
    }
    freq
}

/// Score one word against a frequency table
///
/// The sum over the word's distinct letters of their frequencies; repeated
/// letters count once, so they earn no artificial boost.
#[must_use]
pub fn score_word(word: &Word, frequencies: &FxHashMap<char, usize>) -> usize {
    word.distinct_letters()
        .map(|letter| frequencies.get(&letter).copied().unwrap_or(0))
        .sum()
}

/// Rank candidates and return the best `top_n`
///
/// Sorted by score descending; equal scores are ordered lexicographically
/// ascending, which makes the output fully deterministic. Returns fewer than
/// `top_n` words when the candidate set is smaller.
///
/// # Examples
/// ```
/// use wordly_helper::core::Word;
/// use wordly_helper::solver::ranker::rank_candidates;
///
/// let candidates = vec![
///     Word::new("аорта").unwrap(),
///     Word::new("корта").unwrap(),
///     Word::new("ссора").unwrap(),
/// ];
/// let best = rank_candidates(&candidates, 2);
/// assert_eq!(best.len(), 2);
/// ```
#[must_use]
pub fn rank_candidates(candidates: &[Word], top_n: usize) -> Vec<Word> {
    let frequencies = letter_frequencies(candidates);

    let mut scored: Vec<(usize, &Word)> = candidates
        .par_iter()
        .map(|word| (score_word(word, &frequencies), word))
        .collect();

    scored.sort_unstable_by(|(score_a, word_a), (score_b, word_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| word_a.text().cmp(word_b.text()))
    });

    scored
        .into_iter()
        .take(top_n)
        .map(|(_, word)| word.clone())
        .collect()
}
