//! Wordly Helper
//!
//! A guess assistant for the Russian five-letter word game ("Wordly"): given
//! the feedback reported for each played guess, it keeps the set of words
//! still consistent with everything seen and suggests the most discriminating
//! next guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordly_helper::core::{FeedbackPattern, Word};
//! use wordly_helper::solver::{Round, TurnOutcome};
//! use wordly_helper::wordlists::{WORDS, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let mut round = Round::new(&dictionary);
//!
//! // Show the best opening guesses
//! let openers = round.suggestions(5);
//! assert_eq!(openers.len(), 5);
//!
//! // Play one and report the game's feedback (0 = absent, 1 = correct, 2 = present)
//! round.choose(Word::new("сорта").unwrap()).unwrap();
//! let outcome = round.report("01111".parse::<FeedbackPattern>().unwrap()).unwrap();
//! assert!(matches!(outcome, TurnOutcome::Narrowed { .. }));
//! ```

// Core domain types
pub mod core;

// The constraint filter, ranker, and round state machine
pub mod solver;

// Dictionary word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
