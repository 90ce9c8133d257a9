//! The algorithmic kernel: constraint filtering, ranking, round state

pub mod filter;
pub mod ranker;
pub mod round;

pub use filter::{filter_candidates, is_consistent};
pub use ranker::{DEFAULT_SUGGESTIONS, rank_candidates};
pub use round::{Choice, Phase, Round, RoundError, TurnOutcome};
