//! Command implementations

pub mod assist;
pub mod solve;
pub mod suggest;

pub use assist::run_assist;
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use suggest::{SuggestResult, parse_turn, run_suggest};
