//! Command implementations

pub mod rank;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use rank::{ConstraintArgs, RankResult, rank_candidates};
pub use simple::{PromptFeedback, run_simple};
pub use solve::solve_word;
pub use test_all::{TestAllStatistics, run_test_all};
