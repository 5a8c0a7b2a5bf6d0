//! Candidate filtering and the round-based assistant
//!
//! The filter is a pure function of a word list and a constraint snapshot.
//! The assistant drives rounds of filter, model and rank, delegating the
//! next snapshot to a feedback provider.

mod engine;
mod filter;
mod selfplay;

pub use engine::{
    Assistant, FeedbackProvider, Round, RoundSummary, SessionOutcome, SessionResult, Step,
};
pub use filter::{filter_word, filter_word_list};
pub use selfplay::{GuessStep, SelfPlay, SimulationReport, simulate};
