//! Letter frequency model and candidate scoring
//!
//! The model is rebuilt from the surviving candidates every round; scores are
//! only meaningful relative to the table they were computed against. An
//! entropy ranking over the same candidates is available as an alternative.

mod entropy;
mod frequency;
mod scoring;
mod strategy;

pub use entropy::{entropy_word_list, word_entropy};
pub use frequency::{
    ModelError, ModelWeights, PositionFrequencyTable, TotalFrequencyMap, build_frequency_model,
    build_weighted_frequency_model,
};
pub use scoring::{ScoreError, ScoredWord, score_text, score_word, score_word_list, top};
pub use strategy::{Strategy, UnknownStrategy};
