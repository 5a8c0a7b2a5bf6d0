//! Wordle Rank
//!
//! A five-letter word puzzle assistant that ranks candidate words by
//! positional letter frequency and narrows them with the feedback from each
//! guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rank::core::{Word, derive_constraints};
//! use wordle_rank::model::{build_frequency_model, score_word_list};
//! use wordle_rank::solver::filter_word_list;
//!
//! let words: Vec<Word> = ["crane", "slate", "crate", "grate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! // What guessing CRANE reveals when the answer is CRATE
//! let learned = derive_constraints(&words[0], &words[2]).unwrap();
//! let candidates = filter_word_list(&words, &learned);
//! assert_eq!(candidates.len(), 1);
//!
//! // Rank the full list; the best candidate comes last
//! let (table, _) = build_frequency_model(&words).unwrap();
//! let ranked = score_word_list(&words, &table).unwrap();
//! println!("best: {}", ranked.last().unwrap().word);
//! ```

// Core domain types
pub mod core;

// Run configuration
pub mod config;

// Library error type
pub mod error;

// Letter frequency model and scoring
pub mod model;

// Filtering and the round loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
