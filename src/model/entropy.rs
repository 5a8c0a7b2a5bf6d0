//! Information-gain ranking
//!
//! Scores a candidate by the Shannon entropy of the feedback it would
//! produce against every candidate, i.e. how evenly it splits the pool.

use super::scoring::ScoredWord;
use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// What a player observes after guessing against one possible answer
///
/// Answers of a different length are told apart by their tile count alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Outcome {
    Marks(Feedback),
    Length(usize),
}

fn outcome(guess: &Word, answer: &Word) -> Outcome {
    Feedback::calculate(guess, answer).map_or(Outcome::Length(answer.len()), Outcome::Marks)
}

/// Expected information, in bits, from guessing `guess` when every candidate
/// is equally likely
///
/// H = -Σ p * log₂(p) over the feedback buckets. Returns 0.0 for an empty
/// pool.
///
/// # Examples
/// ```
/// use wordle_rank::core::Word;
/// use wordle_rank::model::word_entropy;
///
/// let pool: Vec<Word> = ["abc", "abd", "xyz"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // ABC splits the pool into three singletons: log2(3) bits
/// let entropy = word_entropy(&pool[0], &pool);
/// assert!((entropy - 3f64.log2()).abs() < 1e-9);
/// ```
#[must_use]
pub fn word_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut buckets: FxHashMap<Outcome, usize> = FxHashMap::default();
    for candidate in candidates {
        *buckets.entry(outcome(guess, candidate)).or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    buckets
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Score every word by entropy over `words` and sort ascending, ties broken
/// lexicographically
///
/// Same ordering contract as [`super::score_word_list`]: the best
/// candidates are at the END.
#[must_use]
pub fn entropy_word_list(words: &[Word]) -> Vec<ScoredWord> {
    let mut scored: Vec<ScoredWord> = words
        .par_iter()
        .map(|word| ScoredWord {
            score: word_entropy(word, words),
            word: word.clone(),
        })
        .collect();

    scored.sort_by(ScoredWord::ranking_order);
    scored
}
