//! Positional letter frequency model
//!
//! Learns, from the current candidate pool, how useful each letter is at each
//! position. The weight of `letter` at position `i` is
//!
//! ```text
//! global * total[letter] / (N * max_size) + positional * count[i][letter] / N
//! ```
//!
//! where `N` is the number of words, `max_size` the longest word length and
//! `total` starts at 1 per letter (Laplace smoothing). The default weights are
//! 1 and 3, favouring letters that fit a position over letters that are merely
//! common.

use crate::core::{ALPHABET_SIZE, Word, alphabet, letter_index};
use log::trace;
use std::fmt;
use thiserror::Error;

/// Error type for model construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("cannot build a frequency model from an empty word list")]
    InvalidInput,
}

/// Relative weighting of global and positional frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelWeights {
    /// Multiplier on the whole-list letter frequency
    pub global: f64,
    /// Multiplier on the per-position letter frequency
    pub positional: f64,
}

impl ModelWeights {
    #[must_use]
    pub const fn new(global: f64, positional: f64) -> Self {
        Self { global, positional }
    }
}

impl Default for ModelWeights {
    fn default() -> Self {
        Self::new(1.0, 3.0)
    }
}

/// Letter counts across a whole word list, floored at 1 per letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalFrequencyMap {
    counts: [usize; ALPHABET_SIZE],
}

impl TotalFrequencyMap {
    /// Count for a letter, or `None` outside `a`..=`z`
    #[must_use]
    pub fn count(&self, letter: u8) -> Option<usize> {
        letter_index(letter).map(|i| self.counts[i])
    }

    /// Iterate `(letter, count)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        alphabet().zip(self.counts.iter().copied())
    }
}

/// Per-position letter weights
///
/// Every position carries a weight for all 26 letters.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFrequencyTable {
    weights: Vec<[f64; ALPHABET_SIZE]>,
}

impl PositionFrequencyTable {
    /// Number of positions (the longest word length in the source list)
    #[must_use]
    pub fn positions(&self) -> usize {
        self.weights.len()
    }

    /// Weight of `letter` at `position`
    ///
    /// Returns `None` if the position is beyond the table or the letter is
    /// outside `a`..=`z`.
    #[must_use]
    pub fn weight(&self, position: usize, letter: u8) -> Option<f64> {
        let index = letter_index(letter)?;
        self.weights.get(position).map(|row| row[index])
    }

    /// All 26 weights for a position, in alphabetical order
    #[must_use]
    pub fn row(&self, position: usize) -> Option<&[f64; ALPHABET_SIZE]> {
        self.weights.get(position)
    }

    /// Highest-weighted letter at each position
    #[must_use]
    pub fn strongest_letters(&self) -> Vec<(u8, f64)> {
        self.weights
            .iter()
            .map(|row| {
                alphabet()
                    .zip(row.iter().copied())
                    .fold((b'a', f64::MIN), |best, item| {
                        if item.1 > best.1 { item } else { best }
                    })
            })
            .collect()
    }
}

impl fmt::Display for PositionFrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (letter, weight)) in self.strongest_letters().into_iter().enumerate() {
            if position > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{weight:.3}", letter as char)?;
        }
        Ok(())
    }
}

/// Build the frequency model with the default 1:3 weighting
///
/// # Errors
/// Returns `ModelError::InvalidInput` if `words` is empty.
///
/// # Examples
/// ```
/// use wordle_rank::core::Word;
/// use wordle_rank::model::build_frequency_model;
///
/// let words = vec![Word::new("abcde").unwrap(), Word::new("abcdf").unwrap()];
/// let (table, totals) = build_frequency_model(&words).unwrap();
///
/// assert_eq!(table.positions(), 5);
/// assert_eq!(totals.count(b'a'), Some(3)); // two occurrences + floor
///
/// // 3 / (2 * 5) + 3 * (2 / 2)
/// let weight = table.weight(0, b'a').unwrap();
/// assert!((weight - 3.3).abs() < 1e-9);
/// ```
pub fn build_frequency_model(
    words: &[Word],
) -> Result<(PositionFrequencyTable, TotalFrequencyMap), ModelError> {
    build_weighted_frequency_model(words, ModelWeights::default())
}

/// Build the frequency model with explicit weights
///
/// Words shorter than the longest word contribute nothing to the trailing
/// positions.
///
/// # Errors
/// Returns `ModelError::InvalidInput` if `words` is empty.
pub fn build_weighted_frequency_model(
    words: &[Word],
    weights: ModelWeights,
) -> Result<(PositionFrequencyTable, TotalFrequencyMap), ModelError> {
    let max_size = words
        .iter()
        .map(Word::len)
        .max()
        .ok_or(ModelError::InvalidInput)?;

    let mut position_counts = vec![[0usize; ALPHABET_SIZE]; max_size];
    let mut totals = TotalFrequencyMap {
        counts: [1; ALPHABET_SIZE],
    };

    for word in words {
        for (position, &letter) in word.letters().iter().enumerate() {
            if let Some(index) = letter_index(letter) {
                totals.counts[index] += 1;
                position_counts[position][index] += 1;
            }
        }
    }

    let word_count = words.len() as f64;
    let global_denominator = word_count * max_size as f64;

    let table = PositionFrequencyTable {
        weights: position_counts
            .iter()
            .map(|counts| {
                let mut row = [0.0; ALPHABET_SIZE];
                for (index, weight) in row.iter_mut().enumerate() {
                    *weight = weights.global * totals.counts[index] as f64 / global_denominator
                        + weights.positional * counts[index] as f64 / word_count;
                }
                row
            })
            .collect(),
    };

    trace!(
        "built frequency model from {} words over {max_size} positions: {table}",
        words.len()
    );

    Ok((table, totals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_list_is_invalid_input() {
        assert_eq!(build_frequency_model(&[]), Err(ModelError::InvalidInput));
    }

    #[test]
    fn table_has_one_position_per_letter_of_longest_word() {
        let list = words(&["ab", "abcdefg", "abc"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        assert_eq!(table.positions(), 7);
        for position in 0..table.positions() {
            for letter in alphabet() {
                let weight = table.weight(position, letter).unwrap();
                assert!(weight > 0.0, "{} at {position} has no floor", letter as char);
            }
        }
        assert_eq!(table.weight(7, b'a'), None);
        assert_eq!(table.weight(0, b'A'), None);
    }

    #[test]
    fn totals_are_floored_at_one() {
        let list = words(&["abcde", "abcdf"]);
        let (_, totals) = build_frequency_model(&list).unwrap();

        assert_eq!(totals.count(b'a'), Some(3));
        assert_eq!(totals.count(b'd'), Some(3));
        assert_eq!(totals.count(b'e'), Some(2));
        assert_eq!(totals.count(b'f'), Some(2));
        assert_eq!(totals.count(b'z'), Some(1));
        assert_eq!(totals.iter().count(), ALPHABET_SIZE);
    }

    #[test]
    fn weights_follow_one_to_three_formula() {
        let list = words(&["abcde", "abcdf"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        // N = 2, max_size = 5
        // a at 0: 3 / 10 + 3 * 2 / 2
        assert_close(table.weight(0, b'a').unwrap(), 0.3 + 3.0);
        // e at 4: 2 / 10 + 3 * 1 / 2
        assert_close(table.weight(4, b'e').unwrap(), 0.2 + 1.5);
        // a at 4 (never seen there): 3 / 10 + 0
        assert_close(table.weight(4, b'a').unwrap(), 0.3);
        // z anywhere: floor only, 1 / 10
        assert_close(table.weight(2, b'z').unwrap(), 0.1);
    }

    #[test]
    fn positional_term_is_three_times_global_term() {
        // One word, one letter: both frequencies are maximal
        let list = words(&["q"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        // global: (1 + 1) / (1 * 1) = 2, positional: 3 * 1 / 1 = 3
        assert_close(table.weight(0, b'q').unwrap(), 2.0 + 3.0);

        let global_only = table.weight(0, b'x').unwrap();
        assert_close(global_only, 1.0);
    }

    #[test]
    fn shorter_words_skip_trailing_positions() {
        let list = words(&["ab", "abc"]);
        let (table, totals) = build_frequency_model(&list).unwrap();

        assert_eq!(totals.count(b'c'), Some(2));
        // c at 2: 2 / (2 * 3) + 3 * 1 / 2
        assert_close(table.weight(2, b'c').unwrap(), 2.0 / 6.0 + 1.5);
        // a never appears at 2
        assert_close(table.weight(2, b'a').unwrap(), 3.0 / 6.0);
    }

    #[test]
    fn custom_weights_are_applied() {
        let list = words(&["abcde", "abcdf"]);
        let (table, _) =
            build_weighted_frequency_model(&list, ModelWeights::new(0.1, 1.0)).unwrap();

        assert_close(table.weight(0, b'a').unwrap(), 0.1 * 0.3 + 1.0);
    }

    #[test]
    fn strongest_letters_per_position() {
        let list = words(&["crane", "crate", "slate"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        let strongest: Vec<u8> = table.strongest_letters().iter().map(|&(l, _)| l).collect();
        assert_eq!(strongest, b"crate");
    }
}
