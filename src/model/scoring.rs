//! Candidate scoring against a position frequency table

use super::frequency::PositionFrequencyTable;
use crate::core::{ALPHABET_SIZE, Word, letter_index};
use rayon::prelude::*;
use std::cmp::Ordering;
use thiserror::Error;

/// Error type for scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("unsupported character {ch:?} at position {position} in '{word}'")]
    UnsupportedCharacter {
        word: String,
        ch: char,
        position: usize,
    },
    #[error("'{word}' has a letter at position {position} but the table only has {positions} positions")]
    PositionOutOfRange {
        word: String,
        position: usize,
        positions: usize,
    },
}

/// A word paired with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub score: f64,
    pub word: Word,
}

impl ScoredWord {
    /// Ascending by score, then lexicographically by word
    #[must_use]
    pub fn ranking_order(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Score a single word
///
/// Each distinct letter contributes once, at the highest weight it reaches
/// across the positions it occupies, so repeated letters do not inflate the
/// score.
///
/// # Errors
/// Returns `ScoreError::UnsupportedCharacter` for a letter outside the
/// alphabet and `ScoreError::PositionOutOfRange` if the word is longer than
/// the table.
///
/// # Examples
/// ```
/// use wordle_rank::core::Word;
/// use wordle_rank::model::{build_frequency_model, score_word};
///
/// let words = vec![Word::new("abcde").unwrap(), Word::new("abcdf").unwrap()];
/// let (table, _) = build_frequency_model(&words).unwrap();
///
/// let score = score_word(&words[0], &table).unwrap();
/// assert!((score - 14.9).abs() < 1e-9);
/// ```
pub fn score_word(word: &Word, table: &PositionFrequencyTable) -> Result<f64, ScoreError> {
    score_text(word.text(), table)
}

/// Score raw text that has not been validated as a [`Word`]
///
/// Same rule as [`score_word`]; useful for scoring input straight from a
/// user or a file.
///
/// # Errors
/// Returns `ScoreError::UnsupportedCharacter` for anything outside `a`..=`z`
/// (uppercase included) and `ScoreError::PositionOutOfRange` if the text is
/// longer than the table.
///
/// # Examples
/// ```
/// use wordle_rank::core::Word;
/// use wordle_rank::model::{ScoreError, build_frequency_model, score_text};
///
/// let words = vec![Word::new("abcde").unwrap()];
/// let (table, _) = build_frequency_model(&words).unwrap();
///
/// assert!(score_text("abcde", &table).is_ok());
/// assert!(matches!(
///     score_text("ab3de", &table),
///     Err(ScoreError::UnsupportedCharacter { ch: '3', position: 2, .. })
/// ));
/// ```
pub fn score_text(text: &str, table: &PositionFrequencyTable) -> Result<f64, ScoreError> {
    let mut best = [None::<f64>; ALPHABET_SIZE];

    for (position, ch) in text.chars().enumerate() {
        let unsupported = || ScoreError::UnsupportedCharacter {
            word: text.to_string(),
            ch,
            position,
        };
        let letter = u8::try_from(ch).map_err(|_| unsupported())?;
        let index = letter_index(letter).ok_or_else(unsupported)?;
        let weight =
            table
                .weight(position, letter)
                .ok_or_else(|| ScoreError::PositionOutOfRange {
                    word: text.to_string(),
                    position,
                    positions: table.positions(),
                })?;

        best[index] = Some(best[index].map_or(weight, |current| current.max(weight)));
    }

    Ok(best.iter().flatten().sum())
}

/// Score every word and sort ascending by score, ties broken lexicographically
///
/// The best candidates are at the END of the returned list.
///
/// # Errors
/// Returns the first `ScoreError` encountered.
///
/// # Examples
/// ```
/// use wordle_rank::core::Word;
/// use wordle_rank::model::{build_frequency_model, score_word_list};
///
/// let words: Vec<Word> = ["crane", "crate", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let (table, _) = build_frequency_model(&words).unwrap();
///
/// let ranked = score_word_list(&words, &table).unwrap();
/// assert_eq!(ranked.last().unwrap().word.text(), "crate");
/// ```
pub fn score_word_list(
    words: &[Word],
    table: &PositionFrequencyTable,
) -> Result<Vec<ScoredWord>, ScoreError> {
    let mut scored = words
        .par_iter()
        .map(|word| {
            score_word(word, table).map(|score| ScoredWord {
                score,
                word: word.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    scored.sort_by(ScoredWord::ranking_order);
    Ok(scored)
}

/// The `n` best entries of an ascending ranking, best first
pub fn top(ranked: &[ScoredWord], n: usize) -> impl Iterator<Item = &ScoredWord> {
    ranked.iter().rev().take(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_frequency_model;

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
    fn score_sums_positional_weights() {
        let list = words(&["abcde", "abcdf"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        // a, b, c, d: 3/10 + 3 * 2/2 = 3.3 each
        // e or f:     2/10 + 3 * 1/2 = 1.7
        let abcde = score_word(&list[0], &table).unwrap();
        let abcdf = score_word(&list[1], &table).unwrap();
        assert_close(abcde, 4.0 * 3.3 + 1.7);
        assert_close(abcdf, 4.0 * 3.3 + 1.7);

        // Only the last letter differs, and both last letters weigh the same
        let shared: f64 = (0..4).map(|i| table.weight(i, list[0].letters()[i]).unwrap()).sum();
        assert_close(abcde - shared, table.weight(4, b'e').unwrap());
        assert_close(abcdf - shared, table.weight(4, b'f').unwrap());
    }

    #[test]
    fn repeated_letter_counts_once_at_its_best_position() {
        let list = words(&["speed", "erase", "eagle", "sheep"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        let speed = Word::new("speed").unwrap();
        let score = score_word(&speed, &table).unwrap();

        let best_e = table
            .weight(2, b'e')
            .unwrap()
            .max(table.weight(3, b'e').unwrap());
        let expected = table.weight(0, b's').unwrap()
            + table.weight(1, b'p').unwrap()
            + best_e
            + table.weight(4, b'd').unwrap();
        assert_close(score, expected);

        let naive: f64 = speed
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &l)| table.weight(i, l).unwrap())
            .sum();
        assert!(naive > score);
    }

    #[test]
    fn unsupported_characters_are_rejected() {
        let list = words(&["crane"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        assert_eq!(
            score_text("cr4ne", &table),
            Err(ScoreError::UnsupportedCharacter {
                word: "cr4ne".to_string(),
                ch: '4',
                position: 2
            })
        );
        assert!(matches!(
            score_text("Crane", &table),
            Err(ScoreError::UnsupportedCharacter { ch: 'C', position: 0, .. })
        ));
        assert!(matches!(
            score_text("crâne", &table),
            Err(ScoreError::UnsupportedCharacter { ch: 'â', position: 2, .. })
        ));
        assert_close(
            score_text("crane", &table).unwrap(),
            score_word(&list[0], &table).unwrap(),
        );
    }

    #[test]
    fn word_longer_than_table_is_rejected() {
        let list = words(&["abc"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        let result = score_word(&Word::new("abcd").unwrap(), &table);
        assert_eq!(
            result,
            Err(ScoreError::PositionOutOfRange {
                word: "abcd".to_string(),
                position: 3,
                positions: 3
            })
        );
    }

    #[test]
    fn ranking_is_ascending_with_lexicographic_ties() {
        let list = words(&["abcdf", "abcde", "zzzzz"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        let ranked = score_word_list(&list, &table).unwrap();
        let order: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();

        // abcde and abcdf tie; both outscore zzzzz
        assert_eq!(order, ["zzzzz", "abcde", "abcdf"]);
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn ranking_puts_best_last() {
        let list = words(&["crane", "crate", "slate", "irate", "grate"]);
        let (table, _) = build_frequency_model(&list).unwrap();

        let ranked = score_word_list(&list, &table).unwrap();
        let best = ranked.last().unwrap();
        for entry in &list {
            assert!(score_word(entry, &table).unwrap() <= best.score);
        }
    }

    #[test]
    fn top_reads_from_the_tail() {
        let list = words(&["abcdf", "abcde", "zzzzz"]);
        let (table, _) = build_frequency_model(&list).unwrap();
        let ranked = score_word_list(&list, &table).unwrap();

        let best: Vec<&str> = top(&ranked, 2).map(|s| s.word.text()).collect();
        assert_eq!(best, ["abcdf", "abcde"]);
    }

    #[test]
    fn empty_list_scores_to_empty_ranking() {
        let list = words(&["crane"]);
        let (table, _) = build_frequency_model(&list).unwrap();
        assert!(score_word_list(&[], &table).unwrap().is_empty());
    }
}
