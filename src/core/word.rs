//! Word representation
//!
//! A `Word` is a non-empty sequence of lowercase ASCII letters. Length is not
//! fixed here; candidate lengths are bounded by `Constraints::size_range`.

use super::letters::{ALPHABET_SIZE, LetterSet, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A validated lowercase word
///
/// Ordering is lexicographic on the text, which is the tie-break used when
/// ranking equally scored words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or contains anything
    /// other than the letters `a`..=`z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_rank::core::Word;
    ///
    /// let word = Word::new(" Crane ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some((position, ch)) = text
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_lowercase())
        {
            return Err(WordError::UnsupportedCharacter { ch, position });
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position, if the word is long enough
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.letters().get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.letters().iter().copied().collect()
    }

    /// Count of each letter, indexed by alphabet position
    ///
    /// Used for multiset matching when computing feedback.
    #[must_use]
    pub fn letter_counts(&self) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0; ALPHABET_SIZE];
        for &letter in self.letters() {
            if let Some(i) = letter_index(letter) {
                counts[i] += 1;
            }
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE\n").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_allows_other_lengths() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("wordlike").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_unsupported_characters() {
        assert_eq!(
            Word::new("cran3"),
            Err(WordError::UnsupportedCharacter { ch: '3', position: 4 })
        );
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crâne").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), Some(b'c'));
        assert_eq!(word.letter_at(4), Some(b'e'));
        assert_eq!(word.letter_at(5), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[usize::from(b'e' - b'a')], 2);
        assert_eq!(counts[usize::from(b's' - b'a')], 1);
        assert_eq!(counts[usize::from(b'z' - b'a')], 0);
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn word_letter_counts_long_runs() {
        let word = Word::new("a".repeat(300)).unwrap();
        assert_eq!(word.letter_counts()[0], 300);
    }

    #[test]
    fn word_letter_set() {
        let word = Word::new("allot").unwrap();
        assert_eq!(word.letter_set().to_string(), "alot");
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("apple").unwrap(),
            Word::new("angle").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["angle", "apple", "slate"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
