//! Guess feedback calculation and representation
//!
//! Feedback is one mark per letter of the guess:
//! - `Absent` (gray): no unmatched occurrence of the letter remains in the target
//! - `Present` (yellow): the letter occurs elsewhere in the target
//! - `Correct` (green): the letter is in the right position

use super::Word;
use super::letters::letter_index;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Parse a single feedback character
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/`.`/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for feedback calculation and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { guess: usize, target: usize },
    #[error("invalid feedback character {ch:?} at position {position}")]
    InvalidMark { ch: char, position: usize },
    #[error("feedback must contain at least one mark")]
    Empty,
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    /// Wrap a sequence of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self { marks }
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Repeated letters are matched as a multiset: greens are assigned
    /// first, then yellows are handed out left to right while unmatched
    /// occurrences of that letter remain in the target.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_rank::core::{Feedback, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let target = Word::new("floor").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// // R(yellow) O(yellow) B(gray) O(green) T(gray)
    /// assert_eq!(feedback.to_string(), "YY-G-");
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != target.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        let mut marks = vec![Mark::Absent; guess.len()];
        let mut available = target.letter_counts();

        // First pass: greens, removed from the available pool
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                marks[i] = Mark::Correct;
                if let Some(index) = letter_index(g) {
                    available[index] = available[index].saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from what is left
        for (i, &g) in guess.letters().iter().enumerate() {
            if marks[i] != Mark::Absent {
                continue;
            }
            if let Some(slot) = letter_index(g).map(|index| &mut available[index]) {
                if *slot > 0 {
                    marks[i] = Mark::Present;
                    *slot -= 1;
                }
            }
        }

        Ok(Self { marks })
    }

    /// Feedback with every position correct
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self {
            marks: vec![Mark::Correct; len],
        }
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True when every position is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.to_emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                Mark::from_char(ch).ok_or(FeedbackError::InvalidMark { ch, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if marks.is_empty() {
            return Err(FeedbackError::Empty);
        }

        Ok(Self { marks })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            let ch = match mark {
                Mark::Correct => 'G',
                Mark::Present => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
