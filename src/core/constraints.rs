//! Accumulated guess constraints
//!
//! A `Constraints` value is an immutable snapshot of what is known after some
//! number of guesses. New knowledge is merged with [`Constraints::combine`],
//! which returns a fresh snapshot instead of mutating the old one.
//!
//! Per-position facts are keyed by position, so neither the size range nor a
//! far-off position allocates anything.

use super::feedback::{Feedback, FeedbackError, Mark};
use super::letters::LetterSet;
use super::Word;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Inclusive bound on candidate word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// A range admitting exactly one length
    #[must_use]
    pub const fn exactly(len: usize) -> Self {
        Self { min: len, max: len }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.min > self.max
    }

    /// Lengths admitted by both ranges
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::exactly(5)
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}..={}", self.min, self.max)
        }
    }
}

/// A detected contradiction in a constraint snapshot
///
/// Filtering never requires validation; a contradictory snapshot simply
/// matches nothing. Drivers may call [`Constraints::validate`] to report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("letter '{0}' is both included and excluded")]
    IncludedAndExcluded(char),
    #[error("letter '{letter}' is required at position {position} but excluded from the word")]
    PositionalExcluded { position: usize, letter: char },
    #[error("letter '{letter}' is both required and forbidden at position {position}")]
    PositionalForbidden { position: usize, letter: char },
    #[error("size range {0} admits no length")]
    EmptySizeRange(SizeRange),
}

/// Knowledge accumulated from prior guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Letters confirmed absent from the target
    pub excluded: LetterSet,
    /// Letters confirmed present somewhere in the target
    pub included: LetterSet,
    /// Confirmed letter by position
    pub positional: BTreeMap<usize, u8>,
    /// Letters known not to occupy a position
    pub position_exclusions: BTreeMap<usize, LetterSet>,
    /// Admissible word lengths
    pub size_range: SizeRange,
}

impl Constraints {
    /// Constraints that admit every word whose length is in `size_range`
    #[must_use]
    pub const fn unconstrained(size_range: SizeRange) -> Self {
        Self {
            excluded: LetterSet::EMPTY,
            included: LetterSet::EMPTY,
            positional: BTreeMap::new(),
            position_exclusions: BTreeMap::new(),
            size_range,
        }
    }

    /// Letter confirmed at `position`, if any
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.positional.get(&position).copied()
    }

    /// Letters forbidden at `position`
    #[must_use]
    pub fn forbidden_at(&self, position: usize) -> LetterSet {
        self.position_exclusions
            .get(&position)
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn with_included(mut self, letters: LetterSet) -> Self {
        self.included = self.included.union(letters);
        self
    }

    #[must_use]
    pub fn with_excluded(mut self, letters: LetterSet) -> Self {
        self.excluded = self.excluded.union(letters);
        self
    }

    /// Require `letter` at `position`
    #[must_use]
    pub fn with_positional(mut self, position: usize, letter: u8) -> Self {
        self.positional.insert(position, letter);
        self
    }

    /// Forbid each of `letters` at `position`
    #[must_use]
    pub fn with_position_exclusion(mut self, position: usize, letters: LetterSet) -> Self {
        let forbidden = self.position_exclusions.entry(position).or_default();
        *forbidden = forbidden.union(letters);
        self
    }

    /// Derive constraints from the feedback a guess received
    ///
    /// - `Correct` locks the letter into its position and marks it included.
    /// - `Present` marks it included and forbids it at that position.
    /// - `Absent` excludes the letter from the word, unless the same guess
    ///   also earned a `Correct` or `Present` for it; then only that position
    ///   is forbidden.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the feedback length differs
    /// from the guess length.
    pub fn from_feedback(guess: &Word, feedback: &Feedback) -> Result<Self, FeedbackError> {
        if guess.len() != feedback.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                target: feedback.len(),
            });
        }

        let confirmed: LetterSet = guess
            .letters()
            .iter()
            .zip(feedback.marks())
            .filter(|(_, mark)| **mark != Mark::Absent)
            .map(|(&letter, _)| letter)
            .collect();

        let mut constraints = Self::unconstrained(SizeRange::exactly(guess.len()));
        for (position, (&letter, mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => {
                    constraints.positional.insert(position, letter);
                    constraints.included.insert(letter);
                }
                Mark::Present => {
                    constraints.included.insert(letter);
                    constraints
                        .position_exclusions
                        .entry(position)
                        .or_default()
                        .insert(letter);
                }
                Mark::Absent if confirmed.contains(letter) => {
                    constraints
                        .position_exclusions
                        .entry(position)
                        .or_default()
                        .insert(letter);
                }
                Mark::Absent => constraints.excluded.insert(letter),
            }
        }

        Ok(constraints)
    }

    /// Merge two snapshots into a new one
    ///
    /// Letter sets and position exclusions are unioned, size ranges are
    /// intersected, and a positional letter set in `newer` takes precedence.
    #[must_use]
    pub fn combine(&self, newer: &Self) -> Self {
        let mut positional = self.positional.clone();
        positional.extend(&newer.positional);

        let mut position_exclusions = self.position_exclusions.clone();
        for (&position, &letters) in &newer.position_exclusions {
            let forbidden = position_exclusions.entry(position).or_default();
            *forbidden = forbidden.union(letters);
        }

        Self {
            excluded: self.excluded.union(newer.excluded),
            included: self.included.union(newer.included),
            positional,
            position_exclusions,
            size_range: self.size_range.intersect(newer.size_range),
        }
    }

    /// Report the first contradiction found, if any
    ///
    /// # Errors
    /// Returns a `ConstraintError` describing the contradiction.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if self.size_range.is_empty() {
            return Err(ConstraintError::EmptySizeRange(self.size_range));
        }

        if let Some(letter) = self.included.intersection(self.excluded).iter().next() {
            return Err(ConstraintError::IncludedAndExcluded(char::from(letter)));
        }

        for (&position, &letter) in &self.positional {
            if self.excluded.contains(letter) {
                return Err(ConstraintError::PositionalExcluded {
                    position,
                    letter: char::from(letter),
                });
            }
            if self.forbidden_at(position).contains(letter) {
                return Err(ConstraintError::PositionalForbidden {
                    position,
                    letter: char::from(letter),
                });
            }
        }

        Ok(())
    }

    /// True when nothing beyond the size range is known
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.included.is_empty()
            && self.excluded.is_empty()
            && self.positional.is_empty()
            && self.position_exclusions.values().all(|set| set.is_empty())
    }
}

impl Default for Constraints {
    /// Unconstrained five-letter words
    fn default() -> Self {
        Self::unconstrained(SizeRange::default())
    }
}

/// Constraints a guess would reveal if `target` were the answer
///
/// Used for self-play and simulation.
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_rank::core::{derive_constraints, Word};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
/// let constraints = derive_constraints(&guess, &target).unwrap();
///
/// assert_eq!(constraints.letter_at(2), Some(b'a'));
/// assert_eq!(constraints.excluded.to_string(), "cnr");
/// ```
pub fn derive_constraints(guess: &Word, target: &Word) -> Result<Constraints, FeedbackError> {
    let feedback = Feedback::calculate(guess, target)?;
    Constraints::from_feedback(guess, &feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn unconstrained_allocates_nothing_per_position() {
        let constraints = Constraints::unconstrained(SizeRange::new(5, usize::MAX));
        assert!(constraints.positional.is_empty());
        assert!(constraints.position_exclusions.is_empty());
        assert!(constraints.is_unconstrained());
        assert_eq!(constraints.letter_at(usize::MAX - 1), None);
    }

    #[test]
    fn far_positions_are_stored_sparsely() {
        let constraints = Constraints::default()
            .with_positional(usize::MAX, b'q')
            .with_position_exclusion(99_999_999_999_999, LetterSet::from("a"));

        assert_eq!(constraints.positional.len(), 1);
        assert_eq!(constraints.letter_at(usize::MAX), Some(b'q'));
        assert_eq!(constraints.forbidden_at(99_999_999_999_999).to_string(), "a");
        assert!(constraints.forbidden_at(0).is_empty());
    }

    #[test]
    fn defaults_are_independent() {
        let mut first = Constraints::unconstrained(SizeRange::default());
        let second = Constraints::unconstrained(SizeRange::default());

        first.position_exclusions.entry(0).or_default().insert(b'x');
        assert!(second.forbidden_at(0).is_empty());
    }

    #[test]
    fn builder_records_per_position_facts() {
        let constraints = Constraints::default()
            .with_positional(4, b'e')
            .with_position_exclusion(1, LetterSet::from("r"))
            .with_position_exclusion(1, LetterSet::from("s"));

        assert_eq!(constraints.letter_at(4), Some(b'e'));
        assert_eq!(constraints.letter_at(3), None);
        assert_eq!(constraints.forbidden_at(1).to_string(), "rs");
    }

    #[test]
    fn from_feedback_basic_marks() {
        let feedback: Feedback = "G-Y--".parse().unwrap();
        let constraints = Constraints::from_feedback(&word("crane"), &feedback).unwrap();

        assert_eq!(constraints.positional, BTreeMap::from([(0, b'c')]));
        assert_eq!(constraints.included.to_string(), "ac");
        assert_eq!(constraints.excluded.to_string(), "enr");
        assert!(constraints.forbidden_at(2).contains(b'a'));
        assert_eq!(constraints.size_range, SizeRange::exactly(5));
    }

    #[test]
    fn from_feedback_repeated_letter_not_excluded() {
        // ALLOT vs APPLE: second L is gray but the first is yellow
        let constraints = derive_constraints(&word("allot"), &word("apple")).unwrap();

        assert!(constraints.included.contains(b'l'));
        assert!(!constraints.excluded.contains(b'l'));
        assert!(constraints.forbidden_at(1).contains(b'l'));
        assert!(constraints.forbidden_at(2).contains(b'l'));
        assert_eq!(constraints.excluded.to_string(), "ot");
        assert!(constraints.validate().is_ok());
    }

    #[test]
    fn from_feedback_length_mismatch() {
        let feedback: Feedback = "GG".parse().unwrap();
        assert!(Constraints::from_feedback(&word("crane"), &feedback).is_err());
    }

    #[test]
    fn derived_constraints_never_contradict_themselves() {
        let words = ["speed", "erase", "robot", "floor", "llama", "hello", "allot"];
        for guess in words {
            for target in words {
                let constraints = derive_constraints(&word(guess), &word(target)).unwrap();
                assert!(
                    constraints.validate().is_ok(),
                    "{guess} vs {target} produced {constraints:?}"
                );
            }
        }
    }

    #[test]
    fn combine_unions_and_prefers_newer_positional() {
        let older = Constraints::default()
            .with_included(LetterSet::from("a"))
            .with_excluded(LetterSet::from("x"))
            .with_positional(0, b'c')
            .with_position_exclusion(1, LetterSet::from("a"));
        let newer = Constraints::default()
            .with_included(LetterSet::from("e"))
            .with_positional(4, b'e')
            .with_position_exclusion(1, LetterSet::from("r"));

        let merged = older.combine(&newer);

        assert_eq!(merged.included.to_string(), "ae");
        assert_eq!(merged.excluded.to_string(), "x");
        assert_eq!(merged.letter_at(0), Some(b'c'));
        assert_eq!(merged.letter_at(4), Some(b'e'));
        assert_eq!(merged.forbidden_at(1).to_string(), "ar");

        // The inputs are untouched snapshots
        assert_eq!(older.included.to_string(), "a");
        assert_eq!(newer.letter_at(0), None);
    }

    #[test]
    fn combine_newer_positional_letter_wins() {
        let older = Constraints::default().with_positional(2, b'a');
        let newer = Constraints::default().with_positional(2, b'o');
        assert_eq!(older.combine(&newer).letter_at(2), Some(b'o'));
    }

    #[test]
    fn combine_intersects_size_ranges() {
        let wide = Constraints::unconstrained(SizeRange::new(3, 7));
        let narrow = Constraints::unconstrained(SizeRange::new(5, 9));
        assert_eq!(wide.combine(&narrow).size_range, SizeRange::new(5, 7));
    }

    #[test]
    fn validate_detects_contradictions() {
        let overlap = Constraints::default()
            .with_included(LetterSet::from("a"))
            .with_excluded(LetterSet::from("a"));
        assert_eq!(
            overlap.validate(),
            Err(ConstraintError::IncludedAndExcluded('a'))
        );

        let forbidden = Constraints::default()
            .with_positional(2, b'r')
            .with_position_exclusion(2, LetterSet::from("r"));
        assert_eq!(
            forbidden.validate(),
            Err(ConstraintError::PositionalForbidden {
                position: 2,
                letter: 'r'
            })
        );

        let excluded = Constraints::default()
            .with_positional(0, b'q')
            .with_excluded(LetterSet::from("q"));
        assert_eq!(
            excluded.validate(),
            Err(ConstraintError::PositionalExcluded {
                position: 0,
                letter: 'q'
            })
        );

        let empty = Constraints::unconstrained(SizeRange::new(6, 5));
        assert!(matches!(
            empty.validate(),
            Err(ConstraintError::EmptySizeRange(_))
        ));
    }
}
