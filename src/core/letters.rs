//! Alphabet helpers and a compact letter set
//!
//! Letters are stored as lowercase ASCII bytes. A `LetterSet` packs the 26
//! letters into the low bits of a `u32`.

use std::fmt;

/// Number of letters in the supported alphabet (`a`..=`z`)
pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter within the alphabet
///
/// Returns `None` for anything outside `a`..=`z`.
///
/// # Examples
/// ```
/// use wordle_rank::core::letter_index;
///
/// assert_eq!(letter_index(b'a'), Some(0));
/// assert_eq!(letter_index(b'z'), Some(25));
/// assert_eq!(letter_index(b'A'), None);
/// ```
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Iterate over the alphabet in order
pub fn alphabet() -> impl Iterator<Item = u8> {
    b'a'..=b'z'
}

/// A set of lowercase letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Return a copy of this set with `letter` added
    ///
    /// Bytes outside `a`..=`z` are ignored.
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        match letter_index(letter) {
            Some(i) => Self(self.0 | (1 << i as u32)),
            None => self,
        }
    }

    /// Add a letter in place
    pub fn insert(&mut self, letter: u8) {
        *self = self.with(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(i) => self.0 & (1 << i as u32) != 0,
            None => false,
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        alphabet().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl From<&str> for LetterSet {
    /// Collect the lowercase letters of a string, ignoring everything else
    fn from(letters: &str) -> Self {
        letters.bytes().collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
