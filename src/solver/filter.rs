//! Candidate filtering against accumulated constraints

use crate::core::{Constraints, Word};

/// Check whether a word satisfies every constraint
///
/// Checks run in order: length, included letters, excluded letters,
/// confirmed positions, forbidden positions. Per-position constraints beyond
/// the end of the word are ignored.
///
/// Contradictory constraints are not an error; they just match nothing.
///
/// # Examples
/// ```
/// use wordle_rank::core::{Constraints, LetterSet, Word};
/// use wordle_rank::solver::filter_word;
///
/// let constraints = Constraints::default().with_excluded(LetterSet::from("p"));
/// assert!(filter_word(&Word::new("angle").unwrap(), &constraints));
/// assert!(!filter_word(&Word::new("apple").unwrap(), &constraints));
/// ```
#[must_use]
pub fn filter_word(word: &Word, constraints: &Constraints) -> bool {
    if !constraints.size_range.contains(word.len()) {
        return false;
    }

    if !constraints.included.iter().all(|letter| word.has_letter(letter)) {
        return false;
    }

    if constraints.excluded.iter().any(|letter| word.has_letter(letter)) {
        return false;
    }

    if !constraints
        .positional
        .iter()
        .all(|(&position, &required)| word.letter_at(position).is_none_or(|l| l == required))
    {
        return false;
    }

    constraints
        .position_exclusions
        .iter()
        .all(|(&position, forbidden)| {
            word.letter_at(position)
                .is_none_or(|l| !forbidden.contains(l))
        })
}

/// Keep the words that satisfy `constraints`, preserving input order
///
/// # Examples
/// ```
/// use wordle_rank::core::{Constraints, Word};
/// use wordle_rank::solver::filter_word_list;
///
/// let words: Vec<Word> = ["apple", "angle", "allot"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let constraints = Constraints::default().with_positional(4, b'e');
///
/// let kept = filter_word_list(&words, &constraints);
/// assert_eq!(kept, &words[..2]);
/// ```
#[must_use]
pub fn filter_word_list(words: &[Word], constraints: &Constraints) -> Vec<Word> {
    words
        .iter()
        .filter(|word| filter_word(word, constraints))
        .cloned()
        .collect()
}
