//! Core domain types
//!
//! Words, letter sets, guess feedback and accumulated constraints. Everything
//! here is a plain value type with no I/O.

mod constraints;
mod feedback;
mod letters;
mod word;

pub use constraints::{ConstraintError, Constraints, SizeRange, derive_constraints};
pub use feedback::{Feedback, FeedbackError, Mark};
pub use letters::{ALPHABET_SIZE, LetterSet, alphabet, letter_index};
pub use word::{Word, WordError};
