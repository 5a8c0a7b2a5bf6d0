//! Formatting utilities for terminal output

use crate::core::{Constraints, Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// Render a guess with its feedback as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| tile(letter, *mark).to_string())
        .collect()
}

fn tile(letter: u8, mark: Mark) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Longest pattern rendered by [`positional_pattern`]
const MAX_PATTERN_WIDTH: usize = 32;

/// Render known positions as a pattern like "c.a.e"
///
/// The pattern spans the shortest admissible length, or the last known
/// position if that is further, up to a fixed display width.
#[must_use]
pub fn positional_pattern(constraints: &Constraints) -> String {
    let last_known = constraints
        .positional
        .keys()
        .next_back()
        .map_or(0, |&position| position.saturating_add(1));
    let width = constraints
        .size_range
        .min
        .max(last_known)
        .min(MAX_PATTERN_WIDTH);

    (0..width)
        .map(|position| constraints.letter_at(position).map_or('.', char::from))
        .collect()
}

/// One-line summary of a constraint snapshot
#[must_use]
pub fn describe_constraints(constraints: &Constraints) -> String {
    let mut parts = vec![format!("pattern {}", positional_pattern(constraints))];

    if !constraints.included.is_empty() {
        parts.push(format!("has {}", constraints.included));
    }
    if !constraints.excluded.is_empty() {
        parts.push(format!("lacks {}", constraints.excluded));
    }

    let misplaced: Vec<String> = constraints
        .position_exclusions
        .iter()
        .filter(|(_, set)| !set.is_empty())
        .map(|(&i, set)| format!("{}!={set}", i.saturating_add(1)))
        .collect();
    if !misplaced.is_empty() {
        parts.push(misplaced.join(" "));
    }

    parts.join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
