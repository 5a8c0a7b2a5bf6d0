//! One-shot rank command
//!
//! Builds a constraint snapshot from command-line flags, filters the word
//! list with it and ranks what is left.

use crate::core::{ConstraintError, Constraints, LetterSet, SizeRange};
use crate::model::ScoredWord;
use crate::solver::Assistant;
use anyhow::{Context, Result, bail};
use log::warn;

/// Constraints as typed on the command line
#[derive(Debug, Clone, Default)]
pub struct ConstraintArgs {
    /// Letters known to be in the word, e.g. "ae"
    pub include: String,
    /// Letters known to be absent, e.g. "rst"
    pub exclude: String,
    /// Known positions, e.g. "c.a.e" (`.`, `_`, `?` or `*` for unknown)
    pub pattern: Option<String>,
    /// Letters forbidden at a 1-based position, e.g. "2=rs"
    pub not_at: Vec<String>,
}

impl ConstraintArgs {
    /// Convert to a constraint snapshot within `size_range`
    ///
    /// # Errors
    /// Returns an error if a letter list, pattern or `POS=LETTERS` entry is
    /// malformed.
    pub fn to_constraints(&self, size_range: SizeRange) -> Result<Constraints> {
        let mut constraints = Constraints::unconstrained(size_range)
            .with_included(parse_letters(&self.include).context("invalid --include")?)
            .with_excluded(parse_letters(&self.exclude).context("invalid --exclude")?);

        if let Some(pattern) = &self.pattern {
            for (position, slot) in parse_pattern(pattern)?.into_iter().enumerate() {
                if let Some(letter) = slot {
                    constraints = constraints.with_positional(position, letter);
                }
            }
        }

        for entry in &self.not_at {
            let (position, letters) = parse_position_exclusion(entry)?;
            constraints = constraints.with_position_exclusion(position, letters);
        }

        Ok(constraints)
    }
}

fn parse_letters(letters: &str) -> Result<LetterSet> {
    let letters = letters.trim().to_lowercase();
    if let Some(bad) = letters.chars().find(|c| !c.is_ascii_lowercase()) {
        bail!("{bad:?} is not a letter");
    }
    Ok(LetterSet::from(letters.as_str()))
}

/// Parse "c.a.e" into per-position letters
///
/// # Errors
/// Returns an error for characters that are neither letters nor placeholders.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Option<u8>>> {
    pattern
        .trim()
        .to_lowercase()
        .chars()
        .enumerate()
        .map(|(position, ch)| match ch {
            '.' | '_' | '?' | '*' => Ok(None),
            c if c.is_ascii_lowercase() => Ok(Some(c as u8)),
            c => bail!("invalid pattern character {c:?} at position {}", position + 1),
        })
        .collect()
}

/// Parse "2=rs" into a 0-based position and a letter set
///
/// # Errors
/// Returns an error if the entry is not `POS=LETTERS` with `POS >= 1`.
pub fn parse_position_exclusion(entry: &str) -> Result<(usize, LetterSet)> {
    let (position, letters) = entry
        .split_once('=')
        .with_context(|| format!("expected POS=LETTERS, got {entry:?}"))?;
    let position: usize = position
        .trim()
        .parse()
        .with_context(|| format!("invalid position in {entry:?}"))?;
    if position == 0 {
        bail!("positions start at 1 in {entry:?}");
    }
    let letters = parse_letters(letters).with_context(|| format!("invalid letters in {entry:?}"))?;
    Ok((position - 1, letters))
}

/// Result of a one-shot ranking
#[derive(Debug, Clone)]
pub struct RankResult {
    pub constraints: Constraints,
    /// Number of candidates that satisfy the constraints
    pub candidates: usize,
    /// The best candidates, best first
    pub top: Vec<ScoredWord>,
    /// Set when the constraints contradict each other
    pub contradiction: Option<ConstraintError>,
}

/// Filter and rank the assistant's word list against command-line constraints
///
/// # Errors
/// Returns an error if the arguments are malformed or ranking fails.
pub fn rank_candidates(assistant: &Assistant<'_>, args: &ConstraintArgs) -> Result<RankResult> {
    let config = assistant.config();
    let constraints = args.to_constraints(config.size_range)?;

    let contradiction = constraints.validate().err();
    if let Some(e) = &contradiction {
        warn!("contradictory constraints: {e}");
    }

    let round = assistant.round(1, constraints)?;
    let top = round.top(config.display_count).cloned().collect();

    Ok(RankResult {
        candidates: round.candidates.len(),
        constraints: round.constraints,
        top,
        contradiction,
    })
}
