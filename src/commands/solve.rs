//! Word solving command
//!
//! Plays a specific target word against the assistant and returns the trace.

use crate::core::Word;
use crate::solver::{Assistant, SimulationReport, simulate};
use anyhow::{Context, Result, bail};
use log::warn;

/// Solve a specific word by self-play
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word
/// - The target length is outside the configured size range
/// - Ranking or feedback calculation fails
pub fn solve_word(assistant: &Assistant<'_>, target: &str) -> Result<SimulationReport> {
    let target = Word::new(target).with_context(|| format!("invalid target word {target:?}"))?;

    let size_range = assistant.config().size_range;
    if !size_range.contains(target.len()) {
        bail!(
            "target {target} has {} letters but the size range is {size_range}",
            target.len()
        );
    }

    if !assistant.words().contains(&target) {
        warn!("{target} is not in the word list; it cannot be found");
    }

    Ok(simulate(assistant, &target)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_succeeds() {
        let list = words_from_slice(&WORDS[..100]);
        let assistant = Assistant::new(&list, SolverConfig::default());

        let report = solve_word(&assistant, WORDS[0]).unwrap();

        assert!(report.success());
        assert!(!report.steps.is_empty());
    }

    #[test]
    fn solve_records_history() {
        let list = words_from_slice(&WORDS[..100]);
        let assistant = Assistant::new(&list, SolverConfig::default());

        let report = solve_word(&assistant, WORDS[42]).unwrap();

        for step in &report.steps {
            assert!(step.candidates_after < step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let list = words_from_slice(&WORDS[..100]);
        let assistant = Assistant::new(&list, SolverConfig::default());

        assert!(solve_word(&assistant, "cr4ne").is_err());
        assert!(solve_word(&assistant, "cranes").is_err());
    }

    #[test]
    fn solve_unknown_target_is_not_success() {
        let list = words_from_slice(&WORDS[..100]);
        let assistant = Assistant::new(&list, SolverConfig::default());

        let report = solve_word(&assistant, "xylyl").unwrap();
        assert!(!report.success());
    }
}
