//! Self-play against a known target
//!
//! Guesses the best-ranked candidate each round and feeds back the
//! constraints that guess reveals about the target.

use super::engine::{Assistant, FeedbackProvider, Round, SessionResult, Step};
use super::filter::filter_word_list;
use crate::core::{Constraints, Feedback, SizeRange, Word};
use crate::error::SolverError;

/// A single guess made during self-play
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Feedback provider that knows the answer
#[derive(Debug, Clone)]
pub struct SelfPlay {
    target: Word,
    steps: Vec<GuessStep>,
}

impl SelfPlay {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn steps(&self) -> &[GuessStep] {
        &self.steps
    }
}

impl FeedbackProvider for SelfPlay {
    fn next_step(&mut self, round: &Round) -> Result<Step, SolverError> {
        let Some(best) = round.best() else {
            return Ok(Step::Stop);
        };

        let feedback = Feedback::calculate(&best.word, &self.target)?;
        let learned = Constraints::from_feedback(&best.word, &feedback)?;
        let candidates_after =
            filter_word_list(&round.candidates, &round.constraints.combine(&learned)).len();

        self.steps.push(GuessStep {
            word: best.word.clone(),
            feedback,
            score: best.score,
            candidates_before: round.candidates.len(),
            candidates_after,
        });

        Ok(Step::Continue(learned))
    }
}

/// Result of solving one target by self-play
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub result: SessionResult,
}

impl SimulationReport {
    /// True when the assistant narrowed the pool down to the target
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(&self.result, SessionResult::Solved(word) if *word == self.target)
    }

    /// Guesses needed to play the target, including the final guess when
    /// the last candidate was never actually played
    #[must_use]
    pub fn guesses_to_solve(&self) -> Option<usize> {
        if !self.success() {
            return None;
        }
        let played_target = self
            .steps
            .last()
            .is_some_and(|step| step.feedback.is_solved());
        Some(self.steps.len() + usize::from(!played_target))
    }
}

/// Play `target` against the assistant's word list
///
/// Only words of the target's length are considered; a target outside the
/// configured size range ends `Exhausted`.
///
/// # Errors
/// Propagates model, scoring and feedback errors.
///
/// # Examples
/// ```
/// use wordle_rank::config::SolverConfig;
/// use wordle_rank::core::Word;
/// use wordle_rank::solver::{Assistant, simulate};
///
/// let words: Vec<Word> = ["crane", "slate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let assistant = Assistant::new(&words, SolverConfig::default());
///
/// let report = simulate(&assistant, &words[3]).unwrap();
/// assert!(report.success());
/// assert!(report.guesses_to_solve().unwrap() <= words.len());
/// ```
pub fn simulate(assistant: &Assistant<'_>, target: &Word) -> Result<SimulationReport, SolverError> {
    // The target's length is known up front, so only same-length words are guessed
    let config = assistant.config().clone();
    let size_range = config.size_range.intersect(SizeRange::exactly(target.len()));
    let sized = Assistant::new(assistant.words(), config.with_size_range(size_range));

    let mut player = SelfPlay::new(target.clone());
    let outcome = sized.run(&mut player)?;

    Ok(SimulationReport {
        target: player.target,
        steps: player.steps,
        result: outcome.result,
    })
}
