//! Round-based assistant loop
//!
//! Each round filters the word list against the accumulated constraints,
//! rebuilds the frequency model from the survivors and ranks them. A
//! [`FeedbackProvider`] then looks at the ranking and supplies the next
//! constraint snapshot, or asks to stop.

use super::filter::filter_word_list;
use crate::config::SolverConfig;
use crate::core::{Constraints, Word};
use crate::error::SolverError;
use crate::model::{
    ScoredWord, Strategy, build_weighted_frequency_model, entropy_word_list, score_word_list, top,
};
use log::debug;

/// A single round: the current candidates and their ranking
#[derive(Debug, Clone)]
pub struct Round {
    /// 1-based round number
    pub number: usize,
    /// Constraints the candidates were filtered with
    pub constraints: Constraints,
    /// Surviving candidates, in word-list order
    pub candidates: Vec<Word>,
    /// Candidates sorted ascending by score (best last)
    pub ranking: Vec<ScoredWord>,
}

impl Round {
    /// Highest-scoring candidate
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord> {
        self.ranking.last()
    }

    /// The `n` best candidates, best first
    pub fn top(&self, n: usize) -> impl Iterator<Item = &ScoredWord> {
        top(&self.ranking, n)
    }
}

/// What a feedback provider wants to happen next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Merge these constraints into the accumulated state and continue
    Continue(Constraints),
    /// End the session
    Stop,
}

/// Supplies new knowledge after each round
///
/// Implemented by the interactive prompt, the self-play simulator, and any
/// closure of the matching shape.
pub trait FeedbackProvider {
    /// Inspect a round and return the next step
    ///
    /// # Errors
    /// Implementations return an error when feedback cannot be obtained.
    fn next_step(&mut self, round: &Round) -> Result<Step, SolverError>;
}

impl<F> FeedbackProvider for F
where
    F: FnMut(&Round) -> Result<Step, SolverError>,
{
    fn next_step(&mut self, round: &Round) -> Result<Step, SolverError> {
        self(round)
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResult {
    /// Exactly one candidate remains
    Solved(Word),
    /// No candidate satisfies the constraints
    Exhausted,
    /// The provider asked to stop
    Stopped,
    /// The configured round limit was reached
    RoundLimit,
}

/// Summary of a finished round
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub number: usize,
    pub candidates: usize,
    pub best: Option<ScoredWord>,
}

impl From<&Round> for RoundSummary {
    fn from(round: &Round) -> Self {
        Self {
            number: round.number,
            candidates: round.candidates.len(),
            best: round.best().cloned(),
        }
    }
}

/// Result of running a session to completion
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub result: SessionResult,
    pub rounds: Vec<RoundSummary>,
    /// Candidates left when the session ended
    pub remaining: Vec<Word>,
    /// Constraints accumulated over the session
    pub constraints: Constraints,
}

/// Filters and ranks a word list round after round
pub struct Assistant<'a> {
    words: &'a [Word],
    config: SolverConfig,
}

impl<'a> Assistant<'a> {
    /// Create an assistant over a word list
    #[must_use]
    pub const fn new(words: &'a [Word], config: SolverConfig) -> Self {
        Self { words, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Words from the full list that satisfy `constraints`
    #[must_use]
    pub fn candidates(&self, constraints: &Constraints) -> Vec<Word> {
        filter_word_list(self.words, constraints)
    }

    /// Rank `candidates` with the configured strategy, best last
    ///
    /// The positional strategy builds a frequency model from the candidates
    /// themselves. An empty candidate list ranks to an empty list.
    ///
    /// # Errors
    /// Propagates model and scoring errors.
    pub fn rank(&self, candidates: &[Word]) -> Result<Vec<ScoredWord>, SolverError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        match self.config.strategy {
            Strategy::Positional => {
                let (table, _) = build_weighted_frequency_model(candidates, self.config.weights)?;
                Ok(score_word_list(candidates, &table)?)
            }
            Strategy::Entropy => Ok(entropy_word_list(candidates)),
        }
    }

    /// Filter the full list and rank the survivors in one step
    ///
    /// # Errors
    /// Propagates model and scoring errors.
    pub fn round(&self, number: usize, constraints: Constraints) -> Result<Round, SolverError> {
        let candidates = self.candidates(&constraints);
        let ranking = self.rank(&candidates)?;
        Ok(Round {
            number,
            constraints,
            candidates,
            ranking,
        })
    }

    /// Run rounds until solved, exhausted, stopped, or out of rounds
    ///
    /// Constraint snapshots from the provider are merged into a new
    /// accumulated snapshot each round; the previous candidates are then
    /// filtered again, so the pool only ever shrinks.
    ///
    /// # Errors
    /// Propagates provider, model and scoring errors.
    pub fn run<P: FeedbackProvider + ?Sized>(
        &self,
        provider: &mut P,
    ) -> Result<SessionOutcome, SolverError> {
        let mut constraints = self.config.initial_constraints();
        let mut candidates = self.candidates(&constraints);
        let mut rounds = Vec::new();
        let mut number = 1;

        let result = loop {
            match candidates.len() {
                0 => break SessionResult::Exhausted,
                1 => break SessionResult::Solved(candidates[0].clone()),
                _ => {}
            }

            if number > self.config.max_rounds {
                break SessionResult::RoundLimit;
            }

            let ranking = self.rank(&candidates)?;
            let round = Round {
                number,
                constraints,
                candidates,
                ranking,
            };

            debug!(
                "round {number}: {} candidates, best {:?}",
                round.candidates.len(),
                round.best().map(|s| s.word.text())
            );

            let step = provider.next_step(&round)?;
            rounds.push(RoundSummary::from(&round));

            let Round {
                constraints: current,
                candidates: current_candidates,
                ..
            } = round;

            match step {
                Step::Stop => {
                    constraints = current;
                    candidates = current_candidates;
                    break SessionResult::Stopped;
                }
                Step::Continue(learned) => {
                    constraints = current.combine(&learned);
                    candidates = filter_word_list(&current_candidates, &constraints);
                }
            }

            number += 1;
        };

        debug!("session ended after {} rounds: {result:?}", rounds.len());

        Ok(SessionOutcome {
            result,
            rounds,
            remaining: candidates,
            constraints,
        })
    }
}
