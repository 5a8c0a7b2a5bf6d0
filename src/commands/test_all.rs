//! Test all answers - self-play evaluation over a word list
//!
//! Plays every target (or a limited or random subset) against the assistant
//! and aggregates the results. A game that needs more guesses than the
//! configured number of tries counts as a failure.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Assistant, SimulationReport, simulate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing many targets
#[derive(Debug, Clone)]
pub struct TestAllStatistics {
    pub total_words: usize,
    /// Guesses allowed per game
    pub tries: usize,
    /// Targets found within `tries` guesses
    pub solved: usize,
    /// Targets not found, or found only after more than `tries` guesses
    pub failed: usize,
    /// Mean guesses over every game that found its target
    pub average_guesses: f64,
    pub total_time: Duration,
    /// Guesses needed -> number of targets, including games over the limit
    pub guess_distribution: BTreeMap<usize, usize>,
    /// Targets needing the most guesses, worst first
    pub hardest_words: Vec<(String, usize)>,
    /// Targets found only after more than `tries` guesses
    pub over_limit_words: Vec<(String, usize)>,
    /// Targets never found
    pub failed_words: Vec<String>,
    /// Opening guess of the first game played
    pub first_guess: Option<String>,
}

impl TestAllStatistics {
    fn from_reports(reports: &[SimulationReport], tries: usize, total_time: Duration) -> Self {
        let mut guess_distribution = BTreeMap::new();
        let mut hardest_words = Vec::new();
        let mut failed_words = Vec::new();

        for report in reports {
            match report.guesses_to_solve() {
                Some(guesses) => {
                    *guess_distribution.entry(guesses).or_insert(0) += 1;
                    hardest_words.push((report.target.text().to_string(), guesses));
                }
                None => failed_words.push(report.target.text().to_string()),
            }
        }

        hardest_words.sort_by(|(a, ga), (b, gb)| gb.cmp(ga).then_with(|| a.cmp(b)));
        let over_limit_words: Vec<(String, usize)> = hardest_words
            .iter()
            .filter(|(_, guesses)| *guesses > tries)
            .cloned()
            .collect();
        hardest_words.truncate(10);
        failed_words.sort();

        let found: usize = guess_distribution.values().sum();
        let total_guesses: usize = guess_distribution.iter().map(|(g, n)| g * n).sum();
        let average_guesses = if found == 0 {
            0.0
        } else {
            total_guesses as f64 / found as f64
        };
        let solved = found - over_limit_words.len();

        Self {
            total_words: reports.len(),
            tries,
            solved,
            failed: reports.len() - solved,
            average_guesses,
            total_time,
            guess_distribution,
            hardest_words,
            over_limit_words,
            failed_words,
            first_guess: reports
                .first()
                .and_then(|r| r.steps.first())
                .map(|step| step.word.text().to_string()),
        }
    }
}

/// Pick the targets to play: a random `sample` if given, else the first `limit`
fn select_targets<'a>(
    targets: &'a [Word],
    limit: Option<usize>,
    sample: Option<usize>,
) -> Vec<&'a Word> {
    match sample {
        Some(n) => targets.choose_multiple(&mut rand::rng(), n).collect(),
        None => targets
            .iter()
            .take(limit.unwrap_or(targets.len()))
            .collect(),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▓▒░")),
        Err(e) => warn!("progress bar template rejected: {e}"),
    }
    pb
}

/// Play every selected target by self-play
///
/// Games run in parallel and are judged against the assistant's configured
/// `tries`. `limit` keeps the first N targets; `sample`
/// instead picks N at random and takes precedence.
///
/// # Errors
/// Returns the first model, scoring or feedback error any game hits.
pub fn run_test_all(
    assistant: &Assistant<'_>,
    targets: &[Word],
    limit: Option<usize>,
    sample: Option<usize>,
) -> Result<TestAllStatistics, SolverError> {
    let selected = select_targets(targets, limit, sample);
    debug!("testing {} of {} targets", selected.len(), targets.len());

    let pb = progress_bar(selected.len());
    let start = Instant::now();

    let reports = selected
        .par_iter()
        .map(|target| {
            let report = simulate(assistant, target);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(TestAllStatistics::from_reports(
        &reports,
        assistant.config().tries,
        start.elapsed(),
    ))
}
