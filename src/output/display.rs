//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, describe_constraints};
use crate::commands::{RankResult, TestAllStatistics};
use crate::model::ScoredWord;
use crate::solver::{Round, SessionResult, SimulationReport};
use colored::Colorize;

/// Print a ranked list, best first, with a bar relative to the best score
pub fn print_ranking<'a>(entries: impl IntoIterator<Item = &'a ScoredWord>) {
    let entries: Vec<&ScoredWord> = entries.into_iter().collect();
    let best = entries.first().map_or(0.0, |entry| entry.score);

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {:>2}. {}  {:7.3}  {}",
            i + 1,
            entry.word.text().to_uppercase().bright_white().bold(),
            entry.score,
            create_progress_bar(entry.score, best, 20).cyan()
        );
    }
}

/// Print the state of a round before asking for feedback
pub fn print_round(round: &Round, count: usize) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Round {}: {} candidates remaining",
        round.number,
        round.candidates.len().to_string().bright_yellow().bold()
    );
    if !round.constraints.is_unconstrained() {
        println!("  Known: {}", describe_constraints(&round.constraints));
    }
    println!("{}", "─".repeat(60).cyan());

    print_ranking(round.top(count));
    println!();
}

/// Print the result of a one-shot ranking
pub fn print_rank_result(result: &RankResult) {
    if let Some(contradiction) = &result.contradiction {
        println!(
            "{} {contradiction}",
            "⚠ Constraints contradict each other:".yellow().bold()
        );
    }

    println!("Known: {}", describe_constraints(&result.constraints));

    if result.candidates == 0 {
        println!("{}", "❌ No candidates match these constraints.".red().bold());
        return;
    }

    println!(
        "{} candidates, top {}:\n",
        result.candidates.to_string().bright_yellow().bold(),
        result.top.len()
    );
    print_ranking(&result.top);
}

/// Print the trace of a self-play game
pub fn print_solve_result(report: &SimulationReport, tries: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, colored_guess(&step.word, &step.feedback));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.3}", step.score);
        }
    }

    println!();
    match (&report.result, report.guesses_to_solve()) {
        (SessionResult::Solved(_), Some(guesses)) => {
            if report.steps.last().is_some_and(|s| !s.feedback.is_solved()) {
                println!(
                    "Only {} remains.",
                    report.target.text().to_uppercase().bright_green()
                );
            }
            if guesses > tries {
                println!(
                    "{}",
                    format!("❌ Solved in {guesses} guesses, over the limit of {tries}")
                        .red()
                        .bold()
                );
            } else {
                println!(
                    "{}",
                    format!("✅ Solved in {guesses} guesses!").green().bold()
                );
            }
        }
        (SessionResult::Solved(other), None) => println!(
            "{}",
            format!(
                "❌ Narrowed to {} instead of the target (is it in the word list?)",
                other.text().to_uppercase()
            )
            .red()
            .bold()
        ),
        (result, _) => println!(
            "{}",
            format!("❌ Not solved: {result:?}").red().bold()
        ),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!("  Tries allowed:       {}", stats.tries);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    let found: usize = stats.guess_distribution.values().sum();
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / found.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:>2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.over_limit_words.is_empty() {
        println!(
            "\n⏱  {} ({})",
            format!("Over {} tries", stats.tries).red().bold(),
            stats.over_limit_words.len()
        );
        for (word, guesses) in stats.over_limit_words.iter().take(10) {
            println!("  {} ({guesses} guesses)", word.to_uppercase().red());
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }

    if let Some(first) = &stats.first_guess {
        println!(
            "\n🎯 Opening guess: {}",
            first.to_uppercase().bright_green().bold()
        );
    }
}
