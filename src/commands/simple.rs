//! Simple interactive CLI mode
//!
//! Shows the ranked candidates each round and asks which word was played and
//! what feedback it received.

use crate::core::{Constraints, Feedback, Word};
use crate::error::SolverError;
use crate::output::formatters::colored_guess;
use crate::output::print_round;
use crate::solver::{Assistant, FeedbackProvider, Round, SessionOutcome, SessionResult, Step};
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};

/// Feedback provider that prompts a person
///
/// Reads from any `BufRead` and writes prompts to any `Write`, so it can be
/// driven by stdin or by a scripted buffer.
pub struct PromptFeedback<R, W> {
    input: R,
    output: W,
    display_count: usize,
    show_rounds: bool,
}

enum Reply {
    Line(String),
    Quit,
}

impl<R: BufRead, W: Write> PromptFeedback<R, W> {
    pub fn new(input: R, output: W, display_count: usize) -> Self {
        Self {
            input,
            output,
            display_count,
            show_rounds: true,
        }
    }

    /// Do not print the round table before prompting
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.show_rounds = false;
        self
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Reply> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Quit);
        }

        let line = line.trim().to_lowercase();
        Ok(match line.as_str() {
            "quit" | "q" | "exit" => Reply::Quit,
            _ => Reply::Line(line),
        })
    }

    fn ask_guess(&mut self, round: &Round) -> io::Result<Option<Word>> {
        let suggestion = round.best().map(|s| s.word.clone());
        loop {
            let prompt = suggestion.as_ref().map_or_else(
                || "Word played".to_string(),
                |w| format!("Word played [{w}]"),
            );
            let Reply::Line(line) = self.ask(&prompt)? else {
                return Ok(None);
            };

            if line.is_empty() {
                if let Some(word) = &suggestion {
                    return Ok(Some(word.clone()));
                }
                continue;
            }

            match Word::new(&line) {
                Ok(word) if round.constraints.size_range.contains(word.len()) => {
                    return Ok(Some(word));
                }
                Ok(word) => writeln!(
                    self.output,
                    "❌ {word} has {} letters; expected {}",
                    word.len(),
                    round.constraints.size_range
                )?,
                Err(e) => writeln!(self.output, "❌ {e}")?,
            }
        }
    }

    fn ask_feedback(&mut self, guess: &Word) -> io::Result<Option<Feedback>> {
        loop {
            let Reply::Line(line) = self.ask("Feedback (G/Y/-, or 'win')")? else {
                return Ok(None);
            };

            if matches!(line.as_str(), "win" | "correct" | "solved") {
                return Ok(Some(Feedback::solved(guess.len())));
            }

            match line.parse::<Feedback>() {
                Ok(feedback) if feedback.len() == guess.len() => return Ok(Some(feedback)),
                Ok(feedback) => writeln!(
                    self.output,
                    "❌ Feedback has {} marks but {guess} has {} letters",
                    feedback.len(),
                    guess.len()
                )?,
                Err(e) => writeln!(self.output, "❌ {e}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> FeedbackProvider for PromptFeedback<R, W> {
    fn next_step(&mut self, round: &Round) -> Result<Step, SolverError> {
        if self.show_rounds {
            print_round(round, self.display_count);
        }

        let Some(guess) = self.ask_guess(round)? else {
            return Ok(Step::Stop);
        };
        let Some(feedback) = self.ask_feedback(&guess)? else {
            return Ok(Step::Stop);
        };

        writeln!(self.output, "  {}", colored_guess(&guess, &feedback))?;

        let learned = Constraints::from_feedback(&guess, &feedback)?;
        if let Err(e) = round.constraints.combine(&learned).validate() {
            warn!("feedback for {guess} contradicts earlier rounds: {e}");
            writeln!(
                self.output,
                "⚠ This feedback contradicts earlier rounds ({e}); no candidate will match."
            )?;
        }

        Ok(Step::Continue(learned))
    }
}

/// Run the interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or ranking fails.
pub fn run_simple(assistant: &Assistant<'_>) -> Result<SessionOutcome, SolverError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Assistant - Interactive                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Best candidates are listed first. After each guess, enter:");
    println!("  - the word you played (blank for the top suggestion)");
    println!("  - its feedback: G/g/🟩 green, Y/y/🟨 yellow, -/_/⬜ gray");
    println!("Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut prompt = PromptFeedback::new(
        stdin.lock(),
        io::stdout(),
        assistant.config().display_count,
    );
    let outcome = assistant.run(&mut prompt)?;

    match &outcome.result {
        SessionResult::Solved(word) => println!(
            "\n{} {}\n",
            "🎉 The answer is".bright_green().bold(),
            word.text().to_uppercase().bright_white().bold()
        ),
        SessionResult::Exhausted => println!(
            "\n{}\n",
            "❌ No candidates remain! Some feedback may be incorrect.".red().bold()
        ),
        SessionResult::Stopped => println!("\n👋 Thanks for playing!\n"),
        SessionResult::RoundLimit => println!("\nRound limit reached.\n"),
    }

    Ok(outcome)
}
