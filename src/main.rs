//! Wordle Rank - CLI
//!
//! Ranks candidate words by positional letter frequency, one-shot or round
//! by round.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::info;
use wordle_rank::{
    commands::{ConstraintArgs, rank_candidates, run_simple, run_test_all, solve_word},
    config::SolverConfig,
    core::{SizeRange, Word},
    model::{ModelWeights, Strategy},
    output::{print_rank_result, print_solve_result, print_test_all_statistics},
    solver::Assistant,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_rank",
    about = "Word puzzle assistant ranking candidates by letter frequency or entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Shortest admissible word length
    #[arg(long, global = true, default_value_t = 5)]
    min_len: usize,

    /// Longest admissible word length
    #[arg(long, global = true, default_value_t = 5)]
    max_len: usize,

    /// Ranking strategy: 'positional' (letter frequency) or 'entropy'
    #[arg(long, global = true, default_value = "positional")]
    strategy: String,

    /// Guesses allowed before a game counts as failed
    #[arg(long, global = true, default_value_t = 6)]
    tries: usize,

    /// Weight of a letter's overall frequency
    #[arg(long, global = true, default_value_t = 1.0)]
    global_weight: f64,

    /// Weight of a letter's frequency at each position
    #[arg(long, global = true, default_value_t = 3.0)]
    positional_weight: f64,

    /// Number of ranked candidates to display
    #[arg(short = 'n', long, global = true, default_value_t = 10)]
    top: usize,

    /// Stop a session after this many rounds
    #[arg(long, global = true, default_value_t = 12)]
    max_rounds: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose-log", global = true, action = ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and rank the word list once from known constraints
    Rank {
        /// Letters known to be in the word
        #[arg(short, long, default_value = "")]
        include: String,

        /// Letters known to be absent
        #[arg(short, long, default_value = "")]
        exclude: String,

        /// Known positions, e.g. "c.a.e"
        #[arg(short, long)]
        pattern: Option<String>,

        /// Letters forbidden at a 1-based position, e.g. "2=rs" (repeatable)
        #[arg(long = "not-at")]
        not_at: Vec<String>,
    },

    /// Simple CLI mode (interactive, default)
    Simple,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores for each turn
        #[arg(long)]
        verbose: bool,
    },

    /// Solve every word in the list by self-play
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test this many randomly chosen words instead
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,
    },
}

impl Cli {
    fn config(&self) -> Result<SolverConfig> {
        let size_range = SizeRange::new(self.min_len, self.max_len);
        if size_range.is_empty() {
            bail!(
                "--min-len {} is greater than --max-len {}",
                self.min_len,
                self.max_len
            );
        }

        let strategy: Strategy = self.strategy.parse()?;

        let mut config = SolverConfig::default()
            .with_strategy(strategy)
            .with_tries(self.tries)
            .with_weights(ModelWeights::new(self.global_weight, self.positional_weight))
            .with_size_range(size_range)
            .with_max_rounds(self.max_rounds);
        config.display_count = self.top;
        Ok(config)
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str, size_range: SizeRange) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("failed to load word list from {path}"))?,
    };

    let usable = words.iter().filter(|w| size_range.contains(w.len())).count();
    if usable == 0 {
        bail!("word list {wordlist} has no words of length {size_range}");
    }
    info!("loaded {} words ({usable} of length {size_range})", words.len());

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = cli.config()?;
    let words = load_wordlist(&cli.wordlist, config.size_range)?;
    let assistant = Assistant::new(&words, config);

    // Default to Simple mode if no command given
    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Rank {
            include,
            exclude,
            pattern,
            not_at,
        } => {
            let args = ConstraintArgs {
                include,
                exclude,
                pattern,
                not_at,
            };
            let result = rank_candidates(&assistant, &args)?;
            print_rank_result(&result);
        }
        Commands::Simple => {
            run_simple(&assistant)?;
        }
        Commands::Solve { word, verbose } => {
            let report = solve_word(&assistant, &word)?;
            print_solve_result(&report, assistant.config().tries, verbose);
        }
        Commands::TestAll { limit, sample } => {
            println!("\n{}", "═".repeat(70));
            println!(" Self-play Test ");
            println!("{}", "═".repeat(70));
            let size_range = assistant.config().size_range;
            let targets: Vec<Word> = words
                .iter()
                .filter(|w| size_range.contains(w.len()))
                .cloned()
                .collect();
            println!("\nTesting against {} words\n", targets.len());

            let stats = run_test_all(&assistant, &targets, limit, sample)?;
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
