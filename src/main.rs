//! Wordle bot - CLI
//!
//! Solves Wordle by picking the guess with the highest expected information
//! gain each turn. Runs interactively against a real game, autoplays known
//! secrets, and benchmarks whole answer lists.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_infobot::{
    commands::{
        analyze_word, pick_secrets, random_secret, run_benchmark, run_interactive, solve_word,
        suggest,
    },
    core::{Word, parse_history},
    dictionary::Dictionary,
    game::{DEFAULT_MAX_TURNS, GameConfig},
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_suggestion},
    solver::{EntropyEngine, StrategyType, TieBreak},
};

#[derive(Parser)]
#[command(
    name = "wordle_infobot",
    about = "Wordle bot that picks each guess by maximizing expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list, one word per line (default: built-in sample)
    #[arg(long, global = true, env = "WORDLE_ANSWERS")]
    answers: Option<PathBuf>,

    /// Complete guess list; must contain every answer
    #[arg(long, global = true, env = "WORDLE_GUESSES")]
    guesses: Option<PathBuf>,

    /// Extra guess-only words, merged with the answers
    #[arg(long, global = true, env = "WORDLE_EXTRA_GUESSES")]
    extra_guesses: Option<PathBuf>,

    /// Scoring strategy: entropy (default) or expected-size
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Tie-break among equal scores: candidate-first (default) or lexicographic
    #[arg(long, global = true, default_value_t = TieBreak::CandidateFirst)]
    tie_break: TieBreak,

    /// Fixed opening guess instead of the computed one
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Guesses allowed per game
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Every guess must reuse the revealed hints
    #[arg(long, global = true)]
    hard: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver for a real game (default)
    Interactive {
        /// Start from a game state such as "ROATE:XYGXY,CRANE:GGGXX"
        #[arg(long)]
        state: Option<String>,
    },

    /// Solve a specific target word (random answer if omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Show per-turn candidate counts and scores
        #[arg(short = 'd', long)]
        details: bool,
    },

    /// Rank the next guesses for a game state without prompting
    Suggest {
        /// Game state such as "ROATE:XYGXY,CRANE:GGGXX" (empty for the opener)
        #[arg(default_value = "")]
        state: String,

        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Analyze how well a word splits the answers
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of largest feedback groups to show
        #[arg(short = 'g', long, default_value = "5")]
        groups: usize,
    },

    /// Benchmark against answers (all of them unless a count is given)
    Benchmark {
        /// Number of random answers to test
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load word lists from the given paths, or the built-in sample
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    match &cli.answers {
        Some(answers) => Dictionary::from_files(
            answers,
            cli.guesses.as_deref(),
            cli.extra_guesses.as_deref(),
        )
        .with_context(|| format!("loading word lists from {}", answers.display())),
        None if cli.guesses.is_some() || cli.extra_guesses.is_some() => {
            Err(anyhow!("--guesses and --extra-guesses require --answers"))
        }
        None => Dictionary::embedded().context("loading the built-in word lists"),
    }
}

fn build_engine<'a>(cli: &Cli, dictionary: &'a Dictionary) -> Result<EntropyEngine<'a>> {
    let strategy = StrategyType::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}', expected one of {}",
            cli.strategy,
            StrategyType::NAMES.join(", ")
        )
    })?;

    let engine = EntropyEngine::new(strategy, dictionary).with_tie_break(cli.tie_break);
    match &cli.opener {
        Some(word) => Ok(engine.with_opener(Word::new(word)?)?),
        None => Ok(engine),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.max_turns == 0 {
        return Err(anyhow!("--max-turns must be at least 1"));
    }
    let config = GameConfig {
        max_turns: cli.max_turns,
        hard_mode: cli.hard,
    };

    let dictionary = load_dictionary(&cli)?;
    let engine = build_engine(&cli, &dictionary)?;

    // Default to interactive mode if no command given
    let command = cli
        .command
        .unwrap_or(Commands::Interactive { state: None });

    match command {
        Commands::Interactive { state } => {
            let history = parse_history(state.as_deref().unwrap_or_default())?;
            let stdin = io::stdin();
            run_interactive(&engine, config, &history, stdin.lock(), &mut io::stdout())
        }
        Commands::Solve { word, details } => {
            let secret = match word {
                Some(word) => Word::new(&word)?,
                None => random_secret(dictionary.answers())
                    .ok_or_else(|| anyhow!("the answer list is empty"))?,
            };
            let report = solve_word(&engine, secret, config)?;
            print_solve_result(&report, details);
            Ok(())
        }
        Commands::Suggest { state, top } => {
            let history = parse_history(&state)?;
            let suggestion = suggest(&engine, config, &history, top)?;
            print_suggestion(&suggestion);
            Ok(())
        }
        Commands::Analyze { word, groups } => {
            let result = analyze_word(Word::new(&word)?, &dictionary, groups)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed, quiet } => {
            let secrets = pick_secrets(dictionary.answers(), count, seed);
            println!("Running benchmark on {} answers...", secrets.len());
            let result = run_benchmark(&engine, &secrets, config, !quiet)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
