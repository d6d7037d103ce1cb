//! Interactive solving mode
//!
//! Suggests a guess, reads the feedback a real game produced and narrows the
//! candidates, one turn at a time.

use crate::core::{GuessRecord, Pattern, Word, format_history};
use crate::error::SolverError;
use crate::game::{GameConfig, GameSimulator, TurnState};
use crate::output::formatters::colored_guess;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{EntropyEngine, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

const SHOW_CANDIDATES: usize = 10;

enum Command {
    Quit,
    New,
    Undo,
    Feedback(Pattern),
    /// The player entered a different word than the one suggested
    Played(GuessRecord),
}

fn parse_command(input: &str) -> Result<Command, SolverError> {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "new" | "n" => Ok(Command::New),
        "undo" | "u" => Ok(Command::Undo),
        "win" | "correct" | "solved" => Ok(Command::Feedback(Pattern::PERFECT)),
        _ if input.contains(':') => GuessRecord::parse(input).map(Command::Played),
        _ => Pattern::parse(input).map(Command::Feedback),
    }
}

/// Run the interactive loop until the player quits or input ends
///
/// `history` seeds the game, e.g. from a `GUESS:PPPPP,...` state string.
///
/// # Errors
///
/// Returns an error on I/O failure, or if the seed history is unusable.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive<S, R, W>(
    engine: &EntropyEngine<'_, S>,
    config: GameConfig,
    history: &[GuessRecord],
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "═".repeat(62).cyan())?;
    writeln!(out, "{}", "  Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(62).cyan())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  G or 🟩 = correct spot, Y or 🟨 = wrong spot, X or ⬜ = not in word")?;
    writeln!(out, "  WORD:PATTERN if you played a different word")?;
    writeln!(out, "Commands: 'win', 'undo', 'new', 'quit'\n")?;

    let mut game = GameSimulator::resume(engine, config, history)?;

    loop {
        match game.state() {
            TurnState::Solved { word, turns } => {
                writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
                writeln!(
                    out,
                    "{}",
                    format!("  Solved: {word} in {turns} {}", plural(turns, "guess", "guesses"))
                        .bright_green()
                        .bold()
                )?;
                for (i, record) in game.history().iter().enumerate() {
                    writeln!(out, "    {}. {}", i + 1, colored_guess(record))?;
                }
                writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;

                match prompt(&mut input, out, "Play again? (yes/no)")? {
                    Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                        game = GameSimulator::new(engine, config);
                        writeln!(out, "\nNew game started!\n")?;
                    }
                    _ => break,
                }
            }
            TurnState::Exhausted { turns } => {
                writeln!(
                    out,
                    "\n{}",
                    format!("Out of turns after {turns} guesses.").red().bold()
                )?;
                writeln!(out, "Still possible: {}", list_words(game.live()))?;

                let Some(line) = prompt(&mut input, out, "Command (undo/new/quit)")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::New) => game = GameSimulator::new(engine, config),
                    Ok(Command::Undo) => {
                        game.undo();
                    }
                    _ => writeln!(out, "The game is over; type undo, new or quit.")?,
                }
            }
            TurnState::AwaitingGuess => {
                let guess = game.propose_guess()?;
                let live = game.live();
                let metrics = calculate_metrics(&guess.word, live);

                writeln!(out, "{}", "─".repeat(62))?;
                writeln!(
                    out,
                    "Turn {}: {} {} remaining",
                    game.turn() + 1,
                    live.len(),
                    plural(live.len(), "candidate", "candidates")
                )?;
                writeln!(out, "{}", "─".repeat(62))?;
                writeln!(
                    out,
                    "\nSuggested guess: {}",
                    guess.word.to_string().bright_yellow().bold()
                )?;
                writeln!(out, "   Entropy:          {:.3} bits", metrics.entropy)?;
                writeln!(
                    out,
                    "   Expected remain:  {:.1} candidates",
                    metrics.expected_remaining
                )?;
                writeln!(out, "   Worst case:       {} candidates\n", metrics.max_partition)?;

                if live.len() <= SHOW_CANDIDATES {
                    writeln!(out, "Remaining candidates: {}\n", list_words(live))?;
                }
            }
            TurnState::AwaitingFeedback(_) => {
                let Some(line) = prompt(&mut input, out, "Feedback")? else {
                    break;
                };

                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::New) => {
                        game = GameSimulator::new(engine, config);
                        writeln!(out, "\nNew game started!\n")?;
                    }
                    Ok(Command::Undo) => match game.undo() {
                        Some(record) => writeln!(out, "Undid {record}\n")?,
                        None => {
                            writeln!(out, "Nothing to undo.\n")?;
                        }
                    },
                    Ok(Command::Feedback(pattern)) => {
                        report(out, game.submit_feedback(pattern))?;
                    }
                    Ok(Command::Played(record)) => {
                        report(out, game.apply_record(record))?;
                    }
                    Err(e) => writeln!(out, "{} {e}", "Invalid input:".red())?,
                }
            }
        }
    }

    if !game.history().is_empty() {
        writeln!(out, "\nGame state: {}", format_history(game.history()))?;
    }
    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

/// Print recoverable feedback errors and propagate the rest
fn report<W: Write>(out: &mut W, result: crate::error::Result<TurnState>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e @ SolverError::NoConsistentCandidates { .. }) => {
            writeln!(out, "{} {e}", "Rejected:".red().bold())?;
            writeln!(out, "Check the feedback and enter it again, or 'undo'.\n")?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Show a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn list_words(words: &[Word]) -> String {
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use crate::core::parse_history;
    use crate::solver::EntropyStrategy;

    fn setup_dictionary() -> Dictionary {
        let answers = words_from_slice(&[
            "crane", "crate", "trace", "slate", "grate", "irate", "react", "stare",
        ]);
        Dictionary::with_extra_guesses(answers, &[]).unwrap()
    }

    fn run(dict: &Dictionary, history: &str, input: &str) -> String {
        let engine = EntropyEngine::new(EntropyStrategy, dict)
            .with_opener(Word::new("crane").unwrap())
            .unwrap();
        let history = parse_history(history).unwrap();
        let mut out = Vec::new();
        run_interactive(
            &engine,
            GameConfig::default(),
            &history,
            input.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_ends_game() {
        let dict = setup_dictionary();
        let output = run(&dict, "", "win\nno\n");

        assert!(output.contains("CRANE"));
        assert!(output.contains("Solved: CRANE in 1 guess"));
        assert!(!output.contains("1 guesses"));
        assert!(output.contains("Game state: CRANE:GGGGG"));
    }

    #[test]
    fn quit_and_end_of_input_stop_cleanly() {
        let dict = setup_dictionary();
        assert!(run(&dict, "", "quit\n").contains("Thanks for playing!"));
        assert!(run(&dict, "", "").contains("Thanks for playing!"));
    }

    #[test]
    fn bad_input_is_reported_and_retried() {
        let dict = setup_dictionary();
        let output = run(&dict, "", "GGG\nGGGXX\nquit\n");

        assert!(output.contains("Invalid input:"));
        assert!(output.contains("Rejected:"));
        assert!(!output.contains("Game state:"));
    }

    #[test]
    fn feedback_narrows_candidates() {
        let dict = setup_dictionary();
        // CRATE against CRANE
        let output = run(&dict, "", "GGGXG\nquit\n");

        assert!(output.contains("Game state: CRANE:GGGXG"));
        assert!(output.contains("Turn 2: 1 candidate remaining"));
        assert!(!output.contains("1 candidates"));
    }

    #[test]
    fn undo_and_resume_from_state() {
        let dict = setup_dictionary();
        let output = run(&dict, "SLATE:XXGGG", "undo\nquit\n");

        assert!(output.contains("Turn 2: 3 candidates remaining"));
        assert!(output.contains("Undid SLATE:XXGGG"));
    }
}
