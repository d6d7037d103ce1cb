//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveReport, Suggestion};
use crate::core::{GuessRecord, Word};
use crate::game::TurnState;
use colored::Colorize;

const LIST_LIMIT: usize = 20;

fn join_words(words: &[Word], limit: usize) -> String {
    let shown: Vec<String> = words.iter().take(limit).map(ToString::to_string).collect();
    if words.len() > limit {
        format!("{} ... (+{} more)", shown.join(" "), words.len() - limit)
    } else {
        shown.join(" ")
    }
}

/// Print the result of solving a word
pub fn print_solve_result(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", report.secret.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        let record = GuessRecord::new(step.guess.word, step.pattern);
        println!("\nTurn {}: {}", i + 1, colored_guess(&record));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.3}", step.guess.score);

            if step.candidates_after > 0 && step.candidates_before > 1 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", report.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates",
        result.metrics.max_partition
    );
    println!("   Patterns:    {}", result.metrics.partitions);
    println!(
        "   Possible answer: {}",
        if result.is_answer { "yes" } else { "no" }
    );

    if !result.largest_groups.is_empty() {
        println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
        for (pattern, size) in &result.largest_groups {
            println!("   {}  {size}", pattern.to_emoji());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.games);
    println!(
        "   Win rate:         {}",
        format!("{:.2}%", stats.win_rate() * 100.0).bright_yellow().bold()
    );
    if let Some(mean) = stats.mean_turns() {
        println!(
            "   Average guesses:  {}",
            format!("{mean:.3}").bright_yellow().bold()
        );
    }
    if let Some((min, max)) = stats.turn_range() {
        println!("   Best case:        {}", min.to_string().green());
        println!("   Worst case:       {}", max.to_string().yellow());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.histogram.iter().enumerate() {
        let pct = if stats.games == 0 {
            0.0
        } else {
            count as f64 / stats.games as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}: {} {count:5} ({pct:5.1}%)", i + 1, bar.green());
    }

    if !stats.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            join_words(&stats.failures, LIST_LIMIT)
        );
    }
}

/// Print the live candidates and ranked guesses for a game state
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("\n{}", "─".repeat(60).cyan());
    for (i, record) in suggestion.history.iter().enumerate() {
        println!("  {}. {}", i + 1, colored_guess(record));
    }
    println!("{}", "─".repeat(60).cyan());

    match suggestion.state {
        TurnState::Solved { word, turns } => {
            println!(
                "{}",
                format!("✅ Solved: {word} in {turns} guesses").green().bold()
            );
            return;
        }
        TurnState::Exhausted { turns } => {
            println!(
                "{}",
                format!("❌ Out of turns after {turns} guesses").red().bold()
            );
        }
        TurnState::AwaitingGuess | TurnState::AwaitingFeedback(_) => {}
    }

    println!(
        "\n{} candidates: {}",
        suggestion.live.len().to_string().bright_yellow().bold(),
        join_words(&suggestion.live, LIST_LIMIT)
    );

    if !suggestion.top.is_empty() {
        println!("\n🎯 {}", "Best next guesses:".bright_cyan().bold());
        for (i, guess) in suggestion.top.iter().enumerate() {
            let marker = if guess.is_candidate { "*" } else { " " };
            println!(
                "   {:2}. {}{marker}  {:.3}",
                i + 1,
                guess.word.to_string().bright_white().bold(),
                guess.score
            );
        }
        println!("   (* = possible answer)");
    }
}
