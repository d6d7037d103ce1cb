//! Benchmark command
//!
//! Plays a batch of secrets in parallel and reports aggregate performance.

use crate::core::Word;
use crate::game::GameConfig;
use crate::solver::{EntropyEngine, Strategy};
use crate::stats::{AggregateStats, run_batch};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub stats: AggregateStats,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Choose the secrets for a batch
///
/// `None`, or a count covering every answer, selects all answers in order.
/// Otherwise `count` distinct answers are sampled, reproducibly when a seed
/// is given.
#[must_use]
pub fn pick_secrets(answers: &[Word], count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    match count {
        Some(n) if n < answers.len() => {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let mut picked: Vec<Word> = answers.choose_multiple(&mut rng, n).copied().collect();
            picked.sort_unstable();
            picked
        }
        _ => answers.to_vec(),
    }
}

/// Run the engine against every secret
///
/// # Errors
///
/// Returns an error if a game fails, e.g. a secret outside the answer list.
pub fn run_benchmark<S: Strategy>(
    engine: &EntropyEngine<'_, S>,
    secrets: &[Word],
    config: GameConfig,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let stats = run_batch(engine, secrets, config, |secret, result| {
        if !result.is_solved() {
            pb.set_message(format!("missed {secret}"));
        }
        pb.inc(1);
    })?;
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    Ok(BenchmarkResult {
        words_per_second: stats.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        stats,
        duration,
    })
}
