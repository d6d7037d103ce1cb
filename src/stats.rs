//! Batch play and aggregate statistics
//!
//! Every secret gets its own [`GameSimulator`]; games share only the engine,
//! which is read-only. Per-game results fold into [`AggregateStats`] with an
//! associative merge, so the batch runs in parallel and the totals do not
//! depend on completion order.

use crate::core::Word;
use crate::error::Result;
use crate::game::{GameConfig, GameSimulator, KnownSecret, SolveResult};
use crate::solver::{EntropyEngine, Strategy};
use log::info;
use rayon::prelude::*;
use std::time::Instant;

/// Win rate and turn distribution over a batch of games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateStats {
    pub games: usize,
    pub wins: usize,
    /// `histogram[t - 1]` counts the games solved in `t` turns
    pub histogram: Vec<usize>,
    /// Secrets the engine failed to solve, sorted
    pub failures: Vec<Word>,
    total_win_turns: usize,
}

impl AggregateStats {
    #[must_use]
    pub fn new(max_turns: usize) -> Self {
        Self {
            games: 0,
            wins: 0,
            histogram: vec![0; max_turns],
            failures: Vec::new(),
            total_win_turns: 0,
        }
    }

    /// Count one finished game
    pub fn record(&mut self, secret: Word, result: &SolveResult) {
        self.games += 1;
        match result {
            SolveResult::Solved { turns, .. } => {
                self.wins += 1;
                self.total_win_turns += turns;
                if self.histogram.len() < *turns {
                    self.histogram.resize(*turns, 0);
                }
                self.histogram[turns - 1] += 1;
            }
            SolveResult::Exhausted { .. } => self.failures.push(secret),
        }
    }

    /// Combine two partial aggregates
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if self.histogram.len() < other.histogram.len() {
            self.histogram.resize(other.histogram.len(), 0);
        }
        for (total, count) in self.histogram.iter_mut().zip(&other.histogram) {
            *total += count;
        }
        self.games += other.games;
        self.wins += other.wins;
        self.total_win_turns += other.total_win_turns;
        self.failures.extend(other.failures);
        self
    }

    /// Fraction of games won, 0.0 for an empty batch
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean turns over the games that were won
    #[must_use]
    pub fn mean_turns(&self) -> Option<f64> {
        (self.wins > 0).then(|| self.total_win_turns as f64 / self.wins as f64)
    }

    /// Fewest and most turns among won games
    #[must_use]
    pub fn turn_range(&self) -> Option<(usize, usize)> {
        let mut solved = self
            .histogram
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, _)| i + 1);
        let min = solved.next()?;
        Some((min, solved.last().unwrap_or(min)))
    }
}

/// Play one game per secret and aggregate the results
///
/// `observer` sees every finished game, from whichever worker thread played
/// it. The opening guess is computed up front so workers do not race to
/// compute it.
///
/// # Errors
/// Fails on the first game that errors, e.g. a secret that is not one of the
/// engine's answers.
pub fn run_batch<S, F>(
    engine: &EntropyEngine<'_, S>,
    secrets: &[Word],
    config: GameConfig,
    observer: F,
) -> Result<AggregateStats>
where
    S: Strategy,
    F: Fn(&Word, &SolveResult) + Sync,
{
    let start = Instant::now();
    engine.opening_guess()?;

    let mut stats = secrets
        .par_iter()
        .map(|secret| -> Result<AggregateStats> {
            let mut game = GameSimulator::new(engine, config);
            let result = game.play(&mut KnownSecret(*secret))?;
            observer(secret, &result);

            let mut single = AggregateStats::new(config.max_turns);
            single.record(*secret, &result);
            Ok(single)
        })
        .try_reduce(
            || AggregateStats::new(config.max_turns),
            |a, b| Ok(a.merge(b)),
        )?;
    stats.failures.sort_unstable();

    info!(
        "played {} games in {:.2}s: {} wins, mean {:.3} turns",
        stats.games,
        start.elapsed().as_secs_f64(),
        stats.wins,
        stats.mean_turns().unwrap_or(0.0)
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::EntropyStrategy;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn solved_in(turns: usize) -> SolveResult {
        SolveResult::Solved {
            word: word("crane"),
            turns,
            history: Vec::new(),
        }
    }

    #[test]
    fn record_counts_wins_and_failures() {
        let mut stats = AggregateStats::new(6);
        stats.record(word("crane"), &solved_in(3));
        stats.record(word("crate"), &solved_in(4));
        stats.record(word("slate"), &SolveResult::Exhausted { history: Vec::new() });

        assert_eq!(stats.games, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.histogram, vec![0, 0, 1, 1, 0, 0]);
        assert_eq!(stats.failures, vec![word("slate")]);
        assert!((stats.mean_turns().unwrap() - 3.5).abs() < 1e-9);
        assert!((stats.win_rate() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.turn_range(), Some((3, 4)));
    }

    #[test]
    fn empty_stats() {
        let stats = AggregateStats::new(6);
        assert!(stats.mean_turns().is_none());
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.turn_range(), None);
    }

    #[test]
    fn merge_is_order_independent() {
        let mut a = AggregateStats::new(6);
        a.record(word("crane"), &solved_in(2));
        let mut b = AggregateStats::new(6);
        b.record(word("crate"), &solved_in(5));
        b.record(word("slate"), &SolveResult::Exhausted { history: Vec::new() });

        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);

        assert_eq!(ab.games, ba.games);
        assert_eq!(ab.histogram, ba.histogram);
        assert_eq!(ab.mean_turns(), ba.mean_turns());
    }

    #[test]
    fn batch_solves_every_secret() {
        let answers = words_from_slice(&[
            "crane", "crate", "trace", "slate", "grate", "irate", "react", "stare", "roast",
        ]);
        let dict = Dictionary::with_extra_guesses(answers, &words_from_slice(&["roate"])).unwrap();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);
        let seen = AtomicUsize::new(0);

        let stats = run_batch(&engine, dict.answers(), GameConfig::default(), |_, result| {
            assert!(result.history().last().is_some_and(|r| r.pattern.is_perfect()));
            seen.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(seen.load(Ordering::Relaxed), dict.answers().len());
        assert_eq!(stats.games, dict.answers().len());
        assert_eq!(stats.wins, stats.games);
        assert!(stats.failures.is_empty());
        assert_eq!(stats.histogram.iter().sum::<usize>(), stats.wins);
    }

    #[test]
    fn batch_matches_sequential_play() {
        let answers = words_from_slice(&["crane", "crate", "trace", "slate", "grate", "irate"]);
        let dict = Dictionary::with_extra_guesses(answers, &[]).unwrap();
        let engine = EntropyEngine::new(EntropyStrategy, &dict);
        let config = GameConfig::default();

        let parallel = run_batch(&engine, dict.answers(), config, |_, _| {}).unwrap();

        let mut sequential = AggregateStats::new(config.max_turns);
        for secret in dict.answers() {
            let result = GameSimulator::new(&engine, config)
                .play(&mut KnownSecret(*secret))
                .unwrap();
            sequential.record(*secret, &result);
        }

        assert_eq!(parallel, sequential);
    }
}
