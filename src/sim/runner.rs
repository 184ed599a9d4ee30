//! Bulk simulation runner.
//!
//! Plays many independent games and returns their outcomes in game
//! order. Game `i` draws its RNG purely from `(seed, i)`, so the
//! outcome sequence depends only on the configuration, not on thread
//! count or scheduling. Games share no mutable state, which makes the
//! run embarrassingly parallel.

use rayon::prelude::*;

use crate::core::{EngineError, GameRng};
use crate::game::{Outcome, WarGame};

/// Configuration for a bulk run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of games to play.
    pub games: usize,

    /// Base seed; game `i` plays with the RNG stream `(seed, i)`.
    pub seed: u64,

    /// Worker threads. 0 lets rayon pick; 1 runs sequentially on the
    /// calling thread.
    pub threads: usize,

    /// Optional safety cutoff on duels per game. A game that exceeds it
    /// aborts the whole run with `CutoffExceeded`. War terminates
    /// almost surely but has no hard bound, so bulk callers may want
    /// this purely defensively.
    pub cutoff: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 10_000,
            seed: 0,
            threads: 1,
            cutoff: None,
        }
    }
}

impl SimConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the worker thread count (0 = rayon default).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the per-game duel cutoff.
    pub fn with_cutoff(mut self, cutoff: Option<u32>) -> Self {
        self.cutoff = cutoff;
        self
    }
}

/// Runs a configured batch of games.
pub struct SimRunner {
    config: SimConfig,
}

impl SimRunner {
    /// Create a runner for the given configuration.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// The runner's configuration.
    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play every game and collect outcomes in game order.
    ///
    /// The first engine error (a card leak or a cutoff overrun) aborts
    /// the run; partial statistics over a run with a defective game
    /// would be meaningless.
    pub fn run(&self) -> Result<Vec<Outcome>, EngineError> {
        let started = std::time::Instant::now();
        log::info!(
            "running {} games (seed {}, threads {})",
            self.config.games,
            self.config.seed,
            self.config.threads,
        );

        let outcomes = if self.config.threads == 1 {
            self.run_sequential()
        } else {
            self.run_parallel()
        }?;

        log::info!(
            "finished {} games in {:.2?}",
            outcomes.len(),
            started.elapsed()
        );
        Ok(outcomes)
    }

    fn play_one(&self, index: usize) -> Result<Outcome, EngineError> {
        let rng = GameRng::new(self.config.seed).for_stream(index as u64);
        WarGame::new(rng).play_with_cutoff(self.config.cutoff)
    }

    fn run_sequential(&self) -> Result<Vec<Outcome>, EngineError> {
        (0..self.config.games)
            .map(|i| self.play_one(i))
            .collect()
    }

    fn run_parallel(&self) -> Result<Vec<Outcome>, EngineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()
            .unwrap_or_else(|e| panic!("failed to build worker pool: {}", e));

        pool.install(|| {
            (0..self.config.games)
                .into_par_iter()
                .map(|i| self.play_one(i))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_match_game_count() {
        let runner = SimRunner::new(SimConfig::new().with_games(50).with_seed(1));
        let outcomes = runner.run().unwrap();

        assert_eq!(outcomes.len(), 50);
        for outcome in &outcomes {
            assert!(outcome.winner.is_some());
            assert!(outcome.hands_played >= 1);
            assert!(outcome.hands_played >= outcome.tiebreaks);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let config = SimConfig::new().with_games(100).with_seed(42);
        let a = SimRunner::new(config.clone()).run().unwrap();
        let b = SimRunner::new(config).run().unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = SimRunner::new(SimConfig::new().with_games(100).with_seed(1))
            .run()
            .unwrap();
        let b = SimRunner::new(SimConfig::new().with_games(100).with_seed(2))
            .run()
            .unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_thread_count_does_not_change_the_sequence() {
        let sequential = SimRunner::new(SimConfig::new().with_games(200).with_seed(42))
            .run()
            .unwrap();
        let parallel = SimRunner::new(
            SimConfig::new().with_games(200).with_seed(42).with_threads(4),
        )
        .run()
        .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_tiny_cutoff_aborts_the_run() {
        let runner = SimRunner::new(SimConfig::new().with_games(10).with_cutoff(Some(1)));

        assert!(matches!(
            runner.run(),
            Err(EngineError::CutoffExceeded { .. })
        ));
    }
}
