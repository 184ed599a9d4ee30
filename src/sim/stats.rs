//! Statistics aggregation over many game outcomes.
//!
//! The external plotting collaborator consumes two equal-length
//! sequences, hands-per-game and tiebreaks-per-game; `Summary` carries
//! both in full plus the aggregates the CLI prints, and serializes to
//! JSON for export. Chart rendering itself is out of scope.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::Outcome;

/// Aggregated statistics for a bulk run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of games aggregated.
    pub games: usize,

    /// Wins per player index.
    pub wins: [u64; 2],

    /// Games that resolved with no winner. Zero while the engine's
    /// card-count invariant holds.
    pub unresolved: u64,

    /// Duels per game, in game order.
    pub hands_per_game: Vec<u32>,

    /// Tie events per game, in game order.
    pub tiebreaks_per_game: Vec<u32>,
}

impl Summary {
    /// Aggregate a batch of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut wins = [0u64; 2];
        let mut unresolved = 0u64;
        for outcome in outcomes {
            match outcome.winner {
                Some(player) => wins[player.index()] += 1,
                None => unresolved += 1,
            }
        }

        Self {
            games: outcomes.len(),
            wins,
            unresolved,
            hands_per_game: outcomes.iter().map(|o| o.hands_played).collect(),
            tiebreaks_per_game: outcomes.iter().map(|o| o.tiebreaks).collect(),
        }
    }

    /// Mean duels per game.
    #[must_use]
    pub fn mean_hands(&self) -> f64 {
        mean(&self.hands_per_game)
    }

    /// Mean tie events per game.
    #[must_use]
    pub fn mean_tiebreaks(&self) -> f64 {
        mean(&self.tiebreaks_per_game)
    }

    /// Shortest and longest game, in duels. `None` for an empty run.
    #[must_use]
    pub fn hands_range(&self) -> Option<(u32, u32)> {
        let min = self.hands_per_game.iter().min()?;
        let max = self.hands_per_game.iter().max()?;
        Some((*min, *max))
    }

    /// Exact count distribution of tie events per game, sorted by
    /// count.
    #[must_use]
    pub fn tiebreaks_distribution(&self) -> Vec<(u32, u64)> {
        distribution(&self.tiebreaks_per_game)
    }

    /// The most common tiebreak count, with its frequency.
    #[must_use]
    pub fn modal_tiebreaks(&self) -> Option<(u32, u64)> {
        self.tiebreaks_distribution()
            .into_iter()
            .max_by_key(|&(value, count)| (count, std::cmp::Reverse(value)))
    }

    /// Serialize the summary (full sequences included) to a JSON file
    /// for the external plotter.
    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games:      {}", self.games)?;
        writeln!(
            f,
            "wins:       player 0: {}, player 1: {}, unresolved: {}",
            self.wins[0], self.wins[1], self.unresolved
        )?;
        if let Some((min, max)) = self.hands_range() {
            writeln!(
                f,
                "hands:      mean {:.1}, min {}, max {}",
                self.mean_hands(),
                min,
                max
            )?;
        }
        write!(f, "tiebreaks:  mean {:.2}", self.mean_tiebreaks())?;
        if let Some((value, count)) = self.modal_tiebreaks() {
            write!(f, ", mode {} ({} games)", value, count)?;
        }
        Ok(())
    }
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

fn distribution(values: &[u32]) -> Vec<(u32, u64)> {
    let mut counts: FxHashMap<u32, u64> = FxHashMap::default();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut sorted: Vec<(u32, u64)> = counts.into_iter().collect();
    sorted.sort_unstable();
    sorted
}
