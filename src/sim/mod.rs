//! Bulk simulation: run many games and aggregate their statistics.

pub mod runner;
pub mod stats;

pub use runner::{SimConfig, SimRunner};
pub use stats::Summary;
