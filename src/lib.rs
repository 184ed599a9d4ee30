//! # war-sim
//!
//! Simulates the card game War and aggregates per-game statistics
//! across many runs.
//!
//! ## Design Principles
//!
//! 1. **Deterministic given the shuffle**: the only randomness is the
//!    deck shuffle, drawn from an explicitly seeded RNG. Same seed,
//!    same game.
//!
//! 2. **Explicit card ownership**: every card moves between the deck,
//!    the two hands, the wall, and the dueler buffer; nothing is
//!    copied or duplicated, and resolution verifies the total.
//!
//! 3. **Independent games**: a bulk run derives one RNG stream per game
//!    index, so games parallelize freely and the outcome sequence does
//!    not depend on thread count.
//!
//! ## Modules
//!
//! - `core`: player identity, seedable RNG, error taxonomy
//! - `cards`: `Card` (rank ordering), `Deck`, `Hand`
//! - `game`: the duel/war state machine and per-game `Outcome`
//! - `sim`: bulk runner and statistics aggregation

pub mod cards;
pub mod core;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Hand, Suit, Value, DECK_SIZE};
pub use crate::core::{EngineError, GameRng, PlayerId, PlayerMap};
pub use crate::game::{Outcome, WarGame};
pub use crate::sim::{SimConfig, SimRunner, Summary};
