//! Core engine types: players, RNG, errors.
//!
//! These are the War-agnostic building blocks; the game rules live in
//! `crate::game`.

pub mod error;
pub mod player;
pub mod rng;

pub use error::EngineError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
