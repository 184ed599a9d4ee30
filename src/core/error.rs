//! Error taxonomy for the engine.
//!
//! Every variant is a programming-contract violation rather than a
//! transient condition, so there are no retry semantics: a simulation
//! driver that receives one of these abandons the run.

use serde::{Deserialize, Serialize};

/// Errors raised by the War engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// A card value symbol outside the recognized 13 ("2".."10", "J",
    /// "Q", "K", "A").
    InvalidValue(String),

    /// Drawing from an empty deck outside the dealing protocol.
    EmptyDeck,

    /// Card-count mismatch at deal time or game resolution. Indicates a
    /// logic defect (card leakage); downstream statistics would be
    /// meaningless, so the run must stop.
    InvariantViolation { counted: usize, expected: usize },

    /// A game exceeded the caller-supplied safety cutoff on duel count.
    /// Defensive only; not part of the game's semantics.
    CutoffExceeded { hands_played: u32 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidValue(symbol) => {
                write!(f, "unrecognized card value symbol: {:?}", symbol)
            }
            EngineError::EmptyDeck => write!(f, "drew from an empty deck"),
            EngineError::InvariantViolation { counted, expected } => write!(
                f,
                "card leak: counted {} cards, expected {}",
                counted, expected
            ),
            EngineError::CutoffExceeded { hands_played } => write!(
                f,
                "game exceeded the safety cutoff after {} hands",
                hands_played
            ),
        }
    }
}

impl std::error::Error for EngineError {}
