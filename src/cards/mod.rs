//! Card system: cards, the deck, and player hands.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (suit, value) pair with a derived rank
//! - `Deck`: The 52-card pile (shuffle, draw-top, reclaim)
//! - `Hand`: A player's two-ended stack (draw top, append bottom)

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Suit, Value};
pub use deck::{Deck, DECK_SIZE};
pub use hand::Hand;
