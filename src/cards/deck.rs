//! The 52-card deck.
//!
//! A fresh deck holds exactly one card per (suit, value) pair. It is
//! fully consumed by dealing, and can be reassembled afterwards with
//! `reclaim` for reuse across repeated simulations; reclaim order is
//! arbitrary since a shuffle always precedes the next deal.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, Value};
use crate::core::{EngineError, GameRng};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered pile of cards; the top is the last element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a full deck in canonical order (suits S, D, H, C; values
    /// ascending within each suit).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(suit, value));
            }
        }
        Self { cards }
    }

    /// Create a full deck already shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle the remaining cards in place (uniform permutation).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    ///
    /// Fails with `EngineError::EmptyDeck` when the deck is empty;
    /// dealing is the only defined consumer and stops at exactly zero.
    pub fn draw_top(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has been fully drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Move every card out of the given collection into the deck,
    /// emptying it. No-op when the collection is already empty.
    pub fn reclaim(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// The remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
