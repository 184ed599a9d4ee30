//! A player's hand: a two-ended stack of cards.
//!
//! Draws come off the top; cards won in a duel go under the bottom.
//! Order along the stack carries no other meaning. The top is the back
//! of the queue, matching the deck's top-is-last convention.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::card::Card;

/// One player's current stack of undrawn cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the top card, or `None` if the hand is empty.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Put a card on top of the hand. Used by dealing.
    pub fn place_top(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Slide a card under the bottom of the hand. Used for won cards.
    pub fn place_bottom(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Slide a batch of cards under the bottom of the hand.
    pub fn place_bottom_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.place_bottom(card);
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Move every card out of the hand, bottom first.
    pub fn drain(&mut self) -> impl Iterator<Item = Card> + '_ {
        self.cards.drain(..)
    }
}

impl FromIterator<Card> for Hand {
    /// Build a hand bottom-to-top: the last card of the iterator ends
    /// up on top and is drawn first.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
