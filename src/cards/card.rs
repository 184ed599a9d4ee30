//! Playing cards with rank-only ordering.
//!
//! A `Card` is an immutable (suit, value) pair. The rank (2-14) is a
//! pure function of the value: numeric values map to their integer,
//! J=11, Q=12, K=13, A=14.
//!
//! ## Ordering
//!
//! Duels compare rank only; suit never breaks ties. The comparison is
//! exposed as the explicit `cmp_rank` method instead of an `Ord` impl:
//! two distinct cards of equal rank are "equal" for game purposes, and
//! an operator-based ordering would silently collapse them in sorted or
//! set contexts.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::EngineError;

/// Card suit. Irrelevant to duel resolution; carried so a deck holds 52
/// distinguishable cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    /// All four suits, in canonical deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        };
        write!(f, "{}", symbol)
    }
}

/// Card value: one of the 13 recognized symbols "2".."10", "J", "Q",
/// "K", "A".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// All thirteen values, in ascending rank order.
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Numerical rank used to resolve duels: 2-10 for the numeric
    /// values, then J=11, Q=12, K=13, A=14.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Value::Two => 2,
            Value::Three => 3,
            Value::Four => 4,
            Value::Five => 5,
            Value::Six => 6,
            Value::Seven => 7,
            Value::Eight => 8,
            Value::Nine => 9,
            Value::Ten => 10,
            Value::Jack => 11,
            Value::Queen => 12,
            Value::King => 13,
            Value::Ace => 14,
        }
    }

    /// The display symbol for this value.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }

    /// Parse a value from its symbol.
    ///
    /// Fails with `EngineError::InvalidValue` for anything outside the
    /// 13 recognized symbols.
    pub fn from_symbol(symbol: &str) -> Result<Self, EngineError> {
        Value::ALL
            .into_iter()
            .find(|v| v.symbol() == symbol)
            .ok_or_else(|| EngineError::InvalidValue(symbol.to_string()))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable playing card.
///
/// Equality (derived) is identity over (suit, value): two cards of the
/// same rank but different suits are *not* equal. Game-level rank
/// comparison goes through `cmp_rank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: Value,
}

impl Card {
    /// Create a card from a suit and value.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    /// Create a card from a suit and a value symbol.
    ///
    /// Fails with `EngineError::InvalidValue` on an unrecognized symbol.
    pub fn from_symbol(suit: Suit, symbol: &str) -> Result<Self, EngineError> {
        Ok(Self::new(suit, Value::from_symbol(symbol)?))
    }

    /// The card's rank (2-14), derived from its value.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.value.rank()
    }

    /// Compare two cards by rank only.
    #[must_use]
    pub fn cmp_rank(self, other: Card) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_derivation() {
        for suit in Suit::ALL {
            assert_eq!(Card::from_symbol(suit, "2").unwrap().rank(), 2);
            assert_eq!(Card::from_symbol(suit, "10").unwrap().rank(), 10);
            assert_eq!(Card::from_symbol(suit, "J").unwrap().rank(), 11);
            assert_eq!(Card::from_symbol(suit, "Q").unwrap().rank(), 12);
            assert_eq!(Card::from_symbol(suit, "K").unwrap().rank(), 13);
            assert_eq!(Card::from_symbol(suit, "A").unwrap().rank(), 14);
        }
    }

    #[test]
    fn test_ranks_ascend_in_value_order() {
        let ranks: Vec<u8> = Value::ALL.into_iter().map(Value::rank).collect();
        let expected: Vec<u8> = (2..=14).collect();
        assert_eq!(ranks, expected);
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            Value::from_symbol("1"),
            Err(EngineError::InvalidValue("1".to_string()))
        );
        assert_eq!(
            Card::from_symbol(Suit::Hearts, "Joker"),
            Err(EngineError::InvalidValue("Joker".to_string()))
        );
    }

    #[test]
    fn test_symbol_round_trip() {
        for value in Value::ALL {
            assert_eq!(Value::from_symbol(value.symbol()), Ok(value));
        }
    }

    #[test]
    fn test_cmp_rank_ignores_suit() {
        let king_spades = Card::new(Suit::Spades, Value::King);
        let king_hearts = Card::new(Suit::Hearts, Value::King);
        let queen_clubs = Card::new(Suit::Clubs, Value::Queen);

        assert_eq!(king_spades.cmp_rank(king_hearts), Ordering::Equal);
        assert_eq!(king_spades.cmp_rank(queen_clubs), Ordering::Greater);
        assert_eq!(queen_clubs.cmp_rank(king_hearts), Ordering::Less);
    }

    #[test]
    fn test_equal_rank_cards_stay_distinct() {
        let king_spades = Card::new(Suit::Spades, Value::King);
        let king_hearts = Card::new(Suit::Hearts, Value::King);

        assert_ne!(king_spades, king_hearts);
        assert_eq!(king_spades.cmp_rank(king_hearts), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Spades, Value::Ace).to_string(), "AS");
        assert_eq!(Card::new(Suit::Hearts, Value::Ten).to_string(), "10H");
    }
}
