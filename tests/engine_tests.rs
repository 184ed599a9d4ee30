//! End-to-end engine tests through the public API.
//!
//! Covers the per-game contract: dealing, duel resolution, the tie
//! edge cases, card conservation, and termination.

use war_sim::{Card, EngineError, GameRng, Hand, PlayerId, Suit, Value, WarGame, DECK_SIZE};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// Every seed produces a clean 52/0 finish with sane counters.
#[test]
fn test_games_resolve_across_many_seeds() {
    for seed in 0..100 {
        let mut game = WarGame::new(GameRng::new(seed));
        let outcome = game.play().unwrap();

        let winner = outcome.winner.expect("dealt games always resolve");
        assert_eq!(game.hand_len(winner), DECK_SIZE);
        assert_eq!(game.hand_len(winner.opponent()), 0);
        assert!(outcome.hands_played >= 1);
        assert!(outcome.hands_played >= outcome.tiebreaks);
    }
}

/// The rank table is part of the public contract: 2-10 numeric, then
/// J=11, Q=12, K=13, A=14, for every suit.
#[test]
fn test_rank_table() {
    let table = [
        ("2", 2),
        ("3", 3),
        ("4", 4),
        ("5", 5),
        ("6", 6),
        ("7", 7),
        ("8", 8),
        ("9", 9),
        ("10", 10),
        ("J", 11),
        ("Q", 12),
        ("K", 13),
        ("A", 14),
    ];
    for suit in Suit::ALL {
        for (symbol, rank) in table {
            assert_eq!(Card::from_symbol(suit, symbol).unwrap().rank(), rank);
        }
    }
}

/// Unrecognized value symbols are rejected, not coerced.
#[test]
fn test_unrecognized_symbols_fail() {
    for symbol in ["1", "11", "Joker", "j", ""] {
        assert_eq!(
            Card::from_symbol(Suit::Spades, symbol),
            Err(EngineError::InvalidValue(symbol.to_string()))
        );
    }
}

/// Between any two duels, every dealt card is in a hand, on the wall,
/// or among the duelers.
#[test]
fn test_card_conservation_through_a_full_game() {
    let mut game = WarGame::new(GameRng::new(2024));
    game.deal().unwrap();
    assert_eq!(game.cards_in_play(), DECK_SIZE);

    while game.hand_len(P0) > 0 && game.hand_len(P1) > 0 {
        game.step();
        assert_eq!(game.cards_in_play(), DECK_SIZE);
    }

    let outcome = game.resolve().unwrap();
    assert!(outcome.winner.is_some());
}

/// A tie when both players are down to their last card resolves by
/// checking hand 0 first: player 0 loses, the winner takes both cards,
/// and no wall is built.
#[test]
fn test_tie_at_last_card_precedence() {
    let hand0: Hand = [Card::new(Suit::Spades, Value::Five)].into_iter().collect();
    let hand1: Hand = [Card::new(Suit::Hearts, Value::Five)].into_iter().collect();
    let mut game = WarGame::from_hands(hand0, hand1);

    let outcome = game.resolve().unwrap();

    assert_eq!(outcome.winner, Some(P1));
    assert_eq!(outcome.hands_played, 1);
    assert_eq!(outcome.tiebreaks, 1);
    assert_eq!(game.hand_len(P1), 2);
    assert_eq!(game.wall_len(), 0);
}

/// A short-handed player contributes fewer soldiers: with 3 cards left
/// after the tying duelers are drawn, soldiers = min(3, 2, 9) = 2,
/// leaving exactly one card for the deciding duel.
#[test]
fn test_short_hand_soldier_shrink() {
    let hand0: Hand = [
        Card::new(Suit::Spades, Value::Ace),
        Card::new(Suit::Spades, Value::Two),
        Card::new(Suit::Spades, Value::Three),
        Card::new(Suit::Spades, Value::Eight),
    ]
    .into_iter()
    .collect();
    let hand1: Hand = [
        Card::new(Suit::Hearts, Value::Two),
        Card::new(Suit::Hearts, Value::Three),
        Card::new(Suit::Hearts, Value::Four),
        Card::new(Suit::Hearts, Value::Five),
        Card::new(Suit::Hearts, Value::Six),
        Card::new(Suit::Hearts, Value::Seven),
        Card::new(Suit::Hearts, Value::Nine),
        Card::new(Suit::Hearts, Value::Ten),
        Card::new(Suit::Hearts, Value::Jack),
        Card::new(Suit::Clubs, Value::Queen),
        Card::new(Suit::Hearts, Value::Eight),
    ]
    .into_iter()
    .collect();
    let mut game = WarGame::from_hands(hand0, hand1);

    game.step();

    assert_eq!(game.tiebreaks(), 1);
    assert_eq!(game.hand_len(P0), 1);
    assert_eq!(game.wall_len(), 6);
}

/// Outcomes serialize with the winner as a plain player index, the
/// shape the statistics collaborator consumes.
#[test]
fn test_outcome_serializes() {
    let mut game = WarGame::new(GameRng::new(5));
    let outcome = game.play().unwrap();

    let json = serde_json::to_string(&outcome).unwrap();
    let back: war_sim::Outcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, back);
}

/// A fresh deck drains into two 26-card hands and nothing else.
#[test]
fn test_deal_splits_the_deck_evenly() {
    let mut game = WarGame::new(GameRng::new(0));
    game.deal().unwrap();

    assert_eq!(game.hand_len(P0), 26);
    assert_eq!(game.hand_len(P1), 26);
    assert_eq!(game.deck_len(), 0);
}
