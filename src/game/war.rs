//! The War game state machine.
//!
//! One `WarGame` is one complete play-through: deal a shuffled deck into
//! two 26-card hands, then resolve duels until one hand is empty.
//!
//! ## Rules
//!
//! Each duel, both players turn over their top card; the higher rank
//! takes both cards (plus any accumulated wall) under the bottom of
//! their hand. Equal ranks declare war:
//!
//! - If the player who just played their last card has an empty hand,
//!   they lose the tie outright and the other player takes everything.
//!   Hand 0 is checked before hand 1.
//! - Otherwise both duelers go face-down onto the wall, and each side
//!   adds `min(3, len(hand0) - 1, len(hand1) - 1)` soldiers. The `- 1`
//!   keeps a short-handed player exactly one card to duel with. The
//!   next duel decides the whole wall; ties chain, and the wall keeps
//!   growing until a duel resolves.
//!
//! ## Integrity
//!
//! Outside of a single duel resolution, every card dealt is in a hand,
//! on the wall, or among the duelers. The resolution step verifies this
//! and fails with `EngineError::InvariantViolation` on a mismatch: a
//! leak means the statistics downstream would be meaningless.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::cards::{Card, Deck, Hand, DECK_SIZE};
use crate::core::{EngineError, GameRng, PlayerId, PlayerMap};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// Most soldiers each side commits to the wall per war.
const MAX_SOLDIERS: usize = 3;

/// The result of one completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The player holding all the cards, or `None` if the game did not
    /// resolve cleanly (unreachable while the card-count invariant
    /// holds).
    pub winner: Option<PlayerId>,
    /// Total duels resolved, tie duels included.
    pub hands_played: u32,
    /// Tie events, whether they escalated to a wall or resolved through
    /// the empty-hand edge case.
    pub tiebreaks: u32,
}

/// A single game of War.
#[derive(Clone, Debug)]
pub struct WarGame {
    deck: Deck,
    hands: PlayerMap<Hand>,
    wall: Vec<Card>,
    duelers: SmallVec<[Card; 2]>,
    hands_played: u32,
    tiebreaks: u32,
    winner: Option<PlayerId>,
    rng: GameRng,
    /// Conservation target for the integrity check: `DECK_SIZE` for
    /// dealt games, the entry card total for scripted ones.
    total_cards: usize,
}

impl WarGame {
    /// Create a game with a fresh full deck, ready to `play`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            deck: Deck::new(),
            hands: PlayerMap::with_default(2),
            wall: Vec::new(),
            duelers: SmallVec::new(),
            hands_played: 0,
            tiebreaks: 0,
            winner: None,
            rng,
            total_cards: DECK_SIZE,
        }
    }

    /// Create a game mid-flight from two arbitrary hands, skipping the
    /// deal. Used to script duel scenarios (edge cases are hard to
    /// reach from a random shuffle). Drive it with `step` or `resolve`.
    #[must_use]
    pub fn from_hands(hand0: Hand, hand1: Hand) -> Self {
        let total_cards = hand0.len() + hand1.len();
        Self {
            deck: Deck::default(),
            hands: PlayerMap::new(2, |p| {
                if p == P0 {
                    hand0.clone()
                } else {
                    hand1.clone()
                }
            }),
            wall: Vec::new(),
            duelers: SmallVec::new(),
            hands_played: 0,
            tiebreaks: 0,
            winner: None,
            rng: GameRng::new(0),
            total_cards,
        }
    }

    /// Play the game to completion: deal, duel until one hand is empty,
    /// check integrity, declare the winner.
    pub fn play(&mut self) -> Result<Outcome, EngineError> {
        self.play_with_cutoff(None)
    }

    /// Like `play`, but abandon the game with `CutoffExceeded` if it
    /// runs past `cutoff` duels. Purely defensive for bulk runs; War
    /// has no bounded length in the model.
    pub fn play_with_cutoff(&mut self, cutoff: Option<u32>) -> Result<Outcome, EngineError> {
        self.deal()?;
        self.resolve_with_cutoff(cutoff)
    }

    /// Deal the full deck into two 26-card hands, alternating player 0
    /// then player 1.
    ///
    /// Requires a full deck and empty hands; anything else means cards
    /// leaked from a previous game and fails with `InvariantViolation`.
    pub fn deal(&mut self) -> Result<(), EngineError> {
        let counted = self.cards_in_play() + self.deck.len();
        if self.deck.len() != DECK_SIZE || counted != DECK_SIZE {
            return Err(EngineError::InvariantViolation {
                counted,
                expected: DECK_SIZE,
            });
        }

        self.hands_played = 0;
        self.tiebreaks = 0;
        self.winner = None;

        self.deck.shuffle(&mut self.rng);
        while !self.deck.is_empty() {
            self.hands[P0].place_top(self.deck.draw_top()?);
            self.hands[P1].place_top(self.deck.draw_top()?);
        }
        Ok(())
    }

    /// Run the duel loop from the current state to completion.
    pub fn resolve(&mut self) -> Result<Outcome, EngineError> {
        self.resolve_with_cutoff(None)
    }

    /// Run the duel loop from the current state, with an optional duel
    /// cutoff.
    pub fn resolve_with_cutoff(&mut self, cutoff: Option<u32>) -> Result<Outcome, EngineError> {
        while !self.hands[P0].is_empty() && !self.hands[P1].is_empty() {
            if let Some(limit) = cutoff {
                if self.hands_played >= limit {
                    return Err(EngineError::CutoffExceeded {
                        hands_played: self.hands_played,
                    });
                }
            }
            self.step();
        }

        let counted = self.cards_in_play();
        if counted != self.total_cards {
            return Err(EngineError::InvariantViolation {
                counted,
                expected: self.total_cards,
            });
        }

        self.winner = if self.hands[P0].len() == self.total_cards {
            Some(P0)
        } else if self.hands[P1].len() == self.total_cards {
            Some(P1)
        } else {
            None
        };

        Ok(Outcome {
            winner: self.winner,
            hands_played: self.hands_played,
            tiebreaks: self.tiebreaks,
        })
    }

    /// Resolve a single duel, escalating through the tie rule if the
    /// ranks match.
    ///
    /// Panics if either hand is empty; callers gate on that (it is the
    /// loop's termination condition).
    pub fn step(&mut self) {
        let (Some(card0), Some(card1)) = (self.hands[P0].draw_top(), self.hands[P1].draw_top())
        else {
            panic!("stepped a duel with an empty hand");
        };
        self.duelers.push(card0);
        self.duelers.push(card1);
        self.hands_played += 1;

        match card0.cmp_rank(card1) {
            Ordering::Greater => self.award(P0),
            Ordering::Less => self.award(P1),
            Ordering::Equal => {
                self.tiebreaks += 1;
                // A player whose tying card was their last loses the
                // tie outright. Hand 0 first; the both-empty case is
                // unreachable from a 52-card deal.
                if self.hands[P0].is_empty() {
                    self.award(P1);
                } else if self.hands[P1].is_empty() {
                    self.award(P0);
                } else {
                    self.build_wall();
                }
            }
        }
    }

    /// Give the duelers, then the wall, to the duel winner.
    fn award(&mut self, winner: PlayerId) {
        let hand = &mut self.hands[winner];
        hand.place_bottom_all(self.duelers.drain(..));
        hand.place_bottom_all(self.wall.drain(..));
    }

    /// Escalate a tie: duelers join the wall face-down, then each side
    /// commits its soldiers, always keeping one card back for the
    /// deciding duel.
    fn build_wall(&mut self) {
        let soldiers = MAX_SOLDIERS
            .min(self.hands[P0].len() - 1)
            .min(self.hands[P1].len() - 1);

        self.wall.extend(self.duelers.drain(..));
        for _ in 0..soldiers {
            for player in [P0, P1] {
                let Some(card) = self.hands[player].draw_top() else {
                    panic!("soldier count left {} without a card", player);
                };
                self.wall.push(card);
            }
        }
    }

    /// Reclaim every card back into the deck and reset counters, so the
    /// instance can deal and play again with a new RNG stream.
    pub fn reset(&mut self, rng: GameRng) {
        for (_, hand) in self.hands.iter_mut() {
            let cards: Vec<Card> = hand.drain().collect();
            self.deck.reclaim(cards);
        }
        self.deck.reclaim(self.wall.drain(..));
        self.deck.reclaim(self.duelers.drain(..));

        self.hands_played = 0;
        self.tiebreaks = 0;
        self.winner = None;
        self.rng = rng;
        self.total_cards = self.deck.len();
    }

    /// Cards currently in hands, on the wall, or among the duelers.
    /// Equal to the dealt total at every point between duels.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.hands[P0].len() + self.hands[P1].len() + self.wall.len() + self.duelers.len()
    }

    /// Size of a player's hand.
    #[must_use]
    pub fn hand_len(&self, player: PlayerId) -> usize {
        self.hands[player].len()
    }

    /// Cards accumulated on the wall.
    #[must_use]
    pub fn wall_len(&self) -> usize {
        self.wall.len()
    }

    /// Cards remaining in the deck (52 before dealing, 0 after).
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Duels resolved so far, tie duels included.
    #[must_use]
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// Tie events so far.
    #[must_use]
    pub fn tiebreaks(&self) -> u32 {
        self.tiebreaks
    }

    /// The winner, once the game has resolved.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }
}
