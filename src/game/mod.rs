//! The War game itself: the duel/war state machine and its outcome.

pub mod war;

pub use war::{Outcome, WarGame};
