//! Result types returned by game operations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::Seat;
use crate::scoring::HandScore;

/// A card on the pegging pile together with the seat that played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    /// The card.
    pub card: Card,
    /// The seat that played it.
    pub seat: Seat,
}

/// What a seat did on its pegging turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeggingMove {
    /// A card was played.
    Played(Card),
    /// The seat said go.
    Go,
}

/// Result of counting one hand or the crib.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandCount {
    /// The seat credited with the points.
    pub seat: Seat,
    /// Whether this was the crib.
    pub is_crib: bool,
    /// The four cards counted (without the cut card).
    pub cards: Vec<Card>,
    /// The score breakdown.
    pub score: HandScore,
}
