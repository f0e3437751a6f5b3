//! Players, seats, and hand tracking.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human seat.
    Player,
    /// The computer seat.
    Computer,
}

impl Seat {
    /// Both seats, human first.
    pub const BOTH: [Self; 2] = [Self::Player, Self::Computer];

    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    /// Returns the index of this seat into a two-element array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Computer => 1,
        }
    }
}

/// A player's identity, hand, and score.
///
/// `hand` keeps every card retained for the round. Cards played during the
/// pegging phase are recorded in `played` and stay in `hand` until the round
/// ends, so indices into the hand stay stable while the play goes on.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    is_computer: bool,
    hand: Vec<Card>,
    played: Vec<Card>,
    score: u32,
}

impl Player {
    /// Creates a new player with an empty hand and no points.
    #[must_use]
    pub fn new(name: impl Into<String>, is_computer: bool) -> Self {
        Self {
            name: name.into(),
            is_computer,
            hand: Vec::new(),
            played: Vec::new(),
            score: 0,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this seat is driven by the opponent strategy.
    #[must_use]
    pub const fn is_computer(&self) -> bool {
        self.is_computer
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Adds points to the score.
    pub const fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Resets the score for a new game.
    pub const fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards played so far this round, in play order.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Returns the cards in hand that have not been played yet.
    #[must_use]
    pub fn remaining(&self) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|card| !self.played.contains(card))
            .collect()
    }

    /// Returns whether the card is in the hand and not yet played.
    #[must_use]
    pub fn holds_unplayed(&self, card: Card) -> bool {
        self.hand.contains(&card) && !self.played.contains(&card)
    }

    /// Returns whether any unplayed card fits under 31 at the given count.
    #[must_use]
    pub fn can_play(&self, count: u8) -> bool {
        self.hand
            .iter()
            .any(|card| !self.played.contains(card) && count + card.point_value() <= 31)
    }

    /// Returns whether every card in hand has been played.
    #[must_use]
    pub fn is_out_of_cards(&self) -> bool {
        self.played.len() >= self.hand.len()
    }

    /// Records a card as played.
    ///
    /// Returns `false` if the card is not held or was already played.
    pub fn mark_played(&mut self, card: Card) -> bool {
        if !self.holds_unplayed(card) {
            return false;
        }
        self.played.push(card);
        true
    }

    /// Removes the cards at the given indices and returns them.
    ///
    /// Returns `None` without touching the hand if any index is out of range
    /// or the indices repeat.
    pub fn take_cards(&mut self, indices: [usize; 2]) -> Option<[Card; 2]> {
        let [first, second] = indices;
        if first == second || first >= self.hand.len() || second >= self.hand.len() {
            return None;
        }

        let (high, low) = if first > second {
            (first, second)
        } else {
            (second, first)
        };
        let high_card = self.hand.remove(high);
        let low_card = self.hand.remove(low);

        if first > second {
            Some([high_card, low_card])
        } else {
            Some([low_card, high_card])
        }
    }

    /// Sorts the hand by order rank, aces low.
    pub fn sort_hand(&mut self) {
        self.hand.sort_by_key(|card| (card.order_rank(), card.suit));
    }

    /// Clears the hand and played cards for a new round.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
        self.played.clear();
    }
}
