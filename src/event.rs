//! Narration events produced by the game engine.

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::player::Seat;
use crate::scoring::{HandScore, PlayScore};

/// Why the pegging count went back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// The count reached exactly 31.
    ThirtyOne,
    /// Neither seat could play.
    Go,
}

/// Structured description of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Scores were reset and the game waits for the cut.
    NewGame,
    /// A seat turned a card while cutting for deal.
    CutForDeal {
        /// The seat that cut.
        seat: Seat,
        /// The card turned.
        card: Card,
    },
    /// Both seats cut the same value.
    CutTie,
    /// The dealer was chosen.
    DealerChosen {
        /// The new dealer.
        dealer: Seat,
    },
    /// Six cards were dealt to each seat.
    Dealt {
        /// The dealer, who owns the crib.
        dealer: Seat,
    },
    /// The starter card was cut.
    Starter {
        /// The cut card.
        card: Card,
    },
    /// The dealer cut a jack.
    HisHeels {
        /// The dealer.
        seat: Seat,
    },
    /// A seat leads the next count.
    Leads {
        /// The seat to play.
        seat: Seat,
    },
    /// A card was added to the pile.
    CardPlayed {
        /// The seat that played.
        seat: Seat,
        /// The card played.
        card: Card,
        /// The running count after the play.
        count: u8,
    },
    /// A play scored points.
    PeggingScore {
        /// The seat that scored.
        seat: Seat,
        /// The breakdown.
        score: PlayScore,
    },
    /// A seat could not play.
    Go {
        /// The seat saying go.
        seat: Seat,
    },
    /// The last seat to play scored one for go.
    GoPoint {
        /// The seat that scored.
        seat: Seat,
    },
    /// The count went back to zero.
    CountReset {
        /// Why it was reset.
        reason: ResetReason,
    },
    /// Every card has been played.
    PlayComplete,
    /// A hand or crib was counted.
    HandCounted {
        /// The owner of the counted cards.
        seat: Seat,
        /// Whether the crib was counted.
        crib: bool,
        /// The breakdown.
        score: HandScore,
    },
    /// Counting finished and the deal passes.
    RoundOver {
        /// The dealer for the next round.
        next_dealer: Seat,
    },
    /// A seat reached the target score.
    GameOver {
        /// The winner.
        winner: Seat,
    },
}

/// A single narration event.
///
/// `message` is ready for display; `kind` carries the same information in
/// structured form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    /// What happened.
    pub kind: EventKind,
    /// Human-readable narration.
    pub message: String,
}

impl GameEvent {
    /// Creates a new event.
    #[must_use]
    pub fn new(kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
