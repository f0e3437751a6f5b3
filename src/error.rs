//! Error types for game operations.
//!
//! Every operation that fails leaves the game untouched.

use thiserror::Error;

/// Errors that can occur while cutting for deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// Invalid game state for cutting.
    #[error("invalid game state for cutting for deal")]
    InvalidState,
    /// A cut deck was empty.
    #[error("not enough cards to cut")]
    NotEnoughCards,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when discarding to the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Invalid game state for discarding.
    #[error("invalid game state for discarding")]
    InvalidState,
    /// An index does not address a card in the hand, or both indices match.
    #[error("invalid discard indices")]
    InvalidIndices,
    /// No card left in the deck for the cut.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// The card is not in the seat's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The card has already been played this round.
    #[error("card has already been played")]
    AlreadyPlayed,
    /// Playing the card would take the count past 31.
    #[error("card would take the count past 31")]
    ExceedsThirtyOne,
}

/// Errors that can occur when saying go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GoError {
    /// Invalid game state for saying go.
    #[error("invalid game state for saying go")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// The seat still holds a playable card.
    #[error("seat still has a playable card")]
    CanStillPlay,
}

/// Errors that can occur when resuming after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContinueError {
    /// The game is not paused.
    #[error("game is not paused")]
    InvalidState,
}

/// Errors that can occur when counting hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    /// Invalid game state for counting.
    #[error("invalid game state for counting")]
    InvalidState,
    /// No cut card has been turned.
    #[error("no cut card")]
    NoCutCard,
}

/// Errors that stop a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// Discarding failed.
    #[error("discard failed: {0}")]
    Discard(#[from] DiscardError),
    /// A pegging play failed.
    #[error("play failed: {0}")]
    Play(#[from] PlayError),
    /// Saying go failed.
    #[error("go failed: {0}")]
    Go(#[from] GoError),
    /// Resuming after a pause failed.
    #[error("continue failed: {0}")]
    Continue(#[from] ContinueError),
    /// Counting failed.
    #[error("count failed: {0}")]
    Count(#[from] CountError),
}
