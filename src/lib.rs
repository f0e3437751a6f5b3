//! A cribbage rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a two-seat game (one human
//! seat, one computer seat) through the cut for deal, the discard to the crib,
//! pegging, and hand counting, together with the pure scoring functions and
//! the heuristics the computer seat plays with. A [`Simulator`] plays batches
//! of complete games for measuring those heuristics.
//!
//! # Example
//!
//! ```
//! use cribbage::{Game, GameOptions, GameState, Seat};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_game(Seat::Computer).unwrap();
//! assert_eq!(game.state(), GameState::Discard);
//! assert_eq!(game.hand(Seat::Player).len(), 6);
//!
//! game.discard_to_crib([0, 1]).unwrap();
//! assert_eq!(game.crib().len(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod scoring;
pub mod simulation;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    ContinueError, CountError, CutError, DealError, DiscardError, GoError, PlayError,
    SimulationError,
};
pub use event::{EventKind, GameEvent, ResetReason};
pub use game::{Game, GameState};
pub use options::{DEFAULT_TARGET_SCORE, GameOptions, RunScoring, SimulationOptions};
pub use player::{Player, Seat};
pub use result::{HandCount, PeggingMove, PlayedCard};
pub use scoring::{HandScore, PlayScore, score_hand, score_hand_with, score_play};
pub use simulation::{GameRecord, SimulationReport, Simulator, Summary};
pub use strategy::{select_discard, select_play};
