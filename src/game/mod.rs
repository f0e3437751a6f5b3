//! Game engine and state management.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::event::{EventKind, GameEvent};
use crate::options::GameOptions;
use crate::player::{Player, Seat};
use crate::result::PlayedCard;

mod count;
mod deal;
mod play;
pub mod state;

pub use state::GameState;

type Listener = Box<dyn FnMut(&GameEvent) + Send>;

/// A two-seat cribbage game: one human seat and one computer seat.
///
/// The game owns the deck, both players, and all round state. Every public
/// method takes `&self`; state lives behind internal locks. Misuse (calling an
/// operation in the wrong state or out of turn) returns an error and changes
/// nothing.
///
/// Narration is collected as [`GameEvent`]s, which can be drained with
/// [`Game::take_events`] or observed through [`Game::add_listener`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The human seat and the computer seat, indexed by [`Seat::index`].
    pub players: Mutex<[Player; 2]>,
    /// Cards in the deck for the current round.
    pub deck: Mutex<Deck>,
    /// The dealer's crib.
    pub crib: Mutex<Vec<Card>>,
    /// The starter card shared by both hands and the crib.
    pub cut_card: Mutex<Option<Card>>,
    /// Cards played since the count last reset.
    pub played_pile: Mutex<Vec<PlayedCard>>,
    /// Running pegging count.
    pub current_count: Mutex<u8>,
    /// Current dealer.
    dealer: Mutex<Option<Seat>>,
    /// Seat to play during pegging.
    current_turn: Mutex<Option<Seat>>,
    /// Seat that reached the target score.
    winner: Mutex<Option<Seat>>,
    /// Prepared decks used ahead of shuffled ones.
    stacked_decks: Mutex<VecDeque<Deck>>,
    /// Undelivered narration.
    events: Mutex<Vec<GameEvent>>,
    /// Narration callbacks.
    listeners: Mutex<Vec<Listener>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts in [`GameState::CutForDeal`].
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::CutForDeal);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let players = [
            Player::new(options.player_name, false),
            Player::new(options.computer_name, true),
        ];

        Self {
            options,
            state: Mutex::new(GameState::CutForDeal),
            players: Mutex::new(players),
            deck: Mutex::new(Deck::from_cards(Vec::new())),
            crib: Mutex::new(Vec::new()),
            cut_card: Mutex::new(None),
            played_pile: Mutex::new(Vec::new()),
            current_count: Mutex::new(0),
            dealer: Mutex::new(None),
            current_turn: Mutex::new(None),
            winner: Mutex::new(None),
            stacked_decks: Mutex::new(VecDeque::new()),
            events: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Queues a prepared deck to be used in place of the next shuffled one.
    ///
    /// Decks are consumed in the order they were stacked: the cut for deal
    /// takes one deck per seat (human first), and every round takes one.
    pub fn stack_deck(&self, deck: Deck) {
        self.stacked_decks.lock().push_back(deck);
    }

    /// Returns the next stacked deck, or a freshly shuffled one.
    fn fresh_deck(&self) -> Deck {
        if let Some(deck) = self.stacked_decks.lock().pop_front() {
            return deck;
        }
        let mut rng = self.rng.lock();
        Deck::shuffled(&mut *rng)
    }

    /// Registers a callback invoked once for every event, in emission order.
    ///
    /// The callback runs while the engine is mid-operation and must not call
    /// back into the game.
    pub fn add_listener<F>(&self, listener: F)
    where
        F: FnMut(&GameEvent) + Send + 'static,
    {
        self.listeners.lock().push(Box::new(listener));
    }

    /// Drains and returns the events emitted since the last call.
    pub fn take_events(&self) -> Vec<GameEvent> {
        self.events.replace(Vec::new())
    }

    fn emit(&self, kind: EventKind, message: impl Into<alloc::string::String>) {
        let event = GameEvent::new(kind, message);
        debug!(kind = ?event.kind, "{}", event.message);

        for listener in self.listeners.lock().iter_mut() {
            listener(&event);
        }
        self.events.lock().push(event);
    }

    /// Returns the display name of a seat.
    #[must_use]
    pub const fn name(&self, seat: Seat) -> &'static str {
        match seat {
            Seat::Player => self.options.player_name,
            Seat::Computer => self.options.computer_name,
        }
    }

    /// Adds points to a seat and checks for a winner.
    ///
    /// Returns `true` if the award ended the game.
    fn award(&self, seat: Seat, points: u32) -> bool {
        if points == 0 {
            return false;
        }

        let mut players = self.players.lock();
        let player = &mut players[seat.index()];
        player.add_points(points);
        let score = player.score();
        drop(players);

        debug!(?seat, points, score, "points awarded");

        if score < self.options.target_score {
            return false;
        }

        self.state.set(GameState::GameOver);
        self.winner.set(Some(seat));
        self.current_turn.set(None);
        info!(?seat, score, "game over");
        self.emit(
            EventKind::GameOver { winner: seat },
            alloc::format!("{} wins!", self.name(seat)),
        );
        true
    }

    /// Resets scores and returns to the cut for deal.
    pub fn new_game(&self) {
        self.reset_scores();
        *self.dealer.lock() = None;
        self.clear_round_state();
        self.state.set(GameState::CutForDeal);
        self.emit(EventKind::NewGame, "New game started. Cut for deal to begin.");
    }

    fn reset_scores(&self) {
        for player in self.players.lock().iter_mut() {
            player.reset_score();
            player.clear_hand();
        }
        self.winner.set(None);
    }

    fn clear_round_state(&self) {
        self.crib.lock().clear();
        self.cut_card.set(None);
        self.played_pile.lock().clear();
        self.current_count.set(0);
        self.current_turn.set(None);
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.get()
    }

    /// Returns the seat to play during pegging.
    #[must_use]
    pub fn current_turn(&self) -> Option<Seat> {
        self.current_turn.get()
    }

    /// Returns the current dealer, once one has been chosen.
    #[must_use]
    pub fn dealer(&self) -> Option<Seat> {
        self.dealer.get()
    }

    /// Returns the winner once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner.get()
    }

    /// Returns the running pegging count.
    #[must_use]
    pub fn current_count(&self) -> u8 {
        self.current_count.get()
    }

    /// Returns the crib.
    #[must_use]
    pub fn crib(&self) -> Vec<Card> {
        self.crib.lock().clone()
    }

    /// Returns the cut card.
    #[must_use]
    pub fn cut_card(&self) -> Option<Card> {
        self.cut_card.get()
    }

    /// Returns the cards played since the count last reset.
    #[must_use]
    pub fn played_pile(&self) -> Vec<PlayedCard> {
        self.played_pile.lock().clone()
    }

    /// Returns the number of cards left in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a clone of a seat's player.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Player {
        self.players.lock()[seat.index()].clone()
    }

    /// Returns a seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> Vec<Card> {
        self.players.lock()[seat.index()].hand().to_vec()
    }

    /// Returns the cards a seat has played this round.
    #[must_use]
    pub fn played_cards(&self, seat: Seat) -> Vec<Card> {
        self.players.lock()[seat.index()].played().to_vec()
    }

    /// Returns the cards a seat still holds unplayed.
    #[must_use]
    pub fn remaining_cards(&self, seat: Seat) -> Vec<Card> {
        self.players.lock()[seat.index()].remaining()
    }

    /// Returns a seat's score.
    #[must_use]
    pub fn score(&self, seat: Seat) -> u32 {
        self.players.lock()[seat.index()].score()
    }

    /// Sorts a seat's hand by rank, aces low.
    ///
    /// Discard indices refer to the hand order, so sort before choosing them.
    pub fn sort_hand(&self, seat: Seat) {
        self.players.lock()[seat.index()].sort_hand();
    }
}
