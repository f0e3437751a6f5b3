use alloc::format;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{CutError, DealError, DiscardError};
use crate::event::EventKind;
use crate::player::Seat;
use crate::strategy::select_discard;

use super::{Game, GameState};

/// Cards drawn in a round: six per seat plus the starter.
const ROUND_CARDS: usize = 13;

/// Cards dealt to each seat.
const HAND_SIZE: usize = 6;

impl Game {
    /// Takes the deck for the next round, or puts it back if it is too short.
    fn take_round_deck(&self) -> Result<Deck, DealError> {
        let deck = self.fresh_deck();
        if deck.len() < ROUND_CARDS {
            self.stacked_decks.lock().push_front(deck);
            return Err(DealError::NotEnoughCards);
        }
        Ok(deck)
    }

    fn deal_from(&self, mut deck: Deck, dealer: Seat) {
        self.dealer.set(Some(dealer));
        self.clear_round_state();

        let order = [dealer.opponent(), dealer];
        let mut players = self.players.lock();
        for player in players.iter_mut() {
            player.clear_hand();
        }
        for _ in 0..HAND_SIZE {
            for seat in order {
                if let Some(card) = deck.deal() {
                    players[seat.index()].add_card(card);
                }
            }
        }
        drop(players);

        *self.deck.lock() = deck;
        self.state.set(GameState::Discard);
        self.emit(
            EventKind::Dealt { dealer },
            format!("Deal complete. {}'s crib.", self.name(dealer)),
        );
    }

    /// Cuts for the first deal.
    ///
    /// Each seat turns one card from its own freshly shuffled deck. The lower
    /// point value deals and the first round is dealt straight away.
    ///
    /// Returns `Ok(None)` on a tie; the game stays in
    /// [`GameState::CutForDeal`] and the cut can be repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the cut or a deck runs
    /// short.
    pub fn cut_for_deal(&self) -> Result<Option<Seat>, CutError> {
        if self.state.get() != GameState::CutForDeal {
            return Err(CutError::InvalidState);
        }

        // Shuffled decks are never empty, so only a stacked one can fall short.
        if self
            .stacked_decks
            .lock()
            .iter()
            .take(Seat::BOTH.len())
            .any(Deck::is_empty)
        {
            return Err(CutError::NotEnoughCards);
        }

        let mut cuts = [None::<Card>; 2];
        for seat in Seat::BOTH {
            cuts[seat.index()] = self.fresh_deck().deal();
        }
        let [Some(player_cut), Some(computer_cut)] = cuts else {
            return Err(CutError::NotEnoughCards);
        };

        for (seat, card) in [(Seat::Player, player_cut), (Seat::Computer, computer_cut)] {
            self.emit(
                EventKind::CutForDeal { seat, card },
                format!("{} cuts {card}.", self.name(seat)),
            );
        }

        let dealer = match player_cut.point_value().cmp(&computer_cut.point_value()) {
            core::cmp::Ordering::Less => Seat::Player,
            core::cmp::Ordering::Greater => Seat::Computer,
            core::cmp::Ordering::Equal => {
                self.emit(EventKind::CutTie, "Tie! Cut again.");
                return Ok(None);
            }
        };

        let deck = self
            .take_round_deck()
            .map_err(|_| CutError::NotEnoughCards)?;
        self.emit(
            EventKind::DealerChosen { dealer },
            format!("{} deals first.", self.name(dealer)),
        );
        self.deal_from(deck, dealer);
        Ok(Some(dealer))
    }

    /// Deals the next round after hands have been counted.
    ///
    /// # Errors
    ///
    /// Returns an error if the previous round is not over or the deck is too
    /// short.
    pub fn start_round(&self) -> Result<(), DealError> {
        if self.state.get() != GameState::RoundOver {
            return Err(DealError::InvalidState);
        }
        let dealer = self.dealer.get().ok_or(DealError::InvalidState)?;

        let deck = self.take_round_deck()?;
        self.deal_from(deck, dealer);
        Ok(())
    }

    /// Resets scores, fixes the dealer and deals the first round, skipping the
    /// cut for deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is too short.
    pub fn start_game(&self, dealer: Seat) -> Result<(), DealError> {
        let deck = self.take_round_deck()?;
        self.reset_scores();
        self.emit(
            EventKind::DealerChosen { dealer },
            format!("{} deals first.", self.name(dealer)),
        );
        self.deal_from(deck, dealer);
        Ok(())
    }

    /// Sends two cards from each hand to the crib and cuts the starter.
    ///
    /// `indices` address the human seat's hand; the computer seat chooses its
    /// own discard. A jack cut scores two for the dealer. Pegging then starts
    /// with the non-dealer to lead, unless the jack won the game.
    ///
    /// Returns the cut card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the discard phase, the indices
    /// are out of range or equal, or the deck is empty.
    pub fn discard_to_crib(&self, indices: [usize; 2]) -> Result<Card, DiscardError> {
        if self.state.get() != GameState::Discard {
            return Err(DiscardError::InvalidState);
        }
        let dealer = self.dealer.get().ok_or(DiscardError::InvalidState)?;
        if self.deck.lock().is_empty() {
            return Err(DiscardError::NotEnoughCards);
        }

        let mut players = self.players.lock();
        let computer_hand = players[Seat::Computer.index()].hand();
        if computer_hand.len() < 2 {
            return Err(DiscardError::InvalidState);
        }
        let computer_indices = select_discard(computer_hand, dealer == Seat::Computer);

        let human_discards = players[Seat::Player.index()]
            .take_cards(indices)
            .ok_or(DiscardError::InvalidIndices)?;
        let computer_discards = players[Seat::Computer.index()]
            .take_cards(computer_indices)
            .ok_or(DiscardError::InvalidState)?;
        drop(players);

        let mut crib = self.crib.lock();
        crib.extend(human_discards);
        crib.extend(computer_discards);
        drop(crib);

        let cut = self
            .deck
            .lock()
            .deal()
            .ok_or(DiscardError::NotEnoughCards)?;
        self.cut_card.set(Some(cut));
        self.emit(EventKind::Starter { card: cut }, format!("Cut card: {cut}."));

        if cut.is_jack() {
            self.emit(
                EventKind::HisHeels { seat: dealer },
                format!("{} scores 2 for his heels.", self.name(dealer)),
            );
            if self.award(dealer, 2) {
                return Ok(cut);
            }
        }

        let leader = dealer.opponent();
        self.state.set(GameState::Play);
        self.current_turn.set(Some(leader));
        self.emit(
            EventKind::Leads { seat: leader },
            format!("{} leads.", self.name(leader)),
        );
        Ok(cut)
    }
}
