use alloc::format;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ContinueError, GoError, PlayError};
use crate::event::{EventKind, ResetReason};
use crate::player::Seat;
use crate::result::{PeggingMove, PlayedCard};
use crate::scoring::{PlayScore, score_play};
use crate::strategy::select_play;

use super::{Game, GameState};

impl Game {
    fn ensure_pegging_turn(&self, seat: Seat) -> Result<(), PlayError> {
        if self.state.get() != GameState::Play {
            return Err(PlayError::InvalidState);
        }
        if self.current_turn.get() != Some(seat) {
            return Err(PlayError::NotYourTurn);
        }
        Ok(())
    }

    fn both_out_of_cards(&self) -> bool {
        self.players
            .lock()
            .iter()
            .all(crate::player::Player::is_out_of_cards)
    }

    /// Gives the lead to `preferred`, or to its opponent if `preferred` has
    /// nothing left to play.
    fn set_next_lead(&self, preferred: Seat) {
        let out = self.players.lock()[preferred.index()].is_out_of_cards();
        let leader = if out { preferred.opponent() } else { preferred };
        self.current_turn.set(Some(leader));
    }

    fn reset_count(&self) {
        self.current_count.set(0);
        self.played_pile.lock().clear();
    }

    fn end_play(&self) {
        self.state.set(GameState::PauseBeforeCount);
        self.current_turn.set(None);
        self.emit(EventKind::PlayComplete, "Play complete. Counting hands.");
    }

    /// Moves play on after `last` put down a card.
    fn advance_play(&self, last: Seat) {
        let count = self.current_count.get();
        let opponent = last.opponent();

        if count == 31 {
            self.reset_count();
            if self.both_out_of_cards() {
                self.end_play();
                return;
            }
            self.set_next_lead(opponent);
            self.state.set(GameState::PauseAt31);
            self.emit(
                EventKind::CountReset {
                    reason: ResetReason::ThirtyOne,
                },
                "Count reset after 31.",
            );
            return;
        }

        let players = self.players.lock();
        let opponent_can_play = players[opponent.index()].can_play(count);
        let opponent_holds_cards = !players[opponent.index()].is_out_of_cards();
        let last_can_play = players[last.index()].can_play(count);
        drop(players);

        if opponent_can_play {
            self.current_turn.set(Some(opponent));
        } else if last_can_play {
            self.current_turn.set(Some(last));
            if opponent_holds_cards {
                self.emit(
                    EventKind::Go { seat: opponent },
                    format!("{} says go.", self.name(opponent)),
                );
            }
        } else {
            self.resolve_go();
        }
    }

    /// Settles a count that neither seat can extend.
    ///
    /// The seat that played the last card pegs one unless the count sits at 0
    /// or 31, then the count resets and its opponent leads.
    fn resolve_go(&self) {
        let count = self.current_count.get();
        let last = self.played_pile.lock().last().map(|played| played.seat);

        if let Some(seat) = last {
            if (1..=30).contains(&count) {
                self.emit(
                    EventKind::GoPoint { seat },
                    format!("{} scores 1 for go.", self.name(seat)),
                );
                if self.award(seat, 1) {
                    return;
                }
            }
        }

        self.reset_count();
        if self.both_out_of_cards() {
            self.end_play();
            return;
        }

        let preferred = last.map_or_else(
            || self.current_turn.get().unwrap_or(Seat::Player),
            Seat::opponent,
        );
        self.set_next_lead(preferred);
        self.state.set(GameState::PauseOnGo);
        self.emit(
            EventKind::CountReset {
                reason: ResetReason::Go,
            },
            "Count reset after go.",
        );
    }

    /// Plays a card from a seat's hand onto the pile.
    ///
    /// Returns the points the play scored.
    ///
    /// # Errors
    ///
    /// Returns an error if pegging is not under way, it is not the seat's
    /// turn, the card is not held or already played, or the card would take
    /// the count past 31.
    pub fn play_card(&self, seat: Seat, card: Card) -> Result<PlayScore, PlayError> {
        self.ensure_pegging_turn(seat)?;

        let count = self.current_count.get();
        let mut players = self.players.lock();
        let player = &mut players[seat.index()];
        if !player.hand().contains(&card) {
            return Err(PlayError::CardNotInHand);
        }
        if player.played().contains(&card) {
            return Err(PlayError::AlreadyPlayed);
        }
        if count + card.point_value() > 31 {
            return Err(PlayError::ExceedsThirtyOne);
        }
        player.mark_played(card);
        drop(players);

        let count = count + card.point_value();
        self.current_count.set(count);
        let pile: Vec<Card> = {
            let mut pile = self.played_pile.lock();
            pile.push(PlayedCard { card, seat });
            pile.iter().map(|played| played.card).collect()
        };
        self.emit(
            EventKind::CardPlayed { seat, card, count },
            format!("{} plays {card} (Count: {count})", self.name(seat)),
        );

        let score = score_play(&pile, count);
        let points = score.total();
        if points > 0 {
            self.emit(
                EventKind::PeggingScore { seat, score },
                format!(
                    "{} scores {points} ({})",
                    self.name(seat),
                    score.reasons().join(", ")
                ),
            );
            if self.award(seat, points) {
                return Ok(score);
            }
        }

        self.advance_play(seat);
        Ok(score)
    }

    /// Declares that a seat cannot play.
    ///
    /// Play normally never needs this: after each card the engine says go on
    /// behalf of a seat that cannot play, and the turn only passes to a seat
    /// holding a legal card. It is kept for drivers that track go themselves
    /// and reports [`GoError::CanStillPlay`] whenever a card still fits.
    ///
    /// # Errors
    ///
    /// Returns an error if pegging is not under way, it is not the seat's
    /// turn, or the seat still holds a card that fits under 31.
    pub fn say_go(&self, seat: Seat) -> Result<(), GoError> {
        if self.state.get() != GameState::Play {
            return Err(GoError::InvalidState);
        }
        if self.current_turn.get() != Some(seat) {
            return Err(GoError::NotYourTurn);
        }

        let count = self.current_count.get();
        let players = self.players.lock();
        if players[seat.index()].can_play(count) {
            return Err(GoError::CanStillPlay);
        }
        let opponent_can_play = players[seat.opponent().index()].can_play(count);
        drop(players);

        self.emit(
            EventKind::Go { seat },
            format!("{} says go.", self.name(seat)),
        );
        if opponent_can_play {
            self.current_turn.set(Some(seat.opponent()));
        } else {
            self.resolve_go();
        }
        Ok(())
    }

    /// Lets the computer seat take its pegging turn.
    ///
    /// # Errors
    ///
    /// Returns an error if pegging is not under way or it is not the
    /// computer's turn.
    pub fn play_computer_turn(&self) -> Result<PeggingMove, PlayError> {
        self.ensure_pegging_turn(Seat::Computer)?;

        let count = self.current_count.get();
        let players = self.players.lock();
        let own = players[Seat::Computer.index()].remaining();
        let opponent = players[Seat::Player.index()].remaining();
        drop(players);

        match select_play(&own, &opponent, count) {
            Some(card) => self
                .play_card(Seat::Computer, card)
                .map(|_| PeggingMove::Played(card)),
            None => self
                .say_go(Seat::Computer)
                .map(|()| PeggingMove::Go)
                .map_err(|err| match err {
                    GoError::NotYourTurn => PlayError::NotYourTurn,
                    GoError::InvalidState | GoError::CanStillPlay => PlayError::InvalidState,
                }),
        }
    }

    /// Resumes pegging after the count was reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not paused after 31 or a go.
    pub fn continue_after_pause(&self) -> Result<(), ContinueError> {
        if !matches!(
            self.state.get(),
            GameState::PauseAt31 | GameState::PauseOnGo
        ) {
            return Err(ContinueError::InvalidState);
        }

        self.state.set(GameState::Play);
        if let Some(seat) = self.current_turn.get() {
            self.emit(
                EventKind::Leads { seat },
                format!("{} leads.", self.name(seat)),
            );
        }
        Ok(())
    }

    /// Marks every unplayed card as played and moves to counting.
    ///
    /// Used by drivers that cap the number of pegging moves in a round.
    pub(crate) fn force_end_play(&self) {
        if !self.state.get().is_pegging() {
            return;
        }

        for player in self.players.lock().iter_mut() {
            for card in player.remaining() {
                player.mark_played(card);
            }
        }
        self.reset_count();
        self.end_play();
    }
}
