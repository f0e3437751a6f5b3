use alloc::format;
use alloc::vec::Vec;

use crate::error::CountError;
use crate::event::EventKind;
use crate::player::Seat;
use crate::result::HandCount;
use crate::scoring::score_hand_with;

use super::{Game, GameState};

impl Game {
    /// Counts the non-dealer's hand, the dealer's hand, then the crib.
    ///
    /// Counting stops as soon as a seat reaches the target score. Otherwise
    /// the deal passes and the game waits in [`GameState::RoundOver`].
    ///
    /// Returns the counts made, in counting order.
    ///
    /// # Errors
    ///
    /// Returns an error if pegging has not finished or no cut card was turned.
    pub fn count_hands(&self) -> Result<Vec<HandCount>, CountError> {
        if self.state.get() != GameState::PauseBeforeCount {
            return Err(CountError::InvalidState);
        }
        let dealer = self.dealer.get().ok_or(CountError::InvalidState)?;
        let cut = self.cut_card.get().ok_or(CountError::NoCutCard)?;

        let non_dealer = dealer.opponent();
        let crib = self.crib();
        let to_count = [
            (non_dealer, false, self.hand(non_dealer)),
            (dealer, false, self.hand(dealer)),
            (dealer, true, crib),
        ];

        let mut counts = Vec::with_capacity(to_count.len());
        for (seat, is_crib, cards) in to_count {
            let score = score_hand_with(&cards, cut, is_crib, self.options.run_scoring);
            let total = score.total();
            let source = if is_crib { "crib" } else { "hand" };
            let message = if total == 0 {
                format!("{} scores 0 from {source}.", self.name(seat))
            } else {
                format!(
                    "{} scores {total} from {source} ({}).",
                    self.name(seat),
                    score.reasons().join(", ")
                )
            };
            self.emit(
                EventKind::HandCounted {
                    seat,
                    crib: is_crib,
                    score,
                },
                message,
            );

            counts.push(HandCount {
                seat,
                is_crib,
                cards,
                score,
            });
            if self.award(seat, total) {
                return Ok(counts);
            }
        }

        let next_dealer = dealer.opponent();
        self.dealer.set(Some(next_dealer));
        self.state.set(GameState::RoundOver);
        self.emit(
            EventKind::RoundOver { next_dealer },
            format!(
                "Current score: {} {}, {} {}. {} deals next.",
                self.name(Seat::Player),
                self.score(Seat::Player),
                self.name(Seat::Computer),
                self.score(Seat::Computer),
                self.name(next_dealer),
            ),
        );
        Ok(counts)
    }
}
