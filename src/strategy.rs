//! Heuristic decisions for the computer seat.
//!
//! Both procedures are deterministic: the same cards and count always give the
//! same choice.

use alloc::vec::Vec;

use crate::card::Card;

/// Weight applied to the crib estimate when choosing a discard.
pub const CRIB_WEIGHT: f64 = 1.5;

/// Bonus for a play that makes 15 or 31.
const SCORING_PLAY_BONUS: f64 = 20.0;
/// Reward per follow-up card still playable after this play.
const FLEXIBILITY_REWARD: f64 = 2.0;
/// Penalty for a play that leaves nothing playable below 31.
const DEAD_END_PENALTY: f64 = 10.0;
/// Penalty when the opponent can answer with 31.
const OPPONENT_THIRTY_ONE_PENALTY: f64 = 15.0;
/// Penalty when the opponent can answer with 15.
const OPPONENT_FIFTEEN_PENALTY: f64 = 8.0;
/// Penalty when the opponent holds the same rank.
const OPPONENT_PAIR_PENALTY: f64 = 5.0;
/// Penalty for spending a ten-card while the count is low.
const EARLY_HIGH_CARD_PENALTY: f64 = 3.0;
/// Fraction of 31 below which the count counts as low.
const LOW_COUNT_FRACTION: f64 = 0.6;

/// Chooses the two cards of a six-card hand to send to the crib.
///
/// Every pair of indices is tried in order and the first pair with the lowest
/// [`discard_cost`] wins.
///
/// Returns `[0, 1]` for hands with fewer than two cards.
#[must_use]
pub fn select_discard(hand: &[Card], is_dealer: bool) -> [usize; 2] {
    let mut best = [0, 1];
    let mut best_cost = f64::INFINITY;

    for i in 0..hand.len() {
        for j in i + 1..hand.len() {
            let kept: Vec<Card> = hand
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &card)| card)
                .collect();
            let cost = discard_cost(&kept, [hand[i], hand[j]], is_dealer);
            if cost < best_cost {
                best_cost = cost;
                best = [i, j];
            }
        }
    }

    best
}

/// Combined cost of keeping `kept` and sending `discards` to the crib.
///
/// The crib estimate counts in the discarder's favour when they deal and
/// against them otherwise.
#[must_use]
pub fn discard_cost(kept: &[Card], discards: [Card; 2], is_dealer: bool) -> f64 {
    let retained = f64::from(retained_value(kept));
    let crib = f64::from(crib_estimate(discards));
    if is_dealer {
        retained + crib * CRIB_WEIGHT
    } else {
        retained - crib * CRIB_WEIGHT
    }
}

/// Two points for every pair of kept cards summing to 15.
///
/// Each unordered pair counts once, so a kept 5 and 10 are worth 2, not 4.
#[must_use]
pub fn retained_value(kept: &[Card]) -> u32 {
    let mut value = 0;
    for (i, a) in kept.iter().enumerate() {
        for b in &kept[i + 1..] {
            if a.point_value() + b.point_value() == 15 {
                value += 2;
            }
        }
    }
    value
}

/// Rough value the two discards bring to the crib: 2 for a fifteen, 2 for a
/// pair.
#[must_use]
pub fn crib_estimate(discards: [Card; 2]) -> u32 {
    let [a, b] = discards;
    let mut estimate = 0;
    if a.point_value() + b.point_value() == 15 {
        estimate += 2;
    }
    if a.rank == b.rank {
        estimate += 2;
    }
    estimate
}

/// Chooses a card to peg.
///
/// `own` and `opponent` are the cards each side still holds unplayed. Returns
/// `None` when no card fits under 31.
#[must_use]
pub fn select_play(own: &[Card], opponent: &[Card], count: u8) -> Option<Card> {
    let legal: Vec<Card> = own
        .iter()
        .copied()
        .filter(|card| count + card.point_value() <= 31)
        .collect();

    if legal.len() <= 1 {
        return legal.first().copied();
    }

    let mut best = legal[0];
    let mut best_value = f64::NEG_INFINITY;
    for &card in &legal {
        let value = play_value(card, own, opponent, count);
        if value > best_value {
            best_value = value;
            best = card;
        }
    }

    Some(best)
}

/// Heuristic value of playing `card` at `count`.
#[must_use]
pub fn play_value(card: Card, own: &[Card], opponent: &[Card], count: u8) -> f64 {
    let new_count = count + card.point_value();
    let scores = new_count == 15 || new_count == 31;
    let mut value = 0.0;

    if scores {
        value += SCORING_PLAY_BONUS;
    }

    let follow_ups = own
        .iter()
        .filter(|&&other| other != card && new_count + other.point_value() <= 31)
        .count();
    if follow_ups == 0 && new_count < 31 {
        value -= DEAD_END_PENALTY;
    } else {
        value += FLEXIBILITY_REWARD * f64::from(follow_ups as u32);
    }

    if opponent
        .iter()
        .any(|other| new_count + other.point_value() == 31)
    {
        value -= OPPONENT_THIRTY_ONE_PENALTY;
    }
    if opponent
        .iter()
        .any(|other| new_count + other.point_value() == 15)
    {
        value -= OPPONENT_FIFTEEN_PENALTY;
    }
    if opponent.iter().any(|other| other.rank == card.rank) {
        value -= OPPONENT_PAIR_PENALTY;
    }

    if f64::from(new_count) / 31.0 < LOW_COUNT_FRACTION && card.point_value() >= 10 {
        value -= EARLY_HIGH_CARD_PENALTY;
    }

    if !scores {
        value -= f64::from(card.point_value()) / 10.0;
    }

    value
}
