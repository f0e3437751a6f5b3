//! Hand, crib, and pegging scores.
//!
//! Both scorers are pure: they look at the cards they are given and return a
//! breakdown. Awarding the points is left to the [`Game`](crate::Game).

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use crate::card::Card;
use crate::options::RunScoring;

/// Longest trailing window checked for a run during pegging.
pub const MAX_PLAY_RUN: usize = 5;

/// Score breakdown for a hand or crib counted with the cut card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandScore {
    /// Points from card combinations summing to 15.
    pub fifteens: u32,
    /// Points from pairs of equal rank.
    pub pairs: u32,
    /// Points from runs.
    pub runs: u32,
    /// Points from a flush.
    pub flush: u32,
    /// Point for the jack matching the cut suit.
    pub nobs: u32,
}

impl HandScore {
    /// Returns the total points.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.fifteens + self.pairs + self.runs + self.flush + self.nobs
    }

    /// Returns one narration line per scoring category that scored.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        [
            ("Fifteens", self.fifteens),
            ("Pairs", self.pairs),
            ("Runs", self.runs),
            ("Flush", self.flush),
            ("Nobs", self.nobs),
        ]
        .into_iter()
        .filter(|&(_, points)| points > 0)
        .map(|(label, points)| format!("{label} for {points}"))
        .collect()
    }
}

/// Score breakdown for a single card added to the pegging pile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayScore {
    /// Two points when the count reaches exactly 15.
    pub fifteen: u32,
    /// Two points when the count reaches exactly 31.
    pub thirty_one: u32,
    /// Number of trailing cards sharing the played card's rank (1 if none).
    pub matching: u8,
    /// Points for the pair, three, or four of a kind.
    pub pairs: u32,
    /// Length of the trailing run, or 0.
    pub run: u32,
}

impl PlayScore {
    /// Returns the total points.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.fifteen + self.thirty_one + self.pairs + self.run
    }

    /// Returns one narration line per scoring combination.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if self.fifteen > 0 {
            reasons.push(String::from("15 for 2"));
        }
        if self.thirty_one > 0 {
            reasons.push(String::from("31 for 2"));
        }
        match self.matching {
            2 => reasons.push(String::from("Pair for 2")),
            3 => reasons.push(String::from("Three of a kind for 6")),
            4 => reasons.push(String::from("Four of a kind for 12")),
            _ => {}
        }
        if self.run > 0 {
            reasons.push(format!("Run of {} for {}", self.run, self.run));
        }
        reasons
    }
}

/// Scores a hand or crib together with the cut card.
///
/// Runs are scored with [`RunScoring::Longest`].
///
/// # Example
///
/// ```
/// use cribbage::{Card, Suit, score_hand};
///
/// let hand = [
///     Card::new(Suit::Spades, 5),
///     Card::new(Suit::Clubs, 5),
///     Card::new(Suit::Hearts, 5),
///     Card::new(Suit::Diamonds, 11),
/// ];
/// let cut = Card::new(Suit::Diamonds, 5);
/// assert_eq!(score_hand(&hand, cut, false).total(), 29);
/// ```
#[must_use]
pub fn score_hand(cards: &[Card], cut: Card, is_crib: bool) -> HandScore {
    score_hand_with(cards, cut, is_crib, RunScoring::Longest)
}

/// Scores a hand or crib together with the cut card using the given run rule.
#[must_use]
pub fn score_hand_with(
    cards: &[Card],
    cut: Card,
    is_crib: bool,
    run_scoring: RunScoring,
) -> HandScore {
    let all: Vec<Card> = cards.iter().copied().chain(iter::once(cut)).collect();

    HandScore {
        fifteens: fifteen_points(&all),
        pairs: pair_points(&all),
        runs: run_points(&all, run_scoring),
        flush: flush_points(cards, cut, is_crib),
        nobs: nobs_points(cards, cut),
    }
}

/// Scores the most recent card of a pegging pile.
///
/// `pile` holds the cards of the current count sequence in play order, with
/// the card just played last; `count` is the running count after that card.
#[must_use]
pub fn score_play(pile: &[Card], count: u8) -> PlayScore {
    let mut score = PlayScore {
        matching: 1,
        ..PlayScore::default()
    };

    if count == 15 {
        score.fifteen = 2;
    }
    if count == 31 {
        score.thirty_one = 2;
    }

    let Some(last) = pile.last() else {
        score.matching = 0;
        return score;
    };

    score.matching = 1 + pile
        .iter()
        .rev()
        .skip(1)
        .take_while(|card| card.rank == last.rank)
        .count() as u8;
    let matching = u32::from(score.matching);
    score.pairs = matching * (matching - 1);

    let longest = pile.len().min(MAX_PLAY_RUN);
    for len in (3..=longest).rev() {
        if is_run(&pile[pile.len() - len..]) {
            score.run = len as u32;
            break;
        }
    }

    score
}

/// Returns whether the cards, once sorted, form consecutive ranks with no
/// duplicates.
#[must_use]
pub fn is_run(cards: &[Card]) -> bool {
    let mut ranks: Vec<u8> = cards.iter().map(Card::order_rank).collect();
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

fn subset(cards: &[Card], mask: u32) -> impl Iterator<Item = &Card> {
    cards
        .iter()
        .enumerate()
        .filter(move |(i, _)| mask & (1 << i) != 0)
        .map(|(_, card)| card)
}

fn fifteen_points(cards: &[Card]) -> u32 {
    let combos = (1_u32..1 << cards.len())
        .filter(|mask| mask.count_ones() >= 2)
        .filter(|&mask| {
            subset(cards, mask)
                .map(|card| u32::from(card.point_value()))
                .sum::<u32>()
                == 15
        })
        .count() as u32;
    combos * 2
}

fn pair_points(cards: &[Card]) -> u32 {
    let mut points = 0;
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            if a.rank == b.rank {
                points += 2;
            }
        }
    }
    points
}

fn run_points(cards: &[Card], run_scoring: RunScoring) -> u32 {
    for len in (3..=cards.len() as u32).rev() {
        let runs = (1_u32..1 << cards.len())
            .filter(|mask| mask.count_ones() == len)
            .filter(|&mask| {
                let picked: Vec<Card> = subset(cards, mask).copied().collect();
                is_run(&picked)
            })
            .count() as u32;

        if runs > 0 {
            return match run_scoring {
                RunScoring::Longest => len,
                RunScoring::Multiplied => len * runs,
            };
        }
    }
    0
}

fn flush_points(cards: &[Card], cut: Card, is_crib: bool) -> u32 {
    let Some(first) = cards.first() else {
        return 0;
    };
    if !cards.iter().all(|card| card.suit == first.suit) {
        return 0;
    }

    let cut_matches = cut.suit == first.suit;
    match (is_crib, cut_matches) {
        (_, true) => 5,
        (true, false) => 0,
        (false, false) => 4,
    }
}

fn nobs_points(cards: &[Card], cut: Card) -> u32 {
    cards
        .iter()
        .filter(|card| card.is_jack() && card.suit == cut.suit)
        .count() as u32
}
