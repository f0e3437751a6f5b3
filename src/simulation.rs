//! Batch simulation of complete games.
//!
//! The harness drives the same public operations a user interface would. The
//! human seat follows a fixed greedy policy and the computer seat uses the
//! heuristics in [`strategy`](crate::strategy), so the summary measures how the
//! heuristics fare against a simple opponent.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::SimulationError;
use crate::game::{Game, GameState};
use crate::options::SimulationOptions;
use crate::player::Seat;

#[cfg(feature = "std")]
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_tenths(value: f64) -> f64 {
    libm::round(value * 10.0) / 10.0
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// One-based game number.
    pub game_number: usize,
    /// Final score of the human seat.
    pub player_score: u32,
    /// Final score of the computer seat.
    pub computer_score: u32,
    /// The winning seat.
    pub winner: Seat,
    /// Display name of the winning seat.
    pub winner_name: &'static str,
    /// The seat that dealt the first round.
    pub dealer: Seat,
    /// Display name of the first dealer.
    pub dealer_name: &'static str,
}

/// Aggregate statistics over every simulated game.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    /// Number of games played.
    pub total_games: usize,
    /// Games won by the human seat.
    pub player_wins: usize,
    /// Games won by the computer seat.
    pub computer_wins: usize,
    /// Share of games won by the human seat, in percent, to one decimal.
    pub win_rate_percent: f64,
    /// Mean final score of the human seat, to one decimal.
    pub avg_player_score: f64,
    /// Mean final score of the computer seat, to one decimal.
    pub avg_computer_score: f64,
}

impl Summary {
    /// Summarizes a list of game records.
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Self {
        let total_games = records.len();
        if total_games == 0 {
            return Self::default();
        }

        let player_wins = records
            .iter()
            .filter(|record| record.winner == Seat::Player)
            .count();
        let player_total: u64 = records.iter().map(|r| u64::from(r.player_score)).sum();
        let computer_total: u64 = records.iter().map(|r| u64::from(r.computer_score)).sum();

        #[expect(
            clippy::cast_precision_loss,
            reason = "game counts and score totals stay far below 2^52"
        )]
        let (games, player_total, computer_total, wins) = (
            total_games as f64,
            player_total as f64,
            computer_total as f64,
            player_wins as f64,
        );

        Self {
            total_games,
            player_wins,
            computer_wins: total_games - player_wins,
            win_rate_percent: round_tenths(wins / games * 100.0),
            avg_player_score: round_tenths(player_total / games),
            avg_computer_score: round_tenths(computer_total / games),
        }
    }
}

/// Per-game records plus their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    /// One record per game, in play order.
    pub results: Vec<GameRecord>,
    /// Aggregate statistics.
    pub summary: Summary,
}

/// Plays many games back to back.
///
/// # Example
///
/// ```
/// use cribbage::{SimulationOptions, Simulator};
///
/// let report = Simulator::new(SimulationOptions::default().with_games(4).with_seed(1)).run();
/// assert_eq!(report.summary.total_games, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    options: SimulationOptions,
}

impl Simulator {
    /// Creates a harness with the given options.
    #[must_use]
    pub const fn new(options: SimulationOptions) -> Self {
        Self { options }
    }

    /// Returns the harness options.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Plays every game and summarizes the results.
    ///
    /// Each game gets its own seed drawn from the harness generator, so a fixed
    /// harness seed reproduces the whole batch. The computer deals first in
    /// even-indexed games and the human seat in odd-indexed ones.
    #[must_use]
    pub fn run(&self) -> SimulationReport {
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        let mut results = Vec::with_capacity(self.options.games);

        for index in 0..self.options.games {
            let seed: u64 = rng.random();
            let record = self.play_game(index, seed);
            debug!(
                game = record.game_number,
                player = record.player_score,
                computer = record.computer_score,
                winner = record.winner_name,
                "game finished"
            );
            results.push(record);
        }

        let summary = Summary::from_records(&results);
        info!(
            games = summary.total_games,
            player_wins = summary.player_wins,
            computer_wins = summary.computer_wins,
            win_rate = summary.win_rate_percent,
            "simulation complete"
        );

        SimulationReport { results, summary }
    }

    fn play_game(&self, index: usize, seed: u64) -> GameRecord {
        let game = Game::new(self.options.game.clone(), seed);
        let dealer = if index % 2 == 0 {
            Seat::Computer
        } else {
            Seat::Player
        };

        if let Err(err) = self.drive_game(&game, dealer) {
            warn!(game = index + 1, %err, "simulated game stopped early");
        }

        let player_score = game.score(Seat::Player);
        let computer_score = game.score(Seat::Computer);
        let winner = game.winner().unwrap_or(if computer_score > player_score {
            Seat::Computer
        } else {
            Seat::Player
        });

        GameRecord {
            game_number: index + 1,
            player_score,
            computer_score,
            winner,
            winner_name: game.name(winner),
            dealer,
            dealer_name: game.name(dealer),
        }
    }

    fn drive_game(&self, game: &Game, dealer: Seat) -> Result<(), SimulationError> {
        game.start_game(dealer)?;

        for _ in 0..self.options.max_rounds_per_game {
            match game.state() {
                GameState::GameOver => return Ok(()),
                GameState::RoundOver => game.start_round()?,
                _ => {}
            }
            self.drive_round(game)?;
        }

        if game.state() != GameState::GameOver {
            warn!(
                rounds = self.options.max_rounds_per_game,
                "round limit reached without a winner"
            );
        }
        Ok(())
    }

    fn drive_round(&self, game: &Game) -> Result<(), SimulationError> {
        game.discard_to_crib([0, 1])?;

        let mut steps = 0;
        while steps < self.options.max_plays_per_round {
            match game.state() {
                GameState::Play => match game.current_turn() {
                    Some(Seat::Computer) => {
                        game.play_computer_turn()?;
                    }
                    Some(Seat::Player) => match choose_human_play(game) {
                        Some(card) => {
                            game.play_card(Seat::Player, card)?;
                        }
                        None => game.say_go(Seat::Player)?,
                    },
                    None => break,
                },
                GameState::PauseAt31 | GameState::PauseOnGo => game.continue_after_pause()?,
                _ => break,
            }
            steps += 1;
        }

        if game.state().is_pegging() {
            warn!(steps, "pegging step limit reached, forcing end of play");
            game.force_end_play();
        }

        if game.state() == GameState::PauseBeforeCount {
            game.count_hands()?;
        }
        Ok(())
    }
}

/// Greedy policy for the human seat: make 31, else make 15, else play the
/// lowest legal card.
fn choose_human_play(game: &Game) -> Option<Card> {
    let count = game.current_count();
    let legal: Vec<Card> = game
        .remaining_cards(Seat::Player)
        .into_iter()
        .filter(|card| count + card.point_value() <= 31)
        .collect();

    legal
        .iter()
        .find(|card| count + card.point_value() == 31)
        .or_else(|| legal.iter().find(|card| count + card.point_value() == 15))
        .or_else(|| legal.iter().min_by_key(|card| card.point_value()))
        .copied()
}
