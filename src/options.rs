//! Game and simulation configuration options.

/// How runs are scored when counting a hand or crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RunScoring {
    /// Only the longest run length is awarded, once.
    ///
    /// A hand such as 4-4-5-6 scores a single run of 3.
    #[default]
    Longest,
    /// Every distinct run of the longest length is awarded.
    ///
    /// A hand such as 4-4-5-6 scores a double run (two runs of 3).
    Multiplied,
}

/// Default score needed to win.
pub const DEFAULT_TARGET_SCORE: u32 = 121;

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribbage::{GameOptions, RunScoring};
///
/// let options = GameOptions::default()
///     .with_target_score(61)
///     .with_run_scoring(RunScoring::Multiplied);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Score at which the game ends.
    pub target_score: u32,
    /// Rule used for runs in hand and crib counting.
    pub run_scoring: RunScoring,
    /// Display name of the human seat.
    pub player_name: &'static str,
    /// Display name of the computer seat.
    pub computer_name: &'static str,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            run_scoring: RunScoring::Longest,
            player_name: "Player",
            computer_name: "Computer",
        }
    }
}

impl GameOptions {
    /// Sets the score needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(61);
    /// assert_eq!(options.target_score, 61);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets the run scoring rule.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::{GameOptions, RunScoring};
    ///
    /// let options = GameOptions::default().with_run_scoring(RunScoring::Multiplied);
    /// assert_eq!(options.run_scoring, RunScoring::Multiplied);
    /// ```
    #[must_use]
    pub const fn with_run_scoring(mut self, run_scoring: RunScoring) -> Self {
        self.run_scoring = run_scoring;
        self
    }

    /// Sets the display name of the human seat.
    #[must_use]
    pub const fn with_player_name(mut self, name: &'static str) -> Self {
        self.player_name = name;
        self
    }

    /// Sets the display name of the computer seat.
    #[must_use]
    pub const fn with_computer_name(mut self, name: &'static str) -> Self {
        self.computer_name = name;
        self
    }
}

/// Configuration options for a batch of simulated games.
///
/// ```
/// use cribbage::SimulationOptions;
///
/// let options = SimulationOptions::default().with_games(500).with_seed(9);
/// assert_eq!(options.games, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of games to play.
    pub games: usize,
    /// Seed for the harness random number generator.
    pub seed: u64,
    /// Ceiling on pegging steps per round before leftover cards are forced.
    pub max_plays_per_round: usize,
    /// Ceiling on rounds per game before the leader is declared the winner.
    pub max_rounds_per_game: usize,
    /// Options used for every simulated game.
    pub game: GameOptions,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            games: 10_000,
            seed: 0,
            max_plays_per_round: 100,
            max_rounds_per_game: 500,
            game: GameOptions::default(),
        }
    }
}

impl SimulationOptions {
    /// Sets the number of games.
    #[must_use]
    pub const fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Sets the harness seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the pegging step ceiling.
    #[must_use]
    pub const fn with_max_plays_per_round(mut self, max_plays: usize) -> Self {
        self.max_plays_per_round = max_plays;
        self
    }

    /// Sets the round ceiling.
    #[must_use]
    pub const fn with_max_rounds_per_game(mut self, max_rounds: usize) -> Self {
        self.max_rounds_per_game = max_rounds;
        self
    }

    /// Sets the options used for each game.
    #[must_use]
    pub const fn with_game_options(mut self, game: GameOptions) -> Self {
        self.game = game;
        self
    }
}
