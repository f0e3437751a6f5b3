//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the cut that decides the first dealer.
    CutForDeal,
    /// Waiting for both seats to send two cards to the crib.
    Discard,
    /// Pegging is under way.
    Play,
    /// The count reached 31 and was reset; waiting to resume.
    PauseAt31,
    /// Neither seat could play and the count was reset; waiting to resume.
    PauseOnGo,
    /// Every card has been played; waiting to count hands.
    PauseBeforeCount,
    /// Hands are counted and the deal has passed; waiting for the next round.
    RoundOver,
    /// A seat reached the target score.
    GameOver,
}

impl GameState {
    /// Returns whether the pegging phase is running or paused.
    #[must_use]
    pub const fn is_pegging(self) -> bool {
        matches!(self, Self::Play | Self::PauseAt31 | Self::PauseOnGo)
    }
}
