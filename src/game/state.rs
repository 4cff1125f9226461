//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fresh game, initial deal not yet performed.
    AwaitingDeal,
    /// Waiting for player hit/stay decisions.
    PlayerTurn,
    /// All players done, dealer plays out their hand.
    DealerTurn,
    /// Dealer has stood and outcomes can be resolved.
    RoundOver,
}
