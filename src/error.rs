//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The game needs at least one deck.
    #[error("at least one deck is required")]
    NoDecks,
    /// The game needs at least one player.
    #[error("at least one player is required")]
    NoPlayers,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The initial deal has already been performed.
    #[error("initial deal already performed")]
    InvalidState,
    /// Not enough cards in the shoe to deal everyone in.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for player actions.
    #[error("invalid game state for player actions")]
    InvalidState,
    /// Player index is out of range.
    #[error("player index out of range")]
    PlayerNotFound,
    /// Player has already finished their turn.
    #[error("player has already finished")]
    PlayerDone,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors that can occur during dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Dealer cannot act until every player has finished.
    #[error("players are still acting")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors that can occur when resolving outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The round is not over yet.
    #[error("round is not over")]
    InvalidState,
}
