//! A multi-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages one round for a table of
//! players against an automated dealer: the initial deal, hit/stay actions,
//! the dealer's fixed stand-on-17 play, and per-player outcome resolution.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, Outcome};
//!
//! let options = GameOptions::default().with_decks(1).with_players(1);
//! let mut game = Game::new(options, 42).unwrap();
//!
//! game.deal_initial().unwrap();
//! game.stay(0).unwrap();
//! game.dealer_play().unwrap();
//!
//! let outcomes: Vec<Outcome> = game.outcomes().unwrap();
//! assert_eq!(outcomes.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, ConfigError, DealError, DealerError, OutcomeError};
pub use game::{DEALER_STAND_MIN, Game, GameState};
pub use hand::{DealerHand, Hand, TARGET_SUM, evaluate};
pub use options::GameOptions;
pub use outcome::{Outcome, resolve, resolve_all};
pub use shoe::Shoe;
