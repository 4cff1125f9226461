//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{ConfigError, OutcomeError};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::outcome::{Outcome, resolve_all};
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::DEALER_STAND_MIN;
pub use state::GameState;

/// A blackjack round engine for one dealer and one or more players.
///
/// The game owns the shoe, the dealer's hand, and every player's hand; all
/// mutation happens through `&mut self` action calls driven by an external
/// turn loop. Use [`GameOptions`] to configure deck and player counts.
#[derive(Debug)]
pub struct Game {
    /// Cards in the shoe. Public so callers and tests can install a scripted
    /// shoe via [`Shoe::from_draws`].
    pub shoe: Shoe,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Player hands, indexed by player.
    hands: Vec<Hand>,
    /// Per-player done flags, indexed by player.
    done: Vec<bool>,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe.
    ///
    /// The seed makes games reproducible; pass a clock-derived value for a
    /// casual shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck or player count is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let options = GameOptions::default().with_decks(2).with_players(3);
    /// let game = Game::new(options, 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 104);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        if options.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if options.players == 0 {
            return Err(ConfigError::NoPlayers);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(options.decks, &mut rng);

        Ok(Self {
            shoe,
            options,
            state: GameState::AwaitingDeal,
            dealer_hand: DealerHand::new(),
            hands: alloc::vec![Hand::new(); options.players],
            done: alloc::vec![false; options.players],
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of players.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.options.players
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the specified player's hand.
    ///
    /// Returns `None` if the player index is out of range.
    #[must_use]
    pub fn player_hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns every player's hand, indexed by player.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns whether the specified player has finished their turn.
    ///
    /// Returns `None` if the player index is out of range.
    #[must_use]
    pub fn is_done(&self, player: usize) -> Option<bool> {
        self.done.get(player).copied()
    }

    /// Returns whether every player has finished their turn.
    #[must_use]
    pub fn all_players_done(&self) -> bool {
        self.done.iter().all(|&done| done)
    }

    /// Calculates the dealer's current blackjack sum (hole card included).
    #[must_use]
    pub fn dealer_sum(&self) -> u8 {
        self.dealer_hand.sum()
    }

    /// Calculates every player's current blackjack sum, indexed by player.
    #[must_use]
    pub fn player_sums(&self) -> Vec<u8> {
        self.hands.iter().map(Hand::sum).collect()
    }

    /// Resolves the round, one outcome per player in index order.
    ///
    /// Outcomes are derived on demand from the final sums and never stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    pub fn outcomes(&self) -> Result<Vec<Outcome>, OutcomeError> {
        if self.state != GameState::RoundOver {
            return Err(OutcomeError::InvalidState);
        }

        Ok(resolve_all(self.dealer_sum(), &self.player_sums()))
    }

    /// Marks the player done, moving to dealer play once everyone is done.
    fn finish_player(&mut self, player: usize) {
        self.done[player] = true;
        if self.all_players_done() {
            self.state = GameState::DealerTurn;
        }
    }
}
