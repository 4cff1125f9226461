extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealerError;

use super::{Game, GameState};

/// The dealer stands on any sum of 17 or higher. Fixed house rule, not
/// configurable.
pub const DEALER_STAND_MIN: u8 = 17;

impl Game {
    /// Plays one step of the dealer's turn.
    ///
    /// Reveals the hole card, then: if the dealer's sum is below 17, draws
    /// one card and returns `false`; otherwise the dealer stands, the round
    /// ends, and `true` is returned. A dealer who busts on a draw still
    /// returns `false` for that step and stands on the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if any player is still acting or the shoe is empty
    /// while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<bool, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        if self.dealer_hand.sum() < DEALER_STAND_MIN {
            let card = self.shoe.draw().ok_or(DealerError::NoCards)?;
            self.dealer_hand.push(card);
            return Ok(false);
        }

        self.state = GameState::RoundOver;

        Ok(true)
    }

    /// Plays out the dealer's whole turn, stepping until the dealer stands.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if any player is still acting or the shoe is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();

        while !self.dealer_step()? {
            if let Some(&card) = self.dealer_hand.cards().last() {
                drawn_cards.push(card);
            }
        }

        Ok(drawn_cards)
    }
}
