use crate::error::DealError;

use super::{Game, GameState};

impl Game {
    /// Deals the opening two cards to the dealer and to each player.
    ///
    /// The dealer receives their up card and then their hole card, followed
    /// by two cards per player in index order. Transitions the game to
    /// [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the initial deal has already been performed or
    /// the shoe holds fewer cards than the table needs.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != GameState::AwaitingDeal {
            return Err(DealError::InvalidState);
        }

        let cards_needed = (self.options.players + 1) * 2;
        if self.shoe.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        // Size was checked above, so these draws cannot fail.
        for _ in 0..2 {
            if let Some(card) = self.shoe.draw() {
                self.dealer_hand.push(card);
            }
        }

        for hand in &mut self.hands {
            for _ in 0..2 {
                if let Some(card) = self.shoe.draw() {
                    hand.push(card);
                }
            }
        }

        self.state = GameState::PlayerTurn;

        Ok(())
    }
}
