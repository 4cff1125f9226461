use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if player >= self.options.players {
            return Err(ActionError::PlayerNotFound);
        }

        if self.done[player] {
            return Err(ActionError::PlayerDone);
        }

        Ok(())
    }

    /// Player action: hit (draw a card).
    ///
    /// If the drawn card busts the hand, the player is automatically marked
    /// done. The player's hand is left untouched on any error.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player turn state, the
    /// player index is out of range, the player has already finished, or the
    /// shoe is empty.
    pub fn hit(&mut self, player: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(player)?;

        let card = self.shoe.draw().ok_or(ActionError::NoCards)?;
        self.hands[player].push(card);

        if self.hands[player].is_bust() {
            self.finish_player(player);
        }

        Ok(card)
    }

    /// Player action: stay (end the turn without drawing).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player turn state, the
    /// player index is out of range, or the player has already finished.
    pub fn stay(&mut self, player: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(player)?;

        self.finish_player(player);

        Ok(())
    }
}
