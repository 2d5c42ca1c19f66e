use crate::card::Card;
use crate::error::ActionError;
use crate::result::Winner;

use super::Game;

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// A bust finishes the game in the dealer's favour.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play or the deck is empty. The
    /// game is left unchanged on error.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_in_play()?;

        let card = self.draw().ok_or(ActionError::DeckExhausted)?;
        self.player.take(card);

        tracing::debug!(game = %self.id, %card, score = self.player.score(), "player hit");

        if self.player.is_bust() {
            self.finish(Winner::Dealer);
        }

        Ok(card)
    }
}
