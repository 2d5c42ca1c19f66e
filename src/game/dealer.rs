use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::result::determine_winner;

use super::Game;

impl Game {
    /// Player action: Stand. The dealer then plays out and the game is decided.
    ///
    /// The dealer draws while its score is below
    /// [`GameOptions::dealer_stands_on`], even if that busts it. The winner is
    /// then decided from the final scores.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play or the deck runs out while
    /// the dealer must draw. The game is left unchanged on error.
    pub fn stand(&mut self, options: &GameOptions) -> Result<Vec<Card>, ActionError> {
        self.ensure_in_play()?;

        let mut dealer = self.dealer.clone();
        let mut remaining = self.deck.len();
        let mut drawn_cards = Vec::new();

        while dealer.score() < options.dealer_stands_on {
            remaining = remaining
                .checked_sub(1)
                .ok_or(ActionError::DeckExhausted)?;
            let card = self.deck[remaining];
            dealer.take(card);
            drawn_cards.push(card);
        }

        self.deck.truncate(remaining);
        self.dealer = dealer;

        let winner = determine_winner(self.player.score(), self.dealer.score());
        self.finish(winner);

        tracing::debug!(
            game = %self.id,
            drawn = drawn_cards.len(),
            dealer = self.dealer.score(),
            ?winner,
            "dealer played out"
        );

        Ok(drawn_cards)
    }
}
