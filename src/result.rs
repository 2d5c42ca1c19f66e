//! Game outcomes.

use serde::{Deserialize, Serialize};

use crate::hand::is_bust;

/// The outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Push (tie).
    Draw,
}

/// Decides a game from the final scores.
///
/// A bust always loses, and the player's bust is checked first. Otherwise the
/// higher score wins and equal scores draw.
#[must_use]
pub const fn determine_winner(player_score: u16, dealer_score: u16) -> Winner {
    if is_bust(player_score) {
        Winner::Dealer
    } else if is_bust(dealer_score) {
        Winner::Player
    } else if player_score > dealer_score {
        Winner::Player
    } else if dealer_score > player_score {
        Winner::Dealer
    } else {
        Winner::Draw
    }
}
