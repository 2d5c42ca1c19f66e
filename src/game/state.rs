//! Game state types.

use serde::{Deserialize, Serialize};

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Deck is ready, opening hands not dealt yet.
    #[default]
    Started,
    /// Waiting for the player to hit or stand.
    InPlay,
    /// A winner has been decided. No further changes are allowed.
    Finished,
}
