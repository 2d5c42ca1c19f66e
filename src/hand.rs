//! Hand scoring and the per-side player record.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE};

/// Highest score that is not a bust.
pub const BLACKJACK: u16 = 21;

/// Calculates the blackjack score of a hand.
///
/// Every card's value is summed, which counts each ace as 11. Then, once per
/// ace in hand order, 10 is taken off the running total if it is still over 21.
#[must_use]
pub fn hand_score(cards: &[Card]) -> u16 {
    let mut score = cards
        .iter()
        .fold(0u16, |total, card| total.saturating_add(u16::from(card.value())));

    for _ in cards.iter().filter(|card| card.is_ace()) {
        if score > BLACKJACK {
            score -= 10;
        }
    }

    score
}

/// Returns whether a score is over 21.
#[must_use]
pub const fn is_bust(score: u16) -> bool {
    score > BLACKJACK
}

/// One side of the table: the player or the dealer.
///
/// The score is recalculated whenever a card is taken, so it always matches
/// the hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PlayerRecord", try_from = "PlayerRecord")]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    score: u16,
}

impl Player {
    /// Creates a side with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            score: 0,
        }
    }

    /// Adds a card to the hand and rescores it.
    pub fn take(&mut self, card: Card) {
        self.hand.push(card);
        self.score = hand_score(&self.hand);
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The current score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        is_bust(self.score)
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

/// Stored form of a player.
#[derive(Serialize, Deserialize)]
struct PlayerRecord {
    name: String,
    hand: Vec<Card>,
    score: u16,
}

impl From<Player> for PlayerRecord {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            hand: player.hand,
            score: player.score,
        }
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = &'static str;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        if record.hand.len() > DECK_SIZE {
            return Err("hand too large");
        }
        if record.score != hand_score(&record.hand) {
            return Err("score does not match hand");
        }

        Ok(Self {
            name: record.name,
            hand: record.hand,
            score: record.score,
        })
    }
}
