//! Game record and state machine.

use alloc::vec::Vec;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::{ActionError, DealError};
use crate::hand::{BLACKJACK, Player};
use crate::id::GameId;
use crate::options::{GameOptions, NaturalRule};
use crate::result::Winner;
use crate::shuffle::shuffle;

mod actions;
mod dealer;
pub mod state;

pub use state::GameStatus;

/// A single player-versus-dealer game.
///
/// The deck is a stack: cards are drawn from the end of the sequence. Every
/// card of the deck the game was built with is always in exactly one of the
/// deck, the player's hand or the dealer's hand.
///
/// A record read back through serde is checked: the winner is set exactly
/// when the status is finished, an undealt record holds no cards in hand,
/// a dealt one holds at least two per side, and no card appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameRecord", try_from = "GameRecord")]
pub struct Game {
    id: GameId,
    status: GameStatus,
    deck: Vec<Card>,
    player: Player,
    dealer: Player,
    winner: Option<Winner>,
    version: u64,
}

impl Game {
    /// Creates an undealt game over the given deck.
    ///
    /// The last card of `deck` is drawn first.
    #[must_use]
    pub fn with_deck(deck: Vec<Card>, options: &GameOptions) -> Self {
        Self {
            id: GameId::UNASSIGNED,
            status: GameStatus::Started,
            deck,
            player: Player::new(options.player_name.clone()),
            dealer: Player::new(options.dealer_name.clone()),
            winner: None,
            version: 0,
        }
    }

    /// Creates an undealt game over a freshly shuffled standard deck.
    #[must_use]
    pub fn shuffled<R>(rng: &mut R, options: &GameOptions) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut deck = standard_deck();
        shuffle(&mut deck, rng);
        Self::with_deck(deck, options)
    }

    /// Deals two cards to the player, then two to the dealer, and checks the
    /// opening hands for an immediate result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt or the deck holds
    /// fewer than four cards.
    pub fn deal(&mut self, options: &GameOptions) -> Result<(), DealError> {
        if self.status != GameStatus::Started || !self.player.is_empty() || !self.dealer.is_empty()
        {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.player.take(card);
        }
        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.dealer.take(card);
        }

        let winner = opening_winner(self.player.score(), self.dealer.score(), options.naturals);
        match winner {
            Some(winner) => self.finish(winner),
            None => self.status = GameStatus::InPlay,
        }

        tracing::debug!(
            game = %self.id,
            player = self.player.score(),
            dealer = self.dealer.score(),
            ?winner,
            "dealt opening hands"
        );

        Ok(())
    }

    /// Draws a card from the end of the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    fn finish(&mut self, winner: Winner) {
        self.winner = Some(winner);
        self.status = GameStatus::Finished;
    }

    fn ensure_in_play(&self) -> Result<(), ActionError> {
        match self.status {
            GameStatus::InPlay => Ok(()),
            GameStatus::Finished => Err(ActionError::GameFinished),
            GameStatus::Started => Err(ActionError::NotInPlay),
        }
    }

    /// Returns the identifier. [`GameId::UNASSIGNED`] until a store creates the record.
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// Sets the identifier. Meant for [`GameStore`](crate::store::GameStore) implementations.
    pub const fn set_id(&mut self, id: GameId) {
        self.id = id;
    }

    /// Returns the stored version used for optimistic concurrency.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Sets the stored version. Meant for [`GameStore`](crate::store::GameStore) implementations.
    pub const fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns whether a winner has been decided.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished)
    }

    /// Returns the winner, if the game is finished.
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Returns the remaining deck. The last card is drawn next.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player side.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer side.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }
}

/// Stored form of a game.
#[derive(Serialize, Deserialize)]
struct GameRecord {
    id: GameId,
    status: GameStatus,
    deck: Vec<Card>,
    player: Player,
    dealer: Player,
    winner: Option<Winner>,
    version: u64,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            status: game.status,
            deck: game.deck,
            player: game.player,
            dealer: game.dealer,
            winner: game.winner,
            version: game.version,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = &'static str;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        if record.winner.is_some() != (record.status == GameStatus::Finished) {
            return Err("winner does not match status");
        }

        let dealt = record.status != GameStatus::Started;
        let hands_dealt = record.player.len() >= 2 && record.dealer.len() >= 2;
        let hands_empty = record.player.is_empty() && record.dealer.is_empty();
        if (dealt && !hands_dealt) || (!dealt && !hands_empty) {
            return Err("hands do not match status");
        }

        let cards = record
            .deck
            .iter()
            .chain(record.player.hand())
            .chain(record.dealer.hand());
        let mut seen: u64 = 0;
        for (count, card) in cards.enumerate() {
            if count >= DECK_SIZE {
                return Err("too many cards");
            }
            let bit = 1u64 << card.ordinal();
            if seen & bit != 0 {
                return Err("card appears more than once");
            }
            seen |= bit;
        }

        Ok(Self {
            id: record.id,
            status: record.status,
            deck: record.deck,
            player: record.player,
            dealer: record.dealer,
            winner: record.winner,
            version: record.version,
        })
    }
}

fn opening_winner(player: u16, dealer: u16, naturals: NaturalRule) -> Option<Winner> {
    match naturals {
        NaturalRule::Legacy => {
            if player == BLACKJACK {
                Some(Winner::Draw)
            } else if dealer == BLACKJACK {
                Some(Winner::Dealer)
            } else {
                None
            }
        }
        NaturalRule::Standard => match (player == BLACKJACK, dealer == BLACKJACK) {
            (true, true) => Some(Winner::Draw),
            (_, true) => Some(Winner::Dealer),
            (true, false) => Some(Winner::Player),
            (false, false) => None,
        },
    }
}
