//! Game operations over a [`GameStore`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{ActionError, ServiceError};
use crate::game::Game;
use crate::id::GameId;
use crate::options::GameOptions;
use crate::store::GameStore;
use crate::sync::Mutex;

/// Runs start, hit and stand against a store.
///
/// Every operation loads the record, applies one transition, and saves it.
/// Nothing is persisted unless the whole operation succeeds. Concurrent
/// operations on the same game are serialized by the store's version check:
/// the later save fails with a conflict instead of silently dropping a draw.
pub struct GameService<S, R = ChaCha8Rng> {
    store: S,
    options: GameOptions,
    rng: Mutex<R>,
}

impl<S: GameStore> GameService<S> {
    /// Creates a service whose shuffles come from a ChaCha8 generator seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgame::{GameOptions, GameService, MemoryStore};
    ///
    /// let service = GameService::new(MemoryStore::new(), GameOptions::default(), 42);
    /// let game = service.start().unwrap();
    /// assert_eq!(game.player().len(), 2);
    /// ```
    #[must_use]
    pub fn new(store: S, options: GameOptions, seed: u64) -> Self {
        Self::with_rng(store, options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: GameStore, R: Rng> GameService<S, R> {
    /// Creates a service that shuffles with the given generator.
    #[must_use]
    pub const fn with_rng(store: S, options: GameOptions, rng: R) -> Self {
        Self {
            store,
            options,
            rng: Mutex::new(rng),
        }
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Shuffles a new deck, deals the opening hands and stores the game.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Persistence`] if the store cannot create the record.
    pub fn start(&self) -> Result<Game, ServiceError> {
        let mut game = {
            let mut rng = self.rng.lock();
            Game::shuffled(&mut *rng, &self.options)
        };
        game.deal(&self.options)?;

        let id = self.store.create(&mut game)?;
        tracing::info!(game = %id, winner = ?game.winner(), "game created");

        Ok(game)
    }

    /// Draws one card for the player.
    ///
    /// # Errors
    ///
    /// Returns an error if `game_id` is malformed or unknown, the game is
    /// finished, the deck is empty, or the store fails.
    pub fn hit(&self, game_id: &str) -> Result<Game, ServiceError> {
        let mut game = self.load(game_id)?;
        game.hit().inspect_err(|err| action_failed(&game, *err))?;
        self.commit(game)
    }

    /// Ends the player's turn and plays out the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if `game_id` is malformed or unknown, the game is
    /// finished, the deck runs out, or the store fails.
    pub fn stand(&self, game_id: &str) -> Result<Game, ServiceError> {
        let mut game = self.load(game_id)?;
        game.stand(&self.options)
            .inspect_err(|err| action_failed(&game, *err))?;
        self.commit(game)
    }

    fn load(&self, game_id: &str) -> Result<Game, ServiceError> {
        let id: GameId = game_id.parse().map_err(|_| ServiceError::Validation)?;
        Ok(self.store.find(id)?)
    }

    fn commit(&self, mut game: Game) -> Result<Game, ServiceError> {
        self.store.save(&mut game)?;

        if let Some(winner) = game.winner() {
            tracing::info!(game = %game.id(), ?winner, "game finished");
        }

        Ok(game)
    }
}

fn action_failed(game: &Game, err: ActionError) {
    match err {
        ActionError::DeckExhausted => {
            tracing::error!(game = %game.id(), remaining = game.cards_remaining(), "deck exhausted");
        }
        ActionError::GameFinished | ActionError::NotInPlay => {
            tracing::warn!(game = %game.id(), status = ?game.status(), %err, "transition rejected");
        }
    }
}
