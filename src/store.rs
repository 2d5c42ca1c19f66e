//! Game persistence.

use core::sync::atomic::{AtomicU64, Ordering};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::StoreError;
use crate::game::Game;
use crate::id::GameId;
use crate::sync::Mutex;

/// Storage for game records.
///
/// The game logic only talks to storage through this trait. Methods take
/// `&self` so one store can serve concurrent operations.
pub trait GameStore {
    /// Assigns a fresh identifier to `game`, persists it, and returns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend fails.
    fn create(&self, game: &mut Game) -> Result<GameId, StoreError>;

    /// Loads the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier, or
    /// [`StoreError::Unavailable`] if the backend fails.
    fn find(&self, id: GameId) -> Result<Game, StoreError>;

    /// Writes `game` back, bumping its version.
    ///
    /// The write only succeeds if the stored record still has the version
    /// `game` was loaded with. On success the caller's copy carries the new
    /// version.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the record changed since it was
    /// loaded, [`StoreError::NotFound`] if it no longer exists, or
    /// [`StoreError::Unavailable`] if the backend fails.
    fn save(&self, game: &mut Game) -> Result<(), StoreError>;
}

impl<S: GameStore + ?Sized> GameStore for &S {
    fn create(&self, game: &mut Game) -> Result<GameId, StoreError> {
        (**self).create(game)
    }

    fn find(&self, id: GameId) -> Result<Game, StoreError> {
        (**self).find(id)
    }

    fn save(&self, game: &mut Game) -> Result<(), StoreError> {
        (**self).save(game)
    }
}

/// A [`GameStore`] that keeps records in memory.
#[derive(Debug)]
pub struct MemoryStore {
    /// Stored games (`id` -> record).
    games: Mutex<HashMap<GameId, Game>>,
    /// Next identifier to assign.
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether the store holds no games.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for MemoryStore {
    fn create(&self, game: &mut Game) -> Result<GameId, StoreError> {
        let id = GameId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        game.set_id(id);
        game.set_version(0);
        self.games.lock().insert(id, game.clone());
        Ok(id)
    }

    fn find(&self, id: GameId) -> Result<Game, StoreError> {
        self.games.lock().get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn save(&self, game: &mut Game) -> Result<(), StoreError> {
        let mut games = self.games.lock();
        let stored = games.get_mut(&game.id()).ok_or(StoreError::NotFound)?;

        if stored.version() != game.version() {
            tracing::warn!(
                game = %game.id(),
                found = game.version(),
                stored = stored.version(),
                "rejected stale save"
            );
            return Err(StoreError::Conflict {
                found: game.version(),
                stored: stored.version(),
            });
        }

        game.set_version(game.version() + 1);
        stored.clone_from(game);
        Ok(())
    }
}
