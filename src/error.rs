//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing the opening hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The game has already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for two cards per side.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during hit and stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game already has a winner.
    #[error("game is already finished")]
    GameFinished,
    /// The opening hands have not been dealt.
    #[error("game has not been dealt")]
    NotInPlay,
    /// A draw was needed but the deck is empty.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors reported by a [`GameStore`](crate::store::GameStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists for the identifier.
    #[error("game not found")]
    NotFound,
    /// The record was saved by someone else since it was loaded.
    #[error("stale game version {found}, store has {stored}")]
    Conflict {
        /// Version carried by the record being saved.
        found: u64,
        /// Version currently held by the store.
        stored: u64,
    },
    /// The storage backend failed.
    #[error("game store unavailable")]
    Unavailable,
}

/// Errors returned by [`GameService`](crate::service::GameService) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The game identifier is missing or malformed.
    #[error("missing or malformed game id")]
    Validation,
    /// The game identifier has no record.
    #[error("game not found")]
    NotFound,
    /// Reading or writing the record failed.
    #[error("persistence failure: {0}")]
    Persistence(StoreError),
    /// The operation is not allowed in the game's current state.
    #[error("invalid transition: {0}")]
    InvalidTransition(ActionError),
    /// A draw was needed but the deck is empty.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            other => Self::Persistence(other),
        }
    }
}

impl From<ActionError> for ServiceError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::DeckExhausted => Self::DeckExhausted,
            other => Self::InvalidTransition(other),
        }
    }
}

impl From<DealError> for ServiceError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::NotEnoughCards => Self::DeckExhausted,
            DealError::InvalidState => Self::InvalidTransition(ActionError::NotInPlay),
        }
    }
}
