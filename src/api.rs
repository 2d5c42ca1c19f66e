//! Request/response boundary for a transport layer.
//!
//! A transport routes a request to an [`Action`], decodes the body as a
//! [`GameRequest`], and calls [`GameService::handle`]. Failures come back as
//! an [`ErrorResponse`] carrying a status code and a short message. The
//! underlying error is logged, never returned.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{ActionError, ServiceError, StoreError};
use crate::game::Game;
use crate::service::GameService;
use crate::store::GameStore;

/// An operation exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a new game.
    Start,
    /// Draw a card for the player.
    Hit,
    /// End the player's turn and play out the dealer.
    Stand,
}

impl Action {
    /// Returns the route this action is served on.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Start => "/game/start",
            Self::Hit => "/game/hit",
            Self::Stand => "/game/stand",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Error returned when a route names no [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown route")]
pub struct UnknownRoute;

impl FromStr for Action {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/game/start" => Ok(Self::Start),
            "/game/hit" => Ok(Self::Hit),
            "/game/stand" => Ok(Self::Stand),
            _ => Err(UnknownRoute),
        }
    }
}

/// Request body for every action. `start` ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequest {
    /// Identifier of the game to act on.
    #[serde(rename = "gameId", default)]
    pub game_id: Option<String>,
}

impl GameRequest {
    /// Creates a request for the given game.
    #[must_use]
    pub fn for_game(game_id: impl Into<String>) -> Self {
        Self {
            game_id: Some(game_id.into()),
        }
    }
}

/// A successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Status code: 201 for a created game, 200 otherwise.
    pub status: u16,
    /// The game record after the action.
    pub game: Game,
}

/// A failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Status code.
    pub status: u16,
    /// Short client-facing message.
    pub message: &'static str,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        let (status, message) = match err {
            ServiceError::Validation => (400, "invalid game id"),
            ServiceError::NotFound => (404, "game not found"),
            ServiceError::InvalidTransition(ActionError::NotInPlay) => (409, "game is not in play"),
            ServiceError::InvalidTransition(_) => (409, "game is already finished"),
            ServiceError::Persistence(StoreError::Conflict { .. }) => {
                (409, "game was modified concurrently")
            }
            ServiceError::Persistence(_) | ServiceError::DeckExhausted => {
                (500, "internal server error")
            }
        };
        Self { status, message }
    }
}

impl<S: GameStore, R: Rng> GameService<S, R> {
    /// Runs an action and shapes the outcome for a client.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorResponse`] if the action fails. A `hit` or `stand`
    /// request without a `gameId` is rejected as invalid.
    pub fn handle(&self, action: Action, request: &GameRequest) -> Result<Response, ErrorResponse> {
        let outcome = match (action, request.game_id.as_deref()) {
            (Action::Start, _) => self.start().map(|game| (201, game)),
            (Action::Hit | Action::Stand, None) => Err(ServiceError::Validation),
            (Action::Hit, Some(id)) => self.hit(id).map(|game| (200, game)),
            (Action::Stand, Some(id)) => self.stand(id).map(|game| (200, game)),
        };

        outcome
            .map(|(status, game)| Response { status, game })
            .map_err(|err| {
                tracing::error!(%action, game = ?request.game_id, %err, "request failed");
                ErrorResponse::from(&err)
            })
    }
}
