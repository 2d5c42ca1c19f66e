//! A player-versus-dealer blackjack game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] record that owns the deck and both hands and
//! moves through start, hit and stand. A [`GameService`] runs those
//! operations against any [`GameStore`], and the [`api`] module shapes the
//! results for a transport layer.
//!
//! The deck has 40 cards: two through ten plus the ace in each suit.
//!
//! # Example
//!
//! ```
//! use bjgame::{GameOptions, GameService, GameStatus, MemoryStore};
//!
//! let service = GameService::new(MemoryStore::new(), GameOptions::default(), 42);
//! let game = service.start().unwrap();
//! if game.status() == GameStatus::InPlay {
//!     let game = service.stand(&game.id().to_string()).unwrap();
//!     assert!(game.winner().is_some());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod api;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod id;
pub mod options;
pub mod result;
pub mod service;
pub mod shuffle;
pub mod store;
mod sync;

// Re-export main types
pub use api::{Action, ErrorResponse, GameRequest, Response};
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use error::{ActionError, DealError, ServiceError, StoreError};
pub use game::{Game, GameStatus};
pub use hand::{Player, hand_score};
pub use id::{GameId, ParseGameIdError};
pub use options::{GameOptions, NaturalRule};
pub use result::{Winner, determine_winner};
pub use service::GameService;
pub use shuffle::shuffle;
pub use store::{GameStore, MemoryStore};
