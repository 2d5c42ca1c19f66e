//! Game identifiers.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies a stored game.
///
/// Rendered as 16 lowercase hex digits. Zero is reserved for records that
/// have not been created in a store yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GameId(u64);

impl GameId {
    /// Placeholder carried by a record before its store assigns an identifier.
    pub const UNASSIGNED: Self = Self(0);

    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns whether a store has assigned this identifier.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error returned when a string is not a valid [`GameId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed game id")]
pub struct ParseGameIdError;

impl FromStr for GameId {
    type Err = ParseGameIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 16 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseGameIdError);
        }

        match u64::from_str_radix(s, 16) {
            Ok(0) | Err(_) => Err(ParseGameIdError),
            Ok(raw) => Ok(Self(raw)),
        }
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        alloc::format!("{id}")
    }
}

impl TryFrom<String> for GameId {
    type Error = ParseGameIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // The unassigned placeholder is still a valid stored value.
        if value.bytes().all(|b| b == b'0') && value.len() == 16 {
            return Ok(Self::UNASSIGNED);
        }
        value.parse()
    }
}
