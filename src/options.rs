//! Game configuration options.

use alloc::borrow::Cow;

/// How the opening hands are checked for an immediate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum NaturalRule {
    /// A player 21 is a draw no matter what the dealer holds. Otherwise a
    /// dealer 21 wins for the dealer.
    #[default]
    Legacy,
    /// Both 21 draw, a dealer 21 wins for the dealer, a player 21 wins for
    /// the player.
    Standard,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjgame::{GameOptions, NaturalRule};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(18)
///     .with_naturals(NaturalRule::Standard);
/// assert_eq!(options.dealer_stands_on, 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer keeps drawing while its score is below this.
    pub dealer_stands_on: u16,
    /// Name recorded for the player side.
    pub player_name: Cow<'static, str>,
    /// Name recorded for the dealer side.
    pub dealer_name: Cow<'static, str>,
    /// Opening-hand check.
    pub naturals: NaturalRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            player_name: Cow::Borrowed("player"),
            dealer_name: Cow::Borrowed("dealer"),
            naturals: NaturalRule::Legacy,
        }
    }
}

impl GameOptions {
    /// Sets the score the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u16) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets the name recorded for the player side.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the name recorded for the dealer side.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the opening-hand check.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgame::{GameOptions, NaturalRule};
    ///
    /// let options = GameOptions::default().with_naturals(NaturalRule::Standard);
    /// assert_eq!(options.naturals, NaturalRule::Standard);
    /// ```
    #[must_use]
    pub const fn with_naturals(mut self, naturals: NaturalRule) -> Self {
        self.naturals = naturals;
        self
    }
}
