//! Match configuration.
//!
//! A presentation layer builds a `MatchConfig` from the match setup screen
//! (or loads one from disk) and hands it to the engine:
//! - how many reds the frame starts with
//! - what to call each player

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{Player, PlayerPair};

/// Most reds a frame can be racked with.
pub const MAX_REDS: u32 = 15;

/// Reasons a `MatchConfig` is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a frame needs at least one red")]
    NoReds,

    #[error("at most 15 reds fit in the rack, got {0}")]
    TooManyReds(u32),

    #[error("{0} has a blank name")]
    BlankName(Player),
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Reds racked at the start of the frame.
    pub starting_reds: u32,

    /// Display names, also used as the key for stored breaks.
    pub player_names: PlayerPair<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(MAX_REDS)
    }
}

impl MatchConfig {
    /// Five-red short frame.
    pub const SHORT_REDS: u32 = 5;
    /// Ten-red frame.
    pub const MEDIUM_REDS: u32 = 10;
    /// Full rack.
    pub const FULL_REDS: u32 = MAX_REDS;

    /// Create a configuration with default player names.
    pub fn new(starting_reds: u32) -> Self {
        Self {
            starting_reds,
            player_names: PlayerPair::new(
                Player::One.to_string(),
                Player::Two.to_string(),
            ),
        }
    }

    /// Set the number of starting reds.
    #[must_use]
    pub fn with_reds(mut self, reds: u32) -> Self {
        self.starting_reds = reds;
        self
    }

    /// Set both player names.
    #[must_use]
    pub fn with_player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.player_names = PlayerPair::new(one.into(), two.into());
        self
    }

    /// Name of a player.
    #[must_use]
    pub fn name(&self, player: Player) -> &str {
        &self.player_names[player]
    }

    /// Check the configuration describes a playable frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.starting_reds {
            0 => return Err(ConfigError::NoReds),
            n if n > MAX_REDS => return Err(ConfigError::TooManyReds(n)),
            _ => {}
        }

        for (player, name) in self.player_names.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::BlankName(player));
            }
        }

        Ok(())
    }
}
