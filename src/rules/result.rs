//! Final result of a completed frame.
//!
//! This is everything a result store needs: both scores and the best
//! break with its owner.

use serde::{Deserialize, Serialize};

use crate::core::{HighestBreak, Player, PlayerPair};

/// Who won a completed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Single winner.
    Winner(Player),
    /// Level on points after the black.
    Draw,
}

impl MatchOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, MatchOutcome::Winner(p) if *p == player)
    }
}

/// Final scores and break information, handed off when a frame ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub scores: PlayerPair<u32>,
    pub highest_break: HighestBreak,
}

impl MatchResult {
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Higher score wins; equal scores are a draw.
    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        let (one, two) = self.scores.into_tuple();
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => MatchOutcome::Winner(Player::One),
            std::cmp::Ordering::Less => MatchOutcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Score as stored in the match history, e.g. `"72 : 41"`.
    #[must_use]
    pub fn scoreline(&self) -> String {
        format!("{} : {}", self.scores[Player::One], self.scores[Player::Two])
    }
}
