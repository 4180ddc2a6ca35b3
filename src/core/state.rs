//! Match state.
//!
//! ## Phase
//!
//! The phase carries only the fields that mean something in it: the
//! red phase knows which ball class is due, the clearance knows which
//! colour is due, and a complete match knows nothing more.
//!
//! ## MatchState
//!
//! Everything observable about a frame in progress. Read-only outside
//! the crate; the engine is the only writer.

use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallClass};
use super::player::{Player, PlayerPair};

/// Top-level game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Reds remain; reds and colours alternate.
    RedPhase { awaiting: BallClass },
    /// Reds are gone; colours must go down in ascending order.
    Clearance { next: Ball },
    /// Black potted in the clearance. Terminal.
    Complete,
}

impl Phase {
    /// Phase a frame starts in.
    #[must_use]
    pub const fn opening(starting_reds: u32) -> Self {
        if starting_reds == 0 {
            Phase::Clearance { next: Ball::Yellow }
        } else {
            Phase::RedPhase {
                awaiting: BallClass::Red,
            }
        }
    }

    #[must_use]
    pub const fn is_clearance(self) -> bool {
        matches!(self, Phase::Clearance { .. })
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Phase::Complete)
    }
}

/// Best break of the match and who made it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighestBreak {
    pub value: u32,
    /// `None` until somebody scores from a pot.
    pub player: Option<Player>,
}

impl HighestBreak {
    #[must_use]
    pub const fn new(value: u32, player: Player) -> Self {
        Self {
            value,
            player: Some(player),
        }
    }
}

/// Complete observable state of a frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) reds_remaining: u32,
    pub(crate) scores: PlayerPair<u32>,
    pub(crate) active_player: Player,
    pub(crate) current_break: u32,
    pub(crate) highest_break: HighestBreak,
    pub(crate) phase: Phase,
}

impl MatchState {
    /// Fresh frame: player one at the table, a red due.
    #[must_use]
    pub fn new(starting_reds: u32) -> Self {
        Self {
            reds_remaining: starting_reds,
            scores: PlayerPair::default(),
            active_player: Player::One,
            current_break: 0,
            highest_break: HighestBreak::default(),
            phase: Phase::opening(starting_reds),
        }
    }

    /// Reds still on the table.
    #[must_use]
    pub fn reds_remaining(&self) -> u32 {
        self.reds_remaining
    }

    /// Cumulative score of a player.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<u32> {
        self.scores
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Points in the active player's current visit.
    #[must_use]
    pub fn current_break(&self) -> u32 {
        self.current_break
    }

    #[must_use]
    pub fn highest_break(&self) -> HighestBreak {
        self.highest_break
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ball class due next. `None` outside the red phase.
    #[must_use]
    pub fn awaiting_ball(&self) -> Option<BallClass> {
        match self.phase {
            Phase::RedPhase { awaiting } => Some(awaiting),
            _ => None,
        }
    }

    /// Colour due next. `None` outside the clearance.
    #[must_use]
    pub fn next_colour(&self) -> Option<Ball> {
        match self.phase {
            Phase::Clearance { next } => Some(next),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase.is_complete()
    }

    /// Most points still available to be scored from the table.
    ///
    /// Every remaining red can be followed by a black; a colour already
    /// earned by the last red counts as a black too.
    #[must_use]
    pub fn points_remaining(&self) -> u32 {
        match self.phase {
            Phase::RedPhase { awaiting } => {
                let earned_colour = match awaiting {
                    BallClass::Red => 0,
                    BallClass::Colour => Ball::Black.value() as u32,
                };
                self.reds_remaining * (1 + Ball::Black.value() as u32)
                    + earned_colour
                    + Ball::COLOURS_TOTAL
            }
            Phase::Clearance { next } => (next.value()..=Ball::Black.value())
                .map(u32::from)
                .sum(),
            Phase::Complete => 0,
        }
    }
}
