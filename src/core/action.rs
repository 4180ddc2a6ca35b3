//! Match actions: the three things a scorer can record.
//!
//! - "Pot" = a ball value the scorer says went down
//! - "End turn" = an explicit miss or safety
//! - "Foul" = four points to the opponent, turn ends
//!
//! Pot values are kept as raw `u8` so that out-of-range input from a
//! presentation layer is recorded exactly as it arrived.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::player::Player;

/// A single scorer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchAction {
    /// A ball with the given point value was potted.
    Pot(u8),
    /// The active player missed or played safe.
    EndTurn,
    /// The active player fouled; the opponent receives four points.
    Foul,
}

impl MatchAction {
    /// Pot action for a known ball.
    #[must_use]
    pub const fn pot(ball: Ball) -> Self {
        MatchAction::Pot(ball.value())
    }
}

impl std::fmt::Display for MatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchAction::Pot(value) => match Ball::from_value(*value) {
                Some(ball) => write!(f, "pot {}", ball),
                None => write!(f, "pot ?({})", value),
            },
            MatchAction::EndTurn => write!(f, "end turn"),
            MatchAction::Foul => write!(f, "foul +4"),
        }
    }
}

/// A recorded action with metadata for the move log.
///
/// Used for:
/// - Replaying a frame
/// - Showing a shot-by-shot history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Player at the table when the action was recorded.
    pub player: Player,

    /// The action taken.
    pub action: MatchAction,

    /// Whether the action was legal. Only pots can be illegal.
    pub legal: bool,

    /// Points awarded by the action, and to whom.
    pub awarded: Option<(Player, u32)>,

    /// Position in the log, starting at 0.
    pub sequence: u32,
}
