//! Ball values.
//!
//! Reds are worth 1. The six colours are worth 2 through 7 and must be
//! cleared in exactly that order once the reds are gone.

use serde::{Deserialize, Serialize};

/// A snooker ball, identified by its point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Ball {
    Red = 1,
    Yellow = 2,
    Green = 3,
    Brown = 4,
    Blue = 5,
    Pink = 6,
    Black = 7,
}

/// Which class of ball is legal next during the red phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallClass {
    Red,
    Colour,
}

impl Ball {
    /// Every ball in value order.
    pub const ALL: [Ball; 7] = [
        Ball::Red,
        Ball::Yellow,
        Ball::Green,
        Ball::Brown,
        Ball::Blue,
        Ball::Pink,
        Ball::Black,
    ];

    /// The colours in clearance order.
    pub const COLOURS: [Ball; 6] = [
        Ball::Yellow,
        Ball::Green,
        Ball::Brown,
        Ball::Blue,
        Ball::Pink,
        Ball::Black,
    ];

    /// Total value of all six colours.
    pub const COLOURS_TOTAL: u32 = 27;

    /// Point value (1..=7).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look a ball up by point value. Anything outside 1..=7 is `None`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Ball::Red),
            2 => Some(Ball::Yellow),
            3 => Some(Ball::Green),
            4 => Some(Ball::Brown),
            5 => Some(Ball::Blue),
            6 => Some(Ball::Pink),
            7 => Some(Ball::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Ball::Red)
    }

    #[must_use]
    pub const fn class(self) -> BallClass {
        if self.is_red() {
            BallClass::Red
        } else {
            BallClass::Colour
        }
    }

    /// The colour that follows this one in a clearance, `None` after black.
    #[must_use]
    pub const fn next_colour(self) -> Option<Self> {
        match self {
            Ball::Red => Some(Ball::Yellow),
            Ball::Black => None,
            other => Ball::from_value(other.value() + 1),
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Ball::Red => "red",
            Ball::Yellow => "yellow",
            Ball::Green => "green",
            Ball::Brown => "brown",
            Ball::Blue => "blue",
            Ball::Pink => "pink",
            Ball::Black => "black",
        }
    }
}

impl std::fmt::Display for Ball {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

impl TryFrom<u8> for Ball {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ball::from_value(value).ok_or(value)
    }
}
