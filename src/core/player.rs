//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Snooker is strictly head-to-head, so a player is one of two variants
//! rather than an open-ended index. Player numbers are 1-based to match
//! what the table displays.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `Player`. Used for scores and names.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// The player who breaks off.
    One,
    /// The opponent.
    Two,
}

impl Player {
    /// Both players, in table order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The 1-based player number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Look a player up by 1-based number.
    ///
    /// ```
    /// use snooker_score::core::Player;
    ///
    /// assert_eq!(Player::from_number(2), Some(Player::Two));
    /// assert_eq!(Player::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player storage for exactly two players.
///
/// ## Example
///
/// ```
/// use snooker_score::core::{Player, PlayerPair};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::default();
/// scores[Player::Two] += 4;
///
/// assert_eq!(scores[Player::One], 0);
/// assert_eq!(scores[Player::Two], 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from player one's and player two's values.
    #[must_use]
    pub const fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::BOTH.into_iter().zip(self.data.iter())
    }

    /// Transform both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PlayerPair<U> {
        let [one, two] = self.data;
        PlayerPair::new(f(one), f(two))
    }

    /// Consume the pair into `(player one, player two)`.
    pub fn into_tuple(self) -> (T, T) {
        let [one, two] = self.data;
        (one, two)
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
