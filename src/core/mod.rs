//! Core match types: players, balls, phases, state, actions, configuration.
//!
//! These are plain data. Only the engine in `rules` changes a `MatchState`.

pub mod ball;
pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use ball::{Ball, BallClass};
pub use player::{Player, PlayerPair};
pub use config::{ConfigError, MatchConfig, MAX_REDS};
pub use action::{ActionRecord, MatchAction};
pub use state::{HighestBreak, MatchState, Phase};
