//! # snooker-score
//!
//! Score keeping for a two-player snooker frame.
//!
//! ## Design Principles
//!
//! 1. **One Writer**: `MatchEngine` is the only code that changes match
//!    state. Callers read accessors after every operation.
//!
//! 2. **Illegal Is Normal**: potting the wrong ball is a regular outcome
//!    that ends the visit, reported as `false`, never as an error.
//!
//! 3. **Phase-Shaped State**: the red phase and the clearance carry only
//!    the fields that apply to them.
//!
//! ## Modules
//!
//! - `core`: Players, balls, phases, state, actions, configuration
//! - `rules`: The match engine and final results
//! - `store`: Persistence of finished matches
//! - `session`: Headless driver tying the engine to a store

pub mod core;
pub mod rules;
pub mod store;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Ball, BallClass, ConfigError, HighestBreak, MatchAction, MatchConfig,
    MatchState, Phase, Player, PlayerPair,
};

pub use crate::rules::{MatchEngine, MatchOutcome, MatchResult, FOUL_POINTS};

pub use crate::store::{
    BreakRecord, FileStore, MatchId, MatchRecord, MemoryStore, NewMatchRecord, ResultStore,
    StoreError,
};

pub use crate::session::{MatchSession, SavedMatch, SessionError, ShotOutcome};
