//! Snooker scoring rules.
//!
//! `MatchEngine` is the only thing that changes a `MatchState`:
//! - which pots are legal
//! - how points and breaks accumulate
//! - when the frame ends
//!
//! A completed engine hands off a `MatchResult` for storage.

pub mod engine;
pub mod result;

pub use engine::{MatchEngine, FOUL_POINTS};
pub use result::{MatchOutcome, MatchResult};
