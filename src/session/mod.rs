//! Headless match session.
//!
//! Sits where a scoring screen would: forwards scorer input to the
//! engine, produces the text a display shows, and saves the result to a
//! `ResultStore` once the black goes down in the clearance.

mod error;

pub use error::SessionError;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::core::{Ball, BallClass, MatchConfig, Phase, Player};
use crate::rules::{MatchEngine, MatchOutcome, MatchResult};
use crate::store::{MatchId, NewMatchRecord, ResultStore};

/// A finished and stored match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavedMatch {
    pub match_id: MatchId,
    pub result: MatchResult,
    pub outcome: MatchOutcome,
}

/// What a scorer input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Legal pot; the same player stays at the table.
    Legal,
    /// Illegal pot; the turn passed.
    Illegal,
    /// Miss or foul; the turn passed.
    TurnEnded,
    /// The frame ended and its result was stored.
    Finished(SavedMatch),
    /// The frame was already over; nothing changed.
    Ignored,
}

/// One frame between two named players, backed by a result store.
#[derive(Debug)]
pub struct MatchSession<S: ResultStore> {
    config: MatchConfig,
    engine: MatchEngine,
    store: S,
    date: NaiveDate,
    stored_id: Option<MatchId>,
    saved: Option<SavedMatch>,
}

impl<S: ResultStore> MatchSession<S> {
    /// Start a session dated today.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Config`] if the configuration is not playable.
    #[instrument(skip(config, store), fields(reds = config.starting_reds))]
    pub fn new(config: MatchConfig, store: S) -> Result<Self, SessionError> {
        config.validate()?;
        info!(
            player_one = config.name(Player::One),
            player_two = config.name(Player::Two),
            "match started"
        );

        Ok(Self {
            engine: MatchEngine::from_config(&config),
            config,
            store,
            date: chrono::Local::now().date_naive(),
            stored_id: None,
            saved: None,
        })
    }

    /// Stamp the stored result with a specific date.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    // === Scorer input ===

    /// Record a potted ball by value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if this pot finished the frame and
    /// the result could not be saved. The frame stays finished; call
    /// [`MatchSession::persist`] to retry.
    pub fn pot(&mut self, value: u8) -> Result<ShotOutcome, SessionError> {
        if self.engine.is_complete() {
            return Ok(ShotOutcome::Ignored);
        }

        let legal = self.engine.pot(value);
        if self.engine.is_complete() {
            return self.persist().map(ShotOutcome::Finished);
        }

        Ok(if legal {
            ShotOutcome::Legal
        } else {
            ShotOutcome::Illegal
        })
    }

    /// Record a miss or safety.
    pub fn end_turn(&mut self) -> ShotOutcome {
        if self.engine.end_turn() {
            ShotOutcome::TurnEnded
        } else {
            ShotOutcome::Ignored
        }
    }

    /// Record a foul worth four to the opponent.
    pub fn foul(&mut self) -> ShotOutcome {
        if self.engine.foul_plus_four() {
            ShotOutcome::TurnEnded
        } else {
            ShotOutcome::Ignored
        }
    }

    // === Persistence ===

    /// Save the finished frame. Repeated calls after a success return the
    /// same `SavedMatch` without touching the store again; after a failure
    /// only the missing parts are retried.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFinished`] while the frame is in play and
    /// [`SessionError::Store`] if the store rejects the result.
    #[instrument(skip(self))]
    pub fn persist(&mut self) -> Result<SavedMatch, SessionError> {
        if let Some(saved) = self.saved {
            return Ok(saved);
        }
        let result = self.engine.result().ok_or(SessionError::NotFinished)?;

        let match_id = match self.stored_id {
            Some(id) => id,
            None => {
                let record =
                    NewMatchRecord::from_result(&self.config.player_names, &result, self.date);
                let id = self.store.save_match(record).map_err(|e| {
                    warn!(error = %e, "match result not saved");
                    SessionError::Store(e)
                })?;
                self.stored_id = Some(id);
                id
            }
        };

        if let Some(holder) = result.highest_break.player {
            self.store
                .save_highest_break(
                    match_id,
                    self.config.name(holder),
                    result.highest_break.value,
                )
                .map_err(|e| {
                    warn!(error = %e, %match_id, "highest break not saved");
                    SessionError::Store(e)
                })?;
        } else {
            debug!(%match_id, "no break to save");
        }

        let saved = SavedMatch {
            match_id,
            result,
            outcome: result.outcome(),
        };
        info!(%match_id, scoreline = %result.scoreline(), "match finished and saved");
        self.saved = Some(saved);
        Ok(saved)
    }

    /// The stored result, once saving has succeeded.
    pub fn saved(&self) -> Option<SavedMatch> {
        self.saved
    }

    // === Display ===

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Name of a player.
    pub fn name(&self, player: Player) -> &str {
        self.config.name(player)
    }

    /// Name of the winner, or `None` for a draw or a frame still in play.
    pub fn winner_name(&self) -> Option<&str> {
        match self.engine.outcome()? {
            MatchOutcome::Winner(player) => Some(self.name(player)),
            MatchOutcome::Draw => None,
        }
    }

    /// `"Alice 12 : 7 Bob"`.
    pub fn score_line(&self) -> String {
        format!(
            "{} {} : {} {}",
            self.name(Player::One),
            self.engine.score(Player::One),
            self.engine.score(Player::Two),
            self.name(Player::Two)
        )
    }

    /// Who is at the table.
    pub fn turn_line(&self) -> String {
        format!("At the table: {}", self.name(self.engine.active_player()))
    }

    pub fn break_line(&self) -> String {
        format!(
            "Current break: {}  |  Highest break: {}",
            self.engine.current_break(),
            self.engine.highest_break().value
        )
    }

    /// What ball is due next.
    pub fn status_line(&self) -> String {
        match self.engine.phase() {
            Phase::RedPhase {
                awaiting: BallClass::Red,
            } => format!(
                "{} is next ({} remaining)",
                capitalise(Ball::Red.name()),
                self.engine.reds_remaining()
            ),
            Phase::RedPhase {
                awaiting: BallClass::Colour,
            } => "Any colour is next".to_string(),
            Phase::Clearance { next } => {
                format!("Clearance! {} is next", capitalise(next.name()))
            }
            Phase::Complete => format!("Frame over: {}", self.score_line()),
        }
    }

    /// Give back the engine and the store.
    pub fn into_parts(self) -> (MatchEngine, S) {
        (self.engine, self.store)
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
