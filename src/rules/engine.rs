//! The match engine.
//!
//! Enforces turn legality and scoring for one frame:
//! - reds and colours alternate while reds remain
//! - once the last red is down, colours go in ascending order
//! - potting black in the clearance ends the frame
//!
//! An illegal pot is an ordinary outcome, not an error: the visit ends
//! exactly as if the player had missed, and `pot` returns `false`.

use tracing::{debug, info};

use crate::core::{
    ActionRecord, Ball, BallClass, HighestBreak, MatchAction, MatchConfig, MatchState, Phase,
    Player, PlayerPair,
};

use super::result::{MatchOutcome, MatchResult};

/// Points the opponent receives for a foul.
pub const FOUL_POINTS: u32 = 4;

/// Scoring state machine for a single frame.
///
/// Single-threaded and synchronous. Wrap it in a lock or an actor if
/// more than one caller needs it.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    state: MatchState,
    starting_reds: u32,
    history: Vec<ActionRecord>,
}

impl MatchEngine {
    /// Start a frame with `starting_reds` reds racked.
    ///
    /// ```
    /// use snooker_score::core::{Player, Phase, Ball};
    /// use snooker_score::rules::MatchEngine;
    ///
    /// let mut engine = MatchEngine::new(1);
    /// assert!(engine.pot(1));
    /// assert_eq!(engine.phase(), Phase::Clearance { next: Ball::Yellow });
    /// assert_eq!(engine.score(Player::One), 1);
    /// ```
    #[must_use]
    pub fn new(starting_reds: u32) -> Self {
        debug!(starting_reds, "new frame");
        Self {
            state: MatchState::new(starting_reds),
            starting_reds,
            history: Vec::new(),
        }
    }

    /// Start a frame from a configuration.
    ///
    /// The configuration is not validated here; see `MatchConfig::validate`.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.starting_reds)
    }

    /// Rebuild an engine by applying a logged sequence of actions.
    pub fn replay<'a>(
        starting_reds: u32,
        actions: impl IntoIterator<Item = &'a MatchAction>,
    ) -> Self {
        let mut engine = Self::new(starting_reds);
        for action in actions {
            engine.apply(action);
        }
        engine
    }

    // === Operations ===

    /// Record a potted ball by point value.
    ///
    /// Returns `true` when the pot was legal. An illegal pot (wrong class,
    /// wrong clearance colour, or a value outside 1..=7) ends the visit and
    /// returns `false`. On a complete match nothing changes and the result
    /// is `false`.
    pub fn pot(&mut self, value: u8) -> bool {
        if self.state.is_complete() {
            debug!(value, "pot ignored, frame complete");
            return false;
        }

        let player = self.state.active_player;
        let awarded = match (self.state.phase, Ball::from_value(value)) {
            (Phase::RedPhase { awaiting: BallClass::Red }, Some(Ball::Red)) => {
                self.state.reds_remaining -= 1;
                self.state.phase = if self.state.reds_remaining == 0 {
                    info!(%player, "last red potted, clearance begins");
                    Phase::Clearance { next: Ball::Yellow }
                } else {
                    Phase::RedPhase {
                        awaiting: BallClass::Colour,
                    }
                };
                Some(self.award(Ball::Red))
            }
            (Phase::RedPhase { awaiting: BallClass::Colour }, Some(ball))
                if ball.class() == BallClass::Colour =>
            {
                self.state.phase = Phase::RedPhase {
                    awaiting: BallClass::Red,
                };
                Some(self.award(ball))
            }
            (Phase::Clearance { next }, Some(ball)) if ball == next => {
                let points = self.award(ball);
                self.state.phase = match next.next_colour() {
                    Some(colour) => Phase::Clearance { next: colour },
                    None => {
                        let (one, two) = self.state.scores.into_tuple();
                        info!(score_one = one, score_two = two, "black potted, frame complete");
                        Phase::Complete
                    }
                };
                Some(points)
            }
            _ => None,
        };

        let legal = awarded.is_some();
        self.record(
            MatchAction::Pot(value),
            player,
            legal,
            awarded.map(|points| (player, points)),
        );

        if legal {
            debug!(%player, value, break_total = self.state.current_break, "legal pot");
        } else {
            debug!(%player, value, phase = ?self.state.phase, "illegal pot, visit ends");
            self.end_visit();
        }
        legal
    }

    /// End the active player's visit: a miss or a safety.
    ///
    /// Returns `false` without changing anything once the frame is complete.
    pub fn end_turn(&mut self) -> bool {
        if self.state.is_complete() {
            debug!("end turn ignored, frame complete");
            return false;
        }

        let player = self.state.active_player;
        self.record(MatchAction::EndTurn, player, true, None);
        self.end_visit();
        true
    }

    /// Foul by the active player: four points to the opponent, visit ends.
    ///
    /// The four points bypass the break; neither `current_break` nor
    /// `highest_break` is credited. Returns `false` without changing
    /// anything once the frame is complete.
    pub fn foul_plus_four(&mut self) -> bool {
        if self.state.is_complete() {
            debug!("foul ignored, frame complete");
            return false;
        }

        let offender = self.state.active_player;
        let receiver = offender.other();
        self.state.scores[receiver] += FOUL_POINTS;
        debug!(%offender, %receiver, points = FOUL_POINTS, "foul");

        self.record(
            MatchAction::Foul,
            offender,
            true,
            Some((receiver, FOUL_POINTS)),
        );
        self.end_visit();
        true
    }

    /// Apply any action. Returns what the matching operation returns.
    pub fn apply(&mut self, action: &MatchAction) -> bool {
        match *action {
            MatchAction::Pot(value) => self.pot(value),
            MatchAction::EndTurn => self.end_turn(),
            MatchAction::Foul => self.foul_plus_four(),
        }
    }

    // === Transitions ===

    /// Credit a legal pot to the active player and their break.
    fn award(&mut self, ball: Ball) -> u32 {
        let points = u32::from(ball.value());
        let player = self.state.active_player;

        self.state.scores[player] += points;
        self.state.current_break += points;
        if self.state.current_break > self.state.highest_break.value {
            self.state.highest_break = HighestBreak::new(self.state.current_break, player);
        }
        points
    }

    /// Shared miss transition: break resets, turn passes, and in the red
    /// phase a red is due again. The clearance colour is left alone.
    fn end_visit(&mut self) {
        self.state.current_break = 0;
        self.state.active_player = self.state.active_player.other();
        if let Phase::RedPhase { .. } = self.state.phase {
            self.state.phase = Phase::RedPhase {
                awaiting: BallClass::Red,
            };
        }
        debug!(active = %self.state.active_player, "turn passes");
    }

    fn record(
        &mut self,
        action: MatchAction,
        player: Player,
        legal: bool,
        awarded: Option<(Player, u32)>,
    ) {
        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord {
            player,
            action,
            legal,
            awarded,
            sequence,
        });
    }

    // === Accessors ===

    /// Full observable state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Reds racked at the start of the frame.
    #[must_use]
    pub fn starting_reds(&self) -> u32 {
        self.starting_reds
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.state.score(player)
    }

    #[must_use]
    pub fn scores(&self) -> PlayerPair<u32> {
        self.state.scores()
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.state.active_player()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Ball class due next. `None` outside the red phase.
    #[must_use]
    pub fn awaiting_ball(&self) -> Option<BallClass> {
        self.state.awaiting_ball()
    }

    #[must_use]
    pub fn reds_remaining(&self) -> u32 {
        self.state.reds_remaining()
    }

    #[must_use]
    pub fn current_break(&self) -> u32 {
        self.state.current_break()
    }

    #[must_use]
    pub fn highest_break(&self) -> HighestBreak {
        self.state.highest_break()
    }

    /// Colour due next. `None` outside the clearance.
    #[must_use]
    pub fn next_colour(&self) -> Option<Ball> {
        self.state.next_colour()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn points_remaining(&self) -> u32 {
        self.state.points_remaining()
    }

    /// Every action recorded so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Balls that would be a legal pot right now.
    #[must_use]
    pub fn legal_balls(&self) -> Vec<Ball> {
        match self.state.phase {
            Phase::RedPhase {
                awaiting: BallClass::Red,
            } => vec![Ball::Red],
            Phase::RedPhase {
                awaiting: BallClass::Colour,
            } => Ball::COLOURS.to_vec(),
            Phase::Clearance { next } => vec![next],
            Phase::Complete => Vec::new(),
        }
    }

    // === Terminal hand-off ===

    /// Final result. `None` while the frame is still in play.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.state.is_complete().then(|| MatchResult {
            scores: self.state.scores,
            highest_break: self.state.highest_break,
        })
    }

    /// Winner of a completed frame.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.result().map(|r| r.outcome())
    }

    /// Consume the engine, yielding the final result if the frame is over.
    #[must_use]
    pub fn into_result(self) -> Option<MatchResult> {
        self.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pot every red with a black, then clear the colours.
    fn clear_table(engine: &mut MatchEngine) {
        while engine.reds_remaining() > 0 {
            assert!(engine.pot(1));
            if engine.reds_remaining() > 0 {
                assert!(engine.pot(7));
            }
        }
        for colour in Ball::COLOURS {
            assert!(engine.pot(colour.value()));
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = MatchEngine::new(15);
        assert_eq!(engine.reds_remaining(), 15);
        assert_eq!(engine.active_player(), Player::One);
        assert_eq!(engine.awaiting_ball(), Some(BallClass::Red));
        assert_eq!(engine.phase(), Phase::RedPhase { awaiting: BallClass::Red });
        assert_eq!(engine.scores(), PlayerPair::new(0, 0));
        assert!(engine.history().is_empty());
        assert!(engine.result().is_none());
    }

    #[test]
    fn test_red_then_colour() {
        let mut engine = MatchEngine::new(5);

        assert!(engine.pot(1));
        assert_eq!(engine.reds_remaining(), 4);
        assert_eq!(engine.awaiting_ball(), Some(BallClass::Colour));

        assert!(engine.pot(6));
        assert_eq!(engine.awaiting_ball(), Some(BallClass::Red));
        assert_eq!(engine.score(Player::One), 7);
        assert_eq!(engine.current_break(), 7);
        assert_eq!(engine.active_player(), Player::One);
    }

    #[test]
    fn test_colour_when_red_due_ends_visit() {
        let mut engine = MatchEngine::new(5);
        assert!(engine.pot(1));
        assert!(engine.pot(2));

        assert!(!engine.pot(5));
        assert_eq!(engine.score(Player::One), 3);
        assert_eq!(engine.current_break(), 0);
        assert_eq!(engine.active_player(), Player::Two);
        assert_eq!(engine.reds_remaining(), 4);
    }

    #[test]
    fn test_red_when_colour_due_ends_visit() {
        let mut engine = MatchEngine::new(5);
        assert!(engine.pot(1));

        assert!(!engine.pot(1));
        assert_eq!(engine.reds_remaining(), 4);
        assert_eq!(engine.active_player(), Player::Two);
        assert_eq!(engine.awaiting_ball(), Some(BallClass::Red));
    }

    #[test]
    fn test_out_of_range_values_are_illegal() {
        for value in [0u8, 8, 200] {
            let mut engine = MatchEngine::new(5);
            assert!(!engine.pot(value));
            assert_eq!(engine.active_player(), Player::Two);
            assert_eq!(engine.scores(), PlayerPair::new(0, 0));
        }
    }

    #[test]
    fn test_last_red_starts_clearance() {
        let mut engine = MatchEngine::new(1);
        assert!(engine.pot(1));

        assert_eq!(engine.reds_remaining(), 0);
        assert_eq!(engine.phase(), Phase::Clearance { next: Ball::Yellow });
        assert_eq!(engine.awaiting_ball(), None);
        assert_eq!(engine.next_colour(), Some(Ball::Yellow));
        assert_eq!(engine.score(Player::One), 1);
    }

    #[test]
    fn test_wrong_clearance_colour_keeps_target() {
        let mut engine = MatchEngine::new(1);
        assert!(engine.pot(1));

        assert!(!engine.pot(7));
        assert_eq!(engine.score(Player::One), 1);
        assert_eq!(engine.current_break(), 0);
        assert_eq!(engine.active_player(), Player::Two);
        assert_eq!(engine.next_colour(), Some(Ball::Yellow));
    }

    #[test]
    fn test_clearance_advances_and_completes() {
        let mut engine = MatchEngine::new(1);
        assert!(engine.pot(1));

        for colour in &Ball::COLOURS[..5] {
            assert!(engine.pot(colour.value()));
            assert_eq!(engine.next_colour(), colour.next_colour());
        }
        assert!(engine.pot(7));
        assert!(engine.is_complete());
        assert_eq!(engine.phase(), Phase::Complete);
        assert_eq!(engine.score(Player::One), 28);
        assert_eq!(engine.highest_break(), HighestBreak::new(28, Player::One));
    }

    #[test]
    fn test_maximum_break() {
        let mut engine = MatchEngine::new(15);
        clear_table(&mut engine);

        assert!(engine.is_complete());
        assert_eq!(engine.score(Player::One), 15 + 14 * 7 + 27);
        assert_eq!(engine.points_remaining(), 0);
    }

    #[test]
    fn test_break_accumulates() {
        let mut engine = MatchEngine::new(5);
        assert!(engine.pot(1));
        assert!(engine.pot(7));

        assert_eq!(engine.current_break(), 8);
        assert_eq!(engine.highest_break(), HighestBreak::new(8, Player::One));
    }

    #[test]
    fn test_highest_break_survives_later_visits() {
        let mut engine = MatchEngine::new(5);
        assert!(engine.pot(1));
        assert!(engine.pot(7));
        assert!(engine.end_turn());

        assert!(engine.pot(1));
        assert!(engine.pot(2));
        assert_eq!(engine.current_break(), 3);
        assert_eq!(engine.highest_break(), HighestBreak::new(8, Player::One));

        assert!(engine.pot(1));
        assert!(engine.pot(5));
        assert_eq!(engine.highest_break(), HighestBreak::new(9, Player::Two));
    }

    #[test]
    fn test_end_turn() {
        let mut engine = MatchEngine::new(5);
        assert!(engine.pot(1));

        assert!(engine.end_turn());
        assert_eq!(engine.current_break(), 0);
        assert_eq!(engine.active_player(), Player::Two);
        assert_eq!(engine.awaiting_ball(), Some(BallClass::Red));
        assert_eq!(engine.score(Player::One), 1);
    }

    #[test]
    fn test_end_turn_in_clearance_keeps_colour() {
        let mut engine = MatchEngine::new(1);
        assert!(engine.pot(1));
        assert!(engine.pot(2));

        assert!(engine.end_turn());
        assert_eq!(engine.next_colour(), Some(Ball::Green));
        assert_eq!(engine.active_player(), Player::Two);
    }

    #[test]
    fn test_foul_awards_opponent() {
        let mut engine = MatchEngine::new(5);
        assert!(engine.pot(1));
        assert!(engine.pot(4));

        assert!(engine.foul_plus_four());
        assert_eq!(engine.score(Player::One), 5);
        assert_eq!(engine.score(Player::Two), 4);
        assert_eq!(engine.current_break(), 0);
        assert_eq!(engine.active_player(), Player::Two);
        assert_eq!(engine.highest_break(), HighestBreak::new(5, Player::One));
    }

    #[test]
    fn test_foul_does_not_start_a_break() {
        let mut engine = MatchEngine::new(5);
        assert!(engine.foul_plus_four());

        assert_eq!(engine.score(Player::Two), 4);
        assert_eq!(engine.highest_break(), HighestBreak::default());
    }

    #[test]
    fn test_complete_match_is_frozen() {
        let mut engine = MatchEngine::new(1);
        clear_table(&mut engine);
        let frozen = engine.state().clone();
        let logged = engine.history().len();

        assert!(!engine.pot(1));
        assert!(!engine.pot(7));
        assert!(!engine.end_turn());
        assert!(!engine.foul_plus_four());
        assert!(!engine.apply(&MatchAction::Foul));

        assert_eq!(engine.state(), &frozen);
        assert_eq!(engine.history().len(), logged);
    }

    #[test]
    fn test_legal_balls() {
        let mut engine = MatchEngine::new(1);
        assert_eq!(engine.legal_balls(), vec![Ball::Red]);

        let mut colours = MatchEngine::new(2);
        assert!(colours.pot(1));
        assert_eq!(colours.legal_balls(), Ball::COLOURS.to_vec());

        assert!(engine.pot(1));
        assert_eq!(engine.legal_balls(), vec![Ball::Yellow]);

        for colour in Ball::COLOURS {
            assert!(engine.pot(colour.value()));
        }
        assert!(engine.legal_balls().is_empty());
    }

    #[test]
    fn test_history_records_every_action() {
        let mut engine = MatchEngine::new(5);
        engine.pot(1);
        engine.pot(1);
        engine.foul_plus_four();
        engine.end_turn();

        let history = engine.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].awarded, Some((Player::One, 1)));
        assert!(history[0].legal);
        assert!(!history[1].legal);
        assert_eq!(history[1].player, Player::One);
        assert_eq!(history[2].player, Player::Two);
        assert_eq!(history[2].awarded, Some((Player::One, FOUL_POINTS)));
        assert_eq!(history[3].action, MatchAction::EndTurn);
        assert_eq!(history[3].player, Player::One);
        assert!(history.iter().enumerate().all(|(i, r)| r.sequence == i as u32));
    }

    #[test]
    fn test_replay_reproduces_state() {
        let mut engine = MatchEngine::new(2);
        for action in [
            MatchAction::Pot(1),
            MatchAction::Pot(6),
            MatchAction::Pot(3),
            MatchAction::Foul,
            MatchAction::Pot(1),
            MatchAction::Pot(2),
            MatchAction::EndTurn,
        ] {
            engine.apply(&action);
        }

        let actions: Vec<_> = engine.history().iter().map(|r| r.action).collect();
        let replayed = MatchEngine::replay(2, &actions);

        assert_eq!(replayed.state(), engine.state());
        assert_eq!(replayed.history(), engine.history());
    }

    #[test]
    fn test_result_hand_off() {
        let mut engine = MatchEngine::new(1);
        assert!(engine.foul_plus_four());
        assert!(engine.pot(1));
        for colour in Ball::COLOURS {
            assert!(engine.pot(colour.value()));
        }

        assert_eq!(engine.outcome(), Some(MatchOutcome::Winner(Player::Two)));
        let result = engine.into_result().unwrap();
        assert_eq!(result.scores, PlayerPair::new(0, 32));
        assert_eq!(result.highest_break, HighestBreak::new(28, Player::Two));
    }
}
