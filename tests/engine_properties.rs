//! Property tests for the match engine.
//!
//! Random scorer input, including out-of-range pot values, must never
//! break the scoring invariants.

use proptest::prelude::*;

use snooker_score::core::{MatchAction, Phase, Player};
use snooker_score::rules::{MatchEngine, FOUL_POINTS};

fn action() -> impl Strategy<Value = MatchAction> {
    prop_oneof![
        6 => (0u8..=9).prop_map(MatchAction::Pot),
        1 => Just(MatchAction::EndTurn),
        1 => Just(MatchAction::Foul),
    ]
}

fn total(engine: &MatchEngine) -> u32 {
    engine.score(Player::One) + engine.score(Player::Two)
}

proptest! {
    /// Scores only ever grow by legal pot values or foul points.
    #[test]
    fn score_is_sum_of_awards(reds in 1u32..=15, actions in prop::collection::vec(action(), 0..200)) {
        let mut engine = MatchEngine::new(reds);
        let mut potted = 0u32;
        let mut fouls = 0u32;

        for action in &actions {
            let before = total(&engine);
            let applied = engine.apply(action);
            match action {
                MatchAction::Pot(value) if applied => potted += u32::from(*value),
                MatchAction::Foul if applied => fouls += 1,
                _ => prop_assert_eq!(total(&engine), before),
            }
        }

        prop_assert_eq!(total(&engine), potted + FOUL_POINTS * fouls);
    }

    /// An illegal pot scores nothing, ends the break and passes the turn.
    #[test]
    fn illegal_pot_is_a_miss(reds in 1u32..=15, actions in prop::collection::vec(action(), 0..100), value in 0u8..=9) {
        let mut engine = MatchEngine::new(reds);
        for action in &actions {
            engine.apply(action);
        }
        prop_assume!(!engine.is_complete());
        prop_assume!(!engine.legal_balls().iter().any(|b| b.value() == value));

        let player = engine.active_player();
        let scores = engine.scores();
        let next = engine.next_colour();

        prop_assert!(!engine.pot(value));
        prop_assert_eq!(engine.scores(), scores);
        prop_assert_eq!(engine.current_break(), 0);
        prop_assert_eq!(engine.active_player(), player.other());
        prop_assert_eq!(engine.next_colour(), next);
    }

    /// Reds run out exactly when the clearance starts, and the highest
    /// break tracks the largest current break ever seen.
    #[test]
    fn phase_and_break_invariants(reds in 0u32..=15, actions in prop::collection::vec(action(), 0..300)) {
        let mut engine = MatchEngine::new(reds);
        let mut best = 0u32;
        let mut last_reds = engine.reds_remaining();

        for action in &actions {
            let before = engine.highest_break();
            let was_active = engine.active_player();
            let was_complete = engine.is_complete();
            engine.apply(action);

            prop_assert!(engine.reds_remaining() <= last_reds);
            last_reds = engine.reds_remaining();

            match engine.phase() {
                Phase::Clearance { .. } => prop_assert_eq!(engine.reds_remaining(), 0),
                Phase::RedPhase { .. } => prop_assert!(engine.reds_remaining() > 0),
                Phase::Complete => prop_assert_eq!(engine.reds_remaining(), 0),
            }

            let highest = engine.highest_break();
            prop_assert!(highest.value >= before.value);
            prop_assert!(highest.value >= engine.current_break());
            if highest.value > before.value {
                prop_assert!(!was_complete);
                prop_assert_eq!(highest.player, Some(was_active));
            }
            best = best.max(engine.current_break());
        }

        prop_assert_eq!(engine.highest_break().value, best);
    }

    /// Replaying the move log reproduces the exact state.
    #[test]
    fn replay_matches_live_play(reds in 1u32..=15, actions in prop::collection::vec(action(), 0..200)) {
        let mut engine = MatchEngine::new(reds);
        for action in &actions {
            engine.apply(action);
        }

        let logged: Vec<_> = engine.history().iter().map(|r| r.action).collect();
        let replayed = MatchEngine::replay(reds, &logged);
        prop_assert_eq!(replayed.state(), engine.state());
    }
}
