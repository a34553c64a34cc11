//! Turn orchestration: phase order, seat rotation and safety bounds.

use std::time::Duration;

use sanguo_engine::actors::Identity;
use sanguo_engine::cards::{Card, CardId, CardKind};
use sanguo_engine::core::{GameConfig, GameEvent, Phase, PlayerId, RuleConfig, SeatConfig};
use sanguo_engine::effects::TargetSets;
use sanguo_engine::error::{EngineError, OracleError};
use sanguo_engine::game::GameBuilder;
use sanguo_engine::oracle::{DecisionOracle, OracleResult, ResponseRequest};
use sanguo_engine::skills::HookPoint;

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);
const C: PlayerId = PlayerId::new(2);

fn rules() -> RuleConfig {
    RuleConfig {
        initial_hand: 0,
        shuffle_deck: false,
        ..RuleConfig::default()
    }
}

fn trio(rules: RuleConfig) -> GameConfig {
    GameConfig::standard(vec![
        SeatConfig::new("A", Identity::Lord),
        SeatConfig::new("B", Identity::Rebel),
        SeatConfig::new("C", Identity::Traitor),
    ])
    .with_rules(rules)
}

/// How a test oracle misbehaves in the Play phase.
#[derive(Clone, Copy, Debug)]
enum Quirk {
    /// Always picks the first playable card, then offers no targets.
    Stubborn,
    /// Names a card that does not exist.
    Phantom,
    /// Never answers.
    Silent,
}

#[derive(Debug)]
struct QuirkyOracle(Quirk);

impl DecisionOracle for QuirkyOracle {
    fn select_card(&mut self, playable: &[Card], _targets: &TargetSets) -> OracleResult<Option<CardId>> {
        match self.0 {
            Quirk::Stubborn => Ok(playable.first().map(|c| c.id)),
            Quirk::Phantom => Ok(Some(CardId::new(9999))),
            Quirk::Silent => Err(OracleError::Timeout(Duration::from_secs(30))),
        }
    }

    fn select_targets(&mut self, _candidates: &[PlayerId], _card: &Card, _count: usize) -> OracleResult<Vec<PlayerId>> {
        Ok(Vec::new())
    }

    fn select_discard(&mut self, hand: &[Card], count: usize) -> OracleResult<Vec<CardId>> {
        Ok(hand.iter().take(count).map(|c| c.id).collect())
    }

    fn select_discard_range(&mut self, _hand: &[Card], _min: usize, _max: usize) -> OracleResult<Vec<CardId>> {
        Ok(Vec::new())
    }

    fn ask_response(&mut self, _request: &ResponseRequest) -> OracleResult<Option<CardId>> {
        Ok(None)
    }

    fn ask_activate_skill(&mut self, _skill: &str, _hook: &HookPoint) -> OracleResult<bool> {
        Ok(false)
    }
}

/// Phases run Prepare, Draw, Play, Discard, then the turn passes on.
#[test]
fn test_phase_order() {
    let mut game = GameBuilder::from_config(trio(rules())).build().unwrap();
    game.play_turn().unwrap();

    let phases: Vec<Phase> = game
        .history()
        .iter()
        .filter_map(|e| match e {
            GameEvent::PhaseEntered { seat, phase } if *seat == A => Some(*phase),
            _ => None,
        })
        .collect();
    assert_eq!(phases, Phase::ORDER.to_vec());
    assert!(matches!(
        game.history().front(),
        Some(GameEvent::TurnStarted { seat, turn: 1 }) if *seat == A
    ));
    assert_eq!(game.state().active(), B);
    assert_eq!(game.state().turn(), 2);
    assert_eq!(game.state().actor(A).hand.len(), 2);
}

/// Dead seats are passed over when the turn moves on.
#[test]
fn test_rotation_skips_dead() {
    let mut game = GameBuilder::from_config(trio(rules())).build().unwrap();
    game.state_mut().actor_mut(B).mark_dead();

    game.play_turn().unwrap();
    assert_eq!(game.state().active(), C);
    game.play_turn().unwrap();
    assert_eq!(game.state().active(), A);
    assert_eq!(game.state().turn(), 3);
}

/// A dead active seat hands over without using up a turn.
#[test]
fn test_dead_active_seat() {
    let mut game = GameBuilder::from_config(trio(rules())).build().unwrap();
    game.state_mut().actor_mut(A).mark_dead();

    game.play_turn().unwrap();
    assert_eq!(game.state().active(), B);
    assert_eq!(game.state().turn(), 1);
    assert!(game.history().is_empty());
}

/// The hand is cut down to current hp at the end of the turn.
#[test]
fn test_discard_down_to_hp() {
    let mut game = GameBuilder::from_config(trio(rules()))
        .with_hand(A, [CardKind::Dodge, CardKind::Dodge, CardKind::Dodge])
        .with_hp(A, 1)
        .build()
        .unwrap();
    game.play_turn().unwrap();

    let hand = &game.state().actor(A).hand;
    assert_eq!(hand.len(), 1);
    assert_eq!(hand[0].kind(), CardKind::Dodge);
    assert_eq!(game.state().deck.discard_pile_len(), 4);
}

/// A wrong discard answer falls back to the end of the hand.
#[test]
fn test_invalid_discard_falls_back() {
    let mut game = GameBuilder::from_config(trio(rules()))
        .with_hand(A, [CardKind::Dodge])
        .with_hp(A, 1)
        .build()
        .unwrap();
    game.set_oracle(A, Box::new(QuirkyOracle(Quirk::Phantom)));

    let ids = game.ask_discard_range(A, 1, 1).unwrap();
    let last = game.state().actor(A).hand.last().map(|c| c.id);
    assert_eq!(ids.len(), 1);
    assert_eq!(ids.first().copied(), last);
}

/// Selecting a card that is not playable ends the Play phase.
#[test]
fn test_unknown_card_passes() {
    let mut game = GameBuilder::from_config(trio(rules()))
        .with_oracle(A, QuirkyOracle(Quirk::Phantom))
        .build()
        .unwrap();
    game.play_turn().unwrap();

    assert!(!game
        .history()
        .iter()
        .any(|e| matches!(e, GameEvent::CardPlayed { .. })));
    assert_eq!(game.state().active(), B);
}

/// An oracle that keeps choosing cards without finishing a play trips the
/// per-turn bound.
#[test]
fn test_play_limit() {
    let limited = RuleConfig {
        max_plays_per_turn: 5,
        ..rules()
    };
    let mut game = GameBuilder::from_config(trio(limited))
        .with_hand(A, [CardKind::Attack])
        .with_oracle(A, QuirkyOracle(Quirk::Stubborn))
        .build()
        .unwrap();

    let err = game.play_turn().unwrap_err();
    assert!(matches!(err, EngineError::PlayLimitExceeded { seat, limit: 5 } if seat == A));
    assert!(err.is_fatal());
    assert_eq!(err.code(), "play_limit");
}

/// An oracle failure aborts the session.
#[test]
fn test_oracle_timeout_is_fatal() {
    let mut game = GameBuilder::from_config(trio(rules()))
        .with_hand(A, [CardKind::Attack])
        .with_oracle(A, QuirkyOracle(Quirk::Silent))
        .build()
        .unwrap();

    let err = game.run().unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.code(), "oracle_timeout");
    assert!(matches!(err, EngineError::Oracle { seat, .. } if seat == A));
}

/// A session nobody can finish hits the turn bound.
#[test]
fn test_turn_limit() {
    let limited = RuleConfig {
        max_turns: 3,
        ..rules()
    };
    let mut game = GameBuilder::from_config(trio(limited)).build().unwrap();

    let err = game.run().unwrap_err();
    assert!(matches!(err, EngineError::TurnLimitExceeded { limit: 3 }));
    assert_eq!(game.state().turn(), 4);
    assert!(!game.is_over());
}

/// Every event and snapshot reaches each seat's oracle.
#[test]
fn test_oracles_observe_events() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct Counting {
        events: Arc<AtomicUsize>,
        syncs: Arc<AtomicUsize>,
    }

    impl DecisionOracle for Counting {
        fn select_card(&mut self, _playable: &[Card], _targets: &TargetSets) -> OracleResult<Option<CardId>> {
            Ok(None)
        }

        fn select_targets(&mut self, _candidates: &[PlayerId], _card: &Card, _count: usize) -> OracleResult<Vec<PlayerId>> {
            Ok(Vec::new())
        }

        fn select_discard(&mut self, hand: &[Card], count: usize) -> OracleResult<Vec<CardId>> {
            Ok(hand.iter().take(count).map(|c| c.id).collect())
        }

        fn select_discard_range(&mut self, _hand: &[Card], _min: usize, _max: usize) -> OracleResult<Vec<CardId>> {
            Ok(Vec::new())
        }

        fn ask_response(&mut self, _request: &ResponseRequest) -> OracleResult<Option<CardId>> {
            Ok(None)
        }

        fn ask_activate_skill(&mut self, _skill: &str, _hook: &HookPoint) -> OracleResult<bool> {
            Ok(false)
        }

        fn on_event(&mut self, _event: &GameEvent) {
            self.events.fetch_add(1, Ordering::SeqCst);
        }

        fn sync_state(&mut self, _state: &sanguo_engine::oracle::VisibleState) {
            self.syncs.fetch_add(1, Ordering::SeqCst);
        }
    }

    let oracle = Counting::default();
    let events = Arc::clone(&oracle.events);
    let syncs = Arc::clone(&oracle.syncs);

    let mut game = GameBuilder::from_config(trio(rules()))
        .with_oracle(C, oracle)
        .build()
        .unwrap();
    let synced_at_start = syncs.load(Ordering::SeqCst);
    assert!(synced_at_start >= 1);

    game.play_turn().unwrap();
    assert_eq!(events.load(Ordering::SeqCst), game.history().len());
    assert!(syncs.load(Ordering::SeqCst) > synced_at_start);
}
