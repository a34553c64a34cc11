//! Deck composition, configuration loading and running out of cards.

use sanguo_engine::actors::{Character, Identity};
use sanguo_engine::cards::{CardKind, Suit};
use sanguo_engine::core::{DeckEntry, GameConfig, GameEvent, OracleKind, PlayerId, RuleConfig, SeatConfig};
use sanguo_engine::error::EngineError;
use sanguo_engine::game::GameBuilder;

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);

fn duo() -> Vec<SeatConfig> {
    vec![
        SeatConfig::new("A", Identity::Lord),
        SeatConfig::new("B", Identity::Rebel),
    ]
}

/// The standard deck has 69 cards in the usual proportions.
#[test]
fn test_standard_composition() {
    let cards = GameConfig::standard(duo()).build_cards();
    let count = |pred: &dyn Fn(CardKind) -> bool| cards.iter().filter(|c| pred(c.kind())).count();

    assert_eq!(cards.len(), 69);
    assert_eq!(count(&|k| k == CardKind::Attack), 30);
    assert_eq!(count(&|k| k == CardKind::Dodge), 15);
    assert_eq!(count(&|k| k == CardKind::Heal), 8);
    assert_eq!(count(&|k| k == CardKind::Counter), 4);
    assert_eq!(count(&|k| k == CardKind::Onslaught), 3);
    assert_eq!(count(&|k| k == CardKind::Volley), 1);
    assert_eq!(count(&|k| k == CardKind::Duel), 3);
    assert_eq!(count(&|k| k.equip_slot().is_some()), 5);
}

/// Every seat gets its opening hand and the rest stays in the draw pile.
#[test]
fn test_opening_deal() {
    let game = GameBuilder::from_config(GameConfig::standard(duo()).with_seed(5))
        .build()
        .unwrap();

    assert_eq!(game.state().actor(A).hand.len(), 4);
    assert_eq!(game.state().actor(B).hand.len(), 4);
    assert_eq!(game.state().deck.draw_pile_len(), 61);
    assert_eq!(game.state().total_cards(), 69);
}

/// Different seeds shuffle differently; the same seed does not.
#[test]
fn test_seeded_shuffle() {
    let hand_of = |seed: u64| {
        let game = GameBuilder::from_config(GameConfig::standard(duo()).with_seed(seed))
            .build()
            .unwrap();
        game.state().actor(A).hand.iter().map(|c| c.id).collect::<Vec<_>>()
    };

    assert_eq!(hand_of(42), hand_of(42));
    assert!((0..8).any(|seed| hand_of(seed) != hand_of(42)));
}

/// Configuration loads from JSON with rules and seed defaulted.
#[test]
fn test_config_from_json() {
    let json = r#"{
        "seats": [
            {"name": "Liu Bei", "identity": "lord", "character": "zhang_fei"},
            {"name": "Cao Cao", "identity": "rebel", "oracle": "random"}
        ],
        "deck": [
            {"kind": "attack", "suit": "spades", "rank": 7, "count": 6},
            {"kind": "dodge", "suit": "hearts", "rank": 2, "count": 4},
            {"kind": {"weapon": "repeating_crossbow"}, "suit": "clubs", "rank": 1}
        ],
        "rules": {"initial_hand": 2}
    }"#;
    let config: GameConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.seats[0].character, Character::ZhangFei);
    assert_eq!(config.seats[1].oracle, OracleKind::Random);
    assert_eq!(config.seats[0].oracle, OracleKind::Passive);
    assert_eq!(config.seed, 0);
    assert_eq!(config.rules.initial_hand, 2);
    assert_eq!(config.rules.base_draw, RuleConfig::default().base_draw);
    assert_eq!(config.deck[2].count, 1);

    let game = GameBuilder::from_config(config).build().unwrap();
    assert_eq!(game.state().total_cards(), 11);
    assert_eq!(game.state().actor(A).hand.len(), 2);
    assert!(game.state().actor(A).skills.contains("Roar"));
}

/// Unusable configurations are rejected before anything is built.
#[test]
fn test_invalid_configs() {
    let one_seat = GameConfig::standard(vec![SeatConfig::new("A", Identity::Lord)]);
    assert!(matches!(GameBuilder::from_config(one_seat).build(), Err(EngineError::Config(_))));

    let two_lords = GameConfig::standard(vec![
        SeatConfig::new("A", Identity::Lord),
        SeatConfig::new("B", Identity::Lord),
    ]);
    assert!(matches!(GameBuilder::from_config(two_lords).build(), Err(EngineError::Config(_))));

    let empty = GameConfig::new(duo(), Vec::new());
    assert!(matches!(GameBuilder::from_config(empty).build(), Err(EngineError::Config(_))));

    let bad_rank = GameConfig::new(duo(), vec![DeckEntry::new(CardKind::Attack, Suit::Spades, 14)]);
    let err = GameBuilder::from_config(bad_rank).build().unwrap_err();
    assert_eq!(err.code(), "config");

    let missing = GameBuilder::from_config(GameConfig::standard(duo()))
        .with_hand(A, [CardKind::Volley, CardKind::Volley])
        .build();
    assert!(matches!(missing, Err(EngineError::Config(_))));

    let off_table = GameBuilder::from_config(GameConfig::standard(duo()))
        .with_hp(PlayerId::new(5), 1)
        .build();
    assert!(matches!(off_table, Err(EngineError::Config(_))));
}

/// With every card in a hand, draws come back short and nothing is reported.
#[test]
fn test_draw_from_exhausted_deck() {
    let rules = RuleConfig {
        initial_hand: 0,
        shuffle_deck: false,
        ..RuleConfig::default()
    };
    let deck = vec![DeckEntry::new(CardKind::Dodge, Suit::Hearts, 2).times(3)];
    let mut game = GameBuilder::from_config(GameConfig::new(duo(), deck).with_rules(rules))
        .build()
        .unwrap();

    assert_eq!(game.draw(A, 2), 2);
    assert_eq!(game.draw(B, 2), 1);
    let events = game.history().len();
    assert_eq!(game.draw(B, 2), 0);
    assert_eq!(game.history().len(), events);
}

/// An empty draw pile is refilled with exactly the cards of the discard pile.
#[test]
fn test_reshuffle_on_empty_draw_pile() {
    let rules = RuleConfig {
        initial_hand: 0,
        shuffle_deck: false,
        ..RuleConfig::default()
    };
    let deck = vec![
        DeckEntry::new(CardKind::Dodge, Suit::Hearts, 2),
        DeckEntry::new(CardKind::Attack, Suit::Spades, 7),
        DeckEntry::new(CardKind::Heal, Suit::Hearts, 3),
        DeckEntry::new(CardKind::Duel, Suit::Clubs, 5),
        DeckEntry::new(CardKind::Attack, Suit::Diamonds, 9),
    ];
    let mut game = GameBuilder::from_config(GameConfig::new(duo(), deck).with_rules(rules))
        .build()
        .unwrap();

    assert_eq!(game.draw(A, 5), 5);
    let ids: Vec<_> = game.state().actor(A).hand.iter().map(|c| c.id).collect();
    assert_eq!(game.discard_from_hand(A, &[ids[0], ids[2], ids[4]]), 3);

    let mut discarded: Vec<_> = game.state().deck.discard_pile().iter().map(|c| c.id).collect();
    discarded.sort_unstable();
    assert_eq!(game.state().deck.draw_pile_len(), 0);

    assert!(game.state_mut().deck.reshuffle());
    let mut refilled: Vec<_> = game.state().deck.draw_pile().map(|c| c.id).collect();
    refilled.sort_unstable();
    assert_eq!(refilled, discarded);
    assert_eq!(game.state().deck.discard_pile_len(), 0);
    assert_eq!(game.state().deck.reshuffle_count(), 1);

    assert_eq!(game.draw(B, 4), 3);
    let mut drawn: Vec<_> = game.state().actor(B).hand.iter().map(|c| c.id).collect();
    drawn.sort_unstable();
    assert_eq!(drawn, discarded);
    assert!(game
        .history()
        .iter()
        .any(|e| matches!(e, GameEvent::CardsDrawn { seat, count: 3 } if *seat == B)));
}
