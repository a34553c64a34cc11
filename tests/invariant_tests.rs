//! Property tests over whole sessions driven by random oracles.

use proptest::prelude::*;

use sanguo_engine::actors::{Actor, Character, Identity};
use sanguo_engine::cards::{Card, CardId, CardKind, Rank, Suit};
use sanguo_engine::core::{GameConfig, GameRng, OracleKind, PlayerId, SeatConfig};
use sanguo_engine::game::{Game, GameBuilder};
use sanguo_engine::zones::Deck;

const IDENTITIES: [Identity; 8] = [
    Identity::Lord,
    Identity::Rebel,
    Identity::Loyalist,
    Identity::Traitor,
    Identity::Rebel,
    Identity::Rebel,
    Identity::Loyalist,
    Identity::Rebel,
];

const CHARACTERS: [Character; 8] = [
    Character::Blank,
    Character::ZhangFei,
    Character::LvMeng,
    Character::LingCao,
    Character::ZhouYu,
    Character::HuangGai,
    Character::SunQuan,
    Character::Warlord,
];

fn random_table(seats: usize, seed: u64) -> GameConfig {
    let seats = (0..seats)
        .map(|i| {
            SeatConfig::new(format!("P{}", i), IDENTITIES[i])
                .with_character(CHARACTERS[(i + seed as usize) % CHARACTERS.len()])
                .with_oracle(OracleKind::Random)
        })
        .collect();
    GameConfig::standard(seats).with_seed(seed)
}

fn check_state(game: &Game) -> Result<(), TestCaseError> {
    let state = game.state();

    let mut ids = state.all_card_ids();
    ids.sort_unstable();
    let expected: Vec<CardId> = (0..69).map(CardId::new).collect();
    prop_assert_eq!(ids, expected);

    for actor in state.actors.values() {
        prop_assert!(actor.hp() <= actor.max_hp());
        if actor.is_alive() {
            prop_assert!(actor.hp() >= 1, "{} alive at 0 hp", actor.id);
        } else {
            prop_assert!(!actor.is_dying());
            prop_assert_eq!(actor.held_cards().count(), 0);
        }
    }

    prop_assert!(state.is_alive(state.active()) || game.is_over());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Cards are conserved and hp stays in bounds through whole games.
    #[test]
    fn prop_random_games_keep_invariants(seats in 2usize..=8, seed in any::<u64>()) {
        let mut game = GameBuilder::from_config(random_table(seats, seed)).build().unwrap();
        check_state(&game)?;

        for _ in 0..150 {
            if game.is_over() {
                break;
            }
            let turn = game.play_turn();
            prop_assert!(turn.is_ok(), "turn failed: {:?}", turn);
            check_state(&game)?;
        }
    }

    /// The same seed replays the same game.
    #[test]
    fn prop_seeded_games_replay(seats in 2usize..=8, seed in any::<u64>()) {
        let play = || {
            let mut game = GameBuilder::from_config(random_table(seats, seed)).build().unwrap();
            for _ in 0..40 {
                if game.is_over() || game.play_turn().is_err() {
                    break;
                }
            }
            game
        };
        let first = play();
        let second = play();
        prop_assert_eq!(first.history(), second.history());
        prop_assert_eq!(first.result(), second.result());
    }

    /// Drawing, discarding and reshuffling never creates or loses a card.
    #[test]
    fn prop_deck_conserves_cards(seed in any::<u64>(), rounds in prop::collection::vec(0usize..12, 1..20)) {
        let cards: Vec<Card> = (0..10)
            .map(|i| Card::new(CardId::new(i), CardKind::Attack, Suit::ALL[i as usize % 4], Rank::new(3)))
            .collect();
        let mut deck = Deck::new(cards, GameRng::new(seed));
        deck.shuffle();

        for count in rounds {
            let drawn = deck.draw_many(count);
            prop_assert!(drawn.len() <= count);
            deck.discard_all(drawn);

            let mut ids: Vec<CardId> = deck
                .draw_pile()
                .chain(deck.discard_pile().iter())
                .map(|c| c.id)
                .collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..10).map(CardId::new).collect::<Vec<_>>());
        }
    }

    /// Hp never leaves `0..=max_hp`, and the dead stay dead.
    #[test]
    fn prop_actor_hp_bounds(ops in prop::collection::vec((any::<bool>(), 0u32..4), 1..40)) {
        let mut actor = Actor::new(PlayerId::new(0), "A", Identity::Rebel, Character::Blank, 4);
        for (is_damage, amount) in ops {
            if is_damage {
                let outcome = actor.take_damage(amount, None);
                prop_assert_eq!(outcome.after, outcome.before.saturating_sub(amount));
                if actor.is_dying() {
                    actor.mark_dead();
                }
            } else {
                let was_dead = !actor.is_alive();
                let gained = actor.heal(amount);
                if was_dead {
                    prop_assert_eq!(gained, 0);
                }
            }
            prop_assert!(actor.hp() <= actor.max_hp());
            if !actor.is_alive() {
                prop_assert_eq!(actor.hp(), 0);
            }
        }
    }
}
