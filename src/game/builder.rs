//! Session construction.

use log::info;

use crate::actors::Actor;
use crate::cards::CardKind;
use crate::core::{GameConfig, GameRng, GameState, OracleKind, PlayerId, PlayerMap};
use crate::error::{EngineError, Result};
use crate::oracle::{DecisionOracle, PassiveOracle, RandomOracle};
use crate::zones::Deck;

use super::Game;

/// Builds a [`Game`] from a [`GameConfig`].
///
/// `build` validates the config, expands and shuffles the deck, seats the
/// actors at full hp, deals the opening hands in seat order and pushes the
/// first snapshot to every oracle. Seats without an explicit oracle get the
/// one named by their `SeatConfig`.
pub struct GameBuilder {
    config: GameConfig,
    oracles: Vec<(PlayerId, Box<dyn DecisionOracle>)>,
    hands: Vec<(PlayerId, Vec<CardKind>)>,
    hp: Vec<(PlayerId, u32)>,
}

impl GameBuilder {
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            oracles: Vec::new(),
            hands: Vec::new(),
            hp: Vec::new(),
        }
    }

    /// Drive `seat` with the given oracle.
    #[must_use]
    pub fn with_oracle(mut self, seat: PlayerId, oracle: impl DecisionOracle + 'static) -> Self {
        self.oracles.push((seat, Box::new(oracle)));
        self
    }

    #[must_use]
    pub fn with_boxed_oracle(mut self, seat: PlayerId, oracle: Box<dyn DecisionOracle>) -> Self {
        self.oracles.push((seat, oracle));
        self
    }

    /// Pull these kinds out of the deck into `seat`'s hand before the
    /// opening deal.
    #[must_use]
    pub fn with_hand(mut self, seat: PlayerId, kinds: impl IntoIterator<Item = CardKind>) -> Self {
        self.hands.push((seat, kinds.into_iter().collect()));
        self
    }

    /// Start `seat` below full hp.
    #[must_use]
    pub fn with_hp(mut self, seat: PlayerId, hp: u32) -> Self {
        self.hp.push((seat, hp));
        self
    }

    pub fn build(self) -> Result<Game> {
        let config = self.config;
        config.validate()?;
        let seat_count = config.seat_count();
        let check_seat = |seat: PlayerId| {
            if seat.index() < seat_count {
                Ok(seat)
            } else {
                Err(EngineError::Config(format!("{} is not at a {} seat table", seat, seat_count)))
            }
        };

        let rng = GameRng::new(config.seed);
        let mut deck = Deck::new(config.build_cards(), rng.for_context("deck"));
        if config.rules.shuffle_deck {
            deck.shuffle();
        }

        let mut actors: Vec<Actor> = config
            .seats
            .iter()
            .enumerate()
            .map(|(i, seat)| {
                Actor::new(
                    PlayerId::new(i as u8),
                    seat.name.clone(),
                    seat.identity,
                    seat.character,
                    config.max_hp_for(seat.identity),
                )
            })
            .collect();

        for (seat, hp) in self.hp {
            let seat = check_seat(seat)?;
            let actor = actors.remove(seat.index());
            actors.insert(seat.index(), actor.with_hp(hp));
        }

        for (seat, kinds) in self.hands {
            let seat = check_seat(seat)?;
            for kind in kinds {
                let card = deck
                    .take_where(|c| c.effective_kind() == kind)
                    .ok_or_else(|| EngineError::Config(format!("no {} left in the deck for {}", kind, seat)))?;
                actors[seat.index()].hand.push(card);
            }
        }

        let mut state = GameState::new(actors, deck, config.rules.clone());
        for seat in PlayerId::all(seat_count) {
            state.draw_into_hand(seat, config.rules.initial_hand);
        }

        let mut oracles: Vec<Option<Box<dyn DecisionOracle>>> = (0..seat_count).map(|_| None).collect();
        for (seat, oracle) in self.oracles {
            let seat = check_seat(seat)?;
            oracles[seat.index()] = Some(oracle);
        }
        let oracles = PlayerMap::from_vec(
            oracles
                .into_iter()
                .zip(&config.seats)
                .enumerate()
                .map(|(i, (explicit, seat))| {
                    explicit.unwrap_or_else(|| match seat.oracle {
                        OracleKind::Passive => Box::new(PassiveOracle) as Box<dyn DecisionOracle>,
                        OracleKind::Random => Box::new(RandomOracle::for_seat(&rng, PlayerId::new(i as u8))),
                    })
                })
                .collect(),
        );

        info!(
            "new game: {} seats, {} cards, seed {}",
            seat_count,
            state.total_cards(),
            config.seed
        );
        let mut game = Game::new(state, oracles)?;
        game.sync_all();
        Ok(game)
    }
}
