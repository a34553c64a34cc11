//! Core engine types: seats, RNG, configuration, state and events.

pub mod player;
pub mod rng;
pub mod config;
pub mod state;
pub mod event;

pub use player::{PlayerId, PlayerMap, MAX_SEATS, MIN_SEATS};
pub use rng::GameRng;
pub use config::{standard_deck, DeckEntry, GameConfig, OracleKind, RuleConfig, SeatConfig};
pub use state::{GameState, Phase, SeatList};
pub use event::GameEvent;
