//! # sanguo-engine
//!
//! Rules engine for a turn-based, identity-hidden combat card game for 2-8
//! seats.
//!
//! ## Design Principles
//!
//! 1. **The engine decides nothing**: every choice goes through a seat's
//!    [`DecisionOracle`]. Answers are validated before anything moves.
//!
//! 2. **One thread of control**: card resolution is synchronous and
//!    depth-first. Oracle calls are the only suspension points.
//!
//! 3. **Closed card set**: [`CardKind`] is a closed enum and resolution picks
//!    a protocol by exhaustive match, so every kind has a resolution path.
//!
//! 4. **Deterministic**: all randomness flows from one seed through
//!    [`GameRng`]. Same config, seed and answers replay the same game.
//!
//! ## Modules
//!
//! - `core`: seat ids, RNG, configuration, state, events
//! - `cards`: card kinds and physical cards
//! - `zones`: deck and equipment slots
//! - `actors`: seats, identities, characters
//! - `skills`: the skill capability trait and built-in skills
//! - `oracle`: the decision interface and shipped oracles
//! - `effects`: card resolution, targeting, the dying cascade
//! - `stack`: Counter negation chains
//! - `rules`: win evaluation
//! - `game`: the session object and turn orchestrator
//! - `error`: error taxonomy

pub mod core;
pub mod cards;
pub mod zones;
pub mod actors;
pub mod skills;
pub mod oracle;
pub mod effects;
pub mod stack;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameEvent, GameRng, GameState, Phase, PlayerId, PlayerMap, RuleConfig, SeatConfig,
};

pub use crate::cards::{Card, CardId, CardKind, Suit};

pub use crate::actors::{Actor, Character, Coalition, Identity};

pub use crate::skills::{HookPoint, Skill, SkillSet};

pub use crate::oracle::{DecisionOracle, PassiveOracle, RandomOracle, ScriptedOracle, VisibleState};

pub use crate::effects::{EffectResolver, ResolutionContext};

pub use crate::stack::NegationChain;

pub use crate::rules::{GameResult, WinEvaluator};

pub use crate::game::{Game, GameBuilder};

pub use crate::error::{EngineError, Result};
