//! Notifications broadcast to every decision oracle.
//!
//! Events are fire-and-forget: the engine appends each one to the session
//! history and hands it to every seat's [`DecisionOracle::on_event`]. Drawn
//! cards are reported by count only, since other seats may not see them.
//!
//! [`DecisionOracle::on_event`]: crate::oracle::DecisionOracle::on_event

use serde::{Deserialize, Serialize};

use crate::actors::Identity;
use crate::cards::{Card, CardKind};
use crate::rules::GameResult;

use super::player::PlayerId;
use super::state::Phase;

/// Something observable happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted {
        seat: PlayerId,
        turn: u32,
    },
    PhaseEntered {
        seat: PlayerId,
        phase: Phase,
    },
    CardsDrawn {
        seat: PlayerId,
        count: usize,
    },
    /// A card was played from hand in the Play phase.
    CardPlayed {
        seat: PlayerId,
        card: Card,
        targets: Vec<PlayerId>,
    },
    /// A card was played in answer to a query.
    CardResponded {
        seat: PlayerId,
        card: Card,
        requested: CardKind,
    },
    CardsDiscarded {
        seat: PlayerId,
        cards: Vec<Card>,
    },
    HpChanged {
        seat: PlayerId,
        before: u32,
        after: u32,
        source: Option<PlayerId>,
    },
    Equipped {
        seat: PlayerId,
        card: Card,
        replaced: Option<Card>,
    },
    /// A Counter flipped whether `card` applies to `target`.
    Negated {
        seat: PlayerId,
        card: CardKind,
        target: PlayerId,
        applies: bool,
    },
    SkillActivated {
        seat: PlayerId,
        skill: String,
    },
    Died {
        seat: PlayerId,
        identity: Identity,
        killer: Option<PlayerId>,
    },
    GameEnded {
        result: GameResult,
    },
}

impl GameEvent {
    /// Seat the event is about, if any.
    #[must_use]
    pub fn seat(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { seat, .. }
            | GameEvent::PhaseEntered { seat, .. }
            | GameEvent::CardsDrawn { seat, .. }
            | GameEvent::CardPlayed { seat, .. }
            | GameEvent::CardResponded { seat, .. }
            | GameEvent::CardsDiscarded { seat, .. }
            | GameEvent::HpChanged { seat, .. }
            | GameEvent::Equipped { seat, .. }
            | GameEvent::Negated { seat, .. }
            | GameEvent::SkillActivated { seat, .. }
            | GameEvent::Died { seat, .. } => Some(*seat),
            GameEvent::GameEnded { .. } => None,
        }
    }
}
