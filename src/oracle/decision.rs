//! The decision interface the engine consumes.
//!
//! The engine never decides anything on a seat's behalf. Whenever a choice
//! is needed it calls that seat's [`DecisionOracle`] and blocks until it
//! answers. Answers are validated before anything is mutated; an answer
//! outside the legal set is treated as a decline.
//!
//! Oracle calls may fail with an [`OracleError`] (timeout, lost connection).
//! The engine does not retry: the failure ends the session.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardKind};
use crate::core::{GameEvent, PlayerId};
use crate::effects::TargetSets;
use crate::error::OracleError;
use crate::skills::HookPoint;

use super::visible::VisibleState;

/// Result type for oracle calls.
pub type OracleResult<T> = std::result::Result<T, OracleError>;

/// Why a response is being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Situation {
    /// An Attack is aimed at the responder.
    Attacked { attacker: PlayerId },
    /// An area card is sweeping over the responder.
    AreaAssault { source: PlayerId, card: CardKind },
    /// The responder is the defender in a Duel round.
    DuelRound { opponent: PlayerId },
    /// A Counter may flip whether `card` applies to `target`.
    Negation {
        source: PlayerId,
        card: CardKind,
        target: PlayerId,
        applies: bool,
    },
    /// The responder is at zero hp.
    Dying { source: Option<PlayerId> },
}

impl Situation {
    /// Short stable tag for logs and oracles that key tables by situation.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Situation::Attacked { .. } => "attacked",
            Situation::AreaAssault { .. } => "area_assault",
            Situation::DuelRound { .. } => "duel_round",
            Situation::Negation { .. } => "negation",
            Situation::Dying { .. } => "dying",
        }
    }
}

/// "Do you want to play a `requested` card from `candidates`?"
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRequest {
    pub responder: PlayerId,
    pub requested: CardKind,
    /// Hand cards that may answer. Never empty when an oracle is asked.
    pub candidates: Vec<Card>,
    pub situation: Situation,
}

/// Answers the engine's questions for one seat.
///
/// Implementations may be AI policies, remote human interfaces or scripted
/// replays. They must not assume `on_event` and `sync_state` are
/// acknowledged.
pub trait DecisionOracle: Send {
    /// Pick a card to play, or `None` to end the Play phase.
    fn select_card(&mut self, playable: &[Card], targets: &TargetSets) -> OracleResult<Option<CardId>>;

    /// Pick exactly `count` targets for `card` from `candidates`.
    fn select_targets(&mut self, candidates: &[PlayerId], card: &Card, count: usize) -> OracleResult<Vec<PlayerId>>;

    /// Pick exactly `count` cards to discard.
    fn select_discard(&mut self, hand: &[Card], count: usize) -> OracleResult<Vec<CardId>>;

    /// Pick between `min` and `max` cards to discard.
    fn select_discard_range(&mut self, hand: &[Card], min: usize, max: usize) -> OracleResult<Vec<CardId>>;

    /// Answer a response query with one of the candidates, or decline.
    fn ask_response(&mut self, request: &ResponseRequest) -> OracleResult<Option<CardId>>;

    /// Activate an optional skill?
    fn ask_activate_skill(&mut self, skill: &str, hook: &HookPoint) -> OracleResult<bool>;

    /// Something happened at the table.
    fn on_event(&mut self, _event: &GameEvent) {}

    /// Fresh snapshot of what this seat may see.
    fn sync_state(&mut self, _state: &VisibleState) {}
}
