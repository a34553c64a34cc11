//! Per-play resolution record.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::core::{PlayerId, SeatList};
use crate::oracle::Situation;

/// How a resolution ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Still running.
    Pending,
    /// The effect took place (for area cards: the sweep completed).
    Applied,
    /// The target answered and nothing happened.
    Answered,
    /// Armor stopped the card before any query.
    Fizzled,
    /// A negation chain cancelled the card.
    Negated,
    /// The card went into an equipment slot.
    Equipped,
}

/// One response query and its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub responder: PlayerId,
    pub requested: CardKind,
    /// `None` on a decline, or when the responder held no candidate and was
    /// never asked.
    pub answered: Option<Card>,
    pub situation: Situation,
}

impl ResponseRecord {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered.is_some()
    }
}

/// Everything that happened while one card resolved.
///
/// Created when a card leaves the hand and finished once every nested
/// sub-resolution (negation chains, duel rounds, dying checks) completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionContext {
    pub source: PlayerId,
    /// The card in flight.
    pub card: Card,
    pub targets: SeatList,
    pub responses: Vec<ResponseRecord>,
    /// Targets a negation chain shielded.
    pub negated: SeatList,
    pub outcome: Outcome,
}

impl ResolutionContext {
    #[must_use]
    pub fn new(source: PlayerId, card: Card, targets: SeatList) -> Self {
        Self {
            source,
            card,
            targets,
            responses: Vec::new(),
            negated: SeatList::new(),
            outcome: Outcome::Pending,
        }
    }

    /// Kind the card resolves as.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.card.effective_kind()
    }

    /// Log a query. Returns whether it was answered.
    pub fn record(&mut self, record: ResponseRecord) -> bool {
        let answered = record.is_answered();
        self.responses.push(record);
        answered
    }

    /// Queries put to `seat`, in order.
    pub fn responses_of(&self, seat: PlayerId) -> impl Iterator<Item = &ResponseRecord> {
        self.responses.iter().filter(move |r| r.responder == seat)
    }

    /// Number of answered queries for `kind`.
    #[must_use]
    pub fn answered_count(&self, kind: CardKind) -> usize {
        self.responses
            .iter()
            .filter(|r| r.requested == kind && r.is_answered())
            .count()
    }
}
