//! Counter negation chains.
//!
//! Once a trick is about to apply to a target, every living actor is polled
//! in seating order, starting with whoever played the trick, for a Counter.
//! A Counter flips whether the trick applies and restarts the poll from the
//! seat that played it. The chain ends when a full pass produces no Counter.
//!
//! The chain is an explicit loop over a small state struct rather than
//! recursion. Every iteration consumes one physical Counter card, so the
//! loop ends after at most as many iterations as there are Counters in play.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::{GameEvent, PlayerId};
use crate::effects::ResolutionContext;
use crate::error::Result;
use crate::game::Game;
use crate::oracle::Situation;

/// In-flight state of one negation chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegationChain {
    source: PlayerId,
    card: CardKind,
    target: PlayerId,
    /// Where the next poll starts.
    responder: PlayerId,
    applies: bool,
    counters: u32,
}

impl NegationChain {
    /// A fresh chain: the trick applies, polling starts at its player.
    #[must_use]
    pub fn new(source: PlayerId, card: CardKind, target: PlayerId) -> Self {
        Self {
            source,
            card,
            target,
            responder: source,
            applies: true,
            counters: 0,
        }
    }

    /// Does the trick currently apply?
    #[must_use]
    pub fn applies(&self) -> bool {
        self.applies
    }

    #[must_use]
    pub fn responder(&self) -> PlayerId {
        self.responder
    }

    /// Counters played so far.
    #[must_use]
    pub fn counters(&self) -> u32 {
        self.counters
    }

    /// Record a Counter from `seat`.
    pub fn counter(&mut self, seat: PlayerId) {
        self.applies = !self.applies;
        self.responder = seat;
        self.counters += 1;
    }

    #[must_use]
    pub fn situation(&self) -> Situation {
        Situation::Negation {
            source: self.source,
            card: self.card,
            target: self.target,
            applies: self.applies,
        }
    }

    /// Poll the table until a full pass yields no Counter. Returns whether
    /// the trick finally applies.
    pub fn run(mut self, game: &mut Game, ctx: &mut ResolutionContext) -> Result<bool> {
        loop {
            let mut countered_by = None;
            for seat in game.state().alive_from(self.responder) {
                let record = game.query_response(seat, CardKind::Counter, self.situation())?;
                if ctx.record(record) {
                    countered_by = Some(seat);
                    break;
                }
            }

            let Some(seat) = countered_by else {
                return Ok(self.applies);
            };

            self.counter(seat);
            debug!(
                "{} counters {} on {}: applies={}",
                seat, self.card, self.target, self.applies
            );
            game.emit(GameEvent::Negated {
                seat,
                card: self.card,
                target: self.target,
                applies: self.applies,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_applying_at_source() {
        let chain = NegationChain::new(PlayerId::new(2), CardKind::Duel, PlayerId::new(0));
        assert!(chain.applies());
        assert_eq!(chain.responder(), PlayerId::new(2));
        assert_eq!(chain.counters(), 0);
    }

    #[test]
    fn test_counter_flips_and_moves_responder() {
        let mut chain = NegationChain::new(PlayerId::new(0), CardKind::Volley, PlayerId::new(1));
        chain.counter(PlayerId::new(3));
        assert!(!chain.applies());
        assert_eq!(chain.responder(), PlayerId::new(3));

        chain.counter(PlayerId::new(1));
        assert!(chain.applies());
        assert_eq!(chain.counters(), 2);
        assert!(matches!(chain.situation(), Situation::Negation { applies: true, .. }));
    }
}
