//! The turn orchestrator.
//!
//! Each turn runs `Prepare -> Draw -> Play (loop) -> Discard`, then passes to
//! the next living seat. Draw, Play and Discard may be skipped by a skill.
//! The Play phase broadcasts its hook before every card selection, so Play
//! skills can fire between plays.
//!
//! Two safety bounds turn a runaway session into a fatal error rather than a
//! hang: total turns, and selections per Play phase.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, TargetClass};
use crate::core::{GameEvent, Phase, PlayerId, RuleConfig, SeatList};
use crate::effects::TargetSets;
use crate::error::{EngineError, Result};
use crate::rules::{GameResult, WinEvaluator};
use crate::skills::HookPoint;

use super::Game;

/// Safety bounds for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_turns: u32,
    pub max_plays_per_turn: u32,
}

impl Limits {
    #[must_use]
    pub fn from_rules(rules: &RuleConfig) -> Self {
        Self {
            max_turns: rules.max_turns,
            max_plays_per_turn: rules.max_plays_per_turn,
        }
    }
}

impl Game {
    #[must_use]
    pub fn limits(&self) -> Limits {
        Limits::from_rules(&self.state.rules)
    }

    /// Play turns until the game has a result.
    pub fn run(&mut self) -> Result<GameResult> {
        let limits = self.limits();
        while !self.is_over() {
            if self.state.turn() > limits.max_turns {
                return Err(EngineError::TurnLimitExceeded {
                    limit: limits.max_turns,
                });
            }
            self.play_turn()?;
        }
        self.result().cloned().ok_or(EngineError::GameOver)
    }

    /// Run exactly one turn for the active seat.
    pub fn play_turn(&mut self) -> Result<()> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let seat = self.state.active();
        if !self.state.is_alive(seat) {
            if let Some(next) = self.state.next_alive_after(seat) {
                self.state.set_active(next);
            }
            return Ok(());
        }

        info!("turn {}: {}", self.state.turn(), seat);
        self.emit(GameEvent::TurnStarted {
            seat,
            turn: self.state.turn(),
        });
        self.run_phases(seat)?;

        if !self.is_over() {
            self.end_turn(seat);
        }
        Ok(())
    }

    fn run_phases(&mut self, seat: PlayerId) -> Result<()> {
        for phase in Phase::ORDER {
            if self.is_over() || !self.state.is_alive(seat) {
                break;
            }
            if phase != Phase::Prepare && self.should_skip(seat, phase)? {
                debug!("{} skips {}", seat, phase);
                continue;
            }

            self.emit(GameEvent::PhaseEntered { seat, phase });
            match phase {
                Phase::Prepare => self.prepare_phase(seat)?,
                Phase::Draw => self.draw_phase(seat)?,
                Phase::Play => self.play_phase(seat)?,
                Phase::Discard => self.discard_phase(seat)?,
            }
        }
        Ok(())
    }

    fn prepare_phase(&mut self, seat: PlayerId) -> Result<()> {
        self.state.actor_mut(seat).turn.reset();
        self.broadcast(seat, HookPoint::PhaseEntry(Phase::Prepare))
    }

    fn draw_phase(&mut self, seat: PlayerId) -> Result<()> {
        self.broadcast(seat, HookPoint::PhaseEntry(Phase::Draw))?;
        if self.is_over() || !self.state.is_alive(seat) {
            return Ok(());
        }
        let count = self.draw_count(seat)?;
        let drawn = self.draw(seat, count);
        debug!("{} draws {} of {}", seat, drawn, count);
        self.sync_all();
        Ok(())
    }

    fn play_phase(&mut self, seat: PlayerId) -> Result<()> {
        let limit = self.limits().max_plays_per_turn;
        let mut selections = 0u32;

        loop {
            self.broadcast(seat, HookPoint::PhaseEntry(Phase::Play))?;
            if self.is_over() || !self.state.is_alive(seat) {
                return Ok(());
            }

            let sets = self.state.target_sets(seat);
            let playable = self.state.playable_cards(seat, &sets);
            if playable.is_empty() {
                return Ok(());
            }

            let choice = self.oracles[seat]
                .select_card(&playable, &sets)
                .map_err(|e| EngineError::oracle(seat, e))?;
            let Some(id) = choice else {
                return Ok(());
            };
            let Some(card) = playable.iter().find(|c| c.id == id).cloned() else {
                warn!("{} selected {}, which is not playable; passing", seat, id);
                return Ok(());
            };

            selections += 1;
            if selections > limit {
                return Err(EngineError::PlayLimitExceeded { seat, limit });
            }

            let Some(targets) = self.choose_targets(seat, &card, &sets)? else {
                warn!("{} picked illegal targets for {}; play cancelled", seat, card);
                continue;
            };

            match self.play_card(seat, id, &targets) {
                Ok(_) => {}
                Err(err) if !err.is_fatal() => warn!("{}: {}", seat, err),
                Err(err) => return Err(err),
            }
        }
    }

    /// Ask for targets when the card's class involves a choice.
    fn choose_targets(&mut self, seat: PlayerId, card: &Card, sets: &TargetSets) -> Result<Option<SeatList>> {
        let class = card.effective_kind().target_class();
        match class {
            TargetClass::OwnSelf | TargetClass::AllOthers => Ok(Some(SeatList::new())),
            TargetClass::ResponseOnly => Ok(None),
            TargetClass::Attackable | TargetClass::AnyOther => {
                let candidates = sets.for_class(class, seat);
                let chosen = self.oracles[seat]
                    .select_targets(&candidates, card, 1)
                    .map_err(|e| EngineError::oracle(seat, e))?;
                match chosen.as_slice() {
                    [target] if candidates.contains(target) => Ok(Some(std::iter::once(*target).collect())),
                    _ => Ok(None),
                }
            }
        }
    }

    fn discard_phase(&mut self, seat: PlayerId) -> Result<()> {
        self.broadcast(seat, HookPoint::PhaseEntry(Phase::Discard))?;
        if self.is_over() || !self.state.is_alive(seat) {
            return Ok(());
        }

        let actor = self.state.actor(seat);
        let excess = actor.hand.len().saturating_sub(actor.hp() as usize);
        if excess > 0 {
            let ids = self.ask_discard(seat, excess)?;
            let discarded = self.discard_from_hand(seat, &ids);
            debug!("{} discards {} down to hp", seat, discarded);
            self.sync_all();
        }
        Ok(())
    }

    fn end_turn(&mut self, seat: PlayerId) {
        if let Some(result) = WinEvaluator::evaluate(&self.state.actors) {
            self.finish(result);
            return;
        }
        if let Some(next) = self.state.next_alive_after(seat) {
            self.state.set_active(next);
        }
        self.state.advance_turn();
        self.sync_all();
    }
}
