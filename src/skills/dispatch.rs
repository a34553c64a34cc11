//! Broadcasting hook points to an actor's skills.
//!
//! Faults are handled the same way at every hook: a skill that returns a
//! recoverable error is logged and counts as having done nothing, and the
//! remaining skills still run. Fatal errors (an oracle failure inside a skill)
//! abort the broadcast and propagate.

use log::{debug, warn};

use crate::core::{GameEvent, GameState, Phase, PlayerId};
use crate::error::Result;
use crate::game::Game;

use super::skill::{AttackLimit, HookPoint};

impl Game {
    /// Fire every eligible skill of `owner` at `hook`, in attachment order.
    pub fn broadcast(&mut self, owner: PlayerId, hook: HookPoint) -> Result<()> {
        let skills = self.state().actor(owner).skills.snapshot();

        for skill in skills {
            if self.is_over() || !self.state().is_alive(owner) {
                break;
            }
            if !skill.can_activate(self.state().actor(owner), &hook) {
                continue;
            }
            if skill.need_ask() && !self.ask_activate(owner, skill.name(), &hook)? {
                continue;
            }

            debug!("{} activates {} at {:?}", owner, skill.name(), hook);
            self.emit(GameEvent::SkillActivated {
                seat: owner,
                skill: skill.name().to_string(),
            });

            match skill.activate(self, owner, &hook) {
                Ok(()) => {}
                Err(err) if !err.is_fatal() => {
                    warn!("{}: {} did nothing: {}", owner, skill.name(), err);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Cards to draw this Draw phase, after every skill's modifier.
    pub fn draw_count(&mut self, owner: PlayerId) -> Result<usize> {
        let hook = HookPoint::PhaseEntry(Phase::Draw);
        let mut count = self.state().rules.base_draw;

        for skill in self.state().actor(owner).skills.snapshot() {
            let proposed = match skill.modify_draw_count(self.state().actor(owner), count) {
                Ok(n) => n,
                Err(fault) => {
                    warn!("{}: {}", owner, fault);
                    continue;
                }
            };
            if proposed == count {
                continue;
            }
            if skill.need_ask() && !self.ask_activate(owner, skill.name(), &hook)? {
                continue;
            }
            self.emit(GameEvent::SkillActivated {
                seat: owner,
                skill: skill.name().to_string(),
            });
            count = proposed;
        }

        Ok(count)
    }

    /// Does any skill of `owner` skip `phase`?
    pub fn should_skip(&mut self, owner: PlayerId, phase: Phase) -> Result<bool> {
        let hook = HookPoint::PhaseEntry(phase);

        for skill in self.state().actor(owner).skills.snapshot() {
            let wants_skip = match skill.should_skip_phase(self.state().actor(owner), phase) {
                Ok(skip) => skip,
                Err(fault) => {
                    warn!("{}: {}", owner, fault);
                    false
                }
            };
            if !wants_skip {
                continue;
            }
            if skill.need_ask() && !self.ask_activate(owner, skill.name(), &hook)? {
                continue;
            }
            self.emit(GameEvent::SkillActivated {
                seat: owner,
                skill: skill.name().to_string(),
            });
            return Ok(true);
        }

        Ok(false)
    }
}

impl GameState {
    /// Attacks `seat` may play per turn.
    ///
    /// Attack-limit modifiers apply without asking, since this is consulted on
    /// every playability check.
    #[must_use]
    pub fn attack_limit(&self, seat: PlayerId) -> AttackLimit {
        let actor = self.actor(seat);
        let mut limit = match actor.equipment.weapon() {
            Some(weapon) if weapon.lifts_attack_limit() => AttackLimit::Unlimited,
            _ => AttackLimit::Limited(self.rules.base_attack_limit),
        };

        for skill in actor.skills.iter() {
            match skill.modify_attack_limit(actor, limit) {
                Ok(modified) => limit = modified,
                Err(fault) => warn!("{}: {}", seat, fault),
            }
        }

        limit
    }
}
