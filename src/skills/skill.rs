//! The skill capability interface.
//!
//! A skill is a stateless rule object attached to one actor. It reacts at
//! well-defined hook points:
//!
//! - **Activation** ([`Skill::can_activate`] / [`Skill::activate`]): fired when
//!   a [`HookPoint`] is broadcast for the owner.
//! - **Modifiers** ([`Skill::modify_draw_count`], [`Skill::modify_attack_limit`],
//!   [`Skill::should_skip_phase`]): consulted while the engine computes a value.
//!
//! Every hook has a no-op default, so a skill implements only what it uses.
//! Per-turn state goes in the owner's [`TurnFlags`](crate::actors::TurnFlags),
//! which the engine clears at the start of the owner's turn.
//!
//! ## Locked vs optional
//!
//! Locked skills apply whenever they are eligible. Optional skills
//! (`need_ask() == true`) ask the owner's decision oracle first.

use serde::{Deserialize, Serialize};

use crate::actors::Actor;
use crate::core::{Phase, PlayerId};
use crate::error::{Result, SkillFault};
use crate::game::Game;

/// Result type for skill modifier hooks.
pub type SkillResult<T> = std::result::Result<T, SkillFault>;

/// Where a skill broadcast happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookPoint {
    /// Entry into a phase of the owner's turn. Play is broadcast before every
    /// card selection, not only once.
    PhaseEntry(Phase),
    /// The owner just lost hp.
    Damaged { source: Option<PlayerId>, amount: u32 },
}

/// How many Attacks an actor may play in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackLimit {
    Limited(u32),
    Unlimited,
}

impl AttackLimit {
    /// May another Attack be played after `used` so far?
    #[must_use]
    pub const fn allows(self, used: u32) -> bool {
        match self {
            AttackLimit::Limited(max) => used < max,
            AttackLimit::Unlimited => true,
        }
    }
}

/// Capability interface shared by all skills.
pub trait Skill: std::fmt::Debug + Send + Sync {
    /// Display name; also the key used when asking the oracle.
    fn name(&self) -> &'static str;

    /// Locked skills never ask before applying.
    fn is_locked(&self) -> bool {
        false
    }

    fn need_ask(&self) -> bool {
        !self.is_locked()
    }

    /// Is the skill eligible to activate at this hook?
    fn can_activate(&self, _owner: &Actor, _hook: &HookPoint) -> bool {
        false
    }

    /// Run the skill. Only called after `can_activate` held (and the owner
    /// agreed, for optional skills).
    fn activate(&self, _game: &mut Game, _owner: PlayerId, _hook: &HookPoint) -> Result<()> {
        Ok(())
    }

    /// Adjust the number of cards drawn in the Draw phase.
    fn modify_draw_count(&self, _owner: &Actor, count: usize) -> SkillResult<usize> {
        Ok(count)
    }

    /// Adjust the per-turn Attack allowance.
    fn modify_attack_limit(&self, _owner: &Actor, limit: AttackLimit) -> SkillResult<AttackLimit> {
        Ok(limit)
    }

    /// Ask to skip a phase entirely.
    fn should_skip_phase(&self, _owner: &Actor, _phase: Phase) -> SkillResult<bool> {
        Ok(false)
    }
}
