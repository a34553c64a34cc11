//! Character skills.

use log::info;

use crate::actors::{Actor, Character};
use crate::core::{Phase, PlayerId};
use crate::error::Result;
use crate::game::Game;

use super::registry::SkillSet;
use super::skill::{AttackLimit, HookPoint, Skill, SkillResult};

/// Skills a character starts with.
#[must_use]
pub fn skills_for(character: Character) -> SkillSet {
    match character {
        Character::Blank => SkillSet::new(),
        Character::ZhangFei => SkillSet::new().with(Roar),
        Character::LvMeng => SkillSet::new().with(Restraint),
        Character::LingCao => SkillSet::new().with(LoneAdvance),
        Character::ZhouYu => SkillSet::new().with(Heroic),
        Character::HuangGai => SkillSet::new().with(SelfInjury),
        Character::SunQuan => SkillSet::new().with(Balance),
        Character::Warlord => SkillSet::new().with(NoDiscard),
    }
}

/// Locked: any number of Attacks per turn.
#[derive(Debug, Clone, Copy)]
pub struct Roar;

impl Skill for Roar {
    fn name(&self) -> &'static str {
        "Roar"
    }

    fn is_locked(&self) -> bool {
        true
    }

    fn modify_attack_limit(&self, _owner: &Actor, _limit: AttackLimit) -> SkillResult<AttackLimit> {
        Ok(AttackLimit::Unlimited)
    }
}

/// Optional: skip the Discard phase if no Attack was played this turn.
#[derive(Debug, Clone, Copy)]
pub struct Restraint;

impl Skill for Restraint {
    fn name(&self) -> &'static str {
        "Restraint"
    }

    fn should_skip_phase(&self, owner: &Actor, phase: Phase) -> SkillResult<bool> {
        Ok(phase == Phase::Discard && owner.turn.attacks_used == 0)
    }
}

/// Optional: draw one extra card, plus one per two equipped cards.
#[derive(Debug, Clone, Copy)]
pub struct LoneAdvance;

impl Skill for LoneAdvance {
    fn name(&self) -> &'static str {
        "Lone Advance"
    }

    fn modify_draw_count(&self, owner: &Actor, count: usize) -> SkillResult<usize> {
        Ok(count + owner.equipment.count() / 2 + 1)
    }
}

/// Locked: draw one extra card.
#[derive(Debug, Clone, Copy)]
pub struct Heroic;

impl Skill for Heroic {
    fn name(&self) -> &'static str {
        "Heroic"
    }

    fn is_locked(&self) -> bool {
        true
    }

    fn modify_draw_count(&self, _owner: &Actor, count: usize) -> SkillResult<usize> {
        Ok(count + 1)
    }
}

/// Optional, Play phase, repeatable: lose 1 hp, then draw two cards.
#[derive(Debug, Clone, Copy)]
pub struct SelfInjury;

impl Skill for SelfInjury {
    fn name(&self) -> &'static str {
        "Self Injury"
    }

    fn can_activate(&self, owner: &Actor, hook: &HookPoint) -> bool {
        *hook == HookPoint::PhaseEntry(Phase::Play) && owner.hp() > 0
    }

    fn activate(&self, game: &mut Game, owner: PlayerId, _hook: &HookPoint) -> Result<()> {
        info!("{} uses {}: loses 1 hp, draws 2", owner, self.name());
        game.damage(owner, 1, Some(owner))?;
        if game.state().is_alive(owner) && !game.is_over() {
            game.draw(owner, 2);
        }
        Ok(())
    }
}

/// Optional, once per turn in the Play phase: discard any number of cards,
/// then draw as many.
#[derive(Debug, Clone, Copy)]
pub struct Balance;

impl Balance {
    const USED: &'static str = "balance_used";
}

impl Skill for Balance {
    fn name(&self) -> &'static str {
        "Balance"
    }

    fn can_activate(&self, owner: &Actor, hook: &HookPoint) -> bool {
        *hook == HookPoint::PhaseEntry(Phase::Play) && !owner.turn.is_set(Self::USED) && !owner.hand.is_empty()
    }

    fn activate(&self, game: &mut Game, owner: PlayerId, _hook: &HookPoint) -> Result<()> {
        game.state_mut().actor_mut(owner).turn.set(Self::USED, 1);

        let max = game.state().actor(owner).hand.len();
        let chosen = game.ask_discard_range(owner, 0, max)?;
        let discarded = game.discard_from_hand(owner, &chosen);

        info!("{} uses {}: swaps {} cards", owner, self.name(), discarded);
        if discarded > 0 {
            game.draw(owner, discarded);
        }
        Ok(())
    }
}

/// Locked: the owner has no Discard phase.
#[derive(Debug, Clone, Copy)]
pub struct NoDiscard;

impl Skill for NoDiscard {
    fn name(&self) -> &'static str {
        "No Discard"
    }

    fn is_locked(&self) -> bool {
        true
    }

    fn should_skip_phase(&self, _owner: &Actor, phase: Phase) -> SkillResult<bool> {
        Ok(phase == Phase::Discard)
    }
}
