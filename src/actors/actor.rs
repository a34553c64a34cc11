//! Actor (seat) state.
//!
//! An `Actor` owns its hand, its equipment and its skills. Hit points obey
//! `0 <= hp <= max_hp` at all times. Reaching zero puts the actor into the
//! transient [`LifeStatus::Dying`] state; whether it then dies is decided by
//! the dying cascade, not here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardKind};
use crate::core::PlayerId;
use crate::skills::SkillSet;
use crate::zones::EquipmentSlots;

use super::identity::{Character, Identity};

/// Life state of an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStatus {
    Alive,
    /// At zero hp, waiting for a rescue or death.
    Dying,
    Dead,
}

/// What a single damage application did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    pub before: u32,
    pub after: u32,
    /// This damage took hp from positive to zero.
    pub entered_dying: bool,
}

/// Flags cleared at the start of the owner's turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnFlags {
    /// Attacks played from hand during this turn's Play phase.
    pub attacks_used: u32,
    /// Scratch space for skills (`"balance_used" => 1`, ...).
    scratch: FxHashMap<String, i64>,
}

impl TurnFlags {
    #[must_use]
    pub fn get(&self, key: &str) -> i64 {
        self.scratch.get(key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, key: impl Into<String>, value: i64) {
        self.scratch.insert(key.into(), value);
    }

    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key) != 0
    }

    pub fn reset(&mut self) {
        self.attacks_used = 0;
        self.scratch.clear();
    }
}

/// One seat's full state.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: PlayerId,
    pub name: String,
    pub identity: Identity,
    pub character: Character,
    hp: u32,
    max_hp: u32,
    status: LifeStatus,
    pub hand: Vec<Card>,
    pub equipment: EquipmentSlots,
    pub turn: TurnFlags,
    pub skills: SkillSet,
    last_damage_source: Option<PlayerId>,
}

impl Actor {
    /// Create an actor at full health with the character's skills.
    pub fn new(id: PlayerId, name: impl Into<String>, identity: Identity, character: Character, max_hp: u32) -> Self {
        Self {
            id,
            name: name.into(),
            identity,
            character,
            hp: max_hp,
            max_hp,
            status: LifeStatus::Alive,
            hand: Vec::new(),
            equipment: EquipmentSlots::new(),
            turn: TurnFlags::default(),
            skills: character.skills(),
            last_damage_source: None,
        }
    }

    /// Start at a lower hp (clamped to `1..=max_hp`).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.clamp(1, self.max_hp);
        self
    }

    #[must_use]
    pub fn with_hand(mut self, cards: Vec<Card>) -> Self {
        self.hand = cards;
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = skills;
        self
    }

    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[must_use]
    pub fn status(&self) -> LifeStatus {
        self.status
    }

    /// Alive or dying.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.status != LifeStatus::Dead
    }

    #[must_use]
    pub fn is_dying(&self) -> bool {
        self.status == LifeStatus::Dying
    }

    #[must_use]
    pub fn is_wounded(&self) -> bool {
        self.hp < self.max_hp
    }

    /// Who dealt the most recent damage.
    #[must_use]
    pub fn last_damage_source(&self) -> Option<PlayerId> {
        self.last_damage_source
    }

    /// Lose `amount` hp, never going below zero.
    pub fn take_damage(&mut self, amount: u32, source: Option<PlayerId>) -> DamageOutcome {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        self.last_damage_source = source;

        let entered_dying = before > 0 && self.hp == 0 && self.status == LifeStatus::Alive;
        if entered_dying {
            self.status = LifeStatus::Dying;
        }

        DamageOutcome {
            before,
            after: self.hp,
            entered_dying,
        }
    }

    /// Restore up to `amount` hp, never above `max_hp`. Returns hp gained.
    ///
    /// A dying actor brought above zero is alive again.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.status == LifeStatus::Dead {
            return 0;
        }
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        if self.hp > 0 && self.status == LifeStatus::Dying {
            self.status = LifeStatus::Alive;
        }
        self.hp - before
    }

    /// Final transition out of dying.
    pub fn mark_dead(&mut self) {
        self.status = LifeStatus::Dead;
    }

    // === Hand ===

    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Remove a card from the hand.
    pub fn take_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    /// Hand cards that currently count as `kind`.
    #[must_use]
    pub fn cards_of(&self, kind: CardKind) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|c| c.effective_kind() == kind)
            .cloned()
            .collect()
    }

    /// Empty hand and equipment, e.g. on death.
    pub fn strip(&mut self) -> Vec<Card> {
        let mut cards = std::mem::take(&mut self.hand);
        cards.extend(self.equipment.take_all());
        cards
    }

    /// Every card this actor holds, hand first.
    pub fn held_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().chain(self.equipment.iter())
    }
}
