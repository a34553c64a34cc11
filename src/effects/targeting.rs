//! Seat distance, attack range and legal targets.
//!
//! Distance is counted around the table over living seats only, taking the
//! shorter direction. Mounts adjust it: the attacker's offensive mount
//! subtracts one (never below one), the target's defensive mount adds one.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, EquipSlot, TargetClass};
use crate::core::{GameState, PlayerId, SeatList};

/// Named target sets for one acting seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSets {
    /// Living others within attack range.
    pub attackable: SeatList,
    /// Every living other, in seating order after the actor.
    pub all: SeatList,
    /// Living others at distance one.
    pub within_one: SeatList,
}

impl TargetSets {
    /// Candidates for a card of this target class.
    #[must_use]
    pub fn for_class(&self, class: TargetClass, actor: PlayerId) -> SeatList {
        match class {
            TargetClass::Attackable => self.attackable.clone(),
            TargetClass::AnyOther | TargetClass::AllOthers => self.all.clone(),
            TargetClass::OwnSelf => std::iter::once(actor).collect(),
            TargetClass::ResponseOnly => SeatList::new(),
        }
    }
}

impl GameState {
    /// Seats between `from` and `to` around the table, skipping the dead.
    #[must_use]
    pub fn seat_distance(&self, from: PlayerId, to: PlayerId) -> u32 {
        if from == to {
            return 0;
        }
        let ring: SeatList = PlayerId::all(self.seat_count())
            .filter(|&s| s == from || s == to || self.is_alive(s))
            .collect();
        let pos = |seat: PlayerId| ring.iter().position(|&s| s == seat).unwrap_or(0);
        let n = ring.len();
        let clockwise = (pos(to) + n - pos(from)) % n;
        clockwise.min(n - clockwise) as u32
    }

    /// Distance including mount modifiers: the source's offensive mount
    /// first (never below 1), then the target's defensive mount.
    #[must_use]
    pub fn distance(&self, from: PlayerId, to: PlayerId) -> u32 {
        let base = self.seat_distance(from, to);
        if base == 0 {
            return 0;
        }
        let mut distance = base;
        if self.actor(from).equipment.has(EquipSlot::MountAttack) {
            distance = distance.saturating_sub(1).max(1);
        }
        if self.actor(to).equipment.has(EquipSlot::MountDefense) {
            distance += 1;
        }
        distance
    }

    /// Reach of `seat`'s Attacks.
    #[must_use]
    pub fn attack_range(&self, seat: PlayerId) -> u32 {
        self.actor(seat).equipment.weapon().map_or(1, |w| w.range())
    }

    /// Living others in seating order, starting right after `seat`.
    #[must_use]
    pub fn sweep_order(&self, seat: PlayerId) -> SeatList {
        self.alive_from(seat.next(self.seat_count()))
            .into_iter()
            .filter(|&s| s != seat)
            .collect()
    }

    #[must_use]
    pub fn target_sets(&self, seat: PlayerId) -> TargetSets {
        let all = self.sweep_order(seat);
        let range = self.attack_range(seat);
        let attackable = all
            .iter()
            .copied()
            .filter(|&other| self.distance(seat, other) <= range)
            .collect();
        let within_one = all
            .iter()
            .copied()
            .filter(|&other| self.distance(seat, other) <= 1)
            .collect();
        TargetSets {
            attackable,
            all,
            within_one,
        }
    }

    /// May `seat` play `card` in its Play phase right now?
    #[must_use]
    pub fn is_playable(&self, seat: PlayerId, card: &Card, sets: &TargetSets) -> bool {
        let actor = self.actor(seat);
        match card.effective_kind() {
            CardKind::Attack => {
                self.attack_limit(seat).allows(actor.turn.attacks_used) && !sets.attackable.is_empty()
            }
            CardKind::Heal => actor.is_wounded(),
            CardKind::Duel | CardKind::Onslaught | CardKind::Volley => !sets.all.is_empty(),
            CardKind::Weapon(_) | CardKind::Armor(_) | CardKind::MountAttack | CardKind::MountDefense => true,
            CardKind::Dodge | CardKind::Counter => false,
        }
    }

    /// Hand cards `seat` may play, in hand order.
    #[must_use]
    pub fn playable_cards(&self, seat: PlayerId, sets: &TargetSets) -> Vec<Card> {
        self.actor(seat)
            .hand
            .iter()
            .filter(|card| self.is_playable(seat, card, sets))
            .cloned()
            .collect()
    }

    /// Check a requested target list for `kind`. Returns the resolved targets,
    /// or `None` if the request is illegal.
    ///
    /// Self and sweep cards ignore the request (an empty list or the actor
    /// alone is accepted) and compute their own targets.
    #[must_use]
    pub fn resolve_targets(
        &self,
        seat: PlayerId,
        kind: CardKind,
        requested: &[PlayerId],
        sets: &TargetSets,
    ) -> Option<SeatList> {
        match kind.target_class() {
            TargetClass::Attackable | TargetClass::AnyOther => match requested {
                [target] if sets.for_class(kind.target_class(), seat).contains(target) => {
                    Some(std::iter::once(*target).collect())
                }
                _ => None,
            },
            TargetClass::AllOthers => Some(sets.all.clone()),
            TargetClass::OwnSelf => match requested {
                [] => Some(std::iter::once(seat).collect()),
                [target] if *target == seat => Some(std::iter::once(seat).collect()),
                _ => None,
            },
            TargetClass::ResponseOnly => None,
        }
    }
}
