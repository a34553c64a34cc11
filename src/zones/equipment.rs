//! Equipment slots.

use serde::{Deserialize, Serialize};

use crate::cards::{Armor, Card, CardKind, EquipSlot, Weapon};

/// Four fixed slots, each holding at most one card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSlots {
    weapon: Option<Card>,
    armor: Option<Card>,
    mount_defense: Option<Card>,
    mount_attack: Option<Card>,
}

impl EquipmentSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Card> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::MountDefense => &mut self.mount_defense,
            EquipSlot::MountAttack => &mut self.mount_attack,
        }
    }

    /// Card in the given slot.
    #[must_use]
    pub fn get(&self, slot: EquipSlot) -> Option<&Card> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
            EquipSlot::MountDefense => self.mount_defense.as_ref(),
            EquipSlot::MountAttack => self.mount_attack.as_ref(),
        }
    }

    /// Put a card into its slot, handing back the incumbent if there was one.
    ///
    /// Cards that are not equipment are handed straight back as `Err`.
    pub fn equip(&mut self, card: Card) -> Result<Option<Card>, Card> {
        match card.effective_kind().equip_slot() {
            Some(slot) => Ok(self.slot_mut(slot).replace(card)),
            None => Err(card),
        }
    }

    /// Empty a slot.
    pub fn take(&mut self, slot: EquipSlot) -> Option<Card> {
        self.slot_mut(slot).take()
    }

    /// Empty every slot.
    pub fn take_all(&mut self) -> Vec<Card> {
        EquipSlot::ALL.iter().filter_map(|&slot| self.take(slot)).collect()
    }

    /// Equipped weapon, if any.
    #[must_use]
    pub fn weapon(&self) -> Option<Weapon> {
        match self.weapon.as_ref()?.effective_kind() {
            CardKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    /// Equipped armor, if any.
    #[must_use]
    pub fn armor(&self) -> Option<Armor> {
        match self.armor.as_ref()?.effective_kind() {
            CardKind::Armor(armor) => Some(armor),
            _ => None,
        }
    }

    #[must_use]
    pub fn has(&self, slot: EquipSlot) -> bool {
        self.get(slot).is_some()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        EquipSlot::ALL.into_iter().filter_map(move |slot| self.get(slot))
    }
}
