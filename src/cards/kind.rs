//! Card faces: suit, rank and the closed set of card kinds.
//!
//! Everything a rule needs to know about a kind (its class, how it picks
//! targets, which slot it equips into, weapon range) is a method on the kind,
//! so resolution code matches on `CardKind` exhaustively instead of probing
//! attributes.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Spades and Clubs are black, Hearts and Diamonds red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

/// Suit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 1 (ace) through 13 (king).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(pub u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Is this rank within 1..=13?
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1 && self.0 <= 13
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// Weapons. Each weapon sets the wielder's attack range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    /// Range 2; the wielder's Attacks ignore armor.
    PiercingSword,
    /// Range 1; the wielder may play any number of Attacks per turn.
    RepeatingCrossbow,
}

impl Weapon {
    /// Attack range granted while equipped.
    #[must_use]
    pub const fn range(self) -> u32 {
        match self {
            Weapon::PiercingSword => 2,
            Weapon::RepeatingCrossbow => 1,
        }
    }

    #[must_use]
    pub const fn pierces_armor(self) -> bool {
        matches!(self, Weapon::PiercingSword)
    }

    #[must_use]
    pub const fn lifts_attack_limit(self) -> bool {
        matches!(self, Weapon::RepeatingCrossbow)
    }
}

/// Armor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Armor {
    /// Black Attacks against the wearer have no effect.
    BenevolentShield,
}

impl Armor {
    /// Does this armor stop an Attack of the given color?
    #[must_use]
    pub const fn blocks(self, color: Color) -> bool {
        match self {
            Armor::BenevolentShield => matches!(color, Color::Black),
        }
    }
}

/// Broad card class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardClass {
    Basic,
    Trick,
    Equipment,
}

/// How a card picks its targets when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetClass {
    /// One living actor within attack range.
    Attackable,
    /// One other living actor, any distance.
    AnyOther,
    /// Every other living actor, no choice involved.
    AllOthers,
    /// The player themself.
    OwnSelf,
    /// Not playable on its own; only used in response to something.
    ResponseOnly,
}

/// Equipment slot. An actor has exactly one of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    /// Defensive mount ("+1").
    MountDefense,
    /// Offensive mount ("-1").
    MountAttack,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 4] = [
        EquipSlot::Weapon,
        EquipSlot::Armor,
        EquipSlot::MountDefense,
        EquipSlot::MountAttack,
    ];
}

/// Closed set of card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Attack,
    Dodge,
    Heal,
    Counter,
    Duel,
    /// Area card every other actor must answer with an Attack.
    Onslaught,
    /// Area card every other actor must answer with a Dodge.
    Volley,
    Weapon(Weapon),
    Armor(Armor),
    MountAttack,
    MountDefense,
}

impl CardKind {
    #[must_use]
    pub const fn class(self) -> CardClass {
        match self {
            CardKind::Attack | CardKind::Dodge | CardKind::Heal => CardClass::Basic,
            CardKind::Counter | CardKind::Duel | CardKind::Onslaught | CardKind::Volley => {
                CardClass::Trick
            }
            CardKind::Weapon(_) | CardKind::Armor(_) | CardKind::MountAttack | CardKind::MountDefense => {
                CardClass::Equipment
            }
        }
    }

    #[must_use]
    pub const fn target_class(self) -> TargetClass {
        match self {
            CardKind::Attack => TargetClass::Attackable,
            CardKind::Duel => TargetClass::AnyOther,
            CardKind::Onslaught | CardKind::Volley => TargetClass::AllOthers,
            CardKind::Heal
            | CardKind::Weapon(_)
            | CardKind::Armor(_)
            | CardKind::MountAttack
            | CardKind::MountDefense => TargetClass::OwnSelf,
            CardKind::Dodge | CardKind::Counter => TargetClass::ResponseOnly,
        }
    }

    /// Slot this card occupies when equipped, if it is equipment.
    #[must_use]
    pub const fn equip_slot(self) -> Option<EquipSlot> {
        match self {
            CardKind::Weapon(_) => Some(EquipSlot::Weapon),
            CardKind::Armor(_) => Some(EquipSlot::Armor),
            CardKind::MountDefense => Some(EquipSlot::MountDefense),
            CardKind::MountAttack => Some(EquipSlot::MountAttack),
            _ => None,
        }
    }

    /// The card an area assault demands from each actor it sweeps over.
    #[must_use]
    pub const fn area_answer(self) -> Option<CardKind> {
        match self {
            CardKind::Onslaught => Some(CardKind::Attack),
            CardKind::Volley => Some(CardKind::Dodge),
            _ => None,
        }
    }

    /// Is this a trick that other actors may negate with a Counter?
    #[must_use]
    pub const fn is_negatable(self) -> bool {
        matches!(self, CardKind::Duel | CardKind::Onslaught | CardKind::Volley)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Attack => "Attack",
            CardKind::Dodge => "Dodge",
            CardKind::Heal => "Heal",
            CardKind::Counter => "Counter",
            CardKind::Duel => "Duel",
            CardKind::Onslaught => "Onslaught",
            CardKind::Volley => "Volley",
            CardKind::Weapon(Weapon::PiercingSword) => "Piercing Sword",
            CardKind::Weapon(Weapon::RepeatingCrossbow) => "Repeating Crossbow",
            CardKind::Armor(Armor::BenevolentShield) => "Benevolent Shield",
            CardKind::MountAttack => "Attack Mount",
            CardKind::MountDefense => "Defense Mount",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
    }

    #[test]
    fn test_rank_display_and_validity() {
        assert_eq!(Rank::ACE.to_string(), "A");
        assert_eq!(Rank::new(7).to_string(), "7");
        assert_eq!(Rank::new(12).to_string(), "Q");
        assert!(Rank::KING.is_valid());
        assert!(!Rank::new(0).is_valid());
        assert!(!Rank::new(14).is_valid());
    }

    #[test]
    fn test_equipment_slots() {
        assert_eq!(CardKind::Weapon(Weapon::PiercingSword).equip_slot(), Some(EquipSlot::Weapon));
        assert_eq!(CardKind::Armor(Armor::BenevolentShield).equip_slot(), Some(EquipSlot::Armor));
        assert_eq!(CardKind::MountAttack.equip_slot(), Some(EquipSlot::MountAttack));
        assert_eq!(CardKind::Attack.equip_slot(), None);
        for slot in EquipSlot::ALL {
            assert!(matches!(slot, EquipSlot::Weapon | EquipSlot::Armor | EquipSlot::MountAttack | EquipSlot::MountDefense));
        }
    }

    #[test]
    fn test_target_classes() {
        assert_eq!(CardKind::Attack.target_class(), TargetClass::Attackable);
        assert_eq!(CardKind::Duel.target_class(), TargetClass::AnyOther);
        assert_eq!(CardKind::Volley.target_class(), TargetClass::AllOthers);
        assert_eq!(CardKind::Heal.target_class(), TargetClass::OwnSelf);
        assert_eq!(CardKind::Counter.target_class(), TargetClass::ResponseOnly);
        assert_eq!(CardKind::Dodge.target_class(), TargetClass::ResponseOnly);
    }

    #[test]
    fn test_weapon_properties() {
        assert_eq!(Weapon::PiercingSword.range(), 2);
        assert!(Weapon::PiercingSword.pierces_armor());
        assert!(!Weapon::PiercingSword.lifts_attack_limit());
        assert_eq!(Weapon::RepeatingCrossbow.range(), 1);
        assert!(Weapon::RepeatingCrossbow.lifts_attack_limit());
    }

    #[test]
    fn test_shield_blocks_black_only() {
        assert!(Armor::BenevolentShield.blocks(Color::Black));
        assert!(!Armor::BenevolentShield.blocks(Color::Red));
    }

    #[test]
    fn test_area_answers() {
        assert_eq!(CardKind::Onslaught.area_answer(), Some(CardKind::Attack));
        assert_eq!(CardKind::Volley.area_answer(), Some(CardKind::Dodge));
        assert_eq!(CardKind::Duel.area_answer(), None);
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&CardKind::Weapon(Weapon::RepeatingCrossbow)).unwrap();
        assert_eq!(json, r#"{"weapon":"repeating_crossbow"}"#);
        let kind: CardKind = serde_json::from_str(r#""onslaught""#).unwrap();
        assert_eq!(kind, CardKind::Onslaught);
    }
}
