//! Card model: faces, kinds and physical card instances.
//!
//! - `CardKind`: closed set of kinds; every resolution protocol is selected
//!   by an exhaustive match on it
//! - `Card`: a physical card with a regarded-as alias

pub mod card;
pub mod kind;

pub use card::{Card, CardId};
pub use kind::{Armor, CardClass, CardKind, Color, EquipSlot, Rank, Suit, TargetClass, Weapon};
