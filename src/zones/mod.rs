//! Card containers.
//!
//! Every card lives in exactly one container at a time:
//!
//! - `Deck`: the shared draw pile and discard pile
//! - an actor's hand (`Actor::hand`)
//! - `EquipmentSlots`: an actor's four equipment slots

pub mod deck;
pub mod equipment;

pub use deck::Deck;
pub use equipment::EquipmentSlots;
