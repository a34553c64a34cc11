//! Actors: the seats at the table and their roles.

pub mod actor;
pub mod identity;

pub use actor::{Actor, DamageOutcome, LifeStatus, TurnFlags};
pub use identity::{Character, Coalition, Identity};
