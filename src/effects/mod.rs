//! Effect resolution: what happens when a card is played.
//!
//! ## Key Types
//!
//! - `ResolutionContext`: the record of one card's resolution
//! - `TargetSets`: legal targets for an acting seat
//! - `EffectResolver`: per-kind protocols, picked by exhaustive match
//!
//! The dying cascade lives here too, since every damaging protocol ends in it.

mod context;
mod dying;
mod resolver;
mod targeting;

pub use context::{Outcome, ResolutionContext, ResponseRecord};
pub use resolver::EffectResolver;
pub use targeting::TargetSets;
