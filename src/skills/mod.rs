//! Skill system.
//!
//! Skills attach to actors and intercept the turn at hook points without the
//! orchestrator knowing anything about individual skills.
//!
//! ## Key Types
//!
//! - `Skill`: capability trait with no-op defaults
//! - `SkillSet`: an actor's skills, iterated through snapshots
//! - `HookPoint`: where a broadcast happens
//! - `AttackLimit`: per-turn Attack allowance

pub mod builtin;
pub mod dispatch;
pub mod registry;
pub mod skill;

pub use builtin::{skills_for, Balance, Heroic, LoneAdvance, NoDiscard, Restraint, Roar, SelfInjury};
pub use registry::SkillSet;
pub use skill::{AttackLimit, HookPoint, Skill, SkillResult};
