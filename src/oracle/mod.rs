//! Decision oracles: where every choice in the game comes from.
//!
//! ## Key Types
//!
//! - `DecisionOracle`: the query interface, one boxed instance per seat
//! - `ResponseRequest` / `Situation`: what a response query is about
//! - `VisibleState`: the per-seat snapshot pushed after every state change
//!
//! ## Shipped Oracles
//!
//! - `PassiveOracle`: passes and declines everything
//! - `ScriptedOracle`: queued plays and a per-kind response budget
//! - `RandomOracle`: seeded uniform choices

pub mod decision;
pub mod passive;
pub mod random;
pub mod scripted;
pub mod visible;

pub use decision::{DecisionOracle, OracleResult, ResponseRequest, Situation};
pub use passive::PassiveOracle;
pub use random::RandomOracle;
pub use scripted::{ScriptedOracle, ScriptedPlay};
pub use visible::{DeckView, PublicActorView, SelfView, VisibleState};
