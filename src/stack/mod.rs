//! Response chains that interrupt a resolution.
//!
//! Resolution is immediate and depth-first: a chain runs to completion inside
//! the card resolution that opened it, before the Play loop resumes.
//!
//! - `NegationChain`: alternating Counter polls over a trick's target

mod negation;

pub use negation::NegationChain;
