//! Victory conditions.
//!
//! - `WinEvaluator`: stateless check of actor statuses
//! - `GameResult`: the outcome it reports

pub mod win;

pub use win::{GameResult, WinEvaluator};
