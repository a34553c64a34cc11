//! Engine error taxonomy.
//!
//! Only a few conditions are errors at all. Running out of cards is a normal
//! outcome (a draw yields nothing), and a declined or illegal oracle answer is
//! handled locally. What remains splits into two groups:
//!
//! - **Fatal**: oracle failures and runaway loops. The session is aborted and
//!   the error reaches the caller of [`Game::run`](crate::game::Game::run).
//! - **Recoverable**: skill faults. The orchestrator logs them and carries on
//!   as if the skill did nothing.

use std::time::Duration;

use thiserror::Error;

use crate::core::PlayerId;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Failure reported by a decision oracle implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The oracle did not answer in time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The backing interface went away (closed socket, dropped channel).
    #[error("disconnected: {0}")]
    Disconnected(String),

    /// The oracle refused to answer at all.
    #[error("rejected query: {0}")]
    Rejected(String),
}

/// A skill hook failed.
///
/// Returned by skill hooks instead of panicking. Never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("skill `{skill}` faulted: {reason}")]
pub struct SkillFault {
    /// Name of the faulting skill.
    pub skill: &'static str,
    /// Human-readable cause.
    pub reason: String,
}

impl SkillFault {
    /// Create a new fault for the named skill.
    pub fn new(skill: &'static str, reason: impl Into<String>) -> Self {
        Self {
            skill,
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The game configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A decision oracle call failed. Fatal for the session.
    #[error("decision oracle for {seat} failed: {source}")]
    Oracle {
        seat: PlayerId,
        #[source]
        source: OracleError,
    },

    /// The session ran more turns than allowed.
    #[error("turn limit of {limit} exceeded")]
    TurnLimitExceeded { limit: u32 },

    /// A single turn accepted more plays than allowed.
    #[error("{seat} exceeded {limit} plays in one turn")]
    PlayLimitExceeded { seat: PlayerId, limit: u32 },

    /// A direct call to [`Game::play_card`](crate::game::Game::play_card)
    /// named a card or target outside the legal set.
    #[error("illegal play by {seat}: {reason}")]
    IllegalPlay { seat: PlayerId, reason: String },

    /// A skill hook failed.
    #[error(transparent)]
    Skill(#[from] SkillFault),

    /// The session already has a result.
    #[error("game is already over")]
    GameOver,
}

impl EngineError {
    /// Wrap an oracle failure for the given seat.
    pub fn oracle(seat: PlayerId, source: OracleError) -> Self {
        Self::Oracle { seat, source }
    }

    /// Does this error end the session?
    ///
    /// Skill faults and illegal plays are recoverable; everything else aborts.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Skill(_) | Self::IllegalPlay { .. })
    }

    /// Stable reason code for diagnostics.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Oracle {
                source: OracleError::Timeout(_),
                ..
            } => "oracle_timeout",
            Self::Oracle { .. } => "oracle_failure",
            Self::TurnLimitExceeded { .. } => "turn_limit",
            Self::PlayLimitExceeded { .. } => "play_limit",
            Self::IllegalPlay { .. } => "illegal_play",
            Self::Skill(_) => "skill_fault",
            Self::GameOver => "game_over",
        }
    }
}
