//! Identities, coalitions and characters.

use serde::{Deserialize, Serialize};

use crate::skills::{builtin, SkillSet};

/// Secret role dealt to each seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    /// The leader. Always public.
    Lord,
    /// Wins with the Lord.
    Loyalist,
    /// Wins when the Lord dies.
    Rebel,
    /// Wins only as the last actor standing.
    Traitor,
}

impl Identity {
    /// Is this identity visible to every seat from the start?
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Identity::Lord)
    }

    #[must_use]
    pub const fn coalition(self) -> Coalition {
        match self {
            Identity::Lord | Identity::Loyalist => Coalition::Court,
            Identity::Rebel => Coalition::Rebels,
            Identity::Traitor => Coalition::Traitor,
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Identity::Lord => "Lord",
            Identity::Loyalist => "Loyalist",
            Identity::Rebel => "Rebel",
            Identity::Traitor => "Traitor",
        };
        f.write_str(name)
    }
}

/// Group of identities sharing a victory condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coalition {
    /// Lord and Loyalists.
    Court,
    Rebels,
    /// A Traitor, always alone.
    Traitor,
}

/// Character card. Determines the skills an actor starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    /// No skills.
    #[default]
    Blank,
    ZhangFei,
    LvMeng,
    LingCao,
    ZhouYu,
    HuangGai,
    SunQuan,
    /// Plays without a Discard phase.
    Warlord,
}

impl Character {
    /// Fresh skill set for an actor playing this character.
    #[must_use]
    pub fn skills(self) -> SkillSet {
        builtin::skills_for(self)
    }
}
