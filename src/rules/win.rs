//! Win condition evaluation.
//!
//! A stateless query over who is alive. Checked after every death and at the
//! end of every turn. The predicates are evaluated in this order:
//!
//! 1. Exactly one actor remains and it is a Traitor: that Traitor wins alone.
//! 2. The Lord is dead: the Rebels win (dead Rebels included).
//! 3. The Lord is alive and no Rebel or Traitor is: the Court wins.
//! 4. At most one actor remains and nothing above matched: a draw.
//!
//! Otherwise the game goes on.

use serde::{Deserialize, Serialize};

use crate::actors::{Actor, Coalition, Identity};
use crate::core::{PlayerId, PlayerMap};

/// Final outcome of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A coalition won. `winners` lists every seat in it, living or dead.
    Victory {
        coalition: Coalition,
        winners: Vec<PlayerId>,
    },
    /// Nobody satisfied a victory predicate.
    Draw,
}

impl GameResult {
    /// Did this seat win?
    #[must_use]
    pub fn is_winner(&self, seat: PlayerId) -> bool {
        match self {
            GameResult::Victory { winners, .. } => winners.contains(&seat),
            GameResult::Draw => false,
        }
    }

    #[must_use]
    pub fn coalition(&self) -> Option<Coalition> {
        match self {
            GameResult::Victory { coalition, .. } => Some(*coalition),
            GameResult::Draw => None,
        }
    }
}

/// Stateless victory checks.
pub struct WinEvaluator;

impl WinEvaluator {
    /// Return the result if the current statuses end the game.
    #[must_use]
    pub fn evaluate(actors: &PlayerMap<Actor>) -> Option<GameResult> {
        let alive: Vec<&Actor> = actors.values().filter(|a| a.is_alive()).collect();
        let lord = actors.values().find(|a| a.identity == Identity::Lord);

        if let [survivor] = alive.as_slice() {
            if survivor.identity == Identity::Traitor {
                return Some(GameResult::Victory {
                    coalition: Coalition::Traitor,
                    winners: vec![survivor.id],
                });
            }
        }

        if let Some(lord) = lord {
            if !lord.is_alive() {
                return Some(Self::coalition_wins(actors, Coalition::Rebels));
            }

            let opposition_alive = alive
                .iter()
                .any(|a| matches!(a.identity, Identity::Rebel | Identity::Traitor));
            if !opposition_alive {
                return Some(Self::coalition_wins(actors, Coalition::Court));
            }
        }

        if alive.len() <= 1 {
            return Some(GameResult::Draw);
        }

        None
    }

    fn coalition_wins(actors: &PlayerMap<Actor>, coalition: Coalition) -> GameResult {
        let winners = actors
            .iter()
            .filter(|(_, a)| a.identity.coalition() == coalition)
            .map(|(seat, _)| seat)
            .collect();
        GameResult::Victory { coalition, winners }
    }
}
