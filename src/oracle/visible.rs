//! Per-seat view of the table.
//!
//! One canonical snapshot schema for every oracle implementation. A seat sees
//! its own hand and identity; of everyone else it sees hp, hand size,
//! equipment, and identity only when that identity is public or its owner
//! is dead.

use serde::{Deserialize, Serialize};

use crate::actors::{Character, Identity};
use crate::cards::Card;
use crate::core::{GameState, PlayerId};

/// What a seat knows about itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfView {
    pub seat: PlayerId,
    pub name: String,
    pub identity: Identity,
    pub character: Character,
    pub hp: u32,
    pub max_hp: u32,
    pub hand: Vec<Card>,
    pub equipment: Vec<Card>,
    pub attacks_used: u32,
    pub skills: Vec<String>,
}

/// What every seat knows about an actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicActorView {
    pub seat: PlayerId,
    pub name: String,
    pub character: Character,
    pub hp: u32,
    pub max_hp: u32,
    pub alive: bool,
    pub hand_count: usize,
    pub equipment: Vec<Card>,
    /// `None` while hidden.
    pub identity: Option<Identity>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckView {
    pub draw_pile: usize,
    pub discard_pile: usize,
}

/// Snapshot pushed through [`DecisionOracle::sync_state`](super::DecisionOracle::sync_state).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleState {
    pub me: SelfView,
    /// Every seat, including the viewer, in seat order.
    pub players: Vec<PublicActorView>,
    pub deck: DeckView,
    pub active: PlayerId,
    pub turn: u32,
}

impl VisibleState {
    /// Build the view `viewer` is entitled to.
    #[must_use]
    pub fn capture(state: &GameState, viewer: PlayerId) -> Self {
        let own = state.actor(viewer);
        let me = SelfView {
            seat: viewer,
            name: own.name.clone(),
            identity: own.identity,
            character: own.character,
            hp: own.hp(),
            max_hp: own.max_hp(),
            hand: own.hand.clone(),
            equipment: own.equipment.iter().cloned().collect(),
            attacks_used: own.turn.attacks_used,
            skills: own.skills.names().map(str::to_string).collect(),
        };

        let players = state
            .actors
            .iter()
            .map(|(seat, actor)| {
                let revealed = seat == viewer || actor.identity.is_public() || !actor.is_alive();
                PublicActorView {
                    seat,
                    name: actor.name.clone(),
                    character: actor.character,
                    hp: actor.hp(),
                    max_hp: actor.max_hp(),
                    alive: actor.is_alive(),
                    hand_count: actor.hand.len(),
                    equipment: actor.equipment.iter().cloned().collect(),
                    identity: revealed.then_some(actor.identity),
                }
            })
            .collect();

        Self {
            me,
            players,
            deck: DeckView {
                draw_pile: state.deck.draw_pile_len(),
                discard_pile: state.deck.discard_pile_len(),
            },
            active: state.active(),
            turn: state.turn(),
        }
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&PublicActorView> {
        self.players.iter().find(|p| p.seat == seat)
    }
}
