//! Game state: the roster, the deck, whose turn it is.
//!
//! `GameState` is pure data plus bookkeeping queries. Everything that needs a
//! decision oracle (resolving cards, running phases) lives on
//! [`Game`](crate::game::Game), which owns a `GameState`.
//!
//! ## Seating
//!
//! Seats are fixed for the whole session. Dead actors keep their seat but
//! are skipped by every "in seating order" walk ([`GameState::alive_from`]).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::actors::Actor;
use crate::cards::CardId;
use crate::rules::GameResult;
use crate::zones::Deck;

use super::config::RuleConfig;
use super::player::{PlayerId, PlayerMap, MAX_SEATS};

/// Seat list sized for a full table.
pub type SeatList = SmallVec<[PlayerId; MAX_SEATS]>;

/// Turn phases, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Prepare,
    Draw,
    Play,
    Discard,
}

impl Phase {
    pub const ORDER: [Phase; 4] = [Phase::Prepare, Phase::Draw, Phase::Play, Phase::Discard];
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Prepare => "Prepare",
            Phase::Draw => "Draw",
            Phase::Play => "Play",
            Phase::Discard => "Discard",
        };
        f.write_str(name)
    }
}

/// All mutable state of one session.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Fixed roster in seating order.
    pub actors: PlayerMap<Actor>,
    pub deck: Deck,
    pub rules: RuleConfig,
    active: PlayerId,
    turn: u32,
    result: Option<GameResult>,
}

impl GameState {
    /// Create a state with seat 0 active on turn 1.
    ///
    /// Actor ids must match their position in `actors`.
    #[must_use]
    pub fn new(actors: Vec<Actor>, deck: Deck, rules: RuleConfig) -> Self {
        debug_assert!(actors.iter().enumerate().all(|(i, a)| a.id.index() == i));
        Self {
            actors: PlayerMap::from_vec(actors),
            deck,
            rules,
            active: PlayerId::new(0),
            turn: 1,
            result: None,
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.actors.seat_count()
    }

    /// Is `seat` one of this table's seats?
    #[must_use]
    pub fn has_seat(&self, seat: PlayerId) -> bool {
        self.actors.contains(seat)
    }

    #[must_use]
    pub fn actor(&self, seat: PlayerId) -> &Actor {
        &self.actors[seat]
    }

    pub fn actor_mut(&mut self, seat: PlayerId) -> &mut Actor {
        &mut self.actors[seat]
    }

    // === Turn bookkeeping ===

    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    pub fn set_active(&mut self, seat: PlayerId) {
        self.active = seat;
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn set_result(&mut self, result: GameResult) {
        self.result = Some(result);
    }

    // === Seating ===

    #[must_use]
    pub fn is_alive(&self, seat: PlayerId) -> bool {
        self.actors[seat].is_alive()
    }

    /// Living seats in seat order.
    #[must_use]
    pub fn alive_seats(&self) -> SeatList {
        self.actors
            .iter()
            .filter(|(_, a)| a.is_alive())
            .map(|(seat, _)| seat)
            .collect()
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.actors.values().filter(|a| a.is_alive()).count()
    }

    /// Living seats in seating order, beginning at `start` (included if alive).
    #[must_use]
    pub fn alive_from(&self, start: PlayerId) -> SeatList {
        start
            .around(self.seat_count())
            .filter(|&seat| self.is_alive(seat))
            .collect()
    }

    /// Next living seat after `seat`, skipping the dead.
    #[must_use]
    pub fn next_alive_after(&self, seat: PlayerId) -> Option<PlayerId> {
        seat.next(self.seat_count())
            .around(self.seat_count())
            .find(|&s| self.is_alive(s))
    }

    /// Seat holding the Lord identity, if the roster has one.
    #[must_use]
    pub fn lord(&self) -> Option<PlayerId> {
        self.actors
            .iter()
            .find(|(_, a)| a.identity == crate::actors::Identity::Lord)
            .map(|(seat, _)| seat)
    }

    // === Cards ===

    /// Draw up to `count` cards into a seat's hand. Returns how many arrived.
    pub fn draw_into_hand(&mut self, seat: PlayerId, count: usize) -> usize {
        let cards = self.deck.draw_many(count);
        let drawn = cards.len();
        self.actors[seat].hand.extend(cards);
        drawn
    }

    /// Every card id in every container.
    ///
    /// A consistent state lists each id exactly once.
    #[must_use]
    pub fn all_card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self
            .deck
            .draw_pile()
            .chain(self.deck.discard_pile().iter())
            .map(|c| c.id)
            .collect();
        for actor in self.actors.values() {
            ids.extend(actor.held_cards().map(|c| c.id));
        }
        ids
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.all_card_ids().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::{Character, Identity};
    use crate::cards::{Card, CardKind, Rank, Suit};
    use crate::core::GameRng;

    fn state(seats: usize) -> GameState {
        let actors = (0..seats)
            .map(|i| {
                let identity = if i == 0 { Identity::Lord } else { Identity::Rebel };
                Actor::new(PlayerId::new(i as u8), format!("P{}", i), identity, Character::Blank, 4)
            })
            .collect();
        let cards = (0..10)
            .map(|i| Card::new(CardId::new(i), CardKind::Attack, Suit::Spades, Rank::new(3)))
            .collect();
        GameState::new(actors, Deck::new(cards, GameRng::new(0)), RuleConfig::default())
    }

    #[test]
    fn test_initial_turn() {
        let s = state(3);
        assert_eq!(s.active(), PlayerId::new(0));
        assert_eq!(s.turn(), 1);
        assert!(!s.is_over());
        assert_eq!(s.lord(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_alive_from_skips_dead() {
        let mut s = state(4);
        s.actor_mut(PlayerId::new(2)).mark_dead();

        let order: Vec<_> = s.alive_from(PlayerId::new(1)).into_iter().map(|p| p.0).collect();
        assert_eq!(order, vec![1, 3, 0]);
        assert_eq!(s.alive_count(), 3);
    }

    #[test]
    fn test_next_alive_wraps_and_skips() {
        let mut s = state(4);
        s.actor_mut(PlayerId::new(3)).mark_dead();
        s.actor_mut(PlayerId::new(0)).mark_dead();

        assert_eq!(s.next_alive_after(PlayerId::new(2)), Some(PlayerId::new(1)));
        assert_eq!(s.next_alive_after(PlayerId::new(1)), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_draw_into_hand_conserves_cards() {
        let mut s = state(2);
        assert_eq!(s.total_cards(), 10);
        assert_eq!(s.draw_into_hand(PlayerId::new(1), 4), 4);
        assert_eq!(s.actor(PlayerId::new(1)).hand.len(), 4);
        assert_eq!(s.total_cards(), 10);
    }
}
