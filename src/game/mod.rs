//! The game session.
//!
//! A [`Game`] owns the [`GameState`] and one [`DecisionOracle`] per seat.
//! It is the only thing that mutates state during play: the turn
//! orchestrator, the effect resolver, the dying cascade and skills all go
//! through its methods.
//!
//! ## Usage
//!
//! ```
//! use sanguo_engine::actors::Identity;
//! use sanguo_engine::core::{GameConfig, SeatConfig};
//! use sanguo_engine::game::GameBuilder;
//!
//! let config = GameConfig::standard(vec![
//!     SeatConfig::new("Liu Bei", Identity::Lord),
//!     SeatConfig::new("Zhang Jiao", Identity::Rebel),
//! ])
//! .with_seed(7);
//!
//! let mut game = GameBuilder::from_config(config).build().unwrap();
//! game.play_turn().unwrap();
//! assert_eq!(game.state().turn(), 2);
//! ```

mod builder;
mod turn;

pub use builder::GameBuilder;
pub use turn::Limits;

use log::{info, warn};

use crate::cards::{Card, CardId};
use crate::core::{GameEvent, GameState, PlayerId, PlayerMap};
use crate::error::{EngineError, Result};
use crate::oracle::{DecisionOracle, VisibleState};
use crate::rules::GameResult;
use crate::skills::HookPoint;

/// One running session.
pub struct Game {
    pub(crate) state: GameState,
    pub(crate) oracles: PlayerMap<Box<dyn DecisionOracle>>,
    history: im::Vector<GameEvent>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("events", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Wrap an already initialized state. Most callers want [`GameBuilder`].
    pub fn new(state: GameState, oracles: PlayerMap<Box<dyn DecisionOracle>>) -> Result<Self> {
        if oracles.seat_count() != state.seat_count() {
            return Err(EngineError::Config(format!(
                "{} oracles for {} seats",
                oracles.seat_count(),
                state.seat_count()
            )));
        }
        Ok(Self {
            state,
            oracles,
            history: im::Vector::new(),
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for skills and test setup.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Every event emitted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<GameEvent> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.state.result()
    }

    /// Replace a seat's oracle.
    pub fn set_oracle(&mut self, seat: PlayerId, oracle: Box<dyn DecisionOracle>) {
        self.oracles[seat] = oracle;
    }

    // === Notifications ===

    /// Record an event and tell every oracle.
    pub fn emit(&mut self, event: GameEvent) {
        for (_, oracle) in self.oracles.iter_mut() {
            oracle.on_event(&event);
        }
        self.history.push_back(event);
    }

    /// Push each seat its visible snapshot.
    pub fn sync_all(&mut self) {
        for (seat, oracle) in self.oracles.iter_mut() {
            oracle.sync_state(&VisibleState::capture(&self.state, seat));
        }
    }

    /// Record the result and announce it.
    pub(crate) fn finish(&mut self, result: GameResult) {
        if self.is_over() {
            return;
        }
        info!("game over on turn {}: {:?}", self.state.turn(), result);
        self.state.set_result(result.clone());
        self.emit(GameEvent::GameEnded { result });
        self.sync_all();
    }

    // === Oracle queries ===

    /// Ask whether an optional skill should fire.
    pub fn ask_activate(&mut self, seat: PlayerId, skill: &str, hook: &HookPoint) -> Result<bool> {
        self.oracles[seat]
            .ask_activate_skill(skill, hook)
            .map_err(|e| EngineError::oracle(seat, e))
    }

    /// Ask for exactly `count` cards to discard. A wrong answer falls back to
    /// the last `count` cards of the hand.
    pub fn ask_discard(&mut self, seat: PlayerId, count: usize) -> Result<Vec<CardId>> {
        let hand = self.state.actor(seat).hand.clone();
        let count = count.min(hand.len());
        let chosen = self.oracles[seat]
            .select_discard(&hand, count)
            .map_err(|e| EngineError::oracle(seat, e))?;

        if is_valid_pick(&hand, &chosen, count, count) {
            Ok(chosen)
        } else {
            warn!("{} picked an invalid discard of {}; discarding from the end", seat, count);
            Ok(tail_ids(&hand, count))
        }
    }

    /// Ask for between `min` and `max` cards to discard. A wrong answer falls
    /// back to the last `min` cards of the hand.
    pub fn ask_discard_range(&mut self, seat: PlayerId, min: usize, max: usize) -> Result<Vec<CardId>> {
        let hand = self.state.actor(seat).hand.clone();
        let max = max.min(hand.len());
        let min = min.min(max);
        let chosen = self.oracles[seat]
            .select_discard_range(&hand, min, max)
            .map_err(|e| EngineError::oracle(seat, e))?;

        if is_valid_pick(&hand, &chosen, min, max) {
            Ok(chosen)
        } else {
            warn!("{} picked an invalid discard of {}-{}; discarding from the end", seat, min, max);
            Ok(tail_ids(&hand, min))
        }
    }

    // === State changes ===

    /// Draw up to `count` cards for `seat`. Returns how many arrived.
    pub fn draw(&mut self, seat: PlayerId, count: usize) -> usize {
        let drawn = self.state.draw_into_hand(seat, count);
        if drawn > 0 {
            self.emit(GameEvent::CardsDrawn { seat, count: drawn });
        }
        drawn
    }

    /// Move the named hand cards to the discard pile. Unknown ids are ignored.
    pub fn discard_from_hand(&mut self, seat: PlayerId, ids: &[CardId]) -> usize {
        let actor = self.state.actor_mut(seat);
        let cards: Vec<Card> = ids.iter().filter_map(|&id| actor.take_card(id)).collect();
        let count = cards.len();
        if count > 0 {
            self.emit(GameEvent::CardsDiscarded {
                seat,
                cards: cards.clone(),
            });
            self.state.deck.discard_all(cards);
        }
        count
    }

    /// Deal damage, run damage hooks, then the dying check if hp hit zero.
    pub fn damage(&mut self, target: PlayerId, amount: u32, source: Option<PlayerId>) -> Result<()> {
        if amount == 0 || !self.state.is_alive(target) {
            return Ok(());
        }

        let outcome = self.state.actor_mut(target).take_damage(amount, source);
        info!("{} takes {} damage ({} -> {})", target, amount, outcome.before, outcome.after);
        self.emit(GameEvent::HpChanged {
            seat: target,
            before: outcome.before,
            after: outcome.after,
            source,
        });

        self.broadcast(target, HookPoint::Damaged { source, amount })?;

        if outcome.entered_dying {
            self.resolve_dying(target)?;
        }
        Ok(())
    }

    /// Restore hp. Returns hp gained.
    pub fn heal(&mut self, seat: PlayerId, amount: u32) -> u32 {
        let before = self.state.actor(seat).hp();
        let gained = self.state.actor_mut(seat).heal(amount);
        if gained > 0 {
            self.emit(GameEvent::HpChanged {
                seat,
                before,
                after: before + gained,
                source: Some(seat),
            });
        }
        gained
    }
}

fn is_valid_pick(hand: &[Card], chosen: &[CardId], min: usize, max: usize) -> bool {
    if chosen.len() < min || chosen.len() > max {
        return false;
    }
    let mut seen = rustc_hash::FxHashSet::default();
    chosen
        .iter()
        .all(|id| seen.insert(*id) && hand.iter().any(|c| c.id == *id))
}

fn tail_ids(hand: &[Card], count: usize) -> Vec<CardId> {
    hand[hand.len().saturating_sub(count)..].iter().map(|c| c.id).collect()
}
