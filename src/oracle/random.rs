//! Uniformly random, seeded decisions. Used for soak tests and benchmarks.

use crate::cards::{Card, CardId};
use crate::core::{GameRng, PlayerId};
use crate::effects::TargetSets;
use crate::skills::HookPoint;

use super::decision::{DecisionOracle, OracleResult, ResponseRequest};

#[derive(Clone, Debug)]
pub struct RandomOracle {
    rng: GameRng,
    /// Chance of ending the Play phase at each step even with cards to play.
    pass_chance: f64,
    /// Chance of answering a response query when able.
    respond_chance: f64,
}

impl RandomOracle {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            pass_chance: 0.2,
            respond_chance: 0.8,
        }
    }

    /// Derive a per-seat oracle from a shared session RNG.
    #[must_use]
    pub fn for_seat(rng: &GameRng, seat: PlayerId) -> Self {
        Self {
            rng: rng.for_context(&format!("oracle/{}", seat.index())),
            ..Self::new(rng.seed())
        }
    }

    #[must_use]
    pub fn with_pass_chance(mut self, chance: f64) -> Self {
        self.pass_chance = chance.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_respond_chance(mut self, chance: f64) -> Self {
        self.respond_chance = chance.clamp(0.0, 1.0);
        self
    }

    fn pick_ids(&mut self, hand: &[Card], count: usize) -> Vec<CardId> {
        let mut ids: Vec<CardId> = hand.iter().map(|c| c.id).collect();
        self.rng.shuffle(&mut ids);
        ids.truncate(count);
        ids
    }
}

impl DecisionOracle for RandomOracle {
    fn select_card(&mut self, playable: &[Card], _targets: &TargetSets) -> OracleResult<Option<CardId>> {
        if playable.is_empty() || self.rng.gen_bool(self.pass_chance) {
            return Ok(None);
        }
        Ok(self.rng.choose(playable).map(|c| c.id))
    }

    fn select_targets(&mut self, candidates: &[PlayerId], _card: &Card, count: usize) -> OracleResult<Vec<PlayerId>> {
        let mut shuffled = candidates.to_vec();
        self.rng.shuffle(&mut shuffled);
        shuffled.truncate(count);
        Ok(shuffled)
    }

    fn select_discard(&mut self, hand: &[Card], count: usize) -> OracleResult<Vec<CardId>> {
        Ok(self.pick_ids(hand, count))
    }

    fn select_discard_range(&mut self, hand: &[Card], min: usize, max: usize) -> OracleResult<Vec<CardId>> {
        let max = max.min(hand.len());
        let min = min.min(max);
        let count = min + self.rng.gen_index(max - min + 1);
        Ok(self.pick_ids(hand, count))
    }

    fn ask_response(&mut self, request: &ResponseRequest) -> OracleResult<Option<CardId>> {
        if !self.rng.gen_bool(self.respond_chance) {
            return Ok(None);
        }
        Ok(self.rng.choose(&request.candidates).map(|c| c.id))
    }

    fn ask_activate_skill(&mut self, _skill: &str, _hook: &HookPoint) -> OracleResult<bool> {
        Ok(self.rng.gen_bool(0.5))
    }
}
