//! A deterministic, pre-programmed oracle.
//!
//! `ScriptedOracle` plays a queue of card kinds in order and answers response
//! queries from a per-kind budget. It exists so scenarios can be written
//! down exactly:
//!
//! ```
//! use sanguo_engine::cards::CardKind;
//! use sanguo_engine::core::PlayerId;
//! use sanguo_engine::oracle::ScriptedOracle;
//!
//! let oracle = ScriptedOracle::new()
//!     .play_at(CardKind::Attack, PlayerId::new(1))
//!     .respond_times(CardKind::Counter, 1)
//!     .accept_skill("Balance");
//! assert_eq!(oracle.pending_plays(), 1);
//! ```

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cards::{Card, CardId, CardKind};
use crate::core::PlayerId;
use crate::effects::TargetSets;
use crate::skills::HookPoint;

use super::decision::{DecisionOracle, OracleResult, ResponseRequest};
use super::passive::last_cards;

/// One queued Play step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptedPlay {
    pub kind: CardKind,
    /// Preferred target; falls back to the first candidates when absent or
    /// illegal.
    pub target: Option<PlayerId>,
}

/// How many times a kind may still be used to respond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Budget {
    Unlimited,
    Remaining(u32),
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedOracle {
    plays: VecDeque<ScriptedPlay>,
    current_target: Option<PlayerId>,
    responses: FxHashMap<CardKind, Budget>,
    skills: FxHashSet<String>,
    range_pick: Option<usize>,
}

impl ScriptedOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a play of `kind` with default targeting.
    #[must_use]
    pub fn play(mut self, kind: CardKind) -> Self {
        self.plays.push_back(ScriptedPlay { kind, target: None });
        self
    }

    /// Queue a play of `kind` aimed at `target`.
    #[must_use]
    pub fn play_at(mut self, kind: CardKind, target: PlayerId) -> Self {
        self.plays.push_back(ScriptedPlay {
            kind,
            target: Some(target),
        });
        self
    }

    /// Always answer queries for `kind` when holding one.
    #[must_use]
    pub fn respond_with(mut self, kind: CardKind) -> Self {
        self.responses.insert(kind, Budget::Unlimited);
        self
    }

    /// Answer queries for `kind` at most `times` times.
    #[must_use]
    pub fn respond_times(mut self, kind: CardKind, times: u32) -> Self {
        self.responses.insert(kind, Budget::Remaining(times));
        self
    }

    /// Say yes whenever the named optional skill asks.
    #[must_use]
    pub fn accept_skill(mut self, name: impl Into<String>) -> Self {
        self.skills.insert(name.into());
        self
    }

    /// Discard this many cards (from the front of the hand) when asked for a
    /// ranged discard.
    #[must_use]
    pub fn range_discard(mut self, count: usize) -> Self {
        self.range_pick = Some(count);
        self
    }

    #[must_use]
    pub fn pending_plays(&self) -> usize {
        self.plays.len()
    }

    fn spend(&mut self, kind: CardKind) -> bool {
        match self.responses.get_mut(&kind) {
            Some(Budget::Unlimited) => true,
            Some(Budget::Remaining(n)) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }
}

impl DecisionOracle for ScriptedOracle {
    /// Pops the next queued play. If nothing playable matches it the script
    /// step is consumed and the Play phase ends.
    fn select_card(&mut self, playable: &[Card], _targets: &TargetSets) -> OracleResult<Option<CardId>> {
        let Some(next) = self.plays.pop_front() else {
            return Ok(None);
        };
        self.current_target = next.target;
        Ok(playable
            .iter()
            .find(|c| c.effective_kind() == next.kind)
            .map(|c| c.id))
    }

    fn select_targets(&mut self, candidates: &[PlayerId], _card: &Card, count: usize) -> OracleResult<Vec<PlayerId>> {
        match self.current_target.take() {
            Some(target) if candidates.contains(&target) => Ok(vec![target]),
            _ => Ok(candidates.iter().take(count).copied().collect()),
        }
    }

    fn select_discard(&mut self, hand: &[Card], count: usize) -> OracleResult<Vec<CardId>> {
        Ok(last_cards(hand, count))
    }

    fn select_discard_range(&mut self, hand: &[Card], min: usize, max: usize) -> OracleResult<Vec<CardId>> {
        let wanted = self.range_pick.unwrap_or(min).clamp(min, max);
        Ok(hand.iter().take(wanted).map(|c| c.id).collect())
    }

    fn ask_response(&mut self, request: &ResponseRequest) -> OracleResult<Option<CardId>> {
        let Some(first) = request.candidates.first() else {
            return Ok(None);
        };
        if self.spend(request.requested) {
            Ok(Some(first.id))
        } else {
            Ok(None)
        }
    }

    fn ask_activate_skill(&mut self, skill: &str, _hook: &HookPoint) -> OracleResult<bool> {
        Ok(self.skills.contains(skill))
    }
}
