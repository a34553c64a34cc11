//! An oracle that never does anything.

use crate::cards::{Card, CardId};
use crate::core::PlayerId;
use crate::effects::TargetSets;
use crate::skills::HookPoint;

use super::decision::{DecisionOracle, OracleResult, ResponseRequest};

/// Passes every Play step, declines every response and skill, and discards
/// from the end of the hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveOracle;

impl DecisionOracle for PassiveOracle {
    fn select_card(&mut self, _playable: &[Card], _targets: &TargetSets) -> OracleResult<Option<CardId>> {
        Ok(None)
    }

    fn select_targets(&mut self, candidates: &[PlayerId], _card: &Card, count: usize) -> OracleResult<Vec<PlayerId>> {
        Ok(candidates.iter().take(count).copied().collect())
    }

    fn select_discard(&mut self, hand: &[Card], count: usize) -> OracleResult<Vec<CardId>> {
        Ok(last_cards(hand, count))
    }

    fn select_discard_range(&mut self, hand: &[Card], min: usize, _max: usize) -> OracleResult<Vec<CardId>> {
        Ok(last_cards(hand, min))
    }

    fn ask_response(&mut self, _request: &ResponseRequest) -> OracleResult<Option<CardId>> {
        Ok(None)
    }

    fn ask_activate_skill(&mut self, _skill: &str, _hook: &HookPoint) -> OracleResult<bool> {
        Ok(false)
    }
}

/// Ids of the last `count` cards of `hand`.
pub(crate) fn last_cards(hand: &[Card], count: usize) -> Vec<CardId> {
    let start = hand.len().saturating_sub(count);
    hand[start..].iter().map(|c| c.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Rank, Suit};

    #[test]
    fn test_discards_from_end() {
        let hand: Vec<Card> = (0..4)
            .map(|i| Card::new(CardId::new(i), CardKind::Attack, Suit::Clubs, Rank::new(3)))
            .collect();
        let mut oracle = PassiveOracle;
        assert_eq!(
            oracle.select_discard(&hand, 2).unwrap(),
            vec![CardId::new(2), CardId::new(3)]
        );
        assert_eq!(oracle.select_discard(&hand, 9).unwrap().len(), 4);
        assert!(oracle.select_discard_range(&hand, 0, 4).unwrap().is_empty());
    }
}
