//! Game configuration.
//!
//! The engine is configured once, at construction, by a fully resolved
//! `GameConfig`:
//! - `SeatConfig`: each seat's name, identity, character and oracle type
//! - `DeckEntry`: the deck's card multiset
//! - `RuleConfig`: numeric rules and safety bounds
//!
//! Loading the configuration from disk is the embedding application's job;
//! every type here is `serde`-ready for that purpose.

use serde::{Deserialize, Serialize};

use crate::actors::{Character, Identity};
use crate::cards::{Armor, Card, CardId, CardKind, Rank, Suit, Weapon};
use crate::error::{EngineError, Result};

use super::player::{MAX_SEATS, MIN_SEATS};

/// Which built-in decision oracle drives a seat when the caller does not
/// supply one explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    /// Passes every play and declines every response.
    #[default]
    Passive,
    /// Seeded uniform random choices.
    Random,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub identity: Identity,
    #[serde(default)]
    pub character: Character,
    #[serde(default)]
    pub oracle: OracleKind,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, identity: Identity) -> Self {
        Self {
            name: name.into(),
            identity,
            character: Character::default(),
            oracle: OracleKind::default(),
        }
    }

    #[must_use]
    pub fn with_character(mut self, character: Character) -> Self {
        self.character = character;
        self
    }

    #[must_use]
    pub fn with_oracle(mut self, oracle: OracleKind) -> Self {
        self.oracle = oracle;
        self
    }
}

/// `count` identical cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub kind: CardKind,
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl DeckEntry {
    #[must_use]
    pub const fn new(kind: CardKind, suit: Suit, rank: u8) -> Self {
        Self {
            kind,
            suit,
            rank: Rank::new(rank),
            count: 1,
        }
    }

    #[must_use]
    pub const fn times(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// Numeric rules and safety bounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Cards drawn in the Draw phase before skill modifiers.
    pub base_draw: usize,
    /// Cards dealt to each seat at game start.
    pub initial_hand: usize,
    pub base_max_hp: u32,
    /// Extra max hp for the Lord.
    pub lord_bonus_hp: u32,
    /// Attacks allowed per turn before weapons and skills.
    pub base_attack_limit: u32,
    /// Cards drawn by whoever kills a Rebel.
    pub rebel_kill_reward: usize,
    pub shuffle_deck: bool,
    /// Turns before the session is aborted as runaway.
    pub max_turns: u32,
    /// Plays in a single turn before the session is aborted as runaway.
    pub max_plays_per_turn: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            base_draw: 2,
            initial_hand: 4,
            base_max_hp: 4,
            lord_bonus_hp: 1,
            base_attack_limit: 1,
            rebel_kill_reward: 3,
            shuffle_deck: true,
            max_turns: 1000,
            max_plays_per_turn: 100,
        }
    }
}

/// Complete configuration for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seats: Vec<SeatConfig>,
    pub deck: Vec<DeckEntry>,
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub seed: u64,
}

impl GameConfig {
    pub fn new(seats: Vec<SeatConfig>, deck: Vec<DeckEntry>) -> Self {
        Self {
            seats,
            deck,
            rules: RuleConfig::default(),
            seed: 0,
        }
    }

    /// Configuration with the standard 69-card deck.
    pub fn standard(seats: Vec<SeatConfig>) -> Self {
        Self::new(seats, standard_deck())
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        let seats = self.seats.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(EngineError::Config(format!(
                "seat count must be {}-{}, got {}",
                MIN_SEATS, MAX_SEATS, seats
            )));
        }

        let lords = self.seats.iter().filter(|s| s.identity == Identity::Lord).count();
        if lords > 1 {
            return Err(EngineError::Config(format!("at most one Lord allowed, got {}", lords)));
        }

        if self.deck.is_empty() {
            return Err(EngineError::Config("deck is empty".into()));
        }

        for entry in &self.deck {
            if entry.count == 0 {
                return Err(EngineError::Config(format!("deck entry {} has zero count", entry.kind)));
            }
            if !entry.rank.is_valid() {
                return Err(EngineError::Config(format!(
                    "deck entry {} has rank {} outside 1-13",
                    entry.kind, entry.rank.0
                )));
            }
        }

        if self.rules.base_max_hp == 0 {
            return Err(EngineError::Config("base max hp must be positive".into()));
        }

        Ok(())
    }

    /// Expand the deck entries into physical cards with ids `0..n`.
    #[must_use]
    pub fn build_cards(&self) -> Vec<Card> {
        let mut next_id = 0u32;
        let mut cards = Vec::new();
        for entry in &self.deck {
            for _ in 0..entry.count {
                cards.push(Card::new(CardId::new(next_id), entry.kind, entry.suit, entry.rank));
                next_id += 1;
            }
        }
        cards
    }

    /// Starting max hp for an identity.
    #[must_use]
    pub fn max_hp_for(&self, identity: Identity) -> u32 {
        match identity {
            Identity::Lord => self.rules.base_max_hp + self.rules.lord_bonus_hp,
            _ => self.rules.base_max_hp,
        }
    }
}

/// The standard 69-card deck.
#[must_use]
pub fn standard_deck() -> Vec<DeckEntry> {
    use Suit::*;

    let mut deck = Vec::with_capacity(69);

    // 30 Attacks: every suit at ranks 1-7, then Hearts and Diamonds at 8.
    for rank in 1..=7 {
        for suit in Suit::ALL {
            deck.push(DeckEntry::new(CardKind::Attack, suit, rank));
        }
    }
    deck.push(DeckEntry::new(CardKind::Attack, Hearts, 8));
    deck.push(DeckEntry::new(CardKind::Attack, Diamonds, 8));

    // 15 Dodges: every suit at ranks 2-4, then three at 5.
    for rank in 2..=4 {
        for suit in Suit::ALL {
            deck.push(DeckEntry::new(CardKind::Dodge, suit, rank));
        }
    }
    for suit in [Hearts, Diamonds, Clubs] {
        deck.push(DeckEntry::new(CardKind::Dodge, suit, 5));
    }

    // 8 Heals.
    for rank in 1..=2 {
        for suit in Suit::ALL {
            deck.push(DeckEntry::new(CardKind::Heal, suit, rank));
        }
    }

    deck.extend([
        DeckEntry::new(CardKind::Counter, Spades, 11),
        DeckEntry::new(CardKind::Counter, Clubs, 11),
        DeckEntry::new(CardKind::Counter, Spades, 12),
        DeckEntry::new(CardKind::Counter, Clubs, 12),
        DeckEntry::new(CardKind::Onslaught, Spades, 7),
        DeckEntry::new(CardKind::Onslaught, Clubs, 7),
        DeckEntry::new(CardKind::Onslaught, Spades, 8),
        DeckEntry::new(CardKind::Volley, Hearts, 1),
        DeckEntry::new(CardKind::Duel, Spades, 1),
        DeckEntry::new(CardKind::Duel, Clubs, 1),
        DeckEntry::new(CardKind::Duel, Spades, 2),
        DeckEntry::new(CardKind::Weapon(Weapon::PiercingSword), Spades, 6),
        DeckEntry::new(CardKind::Weapon(Weapon::RepeatingCrossbow), Hearts, 7),
        DeckEntry::new(CardKind::Armor(Armor::BenevolentShield), Spades, 2),
        DeckEntry::new(CardKind::MountAttack, Hearts, 5),
        DeckEntry::new(CardKind::MountDefense, Spades, 5),
    ]);

    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_seats() -> Vec<SeatConfig> {
        vec![
            SeatConfig::new("Lord", Identity::Lord),
            SeatConfig::new("Loyalist", Identity::Loyalist).with_character(Character::ZhangFei),
            SeatConfig::new("Rebel 1", Identity::Rebel),
            SeatConfig::new("Rebel 2", Identity::Rebel).with_character(Character::LvMeng),
            SeatConfig::new("Traitor", Identity::Traitor),
        ]
    }

    #[test]
    fn test_standard_deck_size() {
        let config = GameConfig::standard(five_seats());
        let cards = config.build_cards();
        assert_eq!(cards.len(), 69);
        assert_eq!(cards.iter().filter(|c| c.kind() == CardKind::Attack).count(), 30);
        assert_eq!(cards.iter().filter(|c| c.kind() == CardKind::Dodge).count(), 15);
        assert_eq!(cards.iter().filter(|c| c.kind() == CardKind::Heal).count(), 8);
        assert_eq!(cards.iter().filter(|c| c.kind() == CardKind::Counter).count(), 4);
    }

    #[test]
    fn test_card_ids_are_unique() {
        let cards = GameConfig::standard(five_seats()).build_cards();
        let mut ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_validate_accepts_standard() {
        assert!(GameConfig::standard(five_seats()).validate().is_ok());
    }

    #[test]
    fn test_validate_seat_bounds() {
        let one = GameConfig::standard(vec![SeatConfig::new("Solo", Identity::Lord)]);
        assert!(matches!(one.validate(), Err(EngineError::Config(_))));

        let nine = GameConfig::standard((0..9).map(|i| SeatConfig::new(format!("R{}", i), Identity::Rebel)).collect());
        assert!(nine.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_two_lords() {
        let config = GameConfig::standard(vec![
            SeatConfig::new("A", Identity::Lord),
            SeatConfig::new("B", Identity::Lord),
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let seats = vec![SeatConfig::new("A", Identity::Lord), SeatConfig::new("B", Identity::Rebel)];
        let zero = GameConfig::new(seats.clone(), vec![DeckEntry::new(CardKind::Attack, Suit::Spades, 3).times(0)]);
        assert!(zero.validate().is_err());

        let bad_rank = GameConfig::new(seats.clone(), vec![DeckEntry::new(CardKind::Attack, Suit::Spades, 14)]);
        assert!(bad_rank.validate().is_err());

        let empty = GameConfig::new(seats, Vec::new());
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_lord_bonus_hp() {
        let config = GameConfig::standard(five_seats());
        assert_eq!(config.max_hp_for(Identity::Lord), 5);
        assert_eq!(config.max_hp_for(Identity::Rebel), 4);
    }

    #[test]
    fn test_json_round_trip_with_defaults() {
        let json = r#"{
            "seats": [
                {"name": "Lord", "identity": "lord", "character": "zhou_yu"},
                {"name": "Rebel", "identity": "rebel", "oracle": "random"}
            ],
            "deck": [
                {"kind": "attack", "suit": "spades", "rank": 7, "count": 3},
                {"kind": {"weapon": "piercing_sword"}, "suit": "spades", "rank": 6}
            ],
            "rules": {"max_turns": 50},
            "seed": 7
        }"#;

        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seats[0].character, Character::ZhouYu);
        assert_eq!(config.seats[1].oracle, OracleKind::Random);
        assert_eq!(config.seats[0].oracle, OracleKind::Passive);
        assert_eq!(config.deck[1].count, 1);
        assert_eq!(config.rules.max_turns, 50);
        assert_eq!(config.rules.base_draw, 2);
        assert_eq!(config.build_cards().len(), 4);
        assert!(config.validate().is_ok());
    }
}
