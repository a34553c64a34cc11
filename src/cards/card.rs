//! Card instances.
//!
//! A `Card` is one physical card: an immutable face (suit, rank, kind) plus a
//! mutable *regarded-as* alias. Cards carry no owner; where a card lives is
//! decided by which container holds it.

use serde::{Deserialize, Serialize};

use super::kind::{CardKind, Color, Rank, Suit};

/// Unique identifier of a physical card within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    kind: CardKind,
    regarded_as: CardKind,
}

impl Card {
    /// Create a card whose alias equals its printed kind.
    #[must_use]
    pub fn new(id: CardId, kind: CardKind, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            kind,
            regarded_as: kind,
        }
    }

    /// The printed kind.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// The kind this card currently counts as.
    #[must_use]
    pub fn effective_kind(&self) -> CardKind {
        self.regarded_as
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Treat this card as another kind until it is discarded.
    pub fn regard_as(&mut self, kind: CardKind) {
        self.regarded_as = kind;
    }

    /// Is the alias different from the printed kind?
    #[must_use]
    pub fn is_aliased(&self) -> bool {
        self.regarded_as != self.kind
    }

    /// Drop any alias. Called whenever the card enters a discard pile.
    pub fn reset_alias(&mut self) {
        self.regarded_as = self.kind;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suit = match self.suit {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };
        if self.is_aliased() {
            write!(f, "{}{} {} (as {})", suit, self.rank, self.kind, self.regarded_as)
        } else {
            write!(f, "{}{} {}", suit, self.rank, self.kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lifecycle() {
        let mut card = Card::new(CardId::new(1), CardKind::Attack, Suit::Hearts, Rank::new(5));
        assert_eq!(card.effective_kind(), CardKind::Attack);
        assert!(!card.is_aliased());

        card.regard_as(CardKind::Duel);
        assert_eq!(card.kind(), CardKind::Attack);
        assert_eq!(card.effective_kind(), CardKind::Duel);
        assert!(card.is_aliased());

        card.reset_alias();
        assert_eq!(card.effective_kind(), CardKind::Attack);
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId::new(3), CardKind::Dodge, Suit::Spades, Rank::new(12));
        assert_eq!(card.to_string(), "♠Q Dodge");
    }
}
