//! The shared deck: an ordered draw pile and an unordered discard pile.
//!
//! Drawing from an empty draw pile reshuffles the discard pile into a new
//! draw pile first. With both piles empty a draw simply yields nothing.

use std::collections::VecDeque;

use log::debug;

use crate::cards::{Card, CardId};
use crate::core::GameRng;

/// Draw pile plus discard pile.
///
/// ## Usage
///
/// ```
/// use sanguo_engine::cards::{Card, CardId, CardKind, Rank, Suit};
/// use sanguo_engine::core::GameRng;
/// use sanguo_engine::zones::Deck;
///
/// let cards = vec![
///     Card::new(CardId::new(0), CardKind::Attack, Suit::Spades, Rank::new(7)),
///     Card::new(CardId::new(1), CardKind::Dodge, Suit::Hearts, Rank::new(2)),
/// ];
/// let mut deck = Deck::new(cards, GameRng::new(1));
///
/// let first = deck.draw().unwrap();
/// assert_eq!(first.id, CardId::new(0));
/// deck.discard(first);
///
/// deck.draw();               // takes the Dodge
/// let again = deck.draw();   // reshuffles the discarded Attack back in
/// assert_eq!(again.map(|c| c.id), Some(CardId::new(0)));
/// assert!(deck.draw().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Front is the next card drawn.
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    rng: GameRng,
    reshuffles: u32,
}

impl Deck {
    /// Create a deck whose draw pile is `cards` in the given order.
    #[must_use]
    pub fn new(cards: Vec<Card>, rng: GameRng) -> Self {
        Self {
            draw_pile: cards.into(),
            discard_pile: Vec::new(),
            rng,
            reshuffles: 0,
        }
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle(&mut self) {
        let pile = self.draw_pile.make_contiguous();
        self.rng.shuffle(pile);
    }

    /// Draw the next card, reshuffling the discard pile in if needed.
    ///
    /// Returns `None` only when both piles are empty.
    pub fn draw(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() && !self.reshuffle() {
            return None;
        }
        self.draw_pile.pop_front()
    }

    /// Draw up to `count` cards. Fewer come back if the deck runs dry.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Move the discard pile into the draw pile and shuffle it.
    ///
    /// Returns `false` when there was nothing to reshuffle.
    pub fn reshuffle(&mut self) -> bool {
        if self.discard_pile.is_empty() {
            return false;
        }
        let mut cards = std::mem::take(&mut self.discard_pile);
        self.rng.shuffle(&mut cards);
        self.draw_pile.extend(cards);
        self.reshuffles += 1;
        debug!("reshuffled discard pile into {} card draw pile", self.draw_pile.len());
        true
    }

    /// Put a card on the discard pile, dropping any alias it carried.
    pub fn discard(&mut self, mut card: Card) {
        card.reset_alias();
        self.discard_pile.push(card);
    }

    /// Discard several cards in order.
    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.discard(card);
        }
    }

    /// Pull the first draw-pile card matching `pred` out of the pile.
    pub fn take_where(&mut self, pred: impl Fn(&Card) -> bool) -> Option<Card> {
        let pos = self.draw_pile.iter().position(pred)?;
        self.draw_pile.remove(pos)
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards in the draw pile, next draw first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Is the card with this id in the discard pile?
    #[must_use]
    pub fn is_discarded(&self, id: CardId) -> bool {
        self.discard_pile.iter().any(|c| c.id == id)
    }

    /// How many times the discard pile has been recycled.
    #[must_use]
    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }
}
