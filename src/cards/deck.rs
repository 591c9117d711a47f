//! The 52-card deck.
//!
//! A deck is built in a fixed order (suits outer, ranks inner), shuffled
//! once, then drained from the top. Iterating a deck deals from it, so an
//! iterator pass consumes the cards it yields.

use tracing::trace;

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::COUNT;

/// A depletable stack of cards. The last element is the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build an unshuffled deck of all 52 distinct cards.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Reorder the remaining cards uniformly at random.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` once the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        trace!(?card, remaining = self.cards.len(), "deal");
        card
    }

    /// Remaining card count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Deck {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        self.deal()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Deck {}
