//! The draw pile: what is left of the deck plus one exposed card.

use super::{Column, ColumnKind};
use crate::cards::{Card, Deck};

/// The undealt deck with its current card turned up.
///
/// Cards only ever leave the draw pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawPile {
    deck: Deck,
    current: Option<Card>,
}

impl DrawPile {
    /// Wrap `deck`, turning up its first card.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let mut pile = Self { deck, current: None };
        pile.away();
        pile
    }

    /// Cards still face down beneath the current one.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl Column for DrawPile {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Draw
    }

    fn top(&self) -> Option<Card> {
        self.current
    }

    fn can_put(&self, _card: Card) -> bool {
        false
    }

    fn put(&mut self, _card: Card) -> bool {
        false
    }

    /// Give up the current card and turn up the next one.
    fn away(&mut self) -> Option<Card> {
        std::mem::replace(&mut self.current, self.deck.deal())
    }

    fn len(&self) -> usize {
        self.deck.len() + usize::from(self.current.is_some())
    }
}

impl std::fmt::Display for DrawPile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.current {
            Some(card) => write!(f, "{card}"),
            None => f.write_str("[-]"),
        }
    }
}
