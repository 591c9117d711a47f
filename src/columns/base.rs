//! Base columns: the foundations the game is won on.

use super::{CardStack, Column, ColumnKind};
use crate::cards::{Card, Rank};

/// Builds upward in one suit, one value at a time.
///
/// Values do not wrap: a column started at 5 can never hold more than
/// 9 cards. Which value may start an empty column is decided by the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseColumn {
    cards: CardStack,
}

impl BaseColumn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the column holds one card of every rank.
    #[must_use]
    pub fn full(&self) -> bool {
        self.cards.len() == Rank::COUNT
    }

    /// The first card placed, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Column for BaseColumn {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Base
    }

    fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    fn can_put(&self, card: Card) -> bool {
        self.top()
            .map_or(true, |top| top.suit() == card.suit() && top.value() + 1 == card.value())
    }

    fn put(&mut self, card: Card) -> bool {
        if !self.can_put(card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    fn away(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}

impl std::fmt::Display for BaseColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.top() {
            Some(card) => write!(f, "[{card}]"),
            None => f.write_str("[ ]"),
        }
    }
}
