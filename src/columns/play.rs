//! Play columns: the seven dealt stacks.

use super::{CardStack, Column, ColumnKind, DrawPile};
use crate::cards::Card;

/// A dealt stack that builds downward by value.
///
/// Suit is not checked: any card of lower value than the top may be
/// placed on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayColumn {
    cards: CardStack,
}

impl PlayColumn {
    /// An empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal `depth` cards off the draw pile, each draw exposing the next.
    ///
    /// Stops early if the draw pile runs out.
    #[must_use]
    pub fn deal(draw: &mut DrawPile, depth: usize) -> Self {
        let mut cards = CardStack::new();
        for _ in 0..depth {
            let Some(card) = draw.away() else { break };
            cards.push(card);
        }
        Self { cards }
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Column for PlayColumn {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Play
    }

    fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    fn can_put(&self, card: Card) -> bool {
        self.top().map_or(true, |top| top.value() > card.value())
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

impl std::fmt::Display for PlayColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
