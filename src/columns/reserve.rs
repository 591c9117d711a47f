//! Reserve columns: single-card holding slots.

use super::{Column, ColumnKind};
use crate::cards::Card;

/// Holds at most one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveColumn {
    slot: Option<Card>,
}

impl ReserveColumn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Column for ReserveColumn {
    fn kind(&self) -> ColumnKind {
        ColumnKind::Reserve
    }

    fn top(&self) -> Option<Card> {
        self.slot
    }

    fn can_put(&self, _card: Card) -> bool {
        self.slot.is_none()
    }

    fn put(&mut self, card: Card) -> bool {
        if !self.can_put(card) {
            return false;
        }
        self.slot = Some(card);
        true
    }

    fn away(&mut self) -> Option<Card> {
        self.slot.take()
    }

    fn len(&self) -> usize {
        usize::from(self.slot.is_some())
    }
}

impl std::fmt::Display for ReserveColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.slot {
            Some(card) => write!(f, "[{card}]"),
            None => f.write_str("[ ]"),
        }
    }
}
