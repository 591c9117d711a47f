//! Columns: stacks of cards with their own placement rules.
//!
//! Every column type implements [`Column`], so the game moves cards with
//! one generic routine, [`move_card`], whatever the source and destination.
//!
//! | Column          | accepts                                            |
//! |-----------------|----------------------------------------------------|
//! | `PlayColumn`    | anything when empty, else a lower value than top    |
//! | `ReserveColumn` | anything when empty, nothing otherwise              |
//! | `BaseColumn`    | anything when empty, else same suit, top value + 1  |
//! | `DrawPile`      | nothing                                             |
//!
//! The starting value of empty base columns is a game-wide rule and is
//! checked by the game, not by `BaseColumn`.

pub mod base;
pub mod draw;
pub mod play;
pub mod reserve;

use smallvec::SmallVec;
use tracing::trace;

use crate::cards::Card;
use crate::core::MoveError;

pub use base::BaseColumn;
pub use draw::DrawPile;
pub use play::PlayColumn;
pub use reserve::ReserveColumn;

/// Inline card storage. A base column never exceeds 13 cards and play
/// columns rarely do.
pub type CardStack = SmallVec<[Card; 13]>;

/// Which kind of column a value is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Play,
    Reserve,
    Base,
    Draw,
}

/// Capability shared by all columns.
pub trait Column {
    fn kind(&self) -> ColumnKind;

    /// The top card, without removing it.
    fn top(&self) -> Option<Card>;

    /// Whether `card` may be placed on this column. No side effects.
    fn can_put(&self, card: Card) -> bool;

    /// Place `card` if [`Column::can_put`] allows it.
    ///
    /// Returns `false` and leaves the column untouched otherwise.
    fn put(&mut self, card: Card) -> bool;

    /// Remove the top card. A no-op returning `None` on an empty column.
    fn away(&mut self) -> Option<Card>;

    /// Number of cards held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Move the top card of `source` onto `destination`.
///
/// Either the card moves, or nothing changes: the source is only popped
/// after the destination has accepted the card.
pub fn move_card<S, D>(source: &mut S, destination: &mut D) -> Result<Card, MoveError>
where
    S: Column + ?Sized,
    D: Column + ?Sized,
{
    let card = source.top().ok_or(MoveError::EmptySource)?;
    if !destination.put(card) {
        return Err(MoveError::Rejected);
    }
    source.away();
    trace!(from = ?source.kind(), to = ?destination.kind(), %card, "card moved");
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_move_card_relocates() {
        let mut reserve = ReserveColumn::new();
        let mut base = BaseColumn::new();
        assert!(reserve.put(card("5-H")));

        assert_eq!(move_card(&mut reserve, &mut base), Ok(card("5-H")));
        assert!(reserve.is_empty());
        assert_eq!(base.top(), Some(card("5-H")));
    }

    #[test]
    fn test_move_card_from_empty_source() {
        let mut reserve = ReserveColumn::new();
        let mut base = BaseColumn::new();

        assert_eq!(move_card(&mut reserve, &mut base), Err(MoveError::EmptySource));
        assert!(base.is_empty());
    }

    #[test]
    fn test_move_card_rejected_leaves_source() {
        let mut from = ReserveColumn::new();
        let mut to = ReserveColumn::new();
        assert!(from.put(card("2-C")));
        assert!(to.put(card("3-C")));

        assert_eq!(move_card(&mut from, &mut to), Err(MoveError::Rejected));
        assert_eq!(from.top(), Some(card("2-C")));
        assert_eq!(to.top(), Some(card("3-C")));
    }

    #[test]
    fn test_move_card_through_trait_objects() {
        let mut reserve = ReserveColumn::new();
        assert!(reserve.put(Card::new(Suit::Spades, Rank::Four)));
        let mut base = BaseColumn::new();

        let source: &mut dyn Column = &mut reserve;
        let destination: &mut dyn Column = &mut base;
        assert!(move_card(source, destination).is_ok());
        assert_eq!(base.len(), 1);
        assert_eq!(reserve.kind(), ColumnKind::Reserve);
        assert_eq!(base.kind(), ColumnKind::Base);
    }
}
