//! Move requests.
//!
//! Each variant is one of the seven transfers the game allows. Indices are
//! zero-based; the text shell converts from the one-based numbers players
//! type.

use serde::{Deserialize, Serialize};

/// A request to move one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    PlayToPlay { from: usize, to: usize },
    PlayToBase { from: usize, to: usize },
    PlayToReserve { from: usize, to: usize },
    ReserveToBase { from: usize, to: usize },
    ReserveToPlay { from: usize, to: usize },
    DrawToPlay { to: usize },
    DrawToBase { to: usize },
}

impl Move {
    /// Whether the destination is a base column.
    #[must_use]
    pub fn targets_base(self) -> bool {
        matches!(
            self,
            Move::PlayToBase { .. } | Move::ReserveToBase { .. } | Move::DrawToBase { .. }
        )
    }
}
