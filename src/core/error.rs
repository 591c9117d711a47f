//! Error types.
//!
//! Card construction can fail loudly. Move requests never do: they report
//! through `bool`, and `MoveError` only names the reason for callers that
//! want one.

use thiserror::Error;

/// A card was described with symbols outside the fixed suit/rank sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("no such suit: {0:?}")]
    InvalidSuit(char),

    #[error("no such rank: {0:?}")]
    InvalidRank(char),

    #[error("card text must look like `T-H`, got {0:?}")]
    Malformed(String),
}

/// Why a move request was refused. State is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column index out of range")]
    OutOfRange,

    #[error("source column is empty")]
    EmptySource,

    #[error("destination does not accept that card")]
    Rejected,

    #[error("base columns must start with value {expected}, got {found}")]
    StartRankMismatch { expected: u8, found: u8 },

    #[error("draw pile cards only go to empty play columns")]
    PlayColumnOccupied,
}
