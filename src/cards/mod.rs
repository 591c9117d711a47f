//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: The fixed symbol sets (`C S H D`, `A 2..9 T J Q K`)
//! - `Card`: Immutable suit + rank value
//! - `Deck`: The 52 cards, shuffled and dealt from the top

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
