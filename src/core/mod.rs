//! Core engine types: RNG, configuration, errors.
//!
//! These are the pieces the card, column and game modules share.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{GameConfig, BASE_COLUMNS, PLAY_COLUMNS, PLAY_DEPTH, RESERVE_COLUMNS};
pub use error::{CardError, MoveError};
