//! # patience
//!
//! A single-player patience card game engine.
//!
//! ## Table
//!
//! 49 cards are dealt into 7 play columns. The 3 left over form the draw
//! pile. Cards move between play columns, 7 single-card reserve columns
//! and 4 base columns; the game is won when every base column holds 13
//! cards of one suit.
//!
//! ## Design Principles
//!
//! 1. **Booleans at the boundary**: Move requests return `bool` and never
//!    panic. `Game::try_apply` gives the reason when a caller wants one.
//!
//! 2. **Closed system**: Cards only relocate. The table always holds 52.
//!
//! 3. **Injectable randomness**: Every deal comes from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card, suit, rank and deck
//! - `columns`: The `Column` trait and the four column types
//! - `game`: The orchestrator and move requests
//! - `shell`: Text menu loop
//! - `telemetry`: Logging setup for the binary

pub mod core;
pub mod cards;
pub mod columns;
pub mod game;
pub mod shell;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{CardError, GameConfig, GameRng, MoveError};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::columns::{BaseColumn, Column, ColumnKind, DrawPile, PlayColumn, ReserveColumn};

pub use crate::game::{Game, Move};
