//! Game orchestration.
//!
//! `Game` owns the draw pile and every column, validates move requests
//! and reports the win.

pub mod engine;
pub mod moves;

pub use engine::Game;
pub use moves::Move;
