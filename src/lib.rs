//! Sanguine - two-player card placement game engine
//!
//! Players take turns placing cards on pawn-held cells of a shared board.
//! Each card spreads pawns to nearby cells, and rows are scored by the
//! value of the cards each player holds in them.

pub mod core;
pub mod error;
pub mod game;
pub mod loader;
pub mod tournament;
pub mod zones;

pub use error::{Result, SanguineError};
