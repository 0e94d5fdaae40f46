//! Core game types: players, cards, and cells

pub mod card;
pub mod cell;
pub mod player;
pub mod types;

pub use card::{Card, InfluenceGrid, GRID_CENTER, GRID_SIZE};
pub use cell::{Cell, MAX_PAWNS};
pub use player::Player;
pub use types::CardName;
