//! Deck loading and game setup

pub mod deck;
pub mod game_init;

pub use deck::{DeckList, DeckLoader};
pub use game_init::{GameConfig, GameInitializer};
