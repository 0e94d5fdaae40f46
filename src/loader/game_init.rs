//! Game initialization from decks
//!
//! Validates a [`GameConfig`] against a deck and builds the starting
//! [`GameState`].

use crate::game::{Board, GameState};
use crate::loader::DeckList;
use crate::{Result, SanguineError};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Board and hand dimensions for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Cards dealt to each player before the first move
    pub hand_size: usize,
    /// Players stop drawing once their hand holds this many cards
    pub max_hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 3,
            cols: 5,
            hand_size: 5,
            max_hand_size: 5,
        }
    }
}

impl GameConfig {
    /// Read a config from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)
            .map_err(|e| SanguineError::SerializationError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the rules that do not depend on the deck
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(SanguineError::InvalidArgument(
                "rows must be at least 1".to_string(),
            ));
        }
        if self.cols <= 1 || self.cols % 2 == 0 {
            return Err(SanguineError::InvalidArgument(format!(
                "cols must be odd and greater than 1, got {}",
                self.cols
            )));
        }
        Board::cell_count(self.rows, self.cols)?;
        if self.max_hand_size == 0 {
            return Err(SanguineError::InvalidArgument(
                "max_hand_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Smallest deck this board can be played with
    pub fn min_deck_size(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

/// Game builder for initializing games from a deck
pub struct GameInitializer {
    config: GameConfig,
    shuffle_seed: Option<u64>,
}

impl GameInitializer {
    pub fn new(config: GameConfig) -> Self {
        GameInitializer {
            config,
            shuffle_seed: None,
        }
    }

    /// Shuffle the master deck with a seeded RNG before the players' copies
    /// are made, so both players still draw the same sequence
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a game from `deck`
    pub fn init_game(&self, deck: &DeckList) -> Result<GameState> {
        self.config.validate()?;

        let mut master = deck.cards.clone();
        if let Some(seed) = self.shuffle_seed {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            master.shuffle(&mut rng);
        }

        let game = GameState::new(
            self.config.rows,
            self.config.cols,
            master,
            self.config.hand_size,
        )?;
        Ok(game.with_max_hand_size(self.config.max_hand_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, InfluenceGrid, Player};

    fn numbered_deck(size: usize) -> DeckList {
        DeckList {
            cards: (0..size)
                .map(|i| Card::new(format!("c{i}"), 1, 1, InfluenceGrid::empty()))
                .collect(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min_deck_size(), 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let even = GameConfig {
            cols: 4,
            ..GameConfig::default()
        };
        assert!(even.validate().unwrap_err().is_invalid_argument());
        let no_rows = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(no_rows.validate().is_err());
        let huge = GameConfig {
            rows: usize::MAX / 2,
            ..GameConfig::default()
        };
        assert!(huge.validate().unwrap_err().is_invalid_argument());
        assert_eq!(huge.min_deck_size(), usize::MAX);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"rows": 4}"#).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 5);
        assert_eq!(config.hand_size, 5);
    }

    #[test]
    fn test_init_game() {
        let game = GameInitializer::new(GameConfig::default())
            .init_game(&numbered_deck(15))
            .unwrap();
        assert_eq!(game.rows(), 3);
        assert_eq!(game.hand(Player::Red).len(), 5);
        assert_eq!(game.hand(Player::Red)[0].name(), "c0");
    }

    #[test]
    fn test_deck_too_small() {
        let err = GameInitializer::new(GameConfig::default())
            .init_game(&numbered_deck(14))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_seeded_shuffle_is_shared() {
        let deck = numbered_deck(30);
        let init = GameInitializer::new(GameConfig::default()).with_shuffle_seed(9);
        let a = init.init_game(&deck).unwrap();
        let b = init.init_game(&deck).unwrap();

        assert_eq!(a.hand(Player::Red), b.hand(Player::Red));
        let red: Vec<_> = a.hand(Player::Red).iter().map(|c| c.name().clone()).collect();
        let blue: Vec<_> = a.hand(Player::Blue).iter().map(|c| c.name().clone()).collect();
        assert_eq!(red, blue);
    }
}
