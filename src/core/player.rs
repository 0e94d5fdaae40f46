//! Player representation
//!
//! Sanguine is strictly two-player. Red owns the left edge of the board and
//! moves first; Blue owns the right edge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Dense index for per-player storage (Red = 0, Blue = 1)
    pub fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// Single-letter tag used when rendering a card cell
    pub fn tag(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Blue => write!(f, "Blue"),
        }
    }
}
