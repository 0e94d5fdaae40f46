//! Turn and game-over notifications
//!
//! Every successful move returns one of these so the caller can react to the
//! turn switch or the end of the game without registering callbacks.

use crate::core::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The move was applied and it is now `0`'s turn
    TurnSwitched(Player),

    /// The move ended the game
    GameOver {
        winner: Option<Player>,
        red_score: u64,
        blue_score: u64,
    },
}

impl TurnEvent {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnEvent::GameOver { .. })
    }
}
