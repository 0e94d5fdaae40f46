//! Fill-first controller for testing and automation
//!
//! Takes the first legal play it finds, sweeping rows top to bottom and
//! columns from the player's home edge outward. Useful for deterministic
//! tests and benchmarks.

use crate::core::Player;
use crate::game::controller::{GameStateView, Move, PlayerController};

/// A controller that fills the board from its own edge
pub struct FillFirstController {
    player: Player,
}

impl FillFirstController {
    pub fn new(player: Player) -> Self {
        FillFirstController { player }
    }
}

impl PlayerController for FillFirstController {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "fill-first"
    }

    fn choose_move(&mut self, view: &GameStateView) -> Move {
        let columns = view.column_order();
        for row in 0..view.rows() {
            for &col in &columns {
                for card_index in 0..view.hand().len() {
                    if view.can_play_card(card_index, row, col) {
                        return Move::Play {
                            card_index,
                            row,
                            col,
                        };
                    }
                }
            }
        }
        Move::Pass
    }
}
