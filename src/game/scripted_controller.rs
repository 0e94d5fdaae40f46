//! Scripted player controller for testing and replays
//!
//! Follows a predetermined list of moves, then passes forever.

use crate::core::Player;
use crate::game::controller::{GameStateView, Move, PlayerController};

/// A controller that follows a predetermined sequence of moves
pub struct ScriptedController {
    player: Player,
    moves: Vec<Move>,
    current_step: usize,
}

impl ScriptedController {
    pub fn new(player: Player, moves: Vec<Move>) -> Self {
        ScriptedController {
            player,
            moves,
            current_step: 0,
        }
    }

    /// Moves not yet handed out
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.current_step
    }
}

impl PlayerController for ScriptedController {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn choose_move(&mut self, _view: &GameStateView) -> Move {
        match self.moves.get(self.current_step) {
            Some(&mv) => {
                self.current_step += 1;
                mv
            }
            None => Move::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, InfluenceGrid};
    use crate::game::GameState;

    #[test]
    fn test_scripted_controller() {
        let card = Card::new("Plain", 1, 1, InfluenceGrid::empty());
        let game = GameState::new(3, 5, vec![card; 15], 5).unwrap();
        let view = GameStateView::new(&game, Player::Red);

        let play = Move::Play {
            card_index: 0,
            row: 1,
            col: 0,
        };
        let mut controller = ScriptedController::new(Player::Red, vec![play, Move::Pass]);
        assert_eq!(controller.remaining(), 2);

        assert_eq!(controller.choose_move(&view), play);
        assert_eq!(controller.choose_move(&view), Move::Pass);
        assert_eq!(controller.remaining(), 0);

        // Script exhausted
        assert_eq!(controller.choose_move(&view), Move::Pass);
    }
}
