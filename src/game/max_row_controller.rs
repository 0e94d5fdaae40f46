//! Row-contesting controller
//!
//! Looks for a row it is not winning and plays the first card that takes the
//! lead there.

use crate::core::Player;
use crate::game::controller::{GameStateView, Move, PlayerController};

/// A controller that tries to win rows one at a time
pub struct MaxRowController {
    player: Player,
}

impl MaxRowController {
    pub fn new(player: Player) -> Self {
        MaxRowController { player }
    }

    /// First play in `row` that lifts our score strictly above the opponent's
    fn winning_play(&self, view: &GameStateView, row: usize, columns: &[usize]) -> Option<Move> {
        let mine = view.score(row, self.player);
        let theirs = view.score(row, self.player.opponent());
        if mine > theirs {
            return None;
        }

        for &col in columns {
            for (card_index, card) in view.hand().iter().enumerate() {
                let lifted = mine.saturating_add(u64::from(card.value()));
                if lifted > theirs && view.can_play_card(card_index, row, col) {
                    return Some(Move::Play {
                        card_index,
                        row,
                        col,
                    });
                }
            }
        }
        None
    }
}

impl PlayerController for MaxRowController {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "max-row"
    }

    fn choose_move(&mut self, view: &GameStateView) -> Move {
        let columns = view.column_order();
        (0..view.rows())
            .find_map(|row| self.winning_play(view, row, &columns))
            .unwrap_or(Move::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, InfluenceGrid};
    use crate::game::GameState;

    fn plain(name: &str, cost: u32, value: u32) -> Card {
        Card::new(name, cost, value, InfluenceGrid::empty())
    }

    #[test]
    fn test_max_row_takes_first_contested_row() {
        let deck: Vec<Card> = (0..15).map(|i| plain(&format!("c{i}"), 1, 2)).collect();
        let game = GameState::new(3, 5, deck, 5).unwrap();
        let mut controller = MaxRowController::new(Player::Red);
        let view = GameStateView::new(&game, Player::Red);

        assert_eq!(
            controller.choose_move(&view),
            Move::Play {
                card_index: 0,
                row: 0,
                col: 0
            }
        );
    }

    #[test]
    fn test_max_row_skips_rows_already_won() {
        let deck: Vec<Card> = (0..15).map(|i| plain(&format!("c{i}"), 1, 2)).collect();
        let mut game = GameState::new(3, 5, deck, 5).unwrap();
        game.play_card(0, 0, 0).unwrap();
        game.pass().unwrap();

        let mut controller = MaxRowController::new(Player::Red);
        let view = GameStateView::new(&game, Player::Red);
        assert_eq!(
            controller.choose_move(&view),
            Move::Play {
                card_index: 0,
                row: 1,
                col: 0
            }
        );
    }

    #[test]
    fn test_max_row_needs_strict_lead() {
        // Red leads row 0 with 2; Blue's best card only ties there, so Blue
        // moves on to row 1 where any value wins.
        let mut deck = vec![plain("Two", 1, 2), plain("One", 1, 1)];
        deck.extend((0..13).map(|i| plain(&format!("c{i}"), 3, 9)));
        let mut game = GameState::new(3, 5, deck, 2).unwrap();
        game.play_card(0, 0, 0).unwrap();

        let mut controller = MaxRowController::new(Player::Blue);
        let view = GameStateView::new(&game, Player::Blue);
        assert_eq!(
            controller.choose_move(&view),
            Move::Play {
                card_index: 0,
                row: 1,
                col: 4
            }
        );
    }

    #[test]
    fn test_max_value_tie_is_not_a_lead() {
        let deck: Vec<Card> = (0..5).map(|i| plain(&format!("c{i}"), 1, u32::MAX)).collect();
        let mut game = GameState::new(1, 5, deck, 1).unwrap();
        game.play_card(0, 0, 0).unwrap();

        let mut blue = MaxRowController::new(Player::Blue);
        let view = GameStateView::new(&game, Player::Blue);
        assert_eq!(blue.choose_move(&view), Move::Pass);
    }
}
