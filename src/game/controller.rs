//! Player controller trait and game state view
//!
//! This module defines the interface between the game engine and move
//! selection policies. The game loop calls the controller whose turn it is,
//! and the controller inspects a read-only view of the game state to pick a
//! [`Move`].

use crate::core::{Card, Cell, Player};
use crate::game::{Board, GameLogger, GameState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A turn action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Play card `card_index` of the hand at `(row, col)`
    Play {
        card_index: usize,
        row: usize,
        col: usize,
    },

    /// Skip the turn
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play {
                card_index,
                row,
                col,
            } => write!(f, "Play card {card_index} at ({row},{col})"),
            Move::Pass => write!(f, "PASS"),
        }
    }
}

/// Read-only view of game state for controllers
///
/// Borrows the live game, so nothing reachable from here can mutate it.
pub struct GameStateView<'a> {
    game: &'a GameState,
    player: Player,
}

impl<'a> GameStateView<'a> {
    /// Create a new view of the game state from a player's perspective
    pub fn new(game: &'a GameState, player: Player) -> Self {
        GameStateView { game, player }
    }

    /// The player this view is for
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whose turn it is
    pub fn current_player(&self) -> Player {
        self.game.current_player()
    }

    /// Cards in this player's hand
    pub fn hand(&self) -> &'a [Card] {
        self.game.hand_ref(self.player)
    }

    pub fn board(&self) -> &'a Board {
        self.game.board_ref()
    }

    pub fn rows(&self) -> usize {
        self.game.rows()
    }

    pub fn cols(&self) -> usize {
        self.game.cols()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&'a Cell> {
        self.game.board_ref().cell(row, col).ok()
    }

    /// Row score of `player`, zero for rows off the board
    pub fn score(&self, row: usize, player: Player) -> u64 {
        self.game.score(row, player).unwrap_or(0)
    }

    pub fn total_score(&self, player: Player) -> u64 {
        self.game.total_score(player)
    }

    /// Whether this player could play card `card_index` at `(row, col)` now
    ///
    /// False whenever it is not this player's turn.
    pub fn can_play_card(&self, card_index: usize, row: usize, col: usize) -> bool {
        self.is_my_turn() && self.game.can_play_card(card_index, row, col)
    }

    /// This player's legal plays, empty when it is not their turn
    pub fn legal_moves(&self) -> Vec<Move> {
        if !self.is_my_turn() {
            return Vec::new();
        }
        self.game.legal_moves()
    }

    fn is_my_turn(&self) -> bool {
        self.player == self.game.current_player()
    }

    pub fn deck_size(&self) -> usize {
        self.game.deck_size(self.player)
    }

    pub fn turn_number(&self) -> u32 {
        self.game.turn_number()
    }

    /// Columns in the order this player advances across the board
    ///
    /// Red starts on the left edge, Blue on the right.
    pub fn column_order(&self) -> Vec<usize> {
        let cols = self.cols();
        match self.player {
            Player::Red => (0..cols).collect(),
            Player::Blue => (0..cols).rev().collect(),
        }
    }

    /// Access the game logger
    pub fn logger(&self) -> &GameLogger {
        &self.game.logger
    }
}

/// Player controller trait
///
/// Implement this trait to create AI players or connect to a UI. The game
/// loop asks the controller for a move whenever it is this player's turn and
/// notifies every controller after each move.
pub trait PlayerController {
    /// The player this controller is responsible for
    fn player(&self) -> Player;

    /// Short policy name for logs and tournament tables
    fn name(&self) -> &str;

    /// Choose the next move
    ///
    /// Returning an illegal play is an error surfaced by the game loop, so
    /// policies should check `can_play_card` and fall back to `Move::Pass`.
    fn choose_move(&mut self, view: &GameStateView) -> Move;

    /// Called after every move that leaves the game running
    fn on_turn_changed(&mut self, _view: &GameStateView, _next: Player) {}

    /// Called once when the game ends
    fn on_game_end(&mut self, _view: &GameStateView, _winner: Option<Player>) {}
}
