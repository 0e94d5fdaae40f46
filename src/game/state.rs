//! Main game state structure and turn sequencing

use crate::core::{Card, Cell, Player};
use crate::game::{Board, GameLogger, Move, TurnEvent};
use crate::zones::{PlayerZones, Zone};
use crate::{Result, SanguineError};
use serde::{Deserialize, Serialize};

/// Passes in a row that end the game
pub const PASSES_TO_END: u32 = 2;

/// Default cap on hand size when drawing after a move
pub const DEFAULT_MAX_HAND_SIZE: usize = 5;

/// Complete game state
///
/// Owns the board and both players' hands and draw piles. Every public read
/// accessor hands out an owned copy, so nothing outside the engine can reach
/// into live state; mutation happens only through [`GameState::play_card`]
/// and [`GameState::pass`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Zones for each player, indexed by `Player::index()`
    player_zones: [PlayerZones; 2],

    current_player: Player,

    consecutive_passes: u32,

    /// Moves (plays and passes) applied so far
    turn_number: u32,

    max_hand_size: usize,

    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl GameState {
    /// Start a game on a `rows` × `cols` board from a shared master deck
    ///
    /// Each player gets an independent copy of `master`, so both draw the
    /// same sequence of cards. Blue's copy is mirrored so that every grid is
    /// in the board-relative frame. Both players are dealt `hand_size` cards.
    pub fn new(rows: usize, cols: usize, master: Vec<Card>, hand_size: usize) -> Result<Self> {
        let cells = Board::cell_count(rows, cols)?;
        if master.len() < cells {
            return Err(SanguineError::InvalidArgument(format!(
                "deck has {} cards but a {rows}x{cols} board needs at least {cells}",
                master.len()
            )));
        }
        if hand_size > master.len() / 3 {
            return Err(SanguineError::InvalidArgument(format!(
                "hand size {hand_size} exceeds a third of the {}-card deck",
                master.len()
            )));
        }
        let board = Board::new(rows, cols)?;

        let blue_deck: Vec<Card> = master.iter().map(Card::mirrored).collect();
        let mut player_zones = [
            PlayerZones::new(master),
            PlayerZones::new(blue_deck),
        ];
        for zones in player_zones.iter_mut() {
            for _ in 0..hand_size {
                zones.draw_if_possible(usize::MAX);
            }
        }

        Ok(GameState {
            board,
            player_zones,
            current_player: Player::Red,
            consecutive_passes: 0,
            turn_number: 0,
            max_hand_size: DEFAULT_MAX_HAND_SIZE,
            logger: GameLogger::new(),
        })
    }

    /// Override the cap used when drawing after a move
    pub fn with_max_hand_size(mut self, max_hand_size: usize) -> Self {
        self.max_hand_size = max_hand_size;
        self
    }

    /// Play card `card_index` of the current player's hand at `(row, col)`
    ///
    /// On success the card leaves the hand, the player draws if possible, the
    /// pass counter resets and the turn switches.
    pub fn play_card(&mut self, card_index: usize, row: usize, col: usize) -> Result<TurnEvent> {
        self.ensure_not_over()?;

        let player = self.current_player;
        let zones = &self.player_zones[player.index()];
        let card = zones.hand.get(card_index).ok_or_else(|| {
            SanguineError::InvalidArgument(format!(
                "card index {card_index} is outside {player}'s hand of {}",
                zones.hand.len()
            ))
        })?;

        self.board.play_card(card, player, row, col)?;

        let zones = &mut self.player_zones[player.index()];
        zones.hand.remove(card_index);
        zones.draw_if_possible(self.max_hand_size);
        self.consecutive_passes = 0;
        Ok(self.end_turn())
    }

    /// Pass the current player's turn
    pub fn pass(&mut self) -> Result<TurnEvent> {
        self.ensure_not_over()?;

        let player = self.current_player;
        self.consecutive_passes += 1;
        self.player_zones[player.index()].draw_if_possible(self.max_hand_size);
        Ok(self.end_turn())
    }

    /// Apply a [`Move`] chosen by a controller
    pub fn apply_move(&mut self, mv: Move) -> Result<TurnEvent> {
        match mv {
            Move::Play {
                card_index,
                row,
                col,
            } => self.play_card(card_index, row, col),
            Move::Pass => self.pass(),
        }
    }

    fn end_turn(&mut self) -> TurnEvent {
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
        if self.is_game_over() {
            TurnEvent::GameOver {
                winner: self.winner(),
                red_score: self.total_score(Player::Red),
                blue_score: self.total_score(Player::Blue),
            }
        } else {
            TurnEvent::TurnSwitched(self.current_player)
        }
    }

    fn ensure_not_over(&self) -> Result<()> {
        if self.is_game_over() {
            return Err(SanguineError::IllegalState(
                "the game is over; no further moves are accepted".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the current player could play card `card_index` at `(row, col)`
    ///
    /// Never mutates and never errors: anything out of range is simply false.
    /// The target must accept the card by pawn count *and* belong to the
    /// current player.
    pub fn can_play_card(&self, card_index: usize, row: usize, col: usize) -> bool {
        if self.is_game_over() {
            return false;
        }
        let player = self.current_player;
        let Some(card) = self.player_zones[player.index()].hand.get(card_index) else {
            return false;
        };
        match self.board.cell(row, col) {
            Ok(cell) => cell.can_accept(card) && cell.owner() == Some(player),
            Err(_) => false,
        }
    }

    /// Every play the current player can make, cell by cell in row-major
    /// order and then in hand order
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let hand_len = self.player_zones[self.current_player.index()].hand.len();
        for row in 0..self.board.rows() {
            for col in 0..self.board.cols() {
                for card_index in 0..hand_len {
                    if self.can_play_card(card_index, row, col) {
                        moves.push(Move::Play {
                            card_index,
                            row,
                            col,
                        });
                    }
                }
            }
        }
        moves
    }

    pub fn is_game_over(&self) -> bool {
        self.consecutive_passes >= PASSES_TO_END
    }

    /// The player with the strictly higher total score once the game is over
    pub fn winner(&self) -> Option<Player> {
        if !self.is_game_over() {
            return None;
        }
        let red = self.total_score(Player::Red);
        let blue = self.total_score(Player::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Some(Player::Red),
            std::cmp::Ordering::Less => Some(Player::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Deep copy of the board
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// Borrow the live board (crate-internal readers only)
    pub(crate) fn board_ref(&self) -> &Board {
        &self.board
    }

    /// Copy of the cell at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        self.board.cell(row, col).cloned()
    }

    /// Owner of the cell at `(row, col)`, if any
    pub fn owner(&self, row: usize, col: usize) -> Result<Option<Player>> {
        self.board.cell(row, col).map(Cell::owner)
    }

    /// Copy of `player`'s hand, in draw order
    pub fn hand(&self, player: Player) -> Vec<Card> {
        self.player_zones[player.index()].hand.cards.clone()
    }

    pub(crate) fn hand_ref(&self, player: Player) -> &[Card] {
        &self.player_zones[player.index()].hand.cards
    }

    /// Cards left in `player`'s draw pile
    pub fn deck_size(&self, player: Player) -> usize {
        self.player_zones[player.index()]
            .get_zone(Zone::DrawPile)
            .len()
    }

    pub fn score(&self, row: usize, player: Player) -> Result<u64> {
        self.board.score(row, player)
    }

    pub fn total_score(&self, player: Player) -> u64 {
        self.board.total_score(player)
    }
}
