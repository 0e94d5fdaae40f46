//! Board grid, influence propagation, and row scoring

use crate::core::{Card, Cell, Player};
use crate::{Result, SanguineError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows × columns grid of cells with a per-row score cache
///
/// Cells are stored row-major. The score cache is derived state: it is
/// rebuilt from the cells after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    /// `row_scores[row][player.index()]`
    row_scores: Vec<[u64; 2]>,
}

impl Board {
    /// Create the starting board
    ///
    /// Every row begins with one Red pawn in the first column and one Blue
    /// pawn in the last column. `cols` must be odd and greater than one so
    /// the board has a center column.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = Self::cell_count(rows, cols)?;
        if rows == 0 {
            return Err(SanguineError::InvalidArgument(
                "board must have at least one row".to_string(),
            ));
        }
        if cols <= 1 || cols % 2 == 0 {
            return Err(SanguineError::InvalidArgument(format!(
                "board columns must be odd and greater than 1, got {cols}"
            )));
        }

        let mut cells = vec![Cell::Empty; len];
        for row in 0..rows {
            cells[row * cols] = Cell::Pawns {
                owner: Player::Red,
                count: 1,
            };
            cells[row * cols + cols - 1] = Cell::Pawns {
                owner: Player::Blue,
                count: 1,
            };
        }

        Ok(Board {
            rows,
            cols,
            cells,
            row_scores: vec![[0; 2]; rows],
        })
    }

    /// Number of cells on a `rows` × `cols` board
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols).ok_or_else(|| {
            SanguineError::InvalidArgument(format!("a {rows}x{cols} board is too large"))
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Borrow the cell at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(&self.cells[row * self.cols + col])
    }

    /// Place `card` for `player` at `(row, col)` and spread its influence
    ///
    /// The target must hold at least `card.cost()` of the player's own pawns.
    /// Every check happens before the board is touched, so a rejected play
    /// leaves the board unchanged.
    pub fn play_card(&mut self, card: &Card, player: Player, row: usize, col: usize) -> Result<()> {
        self.check_play(card, player, row, col)?;

        let idx = row * self.cols + col;
        self.cells[idx] = Cell::Card {
            card: card.clone(),
            owner: player,
        };

        for (dr, dc) in card.influence().offsets() {
            let (Some(tr), Some(tc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if !self.in_bounds(tr, tc) {
                continue;
            }
            let target = tr * self.cols + tc;
            if self.cells[target].is_card() {
                continue;
            }
            let old = std::mem::take(&mut self.cells[target]);
            self.cells[target] = old.add_pawn(player);
        }

        self.recalc_all_scores();
        Ok(())
    }

    /// Validate a play without applying it
    pub fn check_play(&self, card: &Card, player: Player, row: usize, col: usize) -> Result<()> {
        match self.cell(row, col)? {
            Cell::Empty => Err(SanguineError::IllegalState(format!(
                "cell ({row},{col}) has no pawns"
            ))),
            Cell::Card { .. } => Err(SanguineError::IllegalState(format!(
                "cell ({row},{col}) already holds a card"
            ))),
            Cell::Pawns { owner, .. } if *owner != player => Err(SanguineError::IllegalState(
                format!("cell ({row},{col}) is owned by {owner}, not {player}"),
            )),
            Cell::Pawns { count, .. } if u32::from(*count) < card.cost() => {
                Err(SanguineError::IllegalState(format!(
                    "{} costs {} but cell ({row},{col}) has {count} pawn(s)",
                    card.name(),
                    card.cost()
                )))
            }
            Cell::Pawns { .. } => Ok(()),
        }
    }

    /// Cached score of `player` in `row`
    pub fn score(&self, row: usize, player: Player) -> Result<u64> {
        self.row_scores
            .get(row)
            .map(|scores| scores[player.index()])
            .ok_or_else(|| {
                SanguineError::InvalidArgument(format!(
                    "row {row} is outside a board with {} rows",
                    self.rows
                ))
            })
    }

    /// Sum of `player`'s row scores
    pub fn total_score(&self, player: Player) -> u64 {
        self.row_scores
            .iter()
            .fold(0u64, |total, s| total.saturating_add(s[player.index()]))
    }

    /// Rebuild the score cache from the cells
    ///
    /// Card values are `u32`, so a row sum in `u64` only saturates on boards
    /// with more than 2^32 columns.
    pub fn recalc_all_scores(&mut self) {
        for row in 0..self.rows {
            let mut scores = [0u64; 2];
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if let Cell::Card { card, owner } = cell {
                    let score = &mut scores[owner.index()];
                    *score = score.saturating_add(u64::from(card.value()));
                }
            }
            self.row_scores[row] = scores;
        }
    }

    fn out_of_range(&self, row: usize, col: usize) -> SanguineError {
        SanguineError::InvalidArgument(format!(
            "position ({row},{col}) is outside the {}x{} board",
            self.rows, self.cols
        ))
    }
}

impl fmt::Display for Board {
    /// One line per row: Red's row score, the cell tokens, Blue's row score
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "{} ", self.row_scores[row][Player::Red.index()])?;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                write!(f, "{cell}")?;
            }
            write!(f, " {}", self.row_scores[row][Player::Blue.index()])?;
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
