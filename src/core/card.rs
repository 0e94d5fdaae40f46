//! Card types and definitions

use crate::core::CardName;
use crate::{Result, SanguineError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Side length of an influence grid
pub const GRID_SIZE: usize = 5;

/// Row/column of the grid cell that corresponds to the card itself
pub const GRID_CENTER: usize = 2;

/// Furthest row or column offset a card can reach
pub const MAX_REACH: isize = 2;

/// 5x5 influence mask centered on the cell a card is played to
///
/// Indexed `[row][col]`; entry `[2 + dr][2 + dc]` says whether the cell at
/// offset `(dr, dc)` receives a pawn when the card is played. The center is
/// always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InfluenceGrid([[bool; GRID_SIZE]; GRID_SIZE]);

impl InfluenceGrid {
    /// Build a grid from raw rows, rejecting a set center cell
    pub fn new(cells: [[bool; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        if cells[GRID_CENTER][GRID_CENTER] {
            return Err(SanguineError::InvalidArgument(
                "a card cannot influence its own cell".to_string(),
            ));
        }
        Ok(InfluenceGrid(cells))
    }

    /// A grid that influences nothing
    pub fn empty() -> Self {
        InfluenceGrid::default()
    }

    /// Build a grid from a list of `(dr, dc)` offsets
    pub fn from_offsets(offsets: &[(isize, isize)]) -> Result<Self> {
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
        for &(dr, dc) in offsets {
            if dr.abs() > MAX_REACH || dc.abs() > MAX_REACH {
                return Err(SanguineError::InvalidArgument(format!(
                    "influence offset ({dr},{dc}) is outside the 5x5 grid"
                )));
            }
            cells[(dr + MAX_REACH) as usize][(dc + MAX_REACH) as usize] = true;
        }
        InfluenceGrid::new(cells)
    }

    /// Raw rows of the grid
    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.0
    }

    /// Whether the cell at offset `(dr, dc)` is influenced
    pub fn at_offset(&self, dr: isize, dc: isize) -> bool {
        if dr.abs() > MAX_REACH || dc.abs() > MAX_REACH {
            return false;
        }
        self.0[(dr + MAX_REACH) as usize][(dc + MAX_REACH) as usize]
    }

    /// Influenced offsets in row-major order
    pub fn offsets(&self) -> SmallVec<[(isize, isize); 8]> {
        let mut out = SmallVec::new();
        for (r, row) in self.0.iter().enumerate() {
            for (c, &set) in row.iter().enumerate() {
                if set {
                    out.push((r as isize - MAX_REACH, c as isize - MAX_REACH));
                }
            }
        }
        out
    }

    /// Copy of the grid with every row reversed
    pub fn mirrored(&self) -> Self {
        let mut cells = self.0;
        for row in cells.iter_mut() {
            row.reverse();
        }
        InfluenceGrid(cells)
    }
}

impl fmt::Display for InfluenceGrid {
    /// Deck-file notation: `I` influenced, `X` not, `C` at the center
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            for (c, &set) in row.iter().enumerate() {
                let ch = if r == GRID_CENTER && c == GRID_CENTER {
                    'C'
                } else if set {
                    'I'
                } else {
                    'X'
                };
                write!(f, "{ch}")?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A Sanguine card
///
/// Cost is the number of own pawns a cell needs before the card can be placed
/// on it; value is what the card adds to its row score once placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: CardName,
    cost: u32,
    value: u32,
    influence: InfluenceGrid,
}

impl Card {
    pub fn new(name: impl Into<CardName>, cost: u32, value: u32, influence: InfluenceGrid) -> Self {
        Card {
            name: name.into(),
            cost,
            value,
            influence,
        }
    }

    pub fn name(&self) -> &CardName {
        &self.name
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Influence grid in the board-relative frame of the card's owner
    pub fn influence(&self) -> InfluenceGrid {
        self.influence
    }

    /// Reverse each row of the influence grid in place
    ///
    /// Applied once per card when the second player's deck is built.
    pub fn mirror_horizontally(&mut self) {
        self.influence = self.influence.mirrored();
    }

    /// Copy of this card with its influence grid mirrored
    pub fn mirrored(&self) -> Self {
        let mut card = self.clone();
        card.mirror_horizontally();
        card
    }

    /// Whether a card at `(card_row, card_col)` influences `(target_row, target_col)`
    ///
    /// Coordinates live in a 5x5 card-local frame; anything outside `[0, 5)`
    /// or further than two steps away on either axis is never influenced.
    pub fn check_influence(
        &self,
        card_row: i32,
        card_col: i32,
        target_row: i32,
        target_col: i32,
    ) -> bool {
        let frame = 0..GRID_SIZE as i32;
        if ![card_row, card_col, target_row, target_col]
            .iter()
            .all(|v| frame.contains(v))
        {
            return false;
        }
        let dr = (target_row - card_row) as isize;
        let dc = (target_col - card_col) as isize;
        self.influence.at_offset(dr, dc)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {}, value {})", self.name, self.cost, self.value)
    }
}
