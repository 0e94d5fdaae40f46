//! Board cell state machine
//!
//! A cell starts empty, collects pawns from influence, and becomes a card
//! cell once a card is played on it. Card cells are terminal.

use crate::core::{Card, Player};
use crate::{Result, SanguineError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most pawns a single cell can hold
pub const MAX_PAWNS: u8 = 3;

/// State of one board cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing on the cell
    #[default]
    Empty,

    /// One to three pawns of a single owner
    Pawns { owner: Player, count: u8 },

    /// A placed card; never changes again
    Card { card: Card, owner: Player },
}

impl Cell {
    /// Pawn cell with a validated count
    pub fn pawns(owner: Player, count: u8) -> Result<Self> {
        if !(1..=MAX_PAWNS).contains(&count) {
            return Err(SanguineError::InvalidArgument(format!(
                "pawn count must be between 1 and {MAX_PAWNS}, got {count}"
            )));
        }
        Ok(Cell::Pawns { owner, count })
    }

    /// Whether `card` could be placed here on pawn count alone
    ///
    /// Ownership is checked separately by the board and the game.
    pub fn can_accept(&self, card: &Card) -> bool {
        match self {
            Cell::Pawns { count, .. } => u32::from(*count) >= card.cost(),
            Cell::Empty | Cell::Card { .. } => false,
        }
    }

    /// State after `player` adds a pawn through influence
    ///
    /// Own stacks grow up to three; opponent stacks and cards are left as they are.
    pub fn add_pawn(self, player: Player) -> Cell {
        match self {
            Cell::Empty => Cell::Pawns {
                owner: player,
                count: 1,
            },
            Cell::Pawns { owner, count } if owner == player => Cell::Pawns {
                owner,
                count: (count + 1).min(MAX_PAWNS),
            },
            other => other,
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Pawns { owner, .. } | Cell::Card { owner, .. } => Some(*owner),
        }
    }

    /// Pawns on the cell (0 for empty and card cells)
    pub fn pawn_count(&self) -> u8 {
        match self {
            Cell::Pawns { count, .. } => *count,
            Cell::Empty | Cell::Card { .. } => 0,
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            Cell::Card { card, .. } => Some(card),
            Cell::Empty | Cell::Pawns { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_card(&self) -> bool {
        matches!(self, Cell::Card { .. })
    }
}

impl fmt::Display for Cell {
    /// Single-character token: `_`, the pawn count, or the owner tag
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "_"),
            Cell::Pawns { count, .. } => write!(f, "{count}"),
            Cell::Card { owner, .. } => write!(f, "{}", owner.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InfluenceGrid;

    fn card_with_cost(cost: u32) -> Card {
        Card::new("Test", cost, 1, InfluenceGrid::empty())
    }

    #[test]
    fn test_pawn_count_bounds() {
        assert!(Cell::pawns(Player::Red, 0).is_err());
        assert!(Cell::pawns(Player::Red, 4).is_err());
        for count in 1..=MAX_PAWNS {
            let cell = Cell::pawns(Player::Blue, count).unwrap();
            assert_eq!(cell.pawn_count(), count);
            assert_eq!(cell.owner(), Some(Player::Blue));
        }
    }

    #[test]
    fn test_empty_cell() {
        let cell = Cell::Empty;
        assert!(!cell.can_accept(&card_with_cost(0)));
        assert_eq!(cell.owner(), None);
        assert_eq!(cell.pawn_count(), 0);
        assert_eq!(cell.to_string(), "_");
        assert_eq!(
            cell.add_pawn(Player::Red),
            Cell::Pawns {
                owner: Player::Red,
                count: 1
            }
        );
    }

    #[test]
    fn test_pawns_accept_by_cost() {
        let cell = Cell::pawns(Player::Red, 2).unwrap();
        assert!(cell.can_accept(&card_with_cost(1)));
        assert!(cell.can_accept(&card_with_cost(2)));
        assert!(!cell.can_accept(&card_with_cost(3)));
        assert_eq!(cell.to_string(), "2");
    }

    #[test]
    fn test_add_pawn_saturates_at_three() {
        let mut cell = Cell::pawns(Player::Blue, 1).unwrap();
        for _ in 0..5 {
            cell = cell.add_pawn(Player::Blue);
        }
        assert_eq!(cell.pawn_count(), MAX_PAWNS);
    }

    #[test]
    fn test_add_pawn_leaves_opponent_stack() {
        let cell = Cell::pawns(Player::Blue, 2).unwrap();
        let after = cell.clone().add_pawn(Player::Red);
        assert_eq!(after, cell);
    }

    #[test]
    fn test_card_cell_is_terminal() {
        let cell = Cell::Card {
            card: card_with_cost(1),
            owner: Player::Red,
        };
        assert!(!cell.can_accept(&card_with_cost(0)));
        assert_eq!(cell.clone().add_pawn(Player::Red), cell);
        assert_eq!(cell.clone().add_pawn(Player::Blue), cell);
        assert_eq!(cell.pawn_count(), 0);
        assert_eq!(cell.to_string(), "R");
        assert_eq!(cell.card().map(|c| c.cost()), Some(1));
    }
}
