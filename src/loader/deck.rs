//! Deck file loader (.deck format)
//!
//! A deck is a sequence of card records. Each record is a header line
//! `name cost value` followed by five grid lines of five characters:
//! `I` marks an influenced cell, `X` an untouched one, and `C` the card's
//! own cell (only valid at the center).
//!
//! ```text
//! Security 1 2
//! XXXXX
//! XXIXX
//! XICIX
//! XXIXX
//! XXXXX
//! ```

use crate::core::{Card, InfluenceGrid, GRID_CENTER, GRID_SIZE};
use crate::{Result, SanguineError};
use std::fs;
use std::path::Path;

/// Deck loader for .deck files
pub struct DeckLoader;

impl DeckLoader {
    /// Load a deck from a file
    pub fn load_from_file(path: &Path) -> Result<DeckList> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a deck from its text content
    pub fn parse(content: &str) -> Result<DeckList> {
        let mut cards = Vec::new();
        let mut lines = content.lines().enumerate().map(|(i, line)| (i + 1, line));

        while let Some((line_no, header)) = lines.next() {
            let header = header.trim();
            if header.is_empty() {
                continue;
            }

            let (name, cost, value) = parse_header(line_no, header)?;
            let mut grid = [[false; GRID_SIZE]; GRID_SIZE];
            for (r, grid_row) in grid.iter_mut().enumerate() {
                let (line_no, line) = lines.next().ok_or_else(|| {
                    SanguineError::InvalidDeckFormat(format!(
                        "card '{name}' on line {line_no} ends after {r} of {GRID_SIZE} grid rows"
                    ))
                })?;
                parse_grid_row(line_no, line.trim(), r, grid_row)?;
            }

            let influence = InfluenceGrid::new(grid).map_err(|_| {
                SanguineError::InvalidDeckFormat(format!(
                    "card '{name}' on line {line_no} influences its own cell"
                ))
            })?;
            cards.push(Card::new(name, cost, value, influence));
        }

        Ok(DeckList { cards })
    }
}

fn parse_header(line_no: usize, header: &str) -> Result<(&str, u32, u32)> {
    let parts: Vec<&str> = header.split_whitespace().collect();
    let [name, cost, value] = parts[..] else {
        return Err(SanguineError::InvalidDeckFormat(format!(
            "line {line_no}: expected 'name cost value', got '{header}'"
        )));
    };
    let number = |field: &str, token: &str| {
        token.parse::<u32>().map_err(|_| {
            SanguineError::InvalidDeckFormat(format!(
                "line {line_no}: {field} must be a non-negative integer, got '{token}'"
            ))
        })
    };
    Ok((name, number("cost", cost)?, number("value", value)?))
}

fn parse_grid_row(line_no: usize, line: &str, r: usize, out: &mut [bool; GRID_SIZE]) -> Result<()> {
    if line.chars().count() != GRID_SIZE {
        return Err(SanguineError::InvalidDeckFormat(format!(
            "line {line_no}: grid row must be {GRID_SIZE} characters, got '{line}'"
        )));
    }
    for (c, ch) in line.chars().enumerate() {
        out[c] = match ch {
            'I' => true,
            'X' => false,
            'C' if r == GRID_CENTER && c == GRID_CENTER => false,
            'C' => {
                return Err(SanguineError::InvalidDeckFormat(format!(
                    "line {line_no}: 'C' is only allowed at the grid center"
                )))
            }
            other => {
                return Err(SanguineError::InvalidDeckFormat(format!(
                    "line {line_no}: invalid grid character '{other}'"
                )))
            }
        };
    }
    Ok(())
}

/// Cards of a deck in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckList {
    pub cards: Vec<Card>,
}

impl DeckList {
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Render the deck back into its text format
    pub fn to_deck_string(&self) -> String {
        self.cards
            .iter()
            .map(|card| {
                format!(
                    "{} {} {}\n{}\n",
                    card.name(),
                    card.cost(),
                    card.value(),
                    card.influence()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CARDS: &str = "\
Security 1 2
XXXXX
XXIXX
XICIX
XXIXX
XXXXX

Reach 2 3
XXXXX
XXXXX
XXCII
XXXXX
XXXXX
";

    #[test]
    fn test_parse_simple_deck() {
        let deck = DeckLoader::parse(TWO_CARDS).unwrap();
        assert_eq!(deck.total_cards(), 2);

        let security = &deck.cards[0];
        assert_eq!(security.name(), "Security");
        assert_eq!(security.cost(), 1);
        assert_eq!(security.value(), 2);
        assert!(security.influence().at_offset(-1, 0));
        assert!(security.influence().at_offset(0, 1));
        assert!(!security.influence().at_offset(0, 0));

        let reach = &deck.cards[1];
        assert_eq!(reach.influence().offsets().as_slice(), &[(0, 1), (0, 2)]);
    }

    #[test]
    fn test_round_trip() {
        let deck = DeckLoader::parse(TWO_CARDS).unwrap();
        let again = DeckLoader::parse(&deck.to_deck_string()).unwrap();
        assert_eq!(deck, again);
    }

    #[test]
    fn test_trims_grid_whitespace() {
        let deck = DeckLoader::parse("A 1 1\n XXXXX\nXXXXX \nXXCXX\nXXXXX\nXXXXX").unwrap();
        assert_eq!(deck.cards[0].influence(), InfluenceGrid::empty());
    }

    fn rejects(content: &str, needle: &str) {
        let err = DeckLoader::parse(content).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(
            err.to_string().contains(needle),
            "'{err}' does not mention '{needle}'"
        );
    }

    #[test]
    fn test_malformed_decks() {
        rejects("A 1\nXXXXX\nXXXXX\nXXCXX\nXXXXX\nXXXXX", "line 1");
        rejects("A one 1\nXXXXX\nXXXXX\nXXCXX\nXXXXX\nXXXXX", "cost");
        rejects("A 1 -2\nXXXXX\nXXXXX\nXXCXX\nXXXXX\nXXXXX", "value");
        rejects("A 1 1\nXXXXX\nXXXX\nXXCXX\nXXXXX\nXXXXX", "line 3");
        rejects("A 1 1\nXXXXX\nXXXXX\nXXCXX\nXXQXX\nXXXXX", "'Q'");
        rejects("A 1 1\nCXXXX\nXXXXX\nXXXXX\nXXXXX\nXXXXX", "center");
        rejects("A 1 1\nXXXXX\nXXXXX\nXXIXX\nXXXXX\nXXXXX", "own cell");
        rejects("A 1 1\nXXXXX\nXXXXX", "ends after 2");
    }

    #[test]
    fn test_empty_input_is_empty_deck() {
        assert_eq!(DeckLoader::parse("\n\n").unwrap().total_cards(), 0);
    }
}
