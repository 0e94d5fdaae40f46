//! Per-player card zones (draw pile and hand)

use crate::core::Card;
use serde::{Deserialize, Serialize};

/// Places a player's cards can be outside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    DrawPile,
    Hand,
}

/// An ordered sequence of cards
///
/// For the draw pile the front is the next card drawn; for the hand the order
/// is draw order and card indices refer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardZone {
    pub cards: Vec<Card>,
}

impl CardZone {
    pub fn new() -> Self {
        Self::with_cards(Vec::new())
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        CardZone { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Remove the card at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        // remove() rather than swap_remove(): card indices must stay in draw order
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the next card off the front (for the draw pile)
    pub fn draw_top(&mut self) -> Option<Card> {
        self.remove(0)
    }
}

impl Default for CardZone {
    fn default() -> Self {
        Self::new()
    }
}

/// Collection of all zones for a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    pub draw_pile: CardZone,
    pub hand: CardZone,
}

impl PlayerZones {
    /// Zones holding `deck` as the draw pile and an empty hand
    pub fn new(deck: Vec<Card>) -> Self {
        PlayerZones {
            draw_pile: CardZone::with_cards(deck),
            hand: CardZone::new(),
        }
    }

    pub fn get_zone(&self, zone: Zone) -> &CardZone {
        match zone {
            Zone::DrawPile => &self.draw_pile,
            Zone::Hand => &self.hand,
        }
    }

    /// Move the next card of the draw pile into the hand
    ///
    /// Does nothing when the pile is empty or the hand already holds
    /// `max_hand_size` cards. Returns whether a card was drawn.
    pub fn draw_if_possible(&mut self, max_hand_size: usize) -> bool {
        if self.hand.len() >= max_hand_size {
            return false;
        }
        match self.draw_pile.draw_top() {
            Some(card) => {
                self.hand.add(card);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InfluenceGrid;

    fn named(name: &str) -> Card {
        Card::new(name, 1, 1, InfluenceGrid::empty())
    }

    #[test]
    fn test_card_zone() {
        let mut zone = CardZone::new();

        assert_eq!(zone.len(), 0);
        assert!(zone.is_empty());

        zone.add(named("a"));
        zone.add(named("b"));
        zone.add(named("c"));

        assert_eq!(zone.len(), 3);
        let removed = zone.remove(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(zone.get(1).unwrap().name(), "c");
        assert!(zone.remove(5).is_none());
    }

    #[test]
    fn test_draw_pile_front_first() {
        let mut pile = CardZone::with_cards(vec![named("first"), named("second")]);

        assert_eq!(pile.draw_top().unwrap().name(), "first");
        assert_eq!(pile.draw_top().unwrap().name(), "second");
        assert!(pile.is_empty());
        assert!(pile.draw_top().is_none());
    }

    #[test]
    fn test_draw_if_possible_respects_cap() {
        let mut zones = PlayerZones::new(vec![named("a"), named("b"), named("c")]);

        assert!(zones.draw_if_possible(2));
        assert!(zones.draw_if_possible(2));
        assert!(!zones.draw_if_possible(2));
        assert_eq!(zones.hand.len(), 2);
        assert_eq!(zones.draw_pile.len(), 1);

        assert!(zones.draw_if_possible(5));
        assert!(!zones.draw_if_possible(5));
        assert_eq!(zones.get_zone(Zone::Hand).len(), 3);
    }
}
