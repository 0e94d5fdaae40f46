//! Board rule tests played through the public GameState API

use sanguine_rs::core::{Card, Cell, InfluenceGrid, Player};
use sanguine_rs::game::{GameState, TurnEvent};
use similar_asserts::assert_eq;

fn cross(name: &str, cost: u32, value: u32) -> Card {
    Card::new(
        name,
        cost,
        value,
        InfluenceGrid::from_offsets(&[(-1, 0), (0, -1), (0, 1), (1, 0)]).unwrap(),
    )
}

fn cross_game() -> GameState {
    let deck: Vec<Card> = (0..15).map(|i| cross(&format!("Cross{i}"), 1, 3)).collect();
    let mut game = GameState::new(3, 5, deck, 5).unwrap();
    game.logger.enable_capture();
    game
}

#[test]
fn test_cross_card_scenario() {
    let mut game = cross_game();

    game.play_card(0, 0, 0).unwrap();

    assert!(matches!(
        game.cell(0, 0).unwrap(),
        Cell::Card {
            owner: Player::Red,
            ..
        }
    ));
    assert_eq!(
        game.cell(1, 0).unwrap(),
        Cell::Pawns {
            owner: Player::Red,
            count: 2
        }
    );
    assert_eq!(game.score(0, Player::Red).unwrap(), 3);
    assert_eq!(game.score(0, Player::Blue).unwrap(), 0);
    assert_eq!(
        game.board().to_string(),
        "3 R1__1 0\n0 2___1 0\n0 1___1 0"
    );
}

#[test]
fn test_played_cell_is_permanent() {
    let mut game = cross_game();
    game.play_card(0, 1, 0).unwrap();
    let card_cell = game.cell(1, 0).unwrap();

    // Blue fills its side, Red plays above and below the card
    game.play_card(0, 1, 4).unwrap();
    game.play_card(0, 0, 0).unwrap();
    game.pass().unwrap();
    game.play_card(0, 2, 0).unwrap();

    assert_eq!(game.cell(1, 0).unwrap(), card_cell);
    game.pass().unwrap();
    let err = game.play_card(0, 1, 0).unwrap_err();
    assert!(err.is_illegal_state());
}

#[test]
fn test_influence_leaves_opponent_pawns_alone() {
    // 1x3 board: Red's card pushes a pawn into the middle; Blue's card on the
    // right then influences that middle cell without taking it over.
    let deck: Vec<Card> = (0..3).map(|i| cross(&format!("c{i}"), 1, 1)).collect();
    let mut game = GameState::new(1, 3, deck, 1).unwrap();

    game.play_card(0, 0, 0).unwrap();
    assert_eq!(game.owner(0, 1).unwrap(), Some(Player::Red));
    game.play_card(0, 0, 2).unwrap();

    assert_eq!(
        game.cell(0, 1).unwrap(),
        Cell::Pawns {
            owner: Player::Red,
            count: 1
        }
    );
    assert_eq!(game.board().to_string(), "1 R1B 1");
}

#[test]
fn test_snapshots_are_detached() {
    let mut game = cross_game();
    let mut board = game.board();
    let mut hand = game.hand(Player::Red);

    board.play_card(&hand[0], Player::Red, 0, 0).unwrap();
    hand.clear();

    assert_eq!(
        game.cell(0, 0).unwrap(),
        Cell::Pawns {
            owner: Player::Red,
            count: 1
        }
    );
    assert_eq!(game.hand(Player::Red).len(), 5);
    assert!(game.can_play_card(0, 0, 0));
    assert_eq!(game.play_card(0, 0, 0).unwrap(), TurnEvent::TurnSwitched(Player::Blue));
}

#[test]
fn test_row_scores_track_cards_only() {
    let mut game = cross_game();
    game.play_card(0, 0, 0).unwrap(); // Red row 0
    game.play_card(0, 0, 4).unwrap(); // Blue row 0
    game.play_card(0, 1, 0).unwrap(); // Red row 1

    for row in 0..3 {
        let expected_red = if row < 2 { 3 } else { 0 };
        let expected_blue = if row == 0 { 3 } else { 0 };
        assert_eq!(game.score(row, Player::Red).unwrap(), expected_red);
        assert_eq!(game.score(row, Player::Blue).unwrap(), expected_blue);
    }
    assert_eq!(game.total_score(Player::Red), 6);
    assert_eq!(game.total_score(Player::Blue), 3);
}

#[test]
fn test_winner_by_total_score() {
    let mut game = cross_game();
    game.play_card(0, 0, 0).unwrap();
    game.play_card(0, 0, 4).unwrap();
    game.play_card(0, 1, 0).unwrap();
    assert_eq!(game.winner(), None);

    game.pass().unwrap();
    let event = game.pass().unwrap();
    assert_eq!(
        event,
        TurnEvent::GameOver {
            winner: Some(Player::Red),
            red_score: 6,
            blue_score: 3
        }
    );
    assert_eq!(game.winner(), Some(Player::Red));
}

#[test]
fn test_tied_game_has_no_winner() {
    let mut game = cross_game();
    game.play_card(0, 0, 0).unwrap();
    game.play_card(0, 0, 4).unwrap();
    game.pass().unwrap();
    game.pass().unwrap();

    assert!(game.is_game_over());
    assert_eq!(game.winner(), None);
}
