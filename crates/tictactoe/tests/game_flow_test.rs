//! Tests for whole-game flows through `GameState`.

use tictactoe::{GameState, GameStatus, MoveError, Player, Position, Square};

fn at(row: usize, col: usize) -> Position {
    Position::from_coords(row, col).unwrap()
}

#[test]
fn test_top_row_win_for_player_one() {
    let mut game = GameState::new();
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

    let mut status = GameStatus::InProgress;
    for (row, col) in moves {
        status = game.apply(at(row, col)).expect("legal move");
    }

    assert_eq!(status, GameStatus::Won(Player::X));
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.history()[1].player, Player::O);
}

#[test]
fn test_occupied_cell_rejected_without_advancing() {
    let mut game = GameState::new();
    game.apply(at(1, 1)).unwrap();

    let result = game.apply(at(1, 1));

    assert!(matches!(result, Err(MoveError::SquareOccupied(Position::Center))));
    assert_eq!(game.turn(), 1);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.board().get(at(1, 1)), Square::Occupied(Player::X));
    assert_eq!(game.board().occupied(), 1);
}

#[test]
fn test_draw_after_nine_turns() {
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
    let positions: Vec<Position> = moves.iter().map(|(r, c)| at(*r, *c)).collect();

    let game = GameState::replay(&positions).unwrap();

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.turn(), 9);
    assert!(game.check_invariants().is_ok());
}
