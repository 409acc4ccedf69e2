//! Property tests for win detection and draw accounting.

use proptest::prelude::*;
use tictactoe::{Board, GameState, GameStatus, Player, Position, check_win, check_winner};

fn square_strategy() -> impl Strategy<Value = Option<Player>> {
    prop_oneof![Just(None), Just(Some(Player::X)), Just(Some(Player::O))]
}

fn board_from(cells: &[Option<Player>]) -> Board {
    let mut board = Board::new();
    for (pos, cell) in Position::ALL.into_iter().zip(cells) {
        if let Some(player) = cell {
            board.place(pos, *player).unwrap();
        }
    }
    board
}

/// Coordinate-based oracle, independent of the line table in the rules module.
fn uniform_line(cells: &[Option<Player>], player: Player) -> bool {
    let at = |row: usize, col: usize| cells[row * 3 + col] == Some(player);
    let row_win = (0..3).any(|r| (0..3).all(|c| at(r, c)));
    let col_win = (0..3).any(|c| (0..3).all(|r| at(r, c)));
    let diag = (0..3).all(|i| at(i, i));
    let anti = (0..3).all(|i| at(i, 2 - i));
    row_win || col_win || diag || anti
}

proptest! {
    #[test]
    fn check_win_matches_uniform_line(cells in prop::collection::vec(square_strategy(), 9)) {
        let board = board_from(&cells);
        for player in [Player::X, Player::O] {
            prop_assert_eq!(check_win(&board, player), uniform_line(&cells, player));
        }
    }

    #[test]
    fn turn_nine_only_on_draw(order in Just(Position::ALL.to_vec()).prop_shuffle()) {
        let mut game = GameState::new();
        for pos in order {
            if game.is_over() {
                break;
            }
            game.apply(pos).unwrap();
        }

        prop_assert!(game.is_over());
        if game.turn() == 9 {
            prop_assert_eq!(game.status(), GameStatus::Draw);
            prop_assert!(tictactoe::is_full(game.board()));
            prop_assert_eq!(check_winner(game.board()), None);
        } else {
            prop_assert!(matches!(game.status(), GameStatus::Won(_)));
        }
    }
}
