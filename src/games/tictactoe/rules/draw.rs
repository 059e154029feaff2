//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    fn fill(marks: [Player; 9]) -> Board {
        let mut board = Board::new();
        for (i, player) in marks.into_iter().enumerate() {
            board.set(i, Square::Occupied(player)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
