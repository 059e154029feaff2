//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// First completed line in [`LINES`] order, with its owner.
pub(super) fn find_line(board: &Board) -> Option<(Player, [usize; 3])> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(player) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some((player, [a, b, c]))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_line(board).map(|(player, _)| player)
}

/// Returns the line that [`check_winner`] found, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    find_line(board).map(|(_, line)| line)
}
