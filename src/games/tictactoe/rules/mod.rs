//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from history storage so the state manager and the view can
//! share one source of truth for terminal detection.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board: `None` while play can continue.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some((player, line)) = win::find_line(board) {
        Some(Outcome::Winner { player, line })
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// True when no further move is accepted on this board.
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_some()
}
