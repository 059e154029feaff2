//! First-class action types for tic-tac-toe.
//!
//! User input arrives as [`GameEvent`]s. Rule violations come back as
//! [`MoveError`] values; they never panic and never change the game.

use super::{Outcome, Position};
use serde::{Deserialize, Serialize};

/// An input event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A board square (0-8) was selected.
    CellClicked(usize),
    /// An entry of the move list was selected.
    HistoryItemClicked(usize),
    /// The sort-order toggle was pressed.
    SortToggleClicked,
}

/// Reason a move or jump was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board is terminal.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),

    /// A jump targeted a move that is not in the history.
    #[display("Move #{} does not exist (history has {} entries)", requested, available)]
    UnknownMove {
        /// Requested move index.
        requested: usize,
        /// Number of snapshots in the history.
        available: usize,
    },
}

impl std::error::Error for MoveError {}
