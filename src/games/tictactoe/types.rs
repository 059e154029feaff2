//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

use super::action::MoveError;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is after `moves_played` moves.
    ///
    /// X moves on even counts, O on odd ones.
    pub fn for_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), MoveError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        *slot = square;
        Ok(())
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    pub fn with_mark(&self, index: usize, player: Player) -> Result<Self, MoveError> {
        let mut next = *self;
        next.set(index, Square::Occupied(player))?;
        Ok(next)
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Returns the indices where this board and `other` differ.
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        self.squares
            .iter()
            .zip(other.squares.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| index)
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// 1-based row and column of a square, as shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Location {
    /// Row, 1-3 from the top.
    pub row: usize,
    /// Column, 1-3 from the left.
    pub col: usize,
}

impl Location {
    /// Board index (0-8) of this location.
    pub fn index(&self) -> usize {
        (self.row - 1) * 3 + (self.col - 1)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
