//! Game phases: terminal outcomes and the status line derived from them.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner {
        /// The winning player.
        player: Player,
        /// Board indices of the completed line.
        line: [usize; 3],
    },
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Status line for the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    Winner(Player),
    /// The board is full with no line.
    Draw,
    /// The game continues with this player to move.
    NextTurn(Player),
}

impl Status {
    /// Builds the status from an optional outcome and the player to move.
    pub fn from_outcome(outcome: Option<Outcome>, next: Player) -> Self {
        match outcome {
            Some(Outcome::Winner { player, .. }) => Status::Winner(player),
            Some(Outcome::Draw) => Status::Draw,
            None => Status::NextTurn(next),
        }
    }

    /// True for `Winner` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextTurn(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => write!(f, "Draw"),
            Status::NextTurn(player) => write!(f, "Next player: {}", player),
        }
    }
}
