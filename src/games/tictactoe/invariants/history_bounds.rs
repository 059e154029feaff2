//! History bounds invariant: the history starts at the empty board and the
//! current move points into it.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: history is non-empty, begins with the empty board, and
/// `current_move` indexes an existing snapshot.
pub struct HistoryBoundsInvariant;

impl Invariant<Game> for HistoryBoundsInvariant {
    fn holds(game: &Game) -> bool {
        let Some(first) = game.history().first() else {
            return false;
        };

        *first.board() == Board::new()
            && first.location().is_none()
            && game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the current move is within it"
    }
}
