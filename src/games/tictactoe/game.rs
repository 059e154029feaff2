//! Game state manager: board history, the current move pointer, and sort order.
//!
//! The history is a list of immutable [`Snapshot`]s starting at the empty
//! board. Playing from an earlier move discards the later snapshots, and
//! jumping back commits to the truncated history.

use super::action::{GameEvent, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::types::{Board, Location, Player};
use super::view::{MoveEntry, RenderData, SortOrder};
use super::{Outcome, Position, Status};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One board state plus the square that changed to produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Board after the move.
    pub(crate) board: Board,
    /// Square written by the move; `None` for the initial board.
    pub(crate) location: Option<Location>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }
}

/// Tic-tac-toe game with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl Game {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_move: 0,
            sort_order,
        }
    }

    /// Builds a game by playing `cells` in order, stopping at the first rejected move.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            game.play(cell)?;
        }
        Ok(game)
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move].board
    }

    /// Player to move: X on even moves, O on odd ones.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Terminal outcome of the displayed board, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        rules::outcome(self.current_board())
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        Status::from_outcome(self.outcome(), self.next_player())
    }

    /// Squares of the completed line on the displayed board.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Squares played so far, in order. Replaying them rebuilds this game's board.
    pub fn played_cells(&self) -> Vec<usize> {
        self.history
            .iter()
            .filter_map(|snapshot| snapshot.location.map(|loc| loc.index()))
            .collect()
    }

    /// Places the next player's mark at `index` (0-8).
    ///
    /// Snapshots after the current move are discarded before the new one is
    /// appended.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the game untouched, when the index is off the
    /// board, the square is taken, or the displayed board is already won or full.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, index: usize) -> Result<Location, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = *self.current_board();

        if let Some(outcome) = rules::outcome(&board) {
            return Err(MoveError::GameOver(outcome));
        }
        if !board.is_empty(index) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.next_player();
        let snapshot = Snapshot {
            board: board.with_mark(index, player)?,
            location: Some(position.location()),
        };

        self.history.truncate(self.current_move + 1);
        self.history.push(snapshot);
        self.current_move = self.history.len() - 1;
        debug!(%player, %position, move_number = self.current_move, "Move applied");

        if let Some(outcome) = self.outcome() {
            info!(%outcome, "Game finished");
        }
        self.debug_check_invariants();
        Ok(position.location())
    }

    /// Makes `move_index` the current move and drops every later snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownMove`] if the index is past the end of the history.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), MoveError> {
        if move_index >= self.history.len() {
            return Err(MoveError::UnknownMove {
                requested: move_index,
                available: self.history.len(),
            });
        }

        let discarded = self.history.len() - (move_index + 1);
        self.current_move = move_index;
        self.history.truncate(move_index + 1);
        debug!(move_index, discarded, "Jumped in history");

        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// Move list in the given order.
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveEntry> {
        let mut moves: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                let description = match snapshot.location {
                    Some(location) => format!("Go to move #{} {}", index, location),
                    None => "Go to game start".to_string(),
                };
                MoveEntry {
                    index,
                    description,
                    is_current: index == self.current_move,
                }
            })
            .collect();

        if order == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }

    /// Snapshot of everything the view draws.
    pub fn render_data(&self) -> RenderData {
        RenderData {
            board: *self.current_board(),
            status: self.status(),
            winning_line: self.winning_line(),
            moves: self.move_list(self.sort_order),
            sort_order: self.sort_order,
        }
    }

    /// Applies a view event and returns the frame to draw next.
    ///
    /// Rejected moves and jumps are logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: GameEvent) -> RenderData {
        let result = match event {
            GameEvent::CellClicked(index) => self.play(index).map(|_| ()),
            GameEvent::HistoryItemClicked(index) => self.jump_to(index),
            GameEvent::SortToggleClicked => {
                self.toggle_sort_order();
                Ok(())
            }
        };

        if let Err(error) = result {
            debug!(%error, "Event ignored");
        }
        self.render_data()
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
