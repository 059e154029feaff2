//! Tic-tac-toe with a time-travel move history.

mod action;
mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{GameEvent, MoveError};
pub use game::{Game, Snapshot};
pub use phases::{Outcome, Status};
pub use position::{Position, Step};
pub use types::{BOARD_SIZE, Board, Location, Player, Square};
pub use view::{MoveEntry, RenderData, SortOrder};
