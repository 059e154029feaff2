//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Game**: the state manager. It owns the snapshot history, the current
//!   move and the move-list sort order.
//! - **Rules**: pure win/draw evaluation over a board.
//! - **Invariants**: history properties checked after every transition.
//! - **RenderData**: what a view draws; returned by [`Game::handle`] after
//!   every input event.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Game, GameEvent, Player, Status};
//!
//! let mut game = Game::new();
//! for cell in [0, 3, 4, 5, 8] {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//! assert_eq!(game.winning_line(), Some([0, 4, 8]));
//!
//! // Jump back two moves; the later moves are discarded.
//! let frame = game.handle(GameEvent::HistoryItemClicked(3));
//! assert_eq!(frame.status, Status::NextTurn(Player::O));
//! assert_eq!(frame.moves.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, Game, GameEvent, Location, MoveEntry, MoveError, Outcome, Player, Position,
    RenderData, Snapshot, SortOrder, Square, Status, Step,
};
