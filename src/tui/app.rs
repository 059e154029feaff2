//! Application state and logic.

use crate::config::Settings;
use crate::games::tictactoe::{Game, GameEvent, Position, RenderData, Step};
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the game.
    Event(GameEvent),
    /// Move the board cursor.
    MoveCursor(Step),
    /// Play at the board cursor.
    PlayCursor,
    /// Switch between board and move list.
    SwitchFocus,
    /// Select the previous move-list row.
    SelectPrevious,
    /// Select the next move-list row.
    SelectNext,
    /// Jump to the selected move-list row.
    JumpSelected,
    /// Leave the application.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    frame: RenderData,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let game = Game::with_sort_order(*settings.sort_order());
        let frame = game.render_data();
        Self {
            game,
            frame,
            cursor: Position::default(),
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Latest render data.
    pub fn frame(&self) -> &RenderData {
        &self.frame
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Event(event) => self.dispatch(event),
            Action::MoveCursor(step) => self.cursor = self.cursor.step(step),
            Action::PlayCursor => self.dispatch(GameEvent::CellClicked(self.cursor.to_index())),
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectNext => {
                self.selected = (self.selected + 1).min(self.frame.moves.len().saturating_sub(1))
            }
            Action::JumpSelected => {
                if let Some(entry) = self.frame.moves.get(self.selected) {
                    self.dispatch(GameEvent::HistoryItemClicked(entry.index));
                }
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        self.frame = self.game.handle(event);
        self.selected = self
            .frame
            .moves
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, SortOrder, Square, Status};

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_play_at_cursor() {
        let mut app = app();
        app.apply(Action::MoveCursor(Step::Up));
        app.apply(Action::PlayCursor);
        assert_eq!(
            app.frame().board.get(Position::TopCenter.to_index()),
            Some(Square::Occupied(Player::X))
        );
        assert_eq!(app.frame().status, Status::NextTurn(Player::O));
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_jump_to_selected_entry() {
        let mut app = app();
        for cell in [0, 4, 8] {
            app.apply(Action::Event(GameEvent::CellClicked(cell)));
        }
        app.apply(Action::SwitchFocus);
        assert_eq!(app.focus(), Focus::History);

        app.apply(Action::SelectPrevious);
        app.apply(Action::SelectPrevious);
        app.apply(Action::JumpSelected);

        assert_eq!(app.frame().moves.len(), 2);
        assert_eq!(app.selected(), 1);
        assert_eq!(app.frame().status, Status::NextTurn(Player::O));
    }

    #[test]
    fn test_selection_follows_sort_order() {
        let mut app = app();
        app.apply(Action::Event(GameEvent::CellClicked(0)));
        app.apply(Action::Event(GameEvent::SortToggleClicked));
        assert_eq!(app.frame().sort_order, SortOrder::Descending);
        // Newest move is listed first and is current.
        assert_eq!(app.selected(), 0);

        app.apply(Action::SelectNext);
        app.apply(Action::SelectNext);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
