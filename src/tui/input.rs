//! Key bindings.

use crate::games::tictactoe::{GameEvent, Position, Step};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{Action, Focus};

/// Maps a key press to an action. Releases and repeats of unbound keys map to `None`.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Char('s'), _) => Some(Action::Event(GameEvent::SortToggleClicked)),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::SwitchFocus),
        (KeyCode::Char(c), _) if c.is_ascii_digit() => Position::from_key(c)
            .map(|pos| Action::Event(GameEvent::CellClicked(pos.to_index()))),

        (KeyCode::Up, Focus::Board) => Some(Action::MoveCursor(Step::Up)),
        (KeyCode::Down, Focus::Board) => Some(Action::MoveCursor(Step::Down)),
        (KeyCode::Left, Focus::Board) => Some(Action::MoveCursor(Step::Left)),
        (KeyCode::Right, Focus::Board) => Some(Action::MoveCursor(Step::Right)),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::PlayCursor),

        (KeyCode::Up, Focus::History) => Some(Action::SelectPrevious),
        (KeyCode::Down, Focus::History) => Some(Action::SelectNext),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => Some(Action::JumpSelected),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_play_directly() {
        assert_eq!(
            map_key(press(KeyCode::Char('1')), Focus::History),
            Some(Action::Event(GameEvent::CellClicked(0)))
        );
        assert_eq!(map_key(press(KeyCode::Char('0')), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            map_key(press(KeyCode::Up), Focus::Board),
            Some(Action::MoveCursor(Step::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Up), Focus::History),
            Some(Action::SelectPrevious)
        );
    }

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(
            map_key(press(KeyCode::Enter), Focus::Board),
            Some(Action::PlayCursor)
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), Focus::History),
            Some(Action::JumpSelected)
        );
    }

    #[test]
    fn test_global_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q')), Focus::Board), Some(Action::Quit));
        assert_eq!(
            map_key(press(KeyCode::Char('s')), Focus::History),
            Some(Action::Event(GameEvent::SortToggleClicked))
        );
        assert_eq!(map_key(press(KeyCode::Tab), Focus::Board), Some(Action::SwitchFocus));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, Focus::Board), None);
    }
}
