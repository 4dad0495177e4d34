//! Translates terminal events into app actions.

use super::app::{Action, Screen};
use super::ui;
use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::instrument;

/// Arrow-key cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Moves the cursor one cell, stopping at the board edge.
#[instrument]
pub fn move_cursor(cursor: Position, dir: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match dir {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(2), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action for the given screen.
#[instrument]
pub fn action_for_key(screen: Screen, key: KeyCode) -> Option<Action> {
    match (screen, key) {
        (_, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => Some(Action::Quit),

        (Screen::Start, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::Start),
        (Screen::Start, _) => None,

        (Screen::Board, KeyCode::Up) => Some(Action::MoveCursor(CursorMove::Up)),
        (Screen::Board, KeyCode::Down) => Some(Action::MoveCursor(CursorMove::Down)),
        (Screen::Board, KeyCode::Left) => Some(Action::MoveCursor(CursorMove::Left)),
        (Screen::Board, KeyCode::Right) => Some(Action::MoveCursor(CursorMove::Right)),
        (Screen::Board, KeyCode::Enter | KeyCode::Char(' ')) => Some(Action::PlaceAtCursor),
        (Screen::Board, KeyCode::Char('u') | KeyCode::Char('U')) => Some(Action::Undo),
        (Screen::Board, KeyCode::Char('y') | KeyCode::Char('Y')) => Some(Action::Redo),
        (Screen::Board, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Action::Restart),
        (Screen::Board, KeyCode::Char(c)) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Place),
        (Screen::Board, _) => None,
    }
}

/// Maps a left click on a board cell to a placement.
#[instrument(skip(event))]
pub fn action_for_mouse(screen: Screen, event: MouseEvent, frame_area: Rect) -> Option<Action> {
    if screen != Screen::Board || event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    ui::position_at(frame_area, event.column, event.row).map(Action::Place)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, CursorMove::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, CursorMove::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, CursorMove::Left), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, CursorMove::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, CursorMove::Right), Position::BottomRight);
    }

    #[test]
    fn test_start_screen_keys() {
        assert_eq!(action_for_key(Screen::Start, KeyCode::Enter), Some(Action::Start));
        assert_eq!(action_for_key(Screen::Start, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for_key(Screen::Start, KeyCode::Char('5')), None);
    }

    #[test]
    fn test_digit_keys_place() {
        assert_eq!(
            action_for_key(Screen::Board, KeyCode::Char('1')),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(Screen::Board, KeyCode::Char('9')),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(action_for_key(Screen::Board, KeyCode::Char('0')), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(action_for_key(Screen::Board, KeyCode::Char('u')), Some(Action::Undo));
        assert_eq!(action_for_key(Screen::Board, KeyCode::Char('y')), Some(Action::Redo));
        assert_eq!(action_for_key(Screen::Board, KeyCode::Char('r')), Some(Action::Restart));
    }

    #[test]
    fn test_mouse_ignored_off_board_screen() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(action_for_mouse(Screen::Start, click, area), None);
    }
}
