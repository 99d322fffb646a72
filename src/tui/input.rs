//! Keyboard and mouse handling for the board view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, instrument};

use super::display::BoardDisplay;
use crate::games::tictactoe::Position;
use crate::view::BoardEvent;

/// What the event loop should do with a raw terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Forward to the controller.
    Board(BoardEvent),
    /// Leave the game.
    Quit,
    /// Nothing to do (cursor moves land here too).
    Idle,
}

/// Moves the cursor one cell in the direction of an arrow key, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::at(r, col)),
        KeyCode::Down => Position::at(row + 1, col),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::at(row, c)),
        KeyCode::Right => Position::at(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps a key press to an action, updating the display's cursor for arrows.
#[instrument(skip(display))]
pub fn handle_key(display: &mut BoardDisplay, key: KeyEvent) -> UiAction {
    // crossterm reports both press and release on some platforms
    if key.kind == KeyEventKind::Release {
        return UiAction::Idle;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => UiAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if display.is_attached() {
                UiAction::Board(BoardEvent::RestartRequested)
            } else {
                UiAction::Idle
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let Some(position) = Position::from_label_or_number(&c.to_string()) else {
                return UiAction::Idle;
            };
            display.set_cursor(position);
            activate(display, position)
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate(display, display.cursor()),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            let cursor = move_cursor(display.cursor(), code);
            debug!(cursor = %cursor, "Cursor moved");
            display.set_cursor(cursor);
            UiAction::Idle
        }
        _ => UiAction::Idle,
    }
}

/// Maps a mouse event to an action. Only left-button presses count as clicks.
#[instrument(skip(display))]
pub fn handle_mouse(display: &BoardDisplay, mouse: MouseEvent) -> UiAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => display
            .resolve_click(mouse.column, mouse.row)
            .map_or(UiAction::Idle, UiAction::Board),
        _ => UiAction::Idle,
    }
}

fn activate(display: &BoardDisplay, position: Position) -> UiAction {
    display
        .cell_element(position)
        .map_or(UiAction::Idle, |target| {
            UiAction::Board(BoardEvent::CellActivated(target))
        })
}
