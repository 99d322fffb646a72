//! Tests for the terminal view: drawing, hit-testing and input mapping.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_mvc::{
    BoardDisplay, BoardEvent, BoardLayout, CellElement, GAME_OVER_MESSAGE, GameController,
    GameState, Mover, Position, Renderer, UiAction, handle_key, handle_mouse, move_cursor,
};

fn center_of(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn drawn_display(attached: bool) -> BoardDisplay {
    let mut display = BoardDisplay::new();
    if attached {
        display.attach();
    }
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|f| display.draw(f)).unwrap();
    display
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_layout_cells_are_row_major_and_disjoint() {
    let layout = BoardLayout::compute(Rect::new(0, 0, 60, 24));

    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let rect = layout.cells[index];
            assert!(rect.width > 0 && rect.height > 0);
            if col > 0 {
                assert!(rect.x > layout.cells[index - 1].x);
                assert_eq!(rect.y, layout.cells[index - 1].y);
            }
            if row > 0 {
                assert!(rect.y > layout.cells[index - 3].y);
                assert_eq!(rect.x, layout.cells[index - 3].x);
            }
        }
    }

    for index in 0..9 {
        let (x, y) = center_of(layout.cells[index]);
        assert_eq!(layout.cell_at(x, y), Some(index));
        assert!(!layout.restart_at(x, y));
    }
    let (x, y) = center_of(layout.restart);
    assert!(layout.restart_at(x, y));
    assert_eq!(layout.cell_at(x, y), None);
}

#[test]
fn test_click_resolves_to_cell_index() {
    let display = drawn_display(true);
    let layout = *display.layout().unwrap();

    for index in 0..9 {
        let (x, y) = center_of(layout.cells[index]);
        assert_eq!(
            display.resolve_click(x, y),
            Some(BoardEvent::CellActivated(CellElement::new(index)))
        );
    }

    let (x, y) = center_of(layout.restart);
    assert_eq!(display.resolve_click(x, y), Some(BoardEvent::RestartRequested));
    assert_eq!(display.resolve_click(0, 0), None);
}

#[test]
fn test_clicks_ignored_until_attached() {
    let display = drawn_display(false);
    let (x, y) = center_of(display.layout().unwrap().cells[4]);

    assert_eq!(display.resolve_click(x, y), None);
    assert_eq!(handle_mouse(&display, click(x, y)), UiAction::Idle);
    assert_eq!(display.cell_element(Position::Center), None);
}

#[test]
fn test_clicks_ignored_before_first_draw() {
    let mut display = BoardDisplay::new();
    display.attach();
    assert_eq!(display.resolve_click(10, 10), None);
}

#[test]
fn test_mouse_only_left_press_counts() {
    let display = drawn_display(true);
    let (x, y) = center_of(display.layout().unwrap().cells[2]);

    assert_eq!(
        handle_mouse(&display, click(x, y)),
        UiAction::Board(BoardEvent::CellActivated(CellElement::new(2)))
    );

    let right = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..click(x, y)
    };
    assert_eq!(handle_mouse(&display, right), UiAction::Idle);

    let release = MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        ..click(x, y)
    };
    assert_eq!(handle_mouse(&display, release), UiAction::Idle);
}

#[test]
fn test_render_cell_paints_and_announces_full_board() {
    let mut display = BoardDisplay::new();
    let target = CellElement::new(5);

    display.render_cell(&target, Mover::O, false);
    assert_eq!(display.painted(5), Some(Mover::O));
    assert_eq!(display.message(), "");

    display.render_cell(&CellElement::new(6), Mover::X, true);
    assert_eq!(display.message(), GAME_OVER_MESSAGE);

    display.clear();
    for index in 0..9 {
        assert_eq!(display.painted(index), None);
    }
    assert_eq!(display.message(), "");
}

#[test]
fn test_index_of_reads_element_index() {
    let display = BoardDisplay::new();
    assert_eq!(display.index_of(&CellElement::new(7)), 7);
}

#[test]
fn test_draw_shows_marks_and_message() {
    let mut controller = GameController::new(GameState::new(), BoardDisplay::new());
    for index in 0..9 {
        controller
            .handle_cell_activated(&CellElement::new(index))
            .unwrap();
    }

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| controller.view_mut().draw(f)).unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains(GAME_OVER_MESSAGE));
    assert!(text.contains("RESTART"));
    // X moves on even turns: five of the nine cells.
    assert_eq!(text.matches('X').count(), 5);
}

#[test]
fn test_short_terminal_keeps_status_and_restart_visible() {
    let mut controller = GameController::new(GameState::new(), BoardDisplay::new());
    for index in 0..9 {
        controller
            .handle_cell_activated(&CellElement::new(index))
            .unwrap();
    }

    let mut terminal = Terminal::new(TestBackend::new(80, 18)).unwrap();
    terminal.draw(|f| controller.view_mut().draw(f)).unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains(GAME_OVER_MESSAGE));
    assert!(text.contains("RESTART"));

    let layout = *controller.view().layout().unwrap();
    assert_eq!(layout.status.height, 3);
    assert_eq!(layout.restart.height, 3);
    let (x, y) = center_of(layout.restart);
    assert_eq!(
        controller.view().resolve_click(x, y),
        Some(BoardEvent::RestartRequested)
    );
}

#[test]
fn test_digit_keys_activate_cells() {
    let mut display = BoardDisplay::new();
    display.attach();

    assert_eq!(
        handle_key(&mut display, press(KeyCode::Char('1'))),
        UiAction::Board(BoardEvent::CellActivated(CellElement::new(0)))
    );
    assert_eq!(
        handle_key(&mut display, press(KeyCode::Char('9'))),
        UiAction::Board(BoardEvent::CellActivated(CellElement::new(8)))
    );
    assert_eq!(display.cursor(), Position::BottomRight);
    assert_eq!(handle_key(&mut display, press(KeyCode::Char('0'))), UiAction::Idle);
}

#[test]
fn test_cursor_keys_then_enter() {
    let mut display = BoardDisplay::new();
    display.attach();
    assert_eq!(display.cursor(), Position::Center);

    assert_eq!(handle_key(&mut display, press(KeyCode::Up)), UiAction::Idle);
    assert_eq!(handle_key(&mut display, press(KeyCode::Left)), UiAction::Idle);
    assert_eq!(display.cursor(), Position::TopLeft);

    assert_eq!(
        handle_key(&mut display, press(KeyCode::Enter)),
        UiAction::Board(BoardEvent::CellActivated(CellElement::new(0)))
    );
}

#[test]
fn test_restart_and_quit_keys() {
    let mut display = BoardDisplay::new();
    assert_eq!(handle_key(&mut display, press(KeyCode::Char('r'))), UiAction::Idle);

    display.attach();
    assert_eq!(
        handle_key(&mut display, press(KeyCode::Char('r'))),
        UiAction::Board(BoardEvent::RestartRequested)
    );
    assert_eq!(handle_key(&mut display, press(KeyCode::Char('q'))), UiAction::Quit);
    assert_eq!(handle_key(&mut display, press(KeyCode::Esc)), UiAction::Quit);
}

#[test]
fn test_key_release_is_ignored() {
    let mut display = BoardDisplay::new();
    display.attach();
    let mut release = press(KeyCode::Char('5'));
    release.kind = KeyEventKind::Release;
    assert_eq!(handle_key(&mut display, release), UiAction::Idle);
}

#[test]
fn test_move_cursor_stops_at_edges() {
    assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
    assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
    assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
    assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
}
