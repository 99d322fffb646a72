//! Terminal board view: paints cells and the status message, and resolves
//! clicks back to cells.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument, warn};

use crate::games::tictactoe::{CELL_COUNT, Mover, Position};
use crate::view::{BoardEvent, CellElement, Renderer};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const RESTART_LABEL: &str = "RESTART";
const RESTART_WIDTH: u16 = 13;
const HELP_TEXT: &str = "Click a cell or press 1-9 | arrows + Enter | r: restart | q: quit";

/// Screen regions of the clickable parts of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Rectangle of each cell, by board index.
    pub cells: [Rect; CELL_COUNT],
    /// Rectangle of the restart button.
    pub restart: Rect,
    /// Status-message region.
    pub status: Rect,
    /// Title region.
    pub title: Rect,
    /// Help line region.
    pub help: Rect,
    /// Gaps between cell rows.
    pub horizontal_rules: [Rect; 2],
    /// Gaps between cell columns, two per cell row.
    pub vertical_rules: [Rect; 6],
}

impl BoardLayout {
    /// Splits the frame area into title, board, status, restart button and help line.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Fill(1),   // Board, shrinks first on short terminals
                Constraint::Length(3), // Status
                Constraint::Length(3), // Restart
                Constraint::Length(1), // Help
            ])
            .split(area);

        let board_area = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board_area);

        let mut cells = [Rect::default(); CELL_COUNT];
        let mut vertical_rules = [Rect::default(); 6];
        for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);
            for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                cells[row * 3 + col] = cell_area;
            }
            vertical_rules[row * 2] = cols[1];
            vertical_rules[row * 2 + 1] = cols[3];
        }

        Self {
            cells,
            restart: center_rect(chunks[3], RESTART_WIDTH, 3),
            status: chunks[2],
            title: chunks[0],
            help: chunks[4],
            horizontal_rules: [rows[1], rows[3]],
            vertical_rules,
        }
    }

    /// Cell index under the given terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells
            .iter()
            .position(|rect| contains(*rect, column, row))
    }

    /// True if the coordinate falls on the restart button.
    pub fn restart_at(&self, column: u16, row: u16) -> bool {
        contains(self.restart, column, row)
    }
}

/// The terminal view of the board.
///
/// Holds only what is painted on screen: one glyph per cell, the status
/// message, and the keyboard highlight. Game data lives in the model.
#[derive(Debug, Clone, Default)]
pub struct BoardDisplay {
    cells: [Option<Mover>; CELL_COUNT],
    message: String,
    cursor: Position,
    attached: bool,
    layout: Option<BoardLayout>,
}

impl BoardDisplay {
    /// Creates a blank, unattached display.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph currently painted in the cell at `index`.
    pub fn painted(&self, index: usize) -> Option<Mover> {
        self.cells.get(index).copied().flatten()
    }

    /// Current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether input is being accepted.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Keyboard highlight.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard highlight.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Layout from the most recent draw, if any.
    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }

    /// Element handle for a cell, `None` until the display is attached.
    pub fn cell_element(&self, position: Position) -> Option<CellElement> {
        self.attached
            .then(|| CellElement::new(position.to_index()))
    }

    /// Resolves a click at a terminal coordinate to a board event.
    ///
    /// Clicks before [`Renderer::attach`], before the first draw, or outside
    /// every control resolve to nothing.
    #[instrument(skip(self))]
    pub fn resolve_click(&self, column: u16, row: u16) -> Option<BoardEvent> {
        if !self.attached {
            return None;
        }
        let layout = self.layout.as_ref()?;

        if let Some(index) = layout.cell_at(column, row) {
            debug!(index, "Click resolved to cell");
            return Some(BoardEvent::CellActivated(CellElement::new(index)));
        }
        if layout.restart_at(column, row) {
            debug!("Click resolved to restart button");
            return Some(BoardEvent::RestartRequested);
        }
        None
    }

    /// Draws the whole view and records the layout for hit-testing.
    pub fn draw(&mut self, frame: &mut Frame) {
        let layout = BoardLayout::compute(frame.area());

        let title = Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, layout.title);

        for (index, area) in layout.cells.iter().enumerate() {
            self.draw_cell(frame, *area, index);
        }
        draw_grid_lines(frame, &layout);

        let status = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, layout.status);

        let restart = Paragraph::new(RESTART_LABEL)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(restart, layout.restart);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);

        self.layout = Some(layout);
    }

    fn draw_cell(&self, frame: &mut Frame, area: Rect, index: usize) {
        let (symbol, base_style) = match self.painted(index) {
            None => ("   ", Style::default().fg(Color::DarkGray)),
            Some(Mover::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Some(Mover::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        };

        let style = if self.cursor.to_index() == index {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let middle = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, middle);
    }
}

impl Renderer for BoardDisplay {
    #[instrument(skip(self))]
    fn attach(&mut self) {
        self.attached = true;
        debug!("Board display accepting input");
    }

    fn show_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    fn index_of(&self, target: &CellElement) -> usize {
        *target.index()
    }

    fn paint_cell(&mut self, target: &CellElement, value: Mover) {
        let index = self.index_of(target);
        match self.cells.get_mut(index) {
            Some(slot) => *slot = Some(value),
            None => warn!(index, "Paint request for a cell that does not exist"),
        }
    }

    #[instrument(skip(self))]
    fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
        self.message.clear();
    }
}

fn draw_grid_lines(frame: &mut Frame, layout: &BoardLayout) {
    let style = Style::default().fg(Color::DarkGray);

    for area in layout.horizontal_rules {
        let rule = Paragraph::new("─".repeat(area.width as usize)).style(style);
        frame.render_widget(rule, area);
    }
    for area in layout.vertical_rules {
        let rule = Paragraph::new(vec![Line::raw("│"); area.height as usize]).style(style);
        frame.render_widget(rule, area);
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
