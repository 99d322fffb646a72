//! Rendering-surface abstraction for the board view.
//!
//! The controller talks to the view only through [`Renderer`]; the view
//! reports user input upward as [`BoardEvent`] values instead of calling
//! back into the controller.

use derive_getters::Getters;
use tracing::instrument;

use crate::games::tictactoe::Mover;

/// Status text shown once the ninth cell is filled.
pub const GAME_OVER_MESSAGE: &str = "Game Over! Please click RESTART to begin a new game";

/// Handle to a clickable cell on the rendering surface.
///
/// Every cell element carries a stable index attribute in 0..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct CellElement {
    /// Index attribute of the cell.
    index: usize,
}

impl CellElement {
    /// Creates a handle for the cell with the given index attribute.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Input captured by the view and routed to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A board cell was clicked or otherwise activated.
    CellActivated(CellElement),
    /// The restart control was clicked.
    RestartRequested,
}

/// Capabilities the controller needs from a rendering surface.
pub trait Renderer {
    /// Starts accepting input from the surface.
    fn attach(&mut self);

    /// Replaces the contents of the status-message area.
    fn show_message(&mut self, text: &str);

    /// Resolves a cell element to its board index.
    fn index_of(&self, target: &CellElement) -> usize;

    /// Paints `value` into the target cell.
    fn paint_cell(&mut self, target: &CellElement, value: Mover);

    /// Wipes every cell and the status message.
    fn clear(&mut self);

    /// Paints `value` into the target cell and, when the board is full,
    /// shows [`GAME_OVER_MESSAGE`].
    #[instrument(skip(self))]
    fn render_cell(&mut self, target: &CellElement, value: Mover, board_is_full: bool) {
        self.paint_cell(target, value);
        if board_is_full {
            self.show_message(GAME_OVER_MESSAGE);
        }
    }
}
