//! Board model: cell contents plus whose turn it is.

use tracing::{debug, instrument};

use super::error::GameError;
use super::types::{Board, CELL_COUNT, CellValue, Mover};

/// Mover stored before any move is handed out, so the first move is X.
const INITIAL_MOVER: Mover = Mover::O;

/// Coarse game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At least one cell is still empty.
    InProgress,
    /// All nine cells are filled. Only a reset leaves this phase.
    Full,
}

/// Complete game model.
///
/// Owns the board and the turn state. Nothing else mutates either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_mover: Mover,
}

impl GameState {
    /// Creates a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mover: INITIAL_MOVER,
        }
    }

    /// Flips the turn and returns the mover who plays now.
    ///
    /// This is a destructive toggle: call it exactly once per accepted
    /// placement. The first call on a fresh or reset game returns [`Mover::X`].
    #[instrument(skip(self), fields(previous = %self.current_mover))]
    pub fn next_move(&mut self) -> Mover {
        self.current_mover = self.current_mover.opponent();
        debug!(mover = %self.current_mover, "Turn advanced");
        self.current_mover
    }

    /// Writes `value` into the cell at `index`.
    ///
    /// Does not check whether the cell is occupied; callers place only on
    /// empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not 0-8.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, value: Mover) -> Result<(), GameError> {
        self.board.set(index, CellValue::Occupied(value))
    }

    /// Reads the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is not 0-8.
    pub fn get_cell(&self, index: usize) -> Result<CellValue, GameError> {
        self.board.get(index)
    }

    /// Concatenated glyphs of all cells in index order.
    ///
    /// Empty cells contribute nothing, so the length is the number of
    /// occupied cells and reaches 9 exactly when the board is full.
    pub fn serialized_state(&self) -> String {
        self.board.cells().iter().map(|c| c.glyph()).collect()
    }

    /// Clears the board and restores the initial turn state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mover = INITIAL_MOVER;
        debug!("Game state reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.board.occupied() == CELL_COUNT
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.is_full() {
            Phase::Full
        } else {
            Phase::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
