//! Errors raised by the board model.

/// Error from reading or writing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The target cell already holds a mark.
    ///
    /// The controller recovers from this locally by ignoring the activation.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The index does not name one of the nine cells.
    #[display("Cell index {} is out of range (expected 0-8)", _0)]
    IndexOutOfRange(usize),
}

impl std::error::Error for GameError {}
