//! Core domain types for tic-tac-toe.

use super::error::GameError;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mover {
    /// Player X (moves first).
    #[display("X")]
    X,
    /// Player O (moves second).
    #[display("O")]
    O,
}

impl Mover {
    /// Returns the other mover.
    pub fn opponent(self) -> Self {
        match self {
            Mover::X => Mover::O,
            Mover::O => Mover::X,
        }
    }

    /// Glyph painted into a cell for this mover.
    pub fn glyph(self) -> &'static str {
        match self {
            Mover::X => "X",
            Mover::O => "O",
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a mover's mark.
    Occupied(Mover),
}

impl CellValue {
    /// Glyph for this value; empty cells contribute nothing.
    pub fn glyph(self) -> &'static str {
        match self {
            CellValue::Empty => "",
            CellValue::Occupied(mover) => mover.glyph(),
        }
    }

    /// Returns true for [`CellValue::Empty`].
    pub fn is_empty(self) -> bool {
        self == CellValue::Empty
    }
}

/// 3x3 board, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellValue; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellValue::Empty; CELL_COUNT],
        }
    }

    /// Reads the cell at `index`.
    pub fn get(&self, index: usize) -> Result<CellValue, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange(index))
    }

    /// Overwrites the cell at `index`. Occupancy is not checked here.
    pub fn set(&mut self, index: usize, value: CellValue) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange(index))?;
        *cell = value;
        Ok(())
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[CellValue; CELL_COUNT] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [CellValue::Empty; CELL_COUNT];
    }

    /// Formats the board as a human-readable grid, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    CellValue::Empty => result.push_str(&(index + 1).to_string()),
                    CellValue::Occupied(mover) => result.push_str(mover.glyph()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
