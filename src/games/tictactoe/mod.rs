mod error;
mod position;
mod state;
mod types;

pub use error::GameError;
pub use position::Position;
pub use state::{GameState, Phase};
pub use types::{Board, CELL_COUNT, CellValue, Mover};
