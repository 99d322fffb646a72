//! Two-player tic-tac-toe with a strict model/view/controller split.
//!
//! # Architecture
//!
//! - **Model**: [`GameState`] owns the board and whose turn it is
//! - **View**: anything implementing [`Renderer`]; [`BoardDisplay`] paints to
//!   a terminal and turns clicks and keys into [`BoardEvent`]s
//! - **Controller**: [`GameController`] routes view events into model
//!   mutations and view updates, and owns the restart flow
//!
//! The game ends only when all nine cells are filled; there is no win
//! detection.
//!
//! # Example
//!
//! ```
//! use tictactoe_mvc::{BoardEvent, CellElement, GameController, GameState, TranscriptRenderer};
//!
//! let mut controller = GameController::new(GameState::new(), TranscriptRenderer::new());
//! controller
//!     .dispatch(BoardEvent::CellActivated(CellElement::new(4)))
//!     .unwrap();
//! assert_eq!(controller.model().serialized_state(), "X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod script;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Model
pub use games::tictactoe::{
    Board, CELL_COUNT, CellValue, GameError, GameState, Mover, Phase, Position,
};

// Crate-level exports - View
pub use view::{BoardEvent, CellElement, GAME_OVER_MESSAGE, Renderer};

// Crate-level exports - Controller
pub use controller::{Activation, GameController};

// Crate-level exports - Terminal front end
pub use tui::{BoardDisplay, BoardLayout, UiAction, handle_key, handle_mouse, move_cursor, run_tui};

// Crate-level exports - Headless play
pub use script::{ScriptError, ScriptOutcome, Step, TranscriptRenderer, run_script};
