//! Controller sequencing model reads and writes with view updates.

use tracing::{debug, info, instrument};

use crate::games::tictactoe::{GameError, GameState, Mover, Phase};
use crate::view::{BoardEvent, CellElement, Renderer};

/// What a cell activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A mark was placed.
    Placed {
        /// Board index of the placement.
        index: usize,
        /// Mover whose mark was placed.
        mover: Mover,
        /// Whether this placement filled the board.
        board_full: bool,
    },
    /// The cell was already occupied; nothing changed.
    Ignored,
    /// The board was reset.
    Restarted,
}

/// Routes view events to model mutations and resulting view updates.
///
/// The only component that touches both the model and the view.
#[derive(Debug)]
pub struct GameController<R> {
    model: GameState,
    view: R,
}

impl<R: Renderer> GameController<R> {
    /// Wires the controller to its model and view and attaches the view's
    /// input handling.
    #[instrument(skip(model, view))]
    pub fn new(model: GameState, mut view: R) -> Self {
        view.attach();
        info!("Controller attached to view");
        Self { model, view }
    }

    /// Routes a view event to its handler.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::IndexOutOfRange`] from cell activations.
    pub fn dispatch(&mut self, event: BoardEvent) -> Result<Activation, GameError> {
        match event {
            BoardEvent::CellActivated(target) => self.handle_cell_activated(&target),
            BoardEvent::RestartRequested => {
                self.handle_restart();
                Ok(Activation::Restarted)
            }
        }
    }

    /// Places the next mover's mark on an empty cell and renders it.
    ///
    /// Activating an occupied cell is a no-op: no turn flip, no render.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if the element's index is not 0-8.
    #[instrument(skip(self))]
    pub fn handle_cell_activated(&mut self, target: &CellElement) -> Result<Activation, GameError> {
        let index = self.view.index_of(target);

        match self.ensure_vacant(index) {
            Ok(()) => {}
            Err(GameError::CellOccupied(index)) => {
                debug!(index, "Cell already occupied, ignoring activation");
                return Ok(Activation::Ignored);
            }
            Err(e) => return Err(e),
        }

        let mover = self.model.next_move();
        self.model.set_cell(index, mover)?;
        let board_full = self.model.serialized_state().len() == 9;
        self.view.render_cell(target, mover, board_full);

        debug!(index, %mover, board_full, "Mark placed");
        if board_full {
            info!("Board full, game over");
        }

        Ok(Activation::Placed {
            index,
            mover,
            board_full,
        })
    }

    /// Resets the model and wipes the view.
    #[instrument(skip(self))]
    pub fn handle_restart(&mut self) {
        self.model.reset();
        self.view.clear();
        info!("Game restarted");
    }

    /// Read access to the model.
    pub fn model(&self) -> &GameState {
        &self.model
    }

    /// Read access to the view.
    pub fn view(&self) -> &R {
        &self.view
    }

    /// Mutable access to the view for surface bookkeeping such as layout.
    pub fn view_mut(&mut self) -> &mut R {
        &mut self.view
    }

    /// Current game phase.
    pub fn phase(&self) -> Phase {
        self.model.phase()
    }

    fn ensure_vacant(&self, index: usize) -> Result<(), GameError> {
        if self.model.get_cell(index)?.is_empty() {
            Ok(())
        } else {
            Err(GameError::CellOccupied(index))
        }
    }
}
