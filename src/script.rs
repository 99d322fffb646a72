//! Headless play: feeds a list of steps through the controller and records
//! every view call as a line of text.

use tracing::{debug, instrument};

use crate::controller::{Activation, GameController};
use crate::games::tictactoe::{GameError, GameState, Mover, Phase, Position};
use crate::view::{BoardEvent, CellElement, Renderer};

/// Renderer that writes each view call to a transcript instead of a screen.
#[derive(Debug, Clone, Default)]
pub struct TranscriptRenderer {
    lines: Vec<String>,
    attached: bool,
}

impl TranscriptRenderer {
    /// Creates an empty, unattached transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines in call order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether [`Renderer::attach`] has been called.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Renderer for TranscriptRenderer {
    fn attach(&mut self) {
        self.attached = true;
    }

    fn show_message(&mut self, text: &str) {
        self.lines.push(format!("message: {}", text));
    }

    fn index_of(&self, target: &CellElement) -> usize {
        *target.index()
    }

    fn paint_cell(&mut self, target: &CellElement, value: Mover) {
        self.lines.push(format!("cell {}: {}", target.index(), value));
    }

    fn clear(&mut self) {
        self.lines.push("clear".to_string());
    }
}

/// One parsed script step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Activate a cell.
    Activate(Position),
    /// Press restart.
    Restart,
}

impl Step {
    /// Parses `r`/`restart`, a cell number 1-9, or a cell label.
    pub fn parse(s: &str) -> Result<Self, ScriptError> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("r") || trimmed.eq_ignore_ascii_case("restart") {
            return Ok(Step::Restart);
        }
        Position::from_label_or_number(trimmed)
            .map(Step::Activate)
            .ok_or_else(|| ScriptError::UnknownStep(s.to_string()))
    }

    fn event(self) -> BoardEvent {
        match self {
            Step::Activate(position) => {
                BoardEvent::CellActivated(CellElement::new(position.to_index()))
            }
            Step::Restart => BoardEvent::RestartRequested,
        }
    }
}

/// Error from a scripted run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ScriptError {
    /// A step was neither a cell nor a restart.
    #[display("Unrecognised step {:?} (expected 1-9, a cell label, or r)", _0)]
    #[from(ignore)]
    UnknownStep(String),

    /// The model rejected an activation.
    #[display("{}", _0)]
    Game(GameError),
}

impl std::error::Error for ScriptError {}

/// Controller state after a scripted run, plus the activations the model
/// turned away.
#[derive(Debug)]
pub struct ScriptOutcome {
    controller: GameController<TranscriptRenderer>,
    ignored: Vec<Position>,
}

impl ScriptOutcome {
    /// Transcript of every view call.
    pub fn view(&self) -> &TranscriptRenderer {
        self.controller.view()
    }

    /// Final model.
    pub fn model(&self) -> &GameState {
        self.controller.model()
    }

    /// Final phase.
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Activated cells that were already occupied, in step order.
    pub fn ignored(&self) -> &[Position] {
        &self.ignored
    }
}

/// Parses and plays every step in order.
///
/// # Errors
///
/// Returns [`ScriptError::UnknownStep`] before playing anything if any step
/// fails to parse, or [`ScriptError::Game`] if the model rejects a step.
#[instrument(skip(steps))]
pub fn run_script<S: AsRef<str>>(steps: &[S]) -> Result<ScriptOutcome, ScriptError> {
    let steps = steps
        .iter()
        .map(|s| Step::parse(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut controller = GameController::new(GameState::new(), TranscriptRenderer::new());
    let mut ignored = Vec::new();
    for step in steps {
        let activation = controller.dispatch(step.event())?;
        debug!(?step, ?activation, "Step played");
        if let (Activation::Ignored, Step::Activate(position)) = (activation, step) {
            ignored.push(position);
        }
    }
    Ok(ScriptOutcome {
        controller,
        ignored,
    })
}
