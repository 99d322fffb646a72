//! Terminal front end: sets up the terminal and drives the event loop.

mod display;
mod input;

pub use display::{BoardDisplay, BoardLayout};
pub use input::{UiAction, handle_key, handle_mouse, move_cursor};

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::controller::{Activation, GameController};
use crate::games::tictactoe::GameState;

/// Runs the interactive game until the user quits.
pub async fn run_tui(settings: Settings) -> Result<()> {
    // Log to a file so output doesn't tear the alternate screen
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let controller = GameController::new(GameState::new(), BoardDisplay::new());
    let res = run_game(&mut terminal, controller, settings.poll_interval()).await;

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Tic-tac-toe TUI exited");
    res
}

/// Runs `restore` when dropped, so every exit after raw mode is enabled
/// puts the terminal back.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leaves raw mode, the alternate screen and mouse capture. Errors are
/// logged; there is nothing else to do with them during teardown.
fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Draw, poll, dispatch until the user quits.
#[instrument(skip_all)]
async fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    mut controller: GameController<BoardDisplay>,
    poll_interval: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| controller.view_mut().draw(f))?;

        if !event::poll(poll_interval)? {
            tokio::task::yield_now().await;
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => handle_key(controller.view_mut(), key),
            Event::Mouse(mouse) => handle_mouse(controller.view(), mouse),
            _ => UiAction::Idle,
        };

        match action {
            UiAction::Quit => {
                info!("User quit");
                return Ok(());
            }
            UiAction::Idle => {}
            UiAction::Board(board_event) => match controller.dispatch(board_event)? {
                Activation::Placed { board_full: true, .. } => {
                    info!(state = %controller.model().serialized_state(), "Board filled");
                }
                Activation::Placed { .. } | Activation::Ignored | Activation::Restarted => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::TerminalGuard;

    fn enter_alternate_screen() -> Result<(), &'static str> {
        Err("alternate screen unavailable")
    }

    fn setup_then_fail(restored: &Cell<u32>) -> Result<(), &'static str> {
        let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        enter_alternate_screen()?;
        Ok(())
    }

    #[test]
    fn test_guard_restores_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(setup_then_fail(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_once_on_normal_exit() {
        let restored = Cell::new(0);
        let guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        assert_eq!(restored.get(), 0);
        drop(guard);
        assert_eq!(restored.get(), 1);
    }
}
