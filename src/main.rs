//! tictactoe_mvc - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_mvc::{Settings, run_script, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(settings).await,
        Command::Script { steps } => run_script_mode(&settings, &steps),
    }
}

/// Plays the steps headlessly and prints the transcript and final board.
#[instrument(skip(settings))]
fn run_script_mode(settings: &Settings, steps: &[String]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(steps = steps.len(), "Running scripted game");

    let outcome = run_script(steps)?;
    for line in outcome.view().lines() {
        println!("{}", line);
    }
    for position in outcome.ignored() {
        println!("ignored: cell {} occupied", position.to_index());
    }
    println!();
    println!("{}", outcome.model().board().display());
    println!();
    println!("phase: {:?}", outcome.phase());

    Ok(())
}
