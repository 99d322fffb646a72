//! Command-line interface for tictactoe_mvc.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_mvc")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the log file location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a fixed sequence of steps without a terminal UI and print what
    /// the view was told to do
    Script {
        /// Cells 1-9 (or labels such as "center"), `r` to restart
        #[arg(required = true)]
        steps: Vec<String>,
    },
}
