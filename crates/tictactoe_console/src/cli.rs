//! Command-line interface for the tic-tac-toe console.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the player who moves first (overrides the config file)
    #[arg(short = 'a', long)]
    pub player_a: Option<String>,

    /// Name of the player who moves second (overrides the config file)
    #[arg(short = 'b', long)]
    pub player_b: Option<String>,

    /// Path to a TOML config file with default player names
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
