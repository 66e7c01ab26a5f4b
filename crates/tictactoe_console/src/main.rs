//! Tic-tac-toe at the console.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_console::{Cli, ConsoleConfig, ConsoleSession, SessionEnd};
use tictactoe_engine::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConsoleConfig::resolve(&cli)?;
    let mut game = Game::try_new(config.player_a().as_str(), config.player_b().as_str())
        .context("Cannot start game")?;

    info!(player_a = %game.player_a(), player_b = %game.player_b(), "Starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());
    match session.play(&mut game).context("Console I/O failed")? {
        SessionEnd::Finished(outcome) => info!(%outcome, "Game finished"),
        SessionEnd::Abandoned => info!("Game abandoned"),
    }

    Ok(())
}
