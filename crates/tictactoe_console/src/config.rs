//! Player configuration for the console.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Names used for the two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Player who moves first.
    #[serde(default = "default_player_a")]
    player_a: String,

    /// Player who moves second.
    #[serde(default = "default_player_b")]
    player_b: String,
}

fn default_player_a() -> String {
    "X".to_string()
}

fn default_player_b() -> String {
    "O".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_a = %config.player_a, player_b = %config.player_b, "Config loaded");
        Ok(config)
    }

    /// Resolves the effective configuration: file (if any), then flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line names over this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(name) = &cli.player_a {
            self.player_a = name.clone();
        }
        if let Some(name) = &cli.player_b {
            self.player_b = name.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
