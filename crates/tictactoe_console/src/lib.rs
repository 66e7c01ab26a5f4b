//! Console front end for the tic-tac-toe rules engine.
//!
//! Everything here is presentation: argument parsing, player configuration
//! and the prompt loop. Game rules live in `tictactoe_engine`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig};
pub use console::{ConsoleSession, SessionEnd, parse_position};
