//! Interactive console loop over the rules engine.
//!
//! The loop prompts the player in turn, hands their input to the engine,
//! re-prompts on rejected moves and stops when the engine reports game over.

use derive_new::new;
use std::io::{self, BufRead, Write};
use tictactoe_engine::{Game, InvalidMove, MoveOutcome, Outcome, Position};
use tracing::{debug, info, instrument};

/// How a console session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a win or a draw.
    Finished(Outcome),
    /// A player quit or input ran out before the game ended.
    Abandoned,
}

/// Parses typed input into `(row, col)`.
///
/// Accepts `row col` or `row,col`, a cell number `0-8`, or a cell label such
/// as `center` or `top-left`.
#[instrument]
pub fn parse_position(input: &str) -> Option<(usize, usize)> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        return Some((row, col));
    }

    Position::from_label_or_number(input).map(Position::coords)
}

/// A console session reading moves from `input` and writing to `output`.
#[derive(Debug, new)]
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Runs the game loop until the game ends or input is exhausted.
    #[instrument(skip_all)]
    pub fn play(&mut self, game: &mut Game) -> io::Result<SessionEnd> {
        writeln!(self.output, "{}", game.board_as_string())?;

        while let Some(player) = game.next_turn().cloned() {
            write!(
                self.output,
                "{}, your move (row col, 0-8 or a cell name; \"quit\" to stop): ",
                player
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("Input closed before the game ended");
                writeln!(self.output)?;
                return Ok(SessionEnd::Abandoned);
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") {
                info!(%player, "Player quit");
                writeln!(self.output, "Game abandoned.")?;
                return Ok(SessionEnd::Abandoned);
            }

            let Some(coords) = parse_position(line) else {
                debug!(input = line, "Unparsable position");
                writeln!(self.output, "Invalid move: {}", InvalidMove::OutOfRange)?;
                continue;
            };

            match game.make_move(&player, coords) {
                Ok(MoveOutcome::Continue) => {
                    writeln!(self.output, "{}", game.board_as_string())?;
                }
                Ok(MoveOutcome::GameOver(outcome)) => {
                    writeln!(self.output, "{}", game.board_as_string())?;
                    writeln!(self.output, "{}", outcome)?;
                    return Ok(SessionEnd::Finished(outcome));
                }
                Err(e) => {
                    writeln!(self.output, "Invalid move: {}", e)?;
                }
            }
        }

        // Only reachable when handed a game that had already ended.
        writeln!(self.output, "{}", InvalidMove::GameIsOver)?;
        Ok(SessionEnd::Abandoned)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
