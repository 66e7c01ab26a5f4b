//! The tic-tac-toe game engine.

use super::board::{Board, Square};
use super::contracts::LegalMove;
use super::error::{CorruptGame, InvalidMove, SetupError};
use super::invariants::{GameInvariants, InvariantSet, assert_invariants};
use super::outcome::{GameStatus, MoveOutcome, Outcome};
use super::player::{PlayerId, Seat};
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single game between two players.
///
/// The game owns its state outright and is mutated only through
/// [`Game::make_move`]. Callers sharing a game across threads must
/// serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    player_a: PlayerId,
    player_b: PlayerId,
    board: Board,
    next_turn: Option<Seat>,
    winner: Option<Seat>,
}

/// Starts a new game; `player_a` moves first.
pub fn start_new_game(player_a: impl Into<PlayerId>, player_b: impl Into<PlayerId>) -> Game {
    Game::new(player_a, player_b)
}

impl Game {
    /// Creates a new game with an empty board and `player_a` to move.
    ///
    /// Identifiers are not validated; see [`Game::try_new`].
    #[instrument(skip_all)]
    pub fn new(player_a: impl Into<PlayerId>, player_b: impl Into<PlayerId>) -> Self {
        let game = Self::from_parts(player_a, player_b, Board::new(), Some(Seat::First), None);
        if game.player_a == game.player_b {
            warn!(player = %game.player_a, "Both players share one identifier");
        }
        debug!(player_a = %game.player_a, player_b = %game.player_b, "New game");
        game
    }

    /// Creates a new game, rejecting identical identifiers.
    #[instrument(skip_all)]
    pub fn try_new(
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
    ) -> Result<Self, SetupError> {
        let (player_a, player_b) = (player_a.into(), player_b.into());
        if player_a == player_b {
            return Err(SetupError::DuplicatePlayers(player_a));
        }
        Ok(Self::new(player_a, player_b))
    }

    pub(crate) fn from_parts(
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
        board: Board,
        next_turn: Option<Seat>,
        winner: Option<Seat>,
    ) -> Self {
        Self {
            player_a: player_a.into(),
            player_b: player_b.into(),
            board,
            next_turn,
            winner,
        }
    }

    /// Places `player`'s mark at `position`, given as `(row, col)` or a [`Position`].
    ///
    /// On rejection the game is unchanged. On acceptance the board, winner and
    /// turn are updated before the outcome is returned.
    #[instrument(skip_all)]
    pub fn make_move(
        &mut self,
        player: impl AsRef<str>,
        position: impl Into<(usize, usize)>,
    ) -> Result<MoveOutcome, InvalidMove> {
        let player = player.as_ref();
        let coords = position.into();

        let placement = LegalMove::check(self, player, coords).inspect_err(|e| {
            warn!(player, row = coords.0, col = coords.1, error = %e, "Move rejected");
        })?;
        let seat = placement.seat;
        self.board.set(placement.position, Square::Occupied(seat));
        debug!(player, position = %placement.position, "Mark placed");

        let outcome = if let Some(line) = rules::completes_line(&self.board, seat) {
            debug!(?line, "Line completed");
            self.winner = Some(seat);
            self.next_turn = None;
            MoveOutcome::GameOver(Outcome::Win(self.player(seat).clone()))
        } else if rules::is_full(&self.board) {
            self.next_turn = None;
            MoveOutcome::GameOver(Outcome::Draw)
        } else {
            self.next_turn = Some(seat.opponent());
            MoveOutcome::Continue
        };

        assert_invariants(self);
        if let MoveOutcome::GameOver(result) = &outcome {
            info!(%result, "Game over");
        }
        Ok(outcome)
    }

    /// Returns the winner, if any. Draws and live games have none.
    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.map(|seat| self.player(seat))
    }

    /// Returns the player due to move, or `None` once the game has ended.
    pub fn next_turn(&self) -> Option<&PlayerId> {
        self.next_turn_seat().map(|seat| self.player(seat))
    }

    /// Seat due to move; `None` whenever [`Game::is_terminal`] holds.
    pub fn next_turn_seat(&self) -> Option<Seat> {
        if self.is_terminal() {
            None
        } else {
            self.next_turn
        }
    }

    /// Seat recorded as next to move, without masking by terminal state.
    pub(crate) fn recorded_next_turn(&self) -> Option<Seat> {
        self.next_turn
    }

    /// Seat of the winner, if any.
    pub fn winner_seat(&self) -> Option<Seat> {
        self.winner
    }

    /// True once a winner is decided or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || rules::is_full(&self.board)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.winner(), self.is_terminal()) {
            (Some(winner), _) => GameStatus::Won(winner.clone()),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// Empty squares still open to play; none once the game has ended.
    pub fn open_positions(&self) -> Vec<Position> {
        if self.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The opening player.
    pub fn player_a(&self) -> &PlayerId {
        &self.player_a
    }

    /// The responding player.
    pub fn player_b(&self) -> &PlayerId {
        &self.player_b
    }

    /// Identifier seated at `seat`.
    pub fn player(&self, seat: Seat) -> &PlayerId {
        match seat {
            Seat::First => &self.player_a,
            Seat::Second => &self.player_b,
        }
    }

    /// Seat held by `player`, if they are in this game.
    pub fn seat_of(&self, player: impl AsRef<str>) -> Option<Seat> {
        let player = player.as_ref();
        if self.player_a.as_str() == player {
            Some(Seat::First)
        } else if self.player_b.as_str() == player {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// Renders the board as three rows of cells separated by divider lines.
    ///
    /// Empty cells show as `-`, occupied cells as the owner's identifier.
    pub fn board_as_string(&self) -> String {
        let cells: Vec<&str> = self
            .board
            .squares()
            .iter()
            .map(|square| match square {
                Square::Empty => "-",
                Square::Occupied(seat) => self.player(*seat).as_str(),
            })
            .collect();

        let rows: Vec<String> = cells.chunks(3).map(|row| row.join("  |  ")).collect();
        format!("\n{}\n", rows.join("\n--------------\n"))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.board_as_string())
    }
}

/// Wire shape of a [`Game`], validated before it becomes one.
#[derive(Deserialize)]
struct GameRecord {
    player_a: PlayerId,
    player_b: PlayerId,
    board: Board,
    next_turn: Option<Seat>,
    winner: Option<Seat>,
}

impl TryFrom<GameRecord> for Game {
    type Error = CorruptGame;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Game::from_parts(
            record.player_a,
            record.player_b,
            record.board,
            record.next_turn,
            record.winner,
        );
        GameInvariants::check_all(&game).map_err(|violations| {
            warn!(count = violations.len(), "Rejected corrupt game record");
            CorruptGame {
                violations: violations.into_iter().map(|v| v.description).collect(),
            }
        })?;
        Ok(game)
    }
}
