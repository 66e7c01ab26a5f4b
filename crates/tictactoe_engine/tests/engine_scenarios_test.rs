//! Scenario tests for the tic-tac-toe engine public API.

use tictactoe_engine::{
    Game, GameStatus, InvalidMove, MoveOutcome, Outcome, PlayerId, Position, start_new_game,
};

const EMPTY_BOARD: &str = "\n-  |  -  |  -\n--------------\n-  |  -  |  -\n--------------\n-  |  -  |  -\n";

fn id(s: &str) -> PlayerId {
    PlayerId::from(s)
}

#[test]
fn test_fresh_game_queries() {
    let game = start_new_game("X", "O");
    assert_eq!(game.next_turn(), Some(&id("X")));
    assert_eq!(game.winner(), None);
    assert_eq!(game.board_as_string(), EMPTY_BOARD);
}

#[test]
fn test_row_win_scenario() {
    let mut game = start_new_game("A", "B");
    let moves = [
        ("A", (0, 0)),
        ("B", (1, 1)),
        ("A", (0, 1)),
        ("B", (1, 0)),
    ];
    for (player, cell) in moves {
        assert_eq!(game.make_move(player, cell), Ok(MoveOutcome::Continue));
    }

    let result = game.make_move("A", (0, 2));
    assert_eq!(result, Ok(MoveOutcome::GameOver(Outcome::Win(id("A")))));
    assert_eq!(game.winner(), Some(&id("A")));
    assert_eq!(game.next_turn(), None);
    assert_eq!(
        game.board_as_string(),
        "\nA  |  A  |  A\n--------------\nB  |  B  |  -\n--------------\n-  |  -  |  -\n"
    );
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut game = start_new_game("A", "B");
    for (player, cell) in [("A", (0, 0)), ("B", (1, 1)), ("A", (0, 1)), ("B", (1, 0)), ("A", (0, 2))] {
        game.make_move(player, cell).unwrap();
    }
    let finished = game.clone();

    for player in ["A", "B", "stranger"] {
        for cell in [(2, 2), (0, 0), (5, 5)] {
            assert_eq!(game.make_move(player, cell), Err(InvalidMove::GameIsOver));
        }
    }
    assert_eq!(game, finished);
}

#[test]
fn test_draw_scenario() {
    let mut game = Game::new("X", "O");
    let moves = [
        ("X", Position::TopLeft),
        ("O", Position::Center),
        ("X", Position::TopRight),
        ("O", Position::TopCenter),
        ("X", Position::BottomCenter),
        ("O", Position::MiddleLeft),
        ("X", Position::MiddleRight),
        ("O", Position::BottomRight),
    ];
    for (player, pos) in moves {
        assert_eq!(game.make_move(player, pos), Ok(MoveOutcome::Continue), "{player} at {pos}");
    }

    assert_eq!(
        game.make_move("X", Position::BottomLeft),
        Ok(MoveOutcome::GameOver(Outcome::Draw))
    );
    assert_eq!(game.next_turn(), None);
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.make_move("O", (0, 0)), Err(InvalidMove::GameIsOver));
}

#[test]
fn test_stranger_is_told_who_moves() {
    let mut game = start_new_game("X", "O");
    let err = game.make_move("Z", (0, 0)).unwrap_err();
    assert_eq!(err, InvalidMove::NotYourTurn { expected: id("X") });
    assert_eq!(err.to_string(), "\"X\" moves next");
    assert_eq!(game.board_as_string(), EMPTY_BOARD);
}

#[test]
fn test_error_messages() {
    assert_eq!(InvalidMove::GameIsOver.to_string(), "Game is over");
    assert_eq!(InvalidMove::OutOfRange.to_string(), "Position out of range");
    assert_eq!(InvalidMove::PositionTaken.to_string(), "Position already taken");
}

#[test]
fn test_queries_are_idempotent() {
    let mut game = start_new_game("X", "O");
    game.make_move("X", (2, 1)).unwrap();
    assert_eq!(game.winner(), game.winner());
    assert_eq!(game.next_turn(), game.next_turn());
    assert_eq!(game.next_turn(), Some(&id("O")));
}
