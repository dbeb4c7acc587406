use draughts::board::{Board, from_external};
use draughts::{
    Color, Game, GameConfig, NextStep, Outcome, Piece, Rejection, RejectionKind, WinReason,
};

/// Builds a position from `(external square, piece)` pairs.
fn position(pieces: &[(usize, Piece)]) -> Board {
    let mut board = Board::empty();
    for &(number, piece) in pieces {
        board.set(from_external(number).unwrap(), piece).unwrap();
    }
    board
}

fn sq(number: usize) -> usize {
    from_external(number).unwrap()
}

#[test]
fn king_chains_jumps_across_directions() {
    let board = position(&[
        (18, Piece::BlackKing),
        (23, Piece::WhiteMan),
        (24, Piece::WhiteMan),
        (16, Piece::WhiteMan),
        (5, Piece::WhiteMan),
    ]);
    let mut game = Game::from_position(board, Color::Black, GameConfig::new("Kat", "Rob"));

    game.select(sq(18)).unwrap();
    let first = game.move_to(sq(27)).unwrap();
    assert_eq!(first.next, NextStep::ContinueJump { from: 27 });

    let err = game.move_to(sq(31)).unwrap_err();
    assert_eq!(err.rejection().map(Rejection::kind), Some(RejectionKind::IllegalDestination));

    let second = game.move_to(sq(20)).unwrap();
    assert_eq!(second.next, NextStep::ContinueJump { from: 20 });
    let third = game.move_to(sq(11)).unwrap();
    assert_eq!(third.next, NextStep::TurnPassed { to: Color::White });

    assert_eq!(game.history()[0].notation(), "18x27x20x11");
    assert_eq!(game.stats().pieces(Color::White), 1);
    assert_eq!(game.board().get(sq(11)), Ok(Piece::BlackKing));
}

#[test]
fn white_chain_stops_when_the_man_is_crowned() {
    let board = position(&[
        (18, Piece::WhiteMan),
        (15, Piece::BlackMan),
        (7, Piece::BlackMan),
        (4, Piece::BlackMan),
    ]);
    let mut game = Game::from_position(board, Color::White, GameConfig::default());

    game.select(sq(18)).unwrap();
    let first = game.move_to(sq(11)).unwrap();
    assert_eq!(first.captured, Some(15));
    assert_eq!(first.next, NextStep::ContinueJump { from: 11 });

    let second = game.move_to(sq(2)).unwrap();
    assert!(second.promoted);
    assert_eq!(second.captured, Some(7));
    assert_eq!(second.next, NextStep::TurnPassed { to: Color::Black });
    assert_eq!(game.board().get(sq(2)), Ok(Piece::WhiteKing));

    let record = &game.history()[0];
    assert_eq!(record.notation(), "18x11x2");
    assert!(record.promoted);
    assert_eq!(record.color, Color::White);
}

#[test]
fn rejection_reasons_are_readable() {
    let mut game = Game::default();

    let err = game.select(sq(21)).unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "square 21 holds an opponent piece");

    let err = game.select(sq(1)).unwrap_err();
    assert_eq!(err.to_string(), "piece on 1 has no legal move");
}

#[test]
fn resigning_mid_chain_keeps_the_partial_record() {
    let board = position(&[
        (2, Piece::BlackMan),
        (6, Piece::WhiteMan),
        (14, Piece::WhiteMan),
        (32, Piece::WhiteMan),
    ]);
    let mut game = Game::from_position(board, Color::Black, GameConfig::default());
    game.select(sq(2)).unwrap();
    game.move_to(sq(9)).unwrap();

    let outcome = game.resign().unwrap();

    assert_eq!(
        outcome,
        Outcome::Win {
            winner: Color::White,
            reason: WinReason::Resignation,
        }
    );
    assert_eq!(game.history()[0].notation(), "2x9");
    assert_eq!(game.snapshot().history, vec!["2x9".to_string()]);
}

#[test]
fn white_wins_when_black_is_left_without_moves() {
    // Black's only man is wedged on the left edge behind a white man that
    // cannot be jumped.
    let board = position(&[
        (5, Piece::BlackMan),
        (9, Piece::WhiteMan),
        (14, Piece::WhiteMan),
        (30, Piece::WhiteMan),
    ]);
    let mut game = Game::from_position(board, Color::White, GameConfig::default());

    game.select(sq(30)).unwrap();
    let report = game.move_to(sq(26)).unwrap();

    assert_eq!(
        report.next,
        NextStep::GameOver {
            outcome: Outcome::Win {
                winner: Color::White,
                reason: WinReason::NoMoves,
            }
        }
    );
}
