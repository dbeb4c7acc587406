//! Property tests driving random games through the public API.

use draughts::board::{from_external, row_of, squares_of};
use draughts::{Color, Game, GameConfig, NextStep, Piece, Rejection};
use proptest::prelude::*;

/// Plays up to `choices.len()` steps, picking among legal options with the
/// supplied numbers, and checks rule invariants after every step.
fn play_out(choices: &[(u16, u16)]) -> Result<Game, TestCaseError> {
    let mut game = Game::new(GameConfig::default());

    for &(pick, dest) in choices {
        if game.is_over() {
            break;
        }
        let color = game.turn();
        let movable = game.movable_pieces(color);

        if game.pinned_square().is_none() {
            // Every piece that only has simple moves is refused while a jump exists.
            if movable.must_jump() {
                for square in squares_of(movable.movers) {
                    let err = game.select(square).unwrap_err();
                    prop_assert_eq!(err.rejection().copied(), Some(Rejection::MustTakeJump(square)));
                }
            }
            let pickable = squares_of(movable.available());
            prop_assert!(!pickable.is_empty());
            let square = pickable[pick as usize % pickable.len()];
            game.select(square).unwrap();
        }

        let from = game.pinned_square().unwrap();
        let was_jump = game.must_jump();
        let piece = game.board().get(from).unwrap();
        let opponents_before = game.stats().pieces(color.opponent());

        let destinations = squares_of(game.legal_destinations());
        prop_assert!(!destinations.is_empty());
        let to = destinations[dest as usize % destinations.len()];
        let report = game.move_to(to).unwrap();

        let stats = game.stats();
        prop_assert_eq!(stats.total(), 32);
        let expected_loss = if was_jump { 1 } else { 0 };
        prop_assert_eq!(stats.pieces(color.opponent()), opponents_before - expected_loss);

        if !piece.is_king() {
            let forward = match color {
                Color::Black => row_of(to) > row_of(from),
                Color::White => row_of(to) < row_of(from),
            };
            prop_assert!(forward, "man moved backwards from {} to {}", from, to);
        }

        match report.next {
            NextStep::ContinueJump { from: pinned } => {
                prop_assert!(was_jump);
                prop_assert!(!report.promoted);
                prop_assert_eq!(game.turn(), color);
                prop_assert_eq!(game.pinned_square(), Some(from_external(pinned as usize).unwrap()));
            }
            NextStep::TurnPassed { to: next } => {
                prop_assert_eq!(next, color.opponent());
                prop_assert_eq!(game.turn(), next);
                prop_assert_eq!(game.pinned_square(), None);
            }
            NextStep::GameOver { outcome } => {
                prop_assert_eq!(outcome.winner(), Some(color));
                prop_assert!(game.is_over());
            }
        }

        if report.promoted {
            prop_assert_eq!(game.board().get(to).unwrap(), Piece::king(color));
        }
    }

    Ok(game)
}

proptest! {
    #[test]
    fn random_games_respect_the_rules(
        choices in prop::collection::vec((any::<u16>(), any::<u16>()), 0..300)
    ) {
        play_out(&choices)?;
    }

    #[test]
    fn every_square_holds_a_known_piece(
        choices in prop::collection::vec((any::<u16>(), any::<u16>()), 0..120)
    ) {
        let game = play_out(&choices)?;
        for square in 0..32 {
            prop_assert!(Piece::ALL.contains(&game.board().get(square).unwrap()));
        }
        prop_assert!(game.board().get(32).is_err());
    }
}
