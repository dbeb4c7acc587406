use serde::Serialize;
use tracing::{debug, info};

use crate::board::{Board, SquareSet, bit, jump_midpoint, squares_of, to_external};
use crate::config::GameConfig;
use crate::error::{GameError, Rejection};
use crate::types::{
    BoardStats, Color, GameSnapshot, MoveReport, NextStep, Outcome, WinReason,
};

/// Where the current half-move stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPieceSelection,
    /// A piece is pinned on `pinned`. `must_jump` marks a capturing turn;
    /// `chained` is set once the piece has already jumped this turn.
    AwaitingDestination {
        pinned: usize,
        must_jump: bool,
        chained: bool,
    },
    GameOver(Outcome),
}

/// Pieces of one color that can act this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovablePieces {
    pub jumpers: SquareSet,
    /// Pieces with a simple move and no jump.
    pub movers: SquareSet,
}

impl MovablePieces {
    /// Pickable squares once the mandatory jump rule is applied.
    pub fn available(&self) -> SquareSet {
        if self.jumpers != 0 {
            self.jumpers
        } else {
            self.movers
        }
    }

    pub fn must_jump(&self) -> bool {
        self.jumpers != 0
    }

    pub fn is_empty(&self) -> bool {
        self.available() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawOfferStatus {
    /// Offer recorded; the opponent may accept on their next turn.
    Pending,
    Accepted { outcome: Outcome },
}

/// One completed half-move. Squares are internal indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub color: Color,
    /// Starting square followed by every landing square.
    pub path: Vec<usize>,
    pub captured: Vec<usize>,
    pub promoted: bool,
}

impl MoveRecord {
    fn start(color: Color, from: usize) -> Self {
        Self {
            color,
            path: vec![from],
            captured: Vec::new(),
            promoted: false,
        }
    }

    /// Standard notation with external numbers: `9-14`, `10x19x28`.
    pub fn notation(&self) -> String {
        let separator = if self.captured.is_empty() { "-" } else { "x" };
        self.path
            .iter()
            .map(|&square| to_external(square).to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Turn engine for one game of English draughts.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    phase: Phase,
    draw_offered_by: Option<Color>,
    config: GameConfig,
    history: Vec<MoveRecord>,
    in_progress: Option<MoveRecord>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(Board::new(), Color::Black, config)
    }

    /// Starts from an arbitrary position. If `turn` cannot move the game is
    /// over immediately.
    pub fn from_position(board: Board, turn: Color, config: GameConfig) -> Self {
        let mut game = Self {
            board,
            turn,
            phase: Phase::AwaitingPieceSelection,
            draw_offered_by: None,
            config,
            history: Vec::new(),
            in_progress: None,
        };
        game.check_turn_start();
        game
    }

    /// Picks the piece to move. Returns its legal destinations.
    ///
    /// Before the first jump of a turn a different piece may be picked; once
    /// a piece has jumped it stays pinned.
    pub fn select(&mut self, square: usize) -> Result<SquareSet, GameError> {
        self.ensure_in_play()?;
        if let Phase::AwaitingDestination {
            pinned,
            chained: true,
            ..
        } = self.phase
        {
            return Err(self.reject(Rejection::MustContinueJump { from: pinned }));
        }

        let piece = self.board.get(square)?;
        if piece.is_empty() {
            return Err(self.reject(Rejection::EmptySquare(square)));
        }
        if !piece.belongs_to(self.turn) {
            return Err(self.reject(Rejection::OpponentPiece(square)));
        }

        let movable = self.movable_pieces(self.turn);
        let must_jump = if movable.jumpers & bit(square) != 0 {
            true
        } else if movable.must_jump() {
            return Err(self.reject(Rejection::MustTakeJump(square)));
        } else if movable.movers & bit(square) != 0 {
            false
        } else {
            return Err(self.reject(Rejection::NoLegalMove(square)));
        };

        self.phase = Phase::AwaitingDestination {
            pinned: square,
            must_jump,
            chained: false,
        };
        debug!(color = ?self.turn, square = to_external(square), must_jump, "piece selected");

        Ok(self.destinations_from(square, must_jump))
    }

    /// Moves the pinned piece to `square`.
    pub fn move_to(&mut self, square: usize) -> Result<MoveReport, GameError> {
        self.ensure_in_play()?;
        let Phase::AwaitingDestination {
            pinned, must_jump, ..
        } = self.phase
        else {
            return Err(self.reject(Rejection::NoPieceSelected));
        };

        self.board.get(square)?;
        if self.destinations_from(pinned, must_jump) & bit(square) == 0 {
            return Err(self.reject(Rejection::IllegalDestination {
                from: pinned,
                to: square,
            }));
        }

        let captured = if must_jump {
            jump_midpoint(pinned, square)
        } else {
            None
        };
        let promoted = self.board.apply_move(pinned, square, must_jump)?;

        let color = self.turn;
        let record = self
            .in_progress
            .get_or_insert_with(|| MoveRecord::start(color, pinned));
        record.path.push(square);
        record.captured.extend(captured);
        record.promoted |= promoted;

        let next = if must_jump
            && !promoted
            && self.board.legal_jumps(square, color.opponent()) != 0
        {
            self.phase = Phase::AwaitingDestination {
                pinned: square,
                must_jump: true,
                chained: true,
            };
            debug!(?color, from = to_external(square), "jump must continue");
            NextStep::ContinueJump {
                from: to_external(square),
            }
        } else {
            self.finish_half_move()
        };

        Ok(MoveReport {
            from: to_external(pinned),
            to: to_external(square),
            captured: captured.map(to_external),
            promoted,
            next,
        })
    }

    /// The active player concedes.
    pub fn resign(&mut self) -> Result<Outcome, GameError> {
        self.ensure_in_play()?;
        if let Some(record) = self.in_progress.take() {
            self.history.push(record);
        }
        Ok(self.finish(Outcome::Win {
            winner: self.turn.opponent(),
            reason: WinReason::Resignation,
        }))
    }

    /// Offers a draw, or accepts the opponent's standing offer.
    pub fn offer_draw(&mut self) -> Result<DrawOfferStatus, GameError> {
        self.ensure_in_play()?;
        if let Phase::AwaitingDestination { chained: true, .. } = self.phase {
            return Err(self.reject(Rejection::DrawOfferMidTurn));
        }

        if self.draw_offered_by == Some(self.turn.opponent()) {
            let outcome = self.finish(Outcome::Draw);
            return Ok(DrawOfferStatus::Accepted { outcome });
        }

        self.draw_offered_by = Some(self.turn);
        debug!(color = ?self.turn, "draw offered");
        Ok(DrawOfferStatus::Pending)
    }

    /// Jumpers and movers of `color` on the current board.
    pub fn movable_pieces(&self, color: Color) -> MovablePieces {
        let mut movable = MovablePieces::default();
        for square in squares_of(self.board.occupied_by(color)) {
            if self.board.legal_jumps(square, color.opponent()) != 0 {
                movable.jumpers |= bit(square);
            } else if self.board.legal_simple_moves(square) != 0 {
                movable.movers |= bit(square);
            }
        }
        movable
    }

    /// Destinations open to the pinned piece, empty when nothing is pinned.
    pub fn legal_destinations(&self) -> SquareSet {
        match self.phase {
            Phase::AwaitingDestination {
                pinned, must_jump, ..
            } => self.destinations_from(pinned, must_jump),
            _ => 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stats(&self) -> BoardStats {
        self.board.stats()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pinned_square(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingDestination { pinned, .. } => Some(pinned),
            _ => None,
        }
    }

    pub fn must_jump(&self) -> bool {
        matches!(
            self.phase,
            Phase::AwaitingDestination {
                must_jump: true,
                ..
            }
        )
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn pending_draw_offer(&self) -> Option<Color> {
        self.draw_offered_by
    }

    pub fn player_name(&self, color: Color) -> &str {
        self.config.name_of(color)
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            turn: self.turn,
            black_name: self.config.black_name.clone(),
            white_name: self.config.white_name.clone(),
            stats: self.board.stats(),
            pinned_square: self.pinned_square().map(to_external),
            must_jump: self.must_jump(),
            chained: matches!(self.phase, Phase::AwaitingDestination { chained: true, .. }),
            draw_offered_by: self.draw_offered_by,
            outcome: self.outcome(),
            history: self.history.iter().map(MoveRecord::notation).collect(),
        }
    }

    fn destinations_from(&self, square: usize, must_jump: bool) -> SquareSet {
        if must_jump {
            self.board.legal_jumps(square, self.turn.opponent())
        } else {
            self.board.legal_simple_moves(square)
        }
    }

    fn finish_half_move(&mut self) -> NextStep {
        if let Some(record) = self.in_progress.take() {
            debug!(color = ?record.color, notation = %record.notation(), "half-move complete");
            self.history.push(record);
        }

        let mover = self.turn;
        // Moving instead of accepting declines a standing offer.
        if self.draw_offered_by == Some(mover.opponent()) {
            self.draw_offered_by = None;
        }
        self.turn = mover.opponent();
        self.phase = Phase::AwaitingPieceSelection;

        match self.check_turn_start() {
            Some(outcome) => NextStep::GameOver { outcome },
            None => NextStep::TurnPassed { to: self.turn },
        }
    }

    fn check_turn_start(&mut self) -> Option<Outcome> {
        let reason = if self.board.stats().pieces(self.turn) == 0 {
            WinReason::NoPieces
        } else if self.movable_pieces(self.turn).is_empty() {
            WinReason::NoMoves
        } else {
            return None;
        };

        Some(self.finish(Outcome::Win {
            winner: self.turn.opponent(),
            reason,
        }))
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.phase = Phase::GameOver(outcome);
        self.draw_offered_by = None;
        match outcome {
            Outcome::Win { winner, reason } => info!(
                ?winner,
                ?reason,
                name = self.config.name_of(winner),
                "game over"
            ),
            Outcome::Draw => info!("game drawn by agreement"),
        }
        outcome
    }

    fn ensure_in_play(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(Rejection::GameAlreadyOver.into());
        }
        Ok(())
    }

    fn reject(&self, rejection: Rejection) -> GameError {
        debug!(color = ?self.turn, %rejection, "action rejected");
        rejection.into()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
