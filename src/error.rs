use std::fmt;

use crate::board::to_external;

/// Integration errors: a caller handed the board something impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Internal index outside 0..=31, or external number outside 1..=32.
    OutOfRange(usize),
    EmptySource(usize),
    NotAJump { from: usize, to: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(square) => write!(f, "square {square} is out of range"),
            Self::EmptySource(square) => write!(f, "no piece on square {}", to_external(*square)),
            Self::NotAJump { from, to } => write!(
                f,
                "{} to {} is not a jump",
                to_external(*from),
                to_external(*to)
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Category of a recoverable rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    IllegalSelection,
    IllegalDestination,
    /// Action requested in a phase that does not accept it.
    InvalidAction,
}

/// A rule violation the player can recover from by choosing again.
/// Square fields hold internal indices; messages print external numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptySquare(usize),
    OpponentPiece(usize),
    MustTakeJump(usize),
    NoLegalMove(usize),
    MustContinueJump { from: usize },
    IllegalDestination { from: usize, to: usize },
    NoPieceSelected,
    DrawOfferMidTurn,
    GameAlreadyOver,
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::EmptySquare(_)
            | Self::OpponentPiece(_)
            | Self::MustTakeJump(_)
            | Self::NoLegalMove(_)
            | Self::MustContinueJump { .. } => RejectionKind::IllegalSelection,
            Self::IllegalDestination { .. } => RejectionKind::IllegalDestination,
            Self::NoPieceSelected | Self::DrawOfferMidTurn | Self::GameAlreadyOver => {
                RejectionKind::InvalidAction
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySquare(square) => write!(f, "square {} is empty", to_external(*square)),
            Self::OpponentPiece(square) => write!(
                f,
                "square {} holds an opponent piece",
                to_external(*square)
            ),
            Self::MustTakeJump(square) => write!(
                f,
                "piece on {} cannot jump, you must take available jump",
                to_external(*square)
            ),
            Self::NoLegalMove(square) => {
                write!(f, "piece on {} has no legal move", to_external(*square))
            }
            Self::MustContinueJump { from } => {
                write!(f, "you must continue jumping from square {}", to_external(*from))
            }
            Self::IllegalDestination { from, to } => write!(
                f,
                "piece on {} cannot move to {}",
                to_external(*from),
                to_external(*to)
            ),
            Self::NoPieceSelected => f.write_str("select a piece first"),
            Self::DrawOfferMidTurn => f.write_str("a draw can only be offered before moving"),
            Self::GameAlreadyOver => f.write_str("game is already over"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Error returned by turn engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Rejected(Rejection),
}

impl GameError {
    /// `true` for rule violations; `false` for integration defects.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Board(_) => None,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(err) => err.fmt(f),
            Self::Rejected(rejection) => rejection.fmt(f),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<Rejection> for GameError {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}
