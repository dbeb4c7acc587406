use serde::Serialize;

/// Side to move. Black always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// Occupant of a playable square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Piece {
    #[default]
    Empty,
    BlackMan,
    BlackKing,
    WhiteMan,
    WhiteKing,
}

impl Piece {
    pub const ALL: [Piece; 5] = [
        Piece::Empty,
        Piece::BlackMan,
        Piece::BlackKing,
        Piece::WhiteMan,
        Piece::WhiteKing,
    ];

    pub fn man(color: Color) -> Self {
        match color {
            Color::Black => Self::BlackMan,
            Color::White => Self::WhiteMan,
        }
    }

    pub fn king(color: Color) -> Self {
        match color {
            Color::Black => Self::BlackKing,
            Color::White => Self::WhiteKing,
        }
    }

    /// Returns `None` for an empty square.
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::BlackMan | Self::BlackKing => Some(Color::Black),
            Self::WhiteMan | Self::WhiteKing => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    pub fn is_king(self) -> bool {
        matches!(self, Self::BlackKing | Self::WhiteKing)
    }

    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Crowned form of a man; kings and empty squares are returned unchanged.
    pub fn crowned(self) -> Self {
        match self {
            Self::BlackMan => Self::BlackKing,
            Self::WhiteMan => Self::WhiteKing,
            other => other,
        }
    }

    /// Rendering code: 0=empty, 1=black man, 2=black king, 3=white man, 4=white king.
    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::BlackMan => 1,
            Self::BlackKing => 2,
            Self::WhiteMan => 3,
            Self::WhiteKing => 4,
        }
    }

    /// Diagonal directions this piece may travel in.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::Empty => &[],
            Self::BlackMan => &[Direction::SE, Direction::SW],
            Self::WhiteMan => &[Direction::NE, Direction::NW],
            Self::BlackKing | Self::WhiteKing => &Direction::ALL,
        }
    }
}

/// Diagonal direction on the rendered board. North is toward square 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    pub fn index(self) -> usize {
        match self {
            Self::NE => 0,
            Self::NW => 1,
            Self::SE => 2,
            Self::SW => 3,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::NE => Self::SW,
            Self::NW => Self::SE,
            Self::SE => Self::NW,
            Self::SW => Self::NE,
        }
    }

    pub fn is_north(self) -> bool {
        matches!(self, Self::NE | Self::NW)
    }
}

/// Per-occupant square counts. The five fields always sum to 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BoardStats {
    pub empty: u8,
    pub black_men: u8,
    pub black_kings: u8,
    pub white_men: u8,
    pub white_kings: u8,
}

impl BoardStats {
    pub fn count(&self, piece: Piece) -> u8 {
        match piece {
            Piece::Empty => self.empty,
            Piece::BlackMan => self.black_men,
            Piece::BlackKing => self.black_kings,
            Piece::WhiteMan => self.white_men,
            Piece::WhiteKing => self.white_kings,
        }
    }

    pub(crate) fn bump(&mut self, piece: Piece) {
        let slot = match piece {
            Piece::Empty => &mut self.empty,
            Piece::BlackMan => &mut self.black_men,
            Piece::BlackKing => &mut self.black_kings,
            Piece::WhiteMan => &mut self.white_men,
            Piece::WhiteKing => &mut self.white_kings,
        };
        *slot += 1;
    }

    /// Men plus kings of one color.
    pub fn pieces(&self, color: Color) -> u8 {
        self.count(Piece::man(color)) + self.count(Piece::king(color))
    }

    pub fn total(&self) -> u8 {
        Piece::ALL.iter().map(|&piece| self.count(piece)).sum()
    }
}

/// Why a game ended with a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    NoPieces,
    NoMoves,
    Resignation,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Win { winner: Color, reason: WinReason },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Self::Win { winner, .. } => Some(*winner),
            Self::Draw => None,
        }
    }
}

/// What happens after an accepted destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextStep {
    /// Same player must jump again from `from` (external number).
    ContinueJump { from: u8 },
    TurnPassed { to: Color },
    GameOver { outcome: Outcome },
}

/// Result of one accepted step. Squares use external numbering (1..=32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub from: u8,
    pub to: u8,
    pub captured: Option<u8>,
    pub promoted: bool,
    pub next: NextStep,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Piece codes indexed by internal square (0..=31), see [`Piece::code`].
    pub board: Vec<u8>,
    pub turn: Color,
    pub black_name: String,
    pub white_name: String,
    pub stats: BoardStats,
    /// Square the active piece is pinned to (external number), if any.
    pub pinned_square: Option<u8>,
    pub must_jump: bool,
    /// `true` once a jump has been made and the same piece must keep jumping.
    pub chained: bool,
    pub draw_offered_by: Option<Color>,
    pub outcome: Option<Outcome>,
    pub history: Vec<String>,
}
