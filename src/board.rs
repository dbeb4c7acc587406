use once_cell::sync::Lazy;

use crate::error::BoardError;
use crate::types::{BoardStats, Color, Direction, Piece};

pub const NUM_SQUARES: usize = 32;
const SQUARES_PER_ROW: usize = 4;
const NUM_ROWS: usize = NUM_SQUARES / SQUARES_PER_ROW;

/// One-step offsets indexed by `[direction][row parity]` (0=even, 1=odd).
const STEP_OFFSETS: [[isize; 2]; 4] = [
    [-3, -4], // NE
    [-4, -5], // NW
    [5, 4],   // SE
    [4, 3],   // SW
];
/// Two-step offsets indexed by direction; independent of row parity.
const JUMP_OFFSETS: [isize; 4] = [-7, -9, 9, 7];

/// Bitmask of squares, bit `i` set for square `i`.
pub type SquareSet = u32;

struct Geometry {
    steps: [[Option<u8>; 4]; NUM_SQUARES],
    jumps: [[Option<u8>; 4]; NUM_SQUARES],
}

static GEOMETRY: Lazy<Geometry> = Lazy::new(|| {
    let mut steps = [[None; 4]; NUM_SQUARES];
    let mut jumps = [[None; 4]; NUM_SQUARES];
    for square in 0..NUM_SQUARES {
        for direction in Direction::ALL {
            let d = direction.index();
            if step_on_board(square, direction) {
                steps[square][d] = Some(offset_square(square, step_offset(direction, square)));
            }
            if jump_on_board(square, direction) {
                jumps[square][d] = Some(offset_square(square, jump_offset(direction)));
            }
        }
    }
    Geometry { steps, jumps }
});

/// Draughts board holding the 32 playable squares.
///
/// Square 0 is the top-left playable square of the rendered board; black
/// starts on the low indices and moves toward higher ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; NUM_SQUARES],
}

impl Board {
    /// Creates the initial board:
    /// 0..=11 black men, 12..=19 empty, 20..=31 white men.
    pub fn new() -> Self {
        let mut squares = [Piece::Empty; NUM_SQUARES];
        for (square, cell) in squares.iter_mut().enumerate() {
            *cell = match square {
                0..=11 => Piece::BlackMan,
                20..=31 => Piece::WhiteMan,
                _ => Piece::Empty,
            };
        }
        Self { squares }
    }

    pub fn empty() -> Self {
        Self {
            squares: [Piece::Empty; NUM_SQUARES],
        }
    }

    pub fn from_squares(squares: [Piece; NUM_SQUARES]) -> Self {
        Self { squares }
    }

    pub fn get(&self, square: usize) -> Result<Piece, BoardError> {
        self.squares
            .get(square)
            .copied()
            .ok_or(BoardError::OutOfRange(square))
    }

    pub fn set(&mut self, square: usize, piece: Piece) -> Result<(), BoardError> {
        let cell = self
            .squares
            .get_mut(square)
            .ok_or(BoardError::OutOfRange(square))?;
        *cell = piece;
        Ok(())
    }

    /// Counts every occupant value, empty included.
    pub fn stats(&self) -> BoardStats {
        let mut stats = BoardStats::default();
        for &piece in &self.squares {
            stats.bump(piece);
        }
        stats
    }

    /// Squares holding a piece of `color`.
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.belongs_to(color))
            .fold(0, |mask, (square, _)| mask | bit(square))
    }

    /// Whether a landing square two steps away exists and is empty.
    pub fn has_jump_room(&self, square: usize, direction: Direction) -> bool {
        jump_target(square, direction).is_some_and(|landing| self.squares[landing].is_empty())
    }

    /// Landing squares of every jump available to the piece on `square`
    /// over pieces of `opponent`. Empty or out-of-range squares yield none.
    pub fn legal_jumps(&self, square: usize, opponent: Color) -> SquareSet {
        let Some(&piece) = self.squares.get(square) else {
            return 0;
        };

        let mut jumps = 0;
        for &direction in piece.directions() {
            if !self.has_jump_room(square, direction) {
                continue;
            }
            let (Some(over), Some(landing)) =
                (neighbor(square, direction), jump_target(square, direction))
            else {
                continue;
            };
            if self.squares[over].belongs_to(opponent) {
                jumps |= bit(landing);
            }
        }
        jumps
    }

    /// Destinations of every one-step move available to the piece on `square`.
    pub fn legal_simple_moves(&self, square: usize) -> SquareSet {
        let Some(&piece) = self.squares.get(square) else {
            return 0;
        };

        piece
            .directions()
            .iter()
            .filter_map(|&direction| neighbor(square, direction))
            .filter(|&to| self.squares[to].is_empty())
            .fold(0, |mask, to| mask | bit(to))
    }

    /// Moves a piece, removing the jumped piece when `is_jump` is set.
    /// Returns `true` when the moved man was crowned.
    ///
    /// Only geometry is checked; whose turn it is and jump obligations are
    /// the caller's business.
    pub fn apply_move(&mut self, from: usize, to: usize, is_jump: bool) -> Result<bool, BoardError> {
        let piece = self.get(from)?;
        self.get(to)?;
        if piece.is_empty() {
            return Err(BoardError::EmptySource(from));
        }

        if is_jump {
            let over = jump_midpoint(from, to).ok_or(BoardError::NotAJump { from, to })?;
            self.squares[over] = Piece::Empty;
        }

        self.squares[from] = Piece::Empty;
        let promoted = !piece.is_king()
            && piece
                .color()
                .is_some_and(|color| is_promotion_square(color, to));
        self.squares[to] = if promoted { piece.crowned() } else { piece };

        Ok(promoted)
    }

    /// Converts board to piece codes, see [`Piece::code`].
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (cell, piece) in board.iter_mut().zip(self.squares.iter()) {
            *cell = piece.code();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub fn row_of(square: usize) -> usize {
    square / SQUARES_PER_ROW
}

pub fn is_even_row(square: usize) -> bool {
    row_of(square) % 2 == 0
}

pub fn step_offset(direction: Direction, square: usize) -> isize {
    let parity = if is_even_row(square) { 0 } else { 1 };
    STEP_OFFSETS[direction.index()][parity]
}

pub fn jump_offset(direction: Direction) -> isize {
    JUMP_OFFSETS[direction.index()]
}

/// Square one diagonal step away, if it is on the board.
pub fn neighbor(square: usize, direction: Direction) -> Option<usize> {
    GEOMETRY
        .steps
        .get(square)
        .and_then(|steps| steps[direction.index()])
        .map(usize::from)
}

/// Square two diagonal steps away, if it is on the board.
pub fn jump_target(square: usize, direction: Direction) -> Option<usize> {
    GEOMETRY
        .jumps
        .get(square)
        .and_then(|jumps| jumps[direction.index()])
        .map(usize::from)
}

/// The square jumped over when moving from `from` to `to`.
pub fn jump_midpoint(from: usize, to: usize) -> Option<usize> {
    Direction::ALL
        .into_iter()
        .find(|&direction| jump_target(from, direction) == Some(to))
        .and_then(|direction| neighbor(from, direction))
}

/// Black crowns on 28..=31, white on 0..=3.
pub fn is_promotion_square(color: Color, square: usize) -> bool {
    match color {
        Color::Black => row_of(square) == NUM_ROWS - 1,
        Color::White => row_of(square) == 0,
    }
}

/// Player-facing square number (1..=32).
pub fn to_external(square: usize) -> u8 {
    (square + 1) as u8
}

pub fn from_external(number: usize) -> Result<usize, BoardError> {
    if (1..=NUM_SQUARES).contains(&number) {
        Ok(number - 1)
    } else {
        Err(BoardError::OutOfRange(number))
    }
}

/// Lists the squares in `mask` in ascending order.
pub fn squares_of(mask: SquareSet) -> Vec<usize> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        out.push(bits.trailing_zeros() as usize);
        bits &= bits - 1;
    }

    out
}

pub fn bit(square: usize) -> SquareSet {
    if square < NUM_SQUARES { 1 << square } else { 0 }
}

// Even rows start one column in, so their rightmost square sits on the edge;
// odd rows start on the left edge.
fn step_on_board(square: usize, direction: Direction) -> bool {
    let row = row_of(square);
    let col_slot = square % SQUARES_PER_ROW;
    let vertical = if direction.is_north() {
        row > 0
    } else {
        row < NUM_ROWS - 1
    };
    let horizontal = match direction {
        Direction::NE | Direction::SE => !is_even_row(square) || col_slot != SQUARES_PER_ROW - 1,
        Direction::NW | Direction::SW => is_even_row(square) || col_slot != 0,
    };
    vertical && horizontal
}

fn jump_on_board(square: usize, direction: Direction) -> bool {
    let vertical = if direction.is_north() {
        square >= 2 * SQUARES_PER_ROW
    } else {
        square < NUM_SQUARES - 2 * SQUARES_PER_ROW
    };
    let horizontal = match direction {
        Direction::NE | Direction::SE => (square + 1) % SQUARES_PER_ROW != 0,
        Direction::NW | Direction::SW => square % SQUARES_PER_ROW != 0,
    };
    vertical && horizontal
}

fn offset_square(square: usize, offset: isize) -> u8 {
    (square as isize + offset) as u8
}
