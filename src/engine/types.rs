use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row delta of a pawn advance: black moves toward row 7, white toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six orthodox piece kinds plus the three variant pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    /// Short-range diagonal piece that captures only at distance two.
    Archer,
    /// Teleports two squares onto an empty square, never captures.
    Wizard,
    /// Moves along a rank or file by hopping over exactly one piece.
    Catapult,
}

impl PieceKind {
    /// All piece kinds in declaration order.
    pub const ALL: [PieceKind; 9] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Archer,
        PieceKind::Wizard,
        PieceKind::Catapult,
    ];

    /// Lowercase letter for this kind; `Piece::symbol` applies the color.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Archer => 'a',
            PieceKind::Wizard => 'w',
            PieceKind::Catapult => 'c',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Archer => "archer",
            PieceKind::Wizard => "wizard",
            PieceKind::Catapult => "catapult",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece identity. Pieces are never mutated; a capture removes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Board symbol: uppercase for black, lowercase for white.
    pub fn symbol(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::Black => c.to_ascii_uppercase(),
            Color::White => c,
        }
    }

    /// Inverse of `symbol`.
    pub fn from_symbol(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::Black
        } else {
            Color::White
        };
        let lower = c.to_ascii_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == lower)
            .map(|kind| Piece::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board cell addressed by `(row, col)`.
///
/// Row 0 is the black back rank (rank 8), row 7 the white back rank (rank 1).
/// Coordinates are signed so that off-board squares can be expressed and then
/// rejected by the rules instead of panicking on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const NUM: usize = 64;

    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Row-major index `row * 8 + col`, or `None` when off the board.
    #[inline]
    pub fn index(self) -> Option<usize> {
        self.is_on_board()
            .then(|| (self.row as usize) * 8 + self.col as usize)
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::NUM, "square index out of range: {index}");
        Square::new((index / 8) as i8, (index % 8) as i8)
    }

    /// The square shifted by `(dr, dc)`; may land off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Square::new(self.row + dr, self.col + dc)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM).map(Square::from_index)
    }

    /// Parse a coordinate like "e2": file `a..h` → col `0..7`, rank `1..8` →
    /// row `8 - rank`.
    pub fn from_algebraic(s: &str) -> Result<Self, ChessError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidCoordinateFormat(s.to_string()));
        }
        let col = bytes[0].wrapping_sub(b'a');
        let row = b'8'.wrapping_sub(bytes[1]);
        if col < 8 && row < 8 {
            Ok(Square::new(row as i8, col as i8))
        } else {
            Err(ChessError::InvalidCoordinateFormat(s.to_string()))
        }
    }

    /// Coordinate notation like "e2". Off-board squares print as `(row,col)`.
    pub fn to_algebraic(self) -> String {
        if !self.is_on_board() {
            return format!("({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        format!("{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

// ---------------------------------------------------------------------------
// SquareSet
// ---------------------------------------------------------------------------

/// A set of squares packed into 64 bits, one bit per row-major index.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Add a square. Off-board squares are ignored.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        if let Some(i) = sq.index() {
            self.0 |= 1u64 << i;
        }
    }

    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        match sq.index() {
            Some(i) => self.0 & (1u64 << i) != 0,
            None => false,
        }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate squares in row-major order.
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Iterator over the squares of a `SquareSet`.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Square::from_index(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl std::ops::BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        SquareSet(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|sq| sq.to_algebraic())).finish()
    }
}

impl Serialize for SquareSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|sq| sq.to_algebraic()))
    }
}

// ---------------------------------------------------------------------------
// MoveRecord
// ---------------------------------------------------------------------------

/// An applied move, carrying everything needed to take it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub start: Square,
    pub end: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the engine and its front-end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("square is off the board: {0}")]
    OutOfBounds(Square),

    #[error("illegal move: {start} -> {end}: {reason}")]
    IllegalMove {
        start: Square,
        end: Square,
        reason: String,
    },

    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("piece on {square} does not belong to {turn}, whose turn it is")]
    WrongTurn { square: Square, turn: Color },

    #[error("invalid coordinate: {0:?} (expected a file a-h and a rank 1-8, e.g. \"e2\")")]
    InvalidCoordinateFormat(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn pawn_directions() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
    }

    #[test]
    fn piece_symbols_follow_case_convention() {
        assert_eq!(Piece::new(Color::Black, PieceKind::Archer).symbol(), 'A');
        assert_eq!(Piece::new(Color::White, PieceKind::Archer).symbol(), 'a');
        assert_eq!(Piece::new(Color::Black, PieceKind::Wizard).symbol(), 'W');
        assert_eq!(Piece::new(Color::White, PieceKind::Catapult).symbol(), 'c');
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).symbol(), 'n');
    }

    #[test]
    fn piece_symbol_round_trip() {
        for kind in PieceKind::ALL {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
            }
        }
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('.'), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Ok(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h8"), Ok(Square::new(0, 7)));
        assert_eq!(Square::from_algebraic("a1"), Ok(Square::new(7, 0)));
        assert_eq!(Square::from_algebraic("e2"), Ok(Square::new(6, 4)));
        assert_eq!(Square::from_algebraic("e4"), Ok(Square::new(4, 4)));
    }

    #[test]
    fn square_from_algebraic_invalid() {
        for bad in ["", "e", "i1", "a9", "a0", "a10", "E2", "2e"] {
            assert_eq!(
                Square::from_algebraic(bad),
                Err(ChessError::InvalidCoordinateFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn square_algebraic_round_trip() {
        for sq in Square::all() {
            let alg = sq.to_algebraic();
            assert_eq!(alg.parse::<Square>(), Ok(sq));
        }
    }

    #[test]
    fn off_board_squares() {
        assert!(!Square::new(-1, 0).is_on_board());
        assert!(!Square::new(0, 8).is_on_board());
        assert_eq!(Square::new(8, 0).index(), None);
        assert_eq!(Square::new(8, 0).to_algebraic(), "(8,0)");
    }

    #[test]
    fn square_set_basic_ops() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());

        let e2 = Square::new(6, 4);
        set.insert(e2);
        set.insert(e2);
        set.insert(Square::new(9, 9));
        assert!(set.contains(e2));
        assert!(!set.contains(Square::new(9, 9)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn square_set_iterates_row_major() {
        let set: SquareSet = [Square::new(7, 7), Square::new(0, 3), Square::new(0, 1)]
            .into_iter()
            .collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 1), Square::new(0, 3), Square::new(7, 7)]
        );
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn move_record_display() {
        let record = MoveRecord {
            start: Square::new(6, 4),
            end: Square::new(5, 4),
            moved: Piece::new(Color::White, PieceKind::Pawn),
            captured: None,
        };
        assert_eq!(record.to_string(), "e2 -> e3");
    }

    #[test]
    fn error_messages() {
        let err = ChessError::WrongTurn {
            square: Square::new(1, 0),
            turn: Color::White,
        };
        assert_eq!(
            err.to_string(),
            "piece on a7 does not belong to white, whose turn it is"
        );
        assert_eq!(
            ChessError::EmptySource(Square::new(4, 4)).to_string(),
            "no piece on e4"
        );
    }
}
