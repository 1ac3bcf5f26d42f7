//! Mailbox board representation.
//!
//! `Board` stores an 8×8 grid of optional pieces indexed `[row][col]`, with
//! row 0 being the black back rank. It also carries the count of moves applied
//! through it so that the game controller can keep it in step on undo.

use crate::engine::rules;
use crate::engine::types::{ChessError, Color, Piece, PieceKind, Square};

/// Back-rank order from column 0 to column 7, shared by both colours.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Archer,
    PieceKind::Wizard,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Catapult,
    PieceKind::Archer,
    PieceKind::Rook,
];

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    move_count: u32,
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            move_count: 0,
        }
    }

    /// Standard variant setup: black on rows 0-1, white on rows 6-7.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, kind));
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// What piece (if any) is on a given square? Off-board squares are empty.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Number of moves applied and not undone.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// All occupied squares with their pieces, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares holding a piece of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Overwrite a square. Used to build custom positions and by undo.
    /// Off-board squares are ignored.
    pub fn put(&mut self, sq: Square, piece: Option<Piece>) {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize] = piece;
        }
    }

    /// Move the piece on `start` to `end` if the movement rules allow it.
    ///
    /// Returns whatever stood on `end` before the move. On error nothing
    /// changes.
    pub fn apply_move(&mut self, start: Square, end: Square) -> Result<Option<Piece>, ChessError> {
        for sq in [start, end] {
            if !sq.is_on_board() {
                return Err(ChessError::OutOfBounds(sq));
            }
        }

        let Some(piece) = self.piece_at(start) else {
            return Err(ChessError::IllegalMove {
                start,
                end,
                reason: "no piece on the start square".into(),
            });
        };

        if !rules::is_legal(self, start, end) {
            return Err(ChessError::IllegalMove {
                start,
                end,
                reason: format!("a {} cannot move there", piece.kind),
            });
        }

        let captured = self.piece_at(end);
        self.put(end, Some(piece));
        self.put(start, None);
        self.move_count += 1;
        Ok(captured)
    }

    /// Reverse a move: `moved` goes back to `start`, `captured` to `end`.
    ///
    /// The caller supplies the record of a move previously applied to this
    /// board; the move counter never drops below zero.
    pub(crate) fn unapply_move(
        &mut self,
        start: Square,
        end: Square,
        moved: Piece,
        captured: Option<Piece>,
    ) {
        self.put(start, Some(moved));
        self.put(end, captured);
        self.move_count = self.move_count.saturating_sub(1);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
