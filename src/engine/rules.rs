//! Movement rules: may the piece on `start` travel to `end`?
//!
//! Legality here is purely geometric plus occupancy. It ignores whose turn it
//! is and whether the mover's king ends up in check.

use crate::engine::board::Board;
use crate::engine::path::{is_path_clear, pieces_between};
use crate::engine::types::{Piece, PieceKind, Square};

/// Whether the piece standing on `start` may move to `end`.
///
/// False when either square is off the board, `start` is empty, or `end`
/// holds a piece of the mover's own colour.
pub fn is_legal(board: &Board, start: Square, end: Square) -> bool {
    if !start.is_on_board() || !end.is_on_board() {
        return false;
    }
    let Some(piece) = board.piece_at(start) else {
        return false;
    };
    let target = board.piece_at(end);
    if target.is_some_and(|t| t.color == piece.color) {
        return false;
    }

    let step = Step {
        board,
        piece,
        start,
        end,
        target,
        dr: end.row - start.row,
        dc: end.col - start.col,
    };

    match piece.kind {
        PieceKind::Pawn => step.pawn(),
        PieceKind::Rook => step.rook(),
        PieceKind::Knight => step.knight(),
        PieceKind::Bishop => step.bishop(),
        PieceKind::Queen => step.queen(),
        PieceKind::King => step.king(),
        PieceKind::Archer => step.archer(),
        PieceKind::Wizard => step.wizard(),
        PieceKind::Catapult => step.catapult(),
    }
}

/// A candidate move with its deltas precomputed.
struct Step<'a> {
    board: &'a Board,
    piece: Piece,
    start: Square,
    end: Square,
    target: Option<Piece>,
    dr: i8,
    dc: i8,
}

impl Step<'_> {
    #[inline]
    fn straight(&self) -> bool {
        (self.dr == 0) != (self.dc == 0)
    }

    #[inline]
    fn diagonal(&self) -> bool {
        self.dr != 0 && self.dr.abs() == self.dc.abs()
    }

    #[inline]
    fn path_clear(&self) -> bool {
        is_path_clear(self.board, self.start, self.end)
    }

    fn pawn(&self) -> bool {
        if self.dr != self.piece.color.pawn_direction() {
            return false;
        }
        match self.dc.abs() {
            0 => self.target.is_none(),
            1 => self.target.is_some(),
            _ => false,
        }
    }

    fn rook(&self) -> bool {
        self.straight() && self.path_clear()
    }

    fn knight(&self) -> bool {
        matches!((self.dr.abs(), self.dc.abs()), (1, 2) | (2, 1))
    }

    fn bishop(&self) -> bool {
        self.diagonal() && self.path_clear()
    }

    fn queen(&self) -> bool {
        (self.straight() || self.diagonal()) && self.path_clear()
    }

    fn king(&self) -> bool {
        self.dr.abs().max(self.dc.abs()) <= 1
    }

    /// One or two squares diagonally. Captures only by shooting at range two.
    fn archer(&self) -> bool {
        let dist = self.dr.abs();
        if !self.diagonal() || dist > 2 || !self.path_clear() {
            return false;
        }
        self.target.is_none() || dist == 2
    }

    /// Teleport to any empty square at Chebyshev distance two.
    fn wizard(&self) -> bool {
        self.dr.abs().max(self.dc.abs()) == 2 && self.target.is_none()
    }

    /// Along a rank or file, hopping over exactly one piece.
    fn catapult(&self) -> bool {
        self.straight() && pieces_between(self.board, self.start, self.end) == 1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
