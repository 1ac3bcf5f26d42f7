//! Legal destination generation.
//!
//! Brute force: ask the movement rules about every square on the board. With
//! 64 candidates and at most a seven-square path walk each, there is nothing
//! worth caching.

use crate::engine::board::Board;
use crate::engine::rules;
use crate::engine::types::{Square, SquareSet};

/// Every square the piece on `from` may move to. Empty for an empty square.
pub fn legal_destinations(board: &Board, from: Square) -> SquareSet {
    if board.piece_at(from).is_none() {
        return SquareSet::EMPTY;
    }
    Square::all()
        .filter(|&to| rules::is_legal(board, from, to))
        .collect()
}
