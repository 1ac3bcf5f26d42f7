//! Line stepping shared by the sliding pieces and the catapult.
//!
//! Both walks step one square at a time by the sign of the row and column
//! deltas, starting next to `start` and stopping before `end`. They are only
//! meaningful for aligned pairs (same row, same column, or a true diagonal);
//! the walk is bounded to the board so a misaligned pair still terminates.

use crate::engine::board::Board;
use crate::engine::types::Square;

/// Iterator over the squares strictly between two aligned squares.
struct Between {
    cur: Square,
    end: Square,
    step: (i8, i8),
}

impl Between {
    fn new(start: Square, end: Square) -> Self {
        let step = (
            (end.row - start.row).signum(),
            (end.col - start.col).signum(),
        );
        Between {
            cur: start.offset(step.0, step.1),
            end,
            step,
        }
    }
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.cur == self.end || !self.cur.is_on_board() {
            return None;
        }
        let sq = self.cur;
        self.cur = sq.offset(self.step.0, self.step.1);
        Some(sq)
    }
}

/// Whether every square strictly between `start` and `end` is empty.
pub fn is_path_clear(board: &Board, start: Square, end: Square) -> bool {
    let mut walk = Between::new(start, end);
    for sq in walk.by_ref() {
        if board.piece_at(sq).is_some() {
            return false;
        }
    }
    // Ran off the board without meeting `end`: the pair was not aligned.
    walk.cur == walk.end
}

/// Number of occupied squares strictly between `start` and `end`.
///
/// Counting stops at two, which is all the catapult rule needs to know.
pub fn pieces_between(board: &Board, start: Square, end: Square) -> usize {
    Between::new(start, end)
        .filter(|&sq| board.piece_at(sq).is_some())
        .take(2)
        .count()
}
