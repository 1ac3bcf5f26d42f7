//! Threat analysis: which enemy-occupied squares one side can capture on.

use serde::Serialize;

use crate::engine::board::Board;
use crate::engine::movegen::legal_destinations;
use crate::engine::types::{Color, PieceKind, SquareSet};

/// Squares holding a defender's piece that some attacker could capture now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatReport {
    pub squares: SquareSet,
    /// One of the threatened squares holds the defender's king.
    pub king_in_check: bool,
}

/// Union of capture destinations over every piece of `attacker`.
///
/// Quiet destinations are not threats: only squares occupied by the other
/// colour count. Pawns need no special casing because their straight
/// advance already requires an empty square.
pub fn threatened_squares(board: &Board, attacker: Color) -> ThreatReport {
    let mut report = ThreatReport::default();
    for (from, _) in board.pieces(attacker) {
        for to in legal_destinations(board, from) {
            let Some(victim) = board.piece_at(to) else {
                continue;
            };
            if victim.color == attacker {
                continue;
            }
            report.squares.insert(to);
            if victim.kind == PieceKind::King {
                report.king_in_check = true;
            }
        }
    }
    report
}

/// Whether `color`'s king stands on a square threatened by the other side.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    threatened_squares(board, !color).king_in_check
}
