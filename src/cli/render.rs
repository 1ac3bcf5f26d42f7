use crate::engine::board::Board;
use crate::engine::types::{Square, SquareSet};

const FILES: &str = "  a b c d e f g h";

/// Squares to call out when drawing the board.
#[derive(Clone, Copy, Debug, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Legal destinations, drawn as `[x]`.
    Moves(SquareSet),
    /// Threatened pieces, drawn as `*x*`.
    Threats(SquareSet),
}

/// Text board, rank 8 at the top. Black pieces are uppercase, white
/// lowercase, empty squares `.`.
pub fn render(board: &Board, highlight: Highlight, show_coordinates: bool) -> String {
    let mut out = String::new();
    if show_coordinates {
        out.push_str(FILES);
        out.push('\n');
    }
    for row in 0..8i8 {
        let rank = 8 - row;
        if show_coordinates {
            out.push_str(&format!("{rank} "));
        }
        let cells: Vec<String> = (0..8i8)
            .map(|col| cell(board, Square::new(row, col), highlight))
            .collect();
        out.push_str(&cells.join(" "));
        if show_coordinates {
            out.push_str(&format!(" {rank}"));
        }
        out.push('\n');
    }
    if show_coordinates {
        out.push_str(FILES);
        out.push('\n');
    }
    out
}

fn cell(board: &Board, sq: Square, highlight: Highlight) -> String {
    let symbol = board.piece_at(sq).map_or('.', |p| p.symbol());
    match highlight {
        Highlight::Moves(set) if set.contains(sq) => format!("[{symbol}]"),
        Highlight::Threats(set) if set.contains(sq) => format!("*{symbol}*"),
        _ => symbol.to_string(),
    }
}
