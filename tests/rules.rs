//! Movement-rule properties checked exhaustively over every square.
//!
//! The board is small enough that "for all squares" can be taken literally:
//! each property places a piece on each of the 64 squares of a few fixed
//! positions and asks about every destination, including off-board ones.

use variant_chess::engine::path::is_path_clear;
use variant_chess::engine::{Board, Color, Piece, PieceKind, Square, is_legal, legal_destinations};

/// Positions to test against: empty, the standard setup, and a scatter of
/// pieces of both colours.
fn positions() -> Vec<Board> {
    let mut scatter = Board::empty();
    for (i, sq) in Square::all().enumerate() {
        if i % 3 == 0 {
            let color = if i % 2 == 0 { Color::White } else { Color::Black };
            let kind = PieceKind::ALL[i % PieceKind::ALL.len()];
            scatter.put(sq, Some(Piece::new(color, kind)));
        }
    }
    vec![Board::empty(), Board::starting(), scatter]
}

/// Every placement of `piece` onto every square of every test position.
fn placements(piece: Piece) -> impl Iterator<Item = (Board, Square)> {
    positions().into_iter().flat_map(move |base| {
        Square::all().map(move |from| {
            let mut board = base.clone();
            board.put(from, Some(piece));
            (board, from)
        })
    })
}

fn all_pieces() -> impl Iterator<Item = Piece> {
    PieceKind::ALL.into_iter().flat_map(|kind| {
        [Color::White, Color::Black]
            .into_iter()
            .map(move |color| Piece::new(color, kind))
    })
}

// =====================================================================
// Universal properties
// =====================================================================

#[test]
fn never_legal_off_board() {
    let off_board: Vec<Square> = (-2..10)
        .flat_map(|row| (-2..10).map(move |col| Square::new(row, col)))
        .filter(|sq| !sq.is_on_board())
        .collect();

    for piece in all_pieces() {
        for (board, from) in placements(piece) {
            for &to in &off_board {
                assert!(
                    !is_legal(&board, from, to),
                    "{piece} on {from} allowed off-board {to}"
                );
            }
        }
    }
}

#[test]
fn never_captures_own_colour() {
    for piece in all_pieces() {
        for (board, from) in placements(piece) {
            for to in legal_destinations(&board, from) {
                let target = board.piece_at(to);
                assert!(
                    target.is_none_or(|t| t.color != piece.color),
                    "{piece} on {from} may capture its own {to}"
                );
            }
        }
    }
}

#[test]
fn legality_does_not_mutate_board() {
    for piece in all_pieces() {
        for (board, from) in placements(piece) {
            let before = board.clone();
            let _ = legal_destinations(&board, from);
            assert_eq!(board, before);
        }
    }
}

// =====================================================================
// Path tracer
// =====================================================================

#[test]
fn path_clear_matches_direct_scan() {
    for board in positions() {
        for from in Square::all() {
            for to in Square::all() {
                let dr = to.row - from.row;
                let dc = to.col - from.col;
                let aligned = (dr == 0) != (dc == 0) || (dr != 0 && dr.abs() == dc.abs());
                if !aligned {
                    continue;
                }
                let steps = dr.abs().max(dc.abs());
                let blocked = (1..steps).any(|k| {
                    board
                        .piece_at(from.offset(dr.signum() * k, dc.signum() * k))
                        .is_some()
                });
                assert_eq!(
                    is_path_clear(&board, from, to),
                    !blocked,
                    "path {from}-{to}"
                );
            }
        }
    }
}

// =====================================================================
// Custom pieces
// =====================================================================

#[test]
fn catapult_requires_exactly_one_screen() {
    let screen = Some(Piece::new(Color::Black, PieceKind::Pawn));
    let catapult = Some(Piece::new(Color::White, PieceKind::Catapult));
    let victim = Some(Piece::new(Color::Black, PieceKind::Rook));

    // Catapult on a1 shooting up the a-file to a8.
    let from = Square::new(7, 0);
    let to = Square::new(0, 0);
    let between: Vec<Square> = (1..7).map(|row| Square::new(row, 0)).collect();

    for screens in 0..=2usize {
        for landing in [None, victim] {
            let mut board = Board::empty();
            board.put(from, catapult);
            board.put(to, landing);
            for sq in between.iter().take(screens) {
                board.put(*sq, screen);
            }
            assert_eq!(
                is_legal(&board, from, to),
                screens == 1,
                "{screens} screen(s), landing {landing:?}"
            );
        }
    }
}

#[test]
fn archer_shoots_but_does_not_stab() {
    let mut board = Board::empty();
    let from: Square = "d4".parse().unwrap();
    board.put(from, Some(Piece::new(Color::White, PieceKind::Archer)));
    for target in ["b2", "b6", "f2", "f6"] {
        let mut b = board.clone();
        b.put(target.parse().unwrap(), Some(Piece::new(Color::Black, PieceKind::King)));
        assert!(is_legal(&b, from, target.parse().unwrap()), "shot at {target}");
    }
    for target in ["c3", "c5", "e3", "e5"] {
        let mut b = board.clone();
        b.put(target.parse().unwrap(), Some(Piece::new(Color::Black, PieceKind::King)));
        assert!(!is_legal(&b, from, target.parse().unwrap()), "stab at {target}");
    }
}

#[test]
fn wizard_teleports_through_a_full_ring() {
    let from: Square = "d4".parse().unwrap();
    let mut board = Board::empty();
    board.put(from, Some(Piece::new(Color::White, PieceKind::Wizard)));
    for dr in -1..=1 {
        for dc in -1..=1 {
            if (dr, dc) != (0, 0) {
                board.put(from.offset(dr, dc), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            }
        }
    }
    let destinations = legal_destinations(&board, from);
    assert_eq!(destinations.len(), 16);

    // Any occupant of a landing square, friend or foe, blocks it.
    for color in [Color::White, Color::Black] {
        let mut b = board.clone();
        let to = from.offset(2, 2);
        b.put(to, Some(Piece::new(color, PieceKind::Knight)));
        assert!(!is_legal(&b, from, to));
    }
}
