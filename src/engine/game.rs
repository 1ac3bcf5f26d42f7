//! Stateful game controller wrapping `Board`.
//!
//! `Game` owns the board, whose turn it is and the undo history. It is the
//! type the front-end talks to. Turns alternate on every applied move; being
//! in check never restricts what may be played.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::threats::{self, ThreatReport};
use crate::engine::types::{ChessError, Color, MoveRecord, Piece, Square, SquareSet};

// =========================================================================
// Game
// =========================================================================

/// A game in progress with history and undo.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    history: Vec<MoveRecord>,

    // Metadata
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// A new game from the standard setup, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// A game starting from an arbitrary position.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            history: Vec::new(),
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn move_count(&self) -> u32 {
        self.board.move_count()
    }

    // -----------------------------------------------------------------
    // Make move
    // -----------------------------------------------------------------

    /// Move the side-to-move's piece from `start` to `end`.
    ///
    /// On any error the game is left exactly as it was.
    pub fn attempt_move(&mut self, start: Square, end: Square) -> Result<MoveRecord, ChessError> {
        let moved = self.own_piece_at(start)?;
        if !end.is_on_board() {
            return Err(ChessError::OutOfBounds(end));
        }

        let captured = self.board.apply_move(start, end).inspect_err(|e| {
            debug!(%start, %end, error = %e, "move rejected");
        })?;

        let record = MoveRecord {
            start,
            end,
            moved,
            captured,
        };
        self.history.push(record);
        self.turn = !self.turn;

        debug!(
            %start,
            %end,
            piece = %moved,
            captured = ?captured.map(|p| p.to_string()),
            move_count = self.board.move_count(),
            "move applied"
        );
        Ok(record)
    }

    // -----------------------------------------------------------------
    // Undo
    // -----------------------------------------------------------------

    /// Take back up to `steps` moves, most recent first.
    ///
    /// Returns how many were actually undone; asking for more than the
    /// history holds is not an error.
    pub fn undo(&mut self, steps: usize) -> usize {
        let steps = steps.min(self.history.len());
        for _ in 0..steps {
            let Some(record) = self.history.pop() else {
                break;
            };
            self.board
                .unapply_move(record.start, record.end, record.moved, record.captured);
            self.turn = !self.turn;
            debug!(start = %record.start, end = %record.end, "move undone");
        }
        steps
    }

    // -----------------------------------------------------------------
    // Analysis
    // -----------------------------------------------------------------

    /// Legal destinations for one of the side-to-move's pieces.
    pub fn hint(&self, square: Square) -> Result<SquareSet, ChessError> {
        self.own_piece_at(square)?;
        Ok(movegen::legal_destinations(&self.board, square))
    }

    /// The side-to-move's pieces that the opponent could capture right now.
    pub fn threats(&self) -> ThreatReport {
        threats::threatened_squares(&self.board, !self.turn)
    }

    /// Whether the side to move has its king under attack.
    pub fn in_check(&self) -> bool {
        self.threats().king_in_check
    }

    fn own_piece_at(&self, square: Square) -> Result<Piece, ChessError> {
        if !square.is_on_board() {
            return Err(ChessError::OutOfBounds(square));
        }
        match self.board.piece_at(square) {
            None => Err(ChessError::EmptySource(square)),
            Some(p) if p.color != self.turn => Err(ChessError::WrongTurn {
                square,
                turn: self.turn,
            }),
            Some(p) => Ok(p),
        }
    }

    // -----------------------------------------------------------------
    // Snapshot (structured output for callers)
    // -----------------------------------------------------------------

    /// Generate an 8×8 symbol array, row 0 (rank 8) first. Empty squares are
    /// empty strings.
    pub fn board_array(&self) -> [[String; 8]; 8] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                self.board
                    .piece_at(Square::new(row as i8, col as i8))
                    .map(|p| p.symbol().to_string())
                    .unwrap_or_default()
            })
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id.clone(),
            created_at: self.created_at.to_rfc3339(),
            turn: self.turn,
            move_count: self.move_count(),
            board: self.board_array(),
            history: self.history.iter().map(MoveSummary::from).collect(),
            in_check: self.in_check(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// GameSnapshot
// =========================================================================

/// Serializable view of a game.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: String,
    pub created_at: String,
    pub turn: Color,
    pub move_count: u32,
    pub board: [[String; 8]; 8],
    pub history: Vec<MoveSummary>,
    pub in_check: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSummary {
    pub from: String,
    pub to: String,
    pub piece: String,
    pub captured: Option<String>,
}

impl From<&MoveRecord> for MoveSummary {
    fn from(record: &MoveRecord) -> Self {
        MoveSummary {
            from: record.start.to_algebraic(),
            to: record.end.to_algebraic(),
            piece: record.moved.kind.to_string(),
            captured: record.captured.map(|p| p.kind.to_string()),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
