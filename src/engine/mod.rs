pub mod board;
pub mod game;
pub mod movegen;
pub mod path;
pub mod rules;
pub mod threats;
pub mod types;

pub use board::Board;
pub use game::{Game, GameSnapshot};
pub use movegen::legal_destinations;
pub use rules::is_legal;
pub use threats::{ThreatReport, is_in_check, threatened_squares};
pub use types::*;
