use crate::engine::types::{ChessError, Square};

/// One line of user input, parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `e2 e3` or `e2e3`.
    Move { from: Square, to: Square },
    /// A lone square: pick the piece, then ask for a destination.
    Select(Square),
    /// `undo` or `undo N`.
    Undo(usize),
    /// `hint e2`.
    Hint(Square),
    /// `threat`.
    Threat,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ChessError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ChessError::InvalidCommand("empty input".into()));
        };
        let rest: Vec<&str> = words.collect();

        let cmd = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("quit" | "exit", []) => Command::Quit,
            ("help" | "?", []) => Command::Help,
            ("threat", []) => Command::Threat,
            ("undo", []) => Command::Undo(1),
            ("undo", [n]) => Command::Undo(parse_count(n)?),
            ("hint", [sq]) => Command::Hint(sq.parse()?),
            ("hint", _) => {
                return Err(ChessError::InvalidCommand(
                    "hint takes one square, e.g. \"hint e2\"".into(),
                ));
            }
            ("quit" | "exit" | "help" | "?" | "threat" | "undo", _) => {
                return Err(ChessError::InvalidCommand(line.trim().to_string()));
            }
            (_, [to]) => Command::Move {
                from: head.parse()?,
                to: to.parse()?,
            },
            (_, []) if head.len() == 4 && head.is_ascii() => {
                let (from, to) = head.split_at(2);
                Command::Move {
                    from: from.parse()?,
                    to: to.parse()?,
                }
            }
            (_, []) => Command::Select(head.parse()?),
            _ => return Err(ChessError::InvalidCommand(line.trim().to_string())),
        };
        Ok(cmd)
    }
}

fn parse_count(s: &str) -> Result<usize, ChessError> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ChessError::InvalidCommand(format!(
            "undo count must be a positive integer, got {s:?}"
        ))),
    }
}
