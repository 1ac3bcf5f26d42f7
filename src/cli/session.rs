//! Interactive prompt loop.
//!
//! `Session` is generic over its input and output so the binary can run it on
//! stdin/stdout while tests drive it from an in-memory script.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::cli::command::Command;
use crate::cli::render::{Highlight, render};
use crate::config::AppConfig;
use crate::engine::game::Game;
use crate::engine::types::{ChessError, Square};

const HELP: &str = "\
Commands:
  e2 e3      move the piece on e2 to e3 (also e2e3)
  e2         select the piece on e2, then enter its destination
  hint e2    show where the piece on e2 can go
  threat     show your pieces the opponent can capture
  undo [N]   take back the last N moves (default 1)
  help       show this text
  quit       leave the game";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    game: Game,
    config: AppConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, config: AppConfig, input: R, output: W) -> Self {
        Session {
            game,
            config,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Give back the game and the output sink.
    pub fn finish(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!(game_id = %self.game.id, "session started");
        loop {
            self.show_board(Highlight::None)?;
            writeln!(
                self.output,
                "Move {}. {} to move.",
                self.game.move_count() + 1,
                capitalize(&self.game.turn().to_string())
            )?;

            let prompt = format!(
                "Select a piece ({}) or enter a command (help for a list): ",
                self.game.turn()
            );
            let Some(line) = self.prompt(&prompt)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let flow = match Command::parse(&line) {
                Ok(cmd) => {
                    debug!(?cmd, "command");
                    self.execute(cmd)?
                }
                Err(e) => {
                    debug!(input = line.trim(), error = %e, "unparseable input");
                    writeln!(self.output, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        info!(
            game_id = %self.game.id,
            moves = self.game.move_count(),
            "session ended"
        );
        Ok(())
    }

    fn execute(&mut self, cmd: Command) -> io::Result<Flow> {
        match cmd {
            Command::Move { from, to } => self.play(from, to)?,
            Command::Select(from) => return self.select(from),
            Command::Undo(n) => self.undo(n)?,
            Command::Hint(sq) => self.hint(sq)?,
            Command::Threat => self.threat()?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Two-step move entry: validate the piece first, then ask where to.
    fn select(&mut self, from: Square) -> io::Result<Flow> {
        if let Err(e) = self.game.hint(from) {
            writeln!(self.output, "{e}")?;
            return Ok(Flow::Continue);
        }
        let Some(line) = self.prompt("Select the destination square: ")? else {
            return Ok(Flow::Quit);
        };
        match line.trim().parse::<Square>() {
            Ok(to) => self.play(from, to)?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, from: Square, to: Square) -> io::Result<()> {
        match self.game.attempt_move(from, to) {
            Ok(record) => {
                write!(self.output, "Move played: {record}")?;
                if let Some(captured) = record.captured {
                    write!(self.output, ", captured {captured}")?;
                }
                writeln!(self.output)?;
            }
            Err(e @ ChessError::IllegalMove { .. }) => {
                writeln!(self.output, "Illegal move. {e}")?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn undo(&mut self, steps: usize) -> io::Result<()> {
        match self.game.undo(steps) {
            0 => writeln!(self.output, "Nothing to undo."),
            n => writeln!(self.output, "Undid {n} move(s)."),
        }
    }

    fn hint(&mut self, sq: Square) -> io::Result<()> {
        match self.game.hint(sq) {
            Ok(moves) => {
                self.show_board(Highlight::Moves(moves))?;
                if moves.is_empty() {
                    writeln!(self.output, "The piece on {sq} has no legal moves.")
                } else {
                    writeln!(self.output, "Legal moves are shown in brackets [ ].")
                }
            }
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn threat(&mut self) -> io::Result<()> {
        let report = self.game.threats();
        self.show_board(Highlight::Threats(report.squares))?;
        writeln!(
            self.output,
            "Threatened pieces are marked with asterisks * *."
        )?;
        if report.king_in_check {
            writeln!(self.output, "King is in check!")
        } else if report.squares.is_empty() {
            writeln!(self.output, "No threatened pieces.")
        } else if self.config.threat_summary {
            writeln!(self.output, "Threatened pieces: {}", report.squares.len())
        } else {
            Ok(())
        }
    }

    fn show_board(&mut self, highlight: Highlight) -> io::Result<()> {
        let text = render(self.game.board(), highlight, self.config.show_coordinates);
        writeln!(self.output)?;
        write!(self.output, "{text}")?;
        writeln!(self.output)
    }

    /// Print `text`, then read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
