//! The line oriented command loop.
//!
//! Every line of input is either a FEN string, a blank line (ignored), or one of the words
//! `quit` / `exit`. For each FEN, the engine searches the position and answers with a single
//! line:
//!
//! ```md,ignore
//! Best move: e2e4
//! Best move: 0000            (the side to move has no moves)
//! Error: invalid FEN: ...    (the line could not be read as a position)
//! ```

use crate::board::Board;
use crate::bots::{try_find_best_move, try_find_best_move_parallel, SearchError};
use crate::core::piece_move::BitMove;
use crate::tools::eval::EvalKind;

use chrono::Utc;

use std::io::{self, BufRead, Write};

pub static ID_NAME: &str = "bitsearch";
pub static VERSION: &str = env!("CARGO_PKG_VERSION");

/// Printed before reading each line, when prompting is on.
pub static PROMPT: &str = "Enter FEN (or 'quit' to exit): ";

/// Printed in place of a move when the side to move has none.
pub static NO_MOVE: &str = "0000";

/// Settings for an `Engine`.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOptions {
    /// Plies searched for every position. Must be at least 1.
    pub depth: u16,
    /// Size of the thread pool the binary builds for parallel search.
    pub threads: usize,
    /// Search the root moves in parallel.
    pub parallel: bool,
    /// Print a prompt before reading each line.
    pub prompt: bool,
    pub evaluator: EvalKind,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            depth: 4,
            threads: num_cpus::get(),
            parallel: false,
            prompt: true,
            evaluator: EvalKind::default(),
        }
    }
}

/// What a single line of input asks for.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Quit,
    Skip,
    Position(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Command<'a> {
        match line.trim() {
            "" => Command::Skip,
            "quit" | "exit" => Command::Quit,
            fen => Command::Position(fen),
        }
    }
}

pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Engine { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Searches a single position with the configured depth, evaluator and mode.
    pub fn best_move(&self, board: &Board) -> Result<BitMove, SearchError> {
        let eval = &self.options.evaluator;
        if self.options.parallel {
            try_find_best_move_parallel(board, self.options.depth, eval)
        } else {
            try_find_best_move(board, self.options.depth, eval)
        }
    }

    /// Answers one FEN string with the line to print back.
    pub fn respond(&self, fen: &str) -> String {
        let board = match Board::from_fen(fen) {
            Ok(board) => board,
            Err(e) => {
                warn!("rejected position {:?}: {}", fen, e);
                return format!("Error: invalid FEN: {}", e);
            }
        };

        let start = Utc::now();
        let result = self.best_move(&board);
        let elapsed = Utc::now() - start;
        info!(
            "searched {} at depth {} in {} ms",
            fen,
            self.options.depth,
            elapsed.num_milliseconds()
        );

        match result {
            Ok(mov) => format!("Best move: {}", mov),
            Err(SearchError::NoMoveAvailable) => format!("Best move: {}", NO_MOVE),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Reads positions from `input` until end of input or a quit command, writing one answer
    /// per position to `output`.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        info!(
            "{} {} ready: depth {}, {} evaluator, parallel {}",
            ID_NAME, VERSION, self.options.depth, self.options.evaluator, self.options.parallel
        );
        let mut line = String::new();
        loop {
            if self.options.prompt {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Command::Quit => break,
                Command::Skip => continue,
                Command::Position(fen) => {
                    let answer = self.respond(fen);
                    writeln!(output, "{}", answer)?;
                    output.flush()?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_engine(depth: u16) -> Engine {
        Engine::new(EngineOptions {
            depth,
            prompt: false,
            evaluator: EvalKind::Material,
            ..EngineOptions::default()
        })
    }

    fn run(engine: &Engine, input: &str) -> String {
        let mut out = Vec::new();
        engine.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse("  quit \n"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("\n"), Command::Skip);
        assert_eq!(Command::parse("8/8 w - -\n"), Command::Position("8/8 w - -"));
    }

    #[test]
    fn answers_each_line() {
        let engine = quiet_engine(1);
        let out = run(
            &engine,
            "4k3/8/8/3q4/8/8/3Q4/4K3 w - - 0 1\n\nnonsense\n8/8/8/8/8/8/8/p7 b - - 0 1\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Best move: d2d5");
        assert!(lines[1].starts_with("Error: invalid FEN"));
        assert_eq!(lines[2], "Best move: 0000");
    }

    #[test]
    fn stops_at_quit() {
        let engine = quiet_engine(1);
        let out = run(
            &engine,
            "quit\n4k3/8/8/3q4/8/8/3Q4/4K3 w - - 0 1\n",
        );
        assert!(out.is_empty());
    }

    #[test]
    fn prompts() {
        let engine = Engine::new(EngineOptions {
            depth: 1,
            ..EngineOptions::default()
        });
        let out = run(&engine, "exit\n");
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn parallel_matches_sequential() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 10";
        let seq = quiet_engine(2);
        let par = Engine::new(EngineOptions {
            parallel: true,
            ..seq.options().clone()
        });
        assert_eq!(seq.respond(fen), par.respond(fen));
    }

    #[test]
    fn zero_depth_is_reported() {
        let engine = quiet_engine(0);
        assert_eq!(
            engine.respond("4k3/8/8/8/8/8/8/4K3 w - - 0 1"),
            "Error: search depth must be at least 1"
        );
    }
}
