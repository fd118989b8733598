//! The engine connects the rules core with a line-oriented text interface.
//!
//! [`Engine::game_loop`] is the "main loop": it reads one command per line,
//! executes it against the [`Board`] and prints the result. A command that
//! fails is reported and the next line is read, so a malformed input stream
//! never ends the game by itself.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use tracing::{debug, info};

use crate::chess::board::Board;
use crate::chess::core::Color;
use crate::engine::command::Command;
use crate::evaluation::{ColorScore, Winner};

mod command;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum GameStatus {
    /// Waiting for `start`.
    Ready,
    Running,
    Finished,
}

/// The Engine owns the board for the whole session and handles commands sent
/// by the player, including I/O.
pub struct Engine<R: BufRead, W: Write> {
    board: Board,
    status: GameStatus,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Engine<R, W> {
    /// Creates a new session over the given board and I/O.
    #[must_use]
    pub const fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            status: GameStatus::Ready,
            input,
            output,
        }
    }

    /// Continuously reads the input stream and executes commands until the
    /// game is finished or the input ends.
    ///
    /// # Errors
    ///
    /// Only I/O failures are returned. Invalid commands and rejected moves are
    /// printed as `error: <message>` and the loop continues.
    pub fn game_loop(&mut self) -> anyhow::Result<()> {
        self.print_intro()?;
        while self.status != GameStatus::Finished {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read the next command")?;
            if read == 0 {
                debug!("input stream ended");
                break;
            }
            if let Err(error) = self.execute(Command::parse(&line)) {
                debug!(%error, "command failed");
                writeln!(self.output, "error: {error}")?;
            }
        }
        Ok(())
    }

    /// Consumes the engine and returns the board in its final state.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    fn print_intro(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "> Kingfall: capture the opponent's king to win.")?;
        writeln!(self.output, "> start: begin the game")?;
        writeln!(self.output, "> move <source> <target>: move a piece, e.g. move b2 b3")?;
        writeln!(self.output, "> status: print the score of both sides")?;
        writeln!(self.output, "> end: finish the game and compare scores")?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Start => self.handle_start(),
            Command::Move { source, target } => self.handle_move(&source, &target),
            Command::Status => self.handle_status(),
            Command::End => self.handle_end(),
            Command::Unknown(command) => bail!(
                "unsupported command '{command}', expected one of: start, move <source> <target>, status, end"
            ),
        }
    }

    fn ensure_running(&self) -> anyhow::Result<()> {
        if self.status != GameStatus::Running {
            bail!("the game has not started yet, enter `start` first");
        }
        Ok(())
    }

    fn handle_start(&mut self) -> anyhow::Result<()> {
        if self.status != GameStatus::Ready {
            bail!("the game has already started");
        }
        self.status = GameStatus::Running;
        info!(turn = %self.board.turn(), "game started");
        self.print_board()
    }

    fn handle_move(&mut self, source: &str, target: &str) -> anyhow::Result<()> {
        self.ensure_running()?;
        let king_captured = self.board.make_move(source, target)?;
        self.print_board()?;
        if king_captured {
            let winner = Winner::from(self.board.last_turn());
            writeln!(self.output, "{winner}")?;
            self.status = GameStatus::Finished;
        }
        Ok(())
    }

    fn handle_status(&mut self) -> anyhow::Result<()> {
        self.ensure_running()?;
        let (white, black) = self.scores();
        writeln!(self.output, "{white}")?;
        writeln!(self.output, "{black}")?;
        Ok(())
    }

    /// Finishes the game and declares the winner by score.
    fn handle_end(&mut self) -> anyhow::Result<()> {
        let (white, black) = self.scores();
        let winner = Winner::of(white, black);
        writeln!(self.output, "{white}")?;
        writeln!(self.output, "{black}")?;
        writeln!(self.output, "{winner}")?;
        info!(%winner, "game ended");
        self.status = GameStatus::Finished;
        Ok(())
    }

    fn scores(&self) -> (ColorScore, ColorScore) {
        let calculator = self.board.calculate_score();
        (
            calculator.calculate(Color::White),
            calculator.calculate(Color::Black),
        )
    }

    fn print_board(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}\n", self.board)?;
        Ok(())
    }
}
