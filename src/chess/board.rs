//! Full board state: what stands on each of the 64 cells and whose turn it is.
//!
//! [`Board::make_move`] and [`Board::apply`] are the only ways to mutate the
//! board. Both validate the move completely before touching the grid, so a
//! rejected move leaves the board exactly as it was.

use std::fmt;
use std::mem;

use arrayvec::ArrayVec;
use itertools::Itertools;
use tracing::{debug, info};

use crate::chess::core::{Color, File, Position, Rank, BOARD_SIZE, BOARD_WIDTH};
use crate::chess::direction::Direction;
use crate::chess::error::ChessError;
use crate::chess::piece::{PawnStep, Piece};
use crate::evaluation::material::ScoreCalculator;

/// Cells strictly between two positions on one line: at most 6 on an 8x8
/// board.
type Path = ArrayVec<Position, { BOARD_WIDTH as usize - 2 }>;

/// Board grid with the side to move. Created by a
/// [`crate::chess::factory::BoardFactory`] and then mutated in place by
/// accepted moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // Rank-major: a1, b1, ..., h1, a2, ..., h8.
    grid: [Piece; BOARD_SIZE as usize],
    turn: Color,
}

impl Board {
    pub(super) const fn new(grid: [Piece; BOARD_SIZE as usize], turn: Color) -> Self {
        Self { grid, turn }
    }

    /// Creates the standard starting layout: White on ranks 1-2, Black on
    /// ranks 7-8, White to move.
    #[must_use]
    pub fn starting() -> Self {
        let mut grid = [Piece::None; BOARD_SIZE as usize];
        for color in [Color::White, Color::Black] {
            let backrank = [
                Piece::Rook(color),
                Piece::Knight(color),
                Piece::Bishop(color),
                Piece::Queen(color),
                Piece::King(color),
                Piece::Bishop(color),
                Piece::Knight(color),
                Piece::Rook(color),
            ];
            for (file, piece) in File::ALL.into_iter().zip(backrank) {
                grid[Position::new(file, Rank::backrank(color)).index()] = piece;
                grid[Position::new(file, Rank::pawns_starting(color)).index()] = Piece::Pawn(color);
            }
        }
        Self::new(grid, Color::White)
    }

    /// Parses both coordinates and applies the move.
    ///
    /// Returns `true` if the move captured the opponent's king, which ends the
    /// game. Stopping the game afterwards is up to the caller.
    ///
    /// # Errors
    ///
    /// [`ChessError::InvalidCoordinate`] if either coordinate can not be
    /// parsed, otherwise any error of [`Board::apply`].
    pub fn make_move(&mut self, source: &str, target: &str) -> Result<bool, ChessError> {
        let source = Position::try_from(source)?;
        let target = Position::try_from(target)?;
        self.apply(source, target)
    }

    /// Moves the piece at `source` to `target`, capturing whatever stands
    /// there, and passes the turn to the opponent.
    ///
    /// Returns `true` if the captured piece was a king.
    ///
    /// # Errors
    ///
    /// Checks are performed in this order and the first failure is returned:
    ///
    /// - [`ChessError::EmptySource`]: nothing stands at `source`.
    /// - [`ChessError::WrongTurn`]: the piece belongs to the side not on move.
    /// - [`ChessError::FriendlyFire`]: `target` holds a piece of the same
    ///   color.
    /// - [`ChessError::IllegalGeometry`]: the piece can not move that way, or
    ///   a pawn pushes into an occupied cell or captures on an empty one.
    /// - [`ChessError::PathBlocked`]: a cell between `source` and `target` is
    ///   occupied. Knights jump and are never blocked.
    pub fn apply(&mut self, source: Position, target: Position) -> Result<bool, ChessError> {
        let piece = self
            .validate(source, target)
            .inspect_err(|error| debug!(%source, %target, %error, "rejected move"))?;
        let captured = mem::replace(&mut self.grid[target.index()], piece);
        self.grid[source.index()] = Piece::None;
        self.turn = !self.turn;
        debug!(%source, %target, %piece, %captured, "applied move");
        let king_captured = captured.is_king();
        if king_captured {
            info!(winner = %self.last_turn(), "king captured");
        }
        Ok(king_captured)
    }

    /// Runs every check of [`Board::apply`] and returns the piece that would
    /// move.
    fn validate(&self, source: Position, target: Position) -> Result<Piece, ChessError> {
        let piece = self.find_piece(source);
        let Some(color) = piece.color() else {
            return Err(ChessError::EmptySource(source));
        };
        if color != self.turn {
            return Err(ChessError::WrongTurn(self.turn));
        }
        let captured = self.find_piece(target);
        if captured.color() == Some(color) {
            return Err(ChessError::FriendlyFire(target));
        }
        let illegal = ChessError::IllegalGeometry {
            from: source,
            to: target,
        };
        if !piece.can_move(source, target) {
            return Err(illegal);
        }
        match piece.pawn_step(source, target) {
            Some(PawnStep::Push | PawnStep::DoublePush) if !captured.is_none() => {
                return Err(illegal)
            },
            Some(PawnStep::Capture) if captured.is_none() => return Err(illegal),
            _ => (),
        }
        if !piece.is_knight() {
            if let Some(obstacle) = Self::path(source, target)
                .into_iter()
                .find(|&position| !self.find_piece(position).is_none())
            {
                return Err(ChessError::PathBlocked {
                    from: source,
                    to: target,
                    obstacle,
                });
            }
        }
        Ok(piece)
    }

    /// Positions strictly between `source` and `target`, walking one step at a
    /// time along their direction. Empty if they are not on one line.
    fn path(source: Position, target: Position) -> Path {
        let mut path = Path::new();
        let Some((file_step, rank_step)) = Direction::find(source, target).and_then(Direction::step)
        else {
            return path;
        };
        let mut current = source.shift(file_step, rank_step);
        while let Some(position) = current {
            if position == target {
                break;
            }
            path.push(position);
            current = position.shift(file_step, rank_step);
        }
        path
    }

    /// Returns the contents of the cell, [`Piece::None`] if it is empty.
    #[must_use]
    pub fn find_piece(&self, position: Position) -> Piece {
        self.grid[position.index()]
    }

    /// The side to move.
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// The side that made the last move, i.e. the opponent of the side to
    /// move. Used to attribute a king capture.
    #[must_use]
    pub const fn last_turn(&self) -> Color {
        self.turn.opponent()
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.grid.iter().filter(|piece| !piece.is_none()).count()
    }

    /// Iterates over occupied cells.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all()
            .map(|position| (position, self.find_piece(position)))
            .filter(|(_, piece)| !piece.is_none())
    }

    /// Snapshots the current pieces for scoring.
    #[must_use]
    pub fn calculate_score(&self) -> ScoreCalculator {
        ScoreCalculator::new(self)
    }
}

impl fmt::Display for Board {
    /// Prints the grid from rank 8 (top) to rank 1 (bottom), one character per
    /// cell. The output is a valid snapshot for
    /// [`crate::chess::factory::CustomBoardFactory`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Rank::ALL
            .iter()
            .rev()
            .map(|&rank| {
                File::ALL
                    .iter()
                    .map(|&file| self.find_piece(Position::new(file, rank)))
                    .join("")
            })
            .join("\n");
        f.write_str(&rendered)
    }
}
