//! Strategies for creating a fresh [`Board`].

use crate::chess::board::Board;
use crate::chess::core::{Color, File, Position, Rank, BOARD_SIZE, BOARD_WIDTH};
use crate::chess::error::ChessError;
use crate::chess::piece::Piece;

/// Produces a fully populated board with the side to move.
pub trait BoardFactory {
    /// Creates the board.
    ///
    /// # Errors
    ///
    /// Returns [`ChessError::MalformedSnapshot`] if the factory was given an
    /// invalid layout.
    fn generate(&self) -> Result<Board, ChessError>;
}

/// Standard starting layout, White to move.
#[derive(Clone, Copy, Debug, Default)]
pub struct InitialBoardFactory;

impl BoardFactory for InitialBoardFactory {
    fn generate(&self) -> Result<Board, ChessError> {
        Ok(Board::starting())
    }
}

/// Board from an explicit snapshot: 8 rank strings from rank 8 (top) to rank 1
/// (bottom), 8 characters each. Uppercase letters are White pieces, lowercase
/// are Black, `.` is an empty cell:
///
/// ```
/// use kingfall::chess::core::Color;
/// use kingfall::chess::factory::{BoardFactory, CustomBoardFactory};
///
/// let snapshot = [
///     "....k...", //
///     "........", //
///     "........", //
///     "........", //
///     "........", //
///     "........", //
///     "....P...", //
///     "....K...",
/// ];
/// let board = CustomBoardFactory::new(&snapshot, Color::Black)
///     .generate()
///     .unwrap();
/// assert_eq!(board.turn(), Color::Black);
/// assert_eq!(board.piece_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomBoardFactory {
    ranks: Vec<String>,
    turn: Color,
}

impl CustomBoardFactory {
    /// Stores the snapshot as is. Validation happens in
    /// [`BoardFactory::generate`].
    #[must_use]
    pub fn new<S: AsRef<str>>(ranks: &[S], turn: Color) -> Self {
        Self {
            ranks: ranks.iter().map(|rank| rank.as_ref().to_owned()).collect(),
            turn,
        }
    }
}

impl TryFrom<&str> for CustomBoardFactory {
    type Error = ChessError;

    /// Reads a textual snapshot: the 8 rank lines followed by a line with the
    /// side to move (`w` or `b`). Surrounding whitespace and blank lines are
    /// ignored, so the output of [`Board`]'s `Display` followed by the side to
    /// move can be read back.
    fn try_from(input: &str) -> Result<Self, ChessError> {
        let mut lines = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let Some(turn) = lines.pop() else {
            return Err(ChessError::MalformedSnapshot("input is empty".to_string()));
        };
        Ok(Self::new(&lines, Color::try_from(turn)?))
    }
}

impl BoardFactory for CustomBoardFactory {
    fn generate(&self) -> Result<Board, ChessError> {
        if self.ranks.len() != usize::from(BOARD_WIDTH) {
            return Err(ChessError::MalformedSnapshot(format!(
                "expected {BOARD_WIDTH} ranks, got {}",
                self.ranks.len()
            )));
        }
        let mut grid = [Piece::None; BOARD_SIZE as usize];
        for (line, &rank) in self.ranks.iter().zip(Rank::ALL.iter().rev()) {
            let symbols = line.chars().collect::<Vec<_>>();
            if symbols.len() != usize::from(BOARD_WIDTH) {
                return Err(ChessError::MalformedSnapshot(format!(
                    "rank {rank} should have exactly {BOARD_WIDTH} cells, got '{line}'"
                )));
            }
            for (file, symbol) in File::ALL.into_iter().zip(symbols) {
                grid[Position::new(file, rank).index()] = Piece::try_from(symbol)?;
            }
        }
        Ok(Board::new(grid, self.turn))
    }
}
