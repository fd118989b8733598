//! Board occupants and their movement geometry.
//!
//! [`Piece::can_move`] only answers whether the *shape* of a move is right for
//! the piece. Occupancy, obstruction and turn order depend on the rest of the
//! board and are checked by [`crate::chess::board::Board`].

use std::fmt::{self, Write};

use crate::chess::core::{Color, Position, Rank};
use crate::chess::direction::Direction;
use crate::chess::error::ChessError;

/// Contents of a single cell: one of the six standard piece kinds owned by a
/// player, or [`Piece::None`] for an empty cell.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn(Color),
    Rook(Color),
    Knight(Color),
    Bishop(Color),
    Queen(Color),
    King(Color),
    /// Empty cell. Has no color and never moves.
    None,
}

/// Shape of a geometrically valid pawn move. Pushes require an empty target,
/// captures require an opponent's piece there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PawnStep {
    /// One cell forward.
    Push,
    /// Two cells forward from the starting rank.
    DoublePush,
    /// One cell diagonally forward.
    Capture,
}

impl Piece {
    /// Owner of the piece, `None` for an empty cell.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Pawn(color)
            | Self::Rook(color)
            | Self::Knight(color)
            | Self::Bishop(color)
            | Self::Queen(color)
            | Self::King(color) => Some(color),
            Self::None => None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Self::King(_))
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_knight(self) -> bool {
        matches!(self, Self::Knight(_))
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Self::Pawn(_))
    }

    /// Checks whether the piece could travel from `source` to `target` on an
    /// otherwise empty board.
    #[must_use]
    pub fn can_move(self, source: Position, target: Position) -> bool {
        let Some(direction) = Direction::find(source, target) else {
            return false;
        };
        match self {
            Self::Rook(_) => direction.is_straight(),
            Self::Bishop(_) => direction.is_diagonal(),
            Self::Queen(_) => direction.is_straight() || direction.is_diagonal(),
            Self::Knight(_) => direction == Direction::Knight,
            Self::King(_) => {
                (direction.is_straight() || direction.is_diagonal())
                    && source.distance(target) == 1
            },
            Self::Pawn(_) => self.pawn_step(source, target).is_some(),
            Self::None => false,
        }
    }

    /// Classifies a pawn move. Returns `None` for non-pawns and for offsets a
    /// pawn can never make.
    #[must_use]
    pub fn pawn_step(self, source: Position, target: Position) -> Option<PawnStep> {
        let Self::Pawn(color) = self else {
            return None;
        };
        let direction = Direction::find(source, target)?;
        let distance = source.distance(target);
        if direction == color.push_direction() {
            match distance {
                1 => Some(PawnStep::Push),
                2 if source.rank() == Rank::pawns_starting(color) => Some(PawnStep::DoublePush),
                _ => None,
            }
        } else if distance == 1 && color.capture_directions().contains(&direction) {
            Some(PawnStep::Capture)
        } else {
            None
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ChessError;

    /// Uppercase letters are White pieces, lowercase are Black, `.` is an
    /// empty cell.
    fn try_from(symbol: char) -> Result<Self, ChessError> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match symbol.to_ascii_uppercase() {
            'K' => Ok(Self::King(color)),
            'Q' => Ok(Self::Queen(color)),
            'R' => Ok(Self::Rook(color)),
            'B' => Ok(Self::Bishop(color)),
            'N' => Ok(Self::Knight(color)),
            'P' => Ok(Self::Pawn(color)),
            '.' => Ok(Self::None),
            _ => Err(ChessError::MalformedSnapshot(format!(
                "piece symbol should be within \"KQRBNPkqrbnp.\", got '{symbol}'"
            ))),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::King(_) => 'K',
            Self::Queen(_) => 'Q',
            Self::Rook(_) => 'R',
            Self::Bishop(_) => 'B',
            Self::Knight(_) => 'N',
            Self::Pawn(_) => 'P',
            Self::None => return f.write_char('.'),
        };
        // White player: uppercase symbols, Black player: lowercase symbols.
        match self.color() {
            Some(Color::Black) => f.write_char(symbol.to_ascii_lowercase()),
            _ => f.write_char(symbol),
        }
    }
}
