//! Board primitives commonly used within [`crate::chess`]: files, ranks,
//! positions and colors.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use itertools::Itertools;

use crate::chess::direction::Direction;
use crate::chess::error::ChessError;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Represents a column (vertical row) of the board. In coordinate notation, it
/// is represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files from left (`a`) to right (`h`).
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];
}

impl TryFrom<char> for File {
    type Error = ChessError;

    fn try_from(file: char) -> Result<Self, ChessError> {
        match file {
            'a'..='h' => Self::try_from(file as u8 - b'a'),
            _ => Err(ChessError::InvalidCoordinate(file.to_string())),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = ChessError;

    fn try_from(column: u8) -> Result<Self, ChessError> {
        Self::ALL
            .get(usize::from(column))
            .copied()
            .ok_or_else(|| ChessError::InvalidCoordinate(format!("file index {column}")))
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}

/// Represents a horizontal row of the board. In coordinate notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// All ranks from White's side (`1`) to Black's side (`8`).
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    pub(super) const fn backrank(color: Color) -> Self {
        match color {
            Color::White => Self::One,
            Color::Black => Self::Eight,
        }
    }

    pub(super) const fn pawns_starting(color: Color) -> Self {
        match color {
            Color::White => Self::Two,
            Color::Black => Self::Seven,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = ChessError;

    fn try_from(rank: char) -> Result<Self, ChessError> {
        match rank {
            '1'..='8' => Self::try_from(rank as u8 - b'1'),
            _ => Err(ChessError::InvalidCoordinate(rank.to_string())),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = ChessError;

    fn try_from(row: u8) -> Result<Self, ChessError> {
        Self::ALL
            .get(usize::from(row))
            .copied()
            .ok_or_else(|| ChessError::InvalidCoordinate(format!("rank index {row}")))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A cell of the board: a (file, rank) pair. Both coordinates are always in
/// range, so any constructed [`Position`] is a valid cell.
///
/// ```
/// use kingfall::chess::core::{File, Position, Rank};
///
/// let position = Position::try_from("b1").unwrap();
/// assert_eq!(position, Position::new(File::B, Rank::One));
/// assert_eq!(position.to_string(), "b1");
/// assert!(Position::try_from("i9").is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    file: File,
    rank: Rank,
}

impl Position {
    /// Connects file (column) and rank (row) to form a full position.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn file(self) -> File {
        self.file
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Iterates over all cells of the board, from a1 to h8 rank by rank.
    pub fn all() -> impl Iterator<Item = Self> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Self::new(file, rank)))
    }

    /// Index of the cell in a rank-major grid where a1 is 0 and h8 is 63.
    pub(crate) fn index(self) -> usize {
        usize::from(self.rank as u8 * BOARD_WIDTH + self.file as u8)
    }

    /// Signed (file, rank) offset from `self` to `target`.
    pub(crate) const fn delta(self, target: Self) -> (i8, i8) {
        (
            target.file as i8 - self.file as i8,
            target.rank as i8 - self.rank as i8,
        )
    }

    /// Number of king steps between two positions, i.e. the largest of the
    /// file and rank distances.
    #[must_use]
    pub fn distance(self, other: Self) -> u8 {
        let files = (self.file as u8).abs_diff(other.file as u8);
        let ranks = (self.rank as u8).abs_diff(other.rank as u8);
        files.max(ranks)
    }

    /// Returns the position offset by given deltas or `None` if it would leave
    /// the board.
    #[must_use]
    pub fn shift(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = (self.file as u8).checked_add_signed(file_delta)?;
        let rank = (self.rank as u8).checked_add_signed(rank_delta)?;
        Some(Self::new(
            File::try_from(file).ok()?,
            Rank::try_from(rank).ok()?,
        ))
    }
}

impl TryFrom<&str> for Position {
    type Error = ChessError;

    /// Parses a two-character coordinate: file letter `a`..=`h` followed by
    /// rank digit `1`..=`8`.
    ///
    /// # Errors
    ///
    /// Returns [`ChessError::InvalidCoordinate`] for anything else.
    fn try_from(coordinate: &str) -> Result<Self, ChessError> {
        let invalid = || ChessError::InvalidCoordinate(coordinate.to_owned());
        let (file, rank) = coordinate.chars().collect_tuple().ok_or_else(invalid)?;
        Ok(Self::new(
            File::try_from(file).map_err(|_| invalid())?,
            Rank::try_from(rank).map_err(|_| invalid())?,
        ))
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(coordinate: &str) -> Result<Self, ChessError> {
        Self::try_from(coordinate)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = ChessError;

    /// Creates a position from zero-based (file, rank) indices.
    fn try_from((file, rank): (u8, u8)) -> Result<Self, ChessError> {
        Ok(Self::new(File::try_from(file)?, Rank::try_from(rank)?))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// The two sides of the game: White (having the advantage of the first turn)
/// and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// White pawns advance towards rank 8, Black pawns towards rank 1.
    pub(super) const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    pub(super) const fn capture_directions(self) -> [Direction; 2] {
        match self {
            Self::White => [Direction::UpLeft, Direction::UpRight],
            Self::Black => [Direction::DownLeft, Direction::DownRight],
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Color {
    type Error = ChessError;

    fn try_from(color: &str) -> Result<Self, ChessError> {
        match color {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => Err(ChessError::MalformedSnapshot(format!(
                "side to move should be 'w' or 'b', got '{color}'"
            ))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}
