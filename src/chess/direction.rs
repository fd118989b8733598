//! Geometric classification of the offset between two positions.

use crate::chess::core::Position;

/// Directions on the board from a perspective of White player, plus the
/// L-shaped jump of a knight.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards rank 8.
    Up,
    /// Towards rank 1.
    Down,
    /// Towards file a.
    Left,
    /// Towards file h.
    Right,
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as SouthEast.
    DownRight,
    /// (±1, ±2) or (±2, ±1) offset.
    Knight,
}

impl Direction {
    /// Classifies the offset from `source` to `target`.
    ///
    /// Returns `None` when the two positions are the same or do not lie on a
    /// straight line, an exact diagonal or a knight jump.
    ///
    /// ```
    /// use kingfall::chess::core::Position;
    /// use kingfall::chess::direction::Direction;
    ///
    /// let find = |source, target| {
    ///     Direction::find(
    ///         Position::try_from(source).unwrap(),
    ///         Position::try_from(target).unwrap(),
    ///     )
    /// };
    /// assert_eq!(find("c1", "e3"), Some(Direction::UpRight));
    /// assert_eq!(find("b1", "c3"), Some(Direction::Knight));
    /// assert_eq!(find("a1", "b4"), None);
    /// ```
    #[must_use]
    pub fn find(source: Position, target: Position) -> Option<Self> {
        let (file_delta, rank_delta) = source.delta(target);
        match (file_delta.signum(), rank_delta.signum()) {
            (0, 0) => None,
            (0, 1) => Some(Self::Up),
            (0, -1) => Some(Self::Down),
            (1, 0) => Some(Self::Right),
            (-1, 0) => Some(Self::Left),
            (file_sign, rank_sign) if file_delta.abs() == rank_delta.abs() => {
                match (file_sign, rank_sign) {
                    (-1, 1) => Some(Self::UpLeft),
                    (1, 1) => Some(Self::UpRight),
                    (-1, -1) => Some(Self::DownLeft),
                    _ => Some(Self::DownRight),
                }
            },
            _ => match (file_delta.abs(), rank_delta.abs()) {
                (1, 2) | (2, 1) => Some(Self::Knight),
                _ => None,
            },
        }
    }

    /// Up, Down, Left or Right.
    #[must_use]
    pub const fn is_straight(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// One of the four diagonals.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight
        )
    }

    /// Signed (file, rank) offset of a single step along the ray. Knight jumps
    /// are not rays and have no unit step.
    #[must_use]
    pub const fn step(self) -> Option<(i8, i8)> {
        match self {
            Self::Up => Some((0, 1)),
            Self::Down => Some((0, -1)),
            Self::Left => Some((-1, 0)),
            Self::Right => Some((1, 0)),
            Self::UpLeft => Some((-1, 1)),
            Self::UpRight => Some((1, 1)),
            Self::DownLeft => Some((-1, -1)),
            Self::DownRight => Some((1, -1)),
            Self::Knight => None,
        }
    }
}
