//! This module implements static [evaluation] of a board: material score of
//! each side and the resulting winner.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

use std::cmp::Ordering;
use std::fmt::Display;

use crate::chess::core::Color;

pub mod material;
pub mod score;

pub use material::ScoreCalculator;
pub use score::ColorScore;

/// Outcome of a game.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl Winner {
    /// Compares both sides' scores: the higher one wins, equal scores are a
    /// draw. The scores are matched to their sides by [`ColorScore::color`],
    /// so the argument order does not matter.
    #[must_use]
    pub fn of(first: ColorScore, second: ColorScore) -> Self {
        let (white, black) = match first.color() {
            Color::White => (first, second),
            Color::Black => (second, first),
        };
        match white.centipawns().cmp(&black.centipawns()) {
            Ordering::Greater => Self::White,
            Ordering::Less => Self::Black,
            Ordering::Equal => Self::Draw,
        }
    }
}

impl From<Color> for Winner {
    /// The given side wins, e.g. by capturing the opponent's king.
    fn from(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

impl Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "{} wins", Color::White),
            Self::Black => write!(f, "{} wins", Color::Black),
            Self::Draw => write!(f, "Draw"),
        }
    }
}
