use std::fmt::Display;

use crate::chess::core::Color;

/// Material evaluation of one side, in centipawns (100 = one pawn).
///
/// Fixed-point storage keeps comparisons exact: every weight and penalty is a
/// multiple of half a pawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorScore {
    color: Color,
    centipawns: i32,
}

impl ColorScore {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(color: Color, centipawns: i32) -> Self {
        Self { color, centipawns }
    }

    /// The side this score belongs to.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn centipawns(self) -> i32 {
        self.centipawns
    }

    /// Score in pawns, e.g. `37.5`.
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.centipawns) / 100.0
    }
}

impl Display for ColorScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.color, self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ColorScore::new(Color::White, 3800).to_string(), "White: 38");
        assert_eq!(ColorScore::new(Color::Black, 3750).to_string(), "Black: 37.5");
        assert_eq!(ColorScore::new(Color::Black, 0).to_string(), "Black: 0");
    }

    #[test]
    fn accessors() {
        let score = ColorScore::new(Color::Black, 250);
        assert_eq!(score.color(), Color::Black);
        assert_eq!(score.centipawns(), 250);
        assert!((score.value() - 2.5).abs() < f64::EPSILON);
    }
}
