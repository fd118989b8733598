//! Material count using fixed "[standard piece valuations]" with a penalty for
//! stacked pawns.
//!
//! [standard piece valuations]: https://en.wikipedia.org/wiki/Chess_piece_relative_value

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Color, Position};
use crate::chess::piece::Piece;
use crate::evaluation::score::ColorScore;

const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 250;
const BISHOP_VALUE: i32 = 250;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;
// The king is never traded: losing it ends the game.
const KING_VALUE: i32 = 0;
/// Subtracted for every pawn beyond the first one on the same file.
const STACKED_PAWN_PENALTY: i32 = 50;

const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn(_) => PAWN_VALUE,
        Piece::Knight(_) => KNIGHT_VALUE,
        Piece::Bishop(_) => BISHOP_VALUE,
        Piece::Rook(_) => ROOK_VALUE,
        Piece::Queen(_) => QUEEN_VALUE,
        Piece::King(_) | Piece::None => KING_VALUE,
    }
}

/// Snapshot of the pieces on a board, detached from later moves.
#[derive(Clone, Debug)]
pub struct ScoreCalculator {
    pieces: Vec<(Position, Piece)>,
}

impl ScoreCalculator {
    /// Copies the pieces currently on the board.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        Self {
            pieces: board.pieces().collect(),
        }
    }

    /// Sums the values of `color`'s pieces and subtracts the stacked pawn
    /// penalty, counted on each file independently.
    #[must_use]
    pub fn calculate(&self, color: Color) -> ColorScore {
        let own = || {
            self.pieces
                .iter()
                .filter(move |(_, piece)| piece.color() == Some(color))
        };
        let material: i32 = own().map(|&(_, piece)| piece_value(piece)).sum();
        let stacked: usize = own()
            .filter(|(_, piece)| piece.is_pawn())
            .counts_by(|(position, _)| position.file())
            .into_values()
            .map(|pawns| pawns - 1)
            .sum();
        // At most 56 stacked pawns fit on the board.
        let penalty = i32::try_from(stacked)
            .map_or(i32::MAX, |stacked| STACKED_PAWN_PENALTY.saturating_mul(stacked));
        ColorScore::new(color, material - penalty)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::factory::{BoardFactory, CustomBoardFactory};

    fn score(ranks: [&str; 8], color: Color) -> i32 {
        CustomBoardFactory::new(&ranks, Color::White)
            .generate()
            .unwrap()
            .calculate_score()
            .calculate(color)
            .centipawns()
    }

    #[test]
    fn starting_position() {
        let calculator = Board::starting().calculate_score();
        // 8 pawns, 2 knights, 2 bishops, 2 rooks and a queen.
        assert_eq!(calculator.calculate(Color::White).centipawns(), 3700);
        assert_eq!(calculator.calculate(Color::Black).centipawns(), 3700);
    }

    #[test]
    fn piece_values() {
        let ranks = [
            "rnbqk...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "....K..P",
        ];
        assert_eq!(score(ranks, Color::Black), 500 + 250 + 250 + 900);
        assert_eq!(score(ranks, Color::White), 100);
    }

    #[test]
    fn stacked_pawns() {
        let spread = [
            "....k...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "PP......", //
            "....K...",
        ];
        let stacked = [
            "....k...", //
            "........", //
            "........", //
            "........", //
            "........", //
            "P.......", //
            "P.......", //
            "....K...",
        ];
        assert_eq!(score(spread, Color::White), 200);
        assert_eq!(score(stacked, Color::White), 150);
    }

    #[test]
    fn stacked_pawns_per_file() {
        let ranks = [
            "....k...", //
            "p.......", //
            "p......p", //
            "p......p", //
            "........", //
            "........", //
            "...P....", //
            "....K...",
        ];
        // Three pawns on a, two on h: 5 pawns, 3 of them stacked.
        assert_eq!(score(ranks, Color::Black), 500 - 150);
        assert_eq!(score(ranks, Color::White), 100);
    }

    #[test]
    fn whole_file_of_pawns() {
        let ranks = [
            "P.......", //
            "P.......", //
            "P.......", //
            "P.......", //
            "P.......", //
            "P.......", //
            "P.......", //
            "P.......",
        ];
        assert_eq!(score(ranks, Color::White), 800 - 7 * 50);
        assert_eq!(score(ranks, Color::Black), 0);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut board = Board::starting();
        let calculator = board.calculate_score();
        assert_eq!(board.make_move("b1", "c3"), Ok(false));
        assert_eq!(board.make_move("d7", "d5"), Ok(false));
        assert_eq!(board.make_move("c3", "d5"), Ok(false));
        assert_eq!(calculator.calculate(Color::Black).centipawns(), 3700);
        assert_eq!(
            board.calculate_score().calculate(Color::Black).centipawns(),
            3600
        );
    }
}
