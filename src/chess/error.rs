//! Failures reported by the rules core. All of them are recoverable: a failed
//! move leaves the board untouched.

use crate::chess::core::{Color, Position};

/// Every way a coordinate, a move or a board snapshot can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Coordinate string does not match `[a-h][1-8]`.
    #[error("coordinate should match [a-h][1-8], got '{0}'")]
    InvalidCoordinate(String),

    /// There is no piece to move at the source position.
    #[error("there is no piece at {0}")]
    EmptySource(Position),

    /// The piece at the source belongs to the side that is not on move.
    #[error("it is {0}'s turn")]
    WrongTurn(Color),

    /// The target position holds a piece of the mover's own color.
    #[error("{0} is occupied by a piece of the same color")]
    FriendlyFire(Position),

    /// The piece can not move that way.
    #[error("the piece at {from} can not move to {to}")]
    IllegalGeometry {
        #[allow(missing_docs)]
        from: Position,
        #[allow(missing_docs)]
        to: Position,
    },

    /// A piece stands between the source and the target.
    #[error("the path from {from} to {to} is blocked at {obstacle}")]
    PathBlocked {
        #[allow(missing_docs)]
        from: Position,
        #[allow(missing_docs)]
        to: Position,
        #[allow(missing_docs)]
        obstacle: Position,
    },

    /// Board snapshot has wrong dimensions or unknown symbols.
    #[error("malformed board snapshot: {0}")]
    MalformedSnapshot(String),
}
