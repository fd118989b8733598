//! Rules engine for a simplified two-player chess game: the board, move
//! validation, king capture as the end of the game and material scoring.
//!
//! ```
//! use kingfall::chess::board::Board;
//! use kingfall::chess::core::Color;
//! use kingfall::chess::error::ChessError;
//!
//! let mut board = Board::starting();
//! assert_eq!(board.make_move("b1", "c3"), Ok(false));
//! assert_eq!(
//!     board.make_move("c2", "c3"),
//!     Err(ChessError::WrongTurn(Color::Black))
//! );
//! ```

// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]

pub mod chess;
pub mod evaluation;

mod engine;
pub use engine::Engine;
