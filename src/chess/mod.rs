//! Implementation of the game rules: board geometry, pieces and move
//! validation.

pub mod board;
pub mod core;
pub mod direction;
pub mod error;
pub mod factory;
pub mod piece;
