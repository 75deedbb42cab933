//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use gambit::board::prelude::*;
//! ```

pub use super::{
    find_best_move, Bitboard, Board, Color, MoveRecord, Piece, SearchParams, Square, SquareError,
};
