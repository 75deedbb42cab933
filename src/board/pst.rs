//! Piece-square tables.
//!
//! Indexed from White's perspective, row-major with a1 = 0; Black mirrors
//! by indexing with `63 - sq`. Values are small integers on the same scale
//! as the material values in `Piece::material`.

#[rustfmt::skip]
pub(crate) const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     3,  2,  1, -1, -1, -1,  1,  2,
     2,  2,  4,  6,  6,  4,  2,  2,
     1,  1,  2,  5,  5,  2,  1,  1,
     0,  0,  1,  3,  3,  1,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     5,  5,  5,  5,  5,  5,  5,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
pub(crate) const KNIGHT_PST: [i32; 64] = [
    -5, -2, -2, -2, -2, -2, -2, -5,
    -2,  0,  0,  3,  3,  0,  0, -2,
    -2,  0,  3,  6,  6,  3,  0, -2,
    -2,  3,  6,  8,  8,  6,  3, -2,
    -2,  3,  6,  8,  8,  6,  3, -2,
    -2,  0,  3,  6,  6,  3,  0, -2,
    -2,  0,  0,  3,  3,  0,  0, -2,
    -5, -2, -2, -2, -2, -2, -2, -5,
];

#[rustfmt::skip]
pub(crate) const BISHOP_PST: [i32; 64] = [
    -4, -2, -2, -2, -2, -2, -2, -4,
    -2,  2,  0,  0,  0,  0,  2, -2,
    -2,  0,  2,  3,  3,  2,  0, -2,
    -2,  1,  3,  4,  4,  3,  1, -2,
    -2,  1,  3,  4,  4,  3,  1, -2,
    -2,  0,  2,  3,  3,  2,  0, -2,
    -2,  2,  0,  0,  0,  0,  2, -2,
    -4, -2, -2, -2, -2, -2, -2, -4,
];

#[rustfmt::skip]
pub(crate) const ROOK_PST: [i32; 64] = [
     0,  0,  1,  2,  2,  1,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     4,  4,  4,  4,  4,  4,  4,  4,
     1,  1,  1,  1,  1,  1,  1,  1,
];

#[rustfmt::skip]
pub(crate) const QUEEN_PST: [i32; 64] = [
    -3, -2, -1, -1, -1, -1, -2, -3,
    -2,  0,  0,  0,  0,  0,  0, -2,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -1,  0,  1,  2,  2,  1,  0, -1,
    -1,  0,  1,  2,  2,  1,  0, -1,
    -1,  0,  1,  1,  1,  1,  0, -1,
    -2,  0,  0,  0,  0,  0,  0, -2,
    -3, -2, -1, -1, -1, -1, -2, -3,
];

#[rustfmt::skip]
pub(crate) const KING_PST: [i32; 64] = [
     2,  3,  1,  0,  0,  1,  3,  2,
     1,  1,  0, -1, -1,  0,  1,  1,
    -2, -3, -3, -4, -4, -3, -3, -2,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -2, -3, -3, -4, -4, -3, -3, -2,
     1,  1,  0, -1, -1,  0,  1,  1,
     2,  3,  1,  0,  0,  1,  3,  2,
];

/// Tables in `Piece::index` order.
pub(crate) const PIECE_SQUARE_TABLES: [&[i32; 64]; 6] = [
    &PAWN_PST,
    &KNIGHT_PST,
    &BISHOP_PST,
    &ROOK_PST,
    &QUEEN_PST,
    &KING_PST,
];
