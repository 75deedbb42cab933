//! Castling shortcut, attached to rook move generation.
//!
//! A castle is recorded as a rook move carrying the king hop. The a-rook
//! pairs with the king's g-file hop and lands on the f-file; the h-rook
//! mirrors it, pairing with the c-file hop and landing on the d-file.
//! Only the two squares the king crosses are required to be empty; the
//! squares between the rook and its destination are not inspected, so the
//! rook jumps anything in between. Emission also requires the matching
//! right to still be held and the king on its home square;
//! attacked-square rejection happens in the legality filter.

use super::super::{castle_bit, Bitboard, Board, Color, MoveRecord, Piece, Square};

impl Board {
    pub(crate) fn push_castle_moves(
        &self,
        rook_from: Square,
        color: Color,
        moves: &mut Vec<MoveRecord>,
    ) {
        let back = if color == Color::White { 0 } else { 7 };
        let king_home = Square::new(back, 4);
        if self.pieces_of(color, Piece::King) != Bitboard::from_square(king_home) {
            return;
        }

        // a-rook: king hops to the g-file, rook to the f-file
        if rook_from == Square::new(back, 0)
            && self.castling_rights & castle_bit(color, 'Q') != 0
            && self.is_empty_square(Square::new(back, 5))
            && self.is_empty_square(Square::new(back, 6))
        {
            moves.push(MoveRecord::castle(
                color,
                rook_from,
                Square::new(back, 5),
                king_home,
                Square::new(back, 6),
            ));
        }

        // h-rook, mirrored: king hops to the c-file, rook to the d-file
        if rook_from == Square::new(back, 7)
            && self.castling_rights & castle_bit(color, 'K') != 0
            && self.is_empty_square(Square::new(back, 3))
            && self.is_empty_square(Square::new(back, 2))
        {
            moves.push(MoveRecord::castle(
                color,
                rook_from,
                Square::new(back, 3),
                king_home,
                Square::new(back, 2),
            ));
        }
    }
}
