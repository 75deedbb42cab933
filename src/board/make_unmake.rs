//! Applying and reverting moves.
//!
//! `make_move` pushes the record onto the history stack and edits the
//! bitboards; `unmake_move` pops the top record and inverts it exactly.
//! Side-to-move is never touched here; the facade owns that flag, and the
//! search relies on matched make/unmake pairs instead of a turn toggle.

use super::{castle_bit, Bitboard, Board, Color, MoveRecord, Piece, Square};

impl Board {
    /// Apply a move produced by the generator. The record is amended with
    /// the state unmake needs (rights snapshot, capture credit on the
    /// search score) and pushed onto the history stack.
    pub fn make_move(&mut self, mv: &mut MoveRecord) {
        mv.prior_rights = self.castling_rights;
        if let Some((_, kind)) = mv.captured {
            // Ordering credit for the search; position state is unaffected.
            mv.score += kind.material();
        }
        self.history.push(*mv);

        if let Some(hop) = mv.castle {
            let rook = self.bitboard_mut(mv.color, Piece::Rook);
            rook.0 &= !mv.from.0;
            rook.0 |= mv.to.0;
            let king = self.bitboard_mut(mv.color, Piece::King);
            king.0 &= !hop.king_from.0;
            king.0 |= hop.king_to.0;
        } else {
            if let Some((cap_color, cap_piece)) = mv.captured {
                self.bitboard_mut(cap_color, cap_piece).0 &= !mv.to.0;
            }
            let mover = self.bitboard_mut(mv.color, mv.piece);
            mover.0 &= !mv.from.0;
            mover.0 |= mv.to.0;
        }

        self.update_castling_rights(mv);
        self.update_occupancy();
        debug_assert!(
            self.bitboards_consistent(),
            "make_move left inconsistent bitboards"
        );
    }

    /// Pop and invert the most recently made move.
    /// Returns `None` (and does nothing) on an empty history.
    pub fn unmake_move(&mut self) -> Option<MoveRecord> {
        let mv = self.history.pop()?;

        if let Some(hop) = mv.castle {
            let rook = self.bitboard_mut(mv.color, Piece::Rook);
            rook.0 &= !mv.to.0;
            rook.0 |= mv.from.0;
            let king = self.bitboard_mut(mv.color, Piece::King);
            king.0 &= !hop.king_to.0;
            king.0 |= hop.king_from.0;
        } else {
            let mover = self.bitboard_mut(mv.color, mv.piece);
            mover.0 &= !mv.to.0;
            mover.0 |= mv.from.0;
            if let Some((cap_color, cap_piece)) = mv.captured {
                self.bitboard_mut(cap_color, cap_piece).0 |= mv.to.0;
            }
        }

        self.castling_rights = mv.prior_rights;
        self.update_occupancy();
        debug_assert!(
            self.bitboards_consistent(),
            "unmake_move left inconsistent bitboards"
        );
        Some(mv)
    }

    /// Clear rights invalidated by this move: any king move (castling
    /// included) drops both of the mover's rights, a rook leaving its home
    /// square drops that side, and capturing a rook on its home square
    /// drops the victim's side.
    fn update_castling_rights(&mut self, mv: &MoveRecord) {
        if mv.piece == Piece::King || mv.is_castle() {
            self.castling_rights &= !(castle_bit(mv.color, 'K') | castle_bit(mv.color, 'Q'));
        } else if mv.piece == Piece::Rook {
            let back = if mv.color == Color::White { 0 } else { 7 };
            if mv.from == Bitboard::from_square(Square::new(back, 0)) {
                self.castling_rights &= !castle_bit(mv.color, 'Q');
            } else if mv.from == Bitboard::from_square(Square::new(back, 7)) {
                self.castling_rights &= !castle_bit(mv.color, 'K');
            }
        }

        if let Some((cap_color, Piece::Rook)) = mv.captured {
            let back = if cap_color == Color::White { 0 } else { 7 };
            if mv.to == Bitboard::from_square(Square::new(back, 0)) {
                self.castling_rights &= !castle_bit(cap_color, 'Q');
            } else if mv.to == Bitboard::from_square(Square::new(back, 7)) {
                self.castling_rights &= !castle_bit(cap_color, 'K');
            }
        }
    }
}
