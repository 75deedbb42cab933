use super::super::attacks::KING_ATTACKS;
use super::super::{Bitboard, Board, Color, MoveRecord, Piece, Square};

impl Board {
    /// Single-step king moves. Walking into an attacked square is not
    /// rejected here; the legality filter handles it.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> Vec<MoveRecord> {
        let mut moves = Vec::new();
        let own = self.occupied[color.index()].0;
        let targets = Bitboard(KING_ATTACKS[from.index()] & !own);

        for to in targets.iter() {
            moves.push(MoveRecord::new(color, Piece::King, from, to, self.piece_at(to)));
        }
        moves
    }
}
