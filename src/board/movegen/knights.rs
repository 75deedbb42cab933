use super::super::attacks::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Color, MoveRecord, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> Vec<MoveRecord> {
        let mut moves = Vec::new();
        let own = self.occupied[color.index()].0;
        let targets = Bitboard(KNIGHT_ATTACKS[from.index()] & !own);

        for to in targets.iter() {
            moves.push(MoveRecord::new(color, Piece::Knight, from, to, self.piece_at(to)));
        }
        moves
    }
}
