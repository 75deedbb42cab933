use super::super::{Board, Color, MoveRecord, Piece, Square};

impl Board {
    /// Single push, double push from the home rank, and file-adjacent
    /// diagonal captures. No en passant, no promotion: a pawn reaching the
    /// last rank simply stops generating pushes.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<MoveRecord> {
        let mut moves = Vec::new();
        let dir: isize = if color == Color::White { 1 } else { -1 };
        let start_rank: isize = if color == Color::White { 1 } else { 6 };

        let r = from.rank() as isize;
        let f = from.file() as isize;

        let forward_r = r + dir;
        if !(0..8).contains(&forward_r) {
            return moves;
        }

        let forward = Square::new(forward_r as usize, f as usize);
        if self.is_empty_square(forward) {
            moves.push(MoveRecord::new(color, Piece::Pawn, from, forward, None));

            if r == start_rank {
                let double = Square::new((r + 2 * dir) as usize, f as usize);
                if self.is_empty_square(double) {
                    moves.push(MoveRecord::new(color, Piece::Pawn, from, double, None));
                }
            }
        }

        // Captures must change file by exactly one, which also rules out
        // wrapping across the board edge.
        for df in [-1, 1] {
            let capture_f = f + df;
            if !(0..8).contains(&capture_f) {
                continue;
            }
            let target = Square::new(forward_r as usize, capture_f as usize);
            if let Some((target_color, target_piece)) = self.piece_at(target) {
                if target_color != color {
                    moves.push(MoveRecord::new(
                        color,
                        Piece::Pawn,
                        from,
                        target,
                        Some((target_color, target_piece)),
                    ));
                }
            }
        }

        moves
    }
}
