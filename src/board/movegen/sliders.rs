use super::super::attacks::{DIAG_DIRS, EVERY_DIR, ORTHO_DIRS};
use super::super::{Board, Color, MoveRecord, Piece, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn piece(self) -> Piece {
        match self {
            SliderType::Bishop => Piece::Bishop,
            SliderType::Rook => Piece::Rook,
            SliderType::Queen => Piece::Queen,
        }
    }

    fn dirs(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &DIAG_DIRS,
            SliderType::Rook => &ORTHO_DIRS,
            SliderType::Queen => &EVERY_DIR,
        }
    }
}

impl Board {
    /// Walk each ray until the edge, an own piece (stop) or an enemy piece
    /// (capture, then stop). Every empty square along the way is a quiet
    /// move.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Vec<MoveRecord> {
        let mut moves = Vec::new();
        let piece = slider.piece();

        for &(dr, df) in slider.dirs() {
            let mut r = from.rank() as isize + dr;
            let mut f = from.file() as isize + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                let to = Square::new(r as usize, f as usize);
                match self.piece_at(to) {
                    Some((c, _)) if c == color => break,
                    Some(captured) => {
                        moves.push(MoveRecord::new(color, piece, from, to, Some(captured)));
                        break;
                    }
                    None => moves.push(MoveRecord::new(color, piece, from, to, None)),
                }
                r += dr;
                f += df;
            }
        }

        if matches!(slider, SliderType::Rook) {
            self.push_castle_moves(from, color, &mut moves);
        }

        moves
    }
}
