//! Pseudo-legal move generation and the legality filter.
//!
//! Generators work per piece and derive color from the piece itself, so
//! the search can enumerate for either side regardless of whose turn the
//! facade thinks it is. Legality is a single gate: simulate the move and
//! reject it if the mover's own king ends up attacked.

mod castling;
mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{Board, Color, MoveRecord, Piece, Square};

impl Board {
    /// Pseudo-legal moves for the piece standing on `from`.
    /// Empty when the square is empty.
    pub fn generate_piece_moves(&self, from: Square) -> Vec<MoveRecord> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color),
            Piece::Knight => self.generate_knight_moves(from, color),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen),
            Piece::King => self.generate_king_moves(from, color),
        }
    }

    pub(crate) fn generate_pseudo_moves(&self, color: Color) -> Vec<MoveRecord> {
        let mut moves = Vec::new();
        let c_idx = color.index();

        for from in self.pieces[c_idx][Piece::Pawn.index()].iter() {
            moves.extend(self.generate_pawn_moves(from, color));
        }
        for from in self.pieces[c_idx][Piece::Knight.index()].iter() {
            moves.extend(self.generate_knight_moves(from, color));
        }
        for from in self.pieces[c_idx][Piece::Bishop.index()].iter() {
            moves.extend(self.generate_slider_moves(from, color, SliderType::Bishop));
        }
        for from in self.pieces[c_idx][Piece::Rook.index()].iter() {
            moves.extend(self.generate_slider_moves(from, color, SliderType::Rook));
        }
        for from in self.pieces[c_idx][Piece::Queen.index()].iter() {
            moves.extend(self.generate_slider_moves(from, color, SliderType::Queen));
        }
        for from in self.pieces[c_idx][Piece::King.index()].iter() {
            moves.extend(self.generate_king_moves(from, color));
        }

        moves
    }

    /// Keep only moves that leave `color`'s own king safe. Castles are
    /// additionally rejected when the king starts in, passes through, or
    /// lands on an attacked square.
    pub(crate) fn filter_legal(
        &mut self,
        moves: Vec<MoveRecord>,
        color: Color,
    ) -> Vec<MoveRecord> {
        let opponent = color.opponent();
        let mut legal = Vec::with_capacity(moves.len());

        for mut m in moves {
            if let Some(hop) = m.castle {
                let king_from = hop.king_from.lsb();
                let king_to = hop.king_to.lsb();
                let transit = Square::new(
                    king_from.rank(),
                    usize::midpoint(king_from.file(), king_to.file()),
                );
                if self.is_square_attacked(king_from, opponent)
                    || self.is_square_attacked(transit, opponent)
                    || self.is_square_attacked(king_to, opponent)
                {
                    continue;
                }
            }

            self.make_move(&mut m);
            let safe = !self.is_in_check(color);
            self.unmake_move();
            if safe {
                legal.push(m);
            }
        }

        legal
    }

    /// Legal moves for `color`, ordered for the search: captures carry the
    /// captured material plus a bonus (penalty) for landing on a square the
    /// opponent does not (does) attack.
    pub fn generate_moves_for(&mut self, color: Color) -> Vec<MoveRecord> {
        let pseudo = self.generate_pseudo_moves(color);
        let mut legal = self.filter_legal(pseudo, color);

        let opponent = color.opponent();
        for m in legal.iter_mut() {
            if m.is_capture() {
                if self.is_square_attacked(m.to_square(), opponent) {
                    m.score -= 100;
                } else {
                    m.score += 100;
                }
            }
        }
        legal.sort_by(|a, b| b.score.cmp(&a.score));
        legal
    }

    /// `color` has no legal move while in check.
    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.generate_moves_for(color).is_empty()
    }

    /// `color` has no legal move but is not in check.
    #[must_use]
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.generate_moves_for(color).is_empty()
    }
}
