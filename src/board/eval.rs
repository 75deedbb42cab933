//! Static evaluation.
//!
//! Scores a position from `side`'s point of view. Own pieces earn four
//! times their material-plus-placement value; every piece on the board,
//! own included, then pays its bare material value back, and the piece
//! count difference is added on top. A second pass penalizes own pieces
//! that stand attacked, scaled by whether they are defended and by the
//! value gap to the cheapest attacker.

use super::pst::PIECE_SQUARE_TABLES;
use super::{Board, Color, Piece};

/// Weight on own material + placement
const OWN_PIECE_WEIGHT: i32 = 4;
/// Weight on the friendly-minus-enemy piece count
const PIECE_COUNT_WEIGHT: i32 = 2;
/// Value gap above which an undefended attacked piece costs 4x material
const UNDEFENDED_GAP: i32 = 13;
/// Value gap above which even a defended attacked piece costs 2x material
const DEFENDED_GAP: i32 = 12;

impl Board {
    /// Static score of the position from `side`'s point of view.
    #[must_use]
    pub fn evaluate(&self, side: Color) -> i32 {
        let mut score = 0;
        let mut friendly = 0;
        let mut enemy = 0;

        for sq in self.all_occupied.iter() {
            let Some((color, piece)) = self.piece_at(sq) else {
                continue;
            };
            let pst_idx = if color == Color::White {
                sq.index()
            } else {
                63 - sq.index()
            };
            let placed = piece.material() + PIECE_SQUARE_TABLES[piece.index()][pst_idx];

            if color == side {
                score += placed * OWN_PIECE_WEIGHT;
                friendly += 1;
            } else {
                enemy += 1;
            }
            score -= piece.material();
        }
        score += PIECE_COUNT_WEIGHT * (friendly - enemy);

        score + self.threat_penalties(side)
    }

    fn threat_penalties(&self, side: Color) -> i32 {
        let opponent = side.opponent();
        let mut penalty = 0;

        for piece in Piece::ALL {
            let material = piece.material();
            if material == 0 {
                continue;
            }
            for sq in self.pieces_of(side, piece).iter() {
                if !self.is_square_attacked(sq, opponent) {
                    continue;
                }
                let cheapest = self
                    .cheapest_attacker(sq, opponent)
                    .map_or(0, Piece::material);
                let gap = material - cheapest;
                let defended = self.is_square_attacked(sq, side);

                if defended {
                    if gap > DEFENDED_GAP {
                        penalty -= 2 * material;
                    }
                } else if gap > UNDEFENDED_GAP {
                    penalty -= 4 * material;
                } else {
                    penalty -= 2 * material;
                }
            }
        }

        penalty
    }
}
