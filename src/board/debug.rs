//! Board rendering and consistency checks.

use std::fmt;

use super::{Board, Color, Square};

impl fmt::Display for Board {
    /// ASCII board, rank 8 at the top. Uppercase White, lowercase Black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let ch = match self.piece_at(Square::new(rank, file)) {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((_, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}

impl Board {
    /// The twelve piece boards are pairwise disjoint, the occupancy cache
    /// agrees with them, and no color has more than one king. Checked via
    /// `debug_assert!` after every make/unmake.
    pub(crate) fn bitboards_consistent(&self) -> bool {
        let mut seen = 0u64;
        for color_boards in &self.pieces {
            for bb in color_boards {
                if seen & bb.0 != 0 {
                    return false;
                }
                seen |= bb.0;
            }
        }

        for c in 0..2 {
            let mut acc = 0u64;
            for p in 0..6 {
                acc |= self.pieces[c][p].0;
            }
            if acc != self.occupied[c].0 {
                return false;
            }
        }
        if self.all_occupied.0 != (self.occupied[0].0 | self.occupied[1].0) {
            return false;
        }

        self.pieces[0][5].popcount() <= 1 && self.pieces[1][5].popcount() <= 1
    }
}
