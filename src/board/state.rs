//! Board state: twelve piece bitboards, derived occupancy, move history.

use super::types::CASTLE_ALL;
use super::{Bitboard, Color, MoveRecord, Piece, Square};

/// Bitboard position with its move history.
///
/// The twelve piece bitboards are authoritative; `occupied` and
/// `all_occupied` are a cache recomputed by [`Board::update_occupancy`]
/// after every mutation. Side-to-move is deliberately not stored here:
/// the engine facade owns that flag, and move generation derives color
/// from the piece being moved so the search can generate for either side.
#[derive(Clone, Debug)]
pub struct Board {
    /// `pieces[color][piece]`, pawn/knight/bishop/rook/queen/king order
    pub(crate) pieces: [[Bitboard; 6]; 2],
    /// Derived: all pieces of one color
    pub(crate) occupied: [Bitboard; 2],
    /// Derived: union of both colors
    pub(crate) all_occupied: Bitboard,
    /// 4-bit castling-rights mask
    pub(crate) castling_rights: u8,
    /// Stack of applied moves; unmake always pops the top
    pub(crate) history: Vec<MoveRecord>,
}

impl Board {
    /// Standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            castling_rights: 0,
            history: Vec::new(),
        }
    }

    /// Restore the standard initial layout and clear the move history.
    pub fn reset(&mut self) {
        let white = Color::White.index();
        let black = Color::Black.index();

        self.pieces[white][Piece::Pawn.index()] = Bitboard(0xFF00);
        self.pieces[white][Piece::Knight.index()] = Bitboard(0x42);
        self.pieces[white][Piece::Bishop.index()] = Bitboard(0x24);
        self.pieces[white][Piece::Rook.index()] = Bitboard(0x81);
        self.pieces[white][Piece::Queen.index()] = Bitboard(0x08);
        self.pieces[white][Piece::King.index()] = Bitboard(0x10);

        // Black is the vertical mirror of White
        self.pieces[black][Piece::Pawn.index()] = Bitboard(0x00FF_0000_0000_0000);
        self.pieces[black][Piece::Knight.index()] = Bitboard(0x4200_0000_0000_0000);
        self.pieces[black][Piece::Bishop.index()] = Bitboard(0x2400_0000_0000_0000);
        self.pieces[black][Piece::Rook.index()] = Bitboard(0x8100_0000_0000_0000);
        self.pieces[black][Piece::Queen.index()] = Bitboard(0x0800_0000_0000_0000);
        self.pieces[black][Piece::King.index()] = Bitboard(0x1000_0000_0000_0000);

        self.castling_rights = CASTLE_ALL;
        self.history.clear();
        self.update_occupancy();
    }

    /// Recompute the derived occupancy boards from the twelve piece boards.
    pub(crate) fn update_occupancy(&mut self) {
        for c in 0..2 {
            let mut acc = 0u64;
            for p in 0..6 {
                acc |= self.pieces[c][p].0;
            }
            self.occupied[c] = Bitboard(acc);
        }
        self.all_occupied = Bitboard(self.occupied[0].0 | self.occupied[1].0);
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].0 |= Bitboard::from_square(sq).0;
        self.update_occupancy();
    }

    /// Piece and color on a square, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = Bitboard::from_square(sq).0;
        if self.all_occupied.0 & bit == 0 {
            return None;
        }

        let color = if self.occupied[0].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        let c_idx = color.index();
        for p_idx in 0..6 {
            if self.pieces[c_idx][p_idx].0 & bit != 0 {
                return Some((color, Piece::from_index(p_idx)));
            }
        }

        None
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Returns true if any piece stands on the square
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.all_occupied.contains(sq)
    }

    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        !self.is_occupied(sq)
    }

    /// Bitboard of one piece kind of one color.
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Mutable handle to a piece bitboard, resolved from its tag.
    #[inline]
    pub(crate) fn bitboard_mut(&mut self, color: Color, piece: Piece) -> &mut Bitboard {
        &mut self.pieces[color.index()][piece.index()]
    }

    /// The most recently applied move, if any (for GUI highlights).
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Number of moves currently on the history stack.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
