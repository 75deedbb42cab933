//! Engine facade consumed by the GUI layer.
//!
//! Owns the board, the side-to-move flag and the search configuration.
//! The GUI drives play through two entry points: [`Engine::player_move`]
//! for the human side and [`Engine::bot_reply`] for the engine's answer.
//! Each successful call toggles side-to-move exactly once; nothing below
//! the facade ever touches that flag.

use log::{debug, info};

use crate::board::{
    find_best_move, Bitboard, Board, Color, MoveRecord, Piece, SearchParams, Square,
};

/// Engine tuning knobs.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Fixed search depth in plies
    pub search_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { search_depth: 4 }
    }
}

/// Outcome of asking the engine for its reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotReply {
    /// The engine applied this move
    Moved { from: Square, to: Square },
    /// The engine has no legal move and is in check; position unchanged
    Checkmate,
    /// The engine has no legal move but is not in check; position unchanged
    Stalemate,
}

/// Two-player chess engine: the human plays White, the engine answers as
/// Black with a fixed-depth alpha-beta search.
pub struct Engine {
    board: Board,
    white_to_move: bool,
    engine_color: Color,
    params: SearchParams,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            board: Board::new(),
            white_to_move: true,
            engine_color: Color::Black,
            params: SearchParams {
                depth: config.search_depth,
            },
        }
    }

    /// Attempt a human move given board coordinates (rank and file both
    /// 0..7). Returns false, leaving the position untouched, when the
    /// source square is empty or holds the wrong color, or when no legal
    /// move of that piece reaches the destination (which covers moves that
    /// would leave, or keep, the own king in check).
    pub fn player_move(
        &mut self,
        from_rank: usize,
        from_file: usize,
        to_rank: usize,
        to_file: usize,
    ) -> bool {
        let (Some(from), Some(to)) = (
            Square::try_new(from_rank, from_file),
            Square::try_new(to_rank, to_file),
        ) else {
            debug!("rejected move: coordinates off the board");
            return false;
        };

        let mover = self.side_to_move();
        let Some((color, _)) = self.board.piece_at(from) else {
            debug!("rejected {from}: empty source square");
            return false;
        };
        if color != mover {
            debug!("rejected {from}: not {mover}'s piece");
            return false;
        }

        let candidates = self.board.generate_piece_moves(from);
        let legal = self.board.filter_legal(candidates, mover);
        let to_bit = Bitboard::from_square(to);
        let Some(mut mv) = legal.into_iter().find(|m| m.to == to_bit) else {
            debug!("rejected {from}{to}: no legal move matches");
            return false;
        };

        self.board.make_move(&mut mv);
        self.white_to_move = !self.white_to_move;
        debug!("player played {mv}");
        true
    }

    /// Search for the engine's reply and apply it.
    ///
    /// With no legal reply the position is left untouched and the caller
    /// learns whether the engine is mated or stalemated.
    pub fn bot_reply(&mut self) -> BotReply {
        match find_best_move(&mut self.board, self.engine_color, &self.params) {
            Some(mut mv) => {
                info!("engine plays {mv} (score {})", mv.score);
                let reply = BotReply::Moved {
                    from: mv.from_square(),
                    to: mv.to_square(),
                };
                self.board.make_move(&mut mv);
                self.white_to_move = !self.white_to_move;
                reply
            }
            None if self.board.is_in_check(self.engine_color) => BotReply::Checkmate,
            None => BotReply::Stalemate,
        }
    }

    /// Restore the standard initial position; White to move, empty history.
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.white_to_move = true;
        debug!("board reset");
    }

    /// Take back the most recent ply; no-op on an empty history.
    ///
    /// Side-to-move is not toggled: the GUI retracts a full round by
    /// undoing twice, which lands back on a consistent turn.
    pub fn undo(&mut self) {
        if let Some(mv) = self.board.unmake_move() {
            debug!("took back {mv}");
        }
    }

    // Read-only queries for the renderer.

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.board.color_on(sq)
    }

    #[must_use]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.board.is_occupied(sq)
    }

    /// One of the twelve piece bitboards.
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.board.pieces_of(color, piece)
    }

    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    #[must_use]
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        self.board.is_stalemate(color)
    }

    /// The most recently applied move, if any (for move highlights).
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.board.last_move()
    }

    /// Direct board access for rendering helpers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}
