//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - pseudo-legal generation, castling, legality filtering
//! - `attacks.rs` - square attack detection
//! - `make_unmake.rs` - make/unmake correctness
//! - `eval.rs` - static evaluation
//! - `search.rs` - alpha-beta driver
//! - `proptest.rs` - property-based invariants

mod proptest;
mod search;

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use crate::board::{Board, Color, MoveRecord, Square};

    #[test]
    fn square_round_trips_through_json() {
        let sq = Square::new(3, 4);
        let json = serde_json::to_string(&sq).unwrap();
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(sq, back);
    }

    #[test]
    fn move_record_round_trips_through_json() {
        let mut board = Board::new();
        let mv = board.generate_moves_for(Color::White)[0];
        let json = serde_json::to_string(&mv).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
