//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, Color, Piece};

/// Strategy for the length of a random legal move sequence
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy for the seed driving move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn playout(board: &mut Board, seed: u64, num_moves: usize) -> usize {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut made = 0;
    for ply in 0..num_moves {
        let color = if ply % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        let moves = board.generate_moves_for(color);
        if moves.is_empty() {
            break;
        }
        let mut mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(&mut mv);
        made += 1;
    }
    made
}

proptest! {
    /// Unmaking everything that was made restores the position exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let before = board.pieces;
        let rights = board.castling_rights;

        let made = playout(&mut board, seed, num_moves);
        for _ in 0..made {
            prop_assert!(board.unmake_move().is_some());
        }

        prop_assert_eq!(board.pieces, before);
        prop_assert_eq!(board.castling_rights, rights);
        prop_assert_eq!(board.history_len(), 0);
    }

    /// Derived occupancy always agrees with the piece boards, the piece
    /// boards stay pairwise disjoint, and both kings survive legal play
    #[test]
    fn prop_invariants_hold_during_playout(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for ply in 0..num_moves {
            let color = if ply % 2 == 0 { Color::White } else { Color::Black };
            let moves = board.generate_moves_for(color);
            if moves.is_empty() {
                break;
            }
            let mut mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(&mut mv);

            prop_assert!(board.bitboards_consistent());
            prop_assert_eq!(
                board.all_occupied.0,
                board.occupied[0].0 | board.occupied[1].0
            );
            prop_assert_eq!(board.pieces_of(Color::White, Piece::King).popcount(), 1);
            prop_assert_eq!(board.pieces_of(Color::Black, Piece::King).popcount(), 1);
        }
    }

    /// Generated moves are structurally sound in any reachable position
    #[test]
    fn prop_generated_moves_well_formed(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        playout(&mut board, seed, num_moves);

        for color in [Color::White, Color::Black] {
            for m in board.generate_pseudo_moves(color) {
                prop_assert!(m.from.is_single());
                prop_assert!(m.to.is_single());
                prop_assert_ne!(m.from, m.to);
                prop_assert_eq!(m.color, color);
                if !m.is_castle() {
                    prop_assert_ne!(board.color_on(m.to_square()), Some(color));
                }
            }
        }
    }

    /// The legality filter never lets a move expose its own king
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        playout(&mut board, seed, num_moves);

        for color in [Color::White, Color::Black] {
            for mut m in board.generate_moves_for(color) {
                board.make_move(&mut m);
                let safe = !board.is_in_check(color);
                board.unmake_move();
                prop_assert!(safe, "{m} left the {color} king attacked");
            }
        }
    }
}
