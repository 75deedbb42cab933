//! Alpha-beta search tests.

use crate::board::{find_best_move, Board, Color, Piece, SearchParams, Square};

fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

fn params(depth: u32) -> SearchParams {
    SearchParams { depth }
}

#[test]
fn default_depth_is_four() {
    assert_eq!(SearchParams::default().depth, 4);
}

#[test]
fn search_leaves_the_position_bit_identical() {
    let mut board = Board::new();
    let before = board.clone();

    find_best_move(&mut board, Color::Black, &params(3));

    assert_eq!(board.pieces, before.pieces);
    assert_eq!(board.all_occupied, before.all_occupied);
    assert_eq!(board.castling_rights, before.castling_rights);
    assert_eq!(board.history_len(), before.history_len());
}

#[test]
fn grabs_a_hanging_queen() {
    let mut board = Board::empty();
    board.set_piece(sq("a8"), Color::Black, Piece::Rook);
    board.set_piece(sq("h8"), Color::Black, Piece::King);
    board.set_piece(sq("a4"), Color::White, Piece::Queen);
    board.set_piece(sq("h1"), Color::White, Piece::King);

    let best = find_best_move(&mut board, Color::Black, &params(2)).expect("a legal move");
    assert_eq!(best.from_square(), sq("a8"));
    assert_eq!(best.to_square(), sq("a4"));
}

#[test]
fn finds_a_back_rank_mate() {
    let mut board = Board::empty();
    board.set_piece(sq("h1"), Color::White, Piece::King);
    board.set_piece(sq("g2"), Color::White, Piece::Pawn);
    board.set_piece(sq("h2"), Color::White, Piece::Pawn);
    board.set_piece(sq("a8"), Color::Black, Piece::Rook);
    board.set_piece(sq("h8"), Color::Black, Piece::King);

    let best = find_best_move(&mut board, Color::Black, &params(2)).expect("a legal move");
    assert_eq!(best.from_square(), sq("a8"));
    assert_eq!(best.to_square(), sq("a1"));

    board.make_move(&mut best.clone());
    assert!(board.is_checkmate(Color::White));
}

#[test]
fn checkmated_side_has_no_reply() {
    let mut board = Board::empty();
    board.set_piece(sq("a8"), Color::Black, Piece::King);
    board.set_piece(sq("b7"), Color::White, Piece::Queen);
    board.set_piece(sq("b6"), Color::White, Piece::King);

    assert!(board.is_checkmate(Color::Black));
    assert!(find_best_move(&mut board, Color::Black, &params(2)).is_none());
}

#[test]
fn stalemated_side_has_no_reply() {
    let mut board = Board::empty();
    board.set_piece(sq("a8"), Color::Black, Piece::King);
    board.set_piece(sq("c7"), Color::White, Piece::Queen);
    board.set_piece(sq("b6"), Color::White, Piece::King);

    assert!(board.is_stalemate(Color::Black));
    assert!(find_best_move(&mut board, Color::Black, &params(2)).is_none());
}

#[test]
fn root_moves_carry_subtree_scores() {
    // Queen en prise: the capture must win the root, and the root score
    // must beat a sibling position where the queen sits out of reach
    let mut board = Board::empty();
    board.set_piece(sq("d8"), Color::Black, Piece::Rook);
    board.set_piece(sq("h8"), Color::Black, Piece::King);
    board.set_piece(sq("d2"), Color::White, Piece::Queen);
    board.set_piece(sq("a1"), Color::White, Piece::King);

    let best = find_best_move(&mut board, Color::Black, &params(1)).expect("a legal move");
    assert_eq!(best.to_square(), sq("d2"));

    let mut queen_safe = Board::empty();
    queen_safe.set_piece(sq("d8"), Color::Black, Piece::Rook);
    queen_safe.set_piece(sq("h8"), Color::Black, Piece::King);
    queen_safe.set_piece(sq("g3"), Color::White, Piece::Queen);
    queen_safe.set_piece(sq("a1"), Color::White, Piece::King);
    let stuck = find_best_move(&mut queen_safe, Color::Black, &params(1))
        .expect("a legal move");
    assert!(best.score > stuck.score);
}

#[test]
fn declines_a_defended_pawn() {
    // Rxb5 wins a pawn but hangs the rook to axb5
    let mut board = Board::empty();
    board.set_piece(sq("b8"), Color::Black, Piece::Rook);
    board.set_piece(sq("h8"), Color::Black, Piece::King);
    board.set_piece(sq("b5"), Color::White, Piece::Pawn);
    board.set_piece(sq("a4"), Color::White, Piece::Pawn);
    board.set_piece(sq("h1"), Color::White, Piece::King);

    let best = find_best_move(&mut board, Color::Black, &params(2)).expect("a move");
    assert_ne!(best.to_square(), sq("b5"));
}

#[test]
fn best_move_is_always_a_legal_move() {
    let mut board = Board::new();
    let legal: Vec<(Square, Square)> = board
        .generate_moves_for(Color::Black)
        .iter()
        .map(|m| (m.from_square(), m.to_square()))
        .collect();

    let best = find_best_move(&mut board, Color::Black, &params(2)).expect("a move");
    assert!(legal.contains(&(best.from_square(), best.to_square())));
}

#[test]
fn search_is_deterministic() {
    let mut a = Board::new();
    let mut b = Board::new();
    let first = find_best_move(&mut a, Color::Black, &params(2)).expect("a move");
    let second = find_best_move(&mut b, Color::Black, &params(2)).expect("a move");
    assert_eq!(first, second);
}
