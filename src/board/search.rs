//! Fixed-depth alpha-beta search.
//!
//! Plain minimax with an [α, β] window: the maximizing levels play `side`,
//! the minimizing levels its opponent, and leaves are scored by the static
//! evaluator from `side`'s point of view. The root level stamps every
//! searched move with its subtree score and the best one wins.

use log::debug;

use super::{Board, Color, MoveRecord};

/// Search configuration.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Fixed search depth in plies
    pub depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams { depth: 4 }
    }
}

/// Pick `side`'s best move at the configured depth.
///
/// Returns `None` when `side` has no legal move; the caller decides
/// whether that is checkmate or stalemate. The position is left
/// bit-identical to how it was found.
pub fn find_best_move(
    board: &mut Board,
    side: Color,
    params: &SearchParams,
) -> Option<MoveRecord> {
    let mut roots: Vec<MoveRecord> = Vec::new();
    alpha_beta(
        board,
        side,
        i32::MIN,
        i32::MAX,
        params.depth,
        true,
        Some(&mut roots),
    );

    roots.sort_by(|a, b| b.score.cmp(&a.score));
    match roots.first() {
        Some(best) => debug!(
            "depth {}: {} root moves, best {} ({})",
            params.depth,
            roots.len(),
            best,
            best.score
        ),
        None => debug!("depth {}: no legal reply for {side}", params.depth),
    }
    roots.into_iter().next()
}

/// One recursive level. A level with no legal moves returns the fold
/// identity (`i32::MIN` maximizing, `i32::MAX` minimizing), so mating
/// lines dominate without a dedicated mate score.
fn alpha_beta(
    board: &mut Board,
    side: Color,
    mut alpha: i32,
    mut beta: i32,
    depth: u32,
    maximizing: bool,
    mut roots: Option<&mut Vec<MoveRecord>>,
) -> i32 {
    if depth == 0 {
        return board.evaluate(side);
    }

    let color = if maximizing { side } else { side.opponent() };
    let moves = board.generate_moves_for(color);

    if maximizing {
        let mut best = i32::MIN;
        for mut mv in moves {
            board.make_move(&mut mv);
            let eval = alpha_beta(board, side, alpha, beta, depth - 1, false, None);
            board.unmake_move();

            best = best.max(eval);
            alpha = alpha.max(eval);
            if let Some(list) = roots.as_deref_mut() {
                mv.score = eval;
                list.push(mv);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mut mv in moves {
            board.make_move(&mut mv);
            let eval = alpha_beta(board, side, alpha, beta, depth - 1, true, None);
            board.unmake_move();

            best = best.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
