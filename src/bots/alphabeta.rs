//! The alpha-beta algorithm.
use super::{ScoringMove, SearchNode};

use crate::core::score::*;
use crate::tools::Evaluator;

/// Searches `node` to `depth` plies, pruning branches that can not change the result.
///
/// `alpha` is the score the maximizing side is already guaranteed, and `beta` the score the
/// minimizing side is already guaranteed. Moves are searched in the order `node` returns
/// them, and a later move only replaces the best one if it scores strictly better, so the
/// first of several equally good moves is the one returned.
///
/// At depth zero the evaluator scores the node and no move is returned. A node with no
/// moves scores `-MATE` for a stuck maximizer and `MATE` for a stuck minimizer.
pub fn alpha_beta<N, E>(
    node: &N,
    depth: u16,
    mut alpha: Value,
    mut beta: Value,
    maximizing: bool,
    eval: &E,
) -> ScoringMove<N::Move>
where
    N: SearchNode,
    E: Evaluator<N> + ?Sized,
{
    if depth == 0 {
        return ScoringMove::blank(eval.evaluate(node));
    }

    let moves = node.moves();
    if moves.is_empty() {
        return ScoringMove::blank(stuck_score(maximizing));
    }

    let mut best = ScoringMove::blank(if maximizing { NEG_INFINITE } else { INFINITE });
    for mov in moves {
        let child = node.child(mov);
        let score = alpha_beta(&child, depth - 1, alpha, beta, !maximizing, eval).score;
        if maximizing {
            if score > best.score {
                best = ScoringMove::new(mov, score);
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = ScoringMove::new(mov, score);
            }
            beta = beta.min(best.score);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}
