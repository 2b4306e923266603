//! Alpha-beta with the root moves searched in parallel.
use super::alphabeta::alpha_beta;
use super::{ScoringMove, SearchNode};

use crate::core::score::*;
use crate::tools::Evaluator;

use rayon::prelude::*;

/// Searches each root move on its own rayon task, every one with a full window, then picks
/// the best. Children are independent copies, so the tasks share nothing but the evaluator.
///
/// Ties go to the move that comes first in `node`'s move order, so the result matches the
/// sequential [`alpha_beta`].
///
/// [`alpha_beta`]: ../alphabeta/fn.alpha_beta.html
pub fn parallel_alpha_beta<N, E>(node: &N, depth: u16, eval: &E) -> ScoringMove<N::Move>
where
    N: SearchNode + Sync + Send,
    N::Move: Send + Sync,
    E: Evaluator<N> + ?Sized,
{
    let maximizing = node.maximizing();
    if depth == 0 {
        return ScoringMove::blank(eval.evaluate(node));
    }
    if depth == 1 {
        return alpha_beta(node, depth, NEG_INFINITE, INFINITE, maximizing, eval);
    }

    let moves = node.moves();
    if moves.is_empty() {
        return ScoringMove::blank(stuck_score(maximizing));
    }

    let scored: Vec<ScoringMove<N::Move>> = moves
        .par_iter()
        .map(|mov| {
            let child = node.child(*mov);
            let score =
                alpha_beta(&child, depth - 1, NEG_INFINITE, INFINITE, !maximizing, eval).score;
            trace!("root move scored {}", score);
            ScoringMove::new(*mov, score)
        })
        .collect();

    scored.into_iter().fold(
        ScoringMove::blank(if maximizing { NEG_INFINITE } else { INFINITE }),
        |best, candidate| {
            let better = if maximizing {
                candidate.score > best.score
            } else {
                candidate.score < best.score
            };
            if better {
                candidate
            } else {
                best
            }
        },
    )
}
