//! The minimax algorithm, without any pruning. Visits every node up to the given depth.
use super::{ScoringMove, SearchNode};

use crate::core::score::*;
use crate::tools::Evaluator;

/// Searches every node of `node`'s tree to `depth` plies. Returns the same move and score as
/// [`alpha_beta`] with a full window, only slower.
///
/// [`alpha_beta`]: ../alphabeta/fn.alpha_beta.html
pub fn minimax<N, E>(node: &N, depth: u16, maximizing: bool, eval: &E) -> ScoringMove<N::Move>
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
        let score = minimax(&node.child(mov), depth - 1, !maximizing, eval).score;
        let better = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if better {
            best = ScoringMove::new(mov, score);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::tree::TreeNode;

    #[test]
    fn hand_checked_tree() {
        // Leaves of a depth 2, branching 2 tree score 10 * first + second.
        let eval = |n: &TreeNode| (n.path[0] * 10 + n.path[1]) as Value;
        let root = TreeNode::root(2, 2);
        // Black answers each of White's moves with its 0th reply: 0 and 10.
        let best = minimax(&root, 2, true, &eval);
        assert_eq!(best, ScoringMove::new(1, 10.0));

        let mut black_root = root.clone();
        black_root.max_to_move = false;
        let best = minimax(&black_root, 2, false, &eval);
        assert_eq!(best, ScoringMove::new(0, 1.0));
    }
}
