//! Miscellaneous tools used for searching: the `Searcher` trait for building bots, the
//! `Evaluator` trait consumed by every search, and the evaluators themselves.

pub mod eval;

use crate::board::Board;
use crate::core::piece_move::BitMove;
use crate::core::score::Value;

/// Scores a position. Larger values are better for White.
///
/// Any `Fn(&N) -> Value` closure is an `Evaluator`, which is handy for searching synthetic
/// trees:
///
/// ```
/// use bitsearch::tools::Evaluator;
///
/// let leaf_value = |n: &u32| *n as f64;
/// assert_eq!(Evaluator::<u32>::evaluate(&leaf_value, &7), 7.0);
/// ```
pub trait Evaluator<N = Board>: Sync {
    fn evaluate(&self, node: &N) -> Value;
}

impl<N, F> Evaluator<N> for F
where
    F: Fn(&N) -> Value + Sync,
{
    #[inline]
    fn evaluate(&self, node: &N) -> Value {
        self(node)
    }
}

/// Defines an object that can play chess.
pub trait Searcher {
    fn name() -> &'static str
    where
        Self: Sized;

    fn best_move<E: Evaluator + ?Sized>(board: Board, depth: u16, eval: &E) -> BitMove
    where
        Self: Sized;
}
