//! Primitives for determining the value / score of a position.
//!
//! A `Value` is a real number, larger meaning better for White. Evaluators are free to return
//! any finite value; the search only compares them.

/// Type for `f64` to determine the `Value` of an evaluation.
pub type Value = f64;

/// Score given to a side with no pseudo-legal moves left, from the point of view of the
/// side that is stuck: a stuck maximizer scores `-MATE`, a stuck minimizer `MATE`.
pub const MATE: Value = 99999.0;

pub const INFINITE: Value = f64::INFINITY;
pub const NEG_INFINITE: Value = f64::NEG_INFINITY;

pub const PAWN: Value = 100.0;
pub const KNIGHT: Value = 300.0;
pub const BISHOP: Value = 300.0;
pub const ROOK: Value = 500.0;
pub const QUEEN: Value = 900.0;
pub const KING: Value = 20000.0;

/// Returns the sentinel score for a node whose side to move has no moves.
#[inline]
pub fn stuck_score(maximizing: bool) -> Value {
    if maximizing {
        -MATE
    } else {
        MATE
    }
}
