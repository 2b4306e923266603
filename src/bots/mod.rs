//! Contains the fixed-depth searchers.
//!
//! Every searcher here walks a game tree through the [`SearchNode`] trait, so the same code
//! searches chess `Board`s and small hand-built trees alike. White (or whichever side a node
//! reports as maximizing) looks for the highest score, the other side for the lowest.
//!
//! [`SearchNode`]: trait.SearchNode.html

pub mod alphabeta;
pub mod minimax;
pub mod parallel_alphabeta;

use crate::board::Board;
use crate::core::piece_move::BitMove;
use crate::core::score::*;
use crate::tools::{Evaluator, Searcher};

use thiserror::Error;

/// A position in a game tree.
pub trait SearchNode: Sized {
    /// The edge leading from a node to one of its children.
    type Move: Copy;

    /// Returns if the player to move at this node wants the highest score.
    fn maximizing(&self) -> bool;

    /// Returns the moves available at this node, in the order they should be searched.
    fn moves(&self) -> Vec<Self::Move>;

    /// Returns the node reached by playing `mov`.
    fn child(&self, mov: Self::Move) -> Self;
}

impl SearchNode for Board {
    type Move = BitMove;

    #[inline]
    fn maximizing(&self) -> bool {
        self.turn().is_white()
    }

    #[inline]
    fn moves(&self) -> Vec<BitMove> {
        self.generate_moves()
    }

    /// Simulates the move and refreshes the attacks of the resulting board, so castling in
    /// the child sees the squares attacked there.
    #[inline]
    fn child(&self, mov: BitMove) -> Board {
        let mut next = self.simulate_move(mov);
        next.refresh_attacks();
        next
    }
}

/// A move paired with its score. Nodes that have no move to offer (leaves, or nodes where
/// the side to move is stuck) carry `None`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ScoringMove<M> {
    pub bit_move: Option<M>,
    pub score: Value,
}

impl<M> ScoringMove<M> {
    #[inline(always)]
    pub fn new(bit_move: M, score: Value) -> Self {
        ScoringMove {
            bit_move: Some(bit_move),
            score,
        }
    }

    #[inline(always)]
    pub fn blank(score: Value) -> Self {
        ScoringMove {
            bit_move: None,
            score,
        }
    }
}

/// Reasons a search can not produce a move.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search depth must be at least 1")]
    InvalidDepth,
    #[error("the side to move has no moves")]
    NoMoveAvailable,
}

/// Searcher that uses a MiniMax algorithm to search for a best move.
pub struct MiniMaxSearcher {}

/// Searcher that uses an alpha-beta algorithm to search for a best move.
pub struct AlphaBetaSearcher {}

/// Searcher that splits the root moves of an alpha-beta search across threads.
pub struct ParallelSearcher {}

impl Searcher for MiniMaxSearcher {
    fn name() -> &'static str {
        "MiniMax Searcher"
    }

    fn best_move<E: Evaluator + ?Sized>(board: Board, depth: u16, eval: &E) -> BitMove {
        run_root(board, depth, |root| {
            minimax::minimax(root, depth, root.maximizing(), eval)
        })
    }
}

impl Searcher for AlphaBetaSearcher {
    fn name() -> &'static str {
        "AlphaBeta Searcher"
    }

    fn best_move<E: Evaluator + ?Sized>(board: Board, depth: u16, eval: &E) -> BitMove {
        find_best_move(&board, depth, eval)
    }
}

impl Searcher for ParallelSearcher {
    fn name() -> &'static str {
        "Parallel Searcher"
    }

    fn best_move<E: Evaluator + ?Sized>(board: Board, depth: u16, eval: &E) -> BitMove {
        try_find_best_move_parallel(&board, depth, eval).unwrap_or_else(|_| BitMove::null())
    }
}

fn run_root<F>(mut board: Board, depth: u16, search: F) -> BitMove
where
    F: FnOnce(&Board) -> ScoringMove<BitMove>,
{
    if depth == 0 {
        return BitMove::null();
    }
    board.refresh_attacks();
    search(&board).bit_move.unwrap_or_else(BitMove::null)
}

/// Returns the best move for the player to move, searching `depth` plies with alpha-beta.
///
/// Returns the null move if `depth` is zero or if the player to move has no moves. Use
/// [`try_find_best_move`] to tell those cases apart.
///
/// The attacks of a copy of `board` are refreshed before searching, so `board` itself does
/// not need to be refreshed.
///
/// [`try_find_best_move`]: fn.try_find_best_move.html
pub fn find_best_move<E: Evaluator + ?Sized>(board: &Board, depth: u16, eval: &E) -> BitMove {
    try_find_best_move(board, depth, eval).unwrap_or_else(|_| BitMove::null())
}

/// Returns the best move for the player to move, searching `depth` plies with alpha-beta.
///
/// # Errors
///
/// `SearchError::InvalidDepth` if `depth` is zero, and `SearchError::NoMoveAvailable` if the
/// player to move has no pseudo-legal moves.
pub fn try_find_best_move<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u16,
    eval: &E,
) -> Result<BitMove, SearchError> {
    if depth == 0 {
        return Err(SearchError::InvalidDepth);
    }
    let mut root = board.clone();
    root.refresh_attacks();

    let maximizing = root.maximizing();
    let best = alphabeta::alpha_beta(&root, depth, NEG_INFINITE, INFINITE, maximizing, eval);
    debug!(
        "alpha-beta depth {} for {}: {:?} scored {}",
        depth,
        root.turn(),
        best.bit_move.map(|m| m.to_string()),
        best.score
    );
    best.bit_move.ok_or(SearchError::NoMoveAvailable)
}

/// Same as [`try_find_best_move`], but the root moves are searched in parallel on the global
/// rayon pool. Returns the same move.
///
/// [`try_find_best_move`]: fn.try_find_best_move.html
pub fn try_find_best_move_parallel<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u16,
    eval: &E,
) -> Result<BitMove, SearchError> {
    if depth == 0 {
        return Err(SearchError::InvalidDepth);
    }
    let mut root = board.clone();
    root.refresh_attacks();

    let best = parallel_alphabeta::parallel_alpha_beta(&root, depth, eval);
    debug!(
        "parallel alpha-beta depth {} for {}: {:?} scored {}",
        depth,
        root.turn(),
        best.bit_move.map(|m| m.to_string()),
        best.score
    );
    best.bit_move.ok_or(SearchError::NoMoveAvailable)
}
