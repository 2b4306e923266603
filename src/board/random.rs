//! Random `Board` generation for tests and benchmarks.

use super::Board;

use crate::core::{PieceType, Player};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Playouts tried per board before settling for the longest one reached.
const MAX_ATTEMPTS: usize = 64;

/// Generator of random positions, reached by playing random pseudo-legal moves from the
/// starting position. Every returned `Board` has both kings on it and fresh attack sets.
///
/// A playout that ends early (a king is captured, or the side to move is stuck) is retried.
/// When no playout reaches `min_moves` within a fixed number of attempts, the longest one
/// is returned instead.
///
/// # Examples
///
/// ```
/// use bitsearch::board::random::RandBoard;
///
/// let boards = RandBoard::default().pseudo_random(2627288).min_moves(4).many(5);
/// assert_eq!(boards.len(), 5);
/// assert!(boards.iter().all(|b| b.occupancy_consistent()));
/// ```
pub struct RandBoard {
    rng: StdRng,
    min_moves: u16,
    max_moves: u16,
}

impl Default for RandBoard {
    fn default() -> Self {
        RandBoard {
            rng: StdRng::from_entropy(),
            min_moves: 2,
            max_moves: 60,
        }
    }
}

impl RandBoard {
    /// Creates a `Vec<Board>` full of `Boards` containing random positions.
    pub fn many(mut self, size: usize) -> Vec<Board> {
        (0..size).map(|_| self.go()).collect()
    }

    /// Creates a singular `Board` with a random position.
    pub fn one(mut self) -> Board {
        self.go()
    }

    /// Turns PseudoRandom generation on. This allows for the same random `Board`s
    /// to be created from the same seed.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the minimum number of moves played to reach a position.
    pub fn min_moves(mut self, moves: u16) -> Self {
        self.min_moves = moves;
        self.max_moves = self.max_moves.max(moves);
        self
    }

    /// Sets the maximum number of moves played to reach a position.
    pub fn max_moves(mut self, moves: u16) -> Self {
        self.max_moves = moves;
        self.min_moves = self.min_moves.min(moves);
        self
    }

    fn go(&mut self) -> Board {
        let mut start = Board::start_pos();
        start.refresh_attacks();

        let mut deepest = (0, start.clone());
        for _ in 0..MAX_ATTEMPTS {
            let target = self.rng.gen_range(self.min_moves..=self.max_moves);
            let mut board = start.clone();

            let mut played = 0;
            while played < target {
                let moves = board.generate_moves();
                if moves.is_empty() {
                    break;
                }
                let mov = moves[self.rng.gen_range(0..moves.len())];
                let mut next = board.simulate_move(mov);
                next.refresh_attacks();
                if !has_both_kings(&next) {
                    break;
                }
                board = next;
                played += 1;
            }

            if played >= self.min_moves {
                return board;
            }
            if played > deepest.0 {
                deepest = (played, board);
            }
        }

        debug!(
            "no playout reached {} moves in {} attempts",
            self.min_moves, MAX_ATTEMPTS
        );
        deepest.1
    }
}

fn has_both_kings(board: &Board) -> bool {
    board.count_piece(Player::White, PieceType::K) == 1
        && board.count_piece(Player::Black, PieceType::K) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_boards_repeat() {
        let a = RandBoard::default().pseudo_random(11).many(10);
        let b = RandBoard::default().pseudo_random(11).many(10);
        assert_eq!(a, b);
    }

    #[test]
    fn unreachable_minimum_still_returns() {
        let board = RandBoard::default().pseudo_random(6).min_moves(2000).one();
        assert!(has_both_kings(&board));
        assert!(board.occupancy_consistent());
        let mut again = board.clone();
        again.refresh_attacks();
        assert_eq!(again, board);
    }

    #[test]
    fn boards_are_refreshed() {
        for board in RandBoard::default().pseudo_random(4).min_moves(6).many(10) {
            let mut again = board.clone();
            again.refresh_attacks();
            assert_eq!(again, board);
            assert!(has_both_kings(&board));
        }
    }
}
