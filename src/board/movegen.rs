//! Module for generating pseudo-legal moves from a `Board`.
//!
//! A pseudo-legal move follows the movement rules of its piece, but may leave the mover's own
//! king attacked. The only king safety check is for castling: the king may not start on,
//! pass through, or land on a square the opponent attacks.
//!
//! Moves are generated in a fixed order, so searches that break ties by taking the first
//! move are reproducible:
//!
//! ```md,ignore
//! pawns (single pushes, double pushes, captures, en passant)
//! knights, bishops, rooks, queens
//! king (normal moves, then castling)
//! ```
//!
//! Within each group, moves are ordered by source square and then by destination square,
//! except pawn pushes and captures which are ordered by destination.

use super::Board;

use crate::core::attacks;
use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::piece_move::{BitMove, MoveKind};
use crate::core::sq::SQ;
use crate::core::*;

/// Namespace for move generation.
pub struct MoveGen {}

impl MoveGen {
    /// Generates every pseudo-legal move of `player` on `board`. The board is not modified.
    ///
    /// Castling consults the opponent's attack sets, which are only as fresh as the last
    /// call to [`Board::refresh_attacks`].
    ///
    /// [`Board::refresh_attacks`]: ../struct.Board.html#method.refresh_attacks
    pub fn generate(board: &Board, player: Player) -> Vec<BitMove> {
        let mut gen = InnerMoveGen {
            board,
            us: player,
            them: !player,
            us_occ: board.get_occupied_player(player),
            them_occ: board.get_occupied_player(!player),
            occupied: board.occupied(),
            list: Vec::with_capacity(48),
        };
        gen.pawn_moves();
        gen.piece_moves(PieceType::N);
        gen.piece_moves(PieceType::B);
        gen.piece_moves(PieceType::R);
        gen.piece_moves(PieceType::Q);
        gen.piece_moves(PieceType::K);
        gen.castling_moves();
        gen.list
    }
}

struct InnerMoveGen<'a> {
    board: &'a Board,
    us: Player,
    them: Player,
    us_occ: BitBoard,
    them_occ: BitBoard,
    occupied: BitBoard,
    list: Vec<BitMove>,
}

impl<'a> InnerMoveGen<'a> {
    /// Shifts a set of squares one rank forward, from the point of view of the player moving.
    #[inline]
    fn forward(&self, bb: BitBoard) -> BitBoard {
        match self.us {
            Player::White => bb >> 8,
            Player::Black => bb << 8,
        }
    }

    /// Square `ranks` ranks behind `sq`, from the point of view of the player moving.
    #[inline]
    fn behind(&self, sq: SQ, ranks: u8) -> SQ {
        match self.us {
            Player::White => SQ(sq.0 + 8 * ranks),
            Player::Black => SQ(sq.0 - 8 * ranks),
        }
    }

    fn pawn_moves(&mut self) {
        let pawns = self.board.piece_bb(self.us, PieceType::P);
        if pawns.is_empty() {
            return;
        }
        let empty = !self.occupied;
        let (double_rank, promo_rank, ep_rank) = match self.us {
            Player::White => (BitBoard::RANK_4, BitBoard::RANK_8, BitBoard::RANK_6),
            Player::Black => (BitBoard::RANK_5, BitBoard::RANK_1, BitBoard::RANK_3),
        };

        let single = self.forward(pawns) & empty;
        let double = self.forward(single) & empty & double_rank;

        for dst in single {
            let src = self.behind(dst, 1);
            if promo_rank.contains(dst) {
                self.add_promotions(src, dst, false);
            } else {
                self.list.push(BitMove::quiet(src, dst, false));
            }
        }

        for dst in double {
            let src = self.behind(dst, 2);
            self.list
                .push(BitMove::new(src, dst, MoveKind::DoublePush, false));
        }

        // A pawn of ours attacks `dst` from exactly the squares an enemy pawn on `dst` would
        // attack.
        let targets = attacks::pawn_attacks(pawns, self.us, BitBoard::EMPTY) & self.them_occ;
        for dst in targets {
            let sources = attacks::pawn_attacks(dst.to_bb(), self.them, BitBoard::EMPTY) & pawns;
            for src in sources {
                if promo_rank.contains(dst) {
                    self.add_promotions(src, dst, true);
                } else {
                    self.list.push(BitMove::quiet(src, dst, true));
                }
            }
        }

        if let Some(ep) = self.board.ep_square() {
            let victim = self.behind(ep, 1);
            if ep_rank.contains(ep)
                && !self.occupied.contains(ep)
                && self.board.piece_bb(self.them, PieceType::P).contains(victim)
            {
                let sources = attacks::pawn_attacks(ep.to_bb(), self.them, BitBoard::EMPTY) & pawns;
                for src in sources {
                    self.list
                        .push(BitMove::new(src, ep, MoveKind::EnPassant, true));
                }
            }
        }
    }

    fn add_promotions(&mut self, src: SQ, dst: SQ, capture: bool) {
        for piece in PieceType::PROMOTIONS.iter() {
            self.list
                .push(BitMove::new(src, dst, MoveKind::Promotion(*piece), capture));
        }
    }

    fn piece_moves(&mut self, piece: PieceType) {
        let pieces = self.board.piece_bb(self.us, piece);
        for src in pieces {
            let targets =
                attacks::piece_attacks(piece, src.to_bb(), self.us, self.occupied, self.us_occ);
            for dst in targets {
                self.list
                    .push(BitMove::quiet(src, dst, self.them_occ.contains(dst)));
            }
        }
    }

    fn castling_moves(&mut self) {
        let (king_start, sides) = match self.us {
            Player::White => (
                SQ(WHITE_KING_START),
                [
                    (CastleType::KingSide, CASTLE_EMPTY_WHITE_K, CASTLE_SAFE_WHITE_K, SQ::G1, SQ(ROOK_WHITE_KSIDE_START)),
                    (CastleType::QueenSide, CASTLE_EMPTY_WHITE_Q, CASTLE_SAFE_WHITE_Q, SQ::C1, SQ(ROOK_WHITE_QSIDE_START)),
                ],
            ),
            Player::Black => (
                SQ(BLACK_KING_START),
                [
                    (CastleType::KingSide, CASTLE_EMPTY_BLACK_K, CASTLE_SAFE_BLACK_K, SQ::G8, SQ(ROOK_BLACK_KSIDE_START)),
                    (CastleType::QueenSide, CASTLE_EMPTY_BLACK_Q, CASTLE_SAFE_BLACK_Q, SQ::C8, SQ(ROOK_BLACK_QSIDE_START)),
                ],
            ),
        };

        if !self.board.piece_bb(self.us, PieceType::K).contains(king_start) {
            return;
        }
        let enemy_attacks = self.board.attacks_of(self.them);
        let rooks = self.board.piece_bb(self.us, PieceType::R);

        for &(side, empty_mask, safe_mask, king_dst, rook_start) in sides.iter() {
            if !self.board.can_castle(self.us, side) || !rooks.contains(rook_start) {
                continue;
            }
            if (self.occupied & empty_mask).is_not_empty() {
                continue;
            }
            if (enemy_attacks & safe_mask).is_not_empty() {
                continue;
            }
            self.list
                .push(BitMove::new(king_start, king_dst, MoveKind::Castle, false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refreshed(fen: &str) -> Board {
        let mut board = Board::from_fen(fen).unwrap();
        board.refresh_attacks();
        board
    }

    #[test]
    fn pushes_come_in_order() {
        let board = refreshed("4k3/8/8/8/8/8/P6P/4K3 w - - 0 1");
        let moves: Vec<String> = MoveGen::generate(&board, Player::White)
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(
            &moves[..4],
            &["a2a3".to_string(), "h2h3".to_string(), "a2a4".to_string(), "h2h4".to_string()]
        );
    }

    #[test]
    fn two_pawns_one_target() {
        let board = refreshed("4k3/8/8/3p4/2P1P3/8/8/4K3 w - - 0 1");
        let captures: Vec<BitMove> = MoveGen::generate(&board, Player::White)
            .into_iter()
            .filter(|m| m.is_capture())
            .collect();
        assert_eq!(captures.len(), 2);
        assert!(captures.iter().all(|m| m.get_dest() == SQ::D5));
        assert_eq!(captures[0].get_src(), SQ::C4);
        assert_eq!(captures[1].get_src(), SQ::E4);
    }

    #[test]
    fn promotions_on_last_rank() {
        let board = refreshed("1r2k3/P7/8/8/8/8/7p/4K3 w - - 0 1");
        let white = MoveGen::generate(&board, Player::White);
        let promos: Vec<&BitMove> = white.iter().filter(|m| m.is_promo()).collect();
        // a7a8 and a7xb8, four pieces each.
        assert_eq!(promos.len(), 8);
        assert_eq!(promos.iter().filter(|m| m.is_capture()).count(), 4);
        assert_eq!(promos[0].promotion(), Some(PieceType::Q));
        assert_eq!(promos[1].promotion(), Some(PieceType::N));

        let black = MoveGen::generate(&board, Player::Black);
        let promos: Vec<&BitMove> = black.iter().filter(|m| m.is_promo()).collect();
        assert_eq!(promos.len(), 4);
        assert!(promos.iter().all(|m| m.get_dest() == SQ::H1));
    }

    #[test]
    fn en_passant_needs_the_right_rank() {
        let board = refreshed("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let eps: Vec<BitMove> = board
            .generate_moves()
            .into_iter()
            .filter(|m| m.is_en_passant())
            .collect();
        assert_eq!(eps, vec![BitMove::new(SQ::E5, SQ::D6, MoveKind::EnPassant, true)]);

        // A target on White's own third rank is never White's to take. FEN loading rejects
        // it, so set it directly.
        assert!(Board::from_fen("4k3/8/8/8/3pP3/8/8/4K3 w - e3 0 2").is_err());
        let mut board = refreshed("4k3/8/8/8/3pP3/8/8/4K3 w - - 0 2");
        board.set_ep_square(Some(SQ::E3));
        assert!(board.generate_moves().iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn castling_rules() {
        let board = refreshed("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles: Vec<String> = board
            .generate_moves()
            .iter()
            .filter(|m| m.is_castle())
            .map(|m| m.to_string())
            .collect();
        assert_eq!(castles, vec!["e1g1", "e1c1"]);

        // A knight on b1 blocks the queen side even though the king never crosses b1.
        let board = refreshed("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        let castles = board.generate_moves().into_iter().filter(|m| m.is_castle()).count();
        assert_eq!(castles, 1);

        // A rook on f8 attacks f1.
        let board = refreshed("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
        let castles: Vec<BitMove> = board
            .generate_moves()
            .into_iter()
            .filter(|m| m.is_castle())
            .collect();
        assert_eq!(castles, vec![BitMove::new(SQ::E1, SQ::C1, MoveKind::Castle, false)]);

        let black: Vec<BitMove> = MoveGen::generate(&board, Player::Black)
            .into_iter()
            .filter(|m| m.is_castle())
            .collect();
        assert_eq!(black, vec![BitMove::new(SQ::E8, SQ::C8, MoveKind::Castle, false)]);
    }

    #[test]
    fn no_king_no_king_moves() {
        let board = refreshed("8/8/8/8/8/8/8/R7 w KQ - 0 1");
        let moves = board.generate_moves();
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|m| m.get_src() == SQ::A1));
    }
}
