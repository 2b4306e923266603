//! This module contains `Board`, the object representing the current state of a chessboard.
//! All modifications to the current state of the board are done through this object, as well as
//! gathering information about the current state of the board.
//!
//! A `Board` is a value: [`Board::simulate_move`] never touches the board it is called on and
//! instead returns the resulting position as a brand new `Board`.
//!
//! [`Board::simulate_move`]: struct.Board.html#method.simulate_move

pub mod castle_rights;
pub mod fen;
pub mod movegen;
pub mod random;

use crate::core::attacks;
use crate::core::bitboard::BitBoard;
use crate::core::masks::*;
use crate::core::piece_move::{BitMove, MoveKind};
use crate::core::sq::SQ;
use crate::core::*;

use self::castle_rights::Castling;
use self::movegen::MoveGen;

use std::fmt;
use std::num;

use thiserror::Error;

/// Represents an error in building a `Board` from a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenBuildError {
    #[error("invalid number of fen sections: {sections}, expected 4 to 6")]
    NotEnoughSections { sections: usize },
    #[error("invalid number of ranks: {ranks}, expected 8")]
    IncorrectRankAmounts { ranks: usize },
    #[error("invalid turn: {turn}, expected 'w' or 'b'")]
    UnrecognizedTurn { turn: String },
    #[error("invalid castling rights: {castle}")]
    UnrecognizedCastle { castle: String },
    #[error("unreadable En-passant square: {ep}")]
    EPSquareUnreadable { ep: String },
    #[error("invalid En-passant square: {ep}")]
    EPSquareInvalid { ep: String },
    #[error("too few squares in rank {rank}: {squares}")]
    SquareSmallerRank { rank: usize, squares: String },
    #[error("too many squares in rank {rank}: {squares}")]
    SquareLargerRank { rank: usize, squares: String },
    #[error("unrecognized piece: {piece}")]
    UnrecognizedPiece { piece: char },
    #[error("unreadable move counter: {0}")]
    UnreadableMoves(#[from] num::ParseIntError),
}

/// Represents a Chessboard through a `Board`.
///
/// The board holds twelve piece `BitBoard`s (six piece types for each player), the occupancy
/// of each player, the squares attacked by each piece type and player, the player to move,
/// the castling rights, and the en-passant target square.
///
/// Occupancy is always kept in sync with the piece sets. Attack sets are not: they are only
/// computed by [`Board::refresh_attacks`], and a freshly built or freshly simulated `Board`
/// has empty attack sets until it is refreshed.
///
/// # Examples
///
/// ```
/// use bitsearch::Board;
///
/// let mut board = Board::start_pos();
/// board.refresh_attacks();
///
/// let moves = board.generate_moves();
/// assert_eq!(moves.len(), 20);
///
/// let next = board.simulate_move(moves[0]);
/// assert_eq!(next.count_all_pieces(), 32);
/// assert_ne!(next.turn(), board.turn());
/// ```
///
/// [`Board::refresh_attacks`]: struct.Board.html#method.refresh_attacks
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    turn: Player,
    bit_boards: [[BitBoard; PIECE_TYPE_CNT]; PLAYER_CNT],
    occ: [BitBoard; PLAYER_CNT],
    piece_attacks: [[BitBoard; PIECE_TYPE_CNT]; PLAYER_CNT],
    attacks: [BitBoard; PLAYER_CNT],
    castling: Castling,
    ep_square: Option<SQ>,
}

impl Default for Board {
    fn default() -> Self {
        Board::start_pos()
    }
}

impl Board {
    /// Constructs a board with no pieces, White to move, and no castling rights.
    pub fn empty() -> Board {
        Board {
            turn: Player::White,
            bit_boards: [[BitBoard::EMPTY; PIECE_TYPE_CNT]; PLAYER_CNT],
            occ: [BitBoard::EMPTY; PLAYER_CNT],
            piece_attacks: [[BitBoard::EMPTY; PIECE_TYPE_CNT]; PLAYER_CNT],
            attacks: [BitBoard::EMPTY; PLAYER_CNT],
            castling: Castling::empty(),
            ep_square: None,
        }
    }

    /// Constructs a board from the starting position, with White to move.
    ///
    /// The attack sets are not yet computed.
    ///
    /// ```
    /// use bitsearch::Board;
    ///
    /// let board = Board::start_pos();
    /// assert_eq!(board.fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    /// ```
    pub fn start_pos() -> Board {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::R,
            PieceType::N,
            PieceType::B,
            PieceType::Q,
            PieceType::K,
            PieceType::B,
            PieceType::N,
            PieceType::R,
        ];
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.place_piece(Player::White, *piece, SQ::make(file, 0));
            board.place_piece(Player::White, PieceType::P, SQ::make(file, 1));
            board.place_piece(Player::Black, PieceType::P, SQ::make(file, 6));
            board.place_piece(Player::Black, *piece, SQ::make(file, 7));
        }
        board.castling = Castling::all();
        board
    }

    /// Constructs a board from a FEN string.
    ///
    /// Four to six whitespace separated fields are accepted: piece placement, side to move,
    /// castling rights, en-passant square, and optionally the two move counters. The counters
    /// are validated but not stored.
    ///
    /// The attack sets are not computed; call [`Board::refresh_attacks`] before reading them.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitsearch::Board;
    ///
    /// let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    /// assert_eq!(board.count_all_pieces(), 2);
    /// assert!(Board::from_fen("not a fen").is_err());
    /// ```
    ///
    /// [`Board::refresh_attacks`]: struct.Board.html#method.refresh_attacks
    pub fn from_fen(fen: &str) -> Result<Board, FenBuildError> {
        fen::parse_fen(fen)
    }

    /// Creates a FEN String of the Board. The move counters are always written as "0 1".
    pub fn fen(&self) -> String {
        fen::generate_fen(self)
    }

    /// Recomputes the attacks of every piece type of both players from the current piece
    /// placement. Calling it twice in a row gives the same attack sets both times.
    pub fn refresh_attacks(&mut self) {
        let occupied = self.occupied();
        for player in ALL_PLAYERS.iter() {
            let p = *player as usize;
            let friendly = self.occ[p];
            let mut all = BitBoard::EMPTY;
            for piece in ALL_PIECE_TYPES.iter() {
                let piece_attacks = attacks::piece_attacks(
                    *piece,
                    self.bit_boards[p][piece.idx()],
                    *player,
                    occupied,
                    friendly,
                );
                self.piece_attacks[p][piece.idx()] = piece_attacks;
                all |= piece_attacks;
            }
            self.attacks[p] = all;
        }
    }

    /// Returns the position reached by the player to move playing `bit_move`.
    ///
    /// The board this is called on is left untouched. In the returned board:
    ///
    /// - a capture removes the captured piece (for en passant, the pawn behind the target),
    /// - a castle moves both the king and its rook,
    /// - a promotion replaces the pawn with the promoted piece,
    /// - a double push sets the en-passant square to the square that was skipped, and any
    ///   other move clears it,
    /// - castling rights are lost by moving the king, or by moving or capturing a rook on
    ///   its starting corner,
    /// - the other player is to move, and the attack sets are empty until refreshed.
    pub fn simulate_move(&self, bit_move: BitMove) -> Board {
        let us = self.turn;
        let them = !us;
        let src = bit_move.get_src();
        let dst = bit_move.get_dest();

        let mut next = self.clone();
        next.piece_attacks = [[BitBoard::EMPTY; PIECE_TYPE_CNT]; PLAYER_CNT];
        next.attacks = [BitBoard::EMPTY; PLAYER_CNT];
        next.ep_square = None;

        if bit_move.is_capture() {
            let cap_sq = if bit_move.is_en_passant() {
                match us {
                    Player::White => SQ(dst.0.wrapping_add(8)),
                    Player::Black => SQ(dst.0.wrapping_sub(8)),
                }
            } else {
                dst
            };
            if cap_sq.is_okay() {
                if let Some(piece) = self.piece_of_player_at(them, cap_sq) {
                    next.bit_boards[them as usize][piece.idx()] &= !cap_sq.to_bb();
                }
            }
        }

        match bit_move.kind() {
            MoveKind::Castle => {
                next.move_bit(us, PieceType::K, src, dst);
                if let Some((rook_src, rook_dst)) = castle_rook_squares(dst) {
                    next.move_bit(us, PieceType::R, rook_src, rook_dst);
                }
                next.castling.remove_player_castling(us);
            }
            kind => {
                if let Some(piece) = self.piece_of_player_at(us, src) {
                    next.bit_boards[us as usize][piece.idx()] &= !src.to_bb();
                    let placed = match kind {
                        MoveKind::Promotion(promo) => promo,
                        _ => piece,
                    };
                    next.bit_boards[us as usize][placed.idx()] |= dst.to_bb();
                    if kind == MoveKind::DoublePush {
                        next.ep_square = Some(SQ((src.0 + dst.0) / 2));
                    }
                }
            }
        }

        next.castling.update_castling(src, dst);
        next.set_occupancy();
        next.turn = them;
        next
    }

    /// Generates the pseudo-legal moves of the player to move.
    ///
    /// Castling relies on the attack sets, so the board should be refreshed first.
    #[inline]
    pub fn generate_moves(&self) -> Vec<BitMove> {
        MoveGen::generate(self, self.turn)
    }

    /// Places a piece on an empty square, keeping occupancy in sync.
    pub(crate) fn place_piece(&mut self, player: Player, piece: PieceType, sq: SQ) {
        let bb = sq.to_bb();
        self.bit_boards[player as usize][piece.idx()] |= bb;
        self.occ[player as usize] |= bb;
    }

    pub(crate) fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    pub(crate) fn set_castling(&mut self, castling: Castling) {
        self.castling = castling;
    }

    pub(crate) fn set_ep_square(&mut self, ep_square: Option<SQ>) {
        self.ep_square = ep_square;
    }

    fn move_bit(&mut self, player: Player, piece: PieceType, from: SQ, to: SQ) {
        let bb = &mut self.bit_boards[player as usize][piece.idx()];
        *bb &= !from.to_bb();
        *bb |= to.to_bb();
    }

    fn set_occupancy(&mut self) {
        for player in ALL_PLAYERS.iter() {
            let p = *player as usize;
            self.occ[p] = self.bit_boards[p]
                .iter()
                .fold(BitBoard::EMPTY, |acc, bb| acc | *bb);
        }
    }

    fn piece_of_player_at(&self, player: Player, sq: SQ) -> Option<PieceType> {
        ALL_PIECE_TYPES
            .iter()
            .find(|piece| self.bit_boards[player as usize][piece.idx()].contains(sq))
            .copied()
    }

    /// Return the player whose turn it is to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the `BitBoard` of a single piece type of a single player.
    #[inline(always)]
    pub fn piece_bb(&self, player: Player, piece: PieceType) -> BitBoard {
        self.bit_boards[player as usize][piece.idx()]
    }

    /// Returns the squares occupied by a player.
    #[inline(always)]
    pub fn get_occupied_player(&self, player: Player) -> BitBoard {
        self.occ[player as usize]
    }

    /// Returns the squares occupied by either player.
    #[inline(always)]
    pub fn occupied(&self) -> BitBoard {
        self.occ[0] | self.occ[1]
    }

    /// Returns the squares attacked by a single piece type of a player, as of the last
    /// refresh.
    #[inline(always)]
    pub fn piece_attacks(&self, player: Player, piece: PieceType) -> BitBoard {
        self.piece_attacks[player as usize][piece.idx()]
    }

    /// Returns every square attacked by a player, as of the last refresh.
    #[inline(always)]
    pub fn attacks_of(&self, player: Player) -> BitBoard {
        self.attacks[player as usize]
    }

    #[inline(always)]
    pub fn castling(&self) -> Castling {
        self.castling
    }

    /// Returns if the player still holds the castling right for the given side.
    #[inline]
    pub fn can_castle(&self, player: Player, side: CastleType) -> bool {
        self.castling.castle_rights(player, side)
    }

    /// Returns the en-passant target square, if the last move was a double push.
    #[inline(always)]
    pub fn ep_square(&self) -> Option<SQ> {
        self.ep_square
    }

    /// Returns the owner and type of the piece on a square, if there is one.
    pub fn piece_at_sq(&self, sq: SQ) -> Option<(Player, PieceType)> {
        ALL_PLAYERS.iter().find_map(|player| {
            self.piece_of_player_at(*player, sq)
                .map(|piece| (*player, piece))
        })
    }

    /// Returns the number of pieces of a given type a player has.
    #[inline]
    pub fn count_piece(&self, player: Player, piece: PieceType) -> u8 {
        self.piece_bb(player, piece).count_bits()
    }

    /// Returns the total number of pieces a player has.
    #[inline]
    pub fn count_pieces_player(&self, player: Player) -> u8 {
        self.occ[player as usize].count_bits()
    }

    /// Returns the total number of pieces on the board.
    #[inline]
    pub fn count_all_pieces(&self) -> u8 {
        self.occupied().count_bits()
    }

    /// Checks that each player's occupancy is exactly the union of their piece sets, that no
    /// two piece sets overlap, and that the two players' occupancies are disjoint.
    pub fn occupancy_consistent(&self) -> bool {
        if (self.occ[0] & self.occ[1]).is_not_empty() {
            return false;
        }
        let mut seen = BitBoard::EMPTY;
        for player in ALL_PLAYERS.iter() {
            let p = *player as usize;
            let mut union = BitBoard::EMPTY;
            for bb in self.bit_boards[p].iter() {
                if (seen & *bb).is_not_empty() {
                    return false;
                }
                seen |= *bb;
                union |= *bb;
            }
            if union != self.occ[p] {
                return false;
            }
        }
        true
    }
}

/// For a castle landing the king on `king_dst`, returns where the rook starts and lands.
fn castle_rook_squares(king_dst: SQ) -> Option<(SQ, SQ)> {
    match king_dst {
        SQ::G1 => Some((SQ(ROOK_WHITE_KSIDE_START), SQ::F1)),
        SQ::C1 => Some((SQ(ROOK_WHITE_QSIDE_START), SQ::D1)),
        SQ::G8 => Some((SQ(ROOK_BLACK_KSIDE_START), SQ::F8)),
        SQ::C8 => Some((SQ(ROOK_BLACK_QSIDE_START), SQ::D8)),
        _ => None,
    }
}

impl fmt::Display for Board {
    /// Prints the board as an 8x8 grid with rank 8 on top. White pieces are uppercase,
    /// Black pieces lowercase, and empty squares are dots.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for file in 0..8u8 {
                let c = match self.piece_at_sq(SQ(row * 8 + file)) {
                    Some((Player::White, piece)) => piece.char_upper(),
                    Some((Player::Black, piece)) => piece.char_lower(),
                    None => '.',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece_move::MoveKind;

    #[test]
    fn start_pos_matches_fen() {
        let start = Board::start_pos();
        let parsed = Board::from_fen(fen::OPENING_POS_FEN).unwrap();
        assert_eq!(start, parsed);
        assert!(start.occupancy_consistent());
        assert_eq!(start.count_all_pieces(), 32);
        assert_eq!(start.count_piece(Player::Black, PieceType::P), 8);
        assert_eq!(start.piece_at_sq(SQ::E1), Some((Player::White, PieceType::K)));
        assert_eq!(start.piece_at_sq(SQ::D8), Some((Player::Black, PieceType::Q)));
        assert_eq!(start.piece_at_sq(SQ::E4), None);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut board = Board::start_pos();
        assert!(board.attacks_of(Player::White).is_empty());
        board.refresh_attacks();
        let once = board.clone();
        board.refresh_attacks();
        assert_eq!(once, board);
        // Knights on b1 and g1 cover a3, c3, d2, e2, f3, h3; d2 and e2 are friendly.
        assert_eq!(
            board.piece_attacks(Player::White, PieceType::N),
            SQ::A3.to_bb() | SQ::C3.to_bb() | SQ::F3.to_bb() | SQ::H3.to_bb()
        );
        assert_eq!(board.attacks_of(Player::White) & BitBoard::RANK_3, BitBoard::RANK_3);
    }

    #[test]
    fn simulate_does_not_touch_parent() {
        let mut board = Board::start_pos();
        board.refresh_attacks();
        let before = board.clone();
        let next = board.simulate_move(BitMove::new(SQ::E2, SQ::E4, MoveKind::DoublePush, false));
        assert_eq!(board, before);
        assert_eq!(next.ep_square(), Some(SQ::E3));
        assert_eq!(next.turn(), Player::Black);
        assert!(next.attacks_of(Player::White).is_empty());
        assert!(next.piece_bb(Player::White, PieceType::P).contains(SQ::E4));
        assert!(!next.piece_bb(Player::White, PieceType::P).contains(SQ::E2));

        let after = next.simulate_move(BitMove::quiet(SQ::G8, SQ::F6, false));
        assert_eq!(after.ep_square(), None);
    }

    #[test]
    fn castle_moves_king_and_rook() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let next = board.simulate_move(BitMove::new(SQ::E1, SQ::G1, MoveKind::Castle, false));
        assert_eq!(next.piece_bb(Player::White, PieceType::K), SQ::G1.to_bb());
        assert_eq!(
            next.piece_bb(Player::White, PieceType::R),
            SQ::A1.to_bb() | SQ::F1.to_bb()
        );
        assert_eq!(next.castling(), Castling::BLACK_ALL);
        assert!(next.occupancy_consistent());

        let next = next.simulate_move(BitMove::new(SQ::E8, SQ::C8, MoveKind::Castle, false));
        assert_eq!(next.piece_bb(Player::Black, PieceType::K), SQ::C8.to_bb());
        assert_eq!(
            next.piece_bb(Player::Black, PieceType::R),
            SQ::D8.to_bb() | SQ::H8.to_bb()
        );
        assert!(next.castling().no_castling());
        assert_eq!(next.count_all_pieces(), 6);
    }

    #[test]
    fn en_passant_removes_pawn_behind() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        let next = board.simulate_move(BitMove::new(SQ::E5, SQ::D6, MoveKind::EnPassant, true));
        assert!(next.piece_bb(Player::Black, PieceType::P).is_empty());
        assert_eq!(next.piece_bb(Player::White, PieceType::P), SQ::D6.to_bb());
        assert_eq!(next.count_pieces_player(Player::Black), 1);

        let board = Board::from_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").unwrap();
        let next = board.simulate_move(BitMove::new(SQ::E4, SQ::D3, MoveKind::EnPassant, true));
        assert!(next.piece_bb(Player::White, PieceType::P).is_empty());
        assert_eq!(next.piece_bb(Player::Black, PieceType::P), SQ::D3.to_bb());
    }

    #[test]
    fn promotion_capture_and_rook_rights() {
        let board = Board::from_fen("r3k2r/1P6/8/8/8/8/8/4K3 w kq - 0 1").unwrap();
        let promo = BitMove::new(SQ::B7, SQ::A8, MoveKind::Promotion(PieceType::Q), true);
        let next = board.simulate_move(promo);
        assert_eq!(next.piece_bb(Player::White, PieceType::Q), SQ::A8.to_bb());
        assert!(next.piece_bb(Player::White, PieceType::P).is_empty());
        assert_eq!(next.piece_bb(Player::Black, PieceType::R), SQ::H8.to_bb());
        assert!(!next.can_castle(Player::Black, CastleType::QueenSide));
        assert!(next.can_castle(Player::Black, CastleType::KingSide));
        assert!(next.occupancy_consistent());
    }

    #[test]
    fn display() {
        let s = Board::start_pos().to_string();
        let first = s.lines().next().unwrap();
        assert_eq!(first, "8 r n b q k b n r ");
        assert!(s.ends_with("  a b c d e f g h\n"));
    }
}
