extern crate bitsearch;

use bitsearch::board::castle_rights::Castling;
use bitsearch::board::fen::OPENING_POS_FEN;
use bitsearch::core::{CastleType, PieceType, Player, ALL_PIECE_TYPES};
use bitsearch::{BitBoard, Board, SQ};

#[test]
fn start_pos_counts() {
    let board = Board::start_pos();
    let expected = [8, 2, 2, 2, 1, 1];
    for player in [Player::White, Player::Black].iter() {
        for (piece, count) in ALL_PIECE_TYPES.iter().zip(expected.iter()) {
            assert_eq!(board.count_piece(*player, *piece), *count);
        }
        assert_eq!(board.count_pieces_player(*player), 16);
    }
    assert_eq!(board.count_all_pieces(), 32);
    assert_eq!(board.turn(), Player::White);
    assert_eq!(board.castling(), Castling::all());
    assert_eq!(board.ep_square(), None);
    assert_eq!(board.fen(), OPENING_POS_FEN);
}

#[test]
fn layout_of_start_pos() {
    let board = Board::start_pos();
    assert_eq!(
        board.piece_bb(Player::White, PieceType::P),
        BitBoard::RANK_2
    );
    assert_eq!(
        board.piece_bb(Player::Black, PieceType::P),
        BitBoard::RANK_7
    );
    assert_eq!(
        board.get_occupied_player(Player::White),
        BitBoard::RANK_1 | BitBoard::RANK_2
    );
    assert_eq!(
        board.get_occupied_player(Player::Black),
        BitBoard::RANK_7 | BitBoard::RANK_8
    );
    assert_eq!(board.piece_bb(Player::White, PieceType::K), SQ::E1.to_bb());
    assert_eq!(board.piece_bb(Player::Black, PieceType::K), SQ::E8.to_bb());
}

#[test]
fn no_overlapping_pieces() {
    let board = Board::start_pos();
    let mut xor = BitBoard(0);
    let mut or = BitBoard(0);
    for player in [Player::White, Player::Black].iter() {
        for piece in ALL_PIECE_TYPES.iter() {
            xor ^= board.piece_bb(*player, *piece);
            or |= board.piece_bb(*player, *piece);
        }
    }
    assert_eq!(xor, or);
    assert!(board.occupancy_consistent());
}

#[test]
fn attacks_need_refresh() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    assert!(board.attacks_of(Player::White).is_empty());
    board.refresh_attacks();
    let rook = board.piece_attacks(Player::White, PieceType::R);
    // Up the a-file to a8, and along the first rank up to (and including) the king's square,
    // which is then removed as friendly.
    assert_eq!(rook.count_bits(), 7 + 3);
    assert!(board.attacks_of(Player::White).contains(SQ::D1));
    assert!(board.can_castle(Player::White, CastleType::QueenSide));
    assert!(!board.can_castle(Player::White, CastleType::KingSide));
}

#[test]
fn empty_board() {
    let board = Board::empty();
    assert_eq!(board.count_all_pieces(), 0);
    assert_eq!(board.fen(), "8/8/8/8/8/8/8/8 w - - 0 1");
    assert!(board.generate_moves().is_empty());
}

#[test]
fn pretty_print() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let printed = board.to_string();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 . . . . k . . . ");
    assert_eq!(lines[7], "1 . . . . K . . . ");
}
