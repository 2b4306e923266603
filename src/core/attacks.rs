//! Attack generation for each type of piece.
//!
//! Every function here is pure: it takes the locations of one type of piece (any number of
//! them), plus whatever occupancy it needs, and returns the union of the squares those
//! pieces attack with the `friendly` squares removed. An empty set of pieces always yields
//! an empty set of attacks.
//!
//! Attacks are computed with shifts rather than lookup tables. Given the square layout
//! (a8 = 0, h1 = 63) a shift by 8 moves a rank, a shift by 1 moves a file, and shifts by 7 or
//! 9 move diagonally. Any shift that changes the file is masked so a piece on the h-file can
//! never appear to attack the a-file, and the other way round.

use super::bitboard::BitBoard;
use super::masks::*;
use super::{PieceType, Player};

const DIAGONALS: [i8; 4] = [9, 7, -7, -9];
const ORTHOGONALS: [i8; 4] = [8, -8, 1, -1];

/// Squares attacked by a set of pawns. White pawns attack towards rank 8 (lower indexes),
/// Black pawns towards rank 1.
///
/// ```
/// use bitsearch::core::attacks::pawn_attacks;
/// use bitsearch::{BitBoard, Player, SQ};
///
/// let attacks = pawn_attacks(SQ::E2.to_bb(), Player::White, BitBoard(0));
/// assert_eq!(attacks, SQ::D3.to_bb() | SQ::F3.to_bb());
/// ```
#[inline]
pub fn pawn_attacks(pawns: BitBoard, player: Player, friendly: BitBoard) -> BitBoard {
    let attacks = match player {
        Player::White => ((pawns >> 7) & NOT_FILE_A) | ((pawns >> 9) & NOT_FILE_H),
        Player::Black => ((pawns << 9) & NOT_FILE_A) | ((pawns << 7) & NOT_FILE_H),
    };
    attacks & !friendly
}

/// Squares attacked by a set of knights.
#[inline]
pub fn knight_attacks(knights: BitBoard, friendly: BitBoard) -> BitBoard {
    let attacks = ((knights << 17) & NOT_FILE_A)
        | ((knights << 15) & NOT_FILE_H)
        | ((knights << 10) & NOT_FILE_AB)
        | ((knights << 6) & NOT_FILE_GH)
        | ((knights >> 17) & NOT_FILE_H)
        | ((knights >> 15) & NOT_FILE_A)
        | ((knights >> 10) & NOT_FILE_GH)
        | ((knights >> 6) & NOT_FILE_AB);
    attacks & !friendly
}

/// Squares attacked by a set of kings.
#[inline]
pub fn king_attacks(kings: BitBoard, friendly: BitBoard) -> BitBoard {
    let vertical = (kings << 8) | (kings >> 8);
    let rightward = ((kings << 1) | (kings >> 7) | (kings << 9)) & NOT_FILE_A;
    let leftward = ((kings >> 1) | (kings << 7) | (kings >> 9)) & NOT_FILE_H;
    (vertical | rightward | leftward) & !friendly
}

/// Walks the rays of a single sliding piece. Each ray stops on (and includes) the first
/// occupied square, friendly or not, and never crosses a file edge. Friendly squares are
/// not removed here.
pub fn sliding_attacks(piece: BitBoard, occupied: BitBoard, diagonal: bool) -> BitBoard {
    let directions = if diagonal { &DIAGONALS } else { &ORTHOGONALS };
    let mut attacks = BitBoard(0);

    for &dir in directions.iter() {
        let mut ray = piece;
        loop {
            // One file to the right: +1, -7, +9. One file to the left: -1, +7, -9.
            if (dir == 1 || dir == -7 || dir == 9) && (ray & FILE_H).is_not_empty() {
                break;
            }
            if (dir == -1 || dir == -9 || dir == 7) && (ray & FILE_A).is_not_empty() {
                break;
            }

            ray = if dir > 0 {
                ray << dir as usize
            } else {
                ray >> (-dir) as usize
            };

            if ray.is_empty() {
                break;
            }
            attacks |= ray;
            if (ray & occupied).is_not_empty() {
                break;
            }
        }
    }
    attacks
}

fn slider_set_attacks(pieces: BitBoard, occupied: BitBoard, diagonal: bool) -> BitBoard {
    pieces
        .singles()
        .fold(BitBoard(0), |acc, piece| acc | sliding_attacks(piece, occupied, diagonal))
}

/// Squares attacked by a set of bishops.
#[inline]
pub fn bishop_attacks(bishops: BitBoard, occupied: BitBoard, friendly: BitBoard) -> BitBoard {
    slider_set_attacks(bishops, occupied, true) & !friendly
}

/// Squares attacked by a set of rooks.
#[inline]
pub fn rook_attacks(rooks: BitBoard, occupied: BitBoard, friendly: BitBoard) -> BitBoard {
    slider_set_attacks(rooks, occupied, false) & !friendly
}

/// Squares attacked by a set of queens, the union of the bishop and rook patterns.
#[inline]
pub fn queen_attacks(queens: BitBoard, occupied: BitBoard, friendly: BitBoard) -> BitBoard {
    (slider_set_attacks(queens, occupied, true) | slider_set_attacks(queens, occupied, false))
        & !friendly
}

/// Dispatches to the attack function of the given piece type.
pub fn piece_attacks(
    piece: PieceType,
    pieces: BitBoard,
    player: Player,
    occupied: BitBoard,
    friendly: BitBoard,
) -> BitBoard {
    match piece {
        PieceType::P => pawn_attacks(pieces, player, friendly),
        PieceType::N => knight_attacks(pieces, friendly),
        PieceType::B => bishop_attacks(pieces, occupied, friendly),
        PieceType::R => rook_attacks(pieces, occupied, friendly),
        PieceType::Q => queen_attacks(pieces, occupied, friendly),
        PieceType::K => king_attacks(pieces, friendly),
    }
}
