//! Masks and various other constants.
//!
//! All masks follow the crate's square layout, where bit 0 is a8 and bit 63 is h1.

/// The total number of players on a chessboard.
pub const PLAYER_CNT: usize = 2;
/// The total number of types of pieces on a chessboard.
pub const PIECE_TYPE_CNT: usize = 6;
/// The total number of squares on a chessboard.
pub const SQ_CNT: usize = 64;
/// The total number of files on a chessboard.
pub const FILE_CNT: usize = 8;
/// The total number of ranks on a chessboard.
pub const RANK_CNT: usize = 8;

/// Bit representation of file A.
pub const FILE_A: u64 = 0x0101_0101_0101_0101;
/// Bit representation of file B.
pub const FILE_B: u64 = FILE_A << 1;
/// Bit representation of file G.
pub const FILE_G: u64 = FILE_A << 6;
/// Bit representation of file H.
pub const FILE_H: u64 = 0x8080_8080_8080_8080;

/// Bit representation of rank 8, the top row of the board (squares 0 - 7).
pub const RANK_8: u64 = 0x0000_0000_0000_00FF;
/// Bit representation of rank 7.
pub const RANK_7: u64 = 0x0000_0000_0000_FF00;
/// Bit representation of rank 6.
pub const RANK_6: u64 = 0x0000_0000_00FF_0000;
/// Bit representation of rank 5.
pub const RANK_5: u64 = 0x0000_0000_FF00_0000;
/// Bit representation of rank 4.
pub const RANK_4: u64 = 0x0000_00FF_0000_0000;
/// Bit representation of rank 3.
pub const RANK_3: u64 = 0x0000_FF00_0000_0000;
/// Bit representation of rank 2.
pub const RANK_2: u64 = 0x00FF_0000_0000_0000;
/// Bit representation of rank 1, the bottom row of the board (squares 56 - 63).
pub const RANK_1: u64 = 0xFF00_0000_0000_0000;

/// Everything but file A. Applied after a shift that moves pieces one file to the right.
pub const NOT_FILE_A: u64 = !FILE_A;
/// Everything but file H. Applied after a shift that moves pieces one file to the left.
pub const NOT_FILE_H: u64 = !FILE_H;
/// Everything but files A and B.
pub const NOT_FILE_AB: u64 = !(FILE_A | FILE_B);
/// Everything but files G and H.
pub const NOT_FILE_GH: u64 = !(FILE_G | FILE_H);

pub const WHITE_KING_START: u8 = 60;
pub const BLACK_KING_START: u8 = 4;
pub const ROOK_WHITE_KSIDE_START: u8 = 63;
pub const ROOK_WHITE_QSIDE_START: u8 = 56;
pub const ROOK_BLACK_KSIDE_START: u8 = 7;
pub const ROOK_BLACK_QSIDE_START: u8 = 0;

pub const C_WHITE_K_MASK: u8 = 0b0000_1000;
pub const C_WHITE_Q_MASK: u8 = 0b0000_0100;
pub const C_BLACK_K_MASK: u8 = 0b0000_0010;
pub const C_BLACK_Q_MASK: u8 = 0b0000_0001;

// Squares that must be empty between king and rook: f1 g1 / b1 c1 d1 / f8 g8 / b8 c8 d8.
pub const CASTLE_EMPTY_WHITE_K: u64 = 0x6000_0000_0000_0000;
pub const CASTLE_EMPTY_WHITE_Q: u64 = 0x0E00_0000_0000_0000;
pub const CASTLE_EMPTY_BLACK_K: u64 = 0x0000_0000_0000_0060;
pub const CASTLE_EMPTY_BLACK_Q: u64 = 0x0000_0000_0000_000E;

// Squares the king stands on, passes through and lands on: e1 f1 g1 / c1 d1 e1 / e8 f8 g8 / c8 d8 e8.
pub const CASTLE_SAFE_WHITE_K: u64 = 0x7000_0000_0000_0000;
pub const CASTLE_SAFE_WHITE_Q: u64 = 0x1C00_0000_0000_0000;
pub const CASTLE_SAFE_BLACK_K: u64 = 0x0000_0000_0000_0070;
pub const CASTLE_SAFE_BLACK_Q: u64 = 0x0000_0000_0000_001C;

/// Array of all files and their corresponding bits, indexed from file A to file H.
pub static FILE_BB: [u64; FILE_CNT] = [
    FILE_A,
    FILE_A << 1,
    FILE_A << 2,
    FILE_A << 3,
    FILE_A << 4,
    FILE_A << 5,
    FILE_A << 6,
    FILE_A << 7,
];

/// Array of all ranks and their corresponding bits, indexed from rank 1 to rank 8.
pub static RANK_BB: [u64; RANK_CNT] = [
    RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_and_ranks_partition_the_board() {
        let mut all_files = 0u64;
        let mut all_ranks = 0u64;
        for i in 0..8 {
            assert_eq!(FILE_BB[i].count_ones(), 8);
            assert_eq!(RANK_BB[i].count_ones(), 8);
            assert_eq!(all_files & FILE_BB[i], 0);
            assert_eq!(all_ranks & RANK_BB[i], 0);
            all_files |= FILE_BB[i];
            all_ranks |= RANK_BB[i];
        }
        assert_eq!(all_files, !0);
        assert_eq!(all_ranks, !0);
        assert_eq!(FILE_BB[7], FILE_H);
    }

    #[test]
    fn castle_masks() {
        // e1 is square 60, e8 is square 4.
        assert_ne!(CASTLE_SAFE_WHITE_K & (1u64 << WHITE_KING_START), 0);
        assert_ne!(CASTLE_SAFE_WHITE_Q & (1u64 << WHITE_KING_START), 0);
        assert_ne!(CASTLE_SAFE_BLACK_K & (1u64 << BLACK_KING_START), 0);
        assert_ne!(CASTLE_SAFE_BLACK_Q & (1u64 << BLACK_KING_START), 0);
        assert_eq!(CASTLE_EMPTY_WHITE_Q & (1u64 << ROOK_WHITE_QSIDE_START), 0);
        assert_eq!(CASTLE_EMPTY_BLACK_K & (1u64 << ROOK_BLACK_KSIDE_START), 0);
    }
}
