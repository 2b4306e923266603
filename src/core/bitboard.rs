//! Module containing the `BitBoard` and associated functions / constants.
//!
//! A [`BitBoard`] is a set of bits, where the index of each bit represents a square on the
//! Board. We use this to mark whether or not something is residing at a certain square. For
//! example, if we are using it to map the positions of the white pawns, and there exists a
//! pawn at square b2, the bit at index 49 will be set to '1'. The lack of a piece is marked
//! with a '0' instead.
//!
//! Each bit's index of a [`BitBoard`] maps to the following squares:
//!
//! ```md,ignore
//! 8 | 0  1  2  3  4  5  6  7
//! 7 | 8  9  10 11 12 13 14 15
//! 6 | 16 17 18 19 20 21 22 23
//! 5 | 24 25 26 27 28 29 30 31
//! 4 | 32 33 34 35 36 37 38 39
//! 3 | 40 41 42 43 44 45 46 47
//! 2 | 48 49 50 51 52 53 54 55
//! 1 | 56 57 58 59 60 61 62 63
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! [`BitBoard`]: struct.BitBoard.html

use super::macros::ShiftOrZero;
use super::masks::*;
use super::sq::SQ;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::fmt;
use std::ops::*;

/// A `BitBoard` is simply a 64 bit long integer where each
/// bit maps to a specific square. Used for mapping occupancy, where '1' represents
/// a piece being at that index's square, and a '0' represents a lack of a piece.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct BitBoard(pub u64);

impl_bit_ops!(BitBoard, u64);

impl BitBoard {
    /// BitBoard of File A.
    pub const FILE_A: BitBoard = BitBoard(FILE_A);
    /// BitBoard of File H.
    pub const FILE_H: BitBoard = BitBoard(FILE_H);
    /// BitBoard of Rank 1.
    pub const RANK_1: BitBoard = BitBoard(RANK_1);
    /// BitBoard of Rank 2.
    pub const RANK_2: BitBoard = BitBoard(RANK_2);
    /// BitBoard of Rank 3.
    pub const RANK_3: BitBoard = BitBoard(RANK_3);
    /// BitBoard of Rank 4.
    pub const RANK_4: BitBoard = BitBoard(RANK_4);
    /// BitBoard of Rank 5.
    pub const RANK_5: BitBoard = BitBoard(RANK_5);
    /// BitBoard of Rank 6.
    pub const RANK_6: BitBoard = BitBoard(RANK_6);
    /// BitBoard of Rank 7.
    pub const RANK_7: BitBoard = BitBoard(RANK_7);
    /// BitBoard of Rank 8.
    pub const RANK_8: BitBoard = BitBoard(RANK_8);

    /// BitBoard of no squares.
    pub const EMPTY: BitBoard = BitBoard(0);

    /// Returns the number of bits in a `BitBoard`
    #[inline(always)]
    pub fn count_bits(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns the `SQ` of the least significant bit.
    ///
    /// # Panic
    ///
    /// Debug builds will panic if the `BitBoard` is empty.
    #[inline(always)]
    pub fn bit_scan_forward(self) -> SQ {
        debug_assert!(self.is_not_empty());
        SQ(self.0.trailing_zeros() as u8)
    }

    /// Determines if the `BitBoard` is empty (contains no bits).
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Determines if the `BitBoard` is not empty (contains one or more bits).
    #[inline(always)]
    pub fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Returns if the square's bit is set.
    #[inline(always)]
    pub fn contains(self, sq: SQ) -> bool {
        (self & sq.to_bb()).is_not_empty()
    }

    /// Returns the index (as a square) of the least significant bit and removes
    /// that bit from the `BitBoard`.
    ///
    /// # Safety
    ///
    /// Panics in debug builds if the `BitBoard` is empty. See [`BitBoard::pop_some_lsb`] for a
    /// non-panicking version of the method.
    ///
    /// [`BitBoard::pop_some_lsb`]: struct.BitBoard.html#method.pop_some_lsb
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> SQ {
        let sq = self.bit_scan_forward();
        *self &= *self - 1;
        sq
    }

    /// Returns the least significant bit of a `BitBoard`, if it has any. If there is a bit to
    /// return, it removes that bit from itself.
    #[inline(always)]
    pub fn pop_some_lsb(&mut self) -> Option<SQ> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_lsb())
        }
    }

    /// Splits the `BitBoard` into one `BitBoard` per set bit, least significant first.
    #[inline]
    pub fn singles(self) -> impl Iterator<Item = BitBoard> {
        self.map(SQ::to_bb)
    }
}

impl Iterator for BitBoard {
    type Item = SQ;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_some_lsb()
    }
}

impl fmt::Display for BitBoard {
    /// Prints the board as an 8x8 grid, rank 8 on top.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8u8 {
            for file in 0..8u8 {
                let set = self.contains(SQ(row * 8 + file));
                f.write_str(if set { "1 " } else { ". " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Sets the Number of random bits on a randomly-generated `BitBoard`.
#[derive(Copy, Clone, Eq, PartialEq)]
enum RandAmount {
    Dense,           // Average 32 bits
    Standard,        // Average 16 bits
    Sparse,          // Average 8 bits
    ExtremelySparse, // Average 4 bits
    Singular,        // One and only one bit set.
}

/// BitBoard generating structure, used to feed property tests of the attack generator.
///
/// ```
/// use bitsearch::core::bitboard::RandBitBoard;
///
/// let boards = RandBitBoard::default().pseudo_random(9).avg(8).many(20);
/// assert_eq!(boards.len(), 20);
/// assert!(boards.iter().all(|b| b.is_not_empty()));
/// ```
pub struct RandBitBoard {
    rng: StdRng,
    rand: RandAmount,
}

impl Default for RandBitBoard {
    fn default() -> Self {
        RandBitBoard {
            rng: StdRng::from_entropy(),
            rand: RandAmount::Standard,
        }
    }
}

impl RandBitBoard {
    /// Returns a vector of "amount" BitBoards.
    pub fn many(mut self, amount: usize) -> Vec<BitBoard> {
        (0..amount).map(|_| self.go()).collect()
    }

    /// Returns a singular random BitBoard.
    pub fn one(mut self) -> BitBoard {
        self.go()
    }

    /// Sets the average number of bits in the resulting Bitboard.
    pub fn avg(mut self, bits: u8) -> Self {
        self.rand = if bits >= 26 {
            RandAmount::Dense
        } else if bits >= 12 {
            RandAmount::Standard
        } else if bits >= 6 {
            RandAmount::Sparse
        } else if bits >= 2 {
            RandAmount::ExtremelySparse
        } else {
            RandAmount::Singular
        };
        self
    }

    /// Sets the generation to use a seeded generator, so the same seed
    /// always yields the same boards.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    fn go(&mut self) -> BitBoard {
        if self.rand == RandAmount::Singular {
            return SQ(self.rng.gen_range(0..64)).to_bb();
        }

        loop {
            let num: u64 = match self.rand {
                RandAmount::Dense => self.rng.gen(),
                RandAmount::Standard => self.rng.gen::<u64>() & self.rng.gen::<u64>(),
                RandAmount::Sparse => {
                    self.rng.gen::<u64>() & self.rng.gen::<u64>() & self.rng.gen::<u64>()
                }
                RandAmount::ExtremelySparse => {
                    self.rng.gen::<u64>()
                        & self.rng.gen::<u64>()
                        & self.rng.gen::<u64>()
                        & self.rng.gen::<u64>()
                }
                RandAmount::Singular => unreachable!(),
            };
            if num != 0 {
                return BitBoard(num);
            }
        }
    }
}
