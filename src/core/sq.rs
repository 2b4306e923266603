//! Contains the representation of a chessboard's square.
//!
//! Internally, a `SQ` is just a u8. The number of a `SQ` maps to the following
//! squares of a chessboard:
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
//! That is, `index = (7 - rank) * 8 + file`, with `rank` and `file` both counted from zero.
//!
//! # Examples
//!
//! ```rust
//! use bitsearch::core::sq::SQ;
//!
//! let e2 = SQ::E2;
//! assert_eq!(e2.0, 52);
//! assert_eq!(e2.file(), 4);
//! assert_eq!(e2.rank(), 1);
//! assert_eq!(e2.to_string(), "e2");
//! ```

use super::bitboard::BitBoard;

use std::fmt;
use std::str::FromStr;

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Default, Hash, PartialEq, PartialOrd, Eq, Ord, Debug)]
#[repr(transparent)]
pub struct SQ(pub u8);

impl SQ {
    pub const A8: SQ = SQ(0);
    pub const B8: SQ = SQ(1);
    pub const C8: SQ = SQ(2);
    pub const D8: SQ = SQ(3);
    pub const E8: SQ = SQ(4);
    pub const F8: SQ = SQ(5);
    pub const G8: SQ = SQ(6);
    pub const H8: SQ = SQ(7);
    pub const A7: SQ = SQ(8);
    pub const B7: SQ = SQ(9);
    pub const C7: SQ = SQ(10);
    pub const D7: SQ = SQ(11);
    pub const E7: SQ = SQ(12);
    pub const F7: SQ = SQ(13);
    pub const G7: SQ = SQ(14);
    pub const H7: SQ = SQ(15);
    pub const A6: SQ = SQ(16);
    pub const B6: SQ = SQ(17);
    pub const C6: SQ = SQ(18);
    pub const D6: SQ = SQ(19);
    pub const E6: SQ = SQ(20);
    pub const F6: SQ = SQ(21);
    pub const G6: SQ = SQ(22);
    pub const H6: SQ = SQ(23);
    pub const A5: SQ = SQ(24);
    pub const B5: SQ = SQ(25);
    pub const C5: SQ = SQ(26);
    pub const D5: SQ = SQ(27);
    pub const E5: SQ = SQ(28);
    pub const F5: SQ = SQ(29);
    pub const G5: SQ = SQ(30);
    pub const H5: SQ = SQ(31);
    pub const A4: SQ = SQ(32);
    pub const B4: SQ = SQ(33);
    pub const C4: SQ = SQ(34);
    pub const D4: SQ = SQ(35);
    pub const E4: SQ = SQ(36);
    pub const F4: SQ = SQ(37);
    pub const G4: SQ = SQ(38);
    pub const H4: SQ = SQ(39);
    pub const A3: SQ = SQ(40);
    pub const B3: SQ = SQ(41);
    pub const C3: SQ = SQ(42);
    pub const D3: SQ = SQ(43);
    pub const E3: SQ = SQ(44);
    pub const F3: SQ = SQ(45);
    pub const G3: SQ = SQ(46);
    pub const H3: SQ = SQ(47);
    pub const A2: SQ = SQ(48);
    pub const B2: SQ = SQ(49);
    pub const C2: SQ = SQ(50);
    pub const D2: SQ = SQ(51);
    pub const E2: SQ = SQ(52);
    pub const F2: SQ = SQ(53);
    pub const G2: SQ = SQ(54);
    pub const H2: SQ = SQ(55);
    pub const A1: SQ = SQ(56);
    pub const B1: SQ = SQ(57);
    pub const C1: SQ = SQ(58);
    pub const D1: SQ = SQ(59);
    pub const E1: SQ = SQ(60);
    pub const F1: SQ = SQ(61);
    pub const G1: SQ = SQ(62);
    pub const H1: SQ = SQ(63);

    /// Creates a square from a zero-based file (a = 0) and a zero-based rank (rank 1 = 0).
    #[inline]
    pub fn make(file: u8, rank: u8) -> SQ {
        debug_assert!(file < 8 && rank < 8);
        SQ((7 - rank) * 8 + file)
    }

    /// Returns if a `SQ` is within the legal bounds of a square,
    /// which is inclusively between 0 - 63.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.0 < 64
    }

    /// Converts a `SQ` to its `BitBoard` equivalent.
    #[inline(always)]
    pub fn to_bb(self) -> BitBoard {
        debug_assert!(self.is_okay());
        BitBoard(1u64 << self.0)
    }

    /// Returns the zero-based file of the square, where file a is 0.
    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 & 0b0000_0111
    }

    /// Returns the zero-based rank of the square, where rank 1 is 0.
    #[inline(always)]
    pub const fn rank(self) -> u8 {
        7 - (self.0 >> 3)
    }

    /// Character of this square's file, 'a' through 'h'.
    #[inline]
    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// Character of this square's rank, '1' through '8'.
    #[inline]
    pub fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Error returned when a string is not a square in algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSqError(pub String);

impl fmt::Display for ParseSqError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "not a square: {:?}", self.0)
    }
}

impl std::error::Error for ParseSqError {}

impl FromStr for SQ {
    type Err = ParseSqError;

    fn from_str(s: &str) -> Result<SQ, ParseSqError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseSqError(s.to_string()));
        }
        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => Ok(SQ::make(f - b'a', r - b'1')),
            _ => Err(ParseSqError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(SQ::make(0, 7), SQ::A8);
        assert_eq!(SQ::make(7, 0), SQ::H1);
        assert_eq!(SQ::make(4, 0), SQ::E1);
        for i in 0..64u8 {
            let sq = SQ(i);
            assert_eq!(SQ::make(sq.file(), sq.rank()), sq);
            assert_eq!(sq.to_bb().count_bits(), 1);
        }
    }

    #[test]
    fn parse_and_display() {
        for i in 0..64u8 {
            let sq = SQ(i);
            assert_eq!(sq.to_string().parse::<SQ>(), Ok(sq));
        }
        assert_eq!("a8".parse::<SQ>(), Ok(SQ(0)));
        assert_eq!("h1".parse::<SQ>(), Ok(SQ(63)));
        assert!("i1".parse::<SQ>().is_err());
        assert!("a9".parse::<SQ>().is_err());
        assert!("a".parse::<SQ>().is_err());
        assert!("e10".parse::<SQ>().is_err());
    }
}
