//! Module for the implementation and definition of a move to be played.
//!
//! A [`BitMove`] is a plain value: the square a piece leaves, the square it lands on, what
//! kind of move it is, and whether it captures. Two moves are equal when all of those fields
//! are equal.
//!
//! The kind is one of:
//!
//! ```md,ignore
//! Quiet         ===> any move that is not one of the below (capturing or not)
//! DoublePush    ===> a pawn moving two squares from its starting rank
//! EnPassant     ===> a pawn capturing onto the en-passant target square
//! Castle        ===> the king moving two squares, origin is the king's start square
//! Promotion(X)  ===> a pawn reaching the last rank, becoming X
//! ```
//!
//! For a castle, the destination square is the square the king lands on (g1 / c1 / g8 / c8),
//! not the rook's square.
//!
//! # Safety
//!
//! A `BitMove` is only meaningful for the position that generated it. Applying a move to a
//! `Board` that did not create it has unspecified (but memory safe) results.
//!
//! [`BitMove`]: struct.BitMove.html

use std::fmt;

use super::sq::SQ;
use super::PieceType;

/// What sort of special handling a move needs when applied.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Quiet,
    DoublePush,
    EnPassant,
    Castle,
    Promotion(PieceType),
}

/// Represents a singular move.
///
/// # Examples
///
/// ```rust
/// use bitsearch::core::piece_move::{BitMove, MoveKind};
/// use bitsearch::{PieceType, SQ};
///
/// let mov = BitMove::new(SQ::E7, SQ::E8, MoveKind::Promotion(PieceType::Q), false);
/// assert_eq!(mov.promotion(), Some(PieceType::Q));
/// assert_eq!(mov.to_string(), "e7e8Q");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct BitMove {
    src: SQ,
    dest: SQ,
    kind: MoveKind,
    capture: bool,
}

impl BitMove {
    /// Creates a new move.
    #[inline]
    pub const fn new(src: SQ, dest: SQ, kind: MoveKind, capture: bool) -> BitMove {
        BitMove {
            src,
            dest,
            kind,
            capture,
        }
    }

    /// A quiet move, capturing or not.
    #[inline]
    pub const fn quiet(src: SQ, dest: SQ, capture: bool) -> BitMove {
        BitMove::new(src, dest, MoveKind::Quiet, capture)
    }

    /// The null move: source and destination are both square 0, with no flags. Returned by
    /// a search that has nothing to play.
    #[inline]
    pub const fn null() -> BitMove {
        BitMove::new(SQ(0), SQ(0), MoveKind::Quiet, false)
    }

    /// Returns if this is the null move.
    #[inline]
    pub fn is_null(self) -> bool {
        self == BitMove::null()
    }

    /// Returns the source square of the move.
    #[inline(always)]
    pub fn get_src(self) -> SQ {
        self.src
    }

    /// Returns the destination square of the move.
    #[inline(always)]
    pub fn get_dest(self) -> SQ {
        self.dest
    }

    #[inline(always)]
    pub fn kind(self) -> MoveKind {
        self.kind
    }

    /// Returns if the move captures an opposing piece, en passant included.
    #[inline(always)]
    pub fn is_capture(self) -> bool {
        self.capture
    }

    /// Returns if the move is a pawn moving two squares forward.
    #[inline(always)]
    pub fn is_double_push(self) -> bool {
        self.kind == MoveKind::DoublePush
    }

    #[inline(always)]
    pub fn is_en_passant(self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    #[inline(always)]
    pub fn is_castle(self) -> bool {
        self.kind == MoveKind::Castle
    }

    #[inline(always)]
    pub fn is_promo(self) -> bool {
        self.promotion().is_some()
    }

    /// Returns the piece a pawn promotes to, if this is a promotion.
    #[inline]
    pub fn promotion(self) -> Option<PieceType> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Returns the move in coordinate notation: source square, destination square, and an
    /// uppercase promotion letter when the move promotes.
    pub fn stringify(self) -> String {
        let mut s = format!("{}{}", self.src, self.dest);
        if let Some(piece) = self.promotion() {
            s.push(piece.char_upper());
        }
        s
    }
}

impl Default for BitMove {
    fn default() -> Self {
        BitMove::null()
    }
}

impl fmt::Display for BitMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.stringify())
    }
}
