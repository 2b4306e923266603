//! Contains the primitive components of a chessboard: `SQ`, `BitBoard`, `Player`,
//! `PieceType`, `CastleType`, moves, scores, and the attack generator.

#[macro_use]
mod macros;

pub mod attacks;
pub mod bitboard;
pub mod masks;
pub mod piece_move;
pub mod score;
pub mod sq;

use std::fmt;
use std::ops::Not;

/// Array of all piece types, in the order move generation visits them.
pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::P,
    PieceType::N,
    PieceType::B,
    PieceType::R,
    PieceType::Q,
    PieceType::K,
];

/// Array of both players, indexed by their enum value.
pub const ALL_PLAYERS: [Player; 2] = [Player::White, Player::Black];

/// Enum to represent the Players White & Black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Returns the other player.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitsearch::core::Player;
    ///
    /// let b = Player::Black;
    /// assert_eq!(b.other_player(), Player::White);
    /// ```
    #[inline(always)]
    pub fn other_player(self) -> Player {
        !self
    }

    /// Returns if this player is the maximizing side of a search. White maximizes.
    #[inline(always)]
    pub fn is_white(self) -> bool {
        self == Player::White
    }
}

impl Not for Player {
    type Output = Player;

    #[inline(always)]
    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Player::White => "White",
            Player::Black => "Black",
        })
    }
}

/// Which side of the board a castle happens on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastleType {
    KingSide,
    QueenSide,
}

/// All possible types of pieces on a chessboard, without color.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    P = 0,
    N = 1,
    B = 2,
    R = 3,
    Q = 4,
    K = 5,
}

impl PieceType {
    /// The pieces a pawn may promote to, in the order they are generated.
    pub const PROMOTIONS: [PieceType; 4] = [PieceType::Q, PieceType::N, PieceType::R, PieceType::B];

    /// Index of the piece type, for use in per-piece arrays.
    #[inline(always)]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Return the lowercase character of a `PieceType`.
    #[inline]
    pub fn char_lower(self) -> char {
        match self {
            PieceType::P => 'p',
            PieceType::N => 'n',
            PieceType::B => 'b',
            PieceType::R => 'r',
            PieceType::Q => 'q',
            PieceType::K => 'k',
        }
    }

    /// Return the uppercase character of a `PieceType`.
    #[inline]
    pub fn char_upper(self) -> char {
        self.char_lower().to_ascii_uppercase()
    }

    /// Parses a FEN piece character into its owner and type.
    pub fn from_fen_char(c: char) -> Option<(Player, PieceType)> {
        let piece = match c.to_ascii_lowercase() {
            'p' => PieceType::P,
            'n' => PieceType::N,
            'b' => PieceType::B,
            'r' => PieceType::R,
            'q' => PieceType::Q,
            'k' => PieceType::K,
            _ => return None,
        };
        let player = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Some((player, piece))
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            PieceType::P => "Pawn",
            PieceType::N => "Knight",
            PieceType::B => "Bishop",
            PieceType::R => "Rook",
            PieceType::Q => "Queen",
            PieceType::K => "King",
        };
        f.pad(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars() {
        for player in ALL_PLAYERS.iter() {
            for piece in ALL_PIECE_TYPES.iter() {
                let c = match *player {
                    Player::White => piece.char_upper(),
                    Player::Black => piece.char_lower(),
                };
                assert_eq!(PieceType::from_fen_char(c), Some((*player, *piece)));
            }
        }
        assert_eq!(PieceType::from_fen_char('x'), None);
        assert_eq!(PieceType::from_fen_char('3'), None);
    }

    #[test]
    fn players() {
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::Black.other_player().other_player(), Player::Black);
        assert!(Player::White.is_white());
        assert_eq!(format!("{}", Player::Black), "Black");
    }
}
