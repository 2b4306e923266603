//! Module for the `Castling` structure, which helps provide an easy way for the
//! `Board` to keep track of the various castling rights available for each player.
//!
//! At it's core, a [`Castling`] is a simple u8 which sets bits for each possible castling right.
//! A right only says that neither the king nor the rook of that side has moved (or been
//! captured) yet. Whether the castle can be played right now is up to move generation.
//!
//! [`Castling`]: struct.Castling.html

use crate::core::masks::*;
use crate::core::sq::SQ;
use crate::core::*;

use std::fmt;

bitflags! {
    /// Structure to help with recognizing the various possibilities of castling.
    ///
    /// Keeps track of what sides are possible to castle from for each player.
    pub struct Castling: u8 {
        const WHITE_K      = C_WHITE_K_MASK; // White has King-side Castling ability
        const WHITE_Q      = C_WHITE_Q_MASK; // White has Queen-side Castling ability
        const BLACK_K      = C_BLACK_K_MASK; // Black has King-side Castling ability
        const BLACK_Q      = C_BLACK_Q_MASK; // Black has Queen-side Castling ability
        const WHITE_ALL    = Self::WHITE_K.bits // White can castle for both sides
                           | Self::WHITE_Q.bits;
        const BLACK_ALL    = Self::BLACK_K.bits // Black can castle for both sides
                           | Self::BLACK_Q.bits;
    }
}

/// Returns the castling rights lost when a piece leaves or lands on this square.
#[inline]
fn castle_rights_mask(sq: SQ) -> u8 {
    match sq.0 {
        WHITE_KING_START => C_WHITE_K_MASK | C_WHITE_Q_MASK,
        BLACK_KING_START => C_BLACK_K_MASK | C_BLACK_Q_MASK,
        ROOK_WHITE_KSIDE_START => C_WHITE_K_MASK,
        ROOK_WHITE_QSIDE_START => C_WHITE_Q_MASK,
        ROOK_BLACK_KSIDE_START => C_BLACK_K_MASK,
        ROOK_BLACK_QSIDE_START => C_BLACK_Q_MASK,
        _ => 0,
    }
}

impl Castling {
    /// Removes all castling possibility for a single player
    #[inline]
    pub fn remove_player_castling(&mut self, player: Player) {
        match player {
            Player::White => self.bits &= Self::BLACK_ALL.bits,
            Player::Black => self.bits &= Self::WHITE_ALL.bits,
        }
    }

    /// Returns if a player can castle for a given side
    #[inline]
    pub fn castle_rights(self, player: Player, side: CastleType) -> bool {
        match player {
            Player::White => match side {
                CastleType::KingSide => self.contains(Self::WHITE_K),
                CastleType::QueenSide => self.contains(Self::WHITE_Q),
            },
            Player::Black => match side {
                CastleType::KingSide => self.contains(Self::BLACK_K),
                CastleType::QueenSide => self.contains(Self::BLACK_Q),
            },
        }
    }

    /// Returns if both players have lost their ability to castle
    #[inline]
    pub fn no_castling(self) -> bool {
        self.is_empty()
    }

    /// Clears the rights touched by a move from `from` to `to`. A king leaving its start
    /// square loses both rights, and a rook leaving (or being captured on) its corner loses
    /// that side's right. Returns the bits that were removed.
    #[inline]
    pub fn update_castling(&mut self, from: SQ, to: SQ) -> u8 {
        let mask_change: u8 = castle_rights_mask(to) | castle_rights_mask(from);
        let to_return: u8 = self.bits & mask_change;
        self.bits &= !mask_change;
        to_return
    }

    /// Adds the Right to castle based on an `char`.
    ///
    /// ```md
    /// `K` -> Add White King-side Castling bit.
    /// `Q` -> Add White Queen-side Castling bit.
    /// `k` -> Add Black King-side Castling bit.
    /// `q` -> Add Black Queen-side Castling bit.
    /// ```
    ///
    /// Returns `None` if the char is anything else, or if the right is already held.
    pub fn add_castling_char(&mut self, c: char) -> Option<()> {
        let right = match c {
            'K' => Castling::WHITE_K,
            'Q' => Castling::WHITE_Q,
            'k' => Castling::BLACK_K,
            'q' => Castling::BLACK_Q,
            _ => return None,
        };
        if self.contains(right) {
            return None;
        }
        self.insert(right);
        Some(())
    }

    /// Returns a pretty String representing the castling state
    ///
    /// Used for FEN Strings, with (`K` | `Q`) representing white castling abilities,
    /// and (`k` | `q`) representing black castling abilities. If there are no bits set,
    /// returns a String containing "-".
    pub fn pretty_string(self) -> String {
        if self.no_castling() {
            return "-".to_owned();
        }
        let mut s = String::with_capacity(4);
        if self.contains(Castling::WHITE_K) {
            s.push('K');
        }
        if self.contains(Castling::WHITE_Q) {
            s.push('Q');
        }
        if self.contains(Castling::BLACK_K) {
            s.push('k');
        }
        if self.contains(Castling::BLACK_Q) {
            s.push('q');
        }
        s
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.pretty_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_round_trip() {
        let mut c = Castling::empty();
        for ch in "KQkq".chars() {
            assert!(c.add_castling_char(ch).is_some());
        }
        assert_eq!(c, Castling::all());
        assert_eq!(c.pretty_string(), "KQkq");
        assert!(c.add_castling_char('x').is_none());
        assert!(c.add_castling_char('-').is_none());
        assert!(c.add_castling_char('K').is_none());
        assert_eq!(Castling::empty().to_string(), "-");
    }

    #[test]
    fn king_move_clears_both() {
        let mut c = Castling::all();
        let removed = c.update_castling(SQ::E1, SQ::E2);
        assert_eq!(removed, Castling::WHITE_ALL.bits());
        assert_eq!(c, Castling::BLACK_ALL);
    }

    #[test]
    fn rook_leaving_or_captured() {
        let mut c = Castling::all();
        c.update_castling(SQ::A1, SQ::A4);
        assert!(!c.castle_rights(Player::White, CastleType::QueenSide));
        assert!(c.castle_rights(Player::White, CastleType::KingSide));

        // A white piece capturing on h8 takes black's king-side right away.
        c.update_castling(SQ::B2, SQ::H8);
        assert!(!c.castle_rights(Player::Black, CastleType::KingSide));
        assert!(c.castle_rights(Player::Black, CastleType::QueenSide));

        c.remove_player_castling(Player::Black);
        assert_eq!(c, Castling::WHITE_K);
        assert_eq!(c.update_castling(SQ::D4, SQ::D5), 0);
    }
}
