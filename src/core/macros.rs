//! Macros for implementing bit operations, shifting operations and the `From` trait
//! for single-field tuple structs such as `BitBoard` and `SQ`.

/// Implements a shift operation (by a `usize` amount) for a tuple struct. Bits shifted past
/// either end are discarded.
macro_rules! impl_indv_shift_ops {
    ($t:ty, $tname:ident, $fname:ident, $w:ident, $ta_name:ident, $fa_name:ident) => {
        impl $tname<usize> for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: usize) -> $t {
                Self::from((self.0).$w(rhs as u32))
            }
        }

        impl $ta_name<usize> for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: usize) {
                *self = Self::from((self.0).$w(rhs as u32));
            }
        }
    };
}

/// Implements a binary bit operation against both the struct itself and its inner type.
macro_rules! impl_indv_bit_ops {
    ($t:ty, $b:ty, $tname:ident, $fname:ident, $w:ident, $ta_name:ident, $fa_name:ident) => {
        impl $tname for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: $t) -> $t {
                Self::from((self.0).$w(rhs.0))
            }
        }

        impl $ta_name for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: $t) {
                *self = Self::from((self.0).$w(rhs.0));
            }
        }

        impl $tname<$b> for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: $b) -> $t {
                Self::from((self.0).$w(rhs))
            }
        }

        impl $ta_name<$b> for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: $b) {
                *self = Self::from((self.0).$w(rhs));
            }
        }
    };
}

/// Implements `&, |, ^, !`, the shifts `<< >>`, wrapping `-` and the `From` conversions
/// for a struct consisting of a single tuple field.
macro_rules! impl_bit_ops {
    ($t:tt, $b:tt) => {
        impl From<$b> for $t {
            fn from(bit_type: $b) -> Self {
                $t(bit_type)
            }
        }

        impl From<$t> for $b {
            fn from(it: $t) -> Self {
                it.0
            }
        }

        impl_indv_bit_ops!($t, $b, BitOr, bitor, bitor, BitOrAssign, bitor_assign);
        impl_indv_bit_ops!($t, $b, BitAnd, bitand, bitand, BitAndAssign, bitand_assign);
        impl_indv_bit_ops!($t, $b, BitXor, bitxor, bitxor, BitXorAssign, bitxor_assign);
        impl_indv_bit_ops!($t, $b, Sub, sub, wrapping_sub, SubAssign, sub_assign);

        impl_indv_shift_ops!($t, Shl, shl, checked_shl_or_zero, ShlAssign, shl_assign);
        impl_indv_shift_ops!($t, Shr, shr, checked_shr_or_zero, ShrAssign, shr_assign);

        impl Not for $t {
            type Output = $t;

            #[inline]
            fn not(self) -> $t {
                $t(!self.0)
            }
        }
    };
}

/// Shifts that saturate to zero instead of wrapping the shift amount, so a square
/// pushed off the board never reappears on the other side.
pub(crate) trait ShiftOrZero: Sized {
    fn checked_shl_or_zero(self, rhs: u32) -> Self;
    fn checked_shr_or_zero(self, rhs: u32) -> Self;
}

macro_rules! impl_shift_or_zero {
    ($($int:ty),*) => {$(
        impl ShiftOrZero for $int {
            #[inline(always)]
            fn checked_shl_or_zero(self, rhs: u32) -> Self {
                self.checked_shl(rhs).unwrap_or(0)
            }

            #[inline(always)]
            fn checked_shr_or_zero(self, rhs: u32) -> Self {
                self.checked_shr(rhs).unwrap_or(0)
            }
        }
    )*};
}

impl_shift_or_zero!(u64);

#[cfg(test)]
mod tests {
    use super::ShiftOrZero;
    use std::ops::*;

    macro_rules! test_bit_ops_impls {
        ($t:tt, $fi:expr, $si:expr, $opp:tt) => ({
            let c_a = $fi $opp $si;
            let i_fo = $t::from($fi);
            let i_so = $t::from($si);
            let c = i_fo $opp i_so;
            assert_eq!(c.0, c_a);
        });
    }

    #[derive(Copy, Clone, Default, Hash, PartialEq, Eq, Debug)]
    struct DummyBB(pub u64);

    impl_bit_ops!(DummyBB, u64);

    const BIT_CONSTS: [u64; 8] = [
        0xFE00C4D0,
        0x12F450012,
        0xFFFFFFFF,
        0x00000001,
        0xA0E34001,
        0x9ABBC0AA,
        0x412CBFFF,
        0x8000000000000000,
    ];

    #[test]
    fn macro_impls_bb() {
        for bits in BIT_CONSTS.iter() {
            assert_eq!((!DummyBB::from(*bits)).0, !(*bits));
            for bits_2 in BIT_CONSTS.iter() {
                test_bit_ops_impls!(DummyBB, *bits, *bits_2, ^);
                test_bit_ops_impls!(DummyBB, *bits, *bits_2, |);
                test_bit_ops_impls!(DummyBB, *bits, *bits_2, &);
                assert_eq!((DummyBB(*bits) - DummyBB(*bits_2)).0, bits.wrapping_sub(*bits_2));
            }
        }
    }

    #[test]
    fn shifts_fall_off_the_board() {
        assert_eq!((DummyBB(1 << 63) << 1).0, 0);
        assert_eq!((DummyBB(1) >> 1).0, 0);
        assert_eq!((DummyBB(1) << 64).0, 0);
        assert_eq!(0xFFu64.checked_shl_or_zero(70), 0);
        assert_eq!((DummyBB(0b100) >> 2).0, 1);
    }
}
