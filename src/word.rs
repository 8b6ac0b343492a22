use crate::{bits::Bits, u256};
use core::{
    fmt::Debug,
    ops::{Add, BitAnd, Div, Mul, Shl, Shr, Sub},
};

/// Unsigned word type that divisors and dividends are expressed in, together with its
/// double-width accumulator.
pub trait Word:
    Bits
    + Copy
    + Eq
    + Ord
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Accumulator of exactly twice the width, used to hold intermediate products.
    type Double: DoubleWord<Half = Self>;

    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn from_u32(x: u32) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    #[inline(always)]
    fn is_odd(self) -> bool {
        self & Self::ONE == Self::ONE
    }

    /// Full double-width product.
    fn wide_mul(self, rhs: Self) -> Self::Double;

    /// High word of the full product.
    #[inline(always)]
    fn mul_high(self, rhs: Self) -> Self {
        self.wide_mul(rhs).high()
    }

    /// Quotient of the double-width value `hi:lo` by `d`. Requires `hi < d`.
    fn div_wide(hi: Self, lo: Self, d: Self) -> Self;
}

/// Double-width scratch integer, whose halves are [`Word`]s.
pub trait DoubleWord: Copy {
    type Half: Copy;

    fn from_half(x: Self::Half) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn shift_right(self, amount: u32) -> Self;
    fn low(self) -> Self::Half;
    fn high(self) -> Self::Half;
}

macro_rules! impl_native_word {
    ($($word: ty => $double: ty),* $(,)?) => {$(
        impl Word for $word {
            type Double = $double;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$word>::MAX;

            #[inline(always)]
            fn from_u32(x: u32) -> Self {
                x as $word
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$word>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$word>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$word>::checked_mul(self, rhs)
            }

            #[inline(always)]
            fn wide_mul(self, rhs: Self) -> $double {
                self as $double * rhs as $double
            }

            #[inline(always)]
            fn div_wide(hi: Self, lo: Self, d: Self) -> Self {
                debug_assert!(hi < d);
                ((((hi as $double) << <$word>::BITS) | lo as $double) / d as $double) as $word
            }
        }

        impl DoubleWord for $double {
            type Half = $word;

            #[inline(always)]
            fn from_half(x: $word) -> Self {
                x as $double
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$double>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn shift_right(self, amount: u32) -> Self {
                self >> amount
            }

            #[inline(always)]
            fn low(self) -> $word {
                self as $word
            }

            #[inline(always)]
            fn high(self) -> $word {
                (self >> <$word>::BITS) as $word
            }
        }
    )*};
}

impl_native_word!(u32 => u64, u64 => u128);

impl Word for u128 {
    type Double = u256;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u128::MAX;

    #[inline(always)]
    fn from_u32(x: u32) -> Self {
        x as u128
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        u128::wrapping_mul(self, rhs)
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        u128::wrapping_sub(self, rhs)
    }

    #[inline(always)]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        u128::checked_mul(self, rhs)
    }

    #[inline(always)]
    fn wide_mul(self, rhs: Self) -> u256 {
        u256::mul_u128_u128(self, rhs)
    }

    #[inline(always)]
    fn div_wide(hi: Self, lo: Self, d: Self) -> Self {
        u256::from_halves(hi, lo).div_rem_u256_u128(d).0
    }
}

impl DoubleWord for u256 {
    type Half = u128;

    #[inline(always)]
    fn from_half(x: u128) -> Self {
        u256::from_u128(x)
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u256::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn shift_right(self, amount: u32) -> Self {
        u256::shr(self, amount)
    }

    #[inline(always)]
    fn low(self) -> u128 {
        self.low_u128()
    }

    #[inline(always)]
    fn high(self) -> u128 {
        self.high_u128()
    }
}
