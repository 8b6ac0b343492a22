//! Bit-scan primitives over fixed-width unsigned integers.
//!
//! `u32` and `u64` map to the native instructions. The double-width types are split into two
//! native-width halves: `u128` into two `u64`, and [`u256`] into two `u128` (and from there into
//! `u64` again).
//!
//! `clz`, `ctz` and `ilog2` are undefined for a zero input. This is checked in debug builds
//! only.

use crate::u256;

/// Bit-scan operations at a fixed bit width.
pub trait Bits: Copy {
    /// Width in bits.
    const BITS: u32;

    /// Number of set bits.
    fn popcount(self) -> u32;

    /// Number of leading zero bits, counted at the full width of `Self`.
    fn clz(self) -> u32;

    /// Number of trailing zero bits.
    fn ctz(self) -> u32;

    /// `floor(log2(self))`.
    #[inline(always)]
    fn ilog2(self) -> u32 {
        (Self::BITS - 1) - self.clz()
    }
}

#[inline(always)]
pub fn popcount<T: Bits>(x: T) -> u32 {
    x.popcount()
}

#[inline(always)]
pub fn clz<T: Bits>(x: T) -> u32 {
    x.clz()
}

#[inline(always)]
pub fn ctz<T: Bits>(x: T) -> u32 {
    x.ctz()
}

#[inline(always)]
pub fn ilog2<T: Bits>(x: T) -> u32 {
    x.ilog2()
}

macro_rules! impl_native_bits {
    ($($ty: ty),* $(,)?) => {$(
        impl Bits for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline(always)]
            fn popcount(self) -> u32 {
                self.count_ones()
            }

            #[inline(always)]
            fn clz(self) -> u32 {
                debug_assert!(self != 0);
                self.leading_zeros()
            }

            #[inline(always)]
            fn ctz(self) -> u32 {
                debug_assert!(self != 0);
                self.trailing_zeros()
            }
        }
    )*};
}

macro_rules! impl_split_bits {
    ($ty: ty, $half: ty, $split: path) => {
        impl Bits for $ty {
            const BITS: u32 = 2 * <$half as Bits>::BITS;

            #[inline(always)]
            fn popcount(self) -> u32 {
                let (hi, lo) = $split(self);
                hi.popcount() + lo.popcount()
            }

            #[inline(always)]
            fn clz(self) -> u32 {
                let (hi, lo) = $split(self);
                if hi != 0 {
                    hi.clz()
                } else {
                    <$half as Bits>::BITS + lo.clz()
                }
            }

            #[inline(always)]
            fn ctz(self) -> u32 {
                let (hi, lo) = $split(self);
                if lo != 0 {
                    lo.ctz()
                } else {
                    <$half as Bits>::BITS + hi.ctz()
                }
            }
        }
    };
}

#[inline(always)]
fn split_u128(x: u128) -> (u64, u64) {
    ((x >> 64) as u64, x as u64)
}

#[inline(always)]
fn split_u256(x: u256) -> (u128, u128) {
    (x.high_u128(), x.low_u128())
}

impl_native_bits!(u32, u64);
impl_split_bits!(u128, u64, split_u128);
impl_split_bits!(u256, u128, split_u256);
