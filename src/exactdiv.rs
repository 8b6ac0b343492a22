use crate::word::Word;
use core::ops::Div;

/// Divisibility test by a fixed odd divisor.
///
/// Multiplying by the inverse of the divisor modulo `2^W` maps the multiples `0, d, 2d, ...` of
/// the divisor onto `0, 1, 2, ...`, and every other value above `floor((2^W - 1) / d)`. So
/// `d | k` iff `k * inverse <= threshold` with wrapping arithmetic, and in that case the product
/// is the quotient itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExactDiv<W> {
    inverse: W,
    threshold: W,
    divisor: W,
}

pub type ExactDiv32 = ExactDiv<u32>;
pub type ExactDiv64 = ExactDiv<u64>;
pub type ExactDiv128 = ExactDiv<u128>;

/// Inverse of an odd `n` modulo `2^W`.
///
/// Newton iteration `x <- x * (2 - x * n)` doubles the number of correct low bits, starting from
/// `x = 1` which is correct modulo 2, so `log2(W)` steps reach the full width.
#[inline]
pub fn mul_inv<W: Word>(n: W) -> W {
    debug_assert!(n.is_odd());
    let two = W::from_u32(2);
    let mut x = W::ONE;
    for _ in 0..W::BITS.trailing_zeros() {
        x = x.wrapping_mul(two.wrapping_sub(x.wrapping_mul(n)));
    }
    x
}

impl<W: Word> ExactDiv<W> {
    /// Precomputes the inverse and threshold of `divisor`, which must be odd.
    pub fn new(divisor: W) -> Self {
        debug_assert!(divisor.is_odd());
        let inverse = mul_inv(divisor);
        debug_assert!(divisor.wrapping_mul(inverse) == W::ONE);
        Self {
            inverse,
            threshold: W::MAX / divisor,
            divisor,
        }
    }

    /// Returns `None` if `divisor` is even.
    pub fn try_new(divisor: W) -> Option<Self> {
        if divisor.is_odd() {
            Some(Self::new(divisor))
        } else {
            None
        }
    }

    /// Returns `true` if the divisor divides `k`.
    #[inline(always)]
    pub fn divides(&self, k: W) -> bool {
        k.wrapping_mul(self.inverse) <= self.threshold
    }

    /// Returns `k / divisor`, provided the division is exact.
    ///
    /// If the divisor does not divide `k`, the result is an unspecified value.
    #[inline(always)]
    pub fn quotient(&self, k: W) -> W {
        debug_assert!(self.divides(k));
        k.wrapping_mul(self.inverse)
    }

    /// Number of values that are multiples of the divisor.
    pub fn count_multiples(&self, values: &[W]) -> usize {
        let this = *self;
        pulp::Arch::new().dispatch(
            #[inline(always)]
            || {
                values
                    .iter()
                    .map(|&k| this.divides(k) as usize)
                    .sum::<usize>()
            },
        )
    }

    #[inline(always)]
    pub fn divisor(&self) -> W {
        self.divisor
    }

    #[inline(always)]
    pub fn inverse(&self) -> W {
        self.inverse
    }

    #[inline(always)]
    pub fn threshold(&self) -> W {
        self.threshold
    }
}

macro_rules! impl_exactdiv_ops {
    ($($word: ty),* $(,)?) => {$(
        impl Div<ExactDiv<$word>> for $word {
            type Output = $word;

            #[inline(always)]
            fn div(self, rhs: ExactDiv<$word>) -> $word {
                rhs.quotient(self)
            }
        }

        impl Div<&ExactDiv<$word>> for $word {
            type Output = $word;

            #[inline(always)]
            fn div(self, rhs: &ExactDiv<$word>) -> $word {
                rhs.quotient(self)
            }
        }
    )*};
}

impl_exactdiv_ops!(u32, u64, u128);
