use crate::{
    bits,
    word::{DoubleWord, Word},
};
use core::ops::{Div, Rem};

/// Division and remainder by a fixed divisor, using a multiply and a shift instead of a hardware
/// divide.
///
/// The quotient is computed as `floor(n * M / 2^(W + shift))` where `M = 2^W + multiplier` is
/// `ceil(2^(W + shift) / divisor)` and `shift = ceil(log2(divisor))`. Since `M` needs `W + 1`
/// bits, only its low word is stored and the implicit top bit is added back as `+ n`, which fits
/// in the double-width accumulator. The result is exact for every dividend of the word type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FastDiv<W> {
    multiplier: W,
    shift: u32,
    divisor: W,
}

pub type FastDiv32 = FastDiv<u32>;
pub type FastDiv64 = FastDiv<u64>;
pub type FastDiv128 = FastDiv<u128>;

impl<W: Word> FastDiv<W> {
    /// Precomputes the reciprocal of `divisor`, which must be nonzero.
    pub fn new(divisor: W) -> Self {
        debug_assert!(divisor != W::ZERO);

        if divisor == W::ONE {
            // ilog2(0) is undefined; M = 2^W and shift = 0 make the quotient `n` itself
            return Self {
                multiplier: W::ZERO,
                shift: 0,
                divisor,
            };
        }

        let shift = bits::ilog2(divisor - W::ONE) + 1;
        let pow = if shift == W::BITS {
            W::ZERO
        } else {
            W::ONE << shift
        };

        // multiplier = ceil(2^W * (2^shift - divisor) / divisor)
        // 2^shift - divisor < divisor, so the quotient fits in a single word
        let multiplier = W::div_wide(pow.wrapping_sub(divisor), divisor - W::ONE, divisor);

        Self {
            multiplier,
            shift,
            divisor,
        }
    }

    /// Returns `None` if `divisor` is zero.
    pub fn try_new(divisor: W) -> Option<Self> {
        if divisor == W::ZERO {
            None
        } else {
            Some(Self::new(divisor))
        }
    }

    #[inline(always)]
    pub fn div(&self, n: W) -> W {
        let hi = n.mul_high(self.multiplier);
        W::Double::from_half(hi)
            .wrapping_add(W::Double::from_half(n))
            .shift_right(self.shift)
            .low()
    }

    #[inline(always)]
    pub fn rem(&self, n: W) -> W {
        n - self.div(n) * self.divisor
    }

    #[inline(always)]
    pub fn div_rem(&self, n: W) -> (W, W) {
        let q = self.div(n);
        (q, n - q * self.divisor)
    }

    /// Replaces every value with its quotient.
    pub fn div_in_place(&self, values: &mut [W]) {
        let this = *self;
        pulp::Arch::new().dispatch(
            #[inline(always)]
            || {
                for x in values.iter_mut() {
                    *x = this.div(*x);
                }
            },
        );
    }

    /// Replaces every value with its remainder.
    pub fn rem_in_place(&self, values: &mut [W]) {
        let this = *self;
        pulp::Arch::new().dispatch(
            #[inline(always)]
            || {
                for x in values.iter_mut() {
                    *x = this.rem(*x);
                }
            },
        );
    }

    #[inline(always)]
    pub fn divisor(&self) -> W {
        self.divisor
    }

    #[inline(always)]
    pub fn multiplier(&self) -> W {
        self.multiplier
    }

    #[inline(always)]
    pub fn shift(&self) -> u32 {
        self.shift
    }
}

macro_rules! impl_fastdiv_ops {
    ($($word: ty),* $(,)?) => {$(
        impl Div<FastDiv<$word>> for $word {
            type Output = $word;

            #[inline(always)]
            fn div(self, rhs: FastDiv<$word>) -> $word {
                rhs.div(self)
            }
        }

        impl Div<&FastDiv<$word>> for $word {
            type Output = $word;

            #[inline(always)]
            fn div(self, rhs: &FastDiv<$word>) -> $word {
                rhs.div(self)
            }
        }

        impl Rem<FastDiv<$word>> for $word {
            type Output = $word;

            #[inline(always)]
            fn rem(self, rhs: FastDiv<$word>) -> $word {
                rhs.rem(self)
            }
        }

        impl Rem<&FastDiv<$word>> for $word {
            type Output = $word;

            #[inline(always)]
            fn rem(self, rhs: &FastDiv<$word>) -> $word {
                rhs.rem(self)
            }
        }
    )*};
}

impl_fastdiv_ops!(u32, u64, u128);
