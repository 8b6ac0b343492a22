/// Unsigned 256-bit integer stored as four little-endian `u64` limbs.
///
/// Only the handful of operations needed as the double-width accumulator of a `u128` word are
/// provided.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct u256 {
    pub x0: u64,
    pub x1: u64,
    pub x2: u64,
    pub x3: u64,
}

impl u256 {
    pub const ZERO: Self = Self {
        x0: 0,
        x1: 0,
        x2: 0,
        x3: 0,
    };

    pub const MAX: Self = Self {
        x0: u64::MAX,
        x1: u64::MAX,
        x2: u64::MAX,
        x3: u64::MAX,
    };

    #[inline(always)]
    pub const fn from_halves(hi: u128, lo: u128) -> Self {
        Self {
            x0: lo as u64,
            x1: (lo >> 64) as u64,
            x2: hi as u64,
            x3: (hi >> 64) as u64,
        }
    }

    #[inline(always)]
    pub const fn from_u128(lo: u128) -> Self {
        Self::from_halves(0, lo)
    }

    #[inline(always)]
    pub const fn low_u128(self) -> u128 {
        self.x0 as u128 | ((self.x1 as u128) << 64)
    }

    #[inline(always)]
    pub const fn high_u128(self) -> u128 {
        self.x2 as u128 | ((self.x3 as u128) << 64)
    }

    /// Full 256-bit product of two `u128` values.
    #[inline(always)]
    pub const fn mul_u128_u128(lhs: u128, rhs: u128) -> Self {
        let lhs0 = lhs as u64 as u128;
        let lhs1 = lhs >> 64;
        let rhs0 = rhs as u64 as u128;
        let rhs1 = rhs >> 64;

        let p00 = lhs0 * rhs0;
        let p01 = lhs0 * rhs1;
        let p10 = lhs1 * rhs0;
        let p11 = lhs1 * rhs1;

        // < 3 * 2^64, no overflow
        let mid = (p00 >> 64) + (p01 as u64 as u128) + (p10 as u64 as u128);

        let lo = (p00 as u64 as u128) | ((mid as u64 as u128) << 64);
        let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);
        Self::from_halves(hi, lo)
    }

    #[inline(always)]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (lo, carry) = self.low_u128().overflowing_add(rhs.low_u128());
        let (hi, o0) = self.high_u128().overflowing_add(rhs.high_u128());
        let (hi, o1) = hi.overflowing_add(carry as u128);
        (Self::from_halves(hi, lo), o0 | o1)
    }

    #[inline(always)]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Logical right shift. `amount` must be below 256.
    #[inline(always)]
    pub const fn shr(self, amount: u32) -> Self {
        debug_assert!(amount < 256);
        let lo = self.low_u128();
        let hi = self.high_u128();
        if amount < 128 {
            let carry = match hi.checked_shl(128 - amount) {
                Some(carry) => carry,
                None => 0,
            };
            Self::from_halves(hi >> amount, (lo >> amount) | carry)
        } else {
            Self::from_halves(0, hi >> (amount - 128))
        }
    }

    /// Divides `self` by `d`, returning `(quotient, remainder)`.
    ///
    /// The high half of `self` must be smaller than `d`, so that the quotient fits in a `u128`.
    pub const fn div_rem_u256_u128(self, d: u128) -> (u128, u128) {
        debug_assert!(self.high_u128() < d);
        let lo = self.low_u128();
        let mut rem = self.high_u128();
        let mut quot = 0u128;

        let mut i = 128;
        while i > 0 {
            i -= 1;
            let top = rem >> 127;
            rem = (rem << 1) | ((lo >> i) & 1);
            quot <<= 1;
            // the shifted-out bit means the true remainder is at least 2^128 > d
            if top == 1 || rem >= d {
                rem = rem.wrapping_sub(d);
                quot |= 1;
            }
        }
        (quot, rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;

    fn mul_u64_limbs(lhs: u128, rhs: u128) -> [u64; 4] {
        let a = [lhs as u64, (lhs >> 64) as u64];
        let b = [rhs as u64, (rhs >> 64) as u64];
        let mut out = [0u64; 4];
        for i in 0..2 {
            let mut carry = 0u128;
            for j in 0..2 {
                let t = a[i] as u128 * b[j] as u128 + out[i + j] as u128 + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }
            out[i + 2] = carry as u64;
        }
        out
    }

    #[test]
    fn test_mul_u128_u128() {
        for _ in 0..10000 {
            let lhs = random::<u128>();
            let rhs = random::<u128>();
            let prod = u256::mul_u128_u128(lhs, rhs);
            assert_eq!([prod.x0, prod.x1, prod.x2, prod.x3], mul_u64_limbs(lhs, rhs));
            assert_eq!(prod.low_u128(), lhs.wrapping_mul(rhs));
        }

        let max = u256::mul_u128_u128(u128::MAX, u128::MAX);
        assert_eq!(max.high_u128(), u128::MAX - 1);
        assert_eq!(max.low_u128(), 1);
    }

    #[test]
    fn test_add_carries() {
        let x = u256::from_u128(u128::MAX);
        let y = u256::from_u128(1);
        assert_eq!(x.wrapping_add(y), u256::from_halves(1, 0));

        let (wrapped, overflow) = u256::MAX.overflowing_add(y);
        assert_eq!(wrapped, u256::ZERO);
        assert!(overflow);
    }

    #[test]
    fn test_shr() {
        for _ in 0..1000 {
            let hi = random::<u128>();
            let lo = random::<u128>();
            let x = u256::from_halves(hi, lo);

            assert_eq!(x.shr(0), x);
            assert_eq!(x.shr(128), u256::from_u128(hi));
            assert_eq!(x.shr(255), u256::from_u128(hi >> 127));

            let amount = random::<u32>() % 128;
            let expected_lo = if amount == 0 {
                lo
            } else {
                (lo >> amount) | (hi << (128 - amount))
            };
            assert_eq!(x.shr(amount), u256::from_halves(hi >> amount, expected_lo));
        }
    }

    #[test]
    fn test_div_rem() {
        for _ in 0..1000 {
            let d = random::<u128>() | 1;
            let hi = random::<u128>() % d;
            let lo = random::<u128>();
            let (q, r) = u256::from_halves(hi, lo).div_rem_u256_u128(d);
            assert!(r < d);

            let back = u256::mul_u128_u128(q, d).wrapping_add(u256::from_u128(r));
            assert_eq!(back, u256::from_halves(hi, lo));
        }

        // small divisors exercise the shifted-out top bit
        let (q, r) = u256::from_halves(2, 5).div_rem_u256_u128(3);
        let back = u256::mul_u128_u128(q, 3).wrapping_add(u256::from_u128(r));
        assert_eq!(back, u256::from_halves(2, 5));

        let (q, r) = u256::from_halves(u128::MAX - 1, u128::MAX).div_rem_u256_u128(u128::MAX);
        assert_eq!(q, u128::MAX);
        assert_eq!(r, u128::MAX - 1);
    }
}
