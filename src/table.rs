use crate::{exactdiv::ExactDiv, word::Word};
use aligned_vec::{avec, ABox};
use core::ops::Range;

/// Exact divisors for every odd candidate `1, 3, 5, ...` up to a limit, for trial division.
///
/// The divisor `d` lives at index `d / 2`.
#[derive(Debug, Clone)]
pub struct DivisorTable<W> {
    divs: ABox<[ExactDiv<W>]>,
}

impl<W: Word> DivisorTable<W> {
    /// Builds the table of all odd divisors `d <= limit`.
    pub fn new(limit: u32) -> Self {
        let len = (limit as usize + 1) / 2;
        let mut divs = avec![ExactDiv::new(W::ONE); len].into_boxed_slice();
        for (i, div) in divs.iter_mut().enumerate().skip(1) {
            *div = ExactDiv::new(W::from_u32(2 * i as u32 + 1));
        }
        Self { divs }
    }

    /// Largest odd divisor in the table, or `0` if it is empty.
    pub fn limit(&self) -> u32 {
        match self.divs.len() {
            0 => 0,
            len => 2 * len as u32 - 1,
        }
    }

    pub fn len(&self) -> usize {
        self.divs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divs.is_empty()
    }

    /// Returns the precomputed divisor for `divisor`, or `None` if it is even or out of range.
    pub fn get(&self, divisor: u32) -> Option<&ExactDiv<W>> {
        if divisor % 2 == 0 {
            None
        } else {
            self.divs.get(divisor as usize / 2)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExactDiv<W>> {
        self.divs.iter()
    }

    /// Returns `true` if every odd `d` with `d * d <= k` is in the table.
    pub fn covers(&self, k: W) -> bool {
        let next = W::from_u32(self.limit() + 2);
        match next.checked_mul(next) {
            Some(sq) => k < sq,
            None => true,
        }
    }

    /// Smallest odd `d >= 3` with `d * d <= k` that divides `k`.
    ///
    /// `k` must be covered by the table, see [`covers`](Self::covers).
    pub fn smallest_odd_factor(&self, k: W) -> Option<W> {
        debug_assert!(self.covers(k));
        for div in self.divs.iter().skip(1) {
            let d = div.divisor();
            match d.checked_mul(d) {
                Some(sq) if sq <= k => {}
                _ => break,
            }
            if div.divides(k) {
                return Some(d);
            }
        }
        None
    }

    /// Returns `true` if `k` is an odd prime.
    ///
    /// `k` must be covered by the table, see [`covers`](Self::covers).
    pub fn is_odd_prime(&self, k: W) -> bool {
        k.is_odd() && k > W::ONE && self.smallest_odd_factor(k).is_none()
    }

    /// Number of odd primes in `range`.
    pub fn count_odd_primes(&self, range: Range<W>) -> usize {
        let mut count = 0;
        let mut k = range.start;
        while k < range.end {
            count += self.is_odd_prime(k) as usize;
            k = k + W::ONE;
        }
        count
    }
}
