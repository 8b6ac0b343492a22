//! Division and divisibility tests by runtime-constant divisors, without hardware divide
//! instructions in the query path.
//!
//! - [`FastDiv`] computes `n / d` and `n % d` with a multiply, an add and a shift.
//! - [`ExactDiv`] tests `d | n` for odd `d` with a multiply and a compare.
//!
//! Both are constructed once per divisor and then queried many times, typically from a
//! [`DivisorTable`] of precomputed divisors.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub use u256_impl::u256;

pub mod bits;
pub mod exactdiv;
pub mod fastdiv;
pub mod table;
mod u256_impl;
pub mod word;

pub use bits::Bits;
pub use exactdiv::{ExactDiv, ExactDiv128, ExactDiv32, ExactDiv64};
pub use fastdiv::{FastDiv, FastDiv128, FastDiv32, FastDiv64};
pub use table::DivisorTable;
pub use word::{DoubleWord, Word};
