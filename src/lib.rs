//! Twos BigInt \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers with value semantics. Digits are stored
//!   in two's-complement form, small values inline and larger ones in a shared copy-on-write buffer.
//! - [`BigIntError`]: the errors reported by decimal parsing, division and narrowing conversions.
//!
//! Enable the `serde` feature to (de)serialize values as decimal strings.

mod arith;
mod big_int;
mod bitwise;
mod constants;
mod decimal;
mod digits;
mod errors;
#[cfg(feature = "serde")]
mod serde_impl;

pub use big_int::BigInt;
pub use errors::BigIntError;
