//! Bitwise operations and shifts over the infinite two's-complement
//! extension. Operands shorter than the other side are read through
//! `digit_at`, so mixed-sign operands need no special casing.

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::big_int::{BigInt, ONE};
use crate::constants::*;

// 实现按位运算
impl BigInt {
    pub(crate) fn not_in_place(&mut self) {
        for digit in self.digits.as_mut_slice() {
            *digit = !*digit;
        }
        self.digits.normalize();
    }

    /// Two's complement negation, `-x == !x + 1`.
    pub(crate) fn negate(&mut self) {
        self.not_in_place();
        self.combine(&ONE, 0, false);
    }

    pub(crate) fn bitwise_in_place<F>(&mut self, other: &BigInt, op: F)
    where
        F: Fn(u32, u32) -> u32,
    {
        let len = self.digits.len().max(other.digits.len());
        self.digits.resize_to(len);
        for (i, digit) in self.digits.as_mut_slice().iter_mut().enumerate() {
            *digit = op(*digit, other.digits.digit_at(i));
        }
        self.digits.normalize();
    }
}

#[inline(always)]
fn extended(digits: &[u32], pos: usize, sign: u32) -> u32 {
    match digits.get(pos) {
        Some(&d) => d,
        None => sign,
    }
}

// 实现移位
impl BigInt {
    /// Grows by `n / 32` digits, so a large shift of a non-zero value
    /// allocates accordingly. Zero stays zero without growing.
    pub(crate) fn shl_in_place(&mut self, n: usize) {
        if n == 0 || self.is_zero() {
            return;
        }
        let n_ints = n / DIGIT_BITS as usize;
        let n_bits = (n % DIGIT_BITS as usize) as u32;

        // the top stored digit is a pure sign digit, so shifting it keeps the sign
        self.digits.resize_to(self.digits.len() + n_ints);
        let digits = self.digits.as_mut_slice();
        for i in (n_ints..digits.len()).rev() {
            let src = i - n_ints;
            let mut digit = digits[src] << n_bits;
            if n_bits > 0 && src > 0 {
                digit |= digits[src - 1] >> (DIGIT_BITS - n_bits);
            }
            digits[i] = digit;
        }
        digits[..n_ints].fill(0);
        self.digits.normalize();
    }

    /// Arithmetic shift: vacated high bits come from the sign extension, so
    /// negative values round toward negative infinity.
    pub(crate) fn shr_in_place(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let n_ints = n / DIGIT_BITS as usize;
        let n_bits = (n % DIGIT_BITS as usize) as u32;

        let sign = self.digits.sign_digit();
        let digits = self.digits.as_mut_slice();
        for i in 0..digits.len() {
            let src = i.saturating_add(n_ints);
            let mut digit = extended(digits, src, sign) >> n_bits;
            if n_bits > 0 {
                digit |= extended(digits, src.saturating_add(1), sign) << (DIGIT_BITS - n_bits);
            }
            digits[i] = digit;
        }
        self.digits.normalize();
    }
}

// shift amounts are `u32`, like `checked_shl`
impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(mut self, n: u32) -> Self::Output {
        self.shl_in_place(n as usize);
        self
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.clone() << n
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        self.shl_in_place(n as usize);
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(mut self, n: u32) -> Self::Output {
        self.shr_in_place(n as usize);
        self
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.clone() >> n
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, n: u32) {
        self.shr_in_place(n as usize);
    }
}
