//! Addition, subtraction, multiplication and division on two's-complement
//! digits. Multiplication and division work on magnitudes and reapply the
//! sign afterwards.

use log::trace;

use crate::big_int::{BigInt, ZERO};
use crate::constants::*;
use crate::digits::Digits;

// 实现加减法
impl BigInt {
    /// `self += other * 2^(32 * offset)`, or `-=` when `subtract` is set.
    ///
    /// Subtraction adds the complement of `other` with an initial carry of one.
    /// The working length leaves one spare digit above both operands so the
    /// final carry always lands inside the buffer.
    pub(crate) fn combine(&mut self, other: &BigInt, offset: usize, subtract: bool) {
        let len = self.digits.len().max(other.digits.len() + offset) + 1;
        self.digits.resize_to(len);

        let flip = if subtract { u32::MAX } else { 0 };
        let mut carry = subtract as u64;
        let digits = self.digits.as_mut_slice();
        for (i, slot) in digits.iter_mut().enumerate().skip(offset) {
            carry += *slot as u64 + (other.digits.digit_at(i - offset) ^ flip) as u64;
            *slot = carry as u32;
            carry >>= DIGIT_BITS;
        }
        self.digits.normalize();
    }
}

// 实现乘法
impl BigInt {
    pub(crate) fn mul_in_place(&mut self, rhs: &BigInt) {
        let negative = self.is_negative() != rhs.is_negative();
        if self.is_negative() {
            self.negate();
        }
        let rhs = rhs.abs();

        // one value digit under the sign digit
        if rhs.digits.len() <= 2 {
            self.mul_digit(rhs.digits.digit_at(0));
        } else {
            self.mul_magnitude(&rhs);
        }

        if negative {
            self.negate();
        }
    }

    /// Multiplies a non-negative value by one digit.
    pub(crate) fn mul_digit(&mut self, factor: u32) {
        let mut carry: u64 = 0;
        for digit in self.digits.as_mut_slice() {
            carry += (*digit as u64) * (factor as u64);
            *digit = carry as u32;
            carry >>= DIGIT_BITS;
        }
        // the old sign digit was zero, so the product fits and the carry is spent
        debug_assert_eq!(carry, 0);
        self.digits.push(POS_SIGN);
        self.digits.normalize();
    }

    /// Schoolbook product of two non-negative values.
    fn mul_magnitude(&mut self, rhs: &BigInt) {
        let x = self.digits.as_slice();
        let y = rhs.digits.as_slice();
        let mut z = vec![0_u32; x.len() + y.len()];

        for (i, &x_digit) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            for (j, &y_digit) in y.iter().enumerate() {
                carry += z[i + j] as u64 + (x_digit as u64) * (y_digit as u64);
                z[i + j] = carry as u32;
                carry >>= DIGIT_BITS;
            }
            z[i + y.len()] = carry as u32;
        }

        self.digits = Digits::from_vec(z);
    }
}

// 实现除法
impl BigInt {
    /// Truncating division by a non-zero divisor.
    pub(crate) fn div_rem_nonzero(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        debug_assert!(!divisor.is_zero());
        let quotient_negative = self.is_negative() != divisor.is_negative();
        let remainder_negative = self.is_negative();

        let (mut q, mut r) = BigInt::div_rem_magnitude(self.abs(), divisor.abs());
        if quotient_negative {
            q.negate();
        }
        if remainder_negative {
            r.negate();
        }
        (q, r)
    }

    fn div_rem_magnitude(mut u: BigInt, v: BigInt) -> (BigInt, BigInt) {
        if u < v {
            return (ZERO, u);
        }
        if v.digits.len() <= 2 {
            let r = u.div_digit(v.digits.digit_at(0));
            return (u, BigInt::from(r));
        }
        BigInt::divide_knuth(u, v)
    }

    /// Divides a non-negative value by one non-zero digit in place and
    /// returns the remainder.
    ///
    /// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
    pub(crate) fn div_digit(&mut self, divisor: u32) -> u32 {
        let divisor = divisor as u64;
        let mut r: u64 = 0;
        for digit in self.digits.as_mut_slice().iter_mut().rev() {
            let sum = (r << DIGIT_BITS) | *digit as u64;
            *digit = (sum / divisor) as u32;
            r = sum % divisor;
        }
        self.digits.normalize();
        r as u32
    }

    /// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
    ///
    /// Both operands are non-negative, `u >= v`, and `v` has at least two
    /// value digits.
    fn divide_knuth(mut u: BigInt, mut v: BigInt) -> (BigInt, BigInt) {
        // value digits of the divisor; the digit above them is the sign digit
        let n = v.digits.len() - 1;

        // D1 normalize
        // shift Vn-1 to [1xxx..x] so the estimate below is off by at most 2
        let shift = v.digits.digit_at(n - 1).leading_zeros();
        let factor = 1_u32 << shift;
        u.mul_digit(factor);
        v.mul_digit(factor);
        trace!("algorithm D: {} by {} digits, scaled by 2^{}", u.digits.len() - 1, n, shift);

        let v_top = v.digits.digit_at(n - 1) as u64;
        let v_next = v.digits.digit_at(n - 2) as u64;
        let m = u.digits.len() - 1 - n;
        let mut q = ZERO;
        q.digits.resize_to(m + 2);

        // D2 loop over quotient digits, most significant first
        for j in (0..=m).rev() {
            // D3 calculate qhat
            let top = ((u.digits.digit_at(j + n) as u64) << DIGIT_BITS)
                | u.digits.digit_at(j + n - 1) as u64;
            let mut qhat = top / v_top;
            let mut rhat = top % v_top;
            if qhat > u32::MAX as u64 {
                qhat = u32::MAX as u64;
                rhat = top - qhat * v_top;
            }
            // check
            while rhat <= u32::MAX as u64
                && qhat * v_next > ((rhat << DIGIT_BITS) | u.digits.digit_at(j + n - 2) as u64)
            {
                qhat -= 1;
                rhat += v_top;
            }

            // D4 multiply and subtract
            let mut product = v.clone();
            product.mul_digit(qhat as u32);
            u.combine(&product, j, true);

            // D6 add back
            while u.is_negative() {
                trace!("algorithm D: add back at digit {}", j);
                u.combine(&v, j, false);
                qhat -= 1;
            }

            // D5
            q.digits.set_digit(j, qhat as u32);
        }

        // D8 unnormalize the remainder
        let r = u.div_digit(factor);
        debug_assert_eq!(r, 0);
        q.digits.normalize();
        (q, u)
    }
}
