//! # Digits
//! Little-endian base `2^32` digit storage with two's-complement sign extension.
//!
//! Small values keep their digits inline; anything longer lives in an
//! [`Arc`]-shared buffer that is cloned on the first write after a copy.
//! Positions past the stored length read as the sign digit, so every
//! algorithm can treat a value as an infinitely long digit string.

use std::sync::Arc;

use crate::constants::*;

#[derive(Debug, Clone)]
pub(crate) enum Digits {
    Inline { digits: [u32; INLINE_DIGITS], len: u8 },
    Shared(Arc<Vec<u32>>),
}

// 构造
impl Digits {
    pub(crate) const fn zero() -> Self {
        Digits::Inline { digits: [POS_SIGN; INLINE_DIGITS], len: 1 }
    }

    /// One value digit under an explicit sign digit, always inline.
    pub(crate) fn from_parts(low: u32, sign: u32) -> Self {
        let mut digits = Digits::Inline { digits: [low, sign], len: 2 };
        digits.normalize();
        digits
    }

    /// Builds normalized storage from raw little-endian digits.
    /// An empty vector is read as zero.
    pub(crate) fn from_vec(mut vec: Vec<u32>) -> Self {
        if vec.is_empty() {
            return Digits::zero();
        }
        let sign = sign_of(vec[vec.len() - 1]);
        let keep = vec.iter().rposition(|&d| d != sign).map_or(0, |i| i + 1);
        vec.truncate(keep);
        vec.push(sign);

        if vec.len() <= INLINE_DIGITS {
            let mut digits = [POS_SIGN; INLINE_DIGITS];
            digits[..vec.len()].copy_from_slice(&vec);
            Digits::Inline { digits, len: vec.len() as u8 }
        } else {
            Digits::Shared(Arc::new(vec))
        }
    }
}

#[inline(always)]
fn sign_of(top: u32) -> u32 {
    ((top as i32) >> (DIGIT_BITS - 1)) as u32
}

// 读取
impl Digits {
    #[inline]
    pub(crate) fn as_slice(&self) -> &[u32] {
        match self {
            Digits::Inline { digits, len } => &digits[..*len as usize],
            Digits::Shared(buf) => buf.as_slice(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Digits::Inline { len, .. } => *len as usize,
            Digits::Shared(buf) => buf.len(),
        }
    }

    /// The implicit digit filling every position at or above `len()`.
    #[inline]
    pub(crate) fn sign_digit(&self) -> u32 {
        match self.as_slice().last() {
            Some(&top) => sign_of(top),
            None => POS_SIGN,
        }
    }

    #[inline]
    pub(crate) fn is_negative(&self) -> bool {
        self.sign_digit() == NEG_SIGN
    }

    #[inline]
    pub(crate) fn digit_at(&self, pos: usize) -> u32 {
        match self.as_slice().get(pos) {
            Some(&d) => d,
            None => self.sign_digit(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_shared(&self) -> bool {
        matches!(self, Digits::Shared(_))
    }
}

// 写入
impl Digits {
    /// Copy-on-write gate: after this call no other value observes the buffer.
    pub(crate) fn make_unique(&mut self) {
        if let Digits::Shared(buf) = self {
            Arc::make_mut(buf);
        }
    }

    /// Mutable view of the stored digits. Goes through the copy-on-write gate.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        self.make_unique();
        match self {
            Digits::Inline { digits, len } => &mut digits[..*len as usize],
            Digits::Shared(buf) => Arc::make_mut(buf).as_mut_slice(),
        }
    }

    pub(crate) fn set_digit(&mut self, pos: usize, value: u32) {
        if pos >= self.len() {
            self.resize_to(pos + 1);
        }
        self.as_mut_slice()[pos] = value;
    }

    /// Grows to `n` digits, filling with the current sign extension.
    /// Never shrinks.
    pub(crate) fn resize_to(&mut self, n: usize) {
        if n <= self.len() {
            return;
        }
        let fill = self.sign_digit();
        if n > INLINE_DIGITS {
            self.promote(n);
        }
        match self {
            Digits::Inline { digits, len } => {
                digits[*len as usize..n].fill(fill);
                *len = n as u8;
            }
            Digits::Shared(buf) => Arc::make_mut(buf).resize(n, fill),
        }
    }

    pub(crate) fn push(&mut self, value: u32) {
        let len = self.len();
        if len >= INLINE_DIGITS {
            self.promote(len + 1);
        }
        match self {
            Digits::Inline { digits, len } => {
                digits[*len as usize] = value;
                *len += 1;
            }
            Digits::Shared(buf) => Arc::make_mut(buf).push(value),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<u32> {
        match self {
            Digits::Inline { digits, len } => {
                if *len == 0 {
                    return None;
                }
                *len -= 1;
                Some(digits[*len as usize])
            }
            Digits::Shared(buf) => Arc::make_mut(buf).pop(),
        }
    }

    /// Trims redundant sign digits so exactly one remains on top.
    pub(crate) fn normalize(&mut self) {
        let sign = self.sign_digit();
        let digits = self.as_slice();
        let keep = digits.iter().rposition(|&d| d != sign).map_or(0, |i| i + 1);
        if keep + 1 == digits.len() {
            return;
        }
        if keep + 1 > digits.len() {
            self.push(sign);
            return;
        }
        while self.len() > keep + 1 {
            self.pop();
        }
    }

    /// Moves inline digits into a heap buffer with room for `capacity` digits.
    fn promote(&mut self, capacity: usize) {
        if let Digits::Inline { .. } = self {
            let mut vec = Vec::with_capacity(capacity.max(INLINE_DIGITS + 1));
            vec.extend_from_slice(self.as_slice());
            *self = Digits::Shared(Arc::new(vec));
        }
    }
}
