//! # BigInt
//! Arbitrary-precision signed integers with value semantics. All operations
//! behave as if BigInt were an infinitely wide two's-complement integer.
//! # Example
//! ```
//! use twos_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b = BigInt::from(900000000000_i64);
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&a << 10).to_string(), "10240000000000000");
//! assert_eq!((-&a >> 10).to_string(), "-9765625000");
//! assert_eq!(BigInt::from(1) << 100, "1267650600228229401496703205376".parse::<BigInt>().unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Neg, Not,
};

use crate::constants::*;
use crate::digits::Digits;
use crate::errors::BigIntError;

pub(crate) const ZERO: BigInt = BigInt { digits: Digits::zero() };

pub(crate) const ONE: BigInt = BigInt {
    digits: Digits::Inline { digits: [1, POS_SIGN], len: 2 },
};

#[derive(Clone)]
pub struct BigInt {
    pub(crate) digits: Digits,
}

// 构造
impl BigInt {
    pub const fn zero() -> BigInt {
        ZERO
    }

    pub(crate) fn from_digits(digits: Vec<u32>) -> BigInt {
        BigInt { digits: Digits::from_vec(digits) }
    }

    fn from_i128(val: i128) -> BigInt {
        let sign = if val < 0 { NEG_SIGN } else { POS_SIGN };
        if (-(1_i128 << DIGIT_BITS)..(1_i128 << DIGIT_BITS)).contains(&val) {
            return BigInt { digits: Digits::from_parts(val as u32, sign) };
        }
        let bits = val as u128;
        let mut digits: Vec<u32> = (0..4).map(|i| (bits >> (DIGIT_BITS * i)) as u32).collect();
        digits.push(sign);
        BigInt::from_digits(digits)
    }

    fn from_u128(val: u128) -> BigInt {
        if val <= u32::MAX as u128 {
            return BigInt { digits: Digits::from_parts(val as u32, POS_SIGN) };
        }
        let mut digits: Vec<u32> = (0..4).map(|i| (val >> (DIGIT_BITS * i)) as u32).collect();
        digits.push(POS_SIGN);
        BigInt::from_digits(digits)
    }
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_i128(val as i128)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_u128(val as u128)
        }
    }
    )*
    };
}
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);

impl Default for BigInt {
    fn default() -> Self {
        ZERO
    }
}

// 转换为原生整数
impl TryFrom<&BigInt> for i128 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
        let digits = val.digits.as_slice();
        let sign = val.digits.sign_digit();
        // four value digits plus the sign digit, whose top bit must agree
        let fits = match digits.len() {
            0..=4 => true,
            5 => (digits[3] ^ sign) >> (DIGIT_BITS - 1) == 0,
            _ => false,
        };
        if !fits {
            return Err(BigIntError::OutOfRange);
        }
        let bits = (0..4).fold(0_u128, |acc, i| {
            acc | (val.digits.digit_at(i) as u128) << (DIGIT_BITS as usize * i)
        });
        Ok(bits as i128)
    }
}

impl TryFrom<&BigInt> for u128 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
        if val.is_negative() || val.digits.len() > 5 {
            return Err(BigIntError::OutOfRange);
        }
        Ok((0..4).fold(0_u128, |acc, i| {
            acc | (val.digits.digit_at(i) as u128) << (DIGIT_BITS as usize * i)
        }))
    }
}

macro_rules! impl_big_int_to_primitive {
    ($($t: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            let wide = i128::try_from(val)?;
            <$t>::try_from(wide).map_err(|_| BigIntError::OutOfRange)
        }
    }

    impl TryFrom<BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$t>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_int_to_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<BigInt> for i128 {
    type Error = BigIntError;

    fn try_from(val: BigInt) -> Result<Self, Self::Error> {
        i128::try_from(&val)
    }
}

impl TryFrom<BigInt> for u128 {
    type Error = BigIntError;

    fn try_from(val: BigInt) -> Result<Self, Self::Error> {
        u128::try_from(&val)
    }
}

// 查询
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.digits.as_slice() == [POS_SIGN]
    }

    pub fn is_negative(&self) -> bool {
        self.digits.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Unary plus: a copy of the value.
    pub fn plus(&self) -> BigInt {
        self.clone()
    }
}

// 自增自减
impl BigInt {
    /// Prefix increment.
    pub fn inc(&mut self) -> &mut Self {
        self.combine(&ONE, 0, false);
        self
    }

    /// Prefix decrement.
    pub fn dec(&mut self) -> &mut Self {
        self.combine(&ONE, 0, true);
        self
    }

    /// Postfix increment, returns the value held before the increment.
    pub fn post_inc(&mut self) -> BigInt {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// Postfix decrement, returns the value held before the decrement.
    pub fn post_dec(&mut self) -> BigInt {
        let previous = self.clone();
        self.dec();
        previous
    }
}

// 实现大小比较
impl BigInt {
    fn compare(&self, other: &BigInt) -> Ordering {
        let negative = self.is_negative();
        if negative != other.is_negative() {
            return if negative { Ordering::Less } else { Ordering::Greater };
        }

        let a = self.digits.as_slice();
        let b = other.digits.as_slice();
        match a.len().cmp(&b.len()) {
            Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
            by_len if negative => by_len.reverse(),
            by_len => by_len,
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.as_slice().hash(state);
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

// 实现除法
impl BigInt {
    /// Truncating division and remainder. The quotient rounds toward zero and
    /// the remainder takes the sign of `self`, so `q * rhs + r == self`.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(rhs))
    }

    pub fn try_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn try_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// `self /= rhs`; leaves `self` untouched on error.
    pub fn try_div_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    /// `self %= rhs`; leaves `self` untouched on error.
    pub fn try_rem_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        *self = self.try_rem(rhs)?;
        Ok(())
    }

    fn div_in_place(&mut self, rhs: &BigInt) {
        if let Err(err) = self.try_div_assign(rhs) {
            panic!("{}", err);
        }
    }

    fn rem_in_place(&mut self, rhs: &BigInt) {
        if let Err(err) = self.try_rem_assign(rhs) {
            panic!("{}", err);
        }
    }
}

// 二元运算符
impl BigInt {
    fn add_in_place(&mut self, rhs: &BigInt) {
        self.combine(rhs, 0, false);
    }

    fn sub_in_place(&mut self, rhs: &BigInt) {
        self.combine(rhs, 0, true);
    }

    fn and_in_place(&mut self, rhs: &BigInt) {
        self.bitwise_in_place(rhs, |a, b| a & b);
    }

    fn or_in_place(&mut self, rhs: &BigInt) {
        self.bitwise_in_place(rhs, |a, b| a | b);
    }

    fn xor_in_place(&mut self, rhs: &BigInt) {
        self.bitwise_in_place(rhs, |a, b| a ^ b);
    }
}

macro_rules! impl_binary_op {
    ($($op: ident, $method: ident, $op_assign: ident, $method_assign: ident, $in_place: ident;)*) => {
    $(
    impl $op_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            self.$in_place(rhs);
        }
    }

    impl $op_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            self.$in_place(&rhs);
        }
    }

    impl $op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> Self::Output {
            self.$in_place(rhs);
            self
        }
    }

    impl $op for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: BigInt) -> Self::Output {
            self.$in_place(&rhs);
            self
        }
    }

    impl $op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            let mut result = self.clone();
            result.$in_place(rhs);
            result
        }
    }

    impl $op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            let mut result = self.clone();
            result.$in_place(&rhs);
            result
        }
    }
    )*
    };
}

impl_binary_op! {
    Add, add, AddAssign, add_assign, add_in_place;
    Sub, sub, SubAssign, sub_assign, sub_in_place;
    Mul, mul, MulAssign, mul_assign, mul_in_place;
    Div, div, DivAssign, div_assign, div_in_place;
    Rem, rem, RemAssign, rem_assign, rem_in_place;
    BitAnd, bitand, BitAndAssign, bitand_assign, and_in_place;
    BitOr, bitor, BitOrAssign, bitor_assign, or_in_place;
    BitXor, bitxor, BitXorAssign, bitxor_assign, xor_in_place;
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> Self::Output {
        self.not_in_place();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(ONE, |acc, x| acc * x)
    }
}
