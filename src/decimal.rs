//! Decimal text conversion.
//!
//! Parsing accepts an optional leading `-` followed by ASCII digits and
//! accumulates nine digits per step. Formatting peels off nine-digit groups by
//! repeated division by `10^9`.

use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;

use crate::big_int::{BigInt, ZERO};
use crate::constants::*;
use crate::errors::BigIntError;

// 实现解析
impl BigInt {
    /// Parses decimal text. The empty string parses as zero.
    pub fn parse(text: &str) -> Result<BigInt, BigIntError> {
        if text.is_empty() {
            return Ok(ZERO);
        }

        let (negative, cursor) = match text.strip_prefix('-') {
            Some(_) => (true, 1),
            None => (false, 0),
        };
        let body = &text[cursor..];
        if body.is_empty() {
            debug!("rejected numeral {:?}: no digits after the sign", text);
            return Err(BigIntError::MalformedNumeral { position: cursor, found: None });
        }
        if let Some((i, c)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            debug!("rejected numeral {:?}: {:?} at byte {}", text, c, cursor + i);
            return Err(BigIntError::MalformedNumeral { position: cursor + i, found: Some(c) });
        }

        let mut value = ZERO;
        for group in body.as_bytes().chunks(DECIMAL_CHUNK) {
            let group_val = group
                .iter()
                .fold(0_u32, |acc, &b| acc * 10 + u32::from(b - b'0'));
            value.mul_digit(POW10[group.len()]);
            value.combine(&BigInt::from(group_val), 0, false);
        }

        if negative {
            value.negate();
        }
        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        BigInt::parse(val)
    }
}

// 实现打印
impl BigInt {
    /// Decimal digits of `|self|`, without sign.
    fn magnitude_to_string(&self) -> String {
        let mut magnitude = self.abs();
        let mut groups: Vec<u32> = Vec::new();
        while !magnitude.is_zero() {
            groups.push(magnitude.div_digit(DECIMAL_BASE));
        }

        let Some((first, rest)) = groups.split_last() else {
            return String::from("0");
        };
        let mut result = String::with_capacity(groups.len() * DECIMAL_CHUNK);
        result.push_str(&first.to_string());
        // remaining groups are padded with leading zeros
        for group in rest.iter().rev() {
            result.push_str(&format!("{:0width$}", group, width = DECIMAL_CHUNK));
        }
        result
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_string())
    }
}
