//! Errors reported by fallible [`BigInt`](crate::BigInt) operations.

use thiserror::Error as ThisError;

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BigIntError {
    /// Decimal text contained something other than an optional leading `-`
    /// followed by ASCII digits. `found` is `None` when the text ended where a
    /// digit was expected.
    #[error("malformed numeral at byte {position}: {}", describe(.found))]
    MalformedNumeral { position: usize, found: Option<char> },

    /// The divisor of `/` or `%` was zero.
    #[error("attempt to divide by zero")]
    DivisionByZero,

    /// The value does not fit in the requested primitive integer type.
    #[error("value out of range for the target integer type")]
    OutOfRange,
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("unexpected character {c:?}"),
        None => String::from("expected a digit"),
    }
}
