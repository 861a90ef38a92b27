/// Number of digits a value can hold before it moves to a shared heap buffer.
pub const INLINE_DIGITS: usize = 2;

pub const DIGIT_BITS: u32 = u32::BITS;

/// Sign-extension digit of a negative value.
pub const NEG_SIGN: u32 = u32::MAX;

/// Sign-extension digit of a non-negative value.
pub const POS_SIGN: u32 = 0;

/// Largest power of ten that fits in one digit is `10^DECIMAL_CHUNK`.
pub const DECIMAL_CHUNK: usize = 9;

pub const DECIMAL_BASE: u32 = 1_000_000_000;

pub const POW10: [u32; DECIMAL_CHUNK + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];
