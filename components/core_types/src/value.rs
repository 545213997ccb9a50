//! Machine word representation.
//!
//! Every memory cell, operand and I/O value of the machine is an
//! arbitrary-precision signed integer. Programs deliberately produce
//! products that overflow 64 bits, so no fixed-width type is used.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

/// A single IntCode memory cell or I/O value.
pub type Word = BigInt;

/// Build a [`Word`] from a machine integer.
///
/// # Examples
///
/// ```
/// use core_types::word;
///
/// assert_eq!(word(-7).to_string(), "-7");
/// ```
pub fn word(value: i64) -> Word {
    BigInt::from(value)
}

/// Whether a word counts as "true" for conditional jumps (any non-zero value).
pub fn is_truthy(value: &Word) -> bool {
    !value.is_zero()
}

/// Encode a comparison result as `1` or `0`.
pub fn from_bool(value: bool) -> Word {
    if value {
        BigInt::from(1)
    } else {
        BigInt::zero()
    }
}

/// Convert a word to a memory index.
///
/// Returns `None` for negative words and for words too large to index
/// host memory.
pub fn to_index(value: &Word) -> Option<usize> {
    value.to_usize()
}
