//! ALU arithmetic operations.
//!
//! Implements 4-bit addition and subtraction. Both are computed in a wider
//! integer and explicitly masked back to 4 bits; the bit that falls off the
//! top is reported as carry (ADD) or borrow (SUB).

use crate::common::constants::NIBBLE_MASK;
use crate::common::Nibble;

/// Adds `a + b` modulo 16.
///
/// # Returns
///
/// `(sum mod 16, carry)`, where carry is set if the true sum exceeds 15.
#[inline(always)]
pub const fn add(a: Nibble, b: Nibble) -> (Nibble, bool) {
    let sum = a.val() as u16 + b.val() as u16;
    (Nibble::wrapping_from(sum), sum > NIBBLE_MASK as u16)
}

/// Subtracts `a - b` modulo 16.
///
/// # Returns
///
/// `(difference mod 16, borrow)`, where borrow is set if `a < b`.
#[inline(always)]
pub const fn sub(a: Nibble, b: Nibble) -> (Nibble, bool) {
    // Bias by 16 so the intermediate never goes negative.
    let diff = (a.val() as u16 + 16) - b.val() as u16;
    (Nibble::wrapping_from(diff), a.val() < b.val())
}
