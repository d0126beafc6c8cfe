//! ALU comparison operations.
//!
//! EQ reports its outcome on the result bus (1 or 0) and drives the same bit
//! onto carry, so a consumer watching only the flags still sees it.

use crate::common::Nibble;

/// Compares `a == b`.
///
/// # Returns
///
/// `(1, true)` if equal, `(0, false)` otherwise.
#[inline(always)]
pub const fn eq(a: Nibble, b: Nibble) -> (Nibble, bool) {
    let equal = a.val() == b.val();
    (Nibble::truncate(equal as u8), equal)
}
