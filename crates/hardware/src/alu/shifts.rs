//! ALU shift operations.
//!
//! Implements a one-place logical shift left of A. The result keeps the low
//! 4 bits of `A << 1`; bit 3 of A, which is shifted out, becomes the carry.
//! B is ignored.

use crate::common::Nibble;

/// Shifts `a` left by one.
///
/// # Returns
///
/// `((a << 1) mod 16, a[3])`.
#[inline(always)]
pub const fn shl(a: Nibble) -> (Nibble, bool) {
    (Nibble::truncate(a.val() << 1), a.msb())
}
