//! ALU logical operations.
//!
//! Implements bitwise AND, OR, XOR and NOT on 4-bit operands. None of these
//! can overflow, so carry is always clear. NOT complements A and masks the
//! result back to 4 bits; B is ignored.

use crate::common::Nibble;

/// Bitwise `a & b`.
#[inline(always)]
pub const fn and(a: Nibble, b: Nibble) -> (Nibble, bool) {
    (Nibble::truncate(a.val() & b.val()), false)
}

/// Bitwise `a | b`.
#[inline(always)]
pub const fn or(a: Nibble, b: Nibble) -> (Nibble, bool) {
    (Nibble::truncate(a.val() | b.val()), false)
}

/// Bitwise `a ^ b`.
#[inline(always)]
pub const fn xor(a: Nibble, b: Nibble) -> (Nibble, bool) {
    (Nibble::truncate(a.val() ^ b.val()), false)
}

/// Bitwise complement of `a`, masked to 4 bits.
#[inline(always)]
pub const fn not(a: Nibble) -> (Nibble, bool) {
    (Nibble::truncate(!a.val()), false)
}
