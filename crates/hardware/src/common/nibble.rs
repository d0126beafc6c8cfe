//! Four-bit datapath value.
//!
//! `Nibble` is the strong type for operands and results. It provides:
//! 1. **Range Safety:** A `Nibble` always holds a value in `0..=15`.
//! 2. **Input Policies:** Checked (`new`) and hardware-style truncating (`truncate`) construction.
//! 3. **Wrapping Helpers:** Building a nibble from a wider intermediate by masking.

use std::fmt;

use super::constants::{NIBBLE_MASK, NIBBLE_MAX, NIBBLE_MSB};
use super::error::{AluError, Operand};

/// A 4-bit unsigned value in the range `0..=15`.
///
/// Operands A and B and the ALU result are all `Nibble`s. The inner value is
/// private so that no out-of-range value can be constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nibble(u8);

impl Nibble {
    /// The value zero.
    pub const ZERO: Self = Self(0);

    /// The value one.
    pub const ONE: Self = Self(1);

    /// The largest 4-bit value (15).
    pub const MAX: Self = Self(NIBBLE_MAX);

    /// Creates a nibble, rejecting values above 15.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::OperandOutOfRange`] tagged with `operand` when
    /// `value` does not fit in 4 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanocalc_core::common::{Nibble, Operand};
    ///
    /// assert_eq!(Nibble::new(9, Operand::A).map(Nibble::val), Ok(9));
    /// assert!(Nibble::new(16, Operand::B).is_err());
    /// ```
    pub const fn new(value: u8, operand: Operand) -> Result<Self, AluError> {
        if value > NIBBLE_MAX {
            Err(AluError::OperandOutOfRange { operand, value })
        } else {
            Ok(Self(value))
        }
    }

    /// Creates a nibble by keeping only the low 4 bits of `value`.
    ///
    /// This is what a fixed-width bus does with a wider value.
    #[inline(always)]
    pub const fn truncate(value: u8) -> Self {
        Self(value & NIBBLE_MASK)
    }

    /// Wraps a wider intermediate (e.g. a 5-bit sum) to 4 bits.
    #[inline(always)]
    pub(crate) const fn wrapping_from(value: u16) -> Self {
        Self((value & NIBBLE_MASK as u16) as u8)
    }

    /// Returns the raw value.
    #[inline(always)]
    pub const fn val(self) -> u8 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the most significant bit (bit 3).
    #[inline(always)]
    pub const fn msb(self) -> bool {
        (self.0 >> NIBBLE_MSB) & 1 == 1
    }

    /// Iterates over every 4-bit value in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=NIBBLE_MAX).map(Self)
    }
}

impl From<Nibble> for u8 {
    fn from(n: Nibble) -> Self {
        n.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Binary for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
