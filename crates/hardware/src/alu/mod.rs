//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the `NanoCalc` 4-bit combinational ALU. Given two
//! 4-bit operands and a 3-bit opcode it produces a 4-bit result, a carry flag
//! and a zero flag, with no internal state.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl
//! - [`compare`]:    Eq
//!
//! Every submodule returns `(result, carry)`; the zero flag is derived once,
//! here, from the wrapped result.

/// Modular addition and subtraction with carry/borrow out.
pub mod arithmetic;

/// Equality comparison.
pub mod compare;

/// Bitwise logical operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use std::fmt;

use crate::common::constants::{UO_CARRY_BIT, UO_ZERO_BIT};
use crate::common::error::{AluError, Operand};
use crate::common::Nibble;
use crate::config::InputPolicy;
use crate::isa::Opcode;

/// Outputs of one ALU evaluation.
///
/// The zero flag is computed from the result at construction and cannot be
/// set independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AluOutput {
    result: Nibble,
    carry: bool,
    zero: bool,
}

impl AluOutput {
    /// Builds an output from a result and carry, deriving the zero flag.
    #[inline(always)]
    pub const fn new(result: Nibble, carry: bool) -> Self {
        Self {
            result,
            carry,
            zero: result.is_zero(),
        }
    }

    /// The 4-bit result.
    #[inline(always)]
    pub const fn result(&self) -> Nibble {
        self.result
    }

    /// The carry flag.
    #[inline(always)]
    pub const fn carry(&self) -> bool {
        self.carry
    }

    /// The zero flag (`result == 0`).
    #[inline(always)]
    pub const fn zero(&self) -> bool {
        self.zero
    }

    /// Returns `(result, carry, zero)` as integers, the notation used by
    /// verification tables.
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.result.val(), self.carry as u8, self.zero as u8)
    }

    /// Packs the outputs into a `uo_out` byte: result in bits 3:0, carry in
    /// bit 4, zero in bit 5, bits 7:6 low.
    pub const fn to_uo_out(&self) -> u8 {
        self.result.val() | (self.carry as u8) << UO_CARRY_BIT | (self.zero as u8) << UO_ZERO_BIT
    }
}

impl fmt::Display for AluOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "result={} ({:04b}) carry={} zero={}",
            self.result, self.result, self.carry as u8, self.zero as u8
        )
    }
}

/// The `NanoCalc` ALU.
///
/// A zero-sized type: the unit is purely combinational, so every method is an
/// associated function and concurrent callers need no coordination.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Evaluates one ALU operation.
    ///
    /// Dispatches to the submodule for the operation's category and derives
    /// the zero flag from the wrapped result.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation selected on the opcode bus.
    /// * `a`  - First operand.
    /// * `b`  - Second operand (ignored by `NOT` and `SHL`).
    ///
    /// # Examples
    ///
    /// ```
    /// use nanocalc_core::alu::Alu;
    /// use nanocalc_core::common::Nibble;
    /// use nanocalc_core::isa::Opcode;
    ///
    /// let n = Nibble::truncate;
    ///
    /// // 15 + 1 wraps to zero; overflow is reported only through carry
    /// assert_eq!(Alu::execute(Opcode::Add, n(15), n(1)).as_tuple(), (0, 1, 1));
    ///
    /// // 3 - 5 borrows
    /// assert_eq!(Alu::execute(Opcode::Sub, n(3), n(5)).as_tuple(), (14, 1, 0));
    ///
    /// // 1001 << 1 = 0010, MSB shifted into carry
    /// assert_eq!(Alu::execute(Opcode::Shl, n(9), n(0)).as_tuple(), (2, 1, 0));
    ///
    /// // Equality mirrors its outcome into carry
    /// assert_eq!(Alu::execute(Opcode::Eq, n(5), n(5)).as_tuple(), (1, 1, 0));
    /// ```
    pub const fn execute(op: Opcode, a: Nibble, b: Nibble) -> AluOutput {
        let (result, carry) = match op {
            Opcode::Add => arithmetic::add(a, b),
            Opcode::Sub => arithmetic::sub(a, b),
            Opcode::And => logic::and(a, b),
            Opcode::Or => logic::or(a, b),
            Opcode::Xor => logic::xor(a, b),
            Opcode::Not => logic::not(a),
            Opcode::Shl => shifts::shl(a),
            Opcode::Eq => compare::eq(a, b),
        };
        AluOutput::new(result, carry)
    }
}

/// Evaluates the ALU on typed inputs. Total: never fails.
///
/// # Examples
///
/// ```
/// use nanocalc_core::{evaluate, Nibble, Opcode};
///
/// let out = evaluate(Nibble::truncate(12), Nibble::truncate(10), Opcode::And);
/// assert_eq!(out.result().val(), 8);
/// assert!(!out.carry());
/// assert!(!out.zero());
/// ```
#[inline]
pub const fn evaluate(a: Nibble, b: Nibble, op: Opcode) -> AluOutput {
    Alu::execute(op, a, b)
}

/// Evaluates the ALU on raw integers, applying `policy` to out-of-range values.
///
/// # Errors
///
/// Under [`InputPolicy::Reject`], returns [`AluError`] if `a` or `b` exceeds
/// 15 or `op` exceeds 7. Under [`InputPolicy::Mask`] this never fails.
///
/// # Examples
///
/// ```
/// use nanocalc_core::{evaluate_raw, AluError, InputPolicy};
///
/// assert_eq!(evaluate_raw(5, 3, 0, InputPolicy::Reject).unwrap().as_tuple(), (8, 0, 0));
/// assert_eq!(evaluate_raw(5, 3, 8, InputPolicy::Reject), Err(AluError::OpcodeOutOfRange(8)));
///
/// // 0x15 masks to 5, opcode 8 masks to ADD
/// assert_eq!(evaluate_raw(0x15, 3, 8, InputPolicy::Mask).unwrap().as_tuple(), (8, 0, 0));
/// ```
pub fn evaluate_raw(a: u8, b: u8, op: u8, policy: InputPolicy) -> Result<AluOutput, AluError> {
    let a = policy.operand(a, Operand::A)?;
    let b = policy.operand(b, Operand::B)?;
    let op = policy.opcode(op)?;
    Ok(evaluate(a, b, op))
}
