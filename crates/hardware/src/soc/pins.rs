//! Tiny Tapeout port mapping.
//!
//! Bit packing at the chip boundary:
//!
//! | Port          | Bits | Signal           |
//! |---------------|------|------------------|
//! | `ui_in`       | 3:0  | operand A        |
//! | `ui_in`       | 7:4  | operand B        |
//! | `uio_in`      | 2:0  | opcode           |
//! | `uio_in`      | 7:3  | unused           |
//! | `uo_out`      | 3:0  | result           |
//! | `uo_out`      | 4    | carry            |
//! | `uo_out`      | 5    | zero             |
//! | `uo_out`      | 7:6  | tied low         |

use std::fmt;

use crate::common::constants::{
    NIBBLE_MASK, OPCODE_MASK, UI_B_SHIFT, UO_CARRY_BIT, UO_SPARE_MASK, UO_ZERO_BIT,
};
use crate::common::Nibble;
use crate::isa::Opcode;

/// Values driven onto the input ports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PinInputs {
    /// Dedicated inputs: A in bits 3:0, B in bits 7:4.
    pub ui_in: u8,
    /// Bidirectional pins used as inputs: opcode in bits 2:0.
    pub uio_in: u8,
}

impl PinInputs {
    /// Packs typed ALU inputs onto the ports.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanocalc_core::soc::PinInputs;
    /// use nanocalc_core::{Nibble, Opcode};
    ///
    /// let pins = PinInputs::pack(Nibble::truncate(5), Nibble::truncate(3), Opcode::Add);
    /// assert_eq!(pins.ui_in, 0b0011_0101);
    /// assert_eq!(pins.uio_in, 0b000);
    /// ```
    pub const fn pack(a: Nibble, b: Nibble, op: Opcode) -> Self {
        Self {
            ui_in: b.val() << UI_B_SHIFT | a.val(),
            uio_in: op.bits(),
        }
    }

    /// Operand A as seen by the design (`ui_in[3:0]`).
    pub const fn a(&self) -> Nibble {
        Nibble::truncate(self.ui_in)
    }

    /// Operand B as seen by the design (`ui_in[7:4]`).
    pub const fn b(&self) -> Nibble {
        Nibble::truncate(self.ui_in >> UI_B_SHIFT)
    }

    /// Opcode as seen by the design (`uio_in[2:0]`).
    pub const fn opcode(&self) -> Opcode {
        Opcode::from_bits(self.uio_in & OPCODE_MASK)
    }
}

/// Fields sampled from `uo_out`, without any consistency assumed.
///
/// Unlike [`AluOutput`](crate::alu::AluOutput), these are raw observations: a
/// faulty device may report a zero flag that disagrees with its result, or
/// drive the spare bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PinOutputs {
    /// `uo_out[3:0]`.
    pub result: u8,
    /// `uo_out[4]`.
    pub carry: bool,
    /// `uo_out[5]`.
    pub zero: bool,
    /// `uo_out[7:6]`, in place (expected to be zero).
    pub spare: u8,
}

impl PinOutputs {
    /// Splits a sampled `uo_out` byte into its fields.
    pub const fn decode(uo_out: u8) -> Self {
        Self {
            result: uo_out & NIBBLE_MASK,
            carry: (uo_out >> UO_CARRY_BIT) & 1 == 1,
            zero: (uo_out >> UO_ZERO_BIT) & 1 == 1,
            spare: uo_out & UO_SPARE_MASK,
        }
    }

    /// Returns `true` if the zero flag agrees with the result.
    pub const fn zero_consistent(&self) -> bool {
        self.zero == (self.result == 0)
    }
}

impl fmt::Display for PinOutputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "result={} carry={} zero={}",
            self.result, self.carry as u8, self.zero as u8
        )
    }
}
