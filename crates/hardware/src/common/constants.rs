//! Datapath Constants.
//!
//! This module defines the widths and bit positions shared by the ALU and its
//! pin-level wrapper. It includes:
//! 1. **Datapath Constants:** Operand and opcode widths and masks.
//! 2. **Pin Constants:** Field positions on the `ui_in`, `uio_in` and `uo_out` ports.

/// Width of an operand and of the result bus, in bits.
pub const DATA_WIDTH: u32 = 4;

/// Mask selecting the low `DATA_WIDTH` bits of a value.
pub const NIBBLE_MASK: u8 = 0xF;

/// Largest value representable on the 4-bit datapath.
pub const NIBBLE_MAX: u8 = NIBBLE_MASK;

/// Bit position of the most significant datapath bit (the bit a left shift drops).
pub const NIBBLE_MSB: u32 = DATA_WIDTH - 1;

/// Width of the opcode selector, in bits.
pub const OPCODE_WIDTH: u32 = 3;

/// Mask selecting the low `OPCODE_WIDTH` bits of a value.
pub const OPCODE_MASK: u8 = 0x7;

/// Number of distinct ALU operations.
pub const OPCODE_COUNT: usize = 1 << OPCODE_WIDTH;

/// Bit position of operand B on `ui_in` (A occupies bits 3:0).
pub const UI_B_SHIFT: u32 = 4;

/// Bit position of the carry flag on `uo_out` (result occupies bits 3:0).
pub const UO_CARRY_BIT: u32 = 4;

/// Bit position of the zero flag on `uo_out`.
pub const UO_ZERO_BIT: u32 = 5;

/// Mask of the `uo_out` bits the design never drives (bits 7:6).
pub const UO_SPARE_MASK: u8 = 0xC0;
