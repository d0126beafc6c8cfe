//! `NanoCalc` opcodes.
//!
//! Defines the eight operations selectable on the 3-bit opcode bus:
//!
//! | Code | Mnemonic | Operation                       |
//! |------|----------|---------------------------------|
//! | 0    | `ADD`    | A + B, carry out                |
//! | 1    | `SUB`    | A − B, borrow out               |
//! | 2    | `AND`    | A & B                           |
//! | 3    | `OR`     | A \| B                          |
//! | 4    | `XOR`    | A ^ B                           |
//! | 5    | `NOT`    | !A (B ignored)                  |
//! | 6    | `SHL`    | A << 1, shifted-out bit to carry|
//! | 7    | `EQ`     | A == B, result mirrored to carry|

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{OPCODE_COUNT, OPCODE_MASK};
use crate::common::error::AluError;

/// ALU operation selected by the opcode bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Addition modulo 16.
    #[default]
    Add = 0,

    /// Subtraction modulo 16.
    Sub = 1,

    /// Bitwise AND.
    And = 2,

    /// Bitwise OR.
    Or = 3,

    /// Bitwise XOR.
    Xor = 4,

    /// Bitwise complement of A.
    Not = 5,

    /// Logical shift left of A by one.
    Shl = 6,

    /// Equality comparison.
    Eq = 7,
}

impl Opcode {
    /// All opcodes in encoding order.
    pub const ALL: [Self; OPCODE_COUNT] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Shl,
        Self::Eq,
    ];

    /// Decodes the low 3 bits of `bits`, ignoring the rest (bus behaviour).
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & OPCODE_MASK) as usize]
    }

    /// Returns the 3-bit encoding.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Eq => "EQ",
        }
    }

    /// Returns `true` for operations that ignore operand B.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not | Self::Shl)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = AluError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > OPCODE_MASK {
            Err(AluError::OpcodeOutOfRange(value))
        } else {
            Ok(Self::from_bits(value))
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.bits()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = AluError;

    /// Parses a mnemonic (case-insensitive, with common aliases) or a decimal code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::try_from(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            "xor" => Ok(Self::Xor),
            "not" => Ok(Self::Not),
            "shl" | "shift" | "sll" => Ok(Self::Shl),
            "eq" | "equal" => Ok(Self::Eq),
            _ => Err(AluError::UnknownMnemonic(s.to_string())),
        }
    }
}
