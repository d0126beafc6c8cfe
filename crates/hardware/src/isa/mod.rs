//! Instruction Set Definitions.
//!
//! The `NanoCalc` selector is a single 3-bit field on `uio_in[2:0]`; there is no
//! instruction word, no register specifier and no immediate. This module holds
//! the closed set of operations that field selects.

/// ALU opcode enumeration, encoding, and mnemonic parsing.
pub mod opcode;

pub use opcode::Opcode;
