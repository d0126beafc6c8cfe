//! Common types and constants used throughout the `NanoCalc` model.
//!
//! This module provides the building blocks shared by the ALU, the pin-level
//! wrapper, and the testbench. It includes:
//! 1. **Constants:** Datapath widths, masks, and pin field positions.
//! 2. **Nibble:** The strong 4-bit operand/result type.
//! 3. **Error Handling:** Input, vector-file, and configuration errors.

/// Datapath and pin constants.
pub mod constants;

/// Error types.
pub mod error;

/// The 4-bit `Nibble` type.
pub mod nibble;

pub use constants::{NIBBLE_MASK, OPCODE_MASK};
pub use error::{AluError, ConfigError, Operand, VectorError};
pub use nibble::Nibble;
