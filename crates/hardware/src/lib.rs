//! `NanoCalc` ALU model library.
//!
//! This crate implements a bit-exact model of the `NanoCalc` 4-bit ALU and the
//! environment used to verify it:
//! 1. **Core:** The combinational ALU (8 operations, carry and zero flags).
//! 2. **ISA:** The opcode enumeration and mnemonic parsing.
//! 3. **Chip:** The Tiny Tapeout pin-level wrapper and device-under-test trait.
//! 4. **Verification:** Directed vectors, a testbench, and a seeded fuzzer.
//! 5. **Support:** Configuration, errors, and run statistics.
//!
//! # Examples
//!
//! ```
//! use nanocalc_core::{evaluate, Nibble, Opcode};
//!
//! let out = evaluate(Nibble::truncate(15), Nibble::truncate(1), Opcode::Add);
//! assert_eq!(out.as_tuple(), (0, 1, 1));
//! ```

/// The combinational ALU.
pub mod alu;
/// Common types and constants (nibble, errors, widths).
pub mod common;
/// Model and harness configuration.
pub mod config;
/// Opcode definitions.
pub mod isa;
/// Verification environment (vectors, testbench, fuzzer).
pub mod sim;
/// Chip-level wrapper (pins, top level, DUT trait).
pub mod soc;
/// Verification run statistics.
pub mod stats;

/// The ALU unit, its output type, and the typed and raw evaluation entry points.
pub use crate::alu::{Alu, AluOutput, evaluate, evaluate_raw};
/// Input error and the 4-bit value type.
pub use crate::common::{AluError, Nibble};
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::{Config, InputPolicy};
/// Operation selector.
pub use crate::isa::Opcode;
