//! Chip-level Components.
//!
//! This module wraps the ALU in the pin interface of a Tiny Tapeout tile, so
//! that it can be driven exactly as a verification harness drives the
//! fabricated design: by writing input ports and sampling output ports.

/// Port packing and unpacking.
pub mod pins;

/// The `NanoCalc` top-level module.
pub mod top;

/// Device-under-test trait.
pub mod traits;

pub use pins::{PinInputs, PinOutputs};
pub use top::NanoCalcTop;
pub use traits::Dut;
