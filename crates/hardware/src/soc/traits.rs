//! Device-under-test trait.
//!
//! This module defines the `Dut` trait implemented by anything a testbench can
//! drive at pin level. It provides:
//! 1. **Identification:** `name` for log and report output.
//! 2. **Stimulus:** `drive` applies input ports, settles the logic, and returns `uo_out`.
//!
//! The testbench and fuzzer are generic over `Dut`, so they can check the
//! built-in model, an alternative implementation, or a mock.

use super::pins::PinInputs;

/// A device driven through the `ui_in`/`uio_in` ports and sampled on `uo_out`.
pub trait Dut {
    /// Returns a short name for this device (e.g., `"tt_um_nanocalc"`).
    fn name(&self) -> &'static str;

    /// Applies `inputs`, lets combinational logic settle, and returns `uo_out`.
    fn drive(&mut self, inputs: PinInputs) -> u8;
}
