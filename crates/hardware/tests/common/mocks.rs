//! Devices under test used to exercise the testbench and fuzzer.

use mockall::mock;
use nanocalc_core::soc::{Dut, NanoCalcTop, PinInputs};

mock! {
    /// `mockall` device: every call must be set up with an expectation.
    pub Device {}

    impl Dut for Device {
        fn name(&self) -> &'static str;
        fn drive(&mut self, inputs: PinInputs) -> u8;
    }
}

/// Fault injected on top of the correct model's `uo_out`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Carry (bit 4) stuck at 0.
    CarryStuckLow,
    /// Zero (bit 5) inverted.
    ZeroInverted,
    /// Bit 6 driven high.
    SpareDriven,
    /// Result bit 0 flipped, only for the given opcode.
    ResultBit0Flipped(u8),
}

/// The `NanoCalc` top level with a single injected fault.
#[derive(Debug)]
pub struct FaultyTop {
    fault: Fault,
    /// Number of `drive` calls received.
    pub drives: u64,
}

impl FaultyTop {
    /// Creates a device with `fault` injected and no drives recorded.
    pub fn new(fault: Fault) -> Self {
        Self { fault, drives: 0 }
    }
}

impl Dut for FaultyTop {
    fn name(&self) -> &'static str {
        "faulty_nanocalc"
    }

    fn drive(&mut self, inputs: PinInputs) -> u8 {
        self.drives += 1;
        let good = NanoCalcTop::new().drive(inputs);
        match self.fault {
            Fault::CarryStuckLow => good & !0x10,
            Fault::ZeroInverted => good ^ 0x20,
            Fault::SpareDriven => good | 0x40,
            Fault::ResultBit0Flipped(op) if inputs.uio_in & 0x7 == op => good ^ 0x01,
            Fault::ResultBit0Flipped(_) => good,
        }
    }
}
