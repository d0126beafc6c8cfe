//! `NanoCalc` top-level module (`tt_um_nanocalc`).
//!
//! Connects the input ports to the ALU and the ALU outputs to `uo_out`. The
//! design has no registers, so `clk`, `rst_n` and `ena` are not modelled:
//! they cannot influence the outputs.

use super::pins::PinInputs;
use super::traits::Dut;
use crate::alu::{Alu, AluOutput};

/// Module name of the top level, as used in the tile's netlist.
pub const TOP_NAME: &str = "tt_um_nanocalc";

/// Pin-level model of the `NanoCalc` chip.
///
/// Every port field is exactly as wide as its bus, so out-of-range values are
/// impossible here: the unused bits of `uio_in` are ignored, matching the
/// hardware.
#[derive(Clone, Copy, Debug, Default)]
pub struct NanoCalcTop;

impl NanoCalcTop {
    /// Creates the top-level model.
    pub const fn new() -> Self {
        Self
    }

    /// Computes the typed outputs for `inputs`.
    pub const fn evaluate(inputs: PinInputs) -> AluOutput {
        Alu::execute(inputs.opcode(), inputs.a(), inputs.b())
    }
}

impl Dut for NanoCalcTop {
    fn name(&self) -> &'static str {
        TOP_NAME
    }

    fn drive(&mut self, inputs: PinInputs) -> u8 {
        Self::evaluate(inputs).to_uo_out()
    }
}
