//! Seeded random testing.
//!
//! The fuzzer draws operands and opcodes uniformly from their valid ranges,
//! drives them into a device under test, and checks every sample against the
//! invariants of the design and against the reference [`evaluate`]:
//! 1. **Spare bits:** `uo_out[7:6]` stay low, so nothing wider than the 4-bit
//!    result or a flag wider than one bit leaks onto the port.
//! 2. **Zero consistency:** the zero flag equals `result == 0`.
//! 3. **Reference agreement:** result and carry equal the reference model.
//!
//! Runs are reproducible: the same seed produces the same stimulus sequence.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::alu::{AluOutput, evaluate};
use crate::common::constants::{NIBBLE_MAX, OPCODE_MASK};
use crate::common::Nibble;
use crate::config::{Config, FuzzConfig};
use crate::isa::Opcode;
use crate::soc::{Dut, PinInputs, PinOutputs};
use crate::stats::RunStats;

/// A property a fuzz sample broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// `uo_out[7:6]` were driven high.
    SpareBitsDriven,
    /// The zero flag disagreed with the observed result.
    ZeroInconsistent,
    /// The result differed from the reference model.
    ResultMismatch,
    /// The carry differed from the reference model.
    CarryMismatch,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::SpareBitsDriven => "uo_out[7:6] driven",
            Self::ZeroInconsistent => "zero flag disagrees with result",
            Self::ResultMismatch => "result differs from reference",
            Self::CarryMismatch => "carry differs from reference",
        };
        f.write_str(text)
    }
}

/// A fuzz sample that broke at least one property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Zero-based iteration number.
    pub iteration: u64,
    /// Stimulus applied.
    pub inputs: PinInputs,
    /// What the device drove.
    pub observed: PinOutputs,
    /// What the reference model computes.
    pub expected: AluOutput,
    /// Every property broken.
    pub kinds: Vec<ViolationKind>,
}

/// Outcome of a fuzz run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuzzReport {
    /// Seed the stimulus was drawn from.
    pub seed: u64,
    /// Samples that broke a property.
    pub violations: Vec<Violation>,
    /// Counters for the run.
    pub stats: RunStats,
}

impl FuzzReport {
    /// Returns `true` if no sample broke a property.
    pub const fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks one observed sample against the design's invariants and the reference.
pub fn check_sample(observed: &PinOutputs, expected: &AluOutput) -> Vec<ViolationKind> {
    let mut kinds = Vec::new();
    if observed.spare != 0 {
        kinds.push(ViolationKind::SpareBitsDriven);
    }
    if !observed.zero_consistent() {
        kinds.push(ViolationKind::ZeroInconsistent);
    }
    if observed.result != expected.result().val() {
        kinds.push(ViolationKind::ResultMismatch);
    }
    if observed.carry != expected.carry() {
        kinds.push(ViolationKind::CarryMismatch);
    }
    kinds
}

/// Seeded random stimulus generator and checker.
#[derive(Debug, Clone)]
pub struct Fuzzer {
    config: FuzzConfig,
    trace: bool,
}

impl Fuzzer {
    /// Creates a fuzzer from the `fuzz` and `general` sections of `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.fuzz.clone(),
            trace: config.general.trace_evaluations,
        }
    }

    /// The fuzz parameters in use.
    pub const fn config(&self) -> &FuzzConfig {
        &self.config
    }

    /// Runs `iterations` random samples against `dut`.
    pub fn run<D: Dut>(&self, dut: &mut D) -> FuzzReport {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut stats = RunStats::default();
        let mut violations = Vec::new();

        for iteration in 0..self.config.iterations {
            let a = Nibble::truncate(rng.gen_range(0..=NIBBLE_MAX));
            let b = Nibble::truncate(rng.gen_range(0..=NIBBLE_MAX));
            let op = Opcode::from_bits(rng.gen_range(0..=OPCODE_MASK));

            let inputs = PinInputs::pack(a, b, op);
            let observed = PinOutputs::decode(dut.drive(inputs));
            let expected = evaluate(a, b, op);
            let kinds = check_sample(&observed, &expected);

            stats.record(op, &observed, kinds.is_empty());

            if self.trace {
                info!(dut = dut.name(), iteration, %a, %b, %op, %observed, "eval");
            } else if self.config.log_every != 0 && iteration % self.config.log_every == 0 {
                debug!(iteration, %a, %b, %op, %observed, "fuzz sample");
            }

            if !kinds.is_empty() {
                for kind in &kinds {
                    warn!(iteration, %a, %b, %op, %observed, %expected, violation = %kind, "FAIL");
                }
                violations.push(Violation {
                    iteration,
                    inputs,
                    observed,
                    expected,
                    kinds,
                });
            }
        }

        info!(
            dut = dut.name(),
            seed = self.config.seed,
            iterations = self.config.iterations,
            violations = violations.len(),
            "fuzz run complete"
        );

        FuzzReport {
            seed: self.config.seed,
            violations,
            stats,
        }
    }
}
