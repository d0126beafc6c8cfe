//! Directed-vector testbench.
//!
//! The testbench owns a device under test and applies vectors to it exactly as
//! a pin-level harness would: pack the operands onto `ui_in`, the opcode onto
//! `uio_in`, sample `uo_out`, and compare fields. For every vector it checks:
//! 1. **Result:** `uo_out[3:0]` against the expected result.
//! 2. **Carry:** `uo_out[4]` against the expected carry.
//! 3. **Zero:** `uo_out[5]` against the observed result being zero.
//! 4. **Spare:** `uo_out[7:6]` are low.

use std::fmt;

use tracing::{debug, info, warn};

use crate::common::error::VectorError;
use crate::common::Nibble;
use crate::config::{Config, InputPolicy};
use crate::isa::Opcode;
use crate::sim::vectors::TestVector;
use crate::soc::{Dut, PinInputs, PinOutputs};
use crate::stats::RunStats;

/// An output signal group on `uo_out`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// `uo_out[3:0]`.
    Result,
    /// `uo_out[4]`.
    Carry,
    /// `uo_out[5]`.
    Zero,
    /// `uo_out[7:6]`.
    Spare,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Result => "result",
            Self::Carry => "carry",
            Self::Zero => "zero",
            Self::Spare => "spare",
        };
        f.write_str(name)
    }
}

/// One signal that disagreed with its expectation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mismatch {
    /// The signal that differed.
    pub signal: Signal,
    /// Expected value.
    pub expected: u8,
    /// Observed value.
    pub actual: u8,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.signal, self.expected, self.actual
        )
    }
}

/// The result of applying one vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorOutcome {
    /// Position of the vector in the applied list.
    pub index: usize,
    /// The vector applied.
    pub vector: TestVector,
    /// What the device drove.
    pub observed: PinOutputs,
    /// Every disagreement found (empty on pass).
    pub mismatches: Vec<Mismatch>,
}

impl VectorOutcome {
    /// Returns `true` if no mismatch was found.
    pub const fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Outcome of a testbench run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    /// Name of the device checked.
    pub dut: String,
    /// One outcome per vector, in order.
    pub outcomes: Vec<VectorOutcome>,
    /// Counters for the run.
    pub stats: RunStats,
}

impl CheckReport {
    /// Returns `true` if every vector passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(VectorOutcome::passed)
    }

    /// Iterates over the outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &VectorOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Compares observed outputs with the expectation of `vector`.
pub fn compare(vector: &TestVector, observed: &PinOutputs) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    if observed.result != vector.result {
        mismatches.push(Mismatch {
            signal: Signal::Result,
            expected: vector.result,
            actual: observed.result,
        });
    }
    if observed.carry as u8 != vector.carry {
        mismatches.push(Mismatch {
            signal: Signal::Carry,
            expected: vector.carry,
            actual: observed.carry as u8,
        });
    }
    if !observed.zero_consistent() {
        mismatches.push(Mismatch {
            signal: Signal::Zero,
            expected: (observed.result == 0) as u8,
            actual: observed.zero as u8,
        });
    }
    if observed.spare != 0 {
        mismatches.push(Mismatch {
            signal: Signal::Spare,
            expected: 0,
            actual: observed.spare,
        });
    }
    mismatches
}

/// Pin-level testbench around a device under test.
#[derive(Debug)]
pub struct Testbench<D: Dut> {
    dut: D,
    policy: InputPolicy,
    trace: bool,
}

impl<D: Dut> Testbench<D> {
    /// Wraps `dut`, taking the input policy and tracing flag from `config`.
    pub const fn new(dut: D, config: &Config) -> Self {
        Self {
            dut,
            policy: config.input.policy,
            trace: config.general.trace_evaluations,
        }
    }

    /// The device under test.
    pub const fn dut(&self) -> &D {
        &self.dut
    }

    /// Releases the device under test.
    pub fn into_inner(self) -> D {
        self.dut
    }

    /// Drives one stimulus and samples the outputs.
    pub fn apply(&mut self, a: Nibble, b: Nibble, op: Opcode) -> PinOutputs {
        let inputs = PinInputs::pack(a, b, op);
        let observed = PinOutputs::decode(self.dut.drive(inputs));
        if self.trace {
            info!(
                dut = self.dut.name(),
                %a, %b, %op,
                ui_in = inputs.ui_in,
                uio_in = inputs.uio_in,
                %observed,
                "eval"
            );
        }
        observed
    }

    /// Applies `vectors` in order and checks every output.
    ///
    /// All vectors are validated against the input policy before any is
    /// applied, so an invalid list never produces a partial run.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Invalid`] for the first vector whose inputs the
    /// policy rejects.
    pub fn run(&mut self, vectors: &[TestVector]) -> Result<CheckReport, VectorError> {
        let inputs = vectors
            .iter()
            .enumerate()
            .map(|(index, v)| {
                v.inputs(self.policy).map_err(|source| VectorError::Invalid {
                    index,
                    description: v.description.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut stats = RunStats::default();
        let mut outcomes = Vec::with_capacity(vectors.len());
        for (index, (vector, (a, b, op))) in vectors.iter().zip(inputs).enumerate() {
            let observed = self.apply(a, b, op);
            let mismatches = compare(vector, &observed);
            let passed = mismatches.is_empty();
            stats.record(op, &observed, passed);
            if passed {
                debug!(index, vector = %vector.description, %observed, "pass");
            } else {
                for m in &mismatches {
                    warn!(index, vector = %vector.description, mismatch = %m, "FAIL");
                }
            }
            outcomes.push(VectorOutcome {
                index,
                vector: vector.clone(),
                observed,
                mismatches,
            });
        }

        Ok(CheckReport {
            dut: self.dut.name().to_string(),
            outcomes,
            stats,
        })
    }
}
