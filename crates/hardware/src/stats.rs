//! Verification run statistics.
//!
//! This module tracks what a testbench or fuzz run exercised. It provides:
//! 1. **Volume:** Total evaluations and pass/fail counts.
//! 2. **Operation mix:** Evaluations per opcode.
//! 3. **Flag activity:** How often carry and zero were observed set.

use std::fmt;

use crate::common::constants::OPCODE_COUNT;
use crate::isa::Opcode;
use crate::soc::PinOutputs;

/// Counters collected over one verification run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Total stimuli applied to the device.
    pub evaluations: u64,
    /// Stimuli whose outputs matched every check.
    pub passed: u64,
    /// Stimuli with at least one mismatch or violation.
    pub failed: u64,
    /// Evaluations per opcode, indexed by encoding.
    pub per_opcode: [u64; OPCODE_COUNT],
    /// Evaluations that drove carry high.
    pub carry_set: u64,
    /// Evaluations that drove zero high.
    pub zero_set: u64,
}

impl RunStats {
    /// Records one evaluation and its verdict.
    pub const fn record(&mut self, op: Opcode, observed: &PinOutputs, passed: bool) {
        self.evaluations += 1;
        self.per_opcode[op.bits() as usize] += 1;
        if observed.carry {
            self.carry_set += 1;
        }
        if observed.zero {
            self.zero_set += 1;
        }
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Number of evaluations that used `op`.
    pub const fn count(&self, op: Opcode) -> u64 {
        self.per_opcode[op.bits() as usize]
    }

    /// Returns `true` if every opcode was exercised at least once.
    pub fn all_opcodes_covered(&self) -> bool {
        self.per_opcode.iter().all(|&n| n > 0)
    }

    /// Adds the counters of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        self.evaluations += other.evaluations;
        self.passed += other.passed;
        self.failed += other.failed;
        self.carry_set += other.carry_set;
        self.zero_set += other.zero_set;
        for (mine, theirs) in self.per_opcode.iter_mut().zip(other.per_opcode) {
            *mine += theirs;
        }
    }

    fn percent(&self, n: u64) -> f64 {
        let total = self.evaluations.max(1);
        n as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "NANOCALC VERIFICATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "evaluations              {}", self.evaluations)?;
        writeln!(
            f,
            "passed                   {} ({:.2}%)",
            self.passed,
            self.percent(self.passed)
        )?;
        writeln!(
            f,
            "failed                   {} ({:.2}%)",
            self.failed,
            self.percent(self.failed)
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "OPERATION MIX")?;
        for op in Opcode::ALL {
            let n = self.count(op);
            writeln!(f, "  op.{:<4}                {} ({:.2}%)", op, n, self.percent(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "FLAGS")?;
        writeln!(
            f,
            "  carry.set              {} ({:.2}%)",
            self.carry_set,
            self.percent(self.carry_set)
        )?;
        writeln!(
            f,
            "  zero.set               {} ({:.2}%)",
            self.zero_set,
            self.percent(self.zero_set)
        )?;
        write!(f, "==========================================================")
    }
}
