//! Verification environment.
//!
//! Drives a [`Dut`](crate::soc::Dut) at pin level and checks what it returns.
//! It includes:
//! 1. **Vectors:** Directed stimulus/expectation tables, built in or loaded from JSON.
//! 2. **Testbench:** Applies vectors and reports per-signal mismatches.
//! 3. **Fuzzer:** Applies seeded random stimuli and checks invariants against the reference model.

/// Seeded random testing.
pub mod fuzz;

/// Directed vector testbench.
pub mod testbench;

/// Test-vector definitions and loading.
pub mod vectors;

pub use fuzz::{FuzzReport, Fuzzer, Violation, ViolationKind};
pub use testbench::{CheckReport, Mismatch, Signal, Testbench, VectorOutcome};
pub use vectors::{Suite, TestVector, load_vectors};
