//! # Verification Environment Tests

/// Fuzzer reproducibility and fault detection.
pub mod fuzz;
