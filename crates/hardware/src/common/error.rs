//! Error definitions.
//!
//! This module defines the error types raised around the ALU. It provides:
//! 1. **Input Errors:** Out-of-range operands and opcodes rejected before evaluation.
//! 2. **Vector Errors:** Failures reading, parsing, or validating test-vector files.
//! 3. **Config Errors:** Failures reading or parsing configuration files.
//!
//! The ALU itself is total over its typed domain; these errors only arise at
//! the boundary where untyped integers or files enter the model.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Identifies which ALU input a value was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// First operand, driven on `ui_in[3:0]`.
    A,
    /// Second operand, driven on `ui_in[7:4]`.
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Invalid input supplied to the ALU under the `Reject` input policy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// An operand does not fit in 4 bits.
    #[error("operand {operand} out of range: {value} (expected 0..=15)")]
    OperandOutOfRange {
        /// Which operand was invalid.
        operand: Operand,
        /// The rejected value.
        value: u8,
    },

    /// An opcode does not fit in 3 bits.
    #[error("opcode out of range: {0} (expected 0..=7)")]
    OpcodeOutOfRange(u8),

    /// A mnemonic did not name any ALU operation.
    #[error("unknown operation mnemonic {0:?}")]
    UnknownMnemonic(String),
}

/// Failure loading or validating a test-vector file.
#[derive(Debug, Error)]
pub enum VectorError {
    /// The file could not be read.
    #[error("failed to read vectors from {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of vectors.
    #[error("failed to parse vectors in {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A vector's inputs were rejected by the input policy.
    #[error("vector #{index} ({description}) has invalid inputs: {source}")]
    Invalid {
        /// Zero-based position of the vector in its list.
        index: usize,
        /// The vector's description.
        description: String,
        /// The rejection reason.
        #[source]
        source: AluError,
    },
}

/// Failure loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The contents are not a valid configuration.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
