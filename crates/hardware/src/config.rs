//! Configuration system for the `NanoCalc` model and testbench.
//!
//! This module defines the configuration structures and enums used to parameterize
//! evaluation and verification runs. It provides:
//! 1. **Defaults:** Baseline values for tracing, input handling, and fuzzing.
//! 2. **Structures:** Hierarchical config for general, input, and fuzz settings.
//! 3. **Enums:** The out-of-range input policy.
//!
//! Configuration is supplied as JSON (every field optional) or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{AluError, ConfigError, Operand};
use crate::common::Nibble;
use crate::isa::Opcode;

/// Default configuration constants.
mod defaults {
    /// Number of random stimuli per fuzz run.
    pub const FUZZ_ITERATIONS: u64 = 1000;

    /// Fuzz RNG seed, fixed so that runs are reproducible unless overridden.
    pub const FUZZ_SEED: u64 = 0x4E41_4E4F_4341_4C43;

    /// Log one fuzz iteration in every N at debug level.
    pub const FUZZ_LOG_EVERY: u64 = 10;
}

/// Handling of inputs that do not fit their bus width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum InputPolicy {
    /// Reject out-of-range operands and opcodes with an [`AluError`].
    #[default]
    Reject,
    /// Keep only the low bits, as a fixed-width hardware bus would.
    #[serde(alias = "Truncate")]
    Mask,
}

impl InputPolicy {
    /// Converts a raw operand value to a [`Nibble`] under this policy.
    ///
    /// # Errors
    ///
    /// Under [`InputPolicy::Reject`], returns [`AluError::OperandOutOfRange`]
    /// for values above 15.
    pub fn operand(self, value: u8, operand: Operand) -> Result<Nibble, AluError> {
        match self {
            Self::Reject => Nibble::new(value, operand),
            Self::Mask => {
                let n = Nibble::truncate(value);
                if n.val() != value {
                    tracing::warn!(%operand, value, masked = n.val(), "operand truncated to 4 bits");
                }
                Ok(n)
            }
        }
    }

    /// Converts a raw opcode value to an [`Opcode`] under this policy.
    ///
    /// # Errors
    ///
    /// Under [`InputPolicy::Reject`], returns [`AluError::OpcodeOutOfRange`]
    /// for values above 7.
    pub fn opcode(self, value: u8) -> Result<Opcode, AluError> {
        match self {
            Self::Reject => Opcode::try_from(value),
            Self::Mask => {
                let op = Opcode::from_bits(value);
                if op.bits() != value {
                    tracing::warn!(value, masked = op.bits(), "opcode truncated to 3 bits");
                }
                Ok(op)
            }
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use nanocalc_core::config::{Config, InputPolicy};
///
/// let config = Config::default();
/// assert!(!config.general.trace_evaluations);
/// assert_eq!(config.input.policy, InputPolicy::Reject);
///
/// let json = r#"{
///     "general": { "trace_evaluations": true },
///     "input": { "policy": "Mask" },
///     "fuzz": { "iterations": 5000, "seed": 7 }
/// }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_evaluations);
/// assert_eq!(config.input.policy, InputPolicy::Mask);
/// assert_eq!(config.fuzz.iterations, 5000);
/// assert_eq!(config.fuzz.log_every, 10);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Out-of-range input handling
    #[serde(default)]
    pub input: InputConfig,
    /// Randomized testing parameters
    #[serde(default)]
    pub fuzz: FuzzConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON is malformed or has wrongly typed fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every evaluation performed by the testbench and fuzzer at info level
    #[serde(default)]
    pub trace_evaluations: bool,
}

/// Input handling settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Policy applied to raw operands and opcodes
    #[serde(default)]
    pub policy: InputPolicy,
}

/// Randomized testing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FuzzConfig {
    /// Number of random stimuli to apply
    #[serde(default = "FuzzConfig::default_iterations")]
    pub iterations: u64,

    /// RNG seed
    #[serde(default = "FuzzConfig::default_seed")]
    pub seed: u64,

    /// Debug-log one iteration in every `log_every` (0 disables)
    #[serde(default = "FuzzConfig::default_log_every")]
    pub log_every: u64,
}

impl FuzzConfig {
    /// Returns the default iteration count.
    const fn default_iterations() -> u64 {
        defaults::FUZZ_ITERATIONS
    }

    /// Returns the default seed.
    const fn default_seed() -> u64 {
        defaults::FUZZ_SEED
    }

    /// Returns the default logging interval.
    const fn default_log_every() -> u64 {
        defaults::FUZZ_LOG_EVERY
    }
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::FUZZ_ITERATIONS,
            seed: defaults::FUZZ_SEED,
            log_every: defaults::FUZZ_LOG_EVERY,
        }
    }
}
