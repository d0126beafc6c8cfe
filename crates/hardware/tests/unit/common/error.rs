//! # Error Tests
//!
//! Display text and source chains of the error types.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use nanocalc_core::common::{AluError, ConfigError, Operand, VectorError};

#[test]
fn operand_out_of_range_display() {
    let e = AluError::OperandOutOfRange { operand: Operand::A, value: 20 };
    assert_eq!(e.to_string(), "operand A out of range: 20 (expected 0..=15)");
}

#[test]
fn opcode_out_of_range_display() {
    let e = AluError::OpcodeOutOfRange(9);
    assert_eq!(e.to_string(), "opcode out of range: 9 (expected 0..=7)");
}

#[test]
fn unknown_mnemonic_display() {
    let e = AluError::UnknownMnemonic("mul".to_string());
    assert_eq!(e.to_string(), "unknown operation mnemonic \"mul\"");
}

#[test]
fn operand_display() {
    assert_eq!(Operand::A.to_string(), "A");
    assert_eq!(Operand::B.to_string(), "B");
}

#[test]
fn vector_io_error_keeps_path_and_source() {
    let e = VectorError::Io {
        path: PathBuf::from("missing.json"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    let text = e.to_string();
    assert!(text.contains("missing.json"));
    assert!(text.contains("no such file"));
    assert!(e.source().is_some());
}

#[test]
fn vector_invalid_error_chains_alu_error() {
    let e = VectorError::Invalid {
        index: 3,
        description: "bad".to_string(),
        source: AluError::OpcodeOutOfRange(12),
    };
    assert_eq!(
        e.to_string(),
        "vector #3 (bad) has invalid inputs: opcode out of range: 12 (expected 0..=7)"
    );
    let source = e.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("opcode out of range: 12 (expected 0..=7)"));
}

#[test]
fn config_parse_error_from_serde() {
    let e: ConfigError = serde_json::from_str::<u8>("not json")
        .map_err(ConfigError::from)
        .err()
        .unwrap_or_else(|| panic!("expected a parse error"));
    assert!(e.to_string().starts_with("invalid config: "));
}
