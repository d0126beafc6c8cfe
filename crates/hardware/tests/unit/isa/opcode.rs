//! # Opcode Tests
//!
//! Encoding round trips, bus masking, and mnemonic parsing.

use nanocalc_core::{AluError, Opcode};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn encodings_follow_table_order() {
    let codes: Vec<u8> = Opcode::ALL.iter().map(|op| op.bits()).collect();
    assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(Opcode::Add.bits(), 0);
    assert_eq!(Opcode::Shl.bits(), 6);
    assert_eq!(Opcode::Eq.bits(), 7);
}

#[test]
fn try_from_accepts_0_to_7_only() {
    for code in 0..=7u8 {
        assert_eq!(Opcode::try_from(code).map(u8::from), Ok(code));
    }
    for code in 8..=u8::MAX {
        assert_eq!(Opcode::try_from(code), Err(AluError::OpcodeOutOfRange(code)));
    }
}

#[test]
fn from_bits_ignores_upper_bits() {
    assert_eq!(Opcode::from_bits(0x08), Opcode::Add);
    assert_eq!(Opcode::from_bits(0xFF), Opcode::Eq);
    assert_eq!(Opcode::from_bits(0b1010_0110), Opcode::Shl);
}

#[rstest]
#[case("add", Opcode::Add)]
#[case("SUB", Opcode::Sub)]
#[case("And", Opcode::And)]
#[case("or", Opcode::Or)]
#[case("xor", Opcode::Xor)]
#[case("not", Opcode::Not)]
#[case("shl", Opcode::Shl)]
#[case("shift", Opcode::Shl)]
#[case("eq", Opcode::Eq)]
#[case("EQUAL", Opcode::Eq)]
#[case("5", Opcode::Not)]
#[case(" 7 ", Opcode::Eq)]
fn parse_mnemonics_and_numbers(#[case] text: &str, #[case] expected: Opcode) {
    assert_eq!(text.parse::<Opcode>(), Ok(expected));
}

#[test]
fn parse_rejects_unknown_and_out_of_range() {
    assert_eq!(
        "mul".parse::<Opcode>(),
        Err(AluError::UnknownMnemonic("mul".to_string()))
    );
    assert_eq!("8".parse::<Opcode>(), Err(AluError::OpcodeOutOfRange(8)));
}

#[test]
fn display_is_mnemonic_and_honours_width() {
    assert_eq!(Opcode::Add.to_string(), "ADD");
    assert_eq!(Opcode::Shl.to_string(), "SHL");
    assert_eq!(format!("{:<4}|", Opcode::Or), "OR  |");
}

#[test]
fn unary_ops() {
    let unary: Vec<Opcode> = Opcode::ALL.into_iter().filter(|op| op.is_unary()).collect();
    assert_eq!(unary, vec![Opcode::Not, Opcode::Shl]);
}
