//! ALU Comparison Tests.
//!
//! EQ puts its outcome on the result bus and mirrors it into carry.

use nanocalc_core::Opcode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::eval;

#[rstest]
#[case(5, 5, (1, 1, 0))]
#[case(5, 7, (0, 0, 1))]
#[case(0, 0, (1, 1, 0))]
#[case(15, 15, (1, 1, 0))]
#[case(15, 0, (0, 0, 1))]
fn eq_vectors(#[case] a: u8, #[case] b: u8, #[case] expected: (u8, u8, u8)) {
    assert_eq!(eval(a, b, Opcode::Eq), expected);
}

#[test]
fn eq_carry_mirrors_result() {
    for a in 0..16 {
        for b in 0..16 {
            let (result, carry, zero) = eval(a, b, Opcode::Eq);
            assert_eq!(result, carry);
            assert_eq!(result, u8::from(a == b));
            assert_eq!(zero, u8::from(a != b));
        }
    }
}
