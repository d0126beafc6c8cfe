//! ALU Shift Operation Tests.
//!
//! SHL drops bit 3 of A into carry and ignores B.

use nanocalc_core::Opcode;
use nanocalc_core::alu::shifts;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{eval, nib};

#[rstest]
#[case(6, (12, 0, 0))]
#[case(9, (2, 1, 0))]
#[case(8, (0, 1, 1))]
#[case(0, (0, 0, 1))]
#[case(1, (2, 0, 0))]
#[case(7, (14, 0, 0))]
#[case(15, (14, 1, 0))]
fn shl_vectors(#[case] a: u8, #[case] expected: (u8, u8, u8)) {
    assert_eq!(eval(a, 0, Opcode::Shl), expected);
}

#[test]
fn shl_carry_is_old_msb() {
    for a in 0..16u8 {
        let (_, carry) = shifts::shl(nib(a));
        assert_eq!(carry, a & 0b1000 != 0, "a={a}");
    }
}

#[test]
fn shl_ignores_operand_b() {
    for a in 0..16 {
        for b in 0..16 {
            assert_eq!(eval(a, b, Opcode::Shl), eval(a, 0, Opcode::Shl));
        }
    }
}

#[test]
fn shl_equals_doubling_modulo_16() {
    for a in 0..16u8 {
        let (shifted, carry, _) = eval(a, 0, Opcode::Shl);
        let (sum, add_carry, _) = eval(a, a, Opcode::Add);
        assert_eq!(shifted, sum);
        assert_eq!(carry, add_carry);
    }
}
