//! ALU Arithmetic Operation Tests.
//!
//! Directed vectors for ADD and SUB covering identity, wraparound at the
//! 4-bit boundary, and the carry/borrow flag.

use nanocalc_core::Opcode;
use nanocalc_core::alu::arithmetic;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{eval, nib};

// ─── ADD ─────────────────────────────────────────────────────────────────────

#[rstest]
#[case(5, 3, (8, 0, 0))]
#[case(15, 1, (0, 1, 1))]
#[case(0, 0, (0, 0, 1))]
#[case(15, 15, (14, 1, 0))]
#[case(7, 8, (15, 0, 0))]
#[case(8, 8, (0, 1, 1))]
#[case(9, 0, (9, 0, 0))]
#[case(0, 9, (9, 0, 0))]
fn add_vectors(#[case] a: u8, #[case] b: u8, #[case] expected: (u8, u8, u8)) {
    assert_eq!(eval(a, b, Opcode::Add), expected);
}

#[test]
fn add_is_commutative() {
    for a in 0..16 {
        for b in 0..16 {
            assert_eq!(eval(a, b, Opcode::Add), eval(b, a, Opcode::Add));
        }
    }
}

#[test]
fn add_carry_set_exactly_when_sum_exceeds_15() {
    for a in 0..16u8 {
        for b in 0..16u8 {
            let (_, carry) = arithmetic::add(nib(a), nib(b));
            assert_eq!(carry, a + b > 15, "a={a} b={b}");
        }
    }
}

#[test]
fn add_wraps_modulo_16() {
    for a in 0..16u8 {
        for b in 0..16u8 {
            let (sum, _) = arithmetic::add(nib(a), nib(b));
            assert_eq!(sum.val(), (a + b) % 16, "a={a} b={b}");
        }
    }
}

// ─── SUB ─────────────────────────────────────────────────────────────────────

#[rstest]
#[case(10, 6, (4, 0, 0))]
#[case(3, 5, (14, 1, 0))]
#[case(0, 15, (1, 1, 0))]
#[case(0, 1, (15, 1, 0))]
#[case(7, 7, (0, 0, 1))]
#[case(15, 0, (15, 0, 0))]
#[case(15, 15, (0, 0, 1))]
fn sub_vectors(#[case] a: u8, #[case] b: u8, #[case] expected: (u8, u8, u8)) {
    assert_eq!(eval(a, b, Opcode::Sub), expected);
}

#[test]
fn sub_borrow_set_exactly_when_a_below_b() {
    for a in 0..16u8 {
        for b in 0..16u8 {
            let (diff, borrow) = arithmetic::sub(nib(a), nib(b));
            assert_eq!(borrow, a < b, "a={a} b={b}");
            assert_eq!(diff.val(), a.wrapping_sub(b) & 0xF, "a={a} b={b}");
        }
    }
}

#[test]
fn sub_then_add_restores_operand() {
    for a in 0..16u8 {
        for b in 0..16u8 {
            let (diff, _) = arithmetic::sub(nib(a), nib(b));
            let (back, _) = arithmetic::add(diff, nib(b));
            assert_eq!(back.val(), a);
        }
    }
}
