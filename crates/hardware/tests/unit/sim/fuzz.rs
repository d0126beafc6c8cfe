//! # Fuzzer Tests

use nanocalc_core::config::Config;
use nanocalc_core::sim::{Fuzzer, ViolationKind, fuzz::check_sample};
use nanocalc_core::soc::{Dut, NanoCalcTop, PinInputs, PinOutputs};
use nanocalc_core::{Opcode, evaluate};
use pretty_assertions::assert_eq;

use crate::common::mocks::{Fault, FaultyTop, MockDevice};
use crate::common::{init_tracing, nib};

/// Correct device that remembers every stimulus.
#[derive(Debug, Default)]
struct Recorder {
    seen: Vec<PinInputs>,
}

impl Dut for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn drive(&mut self, inputs: PinInputs) -> u8 {
        self.seen.push(inputs);
        NanoCalcTop::new().drive(inputs)
    }
}

fn config(iterations: u64, seed: u64) -> Config {
    let mut config = Config::default();
    config.fuzz.iterations = iterations;
    config.fuzz.seed = seed;
    config
}

#[test]
fn model_survives_default_run() {
    init_tracing();
    let config = Config::default();
    let report = Fuzzer::new(&config).run(&mut NanoCalcTop::new());
    assert!(report.passed(), "{:?}", report.violations.first());
    assert_eq!(report.seed, config.fuzz.seed);
    assert_eq!(report.stats.evaluations, 1000);
    assert_eq!(report.stats.passed, 1000);
    assert!(report.stats.all_opcodes_covered());
}

#[test]
fn same_seed_same_stimulus() {
    let config = config(200, 42);
    let mut first = Recorder::default();
    let mut second = Recorder::default();
    let r1 = Fuzzer::new(&config).run(&mut first);
    let r2 = Fuzzer::new(&config).run(&mut second);
    assert_eq!(first.seen, second.seen);
    assert_eq!(r1, r2);
}

#[test]
fn different_seed_different_stimulus() {
    let mut first = Recorder::default();
    let mut second = Recorder::default();
    let _ = Fuzzer::new(&config(200, 1)).run(&mut first);
    let _ = Fuzzer::new(&config(200, 2)).run(&mut second);
    assert_ne!(first.seen, second.seen);
}

#[test]
fn stimulus_stays_in_range() {
    let mut dut = Recorder::default();
    let _ = Fuzzer::new(&config(500, 7)).run(&mut dut);
    assert_eq!(dut.seen.len(), 500);
    assert!(dut.seen.iter().all(|p| p.uio_in <= 7));
}

#[test]
fn zero_iterations_is_an_empty_pass() {
    let report = Fuzzer::new(&config(0, 1)).run(&mut NanoCalcTop::new());
    assert!(report.passed());
    assert_eq!(report.stats.evaluations, 0);
}

#[test]
fn flipped_and_result_is_caught_only_on_and() {
    let mut dut = FaultyTop::new(Fault::ResultBit0Flipped(Opcode::And.bits()));
    let report = Fuzzer::new(&config(1000, 3)).run(&mut dut);
    assert!(!report.passed());
    assert_eq!(report.violations.len() as u64, report.stats.count(Opcode::And));
    for v in &report.violations {
        assert_eq!(v.inputs.opcode(), Opcode::And);
        assert!(v.kinds.contains(&ViolationKind::ResultMismatch));
        assert!(!v.kinds.contains(&ViolationKind::CarryMismatch));
    }
}

#[test]
fn driven_spare_bits_flag_every_sample() {
    let mut dut = FaultyTop::new(Fault::SpareDriven);
    let report = Fuzzer::new(&config(100, 9)).run(&mut dut);
    assert_eq!(report.violations.len(), 100);
    assert_eq!(dut.drives, 100);
    assert!(report
        .violations
        .iter()
        .all(|v| v.kinds == vec![ViolationKind::SpareBitsDriven]));
    assert_eq!(report.stats.failed, 100);
}

#[test]
fn silent_mock_breaks_zero_consistency() {
    let mut dut = MockDevice::new();
    let _ = dut.expect_name().return_const("silent");
    let _ = dut.expect_drive().times(50).return_const(0_u8);
    let report = Fuzzer::new(&config(50, 11)).run(&mut dut);
    assert_eq!(report.violations.len(), 50);
    assert!(report
        .violations
        .iter()
        .all(|v| v.kinds.contains(&ViolationKind::ZeroInconsistent)));
}

#[test]
fn check_sample_reports_every_broken_property() {
    let expected = evaluate(nib(15), nib(1), Opcode::Add);
    assert!(check_sample(&PinOutputs::decode(expected.to_uo_out()), &expected).is_empty());

    // result 3, carry 0, zero 1, bit 7 high
    let bad = PinOutputs::decode(0b1010_0011);
    assert_eq!(
        check_sample(&bad, &expected),
        vec![
            ViolationKind::SpareBitsDriven,
            ViolationKind::ZeroInconsistent,
            ViolationKind::ResultMismatch,
            ViolationKind::CarryMismatch,
        ]
    );
}

#[test]
fn violation_kinds_display() {
    assert_eq!(ViolationKind::SpareBitsDriven.to_string(), "uo_out[7:6] driven");
    assert_eq!(ViolationKind::CarryMismatch.to_string(), "carry differs from reference");
}
