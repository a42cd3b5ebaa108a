//! Behaviour of `CloseAtTolerance` and the facade functions.

use fp_closeness::{CloseAtTolerance, Strength, is_close_to, is_small, percent_tolerance};
use proptest::prelude::*;
use rstest::rstest;

mod support;
use support::approx_eq;

const SPAN: f64 = 1e6;

#[rstest]
#[case(1.0, 1.0009, 0.001, true)]
#[case(1.0, 1.002, 0.001, false)]
#[case(1e-20, 1.0009e-20, 0.001, true)]
#[case(1e20, 1.002e20, 0.001, false)]
#[case(0.0, 1e-3, 0.5, false)]
fn facade_compares_with_strong_strength(
    #[case] left: f64,
    #[case] right: f64,
    #[case] tolerance: f64,
    #[case] expected: bool,
) {
    assert_eq!(is_close_to(left, right, tolerance), expected);
}

#[rstest]
fn failing_comparison_reports_missed_fraction() {
    let close = CloseAtTolerance::new(0.001_f64, Strength::Strong);
    assert!(!close.matches(1.0, 1.002));
    let failed = close
        .failed_fraction()
        .unwrap_or_else(|| panic!("expected a failed fraction"));
    assert!(approx_eq(failed, 0.002, 1e-5), "got {failed}");
}

#[rstest]
fn weak_admits_edge_of_tolerance() {
    let close = CloseAtTolerance::new(0.01_f64, Strength::Weak);
    assert!(close.matches(100.0, 99.0));
    assert_eq!(close.failed_fraction(), None);
}

#[rstest]
fn percentage_and_fraction_tolerances_agree() {
    let by_fraction = CloseAtTolerance::new(0.001_f64, Strength::Strong);
    let by_percent = CloseAtTolerance::new(percent_tolerance(0.1_f64), Strength::Strong);
    for (a, b) in [(1.0, 1.0009), (1.0, 1.002), (-5.0, -5.004), (3.0, 3.0)] {
        assert_eq!(by_fraction.matches(a, b), by_percent.matches(a, b));
    }
}

#[rstest]
#[case(0.0, 1e-12, true)]
#[case(-1e-13, 1e-12, true)]
#[case(1e-12, 1e-12, false)]
fn facade_checks_smallness(#[case] value: f64, #[case] tolerance: f64, #[case] expected: bool) {
    assert_eq!(is_small(value, tolerance), expected);
}

#[rstest]
fn engine_is_independent_per_instance() {
    let first = CloseAtTolerance::new(0.001_f64, Strength::Strong);
    let second = CloseAtTolerance::new(0.001_f64, Strength::Strong);
    assert!(!first.matches(1.0, 2.0));
    assert!(second.failed_fraction().is_none());
}

fn value() -> impl Strategy<Value = f64> {
    -SPAN..SPAN
}

fn tolerance() -> impl Strategy<Value = f64> {
    0.0..1.0
}

fn strength() -> impl Strategy<Value = Strength> {
    prop_oneof![Just(Strength::Strong), Just(Strength::Weak)]
}

proptest! {
    #[test]
    fn identical_values_match_at_zero_tolerance(x in value()) {
        let close = CloseAtTolerance::new(0.0, Strength::Strong);
        prop_assert!(close.matches(x, x));
    }

    #[test]
    fn distinct_values_fail_at_zero_tolerance(x in value(), y in value()) {
        prop_assume!(x != y);
        let close = CloseAtTolerance::new(0.0, Strength::Strong);
        prop_assert!(!close.matches(x, y));
    }

    #[test]
    fn verdict_is_symmetric(
        a in value(),
        b in value(),
        t in tolerance(),
        s in strength(),
    ) {
        let close = CloseAtTolerance::new(t, s);
        prop_assert_eq!(close.matches(a, b), close.matches(b, a));
    }

    #[test]
    fn negation_matches_opposite_strength(
        a in value(),
        b in value(),
        t in tolerance(),
        s in strength(),
    ) {
        let close = CloseAtTolerance::new(t, s);
        let opposite = CloseAtTolerance::new(t, s.opposite());
        prop_assert_eq!(close.compare(a, b, true), !opposite.compare(a, b, false));
    }

    #[test]
    fn weak_admits_whatever_strong_admits(a in value(), b in value(), t in tolerance()) {
        let strong = CloseAtTolerance::new(t, Strength::Strong);
        let weak = CloseAtTolerance::new(t, Strength::Weak);
        prop_assert!(!strong.matches(a, b) || weak.matches(a, b));
    }

    #[test]
    fn failure_always_records_a_fraction(
        a in value(),
        b in value(),
        t in tolerance(),
        s in strength(),
        negate in any::<bool>(),
    ) {
        let close = CloseAtTolerance::new(t, s);
        let outcome = close.evaluate(a, b, negate);
        prop_assert_eq!(outcome.passed, outcome.failed_fraction.is_none());
        if let Some(fraction) = outcome.failed_fraction {
            prop_assert!(fraction >= 0.0);
        }
    }
}
