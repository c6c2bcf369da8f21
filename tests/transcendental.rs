use detf32::transcendental::{exp, exp2, log, log2, pow};
use detf32::F32;

fn close(a: F32, b: f32, tol: f32) -> bool {
    (a.to_float_bits() - b).abs() < tol
}

#[test]
fn exp2_and_log2_are_inverses_on_powers_of_two() {
    for k in -10i32..=10 {
        let x = F32::from_i32(k);
        let round_trip = log2(exp2(x));
        assert!(close(round_trip, k as f32, 1e-2), "k = {k}");
    }
}

#[test]
fn exp_and_log_are_inverses_within_tolerance() {
    for v in [0.1_f32, 1.0, 2.5, 10.0, 50.0] {
        let x = F32::from_float_bits(v);
        let round_trip = log(exp(x));
        assert!(close(round_trip, v, v.abs() * 1e-2 + 1e-3), "v = {v}");
    }
}

#[test]
fn log_special_values() {
    assert!(log(F32::ZERO).is_negative_infinity());
    assert!(log(F32::MINUS_ONE).is_nan());
    assert_eq!(log(F32::ONE).to_float_bits(), 0.0);
}

#[test]
fn pow_matches_host_for_ordinary_values() {
    for (base, exponent) in [(2.0_f32, 10.0_f32), (3.0, 3.0), (10.0, 2.0)] {
        let got = pow(F32::from_float_bits(base), F32::from_float_bits(exponent)).to_float_bits();
        let expected = base.powf(exponent);
        assert!((got - expected).abs() < expected.abs() * 1e-2 + 1e-2, "{base}^{exponent}: got {got}, expected {expected}");
    }
}

#[test]
fn pow_identity_edge_cases() {
    assert_eq!(pow(F32::NAN, F32::ZERO).to_float_bits(), 1.0);
    assert_eq!(pow(F32::ONE, F32::NAN).to_float_bits(), 1.0);
    assert_eq!(pow(F32::ZERO, F32::from_float_bits(3.0)).to_float_bits(), 0.0);
    assert!(pow(F32::ZERO, F32::MINUS_ONE).is_positive_infinity());
}

#[test]
fn pow_negative_base_integer_vs_fractional_exponent() {
    let base = F32::from_float_bits(-2.0);
    assert_eq!(pow(base, F32::from_float_bits(2.0)).to_float_bits(), 4.0);
    assert_eq!(pow(base, F32::from_float_bits(3.0)).to_float_bits(), -8.0);
    assert!(pow(base, F32::from_float_bits(0.5)).is_nan());
}

#[test]
fn pow_minus_one_to_any_infinite_exponent_is_one() {
    assert_eq!(pow(F32::MINUS_ONE, F32::POS_INF).to_float_bits(), 1.0);
    assert_eq!(pow(F32::MINUS_ONE, F32::NEG_INF).to_float_bits(), 1.0);
}
