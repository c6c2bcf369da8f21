//! A fixed table of reference scenarios pinned to concrete expected
//! values, run through `rstest`, complementing the property-based checks
//! in `conformance.rs` with specific numbers a reviewer can eyeball.

use detf32::F32;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(1.0, 2.0, 3.0)]
#[case(-1.0, 1.0, 0.0)]
#[case(0.1, 0.2, 0.3)]
#[case(1_000_000.0, 0.000_001, 1_000_000.000_001)]
#[case(f32::MAX, f32::MAX, f32::INFINITY)]
fn addition_matches_reference(#[case] a: f32, #[case] b: f32, #[case] expected: f32) {
    let sum = (F32::from_float_bits(a) + F32::from_float_bits(b)).to_float_bits();
    if expected.is_infinite() {
        assert!(sum.is_infinite() && sum.is_sign_positive() == expected.is_sign_positive());
    } else {
        assert!((sum - expected).abs() <= expected.abs() * 1e-5 + 1e-6, "{a} + {b} = {sum}, expected {expected}");
    }
}

#[rstest]
#[case(6.0, 3.0, 2.0)]
#[case(1.0, 3.0, 0.333_333_34)]
#[case(-8.0, 2.0, -4.0)]
#[case(1.0, 0.0, f32::INFINITY)]
#[case(0.0, 0.0, f32::NAN)]
fn division_matches_reference(#[case] a: f32, #[case] b: f32, #[case] expected: f32) {
    let got = (F32::from_float_bits(a) / F32::from_float_bits(b)).to_float_bits();
    if expected.is_nan() {
        assert!(got.is_nan());
    } else if expected.is_infinite() {
        assert!(got.is_infinite());
    } else {
        assert!((got - expected).abs() <= expected.abs() * 1e-5 + 1e-6);
    }
}

#[rstest]
#[case(0x3F80_0000, 1.0)] // 1.0
#[case(0xBF80_0000, -1.0)] // -1.0
#[case(0x0000_0000, 0.0)] // +0
#[case(0x7F80_0000, f32::INFINITY)] // +inf
fn raw_words_decode_to_expected_host_values(#[case] raw: u32, #[case] expected: f32) {
    let value = F32::from_raw(raw).to_float_bits();
    if expected.is_infinite() {
        assert!(value.is_infinite());
    } else {
        assert_eq!(value, expected);
    }
}
