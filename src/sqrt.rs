//! Integer-domain square root.
//!
//! `sqrt` never calls a host `sqrtf`/`sqrt` intrinsic. It rescales the
//! operand's significand to an even power of two, runs a classic
//! bit-by-bit (non-restoring) integer square root, the same digit
//! recurrence software FPUs use internally, over a 64-bit integer with
//! extra precision bits, and reassembles the result through
//! [`F32::assemble`], which performs the final rounding-by-truncation and
//! renormalization.

use crate::bits::{F32, MANTISSA_BITS};

/// Extra bits of precision carried through the integer square root beyond
/// the 24-bit mantissa target, so the final truncation in
/// [`F32::assemble`] has room to round correctly.
///
/// `adjusted` (the pre-shift significand below) is at most 25 significant
/// bits, and `radicand` packs it into a `u64` as `adjusted << (2 *
/// EXTRA_BITS)`; the shift amount must leave room for those 25 bits, i.e.
/// `25 + 2 * EXTRA_BITS <= 64`, or the significant bits shift past bit 63
/// and are silently discarded, leaving `radicand == 0`.
const EXTRA_BITS: u32 = 19;

/// Square root. Negative non-zero operands (other than `-0`) produce NaN;
/// `+0`/`-0` map to themselves; `+∞` maps to `+∞`.
#[must_use]
pub fn sqrt(x: F32) -> F32 {
    if x.is_nan() {
        return F32::NAN;
    }
    if x.is_zero() {
        return x;
    }
    if x.is_negative() {
        return F32::NAN;
    }
    if x.is_positive_infinity() {
        return F32::POS_INF;
    }

    let (_, exp, sig) = x.decompose();
    tracing::trace!(raw = x.to_raw(), exp, sig, "sqrt: decomposed operand");

    // Rewrite sig * 2^(exp - MANTISSA_BITS) as adjusted * 2^k with k even,
    // so the exponent splits cleanly in half.
    let k = exp - MANTISSA_BITS as i32;
    let (adjusted, half_k) = if k.rem_euclid(2) == 0 {
        (u64::from(sig), k / 2)
    } else {
        (u64::from(sig) << 1, (k - 1) / 2)
    };

    let radicand = adjusted << (2 * EXTRA_BITS);
    let root = isqrt(radicand);

    let exponent = half_k - EXTRA_BITS as i32 + MANTISSA_BITS as i32;
    F32::assemble(false, exponent, root, 0)
}

/// Bit-by-bit integer square root: returns `floor(sqrt(n))`.
fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut remainder = n;
    let mut bit: u64 = 1 << 62;
    while bit > remainder {
        bit >>= 2;
    }
    let mut root: u64 = 0;
    while bit != 0 {
        if remainder >= root + bit {
            remainder -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_matches_known_squares() {
        for n in 0u64..2000 {
            let r = isqrt(n * n);
            assert_eq!(r, n, "isqrt({}) should be {}", n * n, n);
        }
    }

    #[test]
    fn sqrt_of_perfect_squares() {
        assert_eq!(sqrt(F32::from_float_bits(4.0)).to_float_bits(), 2.0);
        assert_eq!(sqrt(F32::from_float_bits(9.0)).to_float_bits(), 3.0);
        assert_eq!(sqrt(F32::from_float_bits(0.25)).to_float_bits(), 0.5);
    }

    #[test]
    fn sqrt_of_one_is_one() {
        assert_eq!(sqrt(F32::ONE), F32::ONE);
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        assert!(sqrt(F32::MINUS_ONE).is_nan());
    }

    #[test]
    fn sqrt_preserves_signed_zero() {
        assert_eq!(sqrt(F32::ZERO).to_raw(), F32::ZERO.to_raw());
        assert_eq!(sqrt(F32::NEG_ZERO).to_raw(), F32::NEG_ZERO.to_raw());
    }

    #[test]
    fn sqrt_of_infinity_is_infinity() {
        assert_eq!(sqrt(F32::POS_INF), F32::POS_INF);
    }

    #[test]
    fn sqrt_of_two_is_close_to_host_value() {
        let got = sqrt(F32::from_float_bits(2.0)).to_float_bits();
        assert!((got - core::f32::consts::SQRT_2).abs() < 1e-6);
    }
}
