//! Rounding and modulo: `trunc`, `floor`, `ceil`, `round`, `fmod`, and
//! remainder-quotient.
//!
//! Like the arithmetic core, every function here works directly on the
//! decomposed sign/exponent/significand triple; none of them reinterpret
//! to a host `f32` and call its rounding intrinsics.

use crate::bits::{F32, MANTISSA_BITS};

/// Truncates toward zero, discarding any fractional part.
#[must_use]
pub fn trunc(x: F32) -> F32 {
    if !x.is_finite() || x.is_zero() {
        return x;
    }
    let (sign, exp, sig) = x.decompose();
    if exp < 0 {
        return if sign { F32::NEG_ZERO } else { F32::ZERO };
    }
    if exp >= MANTISSA_BITS as i32 {
        // Already an integer: no fractional bits remain in the mantissa.
        return x;
    }
    let frac_bits = MANTISSA_BITS as i32 - exp;
    let integer_sig = (sig >> frac_bits) << frac_bits;
    F32::assemble(sign, exp, u64::from(integer_sig), 0)
}

/// Largest integer value less than or equal to `x`.
#[must_use]
pub fn floor(x: F32) -> F32 {
    let t = trunc(x);
    if x.is_negative() && t != x {
        t - F32::ONE
    } else {
        t
    }
}

/// Smallest integer value greater than or equal to `x`.
#[must_use]
pub fn ceil(x: F32) -> F32 {
    let t = trunc(x);
    if x.is_positive() && t != x {
        t + F32::ONE
    } else {
        t
    }
}

/// Rounds to the nearest integer, ties to even (banker's rounding).
///
/// Exact half-way values round to whichever neighbor is even. Because the
/// comparison against `0.5` is itself done in `F32`, an input whose
/// significand cannot represent the midpoint exactly may round as if it
/// were a hair above or below `0.5`; this is the documented deviation the
/// conformance suite allows `±1` slack for, not a bug to "fix" toward
/// exactness.
#[must_use]
pub fn round(x: F32) -> F32 {
    if !x.is_finite() || x.is_zero() {
        return x;
    }
    let t = trunc(x);
    let frac = (x - t).abs();
    let half = F32::from_raw(0x3F00_0000); // 0.5
    let bump = |t: F32| if x.is_negative() { t - F32::ONE } else { t + F32::ONE };
    if frac < half {
        t
    } else if frac > half {
        bump(t)
    } else {
        // Exactly half-way: round to even. `t` is an integer small enough
        // (magnitude < 2^24) for this truncating conversion to be exact.
        if t.to_i32() % 2 == 0 {
            t
        } else {
            bump(t)
        }
    }
}

/// Truncated (C-style) floating-point remainder: `x - trunc(x / y) * y`.
/// The result takes the sign of `x`, matching `libm`'s `fmodf` rather than
/// a Euclidean or floored remainder.
#[must_use]
pub fn fmod(x: F32, y: F32) -> F32 {
    if x.is_nan() || y.is_nan() || y.is_zero() || !x.is_finite() {
        return F32::NAN;
    }
    if !y.is_finite() {
        return x;
    }
    if x.is_zero() {
        return x;
    }
    let quotient = trunc(x / y);
    x - quotient * y
}

/// Returns `(remainder, quotient)` where `quotient = trunc(x / y)` as an
/// `i32` and `remainder = x - quotient * y`, matching [`fmod`]'s
/// truncated-toward-zero convention. `quotient` saturates to `0` when the
/// operation is undefined (NaN, infinite `x`, or `y == 0`) or when `y` is
/// infinite, the same saturating behavior as [`F32::to_i32`].
#[must_use]
pub fn remainder_quotient(x: F32, y: F32) -> (F32, i32) {
    if x.is_nan() || y.is_nan() || y.is_zero() || !x.is_finite() {
        return (F32::NAN, 0);
    }
    if !y.is_finite() {
        return (x, 0);
    }
    let quotient = trunc(x / y);
    let remainder = x - quotient * y;
    (remainder, quotient.to_i32())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunc_drops_fraction_toward_zero() {
        assert_eq!(trunc(F32::from_float_bits(3.75)).to_float_bits(), 3.0);
        assert_eq!(trunc(F32::from_float_bits(-3.75)).to_float_bits(), -3.0);
    }

    #[test]
    fn floor_and_ceil_bracket_correctly() {
        assert_eq!(floor(F32::from_float_bits(-3.25)).to_float_bits(), -4.0);
        assert_eq!(ceil(F32::from_float_bits(-3.25)).to_float_bits(), -3.0);
        assert_eq!(floor(F32::from_float_bits(3.25)).to_float_bits(), 3.0);
        assert_eq!(ceil(F32::from_float_bits(3.25)).to_float_bits(), 4.0);
    }

    #[test]
    fn round_ties_to_even() {
        assert_eq!(round(F32::from_float_bits(2.5)).to_float_bits(), 2.0);
        assert_eq!(round(F32::from_float_bits(3.5)).to_float_bits(), 4.0);
        assert_eq!(round(F32::from_float_bits(-2.5)).to_float_bits(), -2.0);
    }

    #[test]
    fn round_away_from_halfway_is_unaffected() {
        assert_eq!(round(F32::from_float_bits(1.4)).to_float_bits(), 1.0);
        assert_eq!(round(F32::from_float_bits(1.6)).to_float_bits(), 2.0);
    }

    #[test]
    fn fmod_takes_sign_of_dividend() {
        let r = fmod(F32::from_float_bits(-5.5), F32::from_float_bits(2.0));
        assert_eq!(r.to_float_bits(), -1.5);
    }

    #[test]
    fn fmod_by_zero_is_nan() {
        assert!(fmod(F32::ONE, F32::ZERO).is_nan());
    }

    #[test]
    fn remainder_quotient_reconstructs_dividend() {
        let x = F32::from_float_bits(17.5);
        let y = F32::from_float_bits(5.0);
        let (r, q) = remainder_quotient(x, y);
        assert_eq!(q, 3);
        assert_eq!((F32::from_i32(q) * y + r).to_float_bits(), x.to_float_bits());
    }
}
