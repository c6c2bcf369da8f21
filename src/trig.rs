//! Trigonometric functions: range reduction, `sin`, `cos`, `tan`, `atan`,
//! `atan2`, `acos`, `asin`, `hypot`.
//!
//! `sin`/`cos` reduce the argument modulo 2π and fold into the first
//! quadrant before evaluating a minimax polynomial; `atan` reduces large
//! arguments via the reciprocal identity before its own polynomial;
//! `acos`/`asin` are built on top of `atan2` rather than carrying their own
//! series, and `hypot` is the scaled `sqrt(1 + (small/big)^2) * big` form
//! that avoids overflow for large operands.

use crate::bits::F32;
use crate::constants::{ATAN_POLY, FRAC_PI_2, FRAC_PI_4, INV_TAU, PI, SIN_POLY, TAU};
use crate::round::round;
use crate::sqrt::sqrt;

fn horner(coeffs: &[F32], t: F32) -> F32 {
    let mut acc = coeffs[coeffs.len() - 1];
    for &c in coeffs[..coeffs.len() - 1].iter().rev() {
        acc = acc * t + c;
    }
    acc
}

/// Sine. NaN for any non-finite input.
#[must_use]
pub fn sin(x: F32) -> F32 {
    if !x.is_finite() {
        return F32::NAN;
    }
    let k = round(x * INV_TAU);
    let mut t = x - k * TAU;
    if t > FRAC_PI_2 {
        tracing::trace!(?t, "sin: range reduction folded into upper quadrant");
        t = PI - t;
    } else if t < FRAC_PI_2.negate() {
        tracing::trace!(?t, "sin: range reduction folded into lower quadrant");
        t = PI.negate() - t;
    }
    let t2 = t * t;
    horner(&SIN_POLY, t2) * t
}

/// Cosine, computed as `sin(x + π/2)`.
#[must_use]
pub fn cos(x: F32) -> F32 {
    sin(x + FRAC_PI_2)
}

/// Tangent, computed as `sin(x) / cos(x)`. Near odd multiples of `π/2`
/// this loses precision and can even overflow to infinity, same as any
/// `tan` built from `sin`/`cos` rather than its own reduction.
#[must_use]
pub fn tan(x: F32) -> F32 {
    sin(x) / cos(x)
}

/// Arctangent. Reduces `|x| > 1` via `atan(x) = π/2 - atan(1/x)` before
/// evaluating the minimax polynomial, so the series only ever sees
/// arguments in `[-1, 1]`.
#[must_use]
pub fn atan(x: F32) -> F32 {
    if x.is_nan() {
        return F32::NAN;
    }
    let sign = x.is_negative();
    let ax = x.abs();
    let (reduced, reciprocal) = if ax > F32::ONE {
        (F32::ONE / ax, true)
    } else {
        (ax, false)
    };
    let t2 = reduced * reduced;
    let mut result = horner(&ATAN_POLY, t2) * reduced;
    if reciprocal {
        result = FRAC_PI_2 - result;
    }
    if sign {
        result.negate()
    } else {
        result
    }
}

/// Two-argument arctangent, `atan2(y, x)`, following the usual IEEE/C99
/// sign and infinity conventions (the angle of the point `(x, y)`).
#[must_use]
pub fn atan2(y: F32, x: F32) -> F32 {
    if y.is_nan() || x.is_nan() {
        return F32::NAN;
    }
    let y_neg = y.is_negative();
    if y.is_zero() && x.is_zero() {
        return if x.is_negative() {
            if y_neg { PI.negate() } else { PI }
        } else if y_neg {
            F32::NEG_ZERO
        } else {
            F32::ZERO
        };
    }
    if x.is_positive_infinity() {
        if y.is_infinity() {
            return if y_neg { FRAC_PI_4.negate() } else { FRAC_PI_4 };
        }
        return if y_neg { F32::NEG_ZERO } else { F32::ZERO };
    }
    if x.is_negative_infinity() {
        if y.is_infinity() {
            let three_quarters = PI - FRAC_PI_4;
            return if y_neg { three_quarters.negate() } else { three_quarters };
        }
        return if y_neg { PI.negate() } else { PI };
    }
    if y.is_positive_infinity() {
        return FRAC_PI_2;
    }
    if y.is_negative_infinity() {
        return FRAC_PI_2.negate();
    }
    if x.is_zero() {
        return if y_neg { FRAC_PI_2.negate() } else { FRAC_PI_2 };
    }
    let base = atan(y / x);
    if x.is_negative() {
        if y_neg { base - PI } else { base + PI }
    } else {
        base
    }
}

/// Arcsine, computed as `atan2(x, sqrt(1 - x^2))`. NaN outside `[-1, 1]`.
#[must_use]
pub fn asin(x: F32) -> F32 {
    if x.is_nan() {
        return F32::NAN;
    }
    let complement = F32::ONE - x * x;
    atan2(x, sqrt(complement))
}

/// Arccosine, computed as `atan2(sqrt(1 - x^2), x)`. NaN outside `[-1, 1]`.
#[must_use]
pub fn acos(x: F32) -> F32 {
    if x.is_nan() {
        return F32::NAN;
    }
    let complement = F32::ONE - x * x;
    atan2(sqrt(complement), x)
}

/// Euclidean distance `sqrt(x^2 + y^2)`, scaled by the larger operand so
/// squaring never overflows even when `x` or `y` is near [`F32::MAX`].
#[must_use]
pub fn hypot(x: F32, y: F32) -> F32 {
    if x.is_infinity() || y.is_infinity() {
        return F32::POS_INF;
    }
    if x.is_nan() || y.is_nan() {
        return F32::NAN;
    }
    let ax = x.abs();
    let ay = y.abs();
    let (big, small) = if ax > ay { (ax, ay) } else { (ay, ax) };
    if big.is_zero() || small.is_zero() {
        return big;
    }
    let ratio = small / big;
    big * sqrt(F32::ONE + ratio * ratio)
}
