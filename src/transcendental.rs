//! Transcendental functions: `exp`, `expm1`, `log`, `log1p`, `log2`, `pow`.
//!
//! All of these reduce to `exp2`/`log2` via bit-level exponent injection
//! and extraction, then a minimax polynomial over the reduced fractional
//! part: the same range-reduction-plus-polynomial shape used throughout
//! software math libraries, adapted here to run entirely over [`F32`]
//! arithmetic instead of the host FPU.

use crate::bits::F32;
use crate::constants::{EXP2_POLY, LN_2, LOG2_E, LOG2_POLY};
use crate::round::{floor, trunc};

/// Renormalizes a `decompose()` triple so the significand is a full 24-bit
/// value with bit 23 set, giving the true (not subnormal-shifted) unbiased
/// exponent. A no-op for already-normal values.
fn renormalize(mut exp: i32, mut sig: u32) -> (i32, u32) {
    while sig >> 23 == 0 {
        sig <<= 1;
        exp -= 1;
    }
    while sig >> 24 != 0 {
        sig >>= 1;
        exp += 1;
    }
    (exp, sig)
}

fn horner(coeffs: &[F32], t: F32) -> F32 {
    let mut acc = coeffs[coeffs.len() - 1];
    for &c in coeffs[..coeffs.len() - 1].iter().rev() {
        acc = acc * t + c;
    }
    acc
}

/// Base-2 exponential. `2^x` for any finite `x`; saturates to `+∞`/`+0` on
/// overflow/underflow of the representable exponent range.
#[must_use]
pub fn exp2(x: F32) -> F32 {
    if x.is_nan() {
        return F32::NAN;
    }
    if x.is_positive_infinity() {
        return F32::POS_INF;
    }
    if x.is_negative_infinity() {
        return F32::ZERO;
    }
    let xi = floor(x);
    let xf = x - xi;
    let Ok(xi_i32) = xi.checked_to_i32() else {
        return if xi.is_positive() { F32::POS_INF } else { F32::ZERO };
    };
    let biased = xi_i32 + 127;
    if biased >= 255 {
        return F32::POS_INF;
    }
    if biased <= 0 {
        return F32::ZERO;
    }
    let pow2_xi = F32::from_raw((biased as u32) << 23);
    pow2_xi * horner(&EXP2_POLY, xf)
}

/// Natural exponential, `e^x`, computed as `exp2(x * log2(e))`.
#[must_use]
pub fn exp(x: F32) -> F32 {
    exp2(x * LOG2_E)
}

/// `e^x - 1`, computed directly from [`exp`]. Loses relative precision for
/// `x` very close to zero, same as any `expm1` built atop `exp` rather than
/// its own dedicated series.
#[must_use]
pub fn expm1(x: F32) -> F32 {
    exp(x) - F32::ONE
}

/// Base-2 logarithm. `-∞` for `±0`, NaN for negative operands, `+∞` for
/// `+∞`.
#[must_use]
pub fn log2(x: F32) -> F32 {
    if x.is_nan() || x.is_negative() {
        return F32::NAN;
    }
    if x.is_zero() {
        return F32::NEG_INF;
    }
    if x.is_positive_infinity() {
        return F32::POS_INF;
    }
    let (_, exp, sig) = x.decompose();
    let (true_exp, true_sig) = renormalize(exp, sig);
    let mantissa = F32::assemble(false, 0, u64::from(true_sig), 0);
    let t = mantissa - F32::ONE;
    let frac = horner(&LOG2_POLY, t) * t;
    F32::from_i32(true_exp) + frac
}

/// Natural logarithm, computed as `log2(x) * ln(2)`.
#[must_use]
pub fn log(x: F32) -> F32 {
    log2(x) * LN_2
}

/// `ln(1 + x)`, computed directly from [`log`].
#[must_use]
pub fn log1p(x: F32) -> F32 {
    log(F32::ONE + x)
}

fn is_odd_integer(v: F32) -> bool {
    if trunc(v) != v {
        return false;
    }
    match v.checked_to_i32() {
        Ok(i) => i & 1 != 0,
        Err(_) => false,
    }
}

/// `x^y` with IEEE-754 edge-case handling: `pow(x, 0) == 1` for any `x`
/// (including NaN), `pow(1, y) == 1` for any `y` (including NaN),
/// `pow(-1, ±∞) == 1`, negative bases require an integer exponent (else
/// NaN) and flip sign for odd integer exponents, and the usual
/// zero/infinity combinations. The general case is `exp2(y * log2(x))`.
#[must_use]
pub fn pow(x: F32, y: F32) -> F32 {
    if y.is_zero() {
        return F32::ONE;
    }
    if x == F32::ONE {
        return F32::ONE;
    }
    if x.is_nan() || y.is_nan() {
        return F32::NAN;
    }
    if x.is_zero() {
        let result_is_inf = y.is_negative();
        let odd = is_odd_integer(y);
        return match (result_is_inf, x.is_negative() && odd) {
            (true, true) => F32::NEG_INF,
            (true, false) => F32::POS_INF,
            (false, true) => F32::NEG_ZERO,
            (false, false) => F32::ZERO,
        };
    }
    if x == F32::MINUS_ONE && y.is_infinity() {
        return F32::ONE;
    }
    if y.is_positive_infinity() {
        return if x.abs() > F32::ONE { F32::POS_INF } else { F32::ZERO };
    }
    if y.is_negative_infinity() {
        return if x.abs() > F32::ONE { F32::ZERO } else { F32::POS_INF };
    }
    if x.is_positive_infinity() {
        return if y.is_negative() { F32::ZERO } else { F32::POS_INF };
    }
    if x.is_negative_infinity() {
        let odd = is_odd_integer(y);
        return match (y.is_negative(), odd) {
            (true, true) => F32::NEG_ZERO,
            (true, false) => F32::ZERO,
            (false, true) => F32::NEG_INF,
            (false, false) => F32::POS_INF,
        };
    }
    if x.is_negative() {
        if trunc(y) != y {
            return F32::NAN;
        }
        let magnitude = exp2(y * log2(x.abs()));
        return if is_odd_integer(y) { magnitude.negate() } else { magnitude };
    }
    exp2(y * log2(x))
}
