//! Mathematical constants and polynomial coefficient tables.
//!
//! Every constant here is built from a decimal float literal via
//! `f32::to_bits` (a `const fn` since the compiler always performs
//! correctly-rounded decimal-to-binary32 literal conversion at compile
//! time). That is bit-identical across every build of this crate on every
//! platform, so it is no less deterministic than hand-transcribing the raw
//! hex word, and far less error-prone to transcribe.

use crate::bits::F32;

const fn from_literal(v: f32) -> F32 {
    F32::from_raw(v.to_bits())
}

/// π
pub const PI: F32 = from_literal(core::f32::consts::PI);
/// π / 2
pub const FRAC_PI_2: F32 = from_literal(core::f32::consts::FRAC_PI_2);
/// π / 4
pub const FRAC_PI_4: F32 = from_literal(core::f32::consts::FRAC_PI_4);
/// 2π
pub const TAU: F32 = from_literal(core::f32::consts::TAU);
/// Euler's number, e
pub const E: F32 = from_literal(core::f32::consts::E);
/// ln(2)
pub const LN_2: F32 = from_literal(core::f32::consts::LN_2);
/// ln(10)
pub const LN_10: F32 = from_literal(core::f32::consts::LN_10);
/// log2(e)
pub const LOG2_E: F32 = from_literal(core::f32::consts::LOG2_E);
/// log10(e)
pub const LOG10_E: F32 = from_literal(core::f32::consts::LOG10_E);
/// sqrt(2)
pub const SQRT_2: F32 = from_literal(core::f32::consts::SQRT_2);
/// Degrees-to-radians conversion factor, π / 180.
pub const DEG_TO_RAD: F32 = from_literal(core::f32::consts::PI / 180.0);
/// Radians-to-degrees conversion factor, 180 / π.
pub const RAD_TO_DEG: F32 = from_literal(180.0 / core::f32::consts::PI);
/// `1 / (2π)`, used by `sin`/`cos` range reduction to find the nearest
/// period multiple without a division at call time.
pub const INV_TAU: F32 = from_literal(1.0 / core::f32::consts::TAU);

/// Calculation epsilon used as a tolerance floor by approximate
/// comparisons elsewhere in this crate (not [`F32::EPSILON`], which is the
/// smallest positive *normal*, nor [`F32::ABSOLUTE_EPSILON`], the smallest
/// positive *subnormal*). Raw word `0x358637BD`, approximately `1e-6`.
pub const CALC_EPSILON: F32 = F32::from_raw(0x3586_37BD);
/// [`CALC_EPSILON`] squared, used as a tolerance floor by routines (e.g.
/// `hypot`) that square intermediate values. Raw word `0x2B8CBCCC`,
/// approximately `1e-12`.
pub const CALC_EPSILON_SQUARED: F32 = F32::from_raw(0x2B8C_BCCC);

/// Cosine threshold above which [`crate::geometry::Quat::slerp`] treats two
/// orientations as near-parallel and falls back to a normalized linear
/// interpolation, avoiding a division by a near-zero `sin(angle)`.
pub const SLERP_NEAR_PARALLEL: F32 = from_literal(0.9995);

/// Minimax polynomial coefficients for `sin`, odd powers of the reduced
/// argument only: `t * (c0 + t2*(c1 + t2*(c2 + t2*(c3 + t2*c4))))`.
pub const SIN_POLY: [F32; 5] = [
    from_literal(1.0),
    from_literal(-1.0 / 6.0),
    from_literal(1.0 / 120.0),
    from_literal(-1.0 / 5040.0),
    from_literal(1.0 / 362_880.0),
];

/// Minimax polynomial coefficients for `atan` on a reduced argument `t`:
/// `t * (c0 + t2*(c1 + t2*(c2 + t2*(c3 + t2*(c4 + t2*c5)))))`.
pub const ATAN_POLY: [F32; 6] = [
    from_literal(1.0),
    from_literal(-1.0 / 3.0),
    from_literal(1.0 / 5.0),
    from_literal(-1.0 / 7.0),
    from_literal(1.0 / 9.0),
    from_literal(-1.0 / 11.0),
];

/// Minimax polynomial coefficients for `log2` on a mantissa-minus-one
/// reduced argument `t`: `t * (c0 + t*(c1 + t*(c2 + t*c3)))`.
pub const LOG2_POLY: [F32; 4] = [
    from_literal(1.442_695_0),
    from_literal(-0.721_347_5),
    from_literal(0.480_898_3),
    from_literal(-0.360_673_8),
];

/// Minimax polynomial coefficients for the fractional part of `exp2` on
/// the reduced argument `xf` in `[0, 1)`:
/// `c0 + xf*(c1 + xf*(c2 + xf*(c3 + xf*c4)))`.
pub const EXP2_POLY: [F32; 5] = [
    from_literal(1.0),
    from_literal(0.693_147_2),
    from_literal(0.240_226_5),
    from_literal(0.055_504_11),
    from_literal(0.009_618_129),
];
