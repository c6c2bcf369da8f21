// Inline unit tests lean on `.unwrap()`/`.expect()` for brevity; the
// lib-code-wide deny still applies to everything outside `#[cfg(test)]`.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
//! Deterministic software IEEE-754 binary32 arithmetic and math library.
//!
//! This crate implements a cycle-independent, platform-independent `f32`
//! replacement for lockstep-synchronized simulations (networked games,
//! replay systems, physics) where the hardware FPU's rounding, denormal
//! handling, transcendental approximations, and compiler reorderings would
//! desynchronize two machines given bit-identical inputs.
//!
//! 1. **Core:** [`F32`], a 32-bit value type carrying a raw IEEE-754 word,
//!    with the four arithmetic operations, comparisons, integer
//!    conversions, rounding, `fmod`, `sqrt`, transcendentals, and
//!    trigonometry all implemented as pure bit-level functions over that
//!    word, never by delegating to the host FPU.
//! 2. **Geometry:** [`geometry::Vec3`], [`geometry::Quat`], and
//!    [`geometry::Versor`], pure compositions on top of `F32`.
//! 3. **Diagnostics:** [`error`] types for the crate's few fallible entry
//!    points, and `Display`/`FromStr` impls that are the only permitted use
//!    of the host FPU (for human-readable decimal text, never arithmetic).

/// Bit layout, classification, and the raw-word constants of [`F32`].
pub mod bits;
/// Arithmetic core: +, −, ×, ÷, negation, comparisons, integer conversions.
pub mod arith;
/// Rounding and modulo: round, floor, ceil, trunc, fmod, remainder-quotient.
pub mod round;
/// Integer-domain square root.
pub mod sqrt;
/// Transcendental functions: exp, expm1, log, log1p, log2, pow.
pub mod transcendental;
/// Trigonometric functions: sin, cos, tan, atan, atan2, acos, asin, hypot.
pub mod trig;
/// Mathematical constants and polynomial coefficient tables, stored as raw words.
pub mod constants;
/// Fallible entry points: checked integer conversion and decimal parsing.
pub mod error;
/// Vector and quaternion geometry built on [`F32`].
pub mod geometry;

pub use bits::F32;
pub use error::{ConversionError, ParseError};
pub use geometry::{Quat, Vec3, Versor};
