//! Fallible entry points into [`crate::F32`].
//!
//! Every arithmetic, rounding, and transcendental operation in this crate
//! is total: it always returns an `F32` (possibly NaN or infinity), never a
//! `Result`. The two exceptions are checked integer conversion, where the
//! caller may want an error instead of a silently saturated value, and
//! decimal text parsing, which can fail for the usual reasons any number
//! parser can. Both use host-FPU-free paths except [`core::str::FromStr`],
//! which, like [`core::fmt::Display`], is a permitted diagnostics-only
//! use of the host float parser.

use core::str::FromStr;

use crate::bits::F32;

/// Why a conversion from `F32` to an integer type failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The value was NaN or infinite; no integer corresponds to it.
    #[error("value is NaN or infinite, not representable as an integer")]
    NotFinite,
    /// The value is finite but its truncated magnitude does not fit the
    /// target integer type.
    #[error("value is out of range for the target integer type")]
    OutOfRange,
}

/// Why [`str::parse::<F32>`] failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The host decimal parser rejected the text outright.
    #[error("invalid float literal: {0}")]
    Invalid(#[from] core::num::ParseFloatError),
}

impl FromStr for F32 {
    type Err = ParseError;

    /// Parses decimal text via the host `f32` parser and reinterprets its
    /// bits. This is diagnostics-only input plumbing (config files, test
    /// fixtures, CLI arguments); the resulting `F32` then participates in
    /// this crate's deterministic arithmetic like any other value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f32 = s.parse()?;
        Ok(Self::from_float_bits(value))
    }
}
