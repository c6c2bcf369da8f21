//! Bit layout, classification, and the raw-word constants of [`F32`].
//!
//! `F32` is an immutable 32-bit word interpreted as IEEE-754 binary32:
//! bit 31 is the sign, bits 30..23 are the biased exponent (bias 127), and
//! bits 22..0 are the mantissa (with an implicit leading 1 for normals).
//! Every operation elsewhere in this crate is a pure function from one or
//! two `F32` raw words to a new raw word; this module owns only the
//! decode/encode/classify primitives those operations share.

use core::fmt;

/// Bias applied to the IEEE-754 binary32 exponent field.
pub const EXPONENT_BIAS: i32 = 127;

/// Number of explicit mantissa bits in a binary32 significand.
pub const MANTISSA_BITS: u32 = 23;

const SIGN_MASK: u32 = 0x8000_0000;
const EXPONENT_MASK: u32 = 0x7F80_0000;
const MANTISSA_MASK: u32 = 0x007F_FFFF;

/// A deterministic, software-evaluated IEEE-754 binary32 value.
///
/// Two `F32`s constructed from the same raw word are indistinguishable, and
/// every operation in this crate maps `(raw_a, raw_b, op)` to `raw_result`
/// identically on every platform; that bit-exactness is this type's entire
/// reason to exist.
// `PartialEq` is implemented by hand in `crate::arith` with IEEE-754
// semantics (`+0 == -0`, `NaN != NaN`); deriving it here would compare raw
// words instead. For the same reason `F32` does not implement `Eq`; see
// `KeyF32` below for a structural-equality key type that can.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct F32(u32);

impl F32 {
    /// Positive zero.
    pub const ZERO: Self = Self(0x0000_0000);
    /// Negative zero. Distinct raw word from [`F32::ZERO`]; compares equal to it.
    pub const NEG_ZERO: Self = Self(0x8000_0000);
    /// The value `1.0`.
    pub const ONE: Self = Self(0x3F80_0000);
    /// The value `-1.0`.
    pub const MINUS_ONE: Self = Self(0xBF80_0000);
    /// Positive infinity.
    pub const POS_INF: Self = Self(0x7F80_0000);
    /// Negative infinity.
    pub const NEG_INF: Self = Self(0xFF80_0000);
    /// The canonical quiet NaN. Every NaN-producing operation in this crate
    /// returns exactly this raw word.
    pub const NAN: Self = Self(0xFFC0_0000);
    /// The largest finite representable value.
    pub const MAX: Self = Self(0x7F7F_FFFF);
    /// The most negative finite representable value.
    pub const MIN: Self = Self(0xFF7F_FFFF);
    /// The smallest positive subnormal value.
    pub const ABSOLUTE_EPSILON: Self = Self(0x0000_0001);
    /// The smallest positive normal value.
    pub const EPSILON: Self = Self(0x0080_0000);

    /// Constructs an `F32` from its raw 32-bit IEEE-754 word. Zero-cost.
    #[must_use]
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit IEEE-754 word. Zero-cost.
    #[must_use]
    #[inline]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// Reinterprets a host `f32`'s bit pattern as an `F32`. Pure bit
    /// reinterpretation, performing no arithmetic on the host float.
    #[must_use]
    #[inline]
    pub fn from_float_bits(value: f32) -> Self {
        Self(value.to_bits())
    }

    /// Reinterprets this `F32`'s raw word as a host `f32`. Pure bit
    /// reinterpretation; the only further use of the result should be
    /// diagnostics (e.g. the [`fmt::Display`] impl below), never arithmetic.
    #[must_use]
    #[inline]
    pub fn to_float_bits(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Sign bit: `false` for positive (including +0, +∞), `true` for negative.
    #[must_use]
    #[inline]
    pub const fn sign_bit(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Biased exponent field, 0..=255.
    #[must_use]
    #[inline]
    pub(crate) const fn biased_exponent(self) -> u32 {
        (self.0 & EXPONENT_MASK) >> MANTISSA_BITS
    }

    /// Raw 23-bit mantissa field (no implicit bit).
    #[must_use]
    #[inline]
    pub(crate) const fn raw_mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    /// `true` if the sign bit is clear (+0 and +∞ included).
    #[must_use]
    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.sign_bit()
    }

    /// `true` if the sign bit is set (−0 included).
    #[must_use]
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.sign_bit()
    }

    /// `true` for +0 or −0.
    #[must_use]
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.biased_exponent() == 0 && self.raw_mantissa() == 0
    }

    /// `true` for a subnormal (biased exponent 0, non-zero mantissa).
    #[must_use]
    #[inline]
    pub const fn is_subnormal(self) -> bool {
        self.biased_exponent() == 0 && self.raw_mantissa() != 0
    }

    /// `true` for a normal value (biased exponent in 1..=254).
    #[must_use]
    #[inline]
    pub const fn is_normal(self) -> bool {
        let e = self.biased_exponent();
        e != 0 && e != 0xFF
    }

    /// `true` for either infinity.
    #[must_use]
    #[inline]
    pub const fn is_infinity(self) -> bool {
        self.biased_exponent() == 0xFF && self.raw_mantissa() == 0
    }

    /// `true` for +∞ exactly.
    #[must_use]
    #[inline]
    pub const fn is_positive_infinity(self) -> bool {
        self.0 == Self::POS_INF.0
    }

    /// `true` for −∞ exactly.
    #[must_use]
    #[inline]
    pub const fn is_negative_infinity(self) -> bool {
        self.0 == Self::NEG_INF.0
    }

    /// `true` for any NaN (this crate makes no signaling/quiet distinction).
    #[must_use]
    #[inline]
    pub const fn is_nan(self) -> bool {
        self.biased_exponent() == 0xFF && self.raw_mantissa() != 0
    }

    /// `true` for any finite value (zero, subnormal, or normal).
    #[must_use]
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.biased_exponent() != 0xFF
    }

    /// Decomposes a finite, non-zero value into `(sign, unbiased_exponent,
    /// significand)` where `significand` has the implicit leading bit
    /// restored at bit [`MANTISSA_BITS`] (i.e. it is a 24-bit value for
    /// normals). Subnormals are reported with `unbiased_exponent ==
    /// 1 - EXPONENT_BIAS` and the raw mantissa as the significand (no
    /// implicit bit, since subnormals have none).
    ///
    /// Callers must not invoke this on zero, infinity, or NaN.
    #[must_use]
    #[inline]
    pub(crate) const fn decompose(self) -> (bool, i32, u32) {
        let sign = self.sign_bit();
        let biased = self.biased_exponent();
        if biased == 0 {
            (sign, 1 - EXPONENT_BIAS, self.raw_mantissa())
        } else {
            (
                sign,
                biased as i32 - EXPONENT_BIAS,
                self.raw_mantissa() | (1 << MANTISSA_BITS),
            )
        }
    }

    /// Assembles a finite result from sign, unbiased exponent, and a
    /// significand with the implicit bit at bit [`MANTISSA_BITS`],
    /// normalizing, rounding by truncation, and clamping to infinity or
    /// (subnormal) zero exactly as the addition algorithm in this crate's
    /// design does. `significand` may carry extra low guard bits; `shift`
    /// says how many of its low bits are guard bits to discard once the
    /// result is otherwise normalized.
    #[must_use]
    pub(crate) fn assemble(sign: bool, mut exponent: i32, mut significand: u64, guard: u32) -> Self {
        if significand == 0 {
            return if sign { Self::NEG_ZERO } else { Self::ZERO };
        }
        // Normalize so that bit `MANTISSA_BITS + guard` is the top set bit.
        let top = MANTISSA_BITS + guard;
        while significand >> (top + 1) != 0 {
            significand >>= 1;
            exponent += 1;
        }
        while significand >> top == 0 {
            significand <<= 1;
            exponent -= 1;
        }
        if exponent >= 0xFF - EXPONENT_BIAS {
            return if sign { Self::NEG_INF } else { Self::POS_INF };
        }
        if exponent <= -EXPONENT_BIAS {
            // Subnormal or underflow to zero: shift right by (1 - exponent_biased).
            let denorm_shift = (1 - (exponent + EXPONENT_BIAS)) as u32 + guard;
            if denorm_shift >= 64 {
                return if sign { Self::NEG_ZERO } else { Self::ZERO };
            }
            let mantissa = (significand >> denorm_shift) as u32 & MANTISSA_MASK;
            let word = (sign as u32) << 31 | mantissa;
            return Self(word);
        }
        let mantissa = ((significand >> guard) as u32) & MANTISSA_MASK;
        let biased = (exponent + EXPONENT_BIAS) as u32;
        let word = (sign as u32) << 31 | (biased << MANTISSA_BITS) | mantissa;
        Self(word)
    }
}

impl fmt::Debug for F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F32(0x{:08X} = {})", self.0, self.to_float_bits())
    }
}

impl fmt::Display for F32 {
    /// Converts to decimal text by reinterpreting to the host `f32` and
    /// deferring to the host formatter. Diagnostics only: the single
    /// permitted use of the host FPU pipeline for anything beyond bit
    /// reinterpretation (alongside [`core::str::FromStr`], see
    /// [`crate::error`]).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_float_bits(), f)
    }
}

/// A wrapper giving `F32` structural equality and hashing distinct from
/// its IEEE `==`: `+0` equals `-0` (as with `==`), but **all NaNs are
/// structurally equal to each other**, which IEEE `==` denies. Use this as
/// a map/set key where `F32` itself cannot implement `Eq` (its `PartialEq`
/// is IEEE equality, which is not reflexive for NaN).
#[derive(Clone, Copy, Debug)]
pub struct KeyF32(pub F32);

impl PartialEq for KeyF32 {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.0, other.0);
        match (a.is_nan(), b.is_nan()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => {
                if a.is_zero() && b.is_zero() {
                    true
                } else {
                    a.to_raw() == b.to_raw()
                }
            }
        }
    }
}

impl Eq for KeyF32 {}

impl core::hash::Hash for KeyF32 {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        let v = self.0;
        let key = if v.is_zero() {
            0u32
        } else if v.is_nan() {
            F32::NAN.to_raw()
        } else {
            v.to_raw()
        };
        key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip_is_exact() {
        for raw in [0u32, 1, 0x7F80_0000, 0xFFC0_0000, 0x8000_0000, 0xFFFF_FFFF] {
            assert_eq!(F32::from_raw(raw).to_raw(), raw);
        }
    }

    #[test]
    fn classification_covers_every_region() {
        assert!(F32::ZERO.is_zero() && !F32::ZERO.is_negative());
        assert!(F32::NEG_ZERO.is_zero() && F32::NEG_ZERO.is_negative());
        assert!(F32::from_raw(0x0000_0001).is_subnormal());
        assert!(F32::ONE.is_normal());
        assert!(F32::POS_INF.is_infinity() && F32::POS_INF.is_positive_infinity());
        assert!(F32::NEG_INF.is_infinity() && F32::NEG_INF.is_negative_infinity());
        assert!(F32::NAN.is_nan());
        assert!(!F32::NAN.is_finite());
        assert!(F32::ONE.is_finite());
    }

    #[test]
    fn key_f32_unifies_nans_and_zeros() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(KeyF32(F32::NAN));
        assert!(!set.insert(KeyF32(F32::from_raw(0xFFC0_1234))));
        set.insert(KeyF32(F32::ZERO));
        assert!(!set.insert(KeyF32(F32::NEG_ZERO)));
    }
}
