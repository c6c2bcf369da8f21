//! A quaternion known to be unit length.

use crate::bits::F32;
use crate::geometry::{Quat, Vec3};

/// A [`Quat`] that is unit length by construction: every constructor
/// normalizes its input, so every `Versor` in existence is safe to use in
/// `rotate`/`slerp` without a further length check.
#[derive(Debug, Clone, Copy)]
pub struct Versor(Quat);

impl Versor {
    /// The identity rotation.
    pub const IDENTITY: Self = Self(Quat::IDENTITY);

    /// Normalizes `q` and wraps it. A zero-length `q` normalizes to
    /// itself (see [`Quat::normalize`]), so this never panics or returns
    /// an error, but a `Versor` built from a zero quaternion carries that
    /// degenerate, non-unit value forward.
    #[must_use]
    pub fn new(q: Quat) -> Self {
        Self(q.normalize())
    }

    /// Wraps `q` without normalizing it. Callers must already know `q` is
    /// unit length (e.g. it came from another `Versor`).
    #[must_use]
    pub const fn from_normalized_unchecked(q: Quat) -> Self {
        Self(q)
    }

    /// The underlying quaternion.
    #[must_use]
    pub const fn quat(self) -> Quat {
        self.0
    }

    /// Rotates `v` by this orientation.
    #[must_use]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        self.0.rotate(v)
    }

    /// Composes two rotations: applying the result rotates by `self` then
    /// by `rhs`.
    #[must_use]
    pub fn then(self, rhs: Self) -> Self {
        Self::from_normalized_unchecked(rhs.0 * self.0)
    }

    /// The inverse rotation.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::from_normalized_unchecked(self.0.conjugate())
    }

    /// Spherical linear interpolation toward `rhs`.
    #[must_use]
    pub fn slerp(self, rhs: Self, t: F32) -> Self {
        Self::from_normalized_unchecked(self.0.slerp(rhs.0, t))
    }
}
