//! Quaternion built on [`F32`], used for rotation and orientation.

use core::ops::Mul;

use crate::bits::F32;
use crate::constants::SLERP_NEAR_PARALLEL;
use crate::geometry::Vec3;
use crate::sqrt::sqrt;
use crate::trig::{acos, sin};

/// A quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy)]
pub struct Quat {
    pub w: F32,
    pub x: F32,
    pub y: F32,
    pub z: F32,
}

impl Quat {
    /// The multiplicative identity (no rotation).
    pub const IDENTITY: Self = Self { w: F32::ONE, x: F32::ZERO, y: F32::ZERO, z: F32::ZERO };

    /// Builds a quaternion from its four components.
    #[must_use]
    pub const fn new(w: F32, x: F32, y: F32, z: F32) -> Self {
        Self { w, x, y, z }
    }

    /// The conjugate `(w, -x, -y, -z)`. Equal to the inverse for unit
    /// quaternions.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Squared length of the 4-vector `(w, x, y, z)`.
    #[must_use]
    pub fn length_squared(self) -> F32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length of the 4-vector `(w, x, y, z)`.
    #[must_use]
    pub fn length(self) -> F32 {
        sqrt(self.length_squared())
    }

    /// Returns a unit quaternion in the same direction. A zero-length
    /// quaternion normalizes to itself rather than dividing into NaNs.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_zero() {
            return self;
        }
        let inv = F32::ONE / len;
        Self::new(self.w * inv, self.x * inv, self.y * inv, self.z * inv)
    }

    /// Rotates `v` by this quaternion, which is assumed to already be unit
    /// length (see [`crate::geometry::Versor`] for a type that guarantees
    /// it). Computed as `q * (0, v) * conjugate(q)`, keeping only the
    /// vector part of the result.
    #[must_use]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let as_quat = Self::new(F32::ZERO, v.x, v.y, v.z);
        let rotated = self * as_quat * self.conjugate();
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }

    /// Spherical linear interpolation between two unit quaternions. Falls
    /// back to linear interpolation (then renormalizes) when the two
    /// orientations are nearly identical, where `sin(angle)` would be too
    /// close to zero to divide by.
    #[must_use]
    pub fn slerp(self, rhs: Self, t: F32) -> Self {
        let mut other = rhs;
        let mut cos_theta = self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z;
        if cos_theta.is_negative() {
            other = Self::new(-other.w, -other.x, -other.y, -other.z);
            cos_theta = -cos_theta;
        }
        if cos_theta > SLERP_NEAR_PARALLEL {
            let lerped = Self::new(
                self.w + (other.w - self.w) * t,
                self.x + (other.x - self.x) * t,
                self.y + (other.y - self.y) * t,
                self.z + (other.z - self.z) * t,
            );
            return lerped.normalize();
        }
        let theta = acos(cos_theta);
        let sin_theta = sin(theta);
        let one_minus_t = F32::ONE - t;
        let w1 = sin(theta * one_minus_t) / sin_theta;
        let w2 = sin(theta * t) / sin_theta;
        Self::new(
            self.w * w1 + other.w * w2,
            self.x * w1 + other.x * w2,
            self.y * w1 + other.y * w2,
            self.z * w1 + other.z * w2,
        )
    }
}

impl Mul for Quat {
    type Output = Self;
    /// Hamilton product.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}
