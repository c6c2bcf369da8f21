//! Vector and quaternion geometry built on [`crate::F32`].
//!
//! This layer is a straightforward composition of the arithmetic core: no
//! new bit-level algorithms live here, only vector/quaternion algebra
//! expressed in terms of `F32` operators and [`crate::sqrt::sqrt`]/
//! [`crate::trig`] for lengths and `slerp`.

mod quat;
mod versor;
mod vec3;

pub use quat::Quat;
pub use versor::Versor;
pub use vec3::Vec3;
