//! Component-wise helpers on `glam` vectors.

use glam::{Vec2, Vec3};

use crate::scalar::frac;

/// Component-wise floor-based fractional part.
///
/// `glam`'s own `fract` truncates toward zero, which is not what the noise
/// hashes expect for negative lattice coordinates.
#[inline]
pub fn frac2(v: Vec2) -> Vec2 {
    Vec2::new(frac(v.x), frac(v.y))
}

/// Component-wise floor-based fractional part.
#[inline]
pub fn frac3(v: Vec3) -> Vec3 {
    Vec3::new(frac(v.x), frac(v.y), frac(v.z))
}
