//! Scalar helpers on `f32`.

/// Clamp `x` into `[0, 1]`.
///
/// NaN propagates unchanged.
#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation `a + t * (b - a)`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Inverse of [`lerp`]: where `x` falls between `a` and `b`.
///
/// The result is not saturated, so values outside `[a, b]` map outside
/// `[0, 1]`. Returns a non-finite value when `a == b`.
#[inline]
pub fn unlerp(a: f32, b: f32, x: f32) -> f32 {
    (x - a) / (b - a)
}

/// Floor-based fractional part, always in `[0, 1)` for finite input.
///
/// Differs from [`f32::fract`] for negative values: `frac(-0.25) == 0.75`.
#[inline]
pub fn frac(x: f32) -> f32 {
    x - x.floor()
}

/// Round half to even, e.g. `round_even(0.5) == 0.0`, `round_even(1.5) == 2.0`.
#[inline]
pub fn round_even(x: f32) -> f32 {
    x.round_ties_even()
}

/// Branch-free style select: `b` when `condition` holds, otherwise `a`.
#[inline]
pub fn select(a: f32, b: f32, condition: bool) -> f32 {
    if condition { b } else { a }
}

/// Periodic modulo used by the dented shapes. Same as [`frac`].
#[inline]
pub fn nfmod(a: f32) -> f32 {
    frac(a)
}

/// Rescale a value centred on `0.5` by steepness `s`.
///
/// `change_steepness(0.5, s) == 0.5` for any `s`; larger `s` pushes values
/// away from the midpoint.
#[inline]
pub fn change_steepness(x: f32, s: f32) -> f32 {
    s * (x + 0.5) - s + 0.5
}
