//! Axis-aligned occupancy tests: boxes, dented boxes, cylinder, prism.
//!
//! Conventions shared by every shape here: x and z extents are centred on
//! the anchor, y runs from `anchor.y` up to `anchor.y + size.y`. Range tests
//! are inclusive on both ends.

use glam::{Vec2, Vec3};
use strata_math::{lerp, nfmod, round_even, saturate, select, unlerp};

#[inline]
fn within(v: f32, lo: f32, hi: f32) -> f32 {
    select(0.0, 1.0, v >= lo && v <= hi)
}

#[inline]
fn within_centered(v: f32, center: f32, extent: f32) -> f32 {
    within(v, center - extent * 0.5, center + extent * 0.5)
}

/// Box occupancy, exactly `0` or `1`.
pub fn box_occupancy(p: Vec3, anchor: Vec3, size: Vec3) -> f32 {
    let x = within_centered(p.x, anchor.x, size.x);
    let y = within(p.y, anchor.y, anchor.y + size.y);
    let z = within_centered(p.z, anchor.z, size.z);
    x * y * z
}

/// Box whose top face is notched periodically along x.
///
/// The top is lowered by `dent_depth` wherever
/// `round_even(frac((p.x - anchor.x) * dent_size))` is 1, i.e. on the upper
/// half of each period of length `1 / dent_size`.
pub fn box_dented_x(p: Vec3, anchor: Vec3, size: Vec3, dent_size: f32, dent_depth: f32) -> f32 {
    let dent = round_even(nfmod((p.x - anchor.x) * dent_size)) * dent_depth;
    let x = within_centered(p.x, anchor.x, size.x);
    let y = within(p.y, anchor.y, anchor.y + size.y - dent);
    let z = within_centered(p.z, anchor.z, size.z);
    x * y * z
}

/// [`box_dented_x`] with the notches running along z.
pub fn box_dented_z(p: Vec3, anchor: Vec3, size: Vec3, dent_size: f32, dent_depth: f32) -> f32 {
    let dent = round_even(nfmod((p.z - anchor.z) * dent_size)) * dent_depth;
    let x = within_centered(p.x, anchor.x, size.x);
    let y = within(p.y, anchor.y, anchor.y + size.y - dent);
    let z = within_centered(p.z, anchor.z, size.z);
    x * y * z
}

/// Vertical (frustum) cylinder standing on `anchor`.
///
/// The radius is interpolated from `radius_bottom` to `radius_top` over the
/// height. Inside the y range the weight is `1 - saturate(d / r)` for
/// horizontal distance `d`, so it peaks at `1` on the axis and reaches `0` at
/// the wall. A zero radius (the tip of a frustum tapering to a point) has no
/// interior and weighs `0`.
pub fn cylinder_y(p: Vec3, anchor: Vec3, height: f32, radius_bottom: f32, radius_top: f32) -> f32 {
    let t = saturate(unlerp(anchor.y, anchor.y + height, p.y));
    let radius = lerp(radius_bottom, radius_top, t);
    let d = Vec2::new(p.x, p.z).distance(Vec2::new(anchor.x, anchor.z));
    if radius <= 0.0 {
        return 0.0;
    }
    let radial = 1.0 - saturate(d / radius);
    radial * within(p.y, anchor.y, anchor.y + height)
}

/// Triangular prism running along z, with its ridge above `anchor.x`.
///
/// The roof height falls linearly from `size.y` at the ridge to `0` at
/// `anchor.x ± size.x / 2`. The result is the saturated height margin under
/// the roof, so it fades to `0` over the last unit below the slope.
pub fn triangle_prism_x(p: Vec3, anchor: Vec3, size: Vec3) -> f32 {
    let z = within_centered(p.z, anchor.z, size.z);
    let y = within(p.y, anchor.y, anchor.y + size.y);
    let roof = size.y * (1.0 - ((p.x - anchor.x) / size.x * 2.0).abs());
    saturate((roof - (p.y - anchor.y)) * y * z)
}
