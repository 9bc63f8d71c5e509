//! Smooth, distance-based primitives: cone and arch carve.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use strata_math::{saturate, unlerp};

/// Horizontal distance under which the cone treats a point as on its axis.
const AXIS_GUARD: f32 = 1.0;

/// Cone described in its own frame: axis along +y through the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    /// Height where the radius is zero (the tip).
    pub min: f32,
    /// Height where the radius reaches `base_radius`.
    pub max: f32,
    /// Radius at `max`.
    pub base_radius: f32,
    /// Weight at distance zero from the surface, before saturation. Values
    /// above 1 widen the fully solid shell around the cone.
    pub outline: f32,
    /// Weight lost per unit of distance from the surface.
    pub falloff: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            base_radius: 1.0,
            outline: 4.0,
            falloff: 0.25,
        }
    }
}

impl ConeParams {
    /// Cone with the default outline (4) and falloff (0.25).
    pub fn new(min: f32, max: f32, base_radius: f32) -> Self {
        Self {
            min,
            max,
            base_radius,
            ..Default::default()
        }
    }
}

/// Smooth cone weight: `saturate(outline - distance_to_cone * falloff)`.
///
/// `p` is relative to the cone axis. The radius at height `y` is
/// `base_radius * unlerp(min, max, y)`; the interpolant is deliberately not
/// saturated, so the cone keeps widening above `max` (the nearest point's
/// height is still clamped to `[min, max]`). Points closer than one unit to
/// the axis snap to it, which keeps the xz direction finite.
pub fn cone(p: Vec3, params: &ConeParams) -> f32 {
    let xz = Vec2::new(p.x, p.z);
    let axis_distance = xz.length();
    let direction = if axis_distance < AXIS_GUARD {
        Vec2::ZERO
    } else {
        xz / axis_distance
    };

    let radius = params.base_radius * unlerp(params.min, params.max, p.y);
    let reach = axis_distance.min(radius);
    let nearest = Vec3::new(
        direction.x * reach,
        p.y.clamp(params.min, params.max),
        direction.y * reach,
    );

    saturate(params.outline - p.distance(nearest) * params.falloff)
}

/// 2D arch cut-out in the xy plane, centred on the origin.
///
/// Below `y = 0.5` the weight is a radial falloff `saturate(1 - |q| * radius)`
/// around `q = (x, min(y + height, 0))`; clamping y keeps the arch from
/// growing past its crown. At and above `y = 0.5` the weight is `0`.
pub fn arch_carve(x: f32, y: f32, height: f32, radius: f32) -> f32 {
    if y >= 0.5 {
        return 0.0;
    }
    let locked = Vec2::new(x, (y + height).min(0.0));
    saturate(1.0 - locked.length() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn tall_cone() -> ConeParams {
        ConeParams::new(0.0, 10.0, 10.0)
    }

    #[test]
    fn test_cone_inside_is_solid() {
        let params = tall_cone();
        assert_eq!(cone(Vec3::new(0.0, 5.0, 0.0), &params), 1.0);
        assert_eq!(cone(Vec3::new(3.0, 5.0, 3.0), &params), 1.0);
    }

    #[test]
    fn test_cone_falloff_outside_surface() {
        let params = tall_cone();
        // radius 10 at y = 10; 14 units outside gives 4 - 14 * 0.25 = 0.5
        let v = cone(Vec3::new(24.0, 10.0, 0.0), &params);
        assert!((v - 0.5).abs() < EPSILON, "Expected 0.5, got {v}");
        assert_eq!(cone(Vec3::new(30.0, 10.0, 0.0), &params), 0.0);
    }

    #[test]
    fn test_cone_axis_guard_keeps_result_finite() {
        let params = tall_cone();
        for p in [Vec3::ZERO, Vec3::new(0.0, -3.0, 0.0), Vec3::new(0.5, 20.0, -0.5)] {
            let v = cone(p, &params);
            assert!(v.is_finite(), "Non-finite cone weight at {p}");
        }
    }

    #[test]
    fn test_cone_below_tip_uses_axis() {
        let params = tall_cone();
        // 20 units below the tip on the axis: 4 - 20 * 0.25 = -1
        assert_eq!(cone(Vec3::new(0.0, -20.0, 0.0), &params), 0.0);
        // 8 units below: 4 - 2 = 2, saturated
        assert_eq!(cone(Vec3::new(0.0, -8.0, 0.0), &params), 1.0);
    }

    #[test]
    fn test_cone_range() {
        let params = ConeParams {
            outline: 1.0,
            falloff: 0.5,
            ..tall_cone()
        };
        for i in 0..400 {
            let p = Vec3::new((i % 20) as f32 - 10.0, (i / 20) as f32 - 5.0, 2.0);
            let v = cone(p, &params);
            assert!((0.0..=1.0).contains(&v), "Cone weight {v} out of range at {p}");
        }
    }

    #[test]
    fn test_arch_zero_above_threshold() {
        assert_eq!(arch_carve(0.0, 0.5, 0.0, 1.0), 0.0);
        assert_eq!(arch_carve(0.0, 3.0, -10.0, 1.0), 0.0);
    }

    #[test]
    fn test_arch_radial_falloff() {
        assert_eq!(arch_carve(0.0, 0.0, 0.0, 1.0), 1.0);
        let v = arch_carve(0.5, 0.2, 0.0, 1.0);
        assert!((v - 0.5).abs() < EPSILON, "Expected 0.5, got {v}");
    }

    #[test]
    fn test_arch_crown_is_flat() {
        // Anywhere between y + height = 0 and y = 0.5 the locked y is 0.
        let a = arch_carve(0.3, -0.5, 1.0, 1.0);
        let b = arch_carve(0.3, 0.4, 1.0, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_arch_fades_below() {
        assert_eq!(arch_carve(0.0, -5.0, 2.0, 1.0), 0.0);
    }
}
