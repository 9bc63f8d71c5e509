//! 2D Voronoi edge distance with per-cell identifiers.

use glam::{IVec2, Vec2, Vec3, Vec3Swizzles};
use strata_math::{frac2, frac3};

/// Squared offset below which a candidate is treated as the nearest cell itself.
const SELF_CELL_EPSILON: f32 = 1e-5;

/// Hash a 2D point to two pseudo-random values in `[0, 1)`.
///
/// Sine-free arithmetic hash, stable across platforms for finite input.
pub fn hash2_2(x: Vec2) -> Vec2 {
    let mut p3 = frac3(Vec3::new(x.x, x.y, x.x) * Vec3::new(0.1031, 0.1030, 0.0973));
    p3 += p3.dot(p3.yzx() + 33.33);
    frac2((p3.xx() + p3.yz()) * p3.zy())
}

/// Distance from `x` to the nearest Voronoi cell border, plus an id for the
/// cell containing `x`.
///
/// Returns `Vec2(edge_distance, cell_id)`. The id is the second hash
/// component of the owning cell, in `[0, 1)`, and is constant within a cell.
///
/// First pass: find the nearest feature point in the 3×3 block. Second pass:
/// over the 5×5 block around that cell, take the minimum distance to the
/// perpendicular bisector between the nearest feature and each other feature.
pub fn voronoi_distance(x: Vec2) -> Vec2 {
    let p = x.floor().as_ivec2();
    let f = frac2(x);

    let mut nearest_cell = IVec2::ZERO;
    let mut nearest = Vec2::ZERO;
    let mut cell_id = 0.0;
    let mut best = 8.0;

    for j in -1..=1 {
        for i in -1..=1 {
            let b = IVec2::new(i, j);
            let offset = hash2_2((p + b).as_vec2());
            let r = b.as_vec2() + offset - f;
            let d = r.dot(r);
            if d < best {
                best = d;
                nearest = r;
                nearest_cell = b;
                cell_id = offset.y;
            }
        }
    }

    let mut edge = 8.0_f32;
    for j in -2..=2 {
        for i in -2..=2 {
            let b = nearest_cell + IVec2::new(i, j);
            let r = b.as_vec2() + hash2_2((p + b).as_vec2()) - f;
            let towards = r - nearest;
            if towards.length_squared() <= SELF_CELL_EPSILON {
                continue;
            }
            let d = (0.5 * (nearest + r)).dot(towards.normalize());
            edge = edge.min(d);
        }
    }

    Vec2::new(edge, cell_id)
}
