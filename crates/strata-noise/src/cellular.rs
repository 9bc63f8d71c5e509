//! Cellular (Worley) noise over a jittered integer lattice.
//!
//! Each lattice cell owns one feature point, jittered by an entry of
//! [`CELL_3D`] selected from a hash of the cell coordinate and seed. The
//! evaluator scans the 3×3×3 block of cells around the sample and keeps the
//! three smallest squared distances.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::cell_table::CELL_3D;

const X_PRIME: i32 = 1619;
const Y_PRIME: i32 = 31337;
const Z_PRIME: i32 = 6971;

/// Starting value for the running minima; larger than any in-block distance.
const FAR: f32 = 999_999.0;

/// How the 3×3×3 search block is anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeOrigin {
    /// Block starts at `floor(p) - 1` on every axis.
    #[default]
    PerAxis,
    /// Block starts at `floor(p.x) - 1` on all three axes.
    ///
    /// Reproduces fields generated before the per-axis fix. Away from the
    /// `x = y = z` diagonal the block no longer surrounds the sample, which
    /// stretches cells along y and z.
    XOnly,
}

/// The three smallest squared feature distances, `d1 <= d2 <= d3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellDistances {
    /// Nearest.
    pub d1: f32,
    /// Second nearest.
    pub d2: f32,
    /// Third nearest.
    pub d3: f32,
}

impl CellDistances {
    fn new() -> Self {
        Self {
            d1: FAR,
            d2: FAR,
            d3: FAR,
        }
    }

    /// Shift-and-insert. Strict comparisons, so on ties the earlier scanned
    /// cell keeps the lower slot.
    #[inline]
    fn insert(&mut self, d: f32) {
        if d < self.d1 {
            self.d3 = self.d2;
            self.d2 = self.d1;
            self.d1 = d;
        } else if d < self.d2 {
            self.d3 = self.d2;
            self.d2 = d;
        } else if d < self.d3 {
            self.d3 = d;
        }
    }

    /// `d1 / d3 - 1`, in `[-1, 0]`.
    ///
    /// Returns `0.0` when `d3` is not positive, which only happens if three
    /// feature points coincide with the sample.
    #[inline]
    pub fn edge(&self) -> f32 {
        if self.d3 > 0.0 {
            self.d1 / self.d3 - 1.0
        } else {
            0.0
        }
    }
}

/// Hash a cell coordinate (already multiplied by the axis primes) with a seed.
#[inline]
fn hash3d(seed: i32, x: i32, y: i32, z: i32) -> i32 {
    let hash = seed ^ x ^ y ^ z;
    let hash = hash.wrapping_mul(hash).wrapping_mul(hash).wrapping_mul(60493);
    (hash >> 13) ^ hash
}

/// Collect the three nearest squared feature distances around `point * frequency`.
///
/// Cells are visited x outer, y middle, z inner; that order is what resolves
/// ties and is part of the output contract.
pub fn cellular3_distances(
    point: Vec3,
    frequency: f32,
    seed: i32,
    origin: LatticeOrigin,
) -> CellDistances {
    let p = point * frequency;

    let xr = p.x.floor() as i32 - 1;
    let (yr, zr) = match origin {
        LatticeOrigin::PerAxis => (p.y.floor() as i32 - 1, p.z.floor() as i32 - 1),
        LatticeOrigin::XOnly => (xr, xr),
    };

    let mut distances = CellDistances::new();

    let mut xp = xr.wrapping_mul(X_PRIME);
    for xi in 0..3 {
        let mut yp = yr.wrapping_mul(Y_PRIME);
        for yi in 0..3 {
            let mut zp = zr.wrapping_mul(Z_PRIME);
            for zi in 0..3 {
                let offset = CELL_3D[(hash3d(seed, xp, yp, zp) & 255) as usize];
                let cell = Vec3::new((xr + xi) as f32, (yr + yi) as f32, (zr + zi) as f32);
                let delta = cell + offset + 0.5 - p;
                distances.insert(delta.length_squared());

                zp = zp.wrapping_add(Z_PRIME);
            }
            yp = yp.wrapping_add(Y_PRIME);
        }
        xp = xp.wrapping_add(X_PRIME);
    }

    distances
}

/// Cellular edge value `d1 / d3 - 1` with the per-axis search block.
///
/// Always `<= 0`; values near 0 lie on boundaries between cells, values near
/// -1 sit right on a feature point.
pub fn cellular3_edge(point: Vec3, frequency: f32, seed: i32) -> f32 {
    cellular3_edge_with(point, frequency, seed, LatticeOrigin::PerAxis)
}

/// [`cellular3_edge`] with an explicit search-block anchoring.
pub fn cellular3_edge_with(point: Vec3, frequency: f32, seed: i32, origin: LatticeOrigin) -> f32 {
    cellular3_distances(point, frequency, seed, origin).edge()
}
