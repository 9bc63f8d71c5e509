//! Gradient-noise evaluator: the continuous primitive every other kernel builds on.

use glam::{Vec3, Vec4};
use noise::{NoiseFn, Simplex};

/// A deterministic, continuous gradient-noise source.
///
/// Implementations must return values in `[-1, 1]` and must return the same
/// value for the same input on every call. Octave combiners rely on that range
/// when remapping to `[0, 1]`.
pub trait GradientNoise {
    /// Sample 3D noise.
    fn sample3(&self, point: Vec3) -> f32;

    /// Sample 4D noise. The fourth axis is used as a per-seed offset.
    fn sample4(&self, point: Vec4) -> f32;
}

/// Simplex gradient noise backed by the `noise` crate.
///
/// Evaluated in `f64` and narrowed to `f32`. The output is clamped so the
/// `[-1, 1]` contract holds even where the underlying scaling overshoots.
#[derive(Clone)]
pub struct SimplexGradient {
    noise: Simplex,
}

impl SimplexGradient {
    /// Permutation seed used by [`Default`]. Field decorrelation is done by
    /// the callers' own seeds, not by reseeding the permutation table.
    pub const DEFAULT_SEED: u32 = 0;

    /// Create a simplex source with the given permutation seed.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
        }
    }
}

impl Default for SimplexGradient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl GradientNoise for SimplexGradient {
    #[inline]
    fn sample3(&self, point: Vec3) -> f32 {
        let p = point.as_dvec3();
        let value = self.noise.get([p.x, p.y, p.z]);
        (value as f32).clamp(-1.0, 1.0)
    }

    #[inline]
    fn sample4(&self, point: Vec4) -> f32 {
        let p = point.as_dvec4();
        let value = self.noise.get([p.x, p.y, p.z, p.w]);
        (value as f32).clamp(-1.0, 1.0)
    }
}

impl<G: GradientNoise + ?Sized> GradientNoise for &G {
    #[inline]
    fn sample3(&self, point: Vec3) -> f32 {
        (**self).sample3(point)
    }

    #[inline]
    fn sample4(&self, point: Vec4) -> f32 {
        (**self).sample4(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sample3_in_range() {
        let gradient = SimplexGradient::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let p = Vec3::new(
                rng.random_range(-500.0..500.0),
                rng.random_range(-500.0..500.0),
                rng.random_range(-500.0..500.0),
            );
            let v = gradient.sample3(p);
            assert!((-1.0..=1.0).contains(&v), "sample3({p}) = {v} out of range");
        }
    }

    #[test]
    fn test_sample4_in_range() {
        let gradient = SimplexGradient::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..10_000 {
            let p = Vec4::new(
                rng.random_range(-500.0..500.0),
                rng.random_range(-500.0..500.0),
                rng.random_range(-500.0..500.0),
                rng.random_range(-50.0..50.0),
            );
            let v = gradient.sample4(p);
            assert!((-1.0..=1.0).contains(&v), "sample4({p}) = {v} out of range");
        }
    }

    #[test]
    fn test_deterministic() {
        let a = SimplexGradient::default();
        let b = SimplexGradient::default();
        let p = Vec3::new(12.3, -4.5, 67.8);
        assert_eq!(a.sample3(p).to_bits(), b.sample3(p).to_bits());
        assert_eq!(a.sample3(p).to_bits(), a.sample3(p).to_bits());
    }

    #[test]
    fn test_continuous() {
        let gradient = SimplexGradient::default();
        let step = 0.001;
        for i in 0..5_000 {
            let x = i as f32 * step;
            let a = gradient.sample3(Vec3::new(x, 0.3, 0.7));
            let b = gradient.sample3(Vec3::new(x + step, 0.3, 0.7));
            assert!(
                (a - b).abs() < 0.05,
                "Jump of {} between x={x} and x={}",
                (a - b).abs(),
                x + step
            );
        }
    }

    #[test]
    fn test_reference_forwards() {
        let gradient = SimplexGradient::default();
        let by_ref: &SimplexGradient = &gradient;
        let p = Vec3::new(1.5, 2.5, 3.5);
        assert_eq!(gradient.sample3(p), GradientNoise::sample3(&by_ref, p));
    }
}
