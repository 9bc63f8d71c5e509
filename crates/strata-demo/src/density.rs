//! Composite density: fractal noise, cellular cracks and stamped shapes.
//!
//! Positive density is solid.

use glam::Vec3;
use strata_config::{CellularConfig, FieldConfig};
use strata_math::saturate;
use strata_noise::{OctaveSampler, cellular3_edge_with};
use strata_shapes::{Shape, union};

/// Shape weights above this count as solid.
const SHAPE_ISO: f32 = 0.5;

/// Evaluates a [`FieldConfig`] at world positions.
pub struct DensityField {
    octave: OctaveSampler,
    threshold: f32,
    cellular: CellularConfig,
    shapes: Vec<Shape>,
}

impl DensityField {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            octave: config.octave.sampler(),
            threshold: config.octave.threshold,
            cellular: config.cellular.clone(),
            shapes: config.shapes.clone(),
        }
    }

    /// Raw octave value, before thresholding.
    pub fn octave(&self, p: Vec3) -> f32 {
        self.octave.sample(p)
    }

    /// Crack weight in `[0, 1]`: 1 on a cell border, 0 once the edge value
    /// drops below `-crack_width`.
    pub fn crack(&self, p: Vec3) -> f32 {
        if !self.cellular.enabled || self.cellular.crack_width <= 0.0 {
            return 0.0;
        }
        let edge = cellular3_edge_with(
            p,
            self.cellular.frequency,
            self.cellular.seed,
            self.cellular.origin,
        );
        saturate((edge + self.cellular.crack_width) / self.cellular.crack_width)
    }

    /// Union weight of all configured shapes.
    pub fn shapes(&self, p: Vec3) -> f32 {
        union(&self.shapes, p)
    }

    /// Signed density: terrain noise minus cracks, unioned with the shapes.
    pub fn sample(&self, p: Vec3) -> f32 {
        let terrain = self.octave(p) - self.threshold - self.crack(p);
        terrain.max(self.shapes(p) - SHAPE_ISO)
    }

    pub fn is_solid(&self, p: Vec3) -> bool {
        self.sample(p) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(shapes: Vec<Shape>) -> DensityField {
        let mut config = FieldConfig {
            shapes,
            ..Default::default()
        };
        // Threshold above any octave output: only shapes are solid.
        config.octave.threshold = 100.0;
        DensityField::from_config(&config)
    }

    #[test]
    fn test_shapes_are_solid_regardless_of_noise() {
        let field = field_with(vec![Shape::Box {
            anchor: Vec3::ZERO,
            size: Vec3::splat(4.0),
        }]);
        assert!(field.is_solid(Vec3::new(0.0, 1.0, 0.0)));
        assert!(!field.is_solid(Vec3::new(10.0, 1.0, 0.0)));
    }

    #[test]
    fn test_crack_disabled_is_zero() {
        let mut config = FieldConfig::default();
        config.cellular.enabled = false;
        let field = DensityField::from_config(&config);
        assert_eq!(field.crack(Vec3::new(3.0, 4.0, 5.0)), 0.0);
    }

    #[test]
    fn test_crack_in_unit_range() {
        let field = DensityField::from_config(&FieldConfig::default());
        for i in 0..200 {
            let p = Vec3::new(i as f32 * 0.7, 12.0, i as f32 * 1.3);
            let c = field.crack(p);
            assert!((0.0..=1.0).contains(&c), "Crack weight {c} at {p}");
        }
    }

    #[test]
    fn test_cracks_lower_density() {
        let mut config = FieldConfig::default();
        let with_cracks = DensityField::from_config(&config);
        config.cellular.enabled = false;
        let without = DensityField::from_config(&config);
        for i in 0..200 {
            let p = Vec3::new(i as f32 * 0.9, 8.0, i as f32 * -0.4);
            assert!(with_cracks.sample(p) <= without.sample(p), "Crack raised density at {p}");
        }
    }

    #[test]
    fn test_sample_deterministic() {
        let config = FieldConfig {
            shapes: FieldConfig::example_shapes(),
            ..Default::default()
        };
        let a = DensityField::from_config(&config);
        let b = DensityField::from_config(&config);
        let p = Vec3::new(41.0, 12.0, 39.5);
        assert_eq!(a.sample(p).to_bits(), b.sample(p).to_bits());
    }
}
