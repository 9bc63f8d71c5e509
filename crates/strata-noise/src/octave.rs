//! Octave (fractal) combiners over a [`GradientNoise`] source.
//!
//! Every variant accumulates `octaves` layers: layer `i` samples the gradient
//! at `point * frequency_i` and adds a variant-specific term weighted by
//! `amplitude_i`, where `frequency_i = frequency * freq_mul^i` and
//! `amplitude_i = amp_mul^i`. The sum is not clamped.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strata_math::{lerp, unlerp};

use crate::gradient::{GradientNoise, SimplexGradient};

/// Frequency multiplier used by the billow-strange preset.
pub const BILLOW_STRANGE_FREQ_MUL: f32 = 2.4;

/// Parameters shared by all octave variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctaveParams {
    /// Frequency of the first octave. Must be positive.
    pub frequency: f32,
    /// Number of layers to accumulate. Must be at least 1.
    pub octaves: u32,
    /// Decorrelates independent fields. Only the plain variant feeds it to
    /// the gradient source (as the fourth coordinate).
    pub seed: i32,
    /// Frequency multiplier between octaves (lacunarity). Default: 2.0.
    pub freq_mul: f32,
    /// Amplitude multiplier between octaves (persistence). Default: 0.5.
    pub amp_mul: f32,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            frequency: 0.02,
            octaves: 4,
            seed: 0,
            freq_mul: 2.0,
            amp_mul: 0.5,
        }
    }
}

impl OctaveParams {
    /// Parameters with the default multipliers.
    pub fn new(frequency: f32, octaves: u32, seed: i32) -> Self {
        Self {
            frequency,
            octaves,
            seed,
            ..Default::default()
        }
    }

    /// Preset for [`OctaveVariant::BillowStrange`], which steps frequency by
    /// [`BILLOW_STRANGE_FREQ_MUL`] instead of 2.0.
    pub fn billow_strange(frequency: f32, octaves: u32, seed: i32) -> Self {
        Self {
            freq_mul: BILLOW_STRANGE_FREQ_MUL,
            ..Self::new(frequency, octaves, seed)
        }
    }

    /// Per-octave `(frequency, amplitude)` pairs, in accumulation order.
    ///
    /// Produced by repeated multiplication, exactly as the combiners step.
    pub fn progression(&self) -> impl Iterator<Item = (f32, f32)> + use<> {
        let (freq_mul, amp_mul) = (self.freq_mul, self.amp_mul);
        std::iter::successors(Some((self.frequency, 1.0_f32)), move |&(f, a)| {
            Some((f * freq_mul, a * amp_mul))
        })
        .take(self.octaves as usize)
    }

    /// Sum of all octave amplitudes (geometric series).
    ///
    /// Upper bound of the plain and billow-strange outputs, which add at most
    /// `amplitude_i` per layer.
    pub fn max_amplitude(&self) -> f32 {
        self.progression().map(|(_, amp)| amp).sum()
    }
}

/// How each octave's raw noise is folded before accumulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum OctaveVariant {
    /// 4D noise with the seed on the fourth axis, remapped to `[0, 1]`.
    #[default]
    Plain,
    /// First octave is a sharpened billow `min(1, 4|n|)`, the rest plain 3D.
    BillowStrange,
    /// First octave blends billow `|n|` and ridged `1 - |n'|` by `mix`; the
    /// rest are `unlerp(-1, 1, n)`.
    BillowRidgedMix {
        /// Blend from billow (0) to ridged (1).
        mix: f32,
    },
}

/// Samples one octave variant with fixed parameters.
#[derive(Clone)]
pub struct OctaveSampler<G = SimplexGradient> {
    gradient: G,
    params: OctaveParams,
    variant: OctaveVariant,
}

impl OctaveSampler<SimplexGradient> {
    /// Sampler over the default simplex source.
    pub fn new(params: OctaveParams, variant: OctaveVariant) -> Self {
        Self::with_gradient(SimplexGradient::default(), params, variant)
    }
}

impl<G: GradientNoise> OctaveSampler<G> {
    /// Sampler over a caller-provided gradient source.
    pub fn with_gradient(gradient: G, params: OctaveParams, variant: OctaveVariant) -> Self {
        Self {
            gradient,
            params,
            variant,
        }
    }

    /// Returns the sampler parameters.
    pub fn params(&self) -> &OctaveParams {
        &self.params
    }

    /// Returns the variant this sampler accumulates.
    pub fn variant(&self) -> OctaveVariant {
        self.variant
    }

    /// Sample the field at `point`.
    pub fn sample(&self, point: Vec3) -> f32 {
        match self.variant {
            OctaveVariant::Plain => octave_plain(&self.gradient, point, &self.params),
            OctaveVariant::BillowStrange => {
                octave_billow_strange(&self.gradient, point, &self.params)
            }
            OctaveVariant::BillowRidgedMix { mix } => {
                octave_billow_ridged(&self.gradient, point, &self.params, mix)
            }
        }
    }
}

/// Plain octave noise: `sum(((n + 1) * 0.5) * amp)` over 4D samples whose
/// fourth coordinate is `seed * 0.39 + 0.02`.
pub fn octave_plain<G: GradientNoise>(gradient: &G, point: Vec3, params: &OctaveParams) -> f32 {
    let w = params.seed as f32 * 0.39 + 0.02;
    let mut value = 0.0;
    for (freq, amp) in params.progression() {
        let n = gradient.sample4((point * freq).extend(w));
        value += ((n + 1.0) * 0.5) * amp;
    }
    value
}

/// Billow-strange octave noise. The first octave is `min(1, 4|n|)`, later
/// octaves are remapped to `[0, 1]`.
pub fn octave_billow_strange<G: GradientNoise>(
    gradient: &G,
    point: Vec3,
    params: &OctaveParams,
) -> f32 {
    let mut value = 0.0;
    for (i, (freq, amp)) in params.progression().enumerate() {
        let n = gradient.sample3(point * freq);
        let term = if i == 0 {
            (4.0 * n.abs()).min(1.0)
        } else {
            (n + 1.0) * 0.5
        };
        value += term * amp;
    }
    value
}

/// Billow/ridged mix octave noise.
///
/// The first octave blends `|n(p·f)|` with `1 - |n(p·f + 1)|` by `mix`. Later
/// octaves use an unsaturated `unlerp(-1, 1, n)`.
pub fn octave_billow_ridged<G: GradientNoise>(
    gradient: &G,
    point: Vec3,
    params: &OctaveParams,
    mix: f32,
) -> f32 {
    let mut value = 0.0;
    for (i, (freq, amp)) in params.progression().enumerate() {
        let scaled = point * freq;
        let term = if i == 0 {
            let billow = gradient.sample3(scaled).abs();
            let ridged = 1.0 - gradient.sample3(scaled + Vec3::ONE).abs();
            lerp(billow, ridged, mix)
        } else {
            unlerp(-1.0, 1.0, gradient.sample3(scaled))
        };
        value += term * amp;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use std::cell::RefCell;

    /// Records every sampled point and returns a constant.
    struct Recording {
        value: f32,
        points3: RefCell<Vec<Vec3>>,
        points4: RefCell<Vec<Vec4>>,
    }

    impl Recording {
        fn new(value: f32) -> Self {
            Self {
                value,
                points3: RefCell::new(Vec::new()),
                points4: RefCell::new(Vec::new()),
            }
        }
    }

    impl GradientNoise for Recording {
        fn sample3(&self, point: Vec3) -> f32 {
            self.points3.borrow_mut().push(point);
            self.value
        }

        fn sample4(&self, point: Vec4) -> f32 {
            self.points4.borrow_mut().push(point);
            self.value
        }
    }

    fn assert_close(a: f32, b: f32, what: &str) {
        let tolerance = 1e-5 * b.abs().max(1.0);
        assert!((a - b).abs() <= tolerance, "{what}: expected {b}, got {a}");
    }

    #[test]
    fn test_progression_matches_closed_form() {
        for octaves in [1_u32, 4, 8] {
            let params = OctaveParams {
                frequency: 0.05,
                octaves,
                freq_mul: 2.0,
                amp_mul: 0.5,
                ..Default::default()
            };
            let steps: Vec<_> = params.progression().collect();
            assert_eq!(steps.len(), octaves as usize);
            for (i, &(freq, amp)) in steps.iter().enumerate() {
                assert_close(freq, 0.05 * 2.0_f32.powi(i as i32), "frequency");
                assert_close(amp, 0.5_f32.powi(i as i32), "amplitude");
            }
        }
    }

    #[test]
    fn test_combiner_samples_at_progression_frequencies() {
        let params = OctaveParams::new(0.1, 8, 3);
        let gradient = Recording::new(0.0);
        let point = Vec3::new(1.0, 2.0, 3.0);
        octave_plain(&gradient, point, &params);

        let sampled = gradient.points4.borrow();
        assert_eq!(sampled.len(), 8);
        for (i, p) in sampled.iter().enumerate() {
            let expected = 0.1 * 2.0_f32.powi(i as i32);
            assert_close(p.x, point.x * expected, "x scaled by frequency");
            assert_close(p.z, point.z * expected, "z scaled by frequency");
            assert_close(p.w, 3.0 * 0.39 + 0.02, "seed offset on w");
        }
    }

    #[test]
    fn test_billow_strange_preset_uses_wider_lacunarity() {
        let params = OctaveParams::billow_strange(1.0, 3, 0);
        let freqs: Vec<_> = params.progression().map(|(f, _)| f).collect();
        assert_close(freqs[1], 2.4, "second octave");
        assert_close(freqs[2], 2.4 * 2.4, "third octave");
    }

    #[test]
    fn test_plain_constant_noise_sums_amplitudes() {
        // n = 1 maps to 1.0 per octave, so the sum is the geometric series.
        let params = OctaveParams::new(0.1, 4, 0);
        let value = octave_plain(&Recording::new(1.0), Vec3::ONE, &params);
        assert_close(value, 1.875, "plain sum");
        assert_close(params.max_amplitude(), 1.875, "max amplitude");
    }

    #[test]
    fn test_billow_strange_first_octave_is_sharpened() {
        let params = OctaveParams::billow_strange(0.1, 1, 0);
        // 4 * 0.1 = 0.4
        let value = octave_billow_strange(&Recording::new(-0.1), Vec3::ONE, &params);
        assert_close(value, 0.4, "single octave");

        // 4 * 0.5 saturates at 1
        let value = octave_billow_strange(&Recording::new(0.5), Vec3::ONE, &params);
        assert_close(value, 1.0, "saturated first octave");
    }

    #[test]
    fn test_billow_strange_later_octaves_remapped() {
        let params = OctaveParams::billow_strange(0.1, 2, 0);
        let value = octave_billow_strange(&Recording::new(0.0), Vec3::ONE, &params);
        // first: min(1, 0) * 1 = 0; second: 0.5 * 0.5 = 0.25
        assert_close(value, 0.25, "two octaves");
    }

    #[test]
    fn test_billow_ridged_mix_endpoints() {
        let params = OctaveParams::new(0.1, 1, 0);
        let gradient = Recording::new(-0.25);
        let billow = octave_billow_ridged(&gradient, Vec3::ONE, &params, 0.0);
        let ridged = octave_billow_ridged(&gradient, Vec3::ONE, &params, 1.0);
        assert_close(billow, 0.25, "pure billow");
        assert_close(ridged, 0.75, "pure ridged");
    }

    #[test]
    fn test_billow_ridged_samples_offset_point_for_ridge() {
        let params = OctaveParams::new(2.0, 1, 0);
        let gradient = Recording::new(0.0);
        octave_billow_ridged(&gradient, Vec3::new(1.0, 1.0, 1.0), &params, 0.5);
        let sampled = gradient.points3.borrow();
        assert_eq!(sampled.as_slice(), &[Vec3::splat(2.0), Vec3::splat(3.0)]);
    }

    #[test]
    fn test_billow_ridged_later_octaves_unlerp() {
        let params = OctaveParams::new(0.1, 2, 0);
        let value = octave_billow_ridged(&Recording::new(1.0), Vec3::ONE, &params, 0.0);
        // first: |1| = 1; second: unlerp(-1, 1, 1) * 0.5 = 0.5
        assert_close(value, 1.5, "two octaves");
    }

    #[test]
    fn test_sampler_dispatch_matches_free_functions() {
        let params = OctaveParams::new(0.03, 5, 9);
        let point = Vec3::new(10.5, -3.25, 44.0);
        let gradient = SimplexGradient::default();

        let cases = [
            (
                OctaveVariant::Plain,
                octave_plain(&gradient, point, &params),
            ),
            (
                OctaveVariant::BillowStrange,
                octave_billow_strange(&gradient, point, &params),
            ),
            (
                OctaveVariant::BillowRidgedMix { mix: 0.3 },
                octave_billow_ridged(&gradient, point, &params, 0.3),
            ),
        ];
        for (variant, expected) in cases {
            let sampler = OctaveSampler::new(params.clone(), variant);
            assert_eq!(sampler.sample(point).to_bits(), expected.to_bits(), "{variant:?}");
        }
    }

    #[test]
    fn test_deterministic_across_samplers() {
        let params = OctaveParams::new(0.05, 6, 42);
        let a = OctaveSampler::new(params.clone(), OctaveVariant::Plain);
        let b = OctaveSampler::new(params, OctaveVariant::Plain);
        for i in 0..100 {
            let p = Vec3::new(i as f32 * 1.7, i as f32 * -0.3, i as f32 * 0.9);
            assert_eq!(a.sample(p).to_bits(), b.sample(p).to_bits(), "index {i}");
        }
    }

    #[test]
    fn test_seed_changes_plain_field() {
        let a = OctaveSampler::new(OctaveParams::new(0.05, 4, 1), OctaveVariant::Plain);
        let b = OctaveSampler::new(OctaveParams::new(0.05, 4, 999), OctaveVariant::Plain);
        let differs = (0..50).any(|i| {
            let p = Vec3::new(i as f32 * 3.1, 5.0, i as f32 * 0.7);
            a.sample(p) != b.sample(p)
        });
        assert!(differs, "Different seeds should produce different plain fields");
    }

    #[test]
    fn test_plain_output_within_bounds() {
        let params = OctaveParams::new(0.07, 6, 5);
        let sampler = OctaveSampler::new(params.clone(), OctaveVariant::Plain);
        let max = params.max_amplitude();
        for i in 0..500 {
            let p = Vec3::new(i as f32 * 0.91, i as f32 * 0.37, i as f32 * -1.3);
            let v = sampler.sample(p);
            assert!((0.0..=max).contains(&v), "Plain value {v} outside [0, {max}]");
        }
    }

    #[test]
    fn test_params_ron_missing_fields_default() {
        let params: OctaveParams = ron::from_str("(octaves: 8)").unwrap();
        assert_eq!(params.octaves, 8);
        assert_eq!(params.freq_mul, 2.0);
        assert_eq!(params.amp_mul, 0.5);
    }
}
