//! Command-line argument parsing for the Strata tools.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strata_noise::{BILLOW_STRANGE_FREQ_MUL, OctaveParams, OctaveVariant};

use crate::FieldConfig;

/// Octave variant names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Plain,
    BillowStrange,
    BillowRidged,
}

/// Strata command-line arguments.
///
/// CLI values override settings loaded from `field.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Procedural density field sampler")]
pub struct CliArgs {
    /// Seed for both the octave and cellular layers.
    #[arg(long)]
    pub seed: Option<i32>,

    /// Base frequency of the octave layer.
    #[arg(long)]
    pub frequency: Option<f32>,

    /// Number of octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Octave variant.
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Billow/ridged blend, used with `--variant billow-ridged`.
    #[arg(long)]
    pub mix: Option<f32>,

    /// Slice image size in pixels.
    #[arg(long)]
    pub size: Option<u32>,

    /// Directory for rendered images.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl FieldConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.octave.params.seed = seed;
            self.cellular.seed = seed;
        }
        if let Some(f) = args.frequency {
            self.octave.params.frequency = f;
        }
        if let Some(n) = args.octaves {
            self.octave.params.octaves = n;
        }
        if let Some(variant) = args.variant {
            let previous_mix = match self.octave.variant {
                OctaveVariant::BillowRidgedMix { mix } => mix,
                _ => 0.5,
            };
            // Each variant brings its own lacunarity.
            let (next, freq_mul) = match variant {
                VariantArg::Plain => (OctaveVariant::Plain, OctaveParams::default().freq_mul),
                VariantArg::BillowStrange => (OctaveVariant::BillowStrange, BILLOW_STRANGE_FREQ_MUL),
                VariantArg::BillowRidged => (
                    OctaveVariant::BillowRidgedMix {
                        mix: args.mix.unwrap_or(previous_mix),
                    },
                    OctaveParams::default().freq_mul,
                ),
            };
            self.octave.variant = next;
            self.octave.params.freq_mul = freq_mul;
        } else if let (Some(m), OctaveVariant::BillowRidgedMix { mix }) =
            (args.mix, &mut self.octave.variant)
        {
            *mix = m;
        }
        if let Some(size) = args.size {
            self.slice.size = size;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
