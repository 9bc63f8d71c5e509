//! Debug tool that renders horizontal slices of a Strata density field.
//!
//! Configuration is loaded from `field.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p strata-demo -- --seed 7 --variant billow-ridged --mix 0.4`.
//! Images are written to `<config dir>/slices` unless `--output` is given.

mod density;
mod render;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use strata_config::{CliArgs, ConfigError, FieldConfig, default_config_dir};
use strata_noise::{cellular3_edge_with, voronoi_distance};
use tracing::{error, info, warn};

use crate::density::DensityField;
use crate::render::{DebugImage, RenderError, render_cells, render_scalar, render_solid};

fn main() {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => default_config_dir().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(2);
        }),
    };

    let mut config = load_config(&config_dir);
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    strata_log::init_logging(Some(&log_dir), config.debug.log_to_file, Some(&config));

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config_dir.join("slices"));

    if let Err(e) = render_all(&config, &output_dir) {
        error!("Rendering failed: {e}");
        std::process::exit(1);
    }
}

/// Load or create the config, falling back to defaults on error.
fn load_config(config_dir: &Path) -> FieldConfig {
    FieldConfig::load_or_create(config_dir).unwrap_or_else(|e: ConfigError| {
        eprintln!("Failed to load config: {e}, using defaults");
        FieldConfig::default()
    })
}

/// Render every debug slice into `output_dir`.
fn render_all(config: &FieldConfig, output_dir: &Path) -> Result<(), RenderError> {
    let field = DensityField::from_config(config);
    let slice = &config.slice;
    let max_amplitude = config.octave.params.max_amplitude();

    info!(
        variant = ?config.octave.variant,
        octaves = config.octave.params.octaves,
        seed = config.octave.params.seed,
        size = slice.size,
        "Rendering density slices"
    );
    if config.shapes.is_empty() {
        warn!("No shapes configured; the shapes slice will be empty");
    }

    let jobs: [(&str, Box<dyn Fn() -> DebugImage + '_>); 5] = [
        (
            "octave.png",
            Box::new(|| render_scalar(slice, 0.0, max_amplitude, |p| field.octave(p))),
        ),
        (
            "cellular.png",
            Box::new(|| {
                render_scalar(slice, -1.0, 0.0, |p| {
                    cellular3_edge_with(
                        p,
                        config.cellular.frequency,
                        config.cellular.seed,
                        config.cellular.origin,
                    )
                })
            }),
        ),
        (
            "voronoi.png",
            Box::new(|| {
                let frequency = config.cellular.frequency;
                render_cells(slice, |p| voronoi_distance(p * frequency))
            }),
        ),
        (
            "shapes.png",
            Box::new(|| render_scalar(slice, 0.0, 1.0, |p| field.shapes(p))),
        ),
        (
            "density.png",
            Box::new(|| render_solid(slice, |p| field.is_solid(p))),
        ),
    ];

    for (name, job) in jobs {
        let start = Instant::now();
        let image = job();
        let path: PathBuf = output_dir.join(name);
        image.save_png(&path)?;
        info!(
            path = %path.display(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Wrote slice"
        );
    }

    Ok(())
}
