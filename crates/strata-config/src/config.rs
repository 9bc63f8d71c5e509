//! Field configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strata_noise::{LatticeOrigin, OctaveParams, OctaveSampler, OctaveVariant};
use strata_shapes::{ConeParams, Shape};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "field.ron";

/// Top-level density field configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Fractal noise layer.
    pub octave: OctaveConfig,
    /// Cellular crack layer.
    pub cellular: CellularConfig,
    /// Structures stamped into the field.
    pub shapes: Vec<Shape>,
    /// Debug slice rendering.
    pub slice: SliceConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Fractal noise settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OctaveConfig {
    /// Octave fold applied per layer.
    pub variant: OctaveVariant,
    /// Frequency, octave count, seed and multipliers.
    pub params: OctaveParams,
    /// Density threshold. Noise above it counts as solid.
    pub threshold: f32,
}

/// Cellular crack settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CellularConfig {
    /// Whether cracks are carved at all.
    pub enabled: bool,
    /// Lattice frequency.
    pub frequency: f32,
    /// Feature point seed.
    pub seed: i32,
    /// Search block anchoring.
    pub origin: LatticeOrigin,
    /// Edge values above `-crack_width` are carved out.
    pub crack_width: f32,
}

/// Horizontal slice rendered by the debug tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SliceConfig {
    /// Image side length in pixels.
    pub size: u32,
    /// World units per pixel.
    pub scale: f32,
    /// World-space y of the slice.
    pub height: f32,
    /// World-space x/z of the image's top-left corner.
    pub origin_x: f32,
    pub origin_z: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write a JSON log file next to the config.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for OctaveConfig {
    fn default() -> Self {
        Self {
            variant: OctaveVariant::Plain,
            params: OctaveParams::default(),
            threshold: 0.9,
        }
    }
}

impl Default for CellularConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 0.05,
            seed: 1337,
            origin: LatticeOrigin::PerAxis,
            crack_width: 0.08,
        }
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            size: 256,
            scale: 0.5,
            height: 16.0,
            origin_x: 0.0,
            origin_z: 0.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: cfg!(debug_assertions),
        }
    }
}

/// Per-user config directory (`<config_dir>/strata`), if the platform has one.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("strata"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Conversions ---

impl OctaveConfig {
    /// Build a sampler over the default simplex source.
    pub fn sampler(&self) -> OctaveSampler {
        OctaveSampler::new(self.params.clone(), self.variant)
    }
}

impl FieldConfig {
    /// A small example scene: a tower, a dented wall and a cone-shaped hill.
    pub fn example_shapes() -> Vec<Shape> {
        vec![
            Shape::CylinderY {
                anchor: Vec3::new(40.0, 0.0, 40.0),
                height: 40.0,
                radius_bottom: 10.0,
                radius_top: 6.0,
            },
            Shape::BoxDentedX {
                anchor: Vec3::new(80.0, 0.0, 90.0),
                size: Vec3::new(60.0, 24.0, 6.0),
                dent_size: 0.25,
                dent_depth: 4.0,
            },
            Shape::Cone {
                anchor: Vec3::new(90.0, -30.0, 30.0),
                params: ConeParams::new(0.0, 60.0, 30.0),
            },
        ]
    }
}

// --- Load / Save / Reload ---

impl FieldConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded field config from {}", config_path.display());
            Ok(config)
        } else {
            let config = FieldConfig {
                shapes: Self::example_shapes(),
                ..Default::default()
            };
            config.save(config_dir)?;
            log::info!("Created default field config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `field.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Field config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
