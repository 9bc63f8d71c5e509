//! Configuration for Strata density fields.
//!
//! Field settings persist to disk as `field.ron`. CLI flags (clap) override
//! the loaded values. Missing sections fall back to defaults and unknown
//! fields are ignored, so older and newer files both load.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, VariantArg};
pub use config::{
    CONFIG_FILE_NAME, CellularConfig, DebugConfig, FieldConfig, OctaveConfig, SliceConfig,
    default_config_dir,
};
pub use error::ConfigError;
