//! Structured logging for the Strata tools.
//!
//! Console output with uptime timestamps and module paths, plus an optional
//! JSON log file. The filter comes from `RUST_LOG` when set, otherwise from
//! the config's `debug.log_level`.

use std::path::{Path, PathBuf};

use strata_config::FieldConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written inside the log directory.
pub const LOG_FILE_NAME: &str = "strata.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file. Ignored unless `to_file` is set.
/// * `to_file` - Whether to add the JSON file layer.
/// * `config` - Optional configuration supplying the level filter.
///
/// Calling this twice in one process panics, as with any global subscriber.
pub fn init_logging(log_dir: Option<&Path>, to_file: bool, config: Option<&FieldConfig>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config_env_filter(config));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if to_file
        && let Some(log_dir) = log_dir
        && let Some(path) = prepare_log_file(log_dir)
        && let Ok(log_file) = std::fs::File::create(&path)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!(path = %path.display(), "JSON file logging enabled");
        return;
    }

    subscriber.init();
}

/// Level filter string derived from the config, or [`DEFAULT_FILTER`].
pub fn filter_string(config: Option<&FieldConfig>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.clone()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Filter from the config's level, or [`default_env_filter`] if that level
/// does not parse.
fn config_env_filter(config: Option<&FieldConfig>) -> EnvFilter {
    EnvFilter::try_new(filter_string(config)).unwrap_or_else(|_| default_env_filter())
}

/// Create `log_dir` and return the log file path inside it, or `None` if the
/// directory cannot be created.
fn prepare_log_file(log_dir: &Path) -> Option<PathBuf> {
    std::fs::create_dir_all(log_dir).ok()?;
    Some(log_dir.join(LOG_FILE_NAME))
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
