//! One-call entry points over the optimizer.

use std::path::Path;

use ecoroutify_config::{ConfigError, RouteConfig, DEFAULT_CONFIG_FILE};
use ecoroutify_solver::{ConfiguredOptimizer, DataSource, OptimalRoute};
use tracing::{debug, info};

use crate::error::Result;

/// Reads the configuration for a run without validating it.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in the
/// working directory is used when present, otherwise built-in defaults.
/// Callers layering overrides on top should validate the final result.
pub fn read_config(path: Option<&Path>) -> std::result::Result<RouteConfig, ConfigError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            RouteConfig::from_file(path)
        }
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            info!(path = DEFAULT_CONFIG_FILE, "Loading configuration");
            RouteConfig::from_file(DEFAULT_CONFIG_FILE)
        }
        None => {
            debug!("No configuration file, using defaults");
            Ok(RouteConfig::default())
        }
    }
}

/// Reads and validates the configuration for a run.
///
/// See [`read_config`] for how the file is located.
pub fn load_config(path: Option<&Path>) -> std::result::Result<RouteConfig, ConfigError> {
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

/// Runs one optimization with randomly sampled conditions.
///
/// # Errors
///
/// Returns [`crate::Error::Config`] for invalid configuration and
/// [`crate::Error::Routing`] if no route could be selected.
pub fn optimize_routes(config: &RouteConfig) -> Result<OptimalRoute> {
    let mut optimizer = ConfiguredOptimizer::from_config(config)?;
    Ok(optimizer.optimize()?)
}

/// Runs one optimization with conditions taken from `source`.
pub fn optimize_with_source(
    config: &RouteConfig,
    source: Box<dyn DataSource>,
) -> Result<OptimalRoute> {
    let mut optimizer = ConfiguredOptimizer::from_config(config)?;
    optimizer.replace_source(source);
    Ok(optimizer.optimize()?)
}
