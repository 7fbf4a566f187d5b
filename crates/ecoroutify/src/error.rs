//! Top-level error type

use thiserror::Error;

use ecoroutify_config::ConfigError;
use ecoroutify_core::RoutingError;

/// Failure of a complete optimization run.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Optimization itself failed
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, Error>;
