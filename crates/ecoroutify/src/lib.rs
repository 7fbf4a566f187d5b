//! Eco-Routify - Emission-aware delivery route selection
//!
//! Samples traffic and emission conditions, scores every destination in a
//! catalog and returns the cheapest one.
//!
//! # Example
//!
//! ```rust
//! use ecoroutify::prelude::*;
//!
//! let config = RouteConfig::default().with_random_seed(42);
//! let route = optimize_routes(&config).unwrap();
//! assert_eq!(route.destination, "Location A");
//! ```

// Domain types
pub use ecoroutify_core::{
    Destination, DestinationCatalog, EmissionRange, EmissionRate, RealTimeData, RouteScore,
    RoutingError, TrafficLevel, TrafficWeights, DEFAULT_DESTINATIONS,
};

// Configuration
pub use ecoroutify_config::{ConfigError, RouteConfig, ScorerKind, DEFAULT_CONFIG_FILE};

// Engine
pub use ecoroutify_solver::{
    score_destination, select_optimal, ConfiguredOptimizer, DataSource, DistanceScorer,
    FixedDataSource, OptimalRoute, PinnedDataSource, PositionScorer, RandomDataSource,
    RouteOptimizer, RouteScorer,
};

mod error;
mod solver;

pub use error::{Error, Result};
pub use solver::{load_config, optimize_routes, optimize_with_source, read_config};

#[cfg(feature = "console")]
pub use ecoroutify_console as console;

/// Commonly used items.
pub mod prelude {
    pub use crate::{
        optimize_routes, Destination, OptimalRoute, RouteConfig, RouteOptimizer, RouteScore,
        ScorerKind, TrafficLevel,
    };
}
