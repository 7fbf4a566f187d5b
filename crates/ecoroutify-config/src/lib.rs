//! Configuration system for Eco-Routify.
//!
//! Load route selection settings from TOML or YAML files to change the
//! destination catalog, traffic weights, emission sampling and scoring
//! strategy without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use ecoroutify_config::{RouteConfig, ScorerKind};
//!
//! let config = RouteConfig::from_toml_str(r#"
//!     random_seed = 7
//!     scorer = "distance"
//!
//!     [emission]
//!     min = 0.1
//!     max = 0.3
//!
//!     [[destinations]]
//!     name = "Depot North"
//!     distance_km = 12.5
//!
//!     [[destinations]]
//!     name = "Depot South"
//!     distance_km = 4.0
//! "#).unwrap();
//!
//! assert_eq!(config.scorer, ScorerKind::Distance);
//! assert_eq!(config.destinations.len(), 2);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use ecoroutify_config::RouteConfig;
//!
//! let config = RouteConfig::load("eco-routify.toml").unwrap_or_default();
//! // Proceeds with the four built-in destinations if the file doesn't exist
//! ```

use std::path::Path;

use ecoroutify_core::{
    Destination, DestinationCatalog, EmissionRange, TrafficWeights, DEFAULT_DESTINATIONS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "eco-routify.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main route selection configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RouteConfig {
    /// Random seed for reproducible condition sampling.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Scoring strategy.
    #[serde(default)]
    pub scorer: ScorerKind,

    /// Range emission rates are sampled from.
    #[serde(default)]
    pub emission: EmissionRange,

    /// Cost multiplier per traffic level.
    #[serde(default)]
    pub traffic_weights: TrafficWeights,

    /// Ordered destination catalog.
    #[serde(default = "default_destinations")]
    pub destinations: Vec<Destination>,
}

fn default_destinations() -> Vec<Destination> {
    DEFAULT_DESTINATIONS
        .iter()
        .map(|name| Destination::new(*name))
        .collect()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            scorer: ScorerKind::default(),
            emission: EmissionRange::default(),
            traffic_weights: TrafficWeights::default(),
            destinations: default_destinations(),
        }
    }
}

impl RouteConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, picking YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the scoring strategy.
    pub fn with_scorer(mut self, scorer: ScorerKind) -> Self {
        self.scorer = scorer;
        self
    }

    /// Sets the emission sampling range.
    pub fn with_emission_range(mut self, min: f64, max: f64) -> Self {
        self.emission = EmissionRange { min, max };
        self
    }

    /// Replaces the traffic weights.
    pub fn with_traffic_weights(mut self, weights: TrafficWeights) -> Self {
        self.traffic_weights = weights;
        self
    }

    /// Replaces the destination catalog.
    pub fn with_destinations(mut self, destinations: Vec<Destination>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Checks the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty or duplicated catalog,
    /// an unusable emission range, negative weights, or distance scoring
    /// over destinations without a distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let catalog = self.catalog()?;
        self.emission.validate().map_err(invalid)?;
        self.traffic_weights.validate().map_err(invalid)?;

        if self.scorer == ScorerKind::Distance {
            if let Some(d) = catalog.iter().find(|d| d.distance_km.is_none()) {
                return Err(ConfigError::Invalid(format!(
                    "distance scorer requires distance_km for every destination; '{}' has none",
                    d.name
                )));
            }
        }
        Ok(())
    }

    /// Builds the destination catalog.
    pub fn catalog(&self) -> Result<DestinationCatalog, ConfigError> {
        DestinationCatalog::new(self.destinations.clone()).map_err(invalid)
    }
}

fn invalid(err: ecoroutify_core::RoutingError) -> ConfigError {
    ConfigError::Invalid(err.to_string())
}

/// Route scoring strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    /// Catalog position times traffic weight times emission rate.
    #[default]
    Position,

    /// Distance times traffic weight times emission rate.
    Distance,
}

impl std::str::FromStr for ScorerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "position" => Ok(ScorerKind::Position),
            "distance" => Ok(ScorerKind::Distance),
            other => Err(ConfigError::Invalid(format!("unknown scorer '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests;
