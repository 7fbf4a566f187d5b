//! Route optimization driver.
//!
//! Logging levels:
//! - **INFO**: Run start/end, fetched conditions, per-destination scores
//! - **ERROR**: Missing conditions, scoring failures

use std::time::Instant;

use ecoroutify_config::{ConfigError, RouteConfig, ScorerKind};
use ecoroutify_core::{
    DestinationCatalog, RealTimeData, RouteScore, RoutingError, TrafficWeights,
};
use tracing::{error, info};

use crate::data_source::{DataSource, RandomDataSource};
use crate::scoring::{score_destination, DistanceScorer, PositionScorer, RouteScorer};
use crate::selection::select_optimal;

/// Outcome of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalRoute {
    /// Label of the cheapest destination.
    pub destination: String,

    /// Its score.
    pub score: RouteScore,

    /// Conditions every destination was scored under.
    pub conditions: RealTimeData,

    /// All scores, in catalog order.
    pub scores: Vec<(String, RouteScore)>,
}

/// Optimizer built from configuration, with boxed strategies.
pub type ConfiguredOptimizer = RouteOptimizer<Box<dyn DataSource>, Box<dyn RouteScorer>>;

/// Scores every destination under one sample of conditions and picks the
/// cheapest.
pub struct RouteOptimizer<D, R> {
    catalog: DestinationCatalog,
    weights: TrafficWeights,
    source: D,
    scorer: R,
}

impl<D: DataSource, R: RouteScorer> RouteOptimizer<D, R> {
    pub fn new(catalog: DestinationCatalog, weights: TrafficWeights, source: D, scorer: R) -> Self {
        Self {
            catalog,
            weights,
            source,
            scorer,
        }
    }

    /// Runs one optimization.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::DataUnavailable`] if conditions cannot be fetched
    /// - [`RoutingError::NoFeasibleRoute`] if no destination scored finitely
    pub fn optimize(&mut self) -> Result<OptimalRoute, RoutingError> {
        let start = Instant::now();
        info!(
            event = "optimize_start",
            destination_count = self.catalog.len() as u64,
            scorer = self.scorer.name(),
        );

        let conditions = match self.source.fetch() {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "Failed to optimize routes due to lack of real-time data.");
                return Err(e);
            }
        };
        info!(
            traffic = %conditions.traffic,
            emission_rate = conditions.emission_rate.value(),
            "Real-time data fetched successfully"
        );

        let scores: Vec<(String, RouteScore)> = self
            .catalog
            .iter()
            .map(|destination| {
                let score = score_destination(
                    &self.scorer,
                    &self.catalog,
                    destination,
                    &conditions,
                    &self.weights,
                );
                (destination.name.clone(), score)
            })
            .collect();

        let (destination, score) = select_optimal(&scores)?.clone();
        if !score.is_finite() {
            error!("No destination produced a usable score");
            return Err(RoutingError::NoFeasibleRoute);
        }

        info!(
            event = "optimize_end",
            destination = %destination,
            score = %score,
            traffic = %conditions.traffic,
            emission_rate = conditions.emission_rate.value(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        info!(
            "Optimal route selected: {} with score {}",
            destination, score
        );

        Ok(OptimalRoute {
            destination,
            score,
            conditions,
            scores,
        })
    }
}

impl ConfiguredOptimizer {
    /// Builds an optimizer from validated configuration.
    ///
    /// The data source is a [`RandomDataSource`] seeded from `random_seed`
    /// when present.
    pub fn from_config(config: &RouteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = config.catalog()?;

        let source: Box<dyn DataSource> = Box::new(RandomDataSource::from_config(config));
        let scorer: Box<dyn RouteScorer> = match config.scorer {
            ScorerKind::Position => Box::new(PositionScorer),
            ScorerKind::Distance => Box::new(DistanceScorer),
        };

        Ok(RouteOptimizer::new(
            catalog,
            config.traffic_weights,
            source,
            scorer,
        ))
    }

    /// Swaps in a different boxed data source.
    pub fn replace_source(&mut self, source: Box<dyn DataSource>) {
        self.source = source;
    }
}
