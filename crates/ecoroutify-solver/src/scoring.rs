//! Route scoring strategies.
//!
//! A scorer turns one destination plus the sampled conditions into a
//! [`RouteScore`]. Scorers report failures as errors; [`score_destination`]
//! is the wrapper the optimizer uses, degrading any failure to
//! [`RouteScore::INFINITE`] so one bad destination cannot abort a run.

use ecoroutify_core::{
    Destination, DestinationCatalog, RealTimeData, RouteScore, RoutingError, TrafficWeights,
};
use tracing::{error, info};

/// Costs a destination under a sample of real-time conditions.
pub trait RouteScorer {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Computes the score for `destination`. Lower is better.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be costed by this
    /// strategy or the result is not finite.
    fn score(
        &self,
        catalog: &DestinationCatalog,
        destination: &Destination,
        data: &RealTimeData,
        weights: &TrafficWeights,
    ) -> Result<RouteScore, RoutingError>;
}

impl<T: RouteScorer + ?Sized> RouteScorer for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn score(
        &self,
        catalog: &DestinationCatalog,
        destination: &Destination,
        data: &RealTimeData,
        weights: &TrafficWeights,
    ) -> Result<RouteScore, RoutingError> {
        (**self).score(catalog, destination, data, weights)
    }
}

/// `position * traffic_weight * emission_rate`.
///
/// Uses the destination's zero-based catalog position as its route cost, so
/// with positive conditions the first destination always wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionScorer;

impl RouteScorer for PositionScorer {
    fn name(&self) -> &'static str {
        "position"
    }

    fn score(
        &self,
        catalog: &DestinationCatalog,
        destination: &Destination,
        data: &RealTimeData,
        weights: &TrafficWeights,
    ) -> Result<RouteScore, RoutingError> {
        let position = catalog
            .position(&destination.name)
            .ok_or_else(|| RoutingError::UnknownDestination(destination.name.clone()))?;

        finite(
            position as f64 * weights.weight(data.traffic) * data.emission_rate.value(),
            destination,
        )
    }
}

/// `distance_km * traffic_weight * emission_rate`.
///
/// The product is the estimated kg of CO2 for the trip, inflated by
/// congestion.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceScorer;

impl RouteScorer for DistanceScorer {
    fn name(&self) -> &'static str {
        "distance"
    }

    fn score(
        &self,
        catalog: &DestinationCatalog,
        destination: &Destination,
        data: &RealTimeData,
        weights: &TrafficWeights,
    ) -> Result<RouteScore, RoutingError> {
        if catalog.position(&destination.name).is_none() {
            return Err(RoutingError::UnknownDestination(destination.name.clone()));
        }
        let distance = destination.distance_km.ok_or_else(|| {
            RoutingError::Scoring(format!("'{}' has no distance", destination.name))
        })?;

        finite(
            distance * weights.weight(data.traffic) * data.emission_rate.value(),
            destination,
        )
    }
}

fn finite(value: f64, destination: &Destination) -> Result<RouteScore, RoutingError> {
    if value.is_finite() {
        Ok(RouteScore::of(value))
    } else {
        Err(RoutingError::Scoring(format!(
            "non-finite score {} for '{}'",
            value, destination.name
        )))
    }
}

/// Scores one destination, logging the outcome.
///
/// Any scorer error is logged and replaced by [`RouteScore::INFINITE`].
pub fn score_destination<R: RouteScorer + ?Sized>(
    scorer: &R,
    catalog: &DestinationCatalog,
    destination: &Destination,
    data: &RealTimeData,
    weights: &TrafficWeights,
) -> RouteScore {
    match scorer.score(catalog, destination, data, weights) {
        Ok(score) => {
            info!(
                destination = %destination.name,
                score = score.value(),
                "Score for {}: {}",
                destination.name,
                score
            );
            score
        }
        Err(e) => {
            error!(
                destination = %destination.name,
                scorer = scorer.name(),
                "Error calculating route score for {}: {}",
                destination.name,
                e
            );
            RouteScore::INFINITE
        }
    }
}
