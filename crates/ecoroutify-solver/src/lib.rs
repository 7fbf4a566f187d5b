//! Route scoring and selection engine for Eco-Routify.
//!
//! A run samples real-time conditions once, scores every destination in the
//! catalog under that sample and picks the cheapest:
//!
//! - [`DataSource`] - where traffic and emission conditions come from
//! - [`RouteScorer`] - how a destination is costed under those conditions
//! - [`select_optimal`] - minimum selection with first-wins tie breaking
//! - [`RouteOptimizer`] - the driver wiring the three together

pub mod data_source;
pub mod optimizer;
pub mod scoring;
pub mod selection;

#[cfg(test)]
pub mod test_utils;

pub use data_source::{DataSource, FixedDataSource, PinnedDataSource, RandomDataSource};
pub use optimizer::{ConfiguredOptimizer, OptimalRoute, RouteOptimizer};
pub use scoring::{score_destination, DistanceScorer, PositionScorer, RouteScorer};
pub use selection::select_optimal;
