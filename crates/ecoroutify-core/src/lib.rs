//! Eco-Routify Core - Domain types for emission-aware route selection
//!
//! This crate provides the fundamental abstractions for Eco-Routify:
//! - Destinations and the ordered catalog they are drawn from
//! - Traffic levels, traffic weights and emission rates
//! - The route score used to rank destinations
//! - The routing error taxonomy

pub mod domain;
pub mod error;
pub mod score;
pub mod traffic;

pub use domain::{Destination, DestinationCatalog, DEFAULT_DESTINATIONS};
pub use error::{Result, RoutingError};
pub use score::RouteScore;
pub use traffic::{EmissionRange, EmissionRate, RealTimeData, TrafficLevel, TrafficWeights};
