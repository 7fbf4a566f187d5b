//! Error types for Eco-Routify

use thiserror::Error;

/// Main error type for route selection operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingError {
    /// Real-time conditions could not be obtained
    #[error("Real-time data unavailable: {0}")]
    DataUnavailable(String),

    /// Destination is not part of the catalog being scored
    #[error("Unknown destination: {0}")]
    UnknownDestination(String),

    /// Error during score calculation
    #[error("Score calculation error: {0}")]
    Scoring(String),

    /// Nothing to select from
    #[error("No destinations to choose from")]
    NoDestinations,

    /// Every destination failed to score
    #[error("No destination produced a finite score")]
    NoFeasibleRoute,

    /// A value violated a domain constraint
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for route selection operations
pub type Result<T> = std::result::Result<T, RoutingError>;
