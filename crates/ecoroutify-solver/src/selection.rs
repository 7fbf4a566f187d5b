//! Minimum-score destination selection.

use ecoroutify_core::{RouteScore, RoutingError};

/// Returns the entry with the lowest score.
///
/// Ties resolve to the earliest entry, so callers passing scores in catalog
/// order get the first destination among equals.
///
/// # Errors
///
/// Returns [`RoutingError::NoDestinations`] if `scores` is empty.
pub fn select_optimal(
    scores: &[(String, RouteScore)],
) -> Result<&(String, RouteScore), RoutingError> {
    let mut iter = scores.iter();
    let mut best = iter.next().ok_or(RoutingError::NoDestinations)?;
    for entry in iter {
        if entry.1.is_better_than(&best.1) {
            best = entry;
        }
    }
    Ok(best)
}
