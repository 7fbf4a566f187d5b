//! Destinations and the ordered catalog they are scored from.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, RoutingError};

/// Labels of the built-in catalog, in scoring order.
pub const DEFAULT_DESTINATIONS: [&str; 4] = ["Location A", "Location B", "Location C", "Location D"];

/// A named delivery target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Label shown to the user; unique within a catalog.
    pub name: String,

    /// Road distance in kilometres, used by distance-based scoring.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub distance_km: Option<f64>,
}

impl Destination {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance_km: None,
        }
    }

    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered, non-empty list of destinations with unique labels.
///
/// A destination's position in the catalog is significant: position-based
/// scoring uses it as the route cost, and ties are broken in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Creates a catalog, rejecting empty lists, blank or duplicate labels
    /// and invalid distances.
    pub fn new(destinations: Vec<Destination>) -> Result<Self> {
        if destinations.is_empty() {
            return Err(RoutingError::NoDestinations);
        }

        let mut seen = HashSet::with_capacity(destinations.len());
        for d in &destinations {
            if d.name.trim().is_empty() {
                return Err(RoutingError::InvalidInput(
                    "destination name must not be blank".to_string(),
                ));
            }
            if !seen.insert(d.name.clone()) {
                return Err(RoutingError::InvalidInput(format!(
                    "duplicate destination '{}'",
                    d.name
                )));
            }
            if let Some(km) = d.distance_km {
                if !km.is_finite() || km < 0.0 {
                    return Err(RoutingError::InvalidInput(format!(
                        "distance for '{}' must be finite and non-negative, got {}",
                        d.name, km
                    )));
                }
            }
        }

        Ok(Self { destinations })
    }

    /// Builds a catalog of distance-less destinations from labels.
    pub fn from_names<I, N>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::new(names.into_iter().map(Destination::new).collect())
    }

    /// Zero-based position of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.destinations.iter().position(|d| d.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Returns true if every destination carries a distance.
    pub fn has_distances(&self) -> bool {
        self.destinations.iter().all(|d| d.distance_km.is_some())
    }
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self {
            destinations: DEFAULT_DESTINATIONS
                .iter()
                .map(|name| Destination::new(*name))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DestinationCatalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = DestinationCatalog::default();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.position("Location A"), Some(0));
        assert_eq!(catalog.position("Location C"), Some(2));
        assert_eq!(catalog.position("Location D"), Some(3));
        assert_eq!(catalog.position("Location E"), None);
        assert!(!catalog.has_distances());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            DestinationCatalog::new(Vec::new()),
            Err(RoutingError::NoDestinations)
        );
    }

    #[test]
    fn test_rejects_duplicates_and_blanks() {
        assert!(DestinationCatalog::from_names(["Depot", "Depot"]).is_err());
        assert!(DestinationCatalog::from_names(["Depot", "  "]).is_err());
    }

    #[test]
    fn test_rejects_bad_distance() {
        let result = DestinationCatalog::new(vec![Destination::new("Depot").with_distance(-2.0)]);
        assert!(matches!(result, Err(RoutingError::InvalidInput(_))));
    }

    #[test]
    fn test_lookup() {
        let catalog = DestinationCatalog::new(vec![
            Destination::new("North").with_distance(12.0),
            Destination::new("South").with_distance(3.5),
        ])
        .unwrap();

        assert!(catalog.has_distances());
        assert_eq!(catalog.get("South").and_then(|d| d.distance_km), Some(3.5));
        let names: Vec<_> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["North", "South"]);
    }
}
