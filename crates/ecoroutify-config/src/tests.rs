//! Tests for route configuration.

use std::io::Write;

use super::*;

#[test]
fn test_defaults() {
    let config = RouteConfig::default();
    assert_eq!(config.random_seed, None);
    assert_eq!(config.scorer, ScorerKind::Position);
    assert_eq!(config.emission, EmissionRange { min: 0.2, max: 0.5 });
    assert_eq!(config.traffic_weights, TrafficWeights::default());

    let names: Vec<_> = config.destinations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Location A", "Location B", "Location C", "Location D"]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = RouteConfig::from_toml_str("").unwrap();
    assert_eq!(config, RouteConfig::default());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        scorer = "distance"

        [emission]
        min = 0.25
        max = 0.4

        [traffic_weights]
        heavy = 3.0

        [[destinations]]
        name = "Warehouse"
        distance_km = 8.0

        [[destinations]]
        name = "Harbour"
        distance_km = 2.5
    "#;

    let config = RouteConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.scorer, ScorerKind::Distance);
    assert_eq!(config.emission, EmissionRange { min: 0.25, max: 0.4 });
    assert_eq!(config.traffic_weights.light, 1.0);
    assert_eq!(config.traffic_weights.moderate, 1.5);
    assert_eq!(config.traffic_weights.heavy, 3.0);
    assert_eq!(config.destinations.len(), 2);
    assert_eq!(config.destinations[1].distance_km, Some(2.5));
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        scorer: position
        emission:
          min: 0.3
          max: 0.3
        destinations:
          - name: Alpha
          - name: Beta
    "#;

    let config = RouteConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.scorer, ScorerKind::Position);
    assert_eq!(config.emission.min, 0.3);
    assert_eq!(config.destinations[0].name, "Alpha");
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_unknown_scorer() {
    let result = RouteConfig::from_toml_str(r#"scorer = "fastest""#);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_builder() {
    let config = RouteConfig::new()
        .with_random_seed(123)
        .with_scorer(ScorerKind::Distance)
        .with_emission_range(0.1, 0.2)
        .with_destinations(vec![
            Destination::new("Near").with_distance(1.0),
            Destination::new("Far").with_distance(9.0),
        ]);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.scorer, ScorerKind::Distance);
    assert_eq!(config.catalog().unwrap().len(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_empty_catalog() {
    let config = RouteConfig::new().with_destinations(Vec::new());
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_duplicate_destination() {
    let config = RouteConfig::new().with_destinations(vec![
        Destination::new("Depot"),
        Destination::new("Depot"),
    ]);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_emission_range() {
    let config = RouteConfig::new().with_emission_range(0.5, 0.2);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_weights() {
    let config = RouteConfig::new().with_traffic_weights(TrafficWeights {
        light: -1.0,
        ..TrafficWeights::default()
    });
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_distance_scorer_needs_distances() {
    let config = RouteConfig::new().with_scorer(ScorerKind::Distance);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Location A"));
}

#[test]
fn test_scorer_kind_from_str() {
    assert_eq!("Position".parse::<ScorerKind>().unwrap(), ScorerKind::Position);
    assert_eq!("distance".parse::<ScorerKind>().unwrap(), ScorerKind::Distance);
    assert!("cheapest".parse::<ScorerKind>().is_err());
}

#[test]
fn test_from_file_by_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml_file, "random_seed = 5").unwrap();
    let config = RouteConfig::from_file(toml_file.path()).unwrap();
    assert_eq!(config.random_seed, Some(5));

    let mut yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(yaml_file, "random_seed: 9").unwrap();
    let config = RouteConfig::from_file(yaml_file.path()).unwrap();
    assert_eq!(config.random_seed, Some(9));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = RouteConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
    assert_eq!(result.unwrap_or_default(), RouteConfig::default());
}
