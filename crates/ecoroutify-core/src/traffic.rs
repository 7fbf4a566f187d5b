//! Traffic and emission conditions sampled at optimization time.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RoutingError};

/// Coarse congestion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// All levels, in increasing congestion order.
    pub const ALL: [TrafficLevel; 3] = [
        TrafficLevel::Light,
        TrafficLevel::Moderate,
        TrafficLevel::Heavy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::Light => "light",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy => "heavy",
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficLevel {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(TrafficLevel::Light),
            "moderate" => Ok(TrafficLevel::Moderate),
            "heavy" => Ok(TrafficLevel::Heavy),
            other => Err(RoutingError::InvalidInput(format!(
                "unknown traffic level '{}'",
                other
            ))),
        }
    }
}

/// Multiplier applied to a route's cost for each traffic level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrafficWeights {
    pub light: f64,
    pub moderate: f64,
    pub heavy: f64,
}

impl Default for TrafficWeights {
    fn default() -> Self {
        Self {
            light: 1.0,
            moderate: 1.5,
            heavy: 2.0,
        }
    }
}

impl TrafficWeights {
    /// Returns the weight for the given level.
    #[inline]
    pub fn weight(&self, level: TrafficLevel) -> f64 {
        match level {
            TrafficLevel::Light => self.light,
            TrafficLevel::Moderate => self.moderate,
            TrafficLevel::Heavy => self.heavy,
        }
    }

    /// Checks every weight is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for level in TrafficLevel::ALL {
            let w = self.weight(level);
            if !w.is_finite() || w < 0.0 {
                return Err(RoutingError::InvalidInput(format!(
                    "traffic weight for '{}' must be finite and non-negative, got {}",
                    level, w
                )));
            }
        }
        Ok(())
    }
}

/// CO2 output per distance unit (kg/km).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EmissionRate(f64);

impl EmissionRate {
    /// Creates an emission rate, rejecting NaN, infinities and negatives.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RoutingError::InvalidInput(format!(
                "emission rate must be finite and non-negative, got {}",
                value
            )));
        }
        Ok(EmissionRate(value))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for EmissionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range emission rates are sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmissionRange {
    pub min: f64,
    pub max: f64,
}

impl Default for EmissionRange {
    fn default() -> Self {
        Self { min: 0.2, max: 0.5 }
    }
}

impl EmissionRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Requires `0 <= min <= max` with both bounds finite.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(RoutingError::InvalidInput(format!(
                "emission range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min < 0.0 || self.min > self.max {
            return Err(RoutingError::InvalidInput(format!(
                "emission range requires 0 <= min <= max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, rate: EmissionRate) -> bool {
        rate.value() >= self.min && rate.value() <= self.max
    }
}

/// One sample of real-time conditions, shared by every destination in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealTimeData {
    pub traffic: TrafficLevel,
    pub emission_rate: EmissionRate,
}

impl RealTimeData {
    pub fn new(traffic: TrafficLevel, emission_rate: EmissionRate) -> Self {
        Self {
            traffic,
            emission_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_level_parse() {
        assert_eq!("light".parse::<TrafficLevel>().unwrap(), TrafficLevel::Light);
        assert_eq!(
            " Moderate ".parse::<TrafficLevel>().unwrap(),
            TrafficLevel::Moderate
        );
        assert_eq!("HEAVY".parse::<TrafficLevel>().unwrap(), TrafficLevel::Heavy);
        assert!(matches!(
            "gridlock".parse::<TrafficLevel>(),
            Err(RoutingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_traffic_level_display_round_trips() {
        for level in TrafficLevel::ALL {
            assert_eq!(level.to_string().parse::<TrafficLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_default_weights() {
        let weights = TrafficWeights::default();
        assert_eq!(weights.weight(TrafficLevel::Light), 1.0);
        assert_eq!(weights.weight(TrafficLevel::Moderate), 1.5);
        assert_eq!(weights.weight(TrafficLevel::Heavy), 2.0);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_weights_reject_negative() {
        let weights = TrafficWeights {
            heavy: -1.0,
            ..TrafficWeights::default()
        };
        assert!(weights.validate().is_err());

        let weights = TrafficWeights {
            light: f64::NAN,
            ..TrafficWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_emission_rate_validation() {
        assert_eq!(EmissionRate::new(0.3).unwrap().value(), 0.3);
        assert!(EmissionRate::new(0.0).is_ok());
        assert!(EmissionRate::new(-0.1).is_err());
        assert!(EmissionRate::new(f64::INFINITY).is_err());
        assert!(EmissionRate::new(f64::NAN).is_err());
    }

    #[test]
    fn test_emission_range() {
        let range = EmissionRange::default();
        assert_eq!(range, EmissionRange { min: 0.2, max: 0.5 });
        assert!(range.contains(EmissionRate::new(0.2).unwrap()));
        assert!(range.contains(EmissionRate::new(0.5).unwrap()));
        assert!(!range.contains(EmissionRate::new(0.51).unwrap()));

        assert!(EmissionRange::new(0.4, 0.4).is_ok());
        assert!(EmissionRange::new(0.5, 0.2).is_err());
        assert!(EmissionRange::new(-0.1, 0.2).is_err());
        assert!(EmissionRange::new(0.1, f64::INFINITY).is_err());
    }
}
