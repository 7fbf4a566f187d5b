//! Sources of real-time traffic and emission conditions.

use ecoroutify_config::RouteConfig;
use ecoroutify_core::{
    EmissionRange, EmissionRate, RealTimeData, RoutingError, TrafficLevel,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Supplies one sample of conditions per optimization run.
pub trait DataSource {
    /// Fetches the current conditions.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::DataUnavailable`] when no usable sample can be
    /// produced.
    fn fetch(&mut self) -> Result<RealTimeData, RoutingError>;
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn fetch(&mut self) -> Result<RealTimeData, RoutingError> {
        (**self).fetch()
    }
}

/// Simulated feed: uniform traffic level, uniform emission rate.
pub struct RandomDataSource {
    range: EmissionRange,
    rng: StdRng,
}

impl RandomDataSource {
    /// Creates a source seeded from the operating system.
    pub fn new(range: EmissionRange) -> Self {
        Self {
            range,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible source.
    pub fn with_seed(range: EmissionRange, seed: u64) -> Self {
        Self {
            range,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source for `config`, seeded when `random_seed` is set.
    pub fn from_config(config: &RouteConfig) -> Self {
        match config.random_seed {
            Some(seed) => Self::with_seed(config.emission, seed),
            None => Self::new(config.emission),
        }
    }
}

impl DataSource for RandomDataSource {
    fn fetch(&mut self) -> Result<RealTimeData, RoutingError> {
        self.range
            .validate()
            .map_err(|e| RoutingError::DataUnavailable(e.to_string()))?;

        let traffic = TrafficLevel::ALL[self.rng.random_range(0..TrafficLevel::ALL.len())];
        let rate = self.rng.random_range(self.range.min..=self.range.max);
        let emission_rate =
            EmissionRate::new(rate).map_err(|e| RoutingError::DataUnavailable(e.to_string()))?;

        Ok(RealTimeData::new(traffic, emission_rate))
    }
}

/// Returns the same conditions on every fetch.
///
/// Used for deterministic runs; see [`PinnedDataSource`] for partial pins.
#[derive(Debug, Clone, Copy)]
pub struct FixedDataSource {
    data: RealTimeData,
}

impl FixedDataSource {
    pub fn new(data: RealTimeData) -> Self {
        Self { data }
    }

    /// Convenience constructor validating the raw emission rate.
    pub fn from_parts(traffic: TrafficLevel, emission_rate: f64) -> Result<Self, RoutingError> {
        Ok(Self::new(RealTimeData::new(
            traffic,
            EmissionRate::new(emission_rate)?,
        )))
    }
}

impl DataSource for FixedDataSource {
    fn fetch(&mut self) -> Result<RealTimeData, RoutingError> {
        Ok(self.data)
    }
}

/// Wraps another source and pins some of its values.
///
/// Unpinned values come from the inner source. When everything is pinned
/// the inner source is not consulted.
pub struct PinnedDataSource<D> {
    inner: D,
    traffic: Option<TrafficLevel>,
    emission_rate: Option<EmissionRate>,
}

impl<D: DataSource> PinnedDataSource<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            traffic: None,
            emission_rate: None,
        }
    }

    pub fn with_traffic(mut self, traffic: TrafficLevel) -> Self {
        self.traffic = Some(traffic);
        self
    }

    pub fn with_emission_rate(mut self, emission_rate: EmissionRate) -> Self {
        self.emission_rate = Some(emission_rate);
        self
    }
}

impl<D: DataSource> DataSource for PinnedDataSource<D> {
    fn fetch(&mut self) -> Result<RealTimeData, RoutingError> {
        if let (Some(traffic), Some(emission_rate)) = (self.traffic, self.emission_rate) {
            debug!("All conditions pinned, skipping inner source");
            return Ok(RealTimeData::new(traffic, emission_rate));
        }

        let sampled = self.inner.fetch()?;
        Ok(RealTimeData::new(
            self.traffic.unwrap_or(sampled.traffic),
            self.emission_rate.unwrap_or(sampled.emission_rate),
        ))
    }
}
