//! Fixtures shared by the solver tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use ecoroutify_core::{
    Destination, DestinationCatalog, EmissionRate, RealTimeData, RoutingError, TrafficLevel,
};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::data_source::DataSource;

/// Builds conditions from raw parts.
pub fn conditions(traffic: TrafficLevel, emission_rate: f64) -> RealTimeData {
    RealTimeData::new(traffic, EmissionRate::new(emission_rate).unwrap())
}

/// Three destinations with distances; "Harbour" is the shortest.
pub fn distance_catalog() -> DestinationCatalog {
    DestinationCatalog::new(vec![
        Destination::new("Warehouse").with_distance(8.0),
        Destination::new("Harbour").with_distance(2.0),
        Destination::new("Airport").with_distance(15.5),
    ])
    .unwrap()
}

/// A feed that is always down.
pub struct FailingDataSource;

impl DataSource for FailingDataSource {
    fn fetch(&mut self) -> Result<RealTimeData, RoutingError> {
        Err(RoutingError::DataUnavailable("feed offline".to_string()))
    }
}

/// One recorded tracing event.
#[derive(Debug, Clone, Default)]
pub struct CapturedEvent {
    pub message: String,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for CapturedEvent {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }
}

/// Layer that keeps every event for later inspection.
#[derive(Clone, Default)]
pub struct CapturedEvents(Arc<Mutex<Vec<CapturedEvent>>>);

impl CapturedEvents {
    pub fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.message == message)
            .cloned()
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent::default();
        event.record(&mut captured);
        self.0.lock().unwrap().push(captured);
    }
}
