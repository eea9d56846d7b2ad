//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OSRM and
//! straight-line directions providers, the channel-backed presenter,
//! configuration loading and log output.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DirectionsAppConfig, ProviderKind};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
