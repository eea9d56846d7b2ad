//! Log output
//!
//! Installs the global `tracing` subscriber, with human-readable or JSON
//! formatted events.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
