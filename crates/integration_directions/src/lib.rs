//! Directions integration for the route planner
//!
//! Computes road and footpath routes between two points via the
//! [OSRM](https://project-osrm.org) HTTP route service.
//!
//! # Architecture
//!
//! [`DirectionsClient`] defines the interface for route lookups and health
//! probes, implemented by [`OsrmDirectionsClient`]. Responses are cached per
//! profile and endpoint pair for a configurable time.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_directions::{DirectionsConfig, OsrmDirectionsClient, OsrmProfile};
//!
//! let config = DirectionsConfig::default();
//! let client = OsrmDirectionsClient::new(&config)?;
//!
//! let routes = client.route(
//!     OsrmProfile::Driving,
//!     52.520, 13.405, // Berlin
//!     52.391, 13.065, // Potsdam
//! ).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, OsrmDirectionsClient};
pub use config::DirectionsConfig;
pub use error::DirectionsError;
pub use models::{OsrmProfile, Route, Waypoint};
