//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod route_presenter_port;

pub use directions_port::DirectionsPort;
#[cfg(test)]
pub use directions_port::MockDirectionsPort;
#[cfg(test)]
pub use route_presenter_port::MockRoutePresenterPort;
pub use route_presenter_port::RoutePresenterPort;
