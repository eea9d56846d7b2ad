//! Application layer - Use cases and orchestration
//!
//! Contains the route planning coordinator, unit conversion, and the port
//! definitions that infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, RouteError};
pub use ports::*;
pub use services::*;
