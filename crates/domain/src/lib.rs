//! Domain layer for the route planner
//!
//! Contains the value objects and entities that describe a route request and
//! its outcome. This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
