//! Directions provider port
//!
//! Defines the interface for computing routes between two coordinates.
//! Adapters in the infrastructure layer implement this port on top of a
//! concrete routing backend.

use async_trait::async_trait;
use domain::{Coordinate, ProviderProfile, RouteCandidate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for directions/routing providers
///
/// The provider is opaque to the application: transport and protocol details
/// belong to the adapter. An empty candidate list means the provider answered
/// successfully but found no route.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Compute ranked route candidates between two points
    async fn compute_route(
        &self,
        source: Coordinate,
        destination: Coordinate,
        profile: ProviderProfile,
    ) -> Result<Vec<RouteCandidate>, ApplicationError>;

    /// Check if the provider is reachable
    async fn is_available(&self) -> bool;
}
