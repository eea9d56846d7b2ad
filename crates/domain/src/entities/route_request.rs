//! Route request entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, ProviderProfile, RequestId, TransportMode};

/// A user's request for a route between two points
///
/// The id is assigned by the route planner at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    id: RequestId,
    source: Coordinate,
    destination: Coordinate,
    mode: TransportMode,
}

impl RouteRequest {
    /// Create a new route request
    #[must_use]
    pub const fn new(
        id: RequestId,
        source: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Self {
        Self {
            id,
            source,
            destination,
            mode,
        }
    }

    /// Get the request id
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Get the starting point
    #[must_use]
    pub const fn source(&self) -> Coordinate {
        self.source
    }

    /// Get the end point
    #[must_use]
    pub const fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Get the requested transport mode
    #[must_use]
    pub const fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Provider profile to request directions with
    #[must_use]
    pub const fn profile(&self) -> ProviderProfile {
        self.mode.profile()
    }
}
