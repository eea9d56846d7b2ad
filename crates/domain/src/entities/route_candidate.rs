//! Raw route candidate returned by a directions provider

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// One ranked route alternative as reported by the directions provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// Path of the route, in travel order
    pub polyline: Vec<Coordinate>,
    /// Route length in meters
    pub distance_meters: f64,
    /// Provider's travel time estimate for its profile, in seconds
    pub nominal_travel_time_seconds: f64,
}

impl RouteCandidate {
    /// Create a new candidate
    #[must_use]
    pub const fn new(
        polyline: Vec<Coordinate>,
        distance_meters: f64,
        nominal_travel_time_seconds: f64,
    ) -> Self {
        Self {
            polyline,
            distance_meters,
            nominal_travel_time_seconds,
        }
    }
}
