//! Directions data models
//!
//! Typed representations of OSRM routes and routing profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// OSRM routing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsrmProfile {
    /// Car routing
    Driving,
    /// Pedestrian routing
    Foot,
}

impl OsrmProfile {
    /// Path segment used in the route service URL
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Foot => "foot",
        }
    }
}

impl fmt::Display for OsrmProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point of a route geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// One route between two points, as ranked by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Route geometry from origin to destination
    pub geometry: Vec<Waypoint>,
    /// Length in meters
    pub distance_meters: f64,
    /// Expected travel time in seconds
    pub duration_seconds: f64,
}
