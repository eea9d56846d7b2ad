//! Route result entity published to the presentation sink

use serde::{Deserialize, Serialize};

use crate::value_objects::{BoundingBox, Coordinate, RequestId, TransportMode};

/// A post-processed route ready for display
///
/// Created once per accepted provider candidate and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    request_id: RequestId,
    polyline: Vec<Coordinate>,
    distance_text: String,
    travel_time_text: String,
    mode: TransportMode,
    distance_meters: f64,
    travel_time_seconds: f64,
}

impl RouteResult {
    /// Create a new route result
    #[must_use]
    pub const fn new(
        request_id: RequestId,
        polyline: Vec<Coordinate>,
        distance_text: String,
        travel_time_text: String,
        mode: TransportMode,
        distance_meters: f64,
        travel_time_seconds: f64,
    ) -> Self {
        Self {
            request_id,
            polyline,
            distance_text,
            travel_time_text,
            mode,
            distance_meters,
            travel_time_seconds,
        }
    }

    /// Id of the request this result answers
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Route path to draw
    #[must_use]
    pub fn polyline(&self) -> &[Coordinate] {
        &self.polyline
    }

    /// Distance in miles and kilometers, e.g. `"1.00 miles (1.61 km)"`
    #[must_use]
    pub fn distance_text(&self) -> &str {
        &self.distance_text
    }

    /// Travel time in minutes, e.g. `"12.50 minutes"`
    #[must_use]
    pub fn travel_time_text(&self) -> &str {
        &self.travel_time_text
    }

    /// Mode the user asked for (not the provider profile)
    #[must_use]
    pub const fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Route length in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Travel time after the mode correction, in seconds
    #[must_use]
    pub const fn travel_time_seconds(&self) -> f64 {
        self.travel_time_seconds
    }

    /// Viewport bounds to frame the route
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(&self.polyline)
    }
}
