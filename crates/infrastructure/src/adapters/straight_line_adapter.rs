//! Straight-line directions adapter - Offline DirectionsPort implementation
//!
//! Answers every request with the direct connection between the two points,
//! timed at a fixed average speed per profile. Useful without network access
//! and as a stand-in while an OSRM server is unavailable.

use application::error::ApplicationError;
use application::ports::DirectionsPort;
use async_trait::async_trait;
use domain::{Coordinate, ProviderProfile, RouteCandidate};
use tracing::{debug, instrument};

/// Average automobile speed in meters per second (about 48 km/h)
const AUTOMOBILE_SPEED_MPS: f64 = 13.4;

/// Average walking speed in meters per second (about 5 km/h)
const WALKING_SPEED_MPS: f64 = 1.4;

/// Directions provider that connects the endpoints with a straight line
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLineDirectionsAdapter;

impl StraightLineDirectionsAdapter {
    /// Create a new straight-line adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn speed_mps(profile: ProviderProfile) -> f64 {
        match profile {
            ProviderProfile::Automobile => AUTOMOBILE_SPEED_MPS,
            ProviderProfile::Walking => WALKING_SPEED_MPS,
        }
    }
}

#[async_trait]
impl DirectionsPort for StraightLineDirectionsAdapter {
    #[instrument(skip(self))]
    async fn compute_route(
        &self,
        source: Coordinate,
        destination: Coordinate,
        profile: ProviderProfile,
    ) -> Result<Vec<RouteCandidate>, ApplicationError> {
        let distance_meters = source.distance_km(&destination) * 1000.0;
        let seconds = distance_meters / Self::speed_mps(profile);

        debug!(distance_meters, seconds, "Straight-line route computed");
        Ok(vec![RouteCandidate::new(
            vec![source, destination],
            distance_meters,
            seconds,
        )])
    }

    async fn is_available(&self) -> bool {
        true
    }
}
