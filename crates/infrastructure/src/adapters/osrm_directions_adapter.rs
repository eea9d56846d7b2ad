//! OSRM directions adapter - Implements DirectionsPort using integration_directions

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::DirectionsPort;
use async_trait::async_trait;
use domain::{Coordinate, ProviderProfile, RouteCandidate};
use integration_directions::{
    DirectionsClient, DirectionsConfig, OsrmDirectionsClient, OsrmProfile, Route,
};
use tracing::{debug, instrument, warn};

/// Adapter for route computation on an OSRM server
pub struct OsrmDirectionsAdapter {
    client: Arc<dyn DirectionsClient>,
}

impl std::fmt::Debug for OsrmDirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmDirectionsAdapter")
            .field("client", &"DirectionsClient")
            .finish()
    }
}

impl OsrmDirectionsAdapter {
    /// Create a new adapter around a directions client
    pub fn new(client: Arc<dyn DirectionsClient>) -> Self {
        Self { client }
    }

    /// Create an adapter with an HTTP client built from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn from_config(config: &DirectionsConfig) -> Result<Self, ApplicationError> {
        let client = OsrmDirectionsClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// OSRM profile serving a provider profile
    const fn osrm_profile(profile: ProviderProfile) -> OsrmProfile {
        match profile {
            ProviderProfile::Automobile => OsrmProfile::Driving,
            ProviderProfile::Walking => OsrmProfile::Foot,
        }
    }

    /// Convert an OSRM route into a candidate
    fn convert_route(route: Route) -> Result<RouteCandidate, ApplicationError> {
        let polyline = route
            .geometry
            .iter()
            .map(|point| {
                Coordinate::new(point.latitude, point.longitude).map_err(|_| {
                    ApplicationError::ExternalService(format!(
                        "Directions provider returned invalid point ({}, {})",
                        point.latitude, point.longitude
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteCandidate::new(
            polyline,
            route.distance_meters,
            route.duration_seconds,
        ))
    }
}

#[async_trait]
impl DirectionsPort for OsrmDirectionsAdapter {
    #[instrument(skip(self))]
    async fn compute_route(
        &self,
        source: Coordinate,
        destination: Coordinate,
        profile: ProviderProfile,
    ) -> Result<Vec<RouteCandidate>, ApplicationError> {
        let routes = self
            .client
            .route(
                Self::osrm_profile(profile),
                source.latitude(),
                source.longitude(),
                destination.latitude(),
                destination.longitude(),
            )
            .await
            .map_err(|e| {
                warn!(error = %e, retryable = e.is_retryable(), "Directions lookup failed");
                ApplicationError::ExternalService(e.to_string())
            })?;

        debug!(count = routes.len(), "Directions received");
        routes.into_iter().map(Self::convert_route).collect()
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
