//! OSRM directions client
//!
//! Computes routes with the OSRM
//! [route service](https://project-osrm.org/docs/v5.24.0/api/#route-service).

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::{OsrmProfile, Route, Waypoint};

/// Response code for a successful route lookup
const CODE_OK: &str = "Ok";

/// Response code when the endpoints are not connected
const CODE_NO_ROUTE: &str = "NoRoute";

/// Trait for directions service clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Compute routes between two coordinate pairs
    ///
    /// Routes come back in the server's ranking order. An empty list means
    /// the server found no connection between the points.
    async fn route(
        &self,
        profile: OsrmProfile,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Vec<Route>, DirectionsError>;

    /// Check if the directions service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Directions client for an OSRM server
#[derive(Debug)]
pub struct OsrmDirectionsClient {
    client: Client,
    config: DirectionsConfig,
    cache: Option<Cache<String, Vec<Route>>>,
}

impl OsrmDirectionsClient {
    /// Create a new OSRM directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        config
            .validate()
            .map_err(DirectionsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("RoutePlanner/0.1")
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(u64::from(config.cache_ttl_minutes) * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    /// Path below the base URL for a route lookup
    ///
    /// OSRM expects `lon,lat` pairs separated by `;`.
    fn route_path(
        profile: OsrmProfile,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> String {
        format!("/route/v1/{profile}/{from_lon},{from_lat};{to_lon},{to_lat}")
    }

    fn query_params(&self) -> [(&'static str, &'static str); 4] {
        [
            ("overview", "full"),
            ("geometries", "geojson"),
            (
                "alternatives",
                if self.config.alternatives {
                    "true"
                } else {
                    "false"
                },
            ),
            ("steps", "false"),
        ]
    }

    async fn cached(&self, path: &str) -> Option<Vec<Route>> {
        match &self.cache {
            Some(cache) => cache.get(path).await,
            None => None,
        }
    }

    fn map_send_error(&self, e: &reqwest::Error) -> DirectionsError {
        if e.is_timeout() {
            DirectionsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            DirectionsError::ConnectionFailed(e.to_string())
        }
    }

    /// Turn an HTTP response into routes
    ///
    /// OSRM reports routing failures such as `NoRoute` with a 4xx status and a
    /// regular JSON body, so error statuses are still parsed when possible.
    async fn read_response(response: Response) -> Result<Vec<Route>, DirectionsError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        if status.is_success() {
            return Self::parse_route_response(&body);
        }

        match serde_json::from_str::<RawRouteResponse>(&body) {
            Ok(raw) => Self::convert_response(raw),
            Err(_) => Err(DirectionsError::RequestFailed(format!("HTTP {status}"))),
        }
    }

    /// Parse the raw OSRM JSON route response into typed routes
    fn parse_route_response(body: &str) -> Result<Vec<Route>, DirectionsError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;
        Self::convert_response(raw)
    }

    fn convert_response(raw: RawRouteResponse) -> Result<Vec<Route>, DirectionsError> {
        match raw.code.as_str() {
            CODE_OK => Ok(raw.routes.into_iter().map(Self::convert_route).collect()),
            CODE_NO_ROUTE => Ok(Vec::new()),
            _ => Err(DirectionsError::Api {
                code: raw.code,
                message: raw.message.unwrap_or_default(),
            }),
        }
    }

    /// Convert a raw route; GeoJSON positions are `[lon, lat]`
    fn convert_route(raw: RawRoute) -> Route {
        let geometry = raw
            .geometry
            .coordinates
            .into_iter()
            .map(|[longitude, latitude]| Waypoint {
                latitude,
                longitude,
            })
            .collect();

        Route {
            geometry,
            distance_meters: raw.distance,
            duration_seconds: raw.duration,
        }
    }
}

#[async_trait]
impl DirectionsClient for OsrmDirectionsClient {
    #[instrument(skip(self), fields(from = %format!("{from_lat},{from_lon}"), to = %format!("{to_lat},{to_lon}")))]
    async fn route(
        &self,
        profile: OsrmProfile,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<Vec<Route>, DirectionsError> {
        let path = Self::route_path(profile, from_lat, from_lon, to_lat, to_lon);

        if let Some(routes) = self.cached(&path).await {
            debug!(%path, "Route cache hit");
            return Ok(routes);
        }

        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        debug!(?url, "Requesting route");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params())
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let routes = Self::read_response(response).await?;

        if routes.is_empty() {
            warn!("No route found");
        } else if let Some(cache) = &self.cache {
            cache.insert(path, routes.clone()).await;
        }

        debug!(count = routes.len(), "Routes found");
        Ok(routes)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!(
            "{}/nearest/v1/driving/13.388860,52.517037",
            self.config.base_url.trim_end_matches('/')
        );
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Directions health probe failed");
                false
            },
        }
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    distance: f64,
    duration: f64,
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Vec<[f64; 2]>,
}
