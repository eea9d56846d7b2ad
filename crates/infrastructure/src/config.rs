//! Application configuration
//!
//! Loaded from built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `ROUTEPLANNER_`. Nested keys use a
//! double underscore, e.g. `ROUTEPLANNER_DIRECTIONS__BASE_URL`.

use std::fmt;
use std::path::Path;

use application::RoutePlannerConfig;
use integration_directions::DirectionsConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Prefix of configuration environment variables
const ENV_PREFIX: &str = "ROUTEPLANNER";

/// Which directions provider answers route requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// An OSRM server over HTTP
    #[default]
    Osrm,
    /// Offline straight-line approximation
    StraightLine,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Osrm => write!(f, "osrm"),
            Self::StraightLine => write!(f, "straight_line"),
        }
    }
}

/// Directions provider section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsAppConfig {
    /// Provider implementation
    #[serde(default)]
    pub provider: ProviderKind,

    /// Base URL of the OSRM server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ask the provider for alternative routes
    #[serde(default = "default_alternatives")]
    pub alternatives: bool,

    /// Route cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,
}

fn default_base_url() -> String {
    DirectionsConfig::default().base_url
}

fn default_timeout_secs() -> u64 {
    DirectionsConfig::default().timeout_secs
}

fn default_alternatives() -> bool {
    DirectionsConfig::default().alternatives
}

fn default_cache_ttl_minutes() -> u32 {
    DirectionsConfig::default().cache_ttl_minutes
}

impl Default for DirectionsAppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            alternatives: default_alternatives(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl DirectionsAppConfig {
    /// Settings for the OSRM client
    #[must_use]
    pub fn client_config(&self) -> DirectionsConfig {
        DirectionsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            alternatives: self.alternatives,
            cache_ttl_minutes: self.cache_ttl_minutes,
        }
    }

    /// Validate the configuration
    ///
    /// The HTTP settings are only checked when OSRM is the active provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        match self.provider {
            ProviderKind::Osrm => self.client_config().validate(),
            ProviderKind::StraightLine => Ok(()),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directions provider
    #[serde(default)]
    pub directions: DirectionsAppConfig,

    /// Route planner behavior
    #[serde(default)]
    pub planner: RoutePlannerConfig,

    /// Log output
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading the given file instead of `config.toml`
    ///
    /// An explicitly given file must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::build(path, environment)
    }

    fn build(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let app_config: Self = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        app_config
            .validate()
            .map_err(config::ConfigError::Message)?;
        Ok(app_config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section name.
    pub fn validate(&self) -> Result<(), String> {
        self.directions
            .validate()
            .map_err(|e| format!("directions: {e}"))?;
        self.planner
            .validate()
            .map_err(|e| format!("planner: {e}"))?;
        self.telemetry
            .validate()
            .map_err(|e| format!("telemetry: {e}"))?;
        Ok(())
    }
}
